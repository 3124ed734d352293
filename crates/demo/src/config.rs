//! Environment-driven configuration.

use anyhow::Context;

use switchyard_observability::LogFormat;
use switchyard_orders::Channel;

pub const LOG_FORMAT: &str = switchyard_observability::LOG_FORMAT_ENV;
pub const PRIMARY_CHANNEL: &str = "SWITCHYARD_PRIMARY_CHANNEL";
pub const SECONDARY_CHANNEL: &str = "SWITCHYARD_SECONDARY_CHANNEL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub log_format: LogFormat,
    /// Channel of the first order service.
    pub primary_channel: Channel,
    /// Channel of the second order service, sharing the first one's bus.
    pub secondary_channel: Channel,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Json,
            primary_channel: Channel::Email,
            secondary_channel: Channel::Sms,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset keys take their defaults; set but
    /// unparseable keys are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let log_format = match lookup(LOG_FORMAT) {
            Some(raw) => raw
                .parse::<LogFormat>()
                .with_context(|| format!("invalid {LOG_FORMAT}"))?,
            None => defaults.log_format,
        };
        let primary_channel = match lookup(PRIMARY_CHANNEL) {
            Some(raw) => raw
                .parse::<Channel>()
                .with_context(|| format!("invalid {PRIMARY_CHANNEL}"))?,
            None => defaults.primary_channel,
        };
        let secondary_channel = match lookup(SECONDARY_CHANNEL) {
            Some(raw) => raw
                .parse::<Channel>()
                .with_context(|| format!("invalid {SECONDARY_CHANNEL}"))?,
            None => defaults.secondary_channel,
        };

        Ok(Self {
            log_format,
            primary_channel,
            secondary_channel,
        })
    }
}
