//! Notification delivery strategies.
//!
//! A strategy is chosen when an [`crate::OrderService`] is built and never looked up at
//! call time. The bundled channels deliver to the console; a real deployment would put a
//! mail/SMS/chat client behind the same trait.

use core::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use switchyard_core::DomainError;

/// Delivery channel for order notifications.
pub trait NotificationStrategy {
    fn send(&self, message: &str);
}

impl<N> NotificationStrategy for &N
where
    N: NotificationStrategy + ?Sized,
{
    fn send(&self, message: &str) {
        (**self).send(message)
    }
}

impl<N> NotificationStrategy for Box<N>
where
    N: NotificationStrategy + ?Sized,
{
    fn send(&self, message: &str) {
        (**self).send(message)
    }
}

impl<N> NotificationStrategy for Arc<N>
where
    N: NotificationStrategy + ?Sized,
{
    fn send(&self, message: &str) {
        (**self).send(message)
    }
}

fn deliver(channel: Channel, message: &str) {
    println!("[{}] Sending: {message}", channel.tag());
    tracing::info!(%channel, "notification sent");
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct EmailNotifier;

impl NotificationStrategy for EmailNotifier {
    fn send(&self, message: &str) {
        deliver(Channel::Email, message)
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct SmsNotifier;

impl NotificationStrategy for SmsNotifier {
    fn send(&self, message: &str) {
        deliver(Channel::Sms, message)
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct SlackNotifier;

impl NotificationStrategy for SlackNotifier {
    fn send(&self, message: &str) {
        deliver(Channel::Slack, message)
    }
}

/// Bundled channels, selectable from configuration.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Email,
    Sms,
    Slack,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Email, Channel::Sms, Channel::Slack];

    pub const fn as_str(self) -> &'static str {
        match self {
            Channel::Email => "email",
            Channel::Sms => "sms",
            Channel::Slack => "slack",
        }
    }

    /// Console prefix, e.g. `EMAIL`.
    pub const fn tag(self) -> &'static str {
        match self {
            Channel::Email => "EMAIL",
            Channel::Sms => "SMS",
            Channel::Slack => "SLACK",
        }
    }

    pub fn notifier(self) -> Box<dyn NotificationStrategy + Send + Sync> {
        match self {
            Channel::Email => Box::new(EmailNotifier),
            Channel::Sms => Box::new(SmsNotifier),
            Channel::Slack => Box::new(SlackNotifier),
        }
    }
}

impl core::fmt::Display for Channel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Channel::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "unknown notification channel `{wanted}` (expected email, sms or slack)"
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Inbox(Mutex<Vec<String>>);

    impl NotificationStrategy for Inbox {
        fn send(&self, message: &str) {
            self.0.lock().unwrap().push(message.to_string());
        }
    }

    #[test]
    fn channel_parsing_is_case_insensitive() {
        assert_eq!("email".parse::<Channel>().unwrap(), Channel::Email);
        assert_eq!(" SMS ".parse::<Channel>().unwrap(), Channel::Sms);
        assert_eq!("Slack".parse::<Channel>().unwrap(), Channel::Slack);
    }

    #[test]
    fn unknown_channel_is_a_validation_error() {
        let err = "pigeon".parse::<Channel>().unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("pigeon")));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for channel in Channel::ALL {
            assert_eq!(channel.to_string().parse::<Channel>().unwrap(), channel);
        }
    }

    #[test]
    fn wrappers_forward_to_the_inner_strategy() {
        let inbox = Arc::new(Inbox::default());

        (&*inbox).send("by ref");
        Arc::clone(&inbox).send("by arc");
        let boxed: Box<dyn NotificationStrategy> = Box::new(Arc::clone(&inbox));
        boxed.send("by box");

        assert_eq!(*inbox.0.lock().unwrap(), vec!["by ref", "by arc", "by box"]);
    }
}
