use serde::{Deserialize, Serialize};

/// Closed set of event categories a bus routes on.
///
/// Buses size their registries from [`EventCategory::ALL`], so every category always has
/// a (possibly empty) subscriber list.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventCategory {
    OrderPlaced,
    OrderShipped,
    OrderCancelled,
}

impl EventCategory {
    pub const COUNT: usize = 3;

    pub const ALL: [EventCategory; Self::COUNT] = [
        EventCategory::OrderPlaced,
        EventCategory::OrderShipped,
        EventCategory::OrderCancelled,
    ];

    /// Dense index in `0..COUNT`, matching the position in [`EventCategory::ALL`].
    pub const fn index(self) -> usize {
        match self {
            EventCategory::OrderPlaced => 0,
            EventCategory::OrderShipped => 1,
            EventCategory::OrderCancelled => 2,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            EventCategory::OrderPlaced => "ORDER_PLACED",
            EventCategory::OrderShipped => "ORDER_SHIPPED",
            EventCategory::OrderCancelled => "ORDER_CANCELLED",
        }
    }
}

impl core::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
