//! Order lifecycle orchestration: validation, event publication, notification.
//!
//! Orders are not stored. Each [`OrderService`] call validates its input, publishes one
//! [`OrderEvent`] on the injected bus, and (for placements) notifies through the injected
//! [`NotificationStrategy`].

pub mod event;
pub mod notifier;
pub mod service;

pub use event::OrderEvent;
pub use notifier::{Channel, EmailNotifier, NotificationStrategy, SlackNotifier, SmsNotifier};
pub use service::{OrderError, OrderService};
