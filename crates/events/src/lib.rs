//! Event categories, the event contract, and in-process publish/subscribe.

pub mod bus;
pub mod category;
pub mod event;
pub mod in_memory_bus;

pub use bus::{BusError, EventBus, Handler, PublishReceipt, handler};
pub use category::EventCategory;
pub use event::Event;
pub use in_memory_bus::InMemoryEventBus;
