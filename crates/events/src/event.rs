use crate::category::EventCategory;

/// A domain event that can be routed through a bus.
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - **categorized** (the bus routes on [`EventCategory`])
/// - **transient** (nothing here is persisted)
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "order.placed").
    fn event_type(&self) -> &'static str;

    /// Category the event is published under.
    fn category(&self) -> EventCategory;
}
