//! In-memory event bus.

use std::sync::Mutex;

use crate::bus::{BusError, EventBus, Handler, PublishReceipt};
use crate::category::EventCategory;

struct Registry<M> {
    /// One ordered subscriber list per category, indexed by `EventCategory::index`.
    handlers: [Vec<Handler<M>>; EventCategory::COUNT],
    published: u64,
}

/// In-memory, synchronous pub/sub bus.
///
/// - No IO / no async
/// - Every category is registered (empty) at construction
/// - The registry lock is held only to append or snapshot subscribers, never while a
///   handler runs, so handlers may subscribe or publish re-entrantly
pub struct InMemoryEventBus<M> {
    registry: Mutex<Registry<M>>,
}

impl<M> InMemoryEventBus<M> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of handlers currently subscribed to `category`.
    ///
    /// Still readable after the registry lock is poisoned, when `publish` refuses with
    /// [`BusError::Poisoned`].
    pub fn subscriber_count(&self, category: EventCategory) -> usize {
        let registry = self
            .registry
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        registry.handlers[category.index()].len()
    }
}

impl<M> Default for InMemoryEventBus<M> {
    fn default() -> Self {
        Self {
            registry: Mutex::new(Registry {
                handlers: std::array::from_fn(|_| Vec::new()),
                published: 0,
            }),
        }
    }
}

impl<M> core::fmt::Debug for InMemoryEventBus<M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut dbg = f.debug_struct("InMemoryEventBus");
        for category in EventCategory::ALL {
            dbg.field(category.as_str(), &self.subscriber_count(category));
        }
        dbg.finish()
    }
}

impl<M> EventBus<M> for InMemoryEventBus<M> {
    fn subscribe(&self, category: EventCategory, handler: Handler<M>) {
        // A poisoned registry keeps serving publishes with the handlers it already has;
        // the new handler is dropped.
        match self.registry.lock() {
            Ok(mut registry) => {
                registry.handlers[category.index()].push(handler);
                tracing::debug!(
                    %category,
                    subscribers = registry.handlers[category.index()].len(),
                    "handler subscribed"
                );
            }
            Err(_) => tracing::warn!(%category, "subscribe ignored: registry lock poisoned"),
        }
    }

    fn publish(&self, category: EventCategory, message: &M) -> Result<PublishReceipt, BusError> {
        let (handlers, sequence) = {
            let mut registry = self.registry.lock().map_err(|_| BusError::Poisoned)?;
            registry.published += 1;
            (
                registry.handlers[category.index()].clone(),
                registry.published,
            )
        };

        tracing::debug!(%category, sequence, handlers = handlers.len(), "publishing event");

        for handler in &handlers {
            handler(message);
        }

        Ok(PublishReceipt {
            category,
            sequence,
            delivered: handlers.len(),
        })
    }
}
