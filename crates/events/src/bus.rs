//! Event publishing/subscription abstraction (mechanics only).
//!
//! This module provides the **event bus pattern**: handlers register interest in an
//! [`EventCategory`] and are invoked when a message is published under it.
//!
//! ## Delivery Semantics
//!
//! - **Synchronous**: `publish()` runs every handler on the caller's thread and returns
//!   only after the last one completes.
//! - **Ordered**: handlers of a category run in subscription order.
//! - **Shared payload**: every handler sees the same message by reference.
//! - **Snapshot**: the subscriber list is fixed when a publish starts. A handler added
//!   while a publish is in flight (even by one of its handlers) sees the next publish.
//! - **No isolation**: a panicking handler unwinds through `publish()`; later handlers of
//!   that publish do not run.
//!
//! There is no unsubscribe, no priority, no once-only delivery and no wildcard category.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::category::EventCategory;

/// A subscribed callback.
pub type Handler<M> = Arc<dyn Fn(&M) + Send + Sync>;

/// Box a closure as a [`Handler`].
pub fn handler<M, F>(f: F) -> Handler<M>
where
    F: Fn(&M) + Send + Sync + 'static,
{
    Arc::new(f)
}

/// What a completed publish did.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct PublishReceipt {
    pub category: EventCategory,
    /// Bus-wide publish counter, starting at 1.
    pub sequence: u64,
    /// Number of handlers invoked.
    pub delivered: usize,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BusError {
    /// The subscriber registry lock was poisoned.
    #[error("event bus registry lock poisoned")]
    Poisoned,
}

/// Domain-agnostic, category-routed event bus.
///
/// ## Architecture Role
///
/// ```text
/// OrderService ── publish(category, payload) ──▶ EventBus ──▶ handler 1
///                                                        ├──▶ handler 2
///                                                        └──▶ ...
/// ```
///
/// Services hold a bus by value; sharing one bus between services is done through the
/// blanket impls for `&B` and `Arc<B>`.
///
/// ## Thread Safety
///
/// The trait requires `Send + Sync`. Publishing is still synchronous: concurrent
/// publishers are not ordered relative to each other.
pub trait EventBus<M>: Send + Sync {
    /// Append `handler` to the category's subscriber list.
    fn subscribe(&self, category: EventCategory, handler: Handler<M>);

    /// Invoke every handler currently subscribed to `category`, in order.
    fn publish(&self, category: EventCategory, message: &M) -> Result<PublishReceipt, BusError>;
}

impl<M, B> EventBus<M> for Arc<B>
where
    B: EventBus<M> + ?Sized,
{
    fn subscribe(&self, category: EventCategory, handler: Handler<M>) {
        (**self).subscribe(category, handler)
    }

    fn publish(&self, category: EventCategory, message: &M) -> Result<PublishReceipt, BusError> {
        (**self).publish(category, message)
    }
}

impl<M, B> EventBus<M> for &B
where
    B: EventBus<M> + ?Sized,
{
    fn subscribe(&self, category: EventCategory, handler: Handler<M>) {
        (**self).subscribe(category, handler)
    }

    fn publish(&self, category: EventCategory, message: &M) -> Result<PublishReceipt, BusError> {
        (**self).publish(category, message)
    }
}
