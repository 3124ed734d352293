//! Order service (application-level orchestration).
//!
//! ```text
//! place_order(id, amount)
//!   ↓
//! 1. Validate amount (finite, > 0), else reject: nothing published, nobody notified
//!   ↓
//! 2. Publish ORDER_PLACED on the bus (handlers run synchronously, in order)
//!   ↓
//! 3. Notify through the injected strategy
//!
//! ship_order(id)   → publish ORDER_SHIPPED
//! cancel_order(id) → publish ORDER_CANCELLED
//! ```
//!
//! Shipping and cancelling carry no precondition and send no notification. No order
//! state is tracked between calls, so shipping an unknown order or cancelling twice is
//! not detected here.

use thiserror::Error;

use switchyard_core::{DomainError, OrderId};
use switchyard_events::{BusError, Event, EventBus, PublishReceipt};

use crate::event::OrderEvent;
use crate::notifier::NotificationStrategy;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum OrderError {
    /// The request was invalid (e.g. non-positive amount). Retry with corrected input.
    #[error(transparent)]
    Rejected(#[from] DomainError),
    /// The bus could not publish.
    #[error("event publication failed: {0}")]
    Bus(#[from] BusError),
}

impl OrderError {
    pub fn is_rejected(&self) -> bool {
        matches!(self, OrderError::Rejected(_))
    }
}

/// Publishes order events and sends placement notifications.
///
/// ## Generic Parameters
///
/// - `B`: event bus carrying `String` descriptions. Pass `&bus` or an `Arc` to share one
///   bus between several services.
/// - `N`: notification strategy, fixed for the lifetime of the service.
#[derive(Debug)]
pub struct OrderService<B, N> {
    bus: B,
    notifier: N,
}

impl<B, N> OrderService<B, N> {
    pub fn new(bus: B, notifier: N) -> Self {
        Self { bus, notifier }
    }

    pub fn into_parts(self) -> (B, N) {
        (self.bus, self.notifier)
    }
}

impl<B, N> OrderService<B, N>
where
    B: EventBus<String>,
    N: NotificationStrategy,
{
    /// Validate, publish `ORDER_PLACED`, then notify, in that order.
    ///
    /// `amount` must be finite and strictly positive.
    pub fn place_order(
        &self,
        order_id: impl Into<OrderId>,
        amount: f64,
    ) -> Result<PublishReceipt, OrderError> {
        let order_id = order_id.into();
        if !amount.is_finite() || amount <= 0.0 {
            tracing::warn!(%order_id, amount, "order rejected: invalid amount");
            return Err(DomainError::invalid_amount(order_id, amount).into());
        }

        let event = OrderEvent::Placed { order_id, amount };
        let receipt = self.publish(&event)?;
        self.notifier.send(&format!("New order: {event}"));

        Ok(receipt)
    }

    pub fn ship_order(&self, order_id: impl Into<OrderId>) -> Result<PublishReceipt, OrderError> {
        self.publish(&OrderEvent::Shipped {
            order_id: order_id.into(),
        })
    }

    pub fn cancel_order(&self, order_id: impl Into<OrderId>) -> Result<PublishReceipt, OrderError> {
        self.publish(&OrderEvent::Cancelled {
            order_id: order_id.into(),
        })
    }

    fn publish(&self, event: &OrderEvent) -> Result<PublishReceipt, OrderError> {
        let receipt = self.bus.publish(event.category(), &event.to_string())?;
        tracing::info!(
            event_type = event.event_type(),
            order_id = %event.order_id(),
            sequence = receipt.sequence,
            delivered = receipt.delivered,
            "order event published"
        );
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::{Arc, Mutex};
    use switchyard_events::{EventCategory, InMemoryEventBus, handler};

    type Log = Arc<Mutex<Vec<String>>>;

    /// Notifier that appends `notify:<message>` to a shared log.
    struct LogNotifier(Log);

    impl NotificationStrategy for LogNotifier {
        fn send(&self, message: &str) {
            self.0.lock().unwrap().push(format!("notify:{message}"));
        }
    }

    /// Bus with a `<CATEGORY>:<payload>` recorder on every category, plus the service.
    fn harness() -> (Log, OrderService<Arc<InMemoryEventBus<String>>, LogNotifier>) {
        let log: Log = Arc::default();
        let bus: Arc<InMemoryEventBus<String>> = Arc::new(InMemoryEventBus::new());
        for category in EventCategory::ALL {
            let log = Arc::clone(&log);
            bus.subscribe(
                category,
                handler(move |payload: &String| {
                    log.lock().unwrap().push(format!("{category}:{payload}"))
                }),
            );
        }
        let service = OrderService::new(bus, LogNotifier(Arc::clone(&log)));
        (log, service)
    }

    #[test]
    fn negative_amount_is_rejected_without_side_effects() {
        let (log, service) = harness();

        let err = service.place_order("ORD-1", -50.0).unwrap_err();

        assert!(err.is_rejected());
        assert_eq!(
            err,
            OrderError::Rejected(DomainError::invalid_amount("ORD-1", -50.0))
        );
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn zero_and_nan_amounts_are_rejected() {
        let (log, service) = harness();

        assert!(service.place_order("ORD-0", 0.0).unwrap_err().is_rejected());
        let nan = service.place_order("ORD-N", f64::NAN).unwrap_err();
        assert!(matches!(
            nan,
            OrderError::Rejected(DomainError::InvalidAmount { ref order_id, .. })
                if order_id.as_str() == "ORD-N"
        ));
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn infinite_amounts_are_rejected() {
        let (log, service) = harness();

        for amount in [f64::INFINITY, f64::NEG_INFINITY] {
            let err = service.place_order("ORD-inf", amount).unwrap_err();
            assert!(err.is_rejected());
        }
        assert!(log.lock().unwrap().is_empty());
        assert_eq!(
            service.place_order("ORD-ok", 1.0).unwrap().sequence,
            1,
            "rejected placements must not consume bus sequence numbers"
        );
    }

    #[test]
    fn valid_order_publishes_once_then_notifies_once() {
        let (log, service) = harness();

        let receipt = service.place_order("ORD-1", 299.99).unwrap();

        assert_eq!(receipt.category, EventCategory::OrderPlaced);
        assert_eq!(receipt.delivered, 1);
        assert_eq!(
            *log.lock().unwrap(),
            vec![
                "ORDER_PLACED:Order ORD-1 for $299.99",
                "notify:New order: Order ORD-1 for $299.99",
            ]
        );
    }

    #[test]
    fn ship_and_cancel_publish_without_notifying() {
        let (log, service) = harness();

        service.ship_order("ORD-1").unwrap();
        service.cancel_order("ORD-3").unwrap();

        assert_eq!(
            *log.lock().unwrap(),
            vec![
                "ORDER_SHIPPED:Order ORD-1 shipped",
                "ORDER_CANCELLED:Order ORD-3 cancelled",
            ]
        );
    }

    #[test]
    fn ship_and_cancel_do_not_check_prior_placement() {
        let (log, service) = harness();

        service.cancel_order("ORD-7").unwrap();
        service.cancel_order("ORD-7").unwrap();
        service.ship_order("ORD-7").unwrap();

        assert_eq!(log.lock().unwrap().len(), 3);
    }

    #[test]
    fn into_parts_returns_the_collaborators() {
        let (_, service) = harness();
        let (bus, _notifier) = service.into_parts();
        assert_eq!(bus.subscriber_count(EventCategory::OrderPlaced), 1);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: non-positive amounts never reach the bus or the notifier.
        #[test]
        fn non_positive_amounts_have_no_side_effects(
            amount in -1_000_000.0f64..=0.0,
            id in "ORD-[0-9]{1,6}"
        ) {
            let (log, service) = harness();
            let result = service.place_order(id.as_str(), amount);
            prop_assert!(result.is_err());
            prop_assert!(log.lock().unwrap().is_empty());
        }

        /// Property: positive amounts publish a payload with the id and the 2-decimal amount.
        #[test]
        fn positive_amounts_publish_formatted_payload(
            cents in 1u64..100_000_000,
            id in "ORD-[0-9]{1,6}"
        ) {
            let (log, service) = harness();
            let amount = cents as f64 / 100.0;
            service.place_order(id.as_str(), amount).unwrap();

            let entries = log.lock().unwrap();
            prop_assert_eq!(entries.len(), 2);
            prop_assert!(entries[0].contains(&id));
            let expected_amount = format!("{amount:.2}");
            prop_assert!(entries[0].contains(&expected_amount));
            prop_assert!(entries[1].starts_with("notify:New order: "));
        }
    }
}
