use serde::Serialize;

use switchyard_core::OrderId;
use switchyard_events::{Event, EventCategory};

/// Order lifecycle events.
///
/// The `Display` form is the human-readable description published on the bus.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OrderEvent {
    Placed { order_id: OrderId, amount: f64 },
    Shipped { order_id: OrderId },
    Cancelled { order_id: OrderId },
}

impl OrderEvent {
    pub fn order_id(&self) -> &OrderId {
        match self {
            OrderEvent::Placed { order_id, .. }
            | OrderEvent::Shipped { order_id }
            | OrderEvent::Cancelled { order_id } => order_id,
        }
    }
}

impl Event for OrderEvent {
    fn event_type(&self) -> &'static str {
        match self {
            OrderEvent::Placed { .. } => "order.placed",
            OrderEvent::Shipped { .. } => "order.shipped",
            OrderEvent::Cancelled { .. } => "order.cancelled",
        }
    }

    fn category(&self) -> EventCategory {
        match self {
            OrderEvent::Placed { .. } => EventCategory::OrderPlaced,
            OrderEvent::Shipped { .. } => EventCategory::OrderShipped,
            OrderEvent::Cancelled { .. } => EventCategory::OrderCancelled,
        }
    }
}

impl core::fmt::Display for OrderEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            OrderEvent::Placed { order_id, amount } => {
                write!(f, "Order {order_id} for ${amount:.2}")
            }
            OrderEvent::Shipped { order_id } => write!(f, "Order {order_id} shipped"),
            OrderEvent::Cancelled { order_id } => write!(f, "Order {order_id} cancelled"),
        }
    }
}
