//! The two scripted scenarios.
//!
//! Section headers, ticket listings and errors go to `out`; bus handlers and the bundled
//! notifiers print straight to stdout, as a console delivery would.

use std::io::Write;

use anyhow::Context;

use switchyard_core::TicketId;
use switchyard_events::{EventBus, EventCategory, InMemoryEventBus, handler};
use switchyard_orders::{OrderError, OrderService};
use switchyard_tickets::{PriorityLevel, TicketBoard, TicketStatus};

use crate::config::DemoConfig;

/// What the order scenario did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct OrderReport {
    /// Events that reached the bus.
    pub published: u64,
    /// Placements refused before publication.
    pub rejected: usize,
}

/// Four tickets, a few transitions (one illegal), the status dashboard and the urgent list.
pub fn tickets(out: &mut impl Write) -> anyhow::Result<TicketBoard> {
    let mut board = TicketBoard::new();
    board.open(1, "Login fails", PriorityLevel::Critical)?;
    board.open(2, "Misaligned button", PriorityLevel::Low)?;
    board.open(3, "Payment errors", PriorityLevel::High)?;
    board.open(4, "Improve docs", PriorityLevel::Medium)?;

    writeln!(out, "=== All tickets ===")?;
    for ticket in board.iter() {
        writeln!(out, "{ticket}")?;
    }

    writeln!(out, "\n=== Transitions ===")?;
    let requests = [
        (1, TicketStatus::InProgress),
        (3, TicketStatus::InProgress),
        (3, TicketStatus::Resolved),
        (3, TicketStatus::Open),
    ];
    for (id, target) in requests {
        let outcome = board.transition(TicketId::new(id), target)?;
        if outcome.is_success() {
            writeln!(out, "Ticket {id}: {} -> {}", outcome.from, outcome.to)?;
        } else {
            writeln!(
                out,
                "Invalid transition for ticket {id}: {} -> {}",
                outcome.from, outcome.to
            )?;
        }
    }

    writeln!(out, "\n=== Updated tickets ===")?;
    for ticket in board.iter() {
        writeln!(out, "{ticket}")?;
    }

    writeln!(out, "\n=== Dashboard ===")?;
    let dashboard = board.dashboard();
    for (status, count) in dashboard.iter() {
        writeln!(out, "  {status}: {count}")?;
    }
    let snapshot = serde_json::to_string(&dashboard).context("failed to serialize dashboard")?;
    tracing::info!(dashboard = %snapshot, "ticket dashboard");

    writeln!(out, "\n=== Urgent tickets ===")?;
    for ticket in board.urgent() {
        writeln!(out, "{ticket}")?;
    }

    Ok(board)
}

/// Two order services with different channels sharing one bus.
pub fn orders(config: &DemoConfig, out: &mut impl Write) -> anyhow::Result<OrderReport> {
    let bus = InMemoryEventBus::<String>::new();
    bus.subscribe(
        EventCategory::OrderPlaced,
        handler(|data: &String| println!("  [LOG] {data}")),
    );
    bus.subscribe(
        EventCategory::OrderShipped,
        handler(|data: &String| println!("  [LOG] {data}")),
    );
    bus.subscribe(
        EventCategory::OrderCancelled,
        handler(|data: &String| println!("  [ALERT] {data}")),
    );

    let mut report = OrderReport {
        published: 0,
        rejected: 0,
    };

    writeln!(out, "=== Orders via {} ===", config.primary_channel)?;
    let primary = OrderService::new(&bus, config.primary_channel.notifier());
    settle(primary.place_order("ORD-001", 299.99), &mut report, out)?;
    settle(primary.ship_order("ORD-001"), &mut report, out)?;

    writeln!(out, "\n=== Invalid order ===")?;
    settle(primary.place_order("ORD-002", -50.0), &mut report, out)?;

    writeln!(out, "\n=== Switching to {} ===", config.secondary_channel)?;
    let secondary = OrderService::new(&bus, config.secondary_channel.notifier());
    settle(secondary.place_order("ORD-003", 150.0), &mut report, out)?;
    settle(secondary.cancel_order("ORD-003"), &mut report, out)?;

    Ok(report)
}

/// Count an order call; print rejections and keep going, propagate bus failures.
fn settle(
    result: Result<switchyard_events::PublishReceipt, OrderError>,
    report: &mut OrderReport,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match result {
        Ok(receipt) => {
            report.published = receipt.sequence;
            Ok(())
        }
        Err(err) if err.is_rejected() => {
            report.rejected += 1;
            writeln!(out, "Error: {err}")?;
            Ok(())
        }
        Err(err) => Err(err).context("order pipeline failed"),
    }
}
