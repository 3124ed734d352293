use serde::{Deserialize, Serialize};

use switchyard_core::StatusGraph;

/// Ticket status lifecycle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub const ALL: [TicketStatus; 4] = [
        TicketStatus::Open,
        TicketStatus::InProgress,
        TicketStatus::Resolved,
        TicketStatus::Closed,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            TicketStatus::Open => "OPEN",
            TicketStatus::InProgress => "IN_PROGRESS",
            TicketStatus::Resolved => "RESOLVED",
            TicketStatus::Closed => "CLOSED",
        }
    }
}

impl core::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Legal ticket status edges.
///
/// ```text
/// OPEN ──▶ IN_PROGRESS ──▶ RESOLVED ──▶ CLOSED
///   ▲          │  ▲            │
///   └──────────┘  └────────────┘
/// ```
pub fn can_transition(from: TicketStatus, to: TicketStatus) -> bool {
    use TicketStatus::*;

    matches!(
        (from, to),
        (Open, InProgress)
            | (InProgress, Resolved)
            | (InProgress, Open)
            | (Resolved, Closed)
            | (Resolved, InProgress)
    )
}

/// Status graph governing [`crate::Ticket`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TicketWorkflow;

impl StatusGraph for TicketWorkflow {
    type State = TicketStatus;

    const STATES: &'static [TicketStatus] = &TicketStatus::ALL;

    fn can_transition(from: TicketStatus, to: TicketStatus) -> bool {
        can_transition(from, to)
    }
}
