use chrono::{DateTime, Utc};
use serde::Serialize;

use switchyard_core::{Entity, TicketId, TransitionOutcome, Transitional, request_transition};

use crate::priority::PriorityLevel;
use crate::status::{TicketStatus, TicketWorkflow};

/// Outcome of a ticket transition request.
pub type TicketTransition = TransitionOutcome<TicketId, TicketStatus>;

/// An accepted status change.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionRecord {
    pub from: TicketStatus,
    pub to: TicketStatus,
    pub at: DateTime<Utc>,
}

/// Entity: Ticket.
///
/// Identity, description and priority are fixed at construction; status starts at
/// `OPEN` and changes only through [`Ticket::transition_to`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticket {
    id: TicketId,
    description: String,
    priority: PriorityLevel,
    status: TicketStatus,
    history: Vec<TransitionRecord>,
}

impl Ticket {
    pub fn new(id: u32, description: impl Into<String>, priority: PriorityLevel) -> Self {
        Self {
            id: TicketId::new(id),
            description: description.into(),
            priority,
            status: TicketStatus::Open,
            history: Vec::new(),
        }
    }

    pub fn id(&self) -> TicketId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn priority(&self) -> PriorityLevel {
        self.priority
    }

    pub fn status(&self) -> TicketStatus {
        self.status
    }

    /// Accepted transitions, oldest first.
    pub fn history(&self) -> &[TransitionRecord] {
        &self.history
    }

    pub fn is_urgent(&self) -> bool {
        self.priority.is_urgent()
    }

    /// Request a move to `target`.
    ///
    /// Illegal edges leave the ticket untouched; the returned outcome says which
    /// happened either way.
    pub fn transition_to(&mut self, target: TicketStatus) -> TicketTransition {
        let outcome = request_transition(self, target);
        if outcome.success {
            tracing::info!(
                ticket_id = %outcome.entity_id,
                from = %outcome.from,
                to = %outcome.to,
                "ticket transitioned"
            );
        } else {
            tracing::warn!(
                ticket_id = %outcome.entity_id,
                from = %outcome.from,
                to = %outcome.to,
                "invalid ticket transition rejected"
            );
        }
        outcome
    }
}

impl Entity for Ticket {
    type Id = TicketId;

    fn id(&self) -> TicketId {
        self.id
    }
}

impl Transitional for Ticket {
    type Graph = TicketWorkflow;

    fn state(&self) -> TicketStatus {
        self.status
    }

    fn commit(&mut self, to: TicketStatus) {
        self.history.push(TransitionRecord {
            from: self.status,
            to,
            at: Utc::now(),
        });
        self.status = to;
    }
}

impl core::fmt::Display for Ticket {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Ticket #{} [{}] \"{}\" priority={}",
            self.id,
            self.status,
            self.description,
            self.priority.label()
        )
    }
}
