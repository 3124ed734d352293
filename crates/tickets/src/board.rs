//! In-memory ticket collection with a status dashboard and an urgent view.

use std::collections::BTreeMap;

use serde::Serialize;

use switchyard_core::{DomainError, DomainResult, TicketId};

use crate::priority::PriorityLevel;
use crate::status::TicketStatus;
use crate::ticket::{Ticket, TicketTransition};

/// Ticket count per status. Every status is present, zero-filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StatusCounts(BTreeMap<TicketStatus, usize>);

impl StatusCounts {
    fn zeroed() -> Self {
        Self(TicketStatus::ALL.into_iter().map(|s| (s, 0)).collect())
    }

    pub fn get(&self, status: TicketStatus) -> usize {
        self.0.get(&status).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    /// `(status, count)` pairs in lifecycle order.
    pub fn iter(&self) -> impl Iterator<Item = (TicketStatus, usize)> + '_ {
        self.0.iter().map(|(s, n)| (*s, *n))
    }
}

/// Tickets in insertion order, unique by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TicketBoard {
    tickets: Vec<Ticket>,
}

impl TicketBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ticket in `OPEN` status.
    pub fn open(
        &mut self,
        id: u32,
        description: impl Into<String>,
        priority: PriorityLevel,
    ) -> DomainResult<&Ticket> {
        self.insert(Ticket::new(id, description, priority))?;
        self.tickets
            .last()
            .ok_or_else(|| DomainError::not_found(format!("ticket {id}")))
    }

    pub fn insert(&mut self, ticket: Ticket) -> DomainResult<()> {
        if self.get(ticket.id()).is_some() {
            return Err(DomainError::conflict(format!(
                "ticket {} already exists",
                ticket.id()
            )));
        }
        self.tickets.push(ticket);
        Ok(())
    }

    pub fn get(&self, id: TicketId) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id() == id)
    }

    /// Request a transition on ticket `id`.
    ///
    /// A missing ticket is an error; an illegal edge is a rejected outcome, not an error.
    pub fn transition(&mut self, id: TicketId, target: TicketStatus) -> DomainResult<TicketTransition> {
        let ticket = self
            .tickets
            .iter_mut()
            .find(|t| t.id() == id)
            .ok_or_else(|| DomainError::not_found(format!("ticket {id}")))?;
        Ok(ticket.transition_to(target))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ticket> {
        self.tickets.iter()
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    pub fn dashboard(&self) -> StatusCounts {
        let mut counts = StatusCounts::zeroed();
        for ticket in &self.tickets {
            *counts.0.entry(ticket.status()).or_insert(0) += 1;
        }
        counts
    }

    /// HIGH and CRITICAL tickets, in insertion order.
    pub fn urgent(&self) -> impl Iterator<Item = &Ticket> {
        self.tickets.iter().filter(|t| t.is_urgent())
    }
}
