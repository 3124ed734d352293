//! Ticket domain module (status state machine).
//!
//! Tickets carry an immutable priority and a mutable status that only moves along the
//! edges of [`TicketWorkflow`]. Illegal requests are reported, never raised.

pub mod board;
pub mod priority;
pub mod status;
pub mod ticket;

pub use board::{StatusCounts, TicketBoard};
pub use priority::PriorityLevel;
pub use status::{TicketStatus, TicketWorkflow, can_transition};
pub use ticket::{Ticket, TicketTransition, TransitionRecord};
