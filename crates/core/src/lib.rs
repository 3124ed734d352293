//! `switchyard-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no logging, no infrastructure
//! concerns): identifiers, the domain error model, and the generic state-transition engine.

pub mod entity;
pub mod error;
pub mod id;
pub mod transition;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{OrderId, TicketId};
pub use transition::{StatusGraph, Transitional, TransitionOutcome, request_transition};
