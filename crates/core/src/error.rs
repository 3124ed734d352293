//! Domain error model.

use thiserror::Error;

use crate::id::OrderId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a *rejected request*: expected, recoverable input failures that
/// carry enough context to log or retry with corrected input. Infrastructure failures
/// (e.g. the event bus) have their own error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An order amount was not a finite positive number.
    #[error("invalid amount for order {order_id}: ${amount}")]
    InvalidAmount { order_id: OrderId, amount: f64 },

    /// A state change was requested along an edge the status graph does not declare.
    #[error("illegal transition for {entity}: {from} -> {to}")]
    IllegalTransition {
        entity: String,
        from: String,
        to: String,
    },

    /// A requested entity was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// A conflict occurred (e.g. duplicate identity).
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_amount(order_id: impl Into<OrderId>, amount: f64) -> Self {
        Self::InvalidAmount {
            order_id: order_id.into(),
            amount,
        }
    }

    pub fn illegal_transition(
        entity: impl core::fmt::Display,
        from: impl core::fmt::Display,
        to: impl core::fmt::Display,
    ) -> Self {
        Self::IllegalTransition {
            entity: entity.to_string(),
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}
