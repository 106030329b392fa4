//! Error types for the order ledger.

use crate::model::UnknownStatus;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order (or table, for `free_table`) was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The order data provided is invalid.
    #[error("Invalid order: {0}")]
    InvalidInput(String),

    /// The order points at a table or item that does not exist.
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    /// The requested status change is not allowed.
    #[error("Invalid status transition: {0}")]
    InvalidTransition(String),

    /// The order (or table) is in a state that forbids the operation.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The payment method code is not in the catalog.
    #[error("Invalid payment method: {0}")]
    InvalidPaymentMethod(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::ActorCommunicationError(msg)
    }
}

impl From<UnknownStatus> for OrderError {
    fn from(e: UnknownStatus) -> Self {
        OrderError::InvalidTransition(e.to_string())
    }
}
