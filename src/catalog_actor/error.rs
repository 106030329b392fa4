//! Error types for the catalog actors.

use thiserror::Error;

/// Errors that can occur during category, item and payment-method operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The requested record was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The data provided is invalid (missing name, non-positive price, ...).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The record points at something that does not exist.
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    /// A payment method with the same code already exists.
    #[error("Already exists: {0}")]
    Conflict(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CatalogError {
    fn from(msg: String) -> Self {
        CatalogError::ActorCommunicationError(msg)
    }
}
