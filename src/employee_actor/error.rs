//! Error types for the Employee actor.

use thiserror::Error;

/// Errors that can occur during employee operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EmployeeError {
    /// The requested employee was not found.
    #[error("Employee not found: {0}")]
    NotFound(String),

    /// The employee data provided is invalid.
    #[error("Employee validation error: {0}")]
    InvalidInput(String),

    /// No employee signs in with the given PIN.
    #[error("Invalid PIN")]
    InvalidCredentials,

    /// Another employee already uses the PIN.
    #[error("PIN already in use")]
    Conflict,

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for EmployeeError {
    fn from(msg: String) -> Self {
        EmployeeError::ActorCommunicationError(msg)
    }
}
