//! HTTP error mapping.
//!
//! Every domain error becomes an [`AppError`], rendered as
//!
//! ```json
//! { "success": false, "code": "INVALID_TRANSITION", "message": "..." }
//! ```
//!
//! | Error | Status |
//! |-------|--------|
//! | NotFound | 404 |
//! | InvalidInput, InvalidReference, InvalidTransition, InvalidPaymentMethod | 400 |
//! | InvalidState, Conflict | 409 |
//! | Unauthorized (bad PIN) | 401 |
//! | Internal (actor communication) | 500 |

use crate::catalog_actor::CatalogError;
use crate::employee_actor::EmployeeError;
use crate::order_actor::OrderError;
use crate::table_actor::TableError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::error;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    InvalidReference(String),
    #[error("{0}")]
    InvalidTransition(String),
    #[error("{0}")]
    InvalidPaymentMethod(String),
    #[error("{0}")]
    InvalidState(String),
    #[error("{0}")]
    Conflict(String),
    #[error("Invalid PIN")]
    Unauthorized,
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            AppError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "INVALID_INPUT"),
            AppError::InvalidReference(_) => (StatusCode::BAD_REQUEST, "INVALID_REFERENCE"),
            AppError::InvalidTransition(_) => (StatusCode::BAD_REQUEST, "INVALID_TRANSITION"),
            AppError::InvalidPaymentMethod(_) => {
                (StatusCode::BAD_REQUEST, "INVALID_PAYMENT_METHOD")
            }
            AppError::InvalidState(_) => (StatusCode::CONFLICT, "INVALID_STATE"),
            AppError::Conflict(_) => (StatusCode::CONFLICT, "CONFLICT"),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            AppError::Internal(msg) => {
                error!(error = %msg, "Internal error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL")
            }
        };
        let message = match self {
            AppError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };

        let body = Json(ErrorBody {
            success: false,
            code,
            message,
        });
        (status, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::InvalidInput(e.body_text())
    }
}

impl From<OrderError> for AppError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::NotFound(msg) => AppError::NotFound(msg),
            OrderError::InvalidInput(msg) => AppError::InvalidInput(msg),
            OrderError::InvalidReference(msg) => AppError::InvalidReference(msg),
            OrderError::InvalidTransition(msg) => AppError::InvalidTransition(msg),
            OrderError::InvalidState(msg) => AppError::InvalidState(msg),
            OrderError::InvalidPaymentMethod(code) => {
                AppError::InvalidPaymentMethod(format!("unknown payment method '{code}'"))
            }
            OrderError::ActorCommunicationError(msg) => AppError::Internal(msg),
        }
    }
}

impl From<TableError> for AppError {
    fn from(e: TableError) -> Self {
        match e {
            TableError::NotFound(msg) => AppError::NotFound(msg),
            TableError::InvalidInput(msg) => AppError::InvalidInput(msg),
            TableError::ActorCommunicationError(msg) => AppError::Internal(msg),
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::NotFound(msg) => AppError::NotFound(msg),
            CatalogError::InvalidInput(msg) => AppError::InvalidInput(msg),
            CatalogError::InvalidReference(msg) => AppError::InvalidReference(msg),
            CatalogError::Conflict(msg) => AppError::Conflict(format!("{msg} already exists")),
            CatalogError::ActorCommunicationError(msg) => AppError::Internal(msg),
        }
    }
}

impl From<EmployeeError> for AppError {
    fn from(e: EmployeeError) -> Self {
        match e {
            EmployeeError::NotFound(msg) => AppError::NotFound(msg),
            EmployeeError::InvalidInput(msg) => AppError::InvalidInput(msg),
            EmployeeError::InvalidCredentials => AppError::Unauthorized,
            EmployeeError::Conflict => AppError::Conflict("PIN already in use".into()),
            EmployeeError::ActorCommunicationError(msg) => AppError::Internal(msg),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
