use crate::errors::internal::{EmployeeError, InternalError};
use poem_openapi::{payload::Json, ApiResponse, Object};
use std::fmt;

/// Standardized error response for employee endpoints
#[derive(Object, Debug)]
pub struct EmployeeErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Employee endpoint error types
#[derive(ApiResponse, Debug)]
pub enum EmployeeApiError {
    /// Employee not found
    #[oai(status = 404)]
    NotFound(Json<EmployeeErrorResponse>),

    /// The submitted employee was rejected by the primary store
    #[oai(status = 400)]
    ConstraintViolation(Json<EmployeeErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<EmployeeErrorResponse>),
}

impl EmployeeApiError {
    /// Create a NotFound error
    pub fn not_found(id: i32) -> Self {
        EmployeeApiError::NotFound(Json(EmployeeErrorResponse {
            error: "not_found".to_string(),
            message: format!("Employee not found: {}", id),
            status_code: 404,
        }))
    }

    /// Create a ConstraintViolation error
    pub fn constraint_violation(reason: &str) -> Self {
        EmployeeApiError::ConstraintViolation(Json(EmployeeErrorResponse {
            error: "constraint_violation".to_string(),
            message: format!("Employee rejected: {}", reason),
            status_code: 400,
        }))
    }

    /// Convert InternalError to EmployeeApiError
    ///
    /// This is the explicit conversion point from internal errors to API errors.
    /// Infrastructure details are logged but not exposed to clients.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::Employee(EmployeeError::NotFound { id }) => Self::not_found(*id),
            InternalError::Employee(EmployeeError::ConstraintViolation { reason }) => {
                tracing::debug!("Employee write rejected: {}", reason);
                Self::constraint_violation(reason)
            }
            InternalError::Database(_) => {
                tracing::error!("Database error in employee operation: {}", err);
                Self::internal_server_error()
            }
            _ => {
                tracing::error!("Unexpected error in employee operation: {}", err);
                Self::internal_server_error()
            }
        }
    }

    fn internal_server_error() -> Self {
        EmployeeApiError::InternalError(Json(EmployeeErrorResponse {
            error: "internal_error".to_string(),
            message: "An internal error occurred".to_string(),
            status_code: 500,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        match self {
            EmployeeApiError::NotFound(json) => json.0.message.clone(),
            EmployeeApiError::ConstraintViolation(json) => json.0.message.clone(),
            EmployeeApiError::InternalError(json) => json.0.message.clone(),
        }
    }

    /// Get the HTTP status code from the error variant
    pub fn status_code(&self) -> u16 {
        match self {
            EmployeeApiError::NotFound(json) => json.0.status_code,
            EmployeeApiError::ConstraintViolation(json) => json.0.status_code,
            EmployeeApiError::InternalError(json) => json.0.status_code,
        }
    }
}

impl From<InternalError> for EmployeeApiError {
    fn from(err: InternalError) -> Self {
        Self::from_internal_error(err)
    }
}

impl fmt::Display for EmployeeApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
