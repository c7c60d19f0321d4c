use thiserror::Error;

pub mod audit;
pub mod database;
pub mod employee;

pub use audit::AuditError;
pub use database::DatabaseError;
pub use employee::EmployeeError;

/// Internal error type for store and coordinator operations
///
/// Infrastructure errors (database, parse) are shared by every store; domain
/// errors belong to the store that raises them.
/// Not exposed via API - endpoints must convert to `EmployeeApiError`.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("Parse error: failed to parse {value_type}: {message}")]
    Parse {
        value_type: String,
        message: String,
    },

    #[error(transparent)]
    Employee(#[from] EmployeeError),

    #[error(transparent)]
    Audit(#[from] AuditError),
}

impl InternalError {
    /// Create a database error with the failing operation as context
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }

    /// Create a parse error with context
    pub fn parse(value_type: impl Into<String>, message: impl Into<String>) -> InternalError {
        InternalError::Parse {
            value_type: value_type.into(),
            message: message.into(),
        }
    }

    /// True when the error means the requested employee does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, InternalError::Employee(EmployeeError::NotFound { .. }))
    }
}
