use thiserror::Error;

/// Employee store specific errors
#[derive(Error, Debug)]
pub enum EmployeeError {
    /// No employee row with this id
    #[error("Employee not found: {id}")]
    NotFound { id: i32 },

    /// The primary store rejected the write (invalid or duplicate data)
    #[error("Constraint violation: {reason}")]
    ConstraintViolation { reason: String },
}

impl EmployeeError {
    pub fn not_found(id: i32) -> Self {
        Self::NotFound { id }
    }

    pub fn constraint_violation(reason: impl Into<String>) -> Self {
        Self::ConstraintViolation {
            reason: reason.into(),
        }
    }
}
