// API-facing error types
pub mod employee;

// Re-exports for convenience
pub use employee::{EmployeeApiError, EmployeeErrorResponse};

#[cfg(test)]
mod employee_test;
