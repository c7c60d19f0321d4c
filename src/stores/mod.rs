// Stores layer - Data access and repository pattern
pub mod audit_log_store;
pub mod employee_store;

pub use audit_log_store::{AuditLog, AuditLogStore};
pub use employee_store::EmployeeStore;
