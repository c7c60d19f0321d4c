// Internal domain types shared by stores and coordinators
pub mod audit;
pub mod employee;
pub mod write_outcome;

pub use audit::{ActionKind, AuditRecord, EmployeeSnapshot};
pub use employee::{Employee, EmployeeInput};
pub use write_outcome::{AuditOutcome, WriteOutcome};
