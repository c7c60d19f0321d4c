// Coordinators layer - Workflow orchestration
//
// Coordinators sequence store operations for specific API endpoints. They own
// no store lifecycle, only the order of calls between stores.

pub mod employee_coordinator;

pub use employee_coordinator::EmployeeCoordinator;
