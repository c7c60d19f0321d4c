use chrono::{DateTime, Utc};
use poem_openapi::payload::Json;
use poem_openapi::{ApiResponse, Object};
use serde::{Deserialize, Serialize};

use crate::types::internal::employee::{Employee, EmployeeInput};

/// Request model for creating or replacing an employee
///
/// Updates replace every field: anything omitted here is cleared on the
/// stored record.
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Full name
    pub name: String,

    /// Postal address
    pub address: Option<String>,

    /// Phone extension
    pub extension: Option<String>,

    /// Professional email (unique across employees)
    pub work_email: Option<String>,

    /// Department; also the audit log partition
    pub department: Option<String>,

    /// Salary
    pub salary: Option<f64>,

    /// Admission date (ISO 8601 format)
    pub admission_date: Option<DateTime<Utc>>,
}

impl From<EmployeeRequest> for EmployeeInput {
    fn from(req: EmployeeRequest) -> Self {
        Self {
            name: req.name,
            address: req.address,
            extension: req.extension,
            work_email: req.work_email,
            department: req.department,
            salary: req.salary,
            admission_date: req.admission_date,
        }
    }
}

/// Response model representing a stored employee
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeResponse {
    /// Store-assigned identifier
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub extension: Option<String>,
    pub work_email: Option<String>,
    pub department: Option<String>,
    pub salary: Option<f64>,
    pub admission_date: Option<DateTime<Utc>>,
}

impl From<Employee> for EmployeeResponse {
    fn from(e: Employee) -> Self {
        Self {
            id: e.id,
            name: e.name,
            address: e.address,
            extension: e.extension,
            work_email: e.work_email,
            department: e.department,
            salary: e.salary,
            admission_date: e.admission_date,
        }
    }
}

/// API response for fetching an employee
#[derive(ApiResponse)]
pub enum GetEmployeeApiResponse {
    /// Employee found
    #[oai(status = 200)]
    Ok(Json<EmployeeResponse>),
}

/// API response for creating an employee
#[derive(ApiResponse)]
pub enum CreateEmployeeApiResponse {
    /// Employee created; Location points at the new resource
    #[oai(status = 201)]
    Created(Json<EmployeeResponse>, #[oai(header = "Location")] String),
}

/// API response for replacing an employee
#[derive(ApiResponse)]
pub enum UpdateEmployeeApiResponse {
    /// Employee replaced
    #[oai(status = 200)]
    Ok(Json<EmployeeResponse>),
}

/// API response for deleting an employee
#[derive(ApiResponse)]
pub enum DeleteEmployeeApiResponse {
    /// Employee removed
    #[oai(status = 204)]
    NoContent,
}
