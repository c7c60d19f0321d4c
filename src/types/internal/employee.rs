use chrono::{DateTime, Utc};

use crate::errors::internal::EmployeeError;
use crate::types::db::employee;

/// An employee as held by the primary store
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub extension: Option<String>,
    pub work_email: Option<String>,
    pub department: Option<String>,
    pub salary: Option<f64>,
    pub admission_date: Option<DateTime<Utc>>,
}

impl Employee {
    /// Every attribute except the store-assigned id
    pub fn attributes(&self) -> EmployeeInput {
        EmployeeInput {
            name: self.name.clone(),
            address: self.address.clone(),
            extension: self.extension.clone(),
            work_email: self.work_email.clone(),
            department: self.department.clone(),
            salary: self.salary,
            admission_date: self.admission_date,
        }
    }
}

impl From<employee::Model> for Employee {
    fn from(m: employee::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            address: m.address,
            extension: m.extension,
            work_email: m.work_email,
            department: m.department,
            salary: m.salary,
            admission_date: m.admission_date,
        }
    }
}

/// Caller-supplied employee attributes
///
/// Used for both insert and full replacement; there is no partial update.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EmployeeInput {
    pub name: String,
    pub address: Option<String>,
    pub extension: Option<String>,
    pub work_email: Option<String>,
    pub department: Option<String>,
    pub salary: Option<f64>,
    pub admission_date: Option<DateTime<Utc>>,
}

impl EmployeeInput {
    /// Shorthand for an input carrying only a name and department
    pub fn named(name: impl Into<String>, department: Option<&str>) -> Self {
        Self {
            name: name.into(),
            department: department.map(str::to_string),
            ..Self::default()
        }
    }

    /// Reject data the primary store must never hold
    pub fn validate(&self) -> Result<(), EmployeeError> {
        if self.name.trim().is_empty() {
            return Err(EmployeeError::constraint_violation("name must not be blank"));
        }

        if let Some(email) = &self.work_email {
            if !email.contains('@') {
                return Err(EmployeeError::constraint_violation(format!(
                    "work_email '{}' is not an email address",
                    email
                )));
            }
        }

        if let Some(salary) = self.salary {
            if !salary.is_finite() || salary < 0.0 {
                return Err(EmployeeError::constraint_violation(
                    "salary must be a non-negative number",
                ));
            }
        }

        Ok(())
    }
}
