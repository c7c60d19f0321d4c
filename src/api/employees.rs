use std::sync::Arc;

use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};

use crate::coordinators::EmployeeCoordinator;
use crate::errors::EmployeeApiError;
use crate::types::dto::employee::{
    CreateEmployeeApiResponse, DeleteEmployeeApiResponse, EmployeeRequest, EmployeeResponse,
    GetEmployeeApiResponse, UpdateEmployeeApiResponse,
};

/// Employee CRUD endpoints
pub struct EmployeeApi {
    employee_coordinator: Arc<EmployeeCoordinator>,
}

impl EmployeeApi {
    /// Create a new EmployeeApi with the given EmployeeCoordinator
    pub fn new(employee_coordinator: Arc<EmployeeCoordinator>) -> Self {
        Self { employee_coordinator }
    }
}

/// API tags for employee endpoints
#[derive(Tags)]
enum EmployeeTags {
    /// Employee management
    Employees,
}

/// Location of a stored employee, relative to the server root
fn employee_location(id: i32) -> String {
    format!("/api/employees/{}", id)
}

#[OpenApi]
impl EmployeeApi {
    /// Fetch an employee by id
    #[oai(path = "/employees/:id", method = "get", tag = "EmployeeTags::Employees")]
    async fn get_employee(&self, id: Path<i32>) -> Result<GetEmployeeApiResponse, EmployeeApiError> {
        let employee = self
            .employee_coordinator
            .get(id.0)
            .await
            .map_err(EmployeeApiError::from_internal_error)?;

        Ok(GetEmployeeApiResponse::Ok(Json(EmployeeResponse::from(employee))))
    }

    /// Create an employee
    ///
    /// Stores the employee, then appends a `created` record to the audit log
    /// under the employee's department.
    #[oai(path = "/employees", method = "post", tag = "EmployeeTags::Employees")]
    async fn create_employee(
        &self,
        body: Json<EmployeeRequest>,
    ) -> Result<CreateEmployeeApiResponse, EmployeeApiError> {
        let outcome = self
            .employee_coordinator
            .create(body.0.into())
            .await
            .map_err(EmployeeApiError::from_internal_error)?;

        let location = employee_location(outcome.value.id);

        Ok(CreateEmployeeApiResponse::Created(
            Json(EmployeeResponse::from(outcome.value)),
            location,
        ))
    }

    /// Replace every field of an employee
    #[oai(path = "/employees/:id", method = "put", tag = "EmployeeTags::Employees")]
    async fn update_employee(
        &self,
        id: Path<i32>,
        body: Json<EmployeeRequest>,
    ) -> Result<UpdateEmployeeApiResponse, EmployeeApiError> {
        let outcome = self
            .employee_coordinator
            .update(id.0, body.0.into())
            .await
            .map_err(EmployeeApiError::from_internal_error)?;

        Ok(UpdateEmployeeApiResponse::Ok(Json(EmployeeResponse::from(outcome.value))))
    }

    /// Delete an employee
    #[oai(path = "/employees/:id", method = "delete", tag = "EmployeeTags::Employees")]
    async fn delete_employee(&self, id: Path<i32>) -> Result<DeleteEmployeeApiResponse, EmployeeApiError> {
        self.employee_coordinator
            .delete(id.0)
            .await
            .map_err(EmployeeApiError::from_internal_error)?;

        Ok(DeleteEmployeeApiResponse::NoContent)
    }
}
