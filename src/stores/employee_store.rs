use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, SqlErr};

use crate::errors::internal::EmployeeError;
use crate::errors::InternalError;
use crate::types::db::employee::{self, Entity as EmployeeEntity};
use crate::types::internal::{Employee, EmployeeInput};

/// Repository for the employees table, the system of record
///
/// Every method commits before returning; nothing here spans calls.
pub struct EmployeeStore {
    db: DatabaseConnection,
}

impl EmployeeStore {
    /// Create a new EmployeeStore with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetch an employee by id
    ///
    /// # Errors
    /// * `EmployeeError::NotFound` - no row with this id
    /// * `InternalError::Database` - query failed
    pub async fn get_by_id(&self, id: i32) -> Result<Employee, InternalError> {
        let model = EmployeeEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("get_employee_by_id", e))?;

        model
            .map(Employee::from)
            .ok_or_else(|| EmployeeError::not_found(id).into())
    }

    /// Insert a new employee; the store assigns the id
    ///
    /// # Errors
    /// * `EmployeeError::ConstraintViolation` - invalid input or duplicate work email
    /// * `InternalError::Database` - insert failed
    pub async fn insert(&self, input: EmployeeInput) -> Result<Employee, InternalError> {
        input.validate()?;

        let new_employee = employee::ActiveModel {
            id: NotSet,
            name: Set(input.name),
            address: Set(input.address),
            extension: Set(input.extension),
            work_email: Set(input.work_email),
            department: Set(input.department),
            salary: Set(input.salary),
            admission_date: Set(input.admission_date),
        };

        let model = new_employee
            .insert(&self.db)
            .await
            .map_err(|e| write_error("insert_employee", e))?;

        tracing::debug!("Inserted employee {}", model.id);

        Ok(model.into())
    }

    /// Overwrite every column of an existing employee
    ///
    /// Fields missing from `input` are cleared, not preserved.
    ///
    /// # Errors
    /// * `EmployeeError::NotFound` - no row with this id
    /// * `EmployeeError::ConstraintViolation` - invalid input or duplicate work email
    /// * `InternalError::Database` - update failed
    pub async fn replace_all(&self, id: i32, input: EmployeeInput) -> Result<Employee, InternalError> {
        input.validate()?;

        let replacement = employee::ActiveModel {
            id: Unchanged(id),
            name: Set(input.name),
            address: Set(input.address),
            extension: Set(input.extension),
            work_email: Set(input.work_email),
            department: Set(input.department),
            salary: Set(input.salary),
            admission_date: Set(input.admission_date),
        };

        match replacement.update(&self.db).await {
            Ok(model) => Ok(model.into()),
            Err(DbErr::RecordNotUpdated) => Err(EmployeeError::not_found(id).into()),
            Err(e) => Err(write_error("replace_employee", e)),
        }
    }

    /// Delete an employee by id
    ///
    /// # Errors
    /// * `EmployeeError::NotFound` - no row with this id
    /// * `InternalError::Database` - delete failed
    pub async fn delete(&self, id: i32) -> Result<(), InternalError> {
        let result = EmployeeEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete_employee", e))?;

        if result.rows_affected == 0 {
            return Err(EmployeeError::not_found(id).into());
        }

        Ok(())
    }
}

/// Constraint failures reported by the database become domain errors;
/// everything else stays an infrastructure error
fn write_error(operation: &str, err: DbErr) -> InternalError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            EmployeeError::constraint_violation(format!("duplicate value: {}", detail)).into()
        }
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            EmployeeError::constraint_violation(detail).into()
        }
        _ => InternalError::database(operation, err),
    }
}

impl std::fmt::Debug for EmployeeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmployeeStore")
            .field("db", &"<connection>")
            .finish()
    }
}
