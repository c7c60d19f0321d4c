#[cfg(test)]
mod tests {
    use crate::errors::EmployeeApiError;
    use crate::errors::internal::{AuditError, EmployeeError, InternalError};
    use sea_orm::DbErr;

    #[test]
    fn test_not_found_maps_to_404() {
        let internal_err = InternalError::from(EmployeeError::not_found(12));
        let api_err = EmployeeApiError::from_internal_error(internal_err);

        assert_eq!(api_err.status_code(), 404);
        assert_eq!(api_err.message(), "Employee not found: 12");
    }

    #[test]
    fn test_constraint_violation_maps_to_400() {
        let internal_err =
            InternalError::from(EmployeeError::constraint_violation("work_email already in use"));
        let api_err = EmployeeApiError::from_internal_error(internal_err);

        assert_eq!(api_err.status_code(), 400);
        assert_eq!(api_err.message(), "Employee rejected: work_email already in use");
    }

    #[test]
    fn test_database_error_converts_to_internal_server_error() {
        let internal_err =
            InternalError::database("get_employee_by_id", DbErr::Custom("disk I/O error".to_string()));
        let api_err = EmployeeApiError::from_internal_error(internal_err);

        assert_eq!(api_err.status_code(), 500);
        assert_eq!(api_err.message(), "An internal error occurred");
    }

    #[test]
    fn test_audit_error_does_not_leak_details() {
        let internal_err = InternalError::from(AuditError::LogWriteFailed("secret host".to_string()));
        let api_err: EmployeeApiError = internal_err.into();

        assert_eq!(api_err.status_code(), 500);
        assert!(!api_err.to_string().contains("secret host"));
    }
}
