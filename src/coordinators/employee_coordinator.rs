use std::sync::Arc;

use crate::app_data::AppData;
use crate::audit::{self, RowKeyGenerator};
use crate::errors::InternalError;
use crate::stores::{AuditLog, EmployeeStore};
use crate::types::internal::{ActionKind, AuditOutcome, Employee, EmployeeInput, WriteOutcome};

/// Orchestrates "mutate the primary store, then append the audit record"
///
/// Primary-store errors end the operation before anything is logged. Audit
/// append errors are logged and reported in the returned `AuditOutcome`, but
/// never fail the operation or undo the primary commit.
pub struct EmployeeCoordinator {
    employee_store: Arc<EmployeeStore>,
    audit_log: Arc<dyn AuditLog>,
    row_keys: Arc<dyn RowKeyGenerator>,
}

impl EmployeeCoordinator {
    /// Create EmployeeCoordinator from AppData
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            employee_store: app_data.employee_store.clone(),
            audit_log: app_data.audit_log_store.clone(),
            row_keys: app_data.row_key_generator.clone(),
        }
    }

    /// Create an EmployeeCoordinator from explicit parts
    pub fn from_parts(
        employee_store: Arc<EmployeeStore>,
        audit_log: Arc<dyn AuditLog>,
        row_keys: Arc<dyn RowKeyGenerator>,
    ) -> Self {
        Self {
            employee_store,
            audit_log,
            row_keys,
        }
    }

    /// Fetch an employee; read-only, nothing is logged
    pub async fn get(&self, id: i32) -> Result<Employee, InternalError> {
        self.employee_store.get_by_id(id).await
    }

    /// Orchestrate employee creation
    ///
    /// 1. Insert into the primary store
    /// 2. Encode a `Created` record
    /// 3. Append it to the audit log
    ///
    /// # Returns
    /// * `Ok(WriteOutcome)` - Inserted employee and the audit outcome
    /// * `Err(InternalError)` - Primary store rejected the insert; nothing was logged
    pub async fn create(&self, input: EmployeeInput) -> Result<WriteOutcome<Employee>, InternalError> {
        let employee = self.employee_store.insert(input).await?;

        let audit = self.record(&employee, ActionKind::Created).await;

        tracing::info!(employee_id = employee.id, "Employee created");

        Ok(WriteOutcome::new(employee, audit))
    }

    /// Orchestrate full replacement of an employee
    ///
    /// 1. Look the employee up; a missing id stops here
    /// 2. Replace every field with the caller's values
    /// 3. Encode an `Updated` record from the stored result
    /// 4. Append it to the audit log
    ///
    /// # Returns
    /// * `Ok(WriteOutcome)` - Updated employee and the audit outcome
    /// * `Err(InternalError)` - Not found or rejected; nothing was logged
    pub async fn update(
        &self,
        id: i32,
        input: EmployeeInput,
    ) -> Result<WriteOutcome<Employee>, InternalError> {
        let existing = self.employee_store.get_by_id(id).await?;

        let employee = self.employee_store.replace_all(existing.id, input).await?;

        let audit = self.record(&employee, ActionKind::Updated).await;

        tracing::info!(employee_id = employee.id, "Employee updated");

        Ok(WriteOutcome::new(employee, audit))
    }

    /// Orchestrate employee removal
    ///
    /// 1. Look the employee up; a missing id stops here
    /// 2. Delete it from the primary store
    /// 3. Encode a `Removed` record from the pre-deletion snapshot
    /// 4. Append it to the audit log
    ///
    /// # Returns
    /// * `Ok(WriteOutcome<()>)` - Employee removed, with the audit outcome
    /// * `Err(InternalError)` - Not found or delete failed; nothing was logged
    pub async fn delete(&self, id: i32) -> Result<WriteOutcome<()>, InternalError> {
        let existing = self.employee_store.get_by_id(id).await?;

        self.employee_store.delete(existing.id).await?;

        let audit = self.record(&existing, ActionKind::Removed).await;

        tracing::info!(employee_id = existing.id, "Employee removed");

        Ok(WriteOutcome::new((), audit))
    }

    /// Encode and append one audit record for an already committed change
    async fn record(&self, employee: &Employee, action: ActionKind) -> AuditOutcome {
        let record = audit::encode(employee, action, self.row_keys.as_ref());
        let partition_key = record.partition_key().to_string();
        let row_key = record.row_key().to_string();

        match self.audit_log.append(&record).await {
            Ok(()) => AuditOutcome::Recorded {
                partition_key,
                row_key,
            },
            Err(err) => {
                // Primary commit stands; this entry is lost
                tracing::error!(
                    employee_id = employee.id,
                    action = %action,
                    partition_key = %partition_key,
                    row_key = %row_key,
                    "Audit append failed: {}",
                    err
                );
                AuditOutcome::Failed {
                    partition_key,
                    row_key,
                    reason: err.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::row_key::SequentialRowKeyGenerator;
    use crate::errors::internal::AuditError;
    use crate::stores::AuditLogStore;
    use crate::test::utils::{setup_audit_db, setup_primary_db};
    use crate::types::internal::AuditRecord;
    use std::sync::Mutex;

    /// Audit log that records every append in memory, optionally failing
    struct RecordingAuditLog {
        appended: Mutex<Vec<AuditRecord>>,
        fail: bool,
    }

    impl RecordingAuditLog {
        fn new(fail: bool) -> Self {
            Self {
                appended: Mutex::new(Vec::new()),
                fail,
            }
        }

        fn appended(&self) -> Vec<AuditRecord> {
            self.appended.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl AuditLog for RecordingAuditLog {
        async fn append(&self, record: &AuditRecord) -> Result<(), InternalError> {
            if self.fail {
                return Err(AuditError::LogWriteFailed("audit store unreachable".to_string()).into());
            }
            self.appended.lock().unwrap().push(record.clone());
            Ok(())
        }
    }

    async fn coordinator_with(audit_log: Arc<RecordingAuditLog>) -> (EmployeeCoordinator, Arc<EmployeeStore>) {
        let store = Arc::new(EmployeeStore::new(setup_primary_db().await));
        let coordinator = EmployeeCoordinator::from_parts(
            store.clone(),
            audit_log,
            Arc::new(SequentialRowKeyGenerator::new("row")),
        );
        (coordinator, store)
    }

    #[tokio::test]
    async fn test_create_appends_one_created_record() {
        let audit_log = Arc::new(RecordingAuditLog::new(false));
        let (coordinator, _store) = coordinator_with(audit_log.clone()).await;

        let outcome = coordinator
            .create(EmployeeInput::named("Ana", Some("RH")))
            .await
            .unwrap();

        let appended = audit_log.appended();
        assert_eq!(appended.len(), 1);
        assert_eq!(appended[0].action(), ActionKind::Created);
        assert_eq!(appended[0].partition_key(), "RH");
        assert_eq!(appended[0].snapshot().employee_id, outcome.value.id);
        assert_eq!(
            outcome.audit,
            AuditOutcome::Recorded {
                partition_key: "RH".to_string(),
                row_key: "row-1".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_rejected_create_appends_nothing() {
        let audit_log = Arc::new(RecordingAuditLog::new(false));
        let (coordinator, _store) = coordinator_with(audit_log.clone()).await;

        let result = coordinator.create(EmployeeInput::named(" ", Some("RH"))).await;

        assert!(result.is_err());
        assert!(audit_log.appended().is_empty());
    }

    #[tokio::test]
    async fn test_update_missing_employee_appends_nothing() {
        let audit_log = Arc::new(RecordingAuditLog::new(false));
        let (coordinator, _store) = coordinator_with(audit_log.clone()).await;

        let err = coordinator
            .update(99, EmployeeInput::named("Ghost", None))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert!(audit_log.appended().is_empty());
    }

    #[tokio::test]
    async fn test_delete_logs_pre_deletion_snapshot() {
        let audit_log = Arc::new(RecordingAuditLog::new(false));
        let (coordinator, store) = coordinator_with(audit_log.clone()).await;
        let created = coordinator
            .create(EmployeeInput::named("Ana", None))
            .await
            .unwrap()
            .value;

        coordinator.delete(created.id).await.unwrap();

        let appended = audit_log.appended();
        assert_eq!(appended.len(), 2);
        assert_eq!(appended[1].action(), ActionKind::Removed);
        assert_eq!(appended[1].partition_key(), "Geral");
        assert_eq!(appended[1].snapshot().to_employee(), created);
        assert!(store.get_by_id(created.id).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_audit_failure_does_not_fail_or_undo_the_write() {
        let audit_log = Arc::new(RecordingAuditLog::new(true));
        let (coordinator, store) = coordinator_with(audit_log).await;

        let outcome = coordinator
            .create(EmployeeInput::named("Ana", Some("RH")))
            .await
            .unwrap();

        assert!(!outcome.audit.is_recorded());
        match &outcome.audit {
            AuditOutcome::Failed { reason, .. } => assert!(reason.contains("unreachable")),
            other => panic!("Expected failed audit outcome, got: {:?}", other),
        }
        assert_eq!(store.get_by_id(outcome.value.id).await.unwrap(), outcome.value);
    }

    #[tokio::test]
    async fn test_coordinator_writes_through_sql_audit_log() {
        let store = Arc::new(EmployeeStore::new(setup_primary_db().await));
        let audit_store = Arc::new(AuditLogStore::new(setup_audit_db().await, "EmployeeLog"));
        let coordinator = EmployeeCoordinator::from_parts(
            store,
            audit_store.clone(),
            Arc::new(SequentialRowKeyGenerator::new("row")),
        );

        let outcome = coordinator
            .create(EmployeeInput::named("Ana", Some("RH")))
            .await
            .unwrap();

        let stored = audit_store
            .find("RH", outcome.audit.row_key())
            .await
            .unwrap()
            .expect("audit record should exist");
        assert_eq!(stored.action(), ActionKind::Created);
        assert_eq!(stored.snapshot().to_employee(), outcome.value);
    }
}
