// Common test utilities for integration tests
#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use employee_ledger::audit::RowKeyGenerator;
use employee_ledger::config::DatabaseConnections;
use employee_ledger::coordinators::EmployeeCoordinator;
use employee_ledger::stores::{AuditLogStore, EmployeeStore};
use migration::{MigratorTrait, PrimaryMigrator};
use sea_orm::{Database, DatabaseConnection};

pub const TEST_AUDIT_TABLE: &str = "EmployeeLog";

/// Creates an in-memory primary database with migrations applied
pub async fn setup_primary_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    PrimaryMigrator::up(&db, None)
        .await
        .expect("Failed to run primary migrations");

    db
}

/// Creates an empty in-memory audit database
pub async fn setup_audit_db() -> DatabaseConnection {
    Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create audit database")
}

/// Creates both test databases
pub async fn setup_test_connections() -> DatabaseConnections {
    DatabaseConnections {
        primary: setup_primary_db().await,
        audit: setup_audit_db().await,
    }
}

/// Row keys `<prefix>-1`, `<prefix>-2`, ... safe to share across tasks
pub struct CountingRowKeys {
    prefix: String,
    counter: AtomicU64,
}

impl CountingRowKeys {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            counter: AtomicU64::new(0),
        }
    }
}

impl RowKeyGenerator for CountingRowKeys {
    fn next_row_key(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{}-{}", self.prefix, n)
    }
}

/// Always returns the same row key, to exercise replace-mode appends
pub struct FixedRowKey(pub &'static str);

impl RowKeyGenerator for FixedRowKey {
    fn next_row_key(&self) -> String {
        self.0.to_string()
    }
}

/// Coordinator wired to fresh in-memory stores
///
/// Returns (coordinator, employee_store, audit_log_store)
pub async fn setup_coordinator(
    row_keys: Arc<dyn RowKeyGenerator>,
) -> (EmployeeCoordinator, Arc<EmployeeStore>, Arc<AuditLogStore>) {
    let employee_store = Arc::new(EmployeeStore::new(setup_primary_db().await));
    let audit_log_store = Arc::new(AuditLogStore::new(setup_audit_db().await, TEST_AUDIT_TABLE));

    let coordinator = EmployeeCoordinator::from_parts(
        employee_store.clone(),
        audit_log_store.clone(),
        row_keys,
    );

    (coordinator, employee_store, audit_log_store)
}
