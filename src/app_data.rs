use std::sync::Arc;

use crate::audit::{RowKeyGenerator, UuidRowKeyGenerator};
use crate::config::{BootstrapSettings, DatabaseConnections};
use crate::stores::{AuditLogStore, EmployeeStore};

/// Centralized application data following the main-owned stores pattern
///
/// All dependencies are created once at startup and shared across coordinators.
///
/// ```text
/// main.rs
///   ↓
/// AppData::init()
///   ↓ creates once
///   ├─ connections (primary + audit DatabaseConnection)
///   ├─ employee_store (Arc<EmployeeStore>)
///   ├─ audit_log_store (Arc<AuditLogStore>)
///   └─ row_key_generator (Arc<dyn RowKeyGenerator>)
///   ↓ wrapped in Arc<AppData>
///   ↓ passed to coordinators
///   └─ EmployeeCoordinator::new(app_data) → extracts stores
/// ```
pub struct AppData {
    pub connections: DatabaseConnections,
    pub employee_store: Arc<EmployeeStore>,
    pub audit_log_store: Arc<AuditLogStore>,
    pub row_key_generator: Arc<dyn RowKeyGenerator>,
}

impl AppData {
    /// Initialize all application data
    ///
    /// Database connections should be initialized and migrated before calling this.
    pub fn init(connections: DatabaseConnections, bootstrap_settings: &BootstrapSettings) -> Self {
        Self::with_row_key_generator(connections, bootstrap_settings, Arc::new(UuidRowKeyGenerator))
    }

    /// Initialize with a caller-supplied row key source
    pub fn with_row_key_generator(
        connections: DatabaseConnections,
        bootstrap_settings: &BootstrapSettings,
        row_key_generator: Arc<dyn RowKeyGenerator>,
    ) -> Self {
        tracing::debug!("Creating stores...");
        let employee_store = Arc::new(EmployeeStore::new(connections.primary.clone()));
        let audit_log_store = Arc::new(AuditLogStore::new(
            connections.audit.clone(),
            bootstrap_settings.audit_table_name(),
        ));
        tracing::debug!(
            audit_table = bootstrap_settings.audit_table_name(),
            "Stores created"
        );

        Self {
            connections,
            employee_store,
            audit_log_store,
            row_key_generator,
        }
    }
}
