// Test utilities shared across unit tests
// Only compiled when running tests

use migration::{MigratorTrait, PrimaryMigrator};
use sea_orm::{Database, DatabaseConnection};

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
///
/// No migrations: the audit log store provisions its own table.
pub async fn setup_audit_db() -> DatabaseConnection {
    Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create audit database")
}
