pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_employees;

/// Migrations for the primary (system of record) database.
///
/// The audit log database has no migrator: its table is provisioned by the
/// audit log store on first use.
pub struct PrimaryMigrator;

#[async_trait::async_trait]
impl MigratorTrait for PrimaryMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250301_000001_create_employees::Migration)]
    }
}
