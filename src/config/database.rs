use sea_orm::{Database, DatabaseConnection};
use migration::{MigratorTrait, PrimaryMigrator};

use crate::config::BootstrapSettings;
use crate::errors::internal::DatabaseError;
use crate::errors::InternalError;

/// Connections to the two stores the service writes to
///
/// `primary` holds the employees table; `audit` holds the audit log table,
/// which the audit log store provisions itself.
#[derive(Clone)]
pub struct DatabaseConnections {
    pub primary: DatabaseConnection,
    pub audit: DatabaseConnection,
}

impl DatabaseConnections {
    /// Connect to both databases
    ///
    /// Does NOT run migrations - call `migrate()` separately.
    pub async fn init(bootstrap_settings: &BootstrapSettings) -> Result<Self, InternalError> {
        let primary = connect("primary", bootstrap_settings.database_url()).await?;
        let audit = connect("audit", bootstrap_settings.audit_database_url()).await?;

        Ok(Self { primary, audit })
    }

    /// Run pending migrations on the primary database
    pub async fn migrate(&self) -> Result<(), InternalError> {
        migrate_primary_database(&self.primary).await
    }
}

async fn connect(database: &str, url: &str) -> Result<DatabaseConnection, InternalError> {
    let db = Database::connect(url).await.map_err(|source| DatabaseError::Connection {
        database: database.to_string(),
        source,
    })?;

    tracing::debug!("Connected to {} database: {}", database, url);

    Ok(db)
}

/// Run migrations on the primary database
///
/// # Arguments
/// * `db` - Database connection to run migrations on
///
/// # Returns
/// * `Ok(())` - Migrations completed successfully
/// * `Err(InternalError)` - Migration failed
pub async fn migrate_primary_database(db: &DatabaseConnection) -> Result<(), InternalError> {
    PrimaryMigrator::up(db, None)
        .await
        .map_err(|source| DatabaseError::Migration {
            database: "primary".to_string(),
            source,
        })?;

    tracing::debug!("Primary database migrations completed");

    Ok(())
}
