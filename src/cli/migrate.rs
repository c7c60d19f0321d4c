use crate::config::{BootstrapSettings, DatabaseConnections};

/// Run pending migrations on the primary database
///
/// The audit log table is not migrated here; the audit log store creates it
/// on first append.
///
/// # Returns
/// * `Ok(())` - Migrations completed successfully
/// * `Err(...)` - Connection or migration failed
pub async fn run_migrations(bootstrap_settings: &BootstrapSettings) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Running database migrations...");

    let connections = DatabaseConnections::init(bootstrap_settings).await?;
    connections.migrate().await?;

    tracing::info!("All migrations completed successfully");

    Ok(())
}
