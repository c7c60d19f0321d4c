use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Failed to write audit log: {0}")]
    LogWriteFailed(String),

    #[error("Failed to provision audit table {table}: {source}")]
    ProvisioningFailed {
        table: String,
        #[source]
        source: sea_orm::DbErr,
    },

    #[error("Invalid audit record: {0}")]
    InvalidRecord(String),
}
