use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database error: {operation} failed: {source}")]
    Operation {
        operation: String,
        #[source]
        source: sea_orm::DbErr,
    },

    #[error("Connecting to {database} database failed: {source}")]
    Connection {
        database: String,
        #[source]
        source: sea_orm::DbErr,
    },

    #[error("Running {database} migrations failed: {source}")]
    Migration {
        database: String,
        #[source]
        source: sea_orm::DbErr,
    },
}
