use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use sea_orm::sea_query::{
    Alias, ColumnDef, Expr, Index, OnConflict, Order, Query, SelectStatement, SimpleExpr, Table,
};
use sea_orm::{ConnectionTrait, DatabaseConnection, DeriveIden, FromQueryResult};
use tokio::sync::OnceCell;

use crate::errors::internal::AuditError;
use crate::errors::InternalError;
use crate::types::internal::{ActionKind, AuditRecord, EmployeeSnapshot};

/// Append-only sink for audit records
///
/// Implementations upsert in replace mode keyed by (partition key, row key):
/// re-sending an identical record is safe and leaves a single entry.
#[async_trait]
pub trait AuditLog: Send + Sync {
    async fn append(&self, record: &AuditRecord) -> Result<(), InternalError>;
}

#[derive(DeriveIden)]
enum LogColumn {
    PartitionKey,
    RowKey,
    Action,
    Timestamp,
    EmployeeId,
    Name,
    Address,
    Extension,
    WorkEmail,
    Department,
    Salary,
    AdmissionDate,
}

const ALL_COLUMNS: [LogColumn; 12] = [
    LogColumn::PartitionKey,
    LogColumn::RowKey,
    LogColumn::Action,
    LogColumn::Timestamp,
    LogColumn::EmployeeId,
    LogColumn::Name,
    LogColumn::Address,
    LogColumn::Extension,
    LogColumn::WorkEmail,
    LogColumn::Department,
    LogColumn::Salary,
    LogColumn::AdmissionDate,
];

/// Columns replaced when an append hits an existing (partition, row) key
const PAYLOAD_COLUMNS: [LogColumn; 10] = [
    LogColumn::Action,
    LogColumn::Timestamp,
    LogColumn::EmployeeId,
    LogColumn::Name,
    LogColumn::Address,
    LogColumn::Extension,
    LogColumn::WorkEmail,
    LogColumn::Department,
    LogColumn::Salary,
    LogColumn::AdmissionDate,
];

/// Audit log backed by a partition/row keyed table in its own database
///
/// The table name comes from configuration and the table is created on
/// first use, so the audit database needs no migrations.
pub struct AuditLogStore {
    db: DatabaseConnection,
    table_name: String,
    provisioned: OnceCell<()>,
}

impl AuditLogStore {
    /// Create a new AuditLogStore writing to `table_name`
    pub fn new(db: DatabaseConnection, table_name: impl Into<String>) -> Self {
        Self {
            db,
            table_name: table_name.into(),
            provisioned: OnceCell::new(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Create the log table if it does not exist yet
    ///
    /// Runs once per store; a failed attempt is retried on the next call.
    pub async fn ensure_provisioned(&self) -> Result<(), InternalError> {
        self.provisioned
            .get_or_try_init(|| async {
                let stmt = Table::create()
                    .table(Alias::new(&self.table_name))
                    .if_not_exists()
                    .col(ColumnDef::new(LogColumn::PartitionKey).string().not_null())
                    .col(ColumnDef::new(LogColumn::RowKey).string().not_null())
                    .col(ColumnDef::new(LogColumn::Action).string().not_null())
                    .col(ColumnDef::new(LogColumn::Timestamp).string().not_null())
                    .col(ColumnDef::new(LogColumn::EmployeeId).integer().not_null())
                    .col(ColumnDef::new(LogColumn::Name).string().not_null())
                    .col(ColumnDef::new(LogColumn::Address).string())
                    .col(ColumnDef::new(LogColumn::Extension).string())
                    .col(ColumnDef::new(LogColumn::WorkEmail).string())
                    .col(ColumnDef::new(LogColumn::Department).string())
                    .col(ColumnDef::new(LogColumn::Salary).double())
                    .col(ColumnDef::new(LogColumn::AdmissionDate).string())
                    .primary_key(
                        Index::create()
                            .col(LogColumn::PartitionKey)
                            .col(LogColumn::RowKey),
                    )
                    .to_owned();

                let backend = self.db.get_database_backend();
                self.db
                    .execute(backend.build(&stmt))
                    .await
                    .map_err(|source| AuditError::ProvisioningFailed {
                        table: self.table_name.clone(),
                        source,
                    })?;

                tracing::debug!("Audit log table {} is ready", self.table_name);
                Ok::<(), InternalError>(())
            })
            .await?;

        Ok(())
    }

    /// Fetch a single entry by its full key
    pub async fn find(
        &self,
        partition_key: &str,
        row_key: &str,
    ) -> Result<Option<AuditRecord>, InternalError> {
        let mut select = self.select_all();
        select
            .and_where(Expr::col(LogColumn::PartitionKey).eq(partition_key))
            .and_where(Expr::col(LogColumn::RowKey).eq(row_key));

        let mut rows = self.fetch(select, "find_audit_record").await?;
        match rows.pop() {
            Some(row) => Ok(Some(row.try_into()?)),
            None => Ok(None),
        }
    }

    /// All entries of one partition, oldest first
    pub async fn list_partition(&self, partition_key: &str) -> Result<Vec<AuditRecord>, InternalError> {
        let mut select = self.select_all();
        select
            .and_where(Expr::col(LogColumn::PartitionKey).eq(partition_key))
            .order_by(LogColumn::Timestamp, Order::Asc)
            .order_by(LogColumn::RowKey, Order::Asc);

        self.fetch(select, "list_audit_partition")
            .await?
            .into_iter()
            .map(AuditRecord::try_from)
            .collect()
    }

    fn select_all(&self) -> SelectStatement {
        Query::select()
            .columns(ALL_COLUMNS)
            .from(Alias::new(&self.table_name))
            .to_owned()
    }

    async fn fetch(
        &self,
        select: SelectStatement,
        operation: &str,
    ) -> Result<Vec<AuditLogRow>, InternalError> {
        self.ensure_provisioned().await?;

        let backend = self.db.get_database_backend();
        AuditLogRow::find_by_statement(backend.build(&select))
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database(operation, e))
    }
}

#[async_trait]
impl AuditLog for AuditLogStore {
    /// Upsert the record in replace mode
    ///
    /// # Errors
    ///
    /// Returns `InternalError` if provisioning or the write fails. The caller's
    /// primary-store commit is never touched.
    async fn append(&self, record: &AuditRecord) -> Result<(), InternalError> {
        self.ensure_provisioned().await?;

        let snapshot = record.snapshot();
        let values: Vec<SimpleExpr> = vec![
            record.partition_key().into(),
            record.row_key().into(),
            record.action().as_str().into(),
            record.recorded_at().to_rfc3339_opts(SecondsFormat::Nanos, true).into(),
            snapshot.employee_id.into(),
            snapshot.name.clone().into(),
            snapshot.address.clone().into(),
            snapshot.extension.clone().into(),
            snapshot.work_email.clone().into(),
            snapshot.department.clone().into(),
            snapshot.salary.into(),
            snapshot.admission_date.map(|d| d.to_rfc3339_opts(SecondsFormat::Nanos, true)).into(),
        ];

        let mut insert = Query::insert();
        insert
            .into_table(Alias::new(&self.table_name))
            .columns(ALL_COLUMNS);
        insert
            .values(values)
            .map_err(|e| AuditError::InvalidRecord(e.to_string()))?;
        insert.on_conflict(
            OnConflict::columns([LogColumn::PartitionKey, LogColumn::RowKey])
                .update_columns(PAYLOAD_COLUMNS)
                .to_owned(),
        );

        let backend = self.db.get_database_backend();
        self.db
            .execute(backend.build(&insert))
            .await
            .map_err(|e| AuditError::LogWriteFailed(e.to_string()))?;

        tracing::debug!(
            partition_key = record.partition_key(),
            row_key = record.row_key(),
            action = %record.action(),
            "Audit record appended"
        );

        Ok(())
    }
}

impl std::fmt::Debug for AuditLogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuditLogStore")
            .field("db", &"<connection>")
            .field("table_name", &self.table_name)
            .finish()
    }
}

#[derive(Debug, FromQueryResult)]
struct AuditLogRow {
    partition_key: String,
    row_key: String,
    action: String,
    timestamp: String,
    employee_id: i32,
    name: String,
    address: Option<String>,
    extension: Option<String>,
    work_email: Option<String>,
    department: Option<String>,
    salary: Option<f64>,
    admission_date: Option<String>,
}

fn parse_timestamp(field: &str, value: &str) -> Result<DateTime<Utc>, InternalError> {
    DateTime::parse_from_rfc3339(value)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|e| InternalError::parse(field, format!("'{}': {}", value, e)))
}

impl TryFrom<AuditLogRow> for AuditRecord {
    type Error = InternalError;

    fn try_from(row: AuditLogRow) -> Result<Self, Self::Error> {
        let action: ActionKind = row.action.parse()?;
        let recorded_at = parse_timestamp("timestamp", &row.timestamp)?;
        let admission_date = row
            .admission_date
            .as_deref()
            .map(|d| parse_timestamp("admission_date", d))
            .transpose()?;

        Ok(AuditRecord::new(
            row.partition_key,
            row.row_key,
            action,
            recorded_at,
            EmployeeSnapshot {
                employee_id: row.employee_id,
                name: row.name,
                address: row.address,
                extension: row.extension,
                work_email: row.work_email,
                department: row.department,
                salary: row.salary,
                admission_date,
            },
        ))
    }
}
