/// Result of a coordinated write: the committed value plus what happened
/// to its audit record
#[derive(Debug, Clone, PartialEq)]
pub struct WriteOutcome<T> {
    pub value: T,
    pub audit: AuditOutcome,
}

impl<T> WriteOutcome<T> {
    pub fn new(value: T, audit: AuditOutcome) -> Self {
        Self { value, audit }
    }
}

/// Outcome of the audit append that follows a primary commit
///
/// A failed append never undoes the primary write.
#[derive(Debug, Clone, PartialEq)]
pub enum AuditOutcome {
    Recorded {
        partition_key: String,
        row_key: String,
    },
    Failed {
        partition_key: String,
        row_key: String,
        reason: String,
    },
}

impl AuditOutcome {
    pub fn is_recorded(&self) -> bool {
        matches!(self, AuditOutcome::Recorded { .. })
    }

    pub fn row_key(&self) -> &str {
        match self {
            AuditOutcome::Recorded { row_key, .. } => row_key,
            AuditOutcome::Failed { row_key, .. } => row_key,
        }
    }

    pub fn partition_key(&self) -> &str {
        match self {
            AuditOutcome::Recorded { partition_key, .. } => partition_key,
            AuditOutcome::Failed { partition_key, .. } => partition_key,
        }
    }
}
