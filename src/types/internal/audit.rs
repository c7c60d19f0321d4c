use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::errors::InternalError;
use crate::types::internal::employee::Employee;

/// Kind of mutation an audit record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Created,
    Updated,
    Removed,
}

impl ActionKind {
    /// Tag stored in the audit log's action column
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Removed => "removed",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = InternalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created" => Ok(Self::Created),
            "updated" => Ok(Self::Updated),
            "removed" => Ok(Self::Removed),
            other => Err(InternalError::parse("action", format!("unknown tag '{}'", other))),
        }
    }
}

/// Copy of every employee attribute at the moment of the write
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeSnapshot {
    pub employee_id: i32,
    pub name: String,
    pub address: Option<String>,
    pub extension: Option<String>,
    pub work_email: Option<String>,
    pub department: Option<String>,
    pub salary: Option<f64>,
    pub admission_date: Option<DateTime<Utc>>,
}

impl From<&Employee> for EmployeeSnapshot {
    fn from(e: &Employee) -> Self {
        Self {
            employee_id: e.id,
            name: e.name.clone(),
            address: e.address.clone(),
            extension: e.extension.clone(),
            work_email: e.work_email.clone(),
            department: e.department.clone(),
            salary: e.salary,
            admission_date: e.admission_date,
        }
    }
}

impl EmployeeSnapshot {
    /// Rebuild the employee the snapshot was taken from
    pub fn to_employee(&self) -> Employee {
        Employee {
            id: self.employee_id,
            name: self.name.clone(),
            address: self.address.clone(),
            extension: self.extension.clone(),
            work_email: self.work_email.clone(),
            department: self.department.clone(),
            salary: self.salary,
            admission_date: self.admission_date,
        }
    }
}

/// Immutable audit log entry, keyed by (partition key, row key)
///
/// Fields are only readable; a changed entry is always a new record.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditRecord {
    partition_key: String,
    row_key: String,
    action: ActionKind,
    recorded_at: DateTime<Utc>,
    snapshot: EmployeeSnapshot,
}

impl AuditRecord {
    pub fn new(
        partition_key: String,
        row_key: String,
        action: ActionKind,
        recorded_at: DateTime<Utc>,
        snapshot: EmployeeSnapshot,
    ) -> Self {
        Self {
            partition_key,
            row_key,
            action,
            recorded_at,
            snapshot,
        }
    }

    pub fn partition_key(&self) -> &str {
        &self.partition_key
    }

    pub fn row_key(&self) -> &str {
        &self.row_key
    }

    pub fn action(&self) -> ActionKind {
        self.action
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    pub fn snapshot(&self) -> &EmployeeSnapshot {
        &self.snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_kind_tags_round_trip() {
        for action in [ActionKind::Created, ActionKind::Updated, ActionKind::Removed] {
            assert_eq!(action.as_str().parse::<ActionKind>().unwrap(), action);
        }
    }

    #[test]
    fn test_unknown_action_tag_is_parse_error() {
        let err = "archived".parse::<ActionKind>().unwrap_err();
        assert!(err.to_string().contains("unknown tag 'archived'"));
    }

    #[test]
    fn test_snapshot_rebuilds_employee() {
        let employee = Employee {
            id: 3,
            name: "Bruno".to_string(),
            address: None,
            extension: Some("110".to_string()),
            work_email: None,
            department: Some("TI".to_string()),
            salary: None,
            admission_date: None,
        };

        assert_eq!(EmployeeSnapshot::from(&employee).to_employee(), employee);
    }
}
