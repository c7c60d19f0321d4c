use chrono::Utc;

use crate::audit::row_key::RowKeyGenerator;
use crate::types::internal::{ActionKind, AuditRecord, Employee, EmployeeSnapshot};

/// Partition used when an employee has no department
pub const FALLBACK_PARTITION: &str = "Geral";

/// Partition key for an employee: its department, or the fallback when the
/// department is missing or blank
pub fn partition_key_for(employee: &Employee) -> String {
    match employee.department.as_deref() {
        Some(department) if !department.trim().is_empty() => department.to_string(),
        _ => FALLBACK_PARTITION.to_string(),
    }
}

/// Build the audit record for `action` applied to `employee`
///
/// Pure apart from reading the clock and drawing one row key. Every employee
/// attribute is copied so the log can be read without the primary store.
pub fn encode(
    employee: &Employee,
    action: ActionKind,
    row_keys: &dyn RowKeyGenerator,
) -> AuditRecord {
    AuditRecord::new(
        partition_key_for(employee),
        row_keys.next_row_key(),
        action,
        Utc::now(),
        EmployeeSnapshot::from(employee),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::row_key::SequentialRowKeyGenerator;
    use chrono::TimeZone;

    fn employee(department: Option<&str>) -> Employee {
        Employee {
            id: 1,
            name: "Ana".to_string(),
            address: Some("Rua das Flores, 12".to_string()),
            extension: Some("4410".to_string()),
            work_email: Some("ana@example.com".to_string()),
            department: department.map(str::to_string),
            salary: Some(5300.5),
            admission_date: Some(Utc.with_ymd_and_hms(2021, 3, 1, 9, 0, 0).unwrap()),
        }
    }

    #[test]
    fn test_department_becomes_partition_key() {
        let generator = SequentialRowKeyGenerator::new("k");
        let record = encode(&employee(Some("RH")), ActionKind::Created, &generator);
        assert_eq!(record.partition_key(), "RH");
    }

    #[test]
    fn test_missing_department_falls_back() {
        let generator = SequentialRowKeyGenerator::new("k");
        for action in [ActionKind::Created, ActionKind::Updated, ActionKind::Removed] {
            let record = encode(&employee(None), action, &generator);
            assert_eq!(record.partition_key(), FALLBACK_PARTITION);
        }
    }

    #[test]
    fn test_blank_department_falls_back() {
        let generator = SequentialRowKeyGenerator::new("k");
        let record = encode(&employee(Some("  ")), ActionKind::Updated, &generator);
        assert_eq!(record.partition_key(), "Geral");
    }

    #[test]
    fn test_each_encode_draws_a_fresh_row_key() {
        let generator = SequentialRowKeyGenerator::new("k");
        let e = employee(Some("RH"));

        let first = encode(&e, ActionKind::Updated, &generator);
        let second = encode(&e, ActionKind::Updated, &generator);

        assert_eq!(first.row_key(), "k-1");
        assert_eq!(second.row_key(), "k-2");
    }

    #[test]
    fn test_snapshot_copies_every_attribute() {
        let generator = SequentialRowKeyGenerator::new("k");
        let e = employee(Some("RH"));

        let record = encode(&e, ActionKind::Removed, &generator);

        assert_eq!(record.action(), ActionKind::Removed);
        assert_eq!(record.snapshot().to_employee(), e);
    }
}
