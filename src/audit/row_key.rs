use uuid::Uuid;

/// Source of audit log row keys
///
/// Every call must return a token never returned before; the coordinator
/// relies on this to make each append an insert.
pub trait RowKeyGenerator: Send + Sync {
    fn next_row_key(&self) -> String;
}

/// Production generator backed by random v4 UUIDs
pub struct UuidRowKeyGenerator;

impl RowKeyGenerator for UuidRowKeyGenerator {
    fn next_row_key(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic generator for tests: `<prefix>-1`, `<prefix>-2`, ...
#[cfg(test)]
pub struct SequentialRowKeyGenerator {
    prefix: String,
    counter: std::sync::atomic::AtomicU64,
}

#[cfg(test)]
impl SequentialRowKeyGenerator {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            counter: std::sync::atomic::AtomicU64::new(0),
        }
    }
}

#[cfg(test)]
impl RowKeyGenerator for SequentialRowKeyGenerator {
    fn next_row_key(&self) -> String {
        let n = self
            .counter
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst)
            + 1;
        format!("{}-{}", self.prefix, n)
    }
}
