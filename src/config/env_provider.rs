use std::collections::HashMap;

/// Source of environment variables
///
/// Settings read through this trait instead of `std::env` so tests can
/// supply values without touching process-global state.
pub trait EnvironmentProvider {
    fn get_var(&self, key: &str) -> Option<String>;
}

/// Production environment provider that reads from system environment
pub struct SystemEnvironment;

impl EnvironmentProvider for SystemEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Test environment provider with configurable variables
#[cfg(test)]
pub struct MockEnvironment {
    vars: HashMap<String, String>,
}

#[cfg(test)]
impl MockEnvironment {
    pub fn new(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }

    pub fn empty() -> Self {
        Self {
            vars: HashMap::new(),
        }
    }

    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }
}

#[cfg(test)]
impl EnvironmentProvider for MockEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Adapter so a plain map can serve as an environment outside of tests
impl EnvironmentProvider for HashMap<String, String> {
    fn get_var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_environment_reads_path() {
        // PATH is set in every environment the test suite runs in
        assert!(SystemEnvironment.get_var("PATH").is_some());
        assert_eq!(SystemEnvironment.get_var("EMPLOYEE_LEDGER_UNSET_98765"), None);
    }

    #[test]
    fn test_mock_environment_provider() {
        let provider = MockEnvironment::empty()
            .with_var("DATABASE_URL", "sqlite::memory:")
            .with_var("AUDIT_TABLE_NAME", "EmployeeLog");

        assert_eq!(provider.get_var("DATABASE_URL"), Some("sqlite::memory:".to_string()));
        assert_eq!(provider.get_var("AUDIT_TABLE_NAME"), Some("EmployeeLog".to_string()));
        assert_eq!(provider.get_var("PORT"), None);
    }

    #[test]
    fn test_hash_map_provider() {
        let vars = HashMap::from([("PORT".to_string(), "8080".to_string())]);

        assert_eq!(vars.get_var("PORT"), Some("8080".to_string()));
        assert_eq!(vars.get_var("HOST"), None);
    }
}
