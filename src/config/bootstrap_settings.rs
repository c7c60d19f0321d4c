use std::fmt;
use std::sync::Arc;

use crate::config::config_spec::ConfigSpec;
use crate::config::errors::ApplicationError;
use crate::config::EnvironmentProvider;

/// Settings read once at process start and never changed afterwards
pub struct BootstrapSettings {
    database_url: String,
    audit_database_url: String,
    audit_table_name: String,
    server_host: String,
    server_port: u16,
}

impl BootstrapSettings {
    /// Load bootstrap settings through the given environment provider
    pub fn from_env_provider(
        env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    ) -> Result<Self, ApplicationError> {
        let database_url = ConfigSpec::new(env_provider.clone())
            .env_override("DATABASE_URL")
            .default_value("sqlite://employees.db?mode=rwc")
            .min_length(1)
            .load_setting_with_source()?
            .value;

        let audit_database_url = ConfigSpec::new(env_provider.clone())
            .env_override("AUDIT_DATABASE_URL")
            .default_value("sqlite://audit.db?mode=rwc")
            .min_length(1)
            .load_setting_with_source()?
            .value;

        let audit_table_name = ConfigSpec::new(env_provider.clone())
            .env_override("AUDIT_TABLE_NAME")
            .default_value("EmployeeLog")
            .max_length(63)
            .validator(ConfigSpec::validate_table_name)
            .load_setting_with_source()?
            .value;

        let server_host = ConfigSpec::new(env_provider.clone())
            .env_override("HOST")
            .default_value("0.0.0.0")
            .validator(ConfigSpec::validate_host_address)
            .load_setting_with_source()?
            .value;

        let port_value = ConfigSpec::new(env_provider)
            .env_override("PORT")
            .default_value("3000")
            .validator(|value| ConfigSpec::validate_port_range(value, 1, 65535))
            .load_setting_with_source()?
            .value;

        let server_port = ConfigSpec::parse_port(&port_value, "PORT")?;

        Ok(Self {
            database_url,
            audit_database_url,
            audit_table_name,
            server_host,
            server_port,
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, ApplicationError> {
        use crate::config::SystemEnvironment;
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }

    /// Primary store connection string
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Audit log store connection string
    pub fn audit_database_url(&self) -> &str {
        &self.audit_database_url
    }

    /// Name of the audit log table (the log "container")
    pub fn audit_table_name(&self) -> &str {
        &self.audit_table_name
    }

    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl fmt::Debug for BootstrapSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapSettings")
            .field("database_url", &self.database_url)
            .field("audit_database_url", &self.audit_database_url)
            .field("audit_table_name", &self.audit_table_name)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockEnvironment;
    use std::collections::HashMap;

    fn create_test_env(vars: &[(&str, &str)]) -> Arc<MockEnvironment> {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        Arc::new(MockEnvironment::new(vars))
    }

    #[test]
    fn test_bootstrap_settings_with_all_vars() {
        let env_provider = create_test_env(&[
            ("DATABASE_URL", "sqlite://test.db"),
            ("AUDIT_DATABASE_URL", "sqlite://test-audit.db"),
            ("AUDIT_TABLE_NAME", "FuncionarioLog"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
        ]);

        let settings = BootstrapSettings::from_env_provider(env_provider).unwrap();

        assert_eq!(settings.database_url(), "sqlite://test.db");
        assert_eq!(settings.audit_database_url(), "sqlite://test-audit.db");
        assert_eq!(settings.audit_table_name(), "FuncionarioLog");
        assert_eq!(settings.server_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_bootstrap_settings_with_defaults() {
        let settings = BootstrapSettings::from_env_provider(create_test_env(&[])).unwrap();

        assert_eq!(settings.database_url(), "sqlite://employees.db?mode=rwc");
        assert_eq!(settings.audit_database_url(), "sqlite://audit.db?mode=rwc");
        assert_eq!(settings.audit_table_name(), "EmployeeLog");
        assert_eq!(settings.server_host(), "0.0.0.0");
        assert_eq!(settings.server_port(), 3000);
    }

    #[test]
    fn test_empty_database_url_fails_validation() {
        let result = BootstrapSettings::from_env_provider(create_test_env(&[("DATABASE_URL", "")]));

        match result.unwrap_err() {
            ApplicationError::InvalidSetting { setting_name, reason } => {
                assert_eq!(setting_name, "DATABASE_URL");
                assert!(reason.contains("must be at least 1 characters long"));
            }
            other => panic!("Expected InvalidSetting for DATABASE_URL, got: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_table_name_fails_validation() {
        let result =
            BootstrapSettings::from_env_provider(create_test_env(&[("AUDIT_TABLE_NAME", "log-table")]));

        match result.unwrap_err() {
            ApplicationError::InvalidSetting { setting_name, .. } => {
                assert_eq!(setting_name, "AUDIT_TABLE_NAME")
            }
            other => panic!("Expected InvalidSetting for AUDIT_TABLE_NAME, got: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_port_fails_validation() {
        let result = BootstrapSettings::from_env_provider(create_test_env(&[("PORT", "0")]));
        assert!(result.is_err());

        let result = BootstrapSettings::from_env_provider(create_test_env(&[("PORT", "abc")]));
        assert!(result.is_err());
    }
}
