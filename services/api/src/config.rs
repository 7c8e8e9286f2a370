//! Service configuration loaded from the environment

use anyhow::{Context, Result};
use serde::Deserialize;

/// Which store backs the collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Postgres,
    Memory,
}

/// Service configuration
///
/// # Environment Variables
/// - `HOST`: address to bind (default: "0.0.0.0")
/// - `PORT`: port to listen on (default: 5000)
/// - `STORAGE_BACKEND`: "postgres" or "memory" (default: "postgres")
/// - `ADMIN_PHONE`: phone number granted the admin role at registration
///   (default: "9999999999")
///
/// Database settings are read separately by `common::database::DatabaseConfig`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage_backend: StorageBackend,
    pub admin_phone: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            storage_backend: StorageBackend::Postgres,
            admin_phone: "9999999999".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = AppConfig::default();

        config::Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("storage_backend", "postgres")?
            .set_default("admin_phone", defaults.admin_phone)?
            .add_source(config::Environment::default())
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Socket address string to bind
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 4] = ["HOST", "PORT", "STORAGE_BACKEND", "ADMIN_PHONE"];

    fn clear_vars() {
        for var in VARS {
            unsafe {
                std::env::remove_var(var);
            }
        }
    }

    #[test]
    #[serial]
    fn test_config_defaults() {
        clear_vars();

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.storage_backend, StorageBackend::Postgres);
        assert_eq!(config.admin_phone, "9999999999");
        assert_eq!(config.bind_address(), "0.0.0.0:5000");
    }

    #[test]
    #[serial]
    fn test_config_from_env_with_custom_values() {
        clear_vars();
        unsafe {
            std::env::set_var("PORT", "8080");
            std::env::set_var("STORAGE_BACKEND", "memory");
            std::env::set_var("ADMIN_PHONE", "0700000000");
        }

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.storage_backend, StorageBackend::Memory);
        assert_eq!(config.admin_phone, "0700000000");

        clear_vars();
    }

    #[test]
    #[serial]
    fn test_config_rejects_unknown_backend() {
        clear_vars();
        unsafe {
            std::env::set_var("STORAGE_BACKEND", "mongo");
        }

        assert!(AppConfig::from_env().is_err());

        clear_vars();
    }
}
