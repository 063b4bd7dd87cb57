//! Category service configuration.

use common::{DatabaseConfig, ServiceConfig};
use domain::DEFAULT_CATEGORY_SERVICE_PORT;

/// Category service configuration.
#[derive(Debug, Clone)]
pub struct CategoryServiceConfig {
    /// Listener settings
    pub server: ServiceConfig,
    /// Database settings
    pub database: DatabaseConfig,
}

impl CategoryServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            server: ServiceConfig::from_env(
                "Category service",
                "CATEGORY_SERVICE",
                DEFAULT_CATEGORY_SERVICE_PORT,
            ),
            database: DatabaseConfig::from_env("CATEGORY_SERVICE"),
        }
    }
}

impl Default for CategoryServiceConfig {
    fn default() -> Self {
        Self {
            server: ServiceConfig {
                service_name: "Category service".to_string(),
                port: DEFAULT_CATEGORY_SERVICE_PORT,
                ..ServiceConfig::default()
            },
            database: DatabaseConfig::default(),
        }
    }
}
