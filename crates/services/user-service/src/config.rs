//! User service configuration.

use common::{DatabaseConfig, HttpClientConfig, ServiceConfig};
use domain::DEFAULT_USER_SERVICE_PORT;

/// User service configuration.
#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    /// Listener settings
    pub server: ServiceConfig,
    /// Database settings
    pub database: DatabaseConfig,
    /// Category service client settings
    pub category_service: HttpClientConfig,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            server: ServiceConfig::from_env(
                "User service",
                "USER_SERVICE",
                DEFAULT_USER_SERVICE_PORT,
            ),
            database: DatabaseConfig::from_env("USER_SERVICE"),
            category_service: HttpClientConfig::category_from_env(),
        }
    }
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            server: ServiceConfig {
                service_name: "User service".to_string(),
                port: DEFAULT_USER_SERVICE_PORT,
                ..ServiceConfig::default()
            },
            database: DatabaseConfig::default(),
            category_service: HttpClientConfig::default(),
        }
    }
}
