//! Application configuration types
//!
//! Each concern gets its own sub-module with a serde-friendly struct, a
//! `Default` impl that works for local development, and a `from_env()`
//! constructor that reads the corresponding environment variables.

pub mod cache;
pub mod database;
pub mod email;
pub mod environment;
pub mod otp;
pub mod server;

pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use email::EmailConfig;
pub use environment::Environment;
pub use otp::OtpConfig;
pub use server::ServerConfig;

use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Runtime environment (development, staging, production)
    #[serde(default)]
    pub environment: Environment,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// PostgreSQL settings
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Redis settings
    #[serde(default)]
    pub cache: CacheConfig,

    /// OTP issuing and verification settings
    #[serde(default)]
    pub otp: OtpConfig,

    /// Outbound email settings
    #[serde(default)]
    pub email: EmailConfig,
}

impl AppConfig {
    /// Build the full configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            cache: CacheConfig::from_env(),
            otp: OtpConfig::from_env(),
            email: EmailConfig::from_env(),
        }
    }

    /// Configuration preset for local development
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            ..Default::default()
        }
    }

    /// Configuration preset for production deployments
    ///
    /// Starts from environment variables and forces the environment tag, so
    /// a missing `ENVIRONMENT` variable cannot silently downgrade CORS and
    /// logging to development behavior.
    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            ..Self::from_env()
        }
    }

    /// Whether the configuration targets a production deployment
    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.otp.ttl_seconds, 240);
        assert_eq!(config.email.provider, "mock");
    }

    #[test]
    fn test_development_preset() {
        let config = AppConfig::development();
        assert!(!config.is_production());
    }

    #[test]
    fn test_config_roundtrip_serde() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.server.host, config.server.host);
        assert_eq!(parsed.otp.max_entries, config.otp.max_entries);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let parsed: AppConfig = serde_json::from_str(r#"{"server": {"port": 9000}}"#).unwrap();
        assert_eq!(parsed.server.port, 9000);
        assert_eq!(parsed.server.host, "0.0.0.0");
        assert_eq!(parsed.otp.ttl_seconds, 240);
    }
}
