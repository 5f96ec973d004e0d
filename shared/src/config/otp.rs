//! OTP configuration module

use serde::{Deserialize, Serialize};

/// Which backend holds issued OTP codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OtpStoreBackend {
    /// Process-local store with lazy TTL eviction
    #[default]
    Memory,
    /// Redis-backed store, for multi-instance deployments
    Redis,
}

/// OTP issuing and verification configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Seconds an issued code stays valid
    #[serde(default = "default_ttl_seconds")]
    pub ttl_seconds: u64,

    /// Store backend holding issued codes
    #[serde(default)]
    pub store: OtpStoreBackend,

    /// Capacity bound for the in-memory store
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: default_ttl_seconds(),
            store: OtpStoreBackend::default(),
            max_entries: default_max_entries(),
        }
    }
}

impl OtpConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let ttl_seconds = std::env::var("OTP_TTL_SECONDS")
            .unwrap_or_else(|_| default_ttl_seconds().to_string())
            .parse()
            .unwrap_or_else(|_| default_ttl_seconds());
        let store = match std::env::var("OTP_STORE").as_deref() {
            Ok("redis") => OtpStoreBackend::Redis,
            _ => OtpStoreBackend::Memory,
        };
        let max_entries = std::env::var("OTP_MAX_ENTRIES")
            .unwrap_or_else(|_| default_max_entries().to_string())
            .parse()
            .unwrap_or_else(|_| default_max_entries());

        Self {
            ttl_seconds,
            store,
            max_entries,
        }
    }
}

fn default_ttl_seconds() -> u64 {
    240 // 4 minutes
}

fn default_max_entries() -> usize {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_otp_config_default() {
        let config = OtpConfig::default();
        assert_eq!(config.ttl_seconds, 240);
        assert_eq!(config.store, OtpStoreBackend::Memory);
        assert_eq!(config.max_entries, 1000);
    }

    #[test]
    fn test_otp_store_backend_serde() {
        let backend: OtpStoreBackend = serde_json::from_str(r#""redis""#).unwrap();
        assert_eq!(backend, OtpStoreBackend::Redis);
        assert_eq!(serde_json::to_string(&OtpStoreBackend::Memory).unwrap(), r#""memory""#);
    }
}
