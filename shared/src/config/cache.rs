//! Cache configuration module

use serde::{Deserialize, Serialize};

/// Redis cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Redis connection URL
    #[serde(default = "default_url")]
    pub url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,

    /// Number of connection attempts before giving up
    #[serde(default = "default_connect_retries")]
    pub connect_retries: u32,

    /// Optional prefix applied to every key
    #[serde(default)]
    pub key_prefix: Option<String>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            connection_timeout: default_connection_timeout(),
            connect_retries: default_connect_retries(),
            key_prefix: None,
        }
    }
}

impl CacheConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let url = std::env::var("REDIS_URL").unwrap_or_else(|_| default_url());
        let connect_retries = std::env::var("REDIS_CONNECT_RETRIES")
            .unwrap_or_else(|_| default_connect_retries().to_string())
            .parse()
            .unwrap_or_else(|_| default_connect_retries());

        Self {
            url,
            connect_retries,
            ..Default::default()
        }
    }

    /// Create a new cache configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Generate a cache key with the configured prefix
    pub fn make_key(&self, key: &str) -> String {
        match &self.key_prefix {
            Some(prefix) => format!("{}:{}", prefix, key),
            None => key.to_string(),
        }
    }
}

fn default_url() -> String {
    String::from("redis://localhost:6379")
}

fn default_connection_timeout() -> u64 {
    5
}

fn default_connect_retries() -> u32 {
    3
}
