//! Server configuration module

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,

    /// Keep-alive timeout in seconds
    #[serde(default = "default_keep_alive")]
    pub keep_alive: u64,

    /// Maximum payload size in bytes
    #[serde(default = "default_max_payload_size")]
    pub max_payload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: 0, // Use all CPU cores
            keep_alive: default_keep_alive(),
            max_payload_size: default_max_payload_size(),
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| default_host());
        let port = std::env::var("SERVER_PORT")
            .unwrap_or_else(|_| default_port().to_string())
            .parse()
            .unwrap_or_else(|_| default_port());
        let workers = std::env::var("SERVER_WORKERS")
            .unwrap_or_else(|_| "0".to_string())
            .parse()
            .unwrap_or(0);

        Self {
            host,
            port,
            workers,
            ..Default::default()
        }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_host() -> String {
    String::from("0.0.0.0")
}

fn default_port() -> u16 {
    8080
}

fn default_keep_alive() -> u64 {
    75 // 75 seconds
}

fn default_max_payload_size() -> usize {
    10 * 1024 * 1024 // 10 MB
}
