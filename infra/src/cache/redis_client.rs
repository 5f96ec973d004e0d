//! Redis cache client implementation
//!
//! This module provides a Redis client with retry logic and the cache
//! operations backing the OTP store: set with expiry, get, delete, and
//! an atomic compare-and-delete used for one-shot code verification.

use redis::{aio::MultiplexedConnection, AsyncCommands, Client, RedisError, RedisResult};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use sc_shared::config::cache::CacheConfig;

use crate::InfrastructureError;

/// Lua script that deletes a key only when its value equals the argument.
///
/// GET/compare/DEL as separate commands would let two concurrent verify
/// requests both observe the code before either deletes it; the script
/// runs as a single atomic unit, so exactly one caller wins.
const COMPARE_AND_DELETE_SCRIPT: &str = r#"
local stored = redis.call('GET', KEYS[1])
if stored == ARGV[1] then
    redis.call('DEL', KEYS[1])
    return 1
end
return 0
"#;

/// Redis cache client with retry logic
///
/// Wraps a multiplexed async connection and retries transient failures
/// with exponential backoff.
#[derive(Clone)]
pub struct RedisClient {
    /// Redis multiplexed connection for async operations
    connection: MultiplexedConnection,
    /// Configuration used to create this client
    config: CacheConfig,
    /// Maximum number of retry attempts for operations
    max_retries: u32,
    /// Base delay between retries (exponential backoff)
    retry_delay_ms: u64,
}

impl RedisClient {
    /// Create a new Redis client
    ///
    /// Retries the initial connection `connect_retries` times from the
    /// configuration before giving up.
    ///
    /// # Arguments
    /// * `config` - Cache configuration settings
    ///
    /// # Example
    /// ```no_run
    /// use sc_shared::config::cache::CacheConfig;
    /// use sc_infra::cache::redis_client::RedisClient;
    ///
    /// async fn create_client() -> Result<RedisClient, Box<dyn std::error::Error>> {
    ///     let config = CacheConfig::new("redis://localhost:6379");
    ///     let client = RedisClient::new(config).await?;
    ///     Ok(client)
    /// }
    /// ```
    pub async fn new(config: CacheConfig) -> Result<Self, InfrastructureError> {
        let max_retries = config.connect_retries.max(1);
        Self::new_with_retry_config(config, max_retries, 100).await
    }

    /// Create a new Redis client with custom retry configuration
    ///
    /// # Arguments
    /// * `config` - Cache configuration settings
    /// * `max_retries` - Maximum number of retry attempts
    /// * `retry_delay_ms` - Base delay between retries in milliseconds
    pub async fn new_with_retry_config(
        config: CacheConfig,
        max_retries: u32,
        retry_delay_ms: u64,
    ) -> Result<Self, InfrastructureError> {
        info!("Creating Redis client with URL: {}", mask_url(&config.url));

        let client = Client::open(config.url.as_str()).map_err(|e| {
            error!("Failed to parse Redis URL: {}", e);
            InfrastructureError::Config(format!("Invalid Redis URL: {}", e))
        })?;

        let connection =
            Self::create_connection_with_retry(client, max_retries, retry_delay_ms).await?;

        info!("Redis client created successfully");

        Ok(Self {
            connection,
            config,
            max_retries,
            retry_delay_ms,
        })
    }

    /// Apply the configured key prefix, if any
    pub fn namespaced_key(&self, key: &str) -> String {
        self.config.make_key(key)
    }

    /// Create multiplexed connection with retry logic
    async fn create_connection_with_retry(
        client: Client,
        max_retries: u32,
        retry_delay_ms: u64,
    ) -> Result<MultiplexedConnection, InfrastructureError> {
        let mut attempts = 0;
        let mut delay = retry_delay_ms;

        loop {
            attempts += 1;
            debug!("Attempting to connect to Redis (attempt {})", attempts);

            match client.get_multiplexed_async_connection().await {
                Ok(connection) => {
                    info!("Successfully connected to Redis");
                    return Ok(connection);
                }
                Err(e) if attempts < max_retries => {
                    warn!(
                        "Failed to connect to Redis (attempt {}/{}): {}. Retrying in {}ms...",
                        attempts, max_retries, e, delay
                    );
                    sleep(Duration::from_millis(delay)).await;
                    // Exponential backoff with cap at 5 seconds
                    delay = (delay * 2).min(5000);
                }
                Err(e) => {
                    error!(
                        "Failed to connect to Redis after {} attempts: {}",
                        attempts, e
                    );
                    return Err(InfrastructureError::Cache(e));
                }
            }
        }
    }

    /// Set a value with expiration time
    ///
    /// # Arguments
    /// * `key` - Cache key
    /// * `value` - Value to cache
    /// * `expiry_seconds` - Time to live in seconds
    pub async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        expiry_seconds: u64,
    ) -> Result<(), InfrastructureError> {
        debug!("Setting key '{}' with expiry {}s", key, expiry_seconds);

        let result = self
            .execute_with_retry(|mut conn| {
                let key = key.to_string();
                let value = value.to_string();
                let expiry = expiry_seconds;

                Box::pin(async move { conn.set_ex::<_, _, ()>(key, value, expiry).await })
            })
            .await;

        match result {
            Ok(_) => {
                debug!("Successfully set key '{}'", key);
                Ok(())
            }
            Err(e) => {
                error!("Failed to set key '{}': {}", key, e);
                Err(InfrastructureError::Cache(e))
            }
        }
    }

    /// Get a value from cache
    ///
    /// # Returns
    /// * `Ok(Some(String))` - Cached value
    /// * `Ok(None)` - Key missing or expired
    pub async fn get(&self, key: &str) -> Result<Option<String>, InfrastructureError> {
        debug!("Getting key '{}'", key);

        let result = self
            .execute_with_retry(|mut conn| {
                let key = key.to_string();

                Box::pin(async move { conn.get::<_, Option<String>>(key).await })
            })
            .await;

        match result {
            Ok(value) => {
                if value.is_some() {
                    debug!("Successfully retrieved key '{}'", key);
                } else {
                    debug!("Key '{}' not found", key);
                }
                Ok(value)
            }
            Err(e) => {
                error!("Failed to get key '{}': {}", key, e);
                Err(InfrastructureError::Cache(e))
            }
        }
    }

    /// Delete a key from cache
    ///
    /// # Returns
    /// * `Ok(true)` - Key existed and was deleted
    /// * `Ok(false)` - Key was not found
    pub async fn delete(&self, key: &str) -> Result<bool, InfrastructureError> {
        debug!("Deleting key '{}'", key);

        let result = self
            .execute_with_retry(|mut conn| {
                let key = key.to_string();

                Box::pin(async move { conn.del::<_, u32>(key).await })
            })
            .await;

        match result {
            Ok(deleted_count) => {
                let deleted = deleted_count > 0;
                if deleted {
                    debug!("Successfully deleted key '{}'", key);
                } else {
                    debug!("Key '{}' was not found", key);
                }
                Ok(deleted)
            }
            Err(e) => {
                error!("Failed to delete key '{}': {}", key, e);
                Err(InfrastructureError::Cache(e))
            }
        }
    }

    /// Delete a key only if it currently holds the expected value
    ///
    /// Runs atomically server-side, so concurrent callers cannot both
    /// succeed for the same key.
    ///
    /// # Returns
    /// * `Ok(true)` - Value matched and the key was deleted
    /// * `Ok(false)` - Key missing or value differed
    pub async fn compare_and_delete(
        &self,
        key: &str,
        expected: &str,
    ) -> Result<bool, InfrastructureError> {
        debug!("Compare-and-delete on key '{}'", key);

        let result = self
            .execute_with_retry(|mut conn| {
                let key = key.to_string();
                let expected = expected.to_string();

                Box::pin(async move {
                    redis::Script::new(COMPARE_AND_DELETE_SCRIPT)
                        .key(key)
                        .arg(expected)
                        .invoke_async::<_, i64>(&mut conn)
                        .await
                })
            })
            .await;

        match result {
            Ok(deleted) => Ok(deleted == 1),
            Err(e) => {
                error!("Compare-and-delete failed for key '{}': {}", key, e);
                Err(InfrastructureError::Cache(e))
            }
        }
    }

    /// Get time-to-live for a key
    ///
    /// # Returns
    /// * `Ok(Some(i64))` - TTL in seconds
    /// * `Ok(None)` - Key missing or has no expiry
    pub async fn ttl(&self, key: &str) -> Result<Option<i64>, InfrastructureError> {
        debug!("Getting TTL for key '{}'", key);

        let result = self
            .execute_with_retry(|mut conn| {
                let key = key.to_string();

                Box::pin(async move { conn.ttl::<_, i64>(key).await })
            })
            .await;

        match result {
            Ok(ttl) if ttl >= 0 => {
                debug!("Key '{}' has TTL: {}s", key, ttl);
                Ok(Some(ttl))
            }
            Ok(ttl) if ttl == -1 => {
                debug!("Key '{}' exists but has no expiry", key);
                Ok(None)
            }
            Ok(_) => {
                debug!("Key '{}' does not exist", key);
                Ok(None)
            }
            Err(e) => {
                error!("Failed to get TTL for key '{}': {}", key, e);
                Err(InfrastructureError::Cache(e))
            }
        }
    }

    /// Check if the Redis connection is healthy
    ///
    /// Performs a PING command to verify connectivity.
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        debug!("Performing Redis health check");

        let result = self
            .execute_with_retry(|mut conn| {
                Box::pin(async move { redis::cmd("PING").query_async::<_, String>(&mut conn).await })
            })
            .await;

        match result {
            Ok(response) if response == "PONG" => {
                debug!("Redis health check passed");
                Ok(true)
            }
            Ok(response) => {
                warn!("Redis health check returned unexpected response: {}", response);
                Ok(false)
            }
            Err(e) => {
                error!("Redis health check failed: {}", e);
                Err(InfrastructureError::Cache(e))
            }
        }
    }

    /// Execute a Redis operation with automatic retry logic
    ///
    /// Retries transient failures with exponential backoff using the
    /// configured retry parameters.
    async fn execute_with_retry<F, T>(&self, operation: F) -> RedisResult<T>
    where
        F: Fn(
            MultiplexedConnection,
        )
            -> std::pin::Pin<Box<dyn std::future::Future<Output = RedisResult<T>> + Send>>,
    {
        let mut attempts = 0;
        let mut delay = self.retry_delay_ms;

        loop {
            attempts += 1;
            let conn = self.connection.clone();

            match operation(conn).await {
                Ok(result) => return Ok(result),
                Err(e) if attempts < self.max_retries && is_retriable_error(&e) => {
                    warn!(
                        "Redis operation failed (attempt {}/{}): {}. Retrying in {}ms...",
                        attempts, self.max_retries, e, delay
                    );
                    sleep(Duration::from_millis(delay)).await;
                    // Exponential backoff with cap at 5 seconds
                    delay = (delay * 2).min(5000);
                }
                Err(e) => {
                    error!("Redis operation failed after {} attempts: {}", attempts, e);
                    return Err(e);
                }
            }
        }
    }
}

/// Check if a Redis error is transient and worth retrying
pub(crate) fn is_retriable_error(error: &RedisError) -> bool {
    matches!(
        error.kind(),
        redis::ErrorKind::IoError
            | redis::ErrorKind::ClientError
            | redis::ErrorKind::BusyLoadingError
            | redis::ErrorKind::TryAgain
    )
}

/// Mask sensitive parts of Redis URL for logging
pub(crate) fn mask_url(url: &str) -> String {
    if let Some(at_pos) = url.find('@') {
        if let Some(proto_end) = url.find("://") {
            let proto = &url[..proto_end + 3];
            let host_part = &url[at_pos..];
            return format!("{}****{}", proto, host_part);
        }
    }
    url.to_string()
}
