//! Cache module for Redis-based storage
//!
//! Provides the Redis client used by the OTP store, including connection
//! retry logic and an atomic compare-and-delete primitive.

pub mod redis_client;
pub mod redis_otp_store;

#[cfg(test)]
mod tests;

pub use redis_client::RedisClient;
pub use redis_otp_store::RedisOtpStore;

// Re-export commonly used types
pub use sc_shared::config::cache::CacheConfig;
