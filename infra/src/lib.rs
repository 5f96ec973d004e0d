//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the SafeCheck backend,
//! following Clean Architecture principles. It provides concrete
//! implementations for database access, OTP storage, and email delivery.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: PostgreSQL repositories using SQLx, plus schema bootstrap
//!   and catalog seeding
//! - **Cache**: Redis client and the Redis-backed OTP store
//! - **Email**: Outbound email providers (Mailgun HTTP API, console mock)
//!
//! ## Features
//!
//! - `postgres`: Enable PostgreSQL database support (default)
//! - `redis-cache`: Enable the Redis OTP store (default)

// Re-export core types for convenience
pub use sc_core::errors::*;

/// Database module - PostgreSQL implementations using SQLx
#[cfg(feature = "postgres")]
pub mod database;

/// Cache module - Redis client and OTP storage
#[cfg(feature = "redis-cache")]
pub mod cache;

/// Email module - Outbound delivery providers
pub mod email;

/// Configuration module for infrastructure services
pub mod config {
    //! Configuration management for infrastructure services
    //!
    //! Composes the shared config sections the infrastructure layer needs:
    //! database connection settings, Redis settings, and email provider
    //! credentials.

    use serde::{Deserialize, Serialize};

    pub use sc_shared::config::{
        cache::CacheConfig, database::DatabaseConfig, email::EmailConfig,
    };

    /// Infrastructure configuration settings
    #[derive(Debug, Clone, Default, Serialize, Deserialize)]
    pub struct InfrastructureConfig {
        /// Database configuration
        pub database: DatabaseConfig,
        /// Redis cache configuration
        pub cache: CacheConfig,
        /// Email provider configuration
        pub email: EmailConfig,
    }

    impl InfrastructureConfig {
        /// Load infrastructure configuration from environment
        pub fn from_env() -> Self {
            dotenvy::dotenv().ok();

            Self {
                database: DatabaseConfig::from_env(),
                cache: CacheConfig::from_env(),
                email: EmailConfig::from_env(),
            }
        }
    }
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Email delivery error
    #[error("Email delivery error: {0}")]
    Email(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}
