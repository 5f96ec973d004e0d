//! Shared utilities and common types for the SafeCheck server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error codes shared between layers
//! - Utility functions (field validation, formatting, masking)
//! - The API response envelope

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CacheConfig, DatabaseConfig, EmailConfig, Environment, OtpConfig, ServerConfig,
};
pub use errors::error_codes;
pub use types::{ApiResponse, ErrorBody};
pub use utils::{format, validation};
