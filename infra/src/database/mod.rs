//! Database module - PostgreSQL implementations using SQLx
//!
//! This module provides database access layer implementations including:
//! - Connection pool management
//! - Repository pattern implementations
//! - Schema bootstrap and plan catalog seeding

pub mod connection;
pub mod postgres;
pub mod seed;
pub mod setup;

// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use postgres::{PgPlanRepository, PgUserHistoryRepository, PgUserRepository};
pub use seed::seed_catalog;
pub use setup::initialize_database;
