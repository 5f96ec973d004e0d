//! PostgreSQL repository implementations.
//!
//! Each repository wraps a `PgPool` and implements one of the core
//! repository traits with runtime-checked SQLx queries.

pub mod history_repository_impl;
pub mod plan_repository_impl;
pub mod user_repository_impl;

pub use history_repository_impl::PgUserHistoryRepository;
pub use plan_repository_impl::PgPlanRepository;
pub use user_repository_impl::PgUserRepository;
