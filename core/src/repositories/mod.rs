//! Repository interfaces the infrastructure layer implements.

pub mod history;
pub mod plan;
pub mod user;

pub use history::UserHistoryRepository;
pub use plan::PlanRepository;
pub use user::UserRepository;
