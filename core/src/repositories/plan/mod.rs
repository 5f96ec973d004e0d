//! Plan catalog repository module

pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;

pub mod mock;


pub use mock::MockPlanRepository;
pub use r#trait::PlanRepository;
