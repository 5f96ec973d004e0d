//! Value objects representing immutable domain concepts.

pub mod plan_match;
pub mod user_profile;

// Re-export commonly used types
pub use plan_match::PlanMatch;
pub use user_profile::{UserProfile, MAX_PROFILE_AGE, MIN_PROFILE_AGE};
