//! Plan matching engine
//!
//! Two layers: [`scoring`] holds the pure per-plan scoring arithmetic,
//! [`engine`] applies eligibility filtering and ranks the survivors.
//! Everything here is synchronous and side-effect free; persistence and
//! catalog loading live with the callers.

mod engine;
mod scoring;

pub use engine::{is_eligible, rank_plans};
pub use scoring::{
    age_match, dependents_factor, match_score, risk_match, AGE_WEIGHT, DEPENDENTS_WEIGHT,
    RISK_WEIGHT,
};
