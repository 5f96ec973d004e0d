//! Plan recommendation workflow

mod service;

#[cfg(test)]
mod tests;

pub use service::{RecommendationOutcome, RecommendationService};
