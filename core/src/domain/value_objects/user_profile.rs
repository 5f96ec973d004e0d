//! User profile value object: the validated input to plan matching.

use serde::{Deserialize, Serialize};

use crate::domain::entities::plan::RiskLevel;
use crate::errors::{DomainError, DomainResult};

/// Youngest age a profile may declare
pub const MIN_PROFILE_AGE: i32 = 18;

/// Oldest age a profile may declare
pub const MAX_PROFILE_AGE: i32 = 100;

/// A validated recommendation profile
///
/// Construction enforces the age band, so every `UserProfile` handed to
/// the matcher is already known to be in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Age in whole years, within 18..=100
    pub age: i32,

    /// Number of dependents, non-negative
    pub no_of_dependent: i32,

    /// Declared risk tolerance
    pub risk_capacity: RiskLevel,
}

impl UserProfile {
    /// Creates a profile, rejecting out-of-band ages and negative
    /// dependent counts
    pub fn new(age: i32, no_of_dependent: i32, risk_capacity: RiskLevel) -> DomainResult<Self> {
        if !(MIN_PROFILE_AGE..=MAX_PROFILE_AGE).contains(&age) {
            return Err(DomainError::Validation {
                message: "Age must be between 18-100".to_string(),
            });
        }
        if no_of_dependent < 0 {
            return Err(DomainError::Validation {
                message: "Number of dependents cannot be negative".to_string(),
            });
        }
        Ok(Self {
            age,
            no_of_dependent,
            risk_capacity,
        })
    }
}
