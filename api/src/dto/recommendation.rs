use serde::{Deserialize, Serialize};
use validator::Validate;

use sc_core::domain::entities::plan::RiskLevel;
use sc_core::domain::entities::user_history::{NewUserHistory, UserHistory};
use sc_core::domain::value_objects::PlanMatch;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    /// The registered user this profile snapshot belongs to
    #[validate(range(min = 1, message = "user_id must be a positive integer"))]
    pub user_id: i64,

    /// Age in whole years
    #[validate(range(min = 18, max = 100, message = "Age must be between 18-100"))]
    pub age: i32,

    /// Declared annual income, in whole rupees
    #[validate(range(min = 0, message = "annual_income must not be negative"))]
    pub annual_income: i64,

    /// Number of dependents
    #[serde(alias = "dependents_count")]
    #[validate(range(min = 0, message = "no_of_dependent must not be negative"))]
    pub no_of_dependent: i32,

    /// Declared risk tolerance: low, medium, or high
    #[serde(alias = "risk_tolerance")]
    pub risk_capacity: RiskLevel,
}

impl RecommendRequest {
    /// Insert shape for the history row
    pub fn to_new_history(&self) -> NewUserHistory {
        NewUserHistory {
            user_id: self.user_id,
            age: self.age,
            annual_income: self.annual_income,
            no_of_dependent: self.no_of_dependent,
            risk_capacity: self.risk_capacity,
        }
    }
}

/// Identifier and timestamp of the saved history row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistorySummary {
    pub id: i64,
    pub created_at: String,
}

/// Payload returned by a successful recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationData {
    pub history: HistorySummary,
    pub recommended_plans: Vec<PlanMatch>,
}

impl RecommendationData {
    pub fn new(history: &UserHistory, plans: Vec<PlanMatch>) -> Self {
        Self {
            history: HistorySummary {
                id: history.id,
                created_at: history.created_at.to_rfc3339(),
            },
            recommended_plans: plans,
        }
    }
}
