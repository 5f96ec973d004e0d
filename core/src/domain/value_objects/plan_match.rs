//! Plan match value object: one row of a recommendation ranking.

use serde::{Deserialize, Serialize};

use crate::domain::entities::plan::{Plan, PlanType};
use sc_shared::utils::format::format_amount_range;

/// A scored plan as presented to the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanMatch {
    /// Catalog id of the matched plan
    pub plan_id: i64,

    /// Marketed plan name
    pub plan_name: String,

    /// Product category
    pub plan_type: PlanType,

    /// Sum-assured band rendered as `"{min} - {max}"` with separators
    pub sum_assured_range: String,

    /// Marketing description
    pub description: Option<String>,

    /// Composite score rounded to 2 decimals
    pub match_score: f64,
}

impl PlanMatch {
    /// Builds the presentation row for a scored plan
    pub fn from_plan(plan: &Plan, match_score: f64) -> Self {
        Self {
            plan_id: plan.id,
            plan_name: plan.plan_name.clone(),
            plan_type: plan.plan_type,
            sum_assured_range: format_amount_range(plan.min_sum_assured, plan.max_sum_assured),
            description: plan.description.clone(),
            match_score,
        }
    }
}
