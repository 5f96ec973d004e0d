//! Recommendation service implementation

use std::sync::Arc;

use crate::domain::entities::user_history::{NewUserHistory, UserHistory};
use crate::domain::value_objects::{PlanMatch, UserProfile};
use crate::errors::DomainResult;
use crate::repositories::{PlanRepository, UserHistoryRepository};
use crate::services::matcher::rank_plans;

/// Saved history row plus the ranked plans it produced
#[derive(Debug, Clone)]
pub struct RecommendationOutcome {
    pub history: UserHistory,
    pub plans: Vec<PlanMatch>,
}

/// Recommendation service: capture a profile snapshot and rank the catalog
pub struct RecommendationService<P, H>
where
    P: PlanRepository,
    H: UserHistoryRepository,
{
    /// Plan catalog access
    plan_repository: Arc<P>,
    /// Profile history persistence
    history_repository: Arc<H>,
}

impl<P, H> RecommendationService<P, H>
where
    P: PlanRepository,
    H: UserHistoryRepository,
{
    pub fn new(plan_repository: Arc<P>, history_repository: Arc<H>) -> Self {
        Self {
            plan_repository,
            history_repository,
        }
    }

    /// Record a profile snapshot and return ranked plan recommendations
    ///
    /// This method:
    /// 1. Validates the profile (age 18-100, non-negative dependents)
    /// 2. Persists the history row
    /// 3. Loads the full catalog and ranks every eligible plan
    ///
    /// The history row is written before matching runs, so a request that
    /// matches nothing still leaves a record of what was asked; `NoMatch`
    /// then surfaces with the row already saved.
    pub async fn recommend(&self, request: NewUserHistory) -> DomainResult<RecommendationOutcome> {
        let profile =
            UserProfile::new(request.age, request.no_of_dependent, request.risk_capacity)?;

        let history = self.history_repository.create(request).await?;

        let plans = self.plan_repository.find_all().await?;
        let ranked = rank_plans(&profile, &plans)?;

        tracing::info!(
            user_id = history.user_id,
            history_id = history.id,
            matches = ranked.len(),
            event = "plans_recommended",
            "Ranked plan recommendations"
        );

        Ok(RecommendationOutcome {
            history,
            plans: ranked,
        })
    }
}
