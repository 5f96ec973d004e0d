//! Mock implementation of PlanRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::plan::Plan;
use crate::errors::DomainError;

use super::trait_::PlanRepository;

/// Mock plan repository backed by an in-memory catalog
pub struct MockPlanRepository {
    plans: Arc<RwLock<Vec<Plan>>>,
}

impl MockPlanRepository {
    /// Create an empty mock catalog
    pub fn new() -> Self {
        Self {
            plans: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a mock catalog pre-loaded with plans
    pub fn with_plans(plans: Vec<Plan>) -> Self {
        Self {
            plans: Arc::new(RwLock::new(plans)),
        }
    }

    /// Replace the catalog contents
    pub async fn set_plans(&self, plans: Vec<Plan>) {
        *self.plans.write().await = plans;
    }
}

impl Default for MockPlanRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlanRepository for MockPlanRepository {
    async fn find_all(&self) -> Result<Vec<Plan>, DomainError> {
        let plans = self.plans.read().await;
        Ok(plans.clone())
    }
}
