//! Plan catalog repository trait.

use async_trait::async_trait;

use crate::domain::entities::plan::Plan;
use crate::errors::DomainError;

/// Read access to the insurance plan catalog
///
/// The catalog is seeded at startup and read-only at runtime; the matcher
/// always works on the full snapshot and filters in memory.
#[async_trait]
pub trait PlanRepository: Send + Sync {
    /// Fetch the whole catalog, ordered by id
    async fn find_all(&self) -> Result<Vec<Plan>, DomainError>;
}
