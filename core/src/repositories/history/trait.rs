//! User history repository trait.

use async_trait::async_trait;

use crate::domain::entities::user_history::{NewUserHistory, UserHistory};
use crate::errors::DomainError;

/// Persistence for recommendation profile snapshots
#[async_trait]
pub trait UserHistoryRepository: Send + Sync {
    /// Persist a snapshot and return the stored row
    ///
    /// # Returns
    /// * `Ok(UserHistory)` - The row with database-assigned id and timestamp
    /// * `Err(DomainError)` - Insert failed (e.g. the user id violates the
    ///   foreign key)
    async fn create(&self, snapshot: NewUserHistory) -> Result<UserHistory, DomainError>;
}
