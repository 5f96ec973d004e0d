//! Mock implementation of UserHistoryRepository for testing

use async_trait::async_trait;
use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user_history::{NewUserHistory, UserHistory};
use crate::errors::DomainError;

use super::trait_::UserHistoryRepository;

/// Mock history repository for testing
pub struct MockUserHistoryRepository {
    rows: Arc<RwLock<Vec<UserHistory>>>,
    next_id: AtomicI64,
    fail_next: AtomicI64,
}

impl MockUserHistoryRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(Vec::new())),
            next_id: AtomicI64::new(1),
            fail_next: AtomicI64::new(0),
        }
    }

    /// Make the next `n` inserts fail with a database error
    pub fn fail_next_inserts(&self, n: i64) {
        self.fail_next.store(n, Ordering::SeqCst);
    }

    /// Snapshot of everything saved so far
    pub async fn saved(&self) -> Vec<UserHistory> {
        self.rows.read().await.clone()
    }
}

impl Default for MockUserHistoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserHistoryRepository for MockUserHistoryRepository {
    async fn create(&self, snapshot: NewUserHistory) -> Result<UserHistory, DomainError> {
        if self.fail_next.load(Ordering::SeqCst) > 0 {
            self.fail_next.fetch_sub(1, Ordering::SeqCst);
            return Err(DomainError::Database {
                message: "simulated insert failure".to_string(),
            });
        }

        let row = UserHistory {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            user_id: snapshot.user_id,
            age: snapshot.age,
            annual_income: snapshot.annual_income,
            no_of_dependent: snapshot.no_of_dependent,
            risk_capacity: snapshot.risk_capacity,
            created_at: Utc::now(),
        };

        self.rows.write().await.push(row.clone());
        Ok(row)
    }
}
