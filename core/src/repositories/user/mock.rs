//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::DomainError;

use super::trait_::UserRepository;

/// Mock user repository for testing
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<i64, User>>>,
    next_id: AtomicI64,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        // Check for duplicate email
        if users.values().any(|u| u.email == new_user.email) {
            return Err(DomainError::Validation {
                message: "Email already registered".to_string(),
            });
        }

        let now = Utc::now();
        let user = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: new_user.name,
            email: new_user.email,
            date_of_birth: new_user.date_of_birth,
            is_active: true,
            is_verified: false,
            created_at: now,
            updated_at: now,
        };

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.email == email))
    }

    async fn mark_verified(&self, user_id: i64) -> Result<(), DomainError> {
        let mut users = self.users.write().await;
        match users.get_mut(&user_id) {
            Some(user) => {
                user.verify();
                Ok(())
            }
            None => Err(DomainError::NotFound {
                resource: format!("User {}", user_id),
            }),
        }
    }
}
