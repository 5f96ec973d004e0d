//! User repository trait defining the interface for user persistence.
//!
//! The trait is async-first and keeps the abstraction boundary between the
//! domain and infrastructure layers: the auth service only ever sees this
//! interface, never a connection pool.

use async_trait::async_trait;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::DomainError;

/// Repository contract for User entities
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use sc_core::repositories::UserRepository;
/// use sc_core::domain::entities::user::{NewUser, User};
/// use sc_core::errors::DomainError;
///
/// struct PostgresUserRepository {
///     // database connection pool
/// }
///
/// #[async_trait]
/// impl UserRepository for PostgresUserRepository {
///     async fn create(&self, new_user: NewUser) -> Result<User, DomainError> {
///         unimplemented!()
///     }
///
///     async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
///         Ok(None)
///     }
///
///     async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
///         Ok(false)
///     }
///
///     async fn mark_verified(&self, user_id: i64) -> Result<(), DomainError> {
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user and return the stored row
    ///
    /// # Returns
    /// * `Ok(User)` - The created user with database-assigned id and timestamps
    /// * `Err(DomainError)` - Creation failed (e.g. duplicate email)
    async fn create(&self, new_user: NewUser) -> Result<User, DomainError>;

    /// Find a user by email address
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user registered under this email
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Check whether a user exists with the given email
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Flag the user as email-verified and touch their update timestamp
    ///
    /// # Returns
    /// * `Ok(())` - Flag persisted
    /// * `Err(DomainError)` - User missing or database error
    async fn mark_verified(&self, user_id: i64) -> Result<(), DomainError>;
}
