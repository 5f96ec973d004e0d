//! Main authentication service implementation

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::email::EmailServiceTrait;
use crate::services::otp::{OtpManager, OtpStore};
use sc_shared::utils::email::mask_email;
use sc_shared::utils::validation::{validate_date_of_birth, validate_name};

/// Outcome of an OTP verification attempt
///
/// `verified` is `false` for wrong, expired, reused, and malformed codes
/// alike; the user is returned either way so callers can build a response
/// without a second lookup.
#[derive(Debug, Clone)]
pub struct VerifyOtpResult {
    pub verified: bool,
    pub user: User,
}

/// Authentication service for signup and email verification
pub struct AuthService<U, E, S>
where
    U: UserRepository,
    E: EmailServiceTrait,
    S: OtpStore,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Outbound email delivery
    email_service: Arc<E>,
    /// OTP issue/verify lifecycle
    otp_manager: Arc<OtpManager<S>>,
}

impl<U, E, S> AuthService<U, E, S>
where
    U: UserRepository,
    E: EmailServiceTrait,
    S: OtpStore,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `email_service` - Delivery channel for verification emails
    /// * `otp_manager` - Code issue and verification
    pub fn new(
        user_repository: Arc<U>,
        email_service: Arc<E>,
        otp_manager: Arc<OtpManager<S>>,
    ) -> Self {
        Self {
            user_repository,
            email_service,
            otp_manager,
        }
    }

    /// Register a new user
    ///
    /// This method:
    /// 1. Validates the name (length and character set)
    /// 2. Parses and validates the date of birth (format, not in the
    ///    future, at least 18 years old)
    /// 3. Normalizes the email and rejects duplicates
    /// 4. Persists and returns the created user
    ///
    /// The checks repeat what the HTTP layer validates so the service stays
    /// safe when driven directly.
    ///
    /// # Arguments
    ///
    /// * `name` - Display name, trimmed before storage
    /// * `email` - Email address, lowercased before storage
    /// * `date_of_birth` - `YYYY-MM-DD` string
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        date_of_birth: &str,
    ) -> DomainResult<User> {
        validate_name(name).map_err(|message| DomainError::Validation { message })?;

        let today = Utc::now().date_naive();
        let date_of_birth = validate_date_of_birth(date_of_birth, today)
            .map_err(|message| DomainError::Validation { message })?;

        let new_user = NewUser::new(name, email, date_of_birth);

        if self.user_repository.exists_by_email(&new_user.email).await? {
            return Err(DomainError::Validation {
                message: "Email already registered".to_string(),
            });
        }

        let user = self.user_repository.create(new_user).await?;

        tracing::info!(
            user_id = user.id,
            email = %mask_email(&user.email),
            event = "user_registered",
            "Registered new user"
        );

        Ok(user)
    }

    /// Issue an OTP for a registered email and deliver it
    ///
    /// This method:
    /// 1. Looks up the user by normalized email (absent: `NotFound`)
    /// 2. Issues a fresh code, replacing any outstanding one
    /// 3. Delivers the code over the email seam (failure: `Internal`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use std::sync::Arc;
    /// # use sc_core::repositories::user::MockUserRepository;
    /// # use sc_core::services::auth::AuthService;
    /// # use sc_core::services::email::MockEmailService;
    /// # use sc_core::services::otp::{MemoryOtpStore, OtpConfig, OtpManager};
    /// # async fn demo() {
    /// let store = Arc::new(MemoryOtpStore::new());
    /// let service = AuthService::new(
    ///     Arc::new(MockUserRepository::new()),
    ///     Arc::new(MockEmailService::new()),
    ///     Arc::new(OtpManager::new(store, OtpConfig::default())),
    /// );
    ///
    /// match service.send_otp("priya@example.com").await {
    ///     Ok(user) => println!("Code sent to user {}", user.id),
    ///     Err(e) => eprintln!("Failed to send code: {}", e),
    /// }
    /// # }
    /// ```
    pub async fn send_otp(&self, email: &str) -> DomainResult<User> {
        let normalized = email.trim().to_lowercase();

        let user = self
            .user_repository
            .find_by_email(&normalized)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("User with email {}", mask_email(&normalized)),
            })?;

        let code = self.otp_manager.issue(&user.email).await?;
        let expires_in_minutes = (self.otp_manager.ttl_seconds() / 60).max(1);

        self.email_service
            .send_otp_email(&user.email, &code, expires_in_minutes)
            .await
            .map_err(|e| {
                tracing::error!(
                    email = %mask_email(&user.email),
                    error = %e,
                    event = "otp_email_failed",
                    "Failed to deliver verification email"
                );
                DomainError::Internal {
                    message: format!("Failed to send OTP email: {}", e),
                }
            })?;

        tracing::info!(
            user_id = user.id,
            email = %mask_email(&user.email),
            event = "otp_email_sent",
            "Sent verification email"
        );

        Ok(user)
    }

    /// Verify a submitted OTP for a registered email
    ///
    /// This method:
    /// 1. Looks up the user by normalized email (absent: `NotFound`)
    /// 2. Checks the candidate against the live code; a match consumes it
    /// 3. On first successful verification, persists the verified flag
    ///
    /// A wrong or expired code is a `verified: false` outcome, not an
    /// error; storage outages are the only error path after the lookup.
    pub async fn verify_otp(&self, email: &str, candidate: &str) -> DomainResult<VerifyOtpResult> {
        let normalized = email.trim().to_lowercase();

        let mut user = self
            .user_repository
            .find_by_email(&normalized)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("User with email {}", mask_email(&normalized)),
            })?;

        let verified = self.otp_manager.verify(&user.email, candidate).await?;

        if verified && !user.is_verified {
            // Best effort: the code is already consumed, so a failed flag
            // update must not fail the verification itself.
            match self.user_repository.mark_verified(user.id).await {
                Ok(()) => user.verify(),
                Err(e) => {
                    tracing::warn!(
                        user_id = user.id,
                        error = %e,
                        event = "mark_verified_failed",
                        "Could not persist verification flag"
                    );
                }
            }
        }

        Ok(VerifyOtpResult { verified, user })
    }
}
