//! OTP lifecycle orchestration

use std::sync::Arc;

use super::config::OtpConfig;
use super::store::OtpStore;
use crate::domain::entities::OtpCode;
use crate::errors::{DomainError, DomainResult};
use sc_shared::utils::email::mask_email;

/// Issues and verifies one-time codes against a pluggable store
///
/// The manager owns code generation and candidate normalization; the store
/// owns persistence, expiry, and the atomic consume-on-match step. Storage
/// failures surface as [`DomainError::StoreUnavailable`] so callers can
/// distinguish an outage from a plain mismatch.
pub struct OtpManager<S: OtpStore> {
    store: Arc<S>,
    config: OtpConfig,
}

impl<S: OtpStore> OtpManager<S> {
    pub fn new(store: Arc<S>, config: OtpConfig) -> Self {
        Self { store, config }
    }

    /// Lifetime applied to issued codes, in seconds
    pub fn ttl_seconds(&self) -> i64 {
        self.config.ttl_seconds
    }

    /// Generate a fresh code for the email and persist it
    ///
    /// Reissuing for the same email replaces the previous code, so only the
    /// most recently issued code can verify. Returns the plaintext code for
    /// delivery; it is never logged.
    pub async fn issue(&self, email: &str) -> DomainResult<String> {
        let code = OtpCode::generate_code();

        self.store
            .put(email, &code, self.config.ttl())
            .await
            .map_err(|e| DomainError::StoreUnavailable { message: e })?;

        tracing::info!(
            email = %mask_email(email),
            ttl_seconds = self.config.ttl_seconds,
            event = "otp_issued",
            "Issued verification code"
        );

        Ok(code)
    }

    /// Check a submitted candidate against the live code for the email
    ///
    /// Returns `Ok(true)` exactly once per issued code: a match consumes the
    /// record. Absent, expired, malformed, and mismatched candidates all
    /// return `Ok(false)` without hinting which case applied.
    pub async fn verify(&self, email: &str, candidate: &str) -> DomainResult<bool> {
        let normalized = match OtpCode::normalize_candidate(candidate) {
            Some(value) => value,
            None => {
                tracing::debug!(
                    email = %mask_email(email),
                    event = "otp_rejected_malformed",
                    "Rejected malformed verification candidate"
                );
                return Ok(false);
            }
        };

        let verified = self
            .store
            .consume_if_match(email, &normalized)
            .await
            .map_err(|e| DomainError::StoreUnavailable { message: e })?;

        if verified {
            tracing::info!(
                email = %mask_email(email),
                event = "otp_verified",
                "Verification code accepted"
            );
        } else {
            tracing::info!(
                email = %mask_email(email),
                event = "otp_mismatch",
                "Verification code rejected"
            );
        }

        Ok(verified)
    }
}
