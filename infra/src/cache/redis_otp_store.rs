//! Redis-backed OTP store
//!
//! Production implementation of the core OTP storage seam. Codes are
//! stored as SHA-256 digests so raw codes never rest in Redis, expiry
//! rides on the key TTL, and verification consumes the key through an
//! atomic compare-and-delete.

use async_trait::async_trait;
use chrono::Duration;
use sha2::{Digest, Sha256};
use tracing::debug;

use sc_core::services::otp::OtpStore;
use sc_shared::utils::email::mask_email;

use crate::cache::RedisClient;

/// Redis key prefix for issued codes
const OTP_CODE_PREFIX: &str = "otp:code:";

/// OTP store backed by a shared Redis client
///
/// Keys are `otp:code:{email}` under the client's configured namespace
/// prefix. One live code per email: a fresh `put` overwrites the prior
/// digest and restarts the TTL.
pub struct RedisOtpStore {
    /// Shared Redis client
    client: RedisClient,
}

impl RedisOtpStore {
    /// Create a new Redis OTP store
    ///
    /// # Arguments
    /// * `client` - Connected Redis client
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }

    fn storage_key(&self, email: &str) -> String {
        self.client
            .namespaced_key(&format!("{}{}", OTP_CODE_PREFIX, email))
    }

    /// SHA-256 hex digest of a code
    pub(crate) fn hash_code(code: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(code.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

#[async_trait]
impl OtpStore for RedisOtpStore {
    async fn put(&self, email: &str, code: &str, ttl: Duration) -> Result<(), String> {
        let key = self.storage_key(email);
        let digest = Self::hash_code(code);
        let expiry_seconds = ttl.num_seconds().max(1) as u64;

        self.client
            .set_with_expiry(&key, &digest, expiry_seconds)
            .await
            .map_err(|e| e.to_string())?;

        debug!(
            email = %mask_email(email),
            ttl_seconds = expiry_seconds,
            event = "otp_stored",
            "Stored OTP digest"
        );

        Ok(())
    }

    async fn consume_if_match(&self, email: &str, candidate: &str) -> Result<bool, String> {
        let key = self.storage_key(email);
        let digest = Self::hash_code(candidate);

        let matched = self
            .client
            .compare_and_delete(&key, &digest)
            .await
            .map_err(|e| e.to_string())?;

        debug!(
            email = %mask_email(email),
            matched = matched,
            event = "otp_consume_attempt",
            "Compared candidate against stored digest"
        );

        Ok(matched)
    }
}
