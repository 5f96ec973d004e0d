//! Storage seam for issued OTP codes

use async_trait::async_trait;
use chrono::Duration;

/// Storage contract for issued codes
///
/// One live code per email: `put` on an existing key replaces the prior
/// code and restarts its TTL. Expiry is the store's responsibility, lazily
/// on lookup or via the backend's own TTL machinery.
#[async_trait]
pub trait OtpStore: Send + Sync {
    /// Store a code under the email key, replacing any prior code
    async fn put(&self, email: &str, code: &str, ttl: Duration) -> Result<(), String>;

    /// Compare a normalized candidate against the live code and remove the
    /// record on match
    ///
    /// The check and the removal happen as one atomic step per key, so two
    /// racing verifications of the same code cannot both succeed. Returns
    /// `false` for absent, expired, and mismatched candidates alike; a
    /// mismatch leaves the record in place until it expires or the code is
    /// reissued.
    async fn consume_if_match(&self, email: &str, candidate: &str) -> Result<bool, String>;
}
