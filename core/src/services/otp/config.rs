//! Configuration for the OTP manager

use chrono::Duration;

use crate::domain::entities::otp_code::DEFAULT_TTL_SECONDS;

/// Configuration for the OTP manager
#[derive(Debug, Clone)]
pub struct OtpConfig {
    /// Seconds an issued code stays valid
    pub ttl_seconds: i64,
}

impl OtpConfig {
    /// Create a configuration with an explicit TTL
    pub fn with_ttl_seconds(ttl_seconds: i64) -> Self {
        Self { ttl_seconds }
    }

    /// The TTL as a duration
    pub fn ttl(&self) -> Duration {
        Duration::seconds(self.ttl_seconds)
    }
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: DEFAULT_TTL_SECONDS,
        }
    }
}
