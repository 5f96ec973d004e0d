//! OTP code entity for email-based verification.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Length of the one-time password
pub const CODE_LENGTH: usize = 6;

/// Default lifetime of an issued code (4 minutes)
pub const DEFAULT_TTL_SECONDS: i64 = 240;

/// An issued one-time password, keyed by the email it was sent to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpCode {
    /// Email address the code was issued for
    pub email: String,

    /// The 6-digit code
    pub code: String,

    /// Timestamp when the code was issued
    pub issued_at: DateTime<Utc>,

    /// Timestamp when the code stops being accepted
    pub expires_at: DateTime<Utc>,
}

impl OtpCode {
    /// Creates an OTP record for a freshly generated code
    ///
    /// # Arguments
    ///
    /// * `email` - The address the code is being sent to
    /// * `code` - The generated code, already zero-padded to [`CODE_LENGTH`]
    /// * `ttl` - How long the code stays valid
    /// * `now` - The issuing instant, supplied by the caller's clock
    pub fn new(email: String, code: String, ttl: Duration, now: DateTime<Utc>) -> Self {
        Self {
            email,
            code,
            issued_at: now,
            expires_at: now + ttl,
        }
    }

    /// Generates a random zero-padded 6-digit code
    pub fn generate_code() -> String {
        let mut rng = rand::thread_rng();
        let code: u32 = rng.gen_range(0..1_000_000);
        format!("{:06}", code)
    }

    /// Normalizes a candidate before comparison
    ///
    /// Clients deliver the code either as a string or as a JSON number; a
    /// numeric `012345` arrives as `12345`. Trims whitespace and left-pads
    /// all-digit candidates shorter than [`CODE_LENGTH`]. Returns `None`
    /// for anything that cannot be a code, which callers treat as an
    /// ordinary mismatch.
    pub fn normalize_candidate(raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.len() > CODE_LENGTH {
            return None;
        }
        if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(format!("{:0>width$}", trimmed, width = CODE_LENGTH))
    }

    /// Whether the code has expired at the given instant
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Constant-time comparison against a normalized candidate
    pub fn matches(&self, candidate: &str) -> bool {
        constant_time_eq(self.code.as_bytes(), candidate.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-05-01T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_generate_code_format() {
        for _ in 0..100 {
            let code = OtpCode::generate_code();
            assert_eq!(code.len(), CODE_LENGTH);
            assert!(code.bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn test_new_sets_expiry_from_ttl() {
        let now = fixed_now();
        let otp = OtpCode::new(
            "priya@example.com".to_string(),
            "123456".to_string(),
            Duration::seconds(DEFAULT_TTL_SECONDS),
            now,
        );
        assert_eq!(otp.issued_at, now);
        assert_eq!(otp.expires_at, now + Duration::seconds(240));
    }

    #[test]
    fn test_expiry_boundary() {
        let now = fixed_now();
        let otp = OtpCode::new(
            "priya@example.com".to_string(),
            "123456".to_string(),
            Duration::seconds(240),
            now,
        );
        assert!(!otp.is_expired(now));
        assert!(!otp.is_expired(now + Duration::seconds(239)));
        assert!(otp.is_expired(now + Duration::seconds(240)));
        assert!(otp.is_expired(now + Duration::seconds(600)));
    }

    #[test]
    fn test_normalize_pads_short_numeric_candidates() {
        assert_eq!(OtpCode::normalize_candidate("12345").unwrap(), "012345");
        assert_eq!(OtpCode::normalize_candidate("5").unwrap(), "000005");
        assert_eq!(OtpCode::normalize_candidate("123456").unwrap(), "123456");
        assert_eq!(OtpCode::normalize_candidate(" 123456 ").unwrap(), "123456");
    }

    #[test]
    fn test_normalize_rejects_non_codes() {
        assert!(OtpCode::normalize_candidate("").is_none());
        assert!(OtpCode::normalize_candidate("   ").is_none());
        assert!(OtpCode::normalize_candidate("1234567").is_none());
        assert!(OtpCode::normalize_candidate("12a456").is_none());
        assert!(OtpCode::normalize_candidate("-12345").is_none());
    }

    #[test]
    fn test_matches() {
        let otp = OtpCode::new(
            "priya@example.com".to_string(),
            "012345".to_string(),
            Duration::seconds(240),
            fixed_now(),
        );
        assert!(otp.matches("012345"));
        assert!(!otp.matches("123450"));
        assert!(!otp.matches("12345"));
    }
}
