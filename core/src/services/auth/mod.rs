//! Authentication service module
//!
//! Signup and email verification for SafeCheck accounts:
//! - User registration with name/date-of-birth validation
//! - OTP issue and delivery over the email seam
//! - OTP verification with single-use semantics

mod service;

#[cfg(test)]
mod tests;

pub use service::{AuthService, VerifyOtpResult};
