//! Authentication route handlers
//!
//! This module contains the signup and email-verification endpoints:
//! - User registration
//! - Issuing a one-time password over email
//! - Verifying a submitted one-time password

pub mod send_otp;
pub mod signup;
pub mod verify_otp;

pub use signup::AppState;
