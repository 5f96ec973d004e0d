//! OTP issue/verify workflow
//!
//! This module provides the one-time-password lifecycle:
//! - Code generation and issuing (one live code per email, reissue replaces)
//! - Verification with single-use semantics and lazy TTL expiry
//! - A pluggable store seam with an in-memory default
//! - An injectable clock so tests control time without sleeping

mod clock;
mod config;
mod manager;
mod memory;
mod store;

#[cfg(test)]
mod tests;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::OtpConfig;
pub use manager::OtpManager;
pub use memory::{MemoryOtpStore, DEFAULT_MAX_ENTRIES};
pub use store::OtpStore;
