//! Error codes shared between layers
//!
//! The machine-readable codes placed in the `error.code` field of the API
//! envelope. Handlers map domain errors onto these; clients switch on them.

pub mod error_codes {
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const NO_MATCHING_PLANS: &str = "NO_MATCHING_PLANS";
    pub const INVALID_OTP: &str = "INVALID_OTP";
    pub const DATABASE_ERROR: &str = "DATABASE_ERROR";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}
