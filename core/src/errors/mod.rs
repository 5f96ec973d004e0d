//! Domain-specific error types and error handling.

use thiserror::Error;

/// Core domain errors
///
/// Every fallible domain operation surfaces one of these. The HTTP layer
/// owns the mapping to status codes and envelope error codes.
#[derive(Error, Debug)]
pub enum DomainError {
    /// Input failed a business validation rule
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// A referenced resource does not exist
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// The plan catalog holds no plan the profile qualifies for
    ///
    /// A legitimate empty result, carried as an error variant so callers
    /// cannot confuse it with a populated ranking.
    #[error("No matching plans: {message}")]
    NoMatch { message: String },

    /// The OTP store could not be reached or failed mid-operation
    #[error("Verification store unavailable: {message}")]
    StoreUnavailable { message: String },

    /// A database operation failed
    #[error("Database error: {message}")]
    Database { message: String },

    /// Any other infrastructure failure crossing the domain boundary
    #[error("Internal error: {message}")]
    Internal { message: String },
}

pub type DomainResult<T> = Result<T, DomainError>;
