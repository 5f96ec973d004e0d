//! User entity representing a registered user in the SafeCheck system.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// User entity representing a registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: i64,

    /// Full name as entered at signup
    pub name: String,

    /// Email address, unique across the system
    pub email: String,

    /// Date of birth
    pub date_of_birth: NaiveDate,

    /// Whether the account is active
    pub is_active: bool,

    /// Whether the email address has been verified via OTP
    pub is_verified: bool,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Marks the user's email as verified
    pub fn verify(&mut self) {
        self.is_verified = true;
        self.updated_at = Utc::now();
    }

    /// Deactivates the account
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }
}

/// Insert shape for a user row; the database assigns the id and timestamps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
}

impl NewUser {
    /// Creates a new insert shape, trimming the name and lowercasing the
    /// email so uniqueness checks are case-insensitive
    pub fn new(name: impl Into<String>, email: impl Into<String>, date_of_birth: NaiveDate) -> Self {
        Self {
            name: name.into().trim().to_string(),
            email: email.into().trim().to_lowercase(),
            date_of_birth,
        }
    }
}
