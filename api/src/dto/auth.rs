use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use sc_core::domain::entities::user::User;
use sc_shared::utils::validation::{parse_date_of_birth, validate_name};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    /// Display name; letters, spaces, and hyphens only
    #[validate(custom(function = "validate_signup_name"))]
    pub name: String,

    /// Contact email address, lowercased before storage
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Date of birth in YYYY-MM-DD format
    #[serde(rename = "dateOfBirth")]
    #[validate(custom(function = "validate_date_format"))]
    pub date_of_birth: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendOtpRequest {
    /// Email address the user registered with
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// Submitted OTP value
///
/// Clients send the code either as a JSON string or as a bare number;
/// both forms verify against the same issued code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OtpValue {
    Number(u64),
    Text(String),
}

impl OtpValue {
    /// Canonical string form compared against the issued code
    ///
    /// Numbers lose leading zeros in JSON, so a code starting with `0`
    /// only matches when submitted as a string.
    pub fn as_candidate(&self) -> String {
        match self {
            OtpValue::Number(n) => n.to_string(),
            OtpValue::Text(s) => s.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    /// Email address the code was issued for
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// The submitted code, as a string or a number
    pub otp: OtpValue,
}

/// Payload returned by a successful signup
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupData {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub date_of_birth: String,
    pub is_active: bool,
    pub created_at: String,
}

impl SignupData {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            date_of_birth: user.date_of_birth.format("%Y-%m-%d").to_string(),
            is_active: user.is_active,
            created_at: user.created_at.to_rfc3339(),
        }
    }
}

/// Payload returned after an OTP email goes out
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendOtpData {
    pub email: String,
    pub user_id: i64,
    pub name: String,
}

impl SendOtpData {
    pub fn from_user(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            user_id: user.id,
            name: user.name.clone(),
        }
    }
}

/// Payload returned by a successful verification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOtpData {
    pub user_id: i64,
    pub email: String,
    pub name: String,
}

impl VerifyOtpData {
    pub fn from_user(user: &User) -> Self {
        Self {
            user_id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
        }
    }
}

fn validate_signup_name(name: &str) -> Result<(), ValidationError> {
    validate_name(name).map_err(|message| {
        let mut error = ValidationError::new("name");
        error.message = Some(message.into());
        error
    })
}

fn validate_date_format(value: &str) -> Result<(), ValidationError> {
    parse_date_of_birth(value).map(|_| ()).map_err(|message| {
        let mut error = ValidationError::new("date_of_birth");
        error.message = Some(message.into());
        error
    })
}
