//! Signup field validation
//!
//! The rules applied to registration input: names are letters, spaces, and
//! hyphens only; dates of birth are `YYYY-MM-DD`, not in the future, and
//! at least 18 years back.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum age required to register
pub const MINIMUM_SIGNUP_AGE: i32 = 18;

// Letters, spaces, and hyphens; anchors keep digits and symbols out
static NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z\s\-]+$").unwrap());

/// Validate a registration name
///
/// Names must be at least 2 characters and contain only letters, spaces,
/// and hyphens.
pub fn validate_name(name: &str) -> Result<(), String> {
    let trimmed = name.trim();
    if trimmed.len() < 2 {
        return Err("Name must be at least 2 characters long".to_string());
    }
    if !NAME_REGEX.is_match(trimmed) {
        return Err("Name must contain only letters, spaces, and hyphens".to_string());
    }
    Ok(())
}

/// Parse a `YYYY-MM-DD` date-of-birth string
pub fn parse_date_of_birth(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| "Date of birth must be in YYYY-MM-DD format".to_string())
}

/// Whole years between a birth date and a reference date
pub fn age_in_years(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}

/// Validate a date-of-birth string against a reference date
///
/// Rejects unparseable values, future dates, and ages below
/// [`MINIMUM_SIGNUP_AGE`].
pub fn validate_date_of_birth(value: &str, today: NaiveDate) -> Result<NaiveDate, String> {
    let date_of_birth = parse_date_of_birth(value)?;
    if date_of_birth > today {
        return Err("Date of birth cannot be in the future".to_string());
    }
    if age_in_years(date_of_birth, today) < MINIMUM_SIGNUP_AGE {
        return Err(format!(
            "You must be at least {} years old to register",
            MINIMUM_SIGNUP_AGE
        ));
    }
    Ok(date_of_birth)
}
