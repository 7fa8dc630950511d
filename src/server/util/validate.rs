//! Request field validation.
//!
//! Every check returns `AppError::BadRequest` with a message suitable for the
//! caller when the value is rejected.

use chrono::{DateTime, NaiveDate};
use regex::Regex;
use sea_orm::ActiveEnum;
use std::sync::LazyLock;

use crate::server::error::AppError;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-f]{24}$").expect("valid id regex"));
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9][0-9 \-]*[0-9]$").expect("valid phone regex"));
static TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0[1-9]|1[0-2]):[0-5][0-9] (AM|PM)$").expect("valid time regex")
});
static OTP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{6}$").expect("valid otp regex"));
static PASSWORD_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\d@$!%*?&]{8,}$").expect("valid password regex"));

const PASSWORD_SYMBOLS: &str = "@$!%*?&";

/// Checks that every named field is present and not blank.
pub fn required(fields: &[(&str, Option<&str>)]) -> Result<(), AppError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.is_none_or(|v| v.trim().is_empty()))
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )))
    }
}

pub fn email(value: &str) -> Result<(), AppError> {
    if EMAIL.is_match(value) {
        Ok(())
    } else {
        Err(AppError::BadRequest("Invalid email format".to_string()))
    }
}

/// Checks the number of characters in `value`.
pub fn length(field: &str, value: &str, min: usize, max: usize) -> Result<(), AppError> {
    let len = value.trim().chars().count();
    if (min..=max).contains(&len) {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "Invalid length for {}, expected between {} and {} characters",
            field, min, max
        )))
    }
}

pub fn id(value: &str) -> Result<(), AppError> {
    if ID.is_match(value) {
        Ok(())
    } else {
        Err(AppError::BadRequest("Invalid ID format".to_string()))
    }
}

pub fn ids<S: AsRef<str>>(values: &[S]) -> Result<(), AppError> {
    values.iter().try_for_each(|v| id(v.as_ref()))
}

pub fn phone(value: &str) -> Result<(), AppError> {
    let len = value.chars().count();
    if (4..=15).contains(&len) && PHONE.is_match(value) {
        Ok(())
    } else {
        Err(AppError::BadRequest("Invalid phone number format".to_string()))
    }
}

/// Parses an ISO date, accepting a full RFC 3339 timestamp as well.
pub fn date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.date_naive()))
        .map_err(|_| AppError::BadRequest("Invalid date format".to_string()))
}

/// Checks a twelve-hour `HH:MM AM|PM` slot time.
pub fn time(value: &str) -> Result<(), AppError> {
    if (7..=11).contains(&value.len()) && TIME.is_match(value) {
        Ok(())
    } else {
        Err(AppError::BadRequest(
            "Invalid time format, must be in \"HH:MM AM/PM\" format".to_string(),
        ))
    }
}

/// Requires lower and upper case letters, a digit and one of `@$!%*?&`.
pub fn password(value: &str) -> Result<(), AppError> {
    let strong = PASSWORD_CHARSET.is_match(value)
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| PASSWORD_SYMBOLS.contains(c));

    if strong {
        Ok(())
    } else {
        Err(AppError::BadRequest(
            "Password must be at least 8 characters and include upper and lower case letters, a number and a special character (@$!%*?&)".to_string(),
        ))
    }
}

pub fn otp(value: &str) -> Result<(), AppError> {
    if OTP.is_match(value) {
        Ok(())
    } else {
        Err(AppError::BadRequest(
            "Invalid OTP format. Must be 6 digits.".to_string(),
        ))
    }
}

/// Parses one of the string values of a stored enum.
pub fn one_of<E>(field: &str, value: &str) -> Result<E, AppError>
where
    E: ActiveEnum<Value = String>,
{
    E::try_from_value(&value.to_string()).map_err(|_| {
        let allowed: Vec<String> = E::iter().map(|v| v.to_value()).collect();
        AppError::BadRequest(format!(
            "Invalid value for {}, expected one of: {}",
            field,
            allowed.join(", ")
        ))
    })
}
