//! Field-level validators
//!
//! One routine per constraint. Model constructors and setters both call
//! these, so there is a single source of truth for every rule and the
//! first violation found is reported.

use crate::errors::{Error, Result};

/// Require a non-empty, non-whitespace-only string within a length bound
///
/// # Errors
/// * `InvalidField` - empty/whitespace-only, or longer than `max_len` characters
pub fn require_text(field: &'static str, value: &str, max_len: usize) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidField {
            field,
            reason: "must not be empty or whitespace-only".to_string(),
        });
    }
    if value.chars().count() > max_len {
        return Err(Error::InvalidField {
            field,
            reason: format!("must not exceed {max_len} characters"),
        });
    }
    Ok(())
}

/// Require a non-empty, non-whitespace-only string with no length bound
///
/// # Errors
/// * `InvalidField` - empty or whitespace-only
pub fn require_non_empty(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::InvalidField {
            field,
            reason: "must not be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Require a `local@domain` shaped email with at least one `.` in the domain
///
/// # Errors
/// * `InvalidField` - the value does not match the accepted shape
pub fn require_email(value: &str) -> Result<()> {
    let invalid = || Error::InvalidField {
        field: "email",
        reason: "must match local@domain with a dotted domain".to_string(),
    };

    if value.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = value.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(invalid());
    }
    Ok(())
}

/// Require a finite number strictly greater than zero
///
/// # Errors
/// * `InvalidField` - non-finite, zero, or negative
pub fn require_positive(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::InvalidField {
            field,
            reason: "must be a finite number".to_string(),
        });
    }
    if value <= 0.0 {
        return Err(Error::InvalidField {
            field,
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(())
}

/// Require a finite number within an inclusive range
///
/// # Errors
/// * `InvalidField` - non-finite or outside `min..=max`
pub fn require_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::InvalidField {
            field,
            reason: "must be a finite number".to_string(),
        });
    }
    if value < min || value > max {
        return Err(Error::InvalidField {
            field,
            reason: format!("must be within {min} to {max}"),
        });
    }
    Ok(())
}

/// Require a rating in the inclusive 1..=5 range
///
/// # Errors
/// * `InvalidField` - rating outside 1..=5
pub fn require_rating(value: u8) -> Result<()> {
    if !(1..=5).contains(&value) {
        return Err(Error::InvalidField {
            field: "rating",
            reason: "must be between 1 and 5".to_string(),
        });
    }
    Ok(())
}
