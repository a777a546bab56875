//! # Input Validation
//!
//! Turns raw console input into typed item fields. Callers decide whether
//! to re-prompt or give up on failure.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use thiserror::Error;

use super::Category;

/// Reason a raw input value was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no value entered")]
    Empty,

    #[error("'{0}' is not a non-negative whole number")]
    NotNumeric(String),

    #[error("'{0}' is too large")]
    OutOfRange(String),

    #[error("Category {0} does not exist!")]
    UnknownCategory(String),
}

/// Returns true if `s` is non-empty and made only of ASCII digits.
///
/// Signs and decimal points are rejected, so negative or fractional
/// values never pass.
pub fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a quantity.
pub fn parse_quantity(raw: &str) -> Result<u32, ValidationError> {
    let digits = check_digits(raw)?;
    digits
        .parse()
        .map_err(|_| ValidationError::OutOfRange(digits.to_string()))
}

/// Parses a price. Only whole numbers are accepted.
pub fn parse_price(raw: &str) -> Result<f64, ValidationError> {
    let digits = check_digits(raw)?;
    // Any digit string parses as f64; guard against values that round to infinity
    let price: f64 = digits
        .parse()
        .map_err(|_| ValidationError::OutOfRange(digits.to_string()))?;
    if price.is_finite() {
        Ok(price)
    } else {
        Err(ValidationError::OutOfRange(digits.to_string()))
    }
}

/// Parses a category name (case-insensitive).
pub fn parse_category(raw: &str) -> Result<Category, ValidationError> {
    raw.parse()
}

fn check_digits(raw: &str) -> Result<&str, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }
    if !is_all_digits(trimmed) {
        return Err(ValidationError::NotNumeric(trimmed.to_string()));
    }
    Ok(trimmed)
}
