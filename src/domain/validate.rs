//! Form-field validation helpers.
//!
//! Failures are collected into a list instead of short-circuiting, so a
//! re-rendered form can show every problem at once.

use serde::Serialize;
use std::str::FromStr;

/// A single validation failure tied to the form field it belongs to.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub msg: String,
}

impl FieldError {
    pub fn new(field: &'static str, msg: impl Into<String>) -> Self {
        Self {
            field,
            msg: msg.into(),
        }
    }
}

/// Trims `value`, recording `msg` when nothing is left.
/// Returns the trimmed text either way so the caller can keep validating.
pub fn required(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &str,
    msg: &str,
) -> String {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        errors.push(FieldError::new(field, msg));
    }
    trimmed
}

/// Parses trimmed text as `T`, recording `msg` on a failed parse.
/// Empty input is left to `required` and not reported twice.
pub fn numeric<T: FromStr>(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &str,
    msg: &str,
) -> Option<T> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            errors.push(FieldError::new(field, msg));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_trims_and_reports_empty() {
        let mut errors = Vec::new();
        let name = required(&mut errors, "name", "  Tools  ", "Name must not be empty.");
        assert_eq!(name, "Tools");
        assert!(errors.is_empty());

        let name = required(&mut errors, "name", "   ", "Name must not be empty.");
        assert_eq!(name, "");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].msg, "Name must not be empty.");
    }

    #[test]
    fn numeric_parses_or_reports() {
        let mut errors = Vec::new();
        assert_eq!(
            numeric::<f64>(&mut errors, "price", " 9.99 ", "Price must be a number."),
            Some(9.99)
        );
        assert!(errors.is_empty());

        assert_eq!(
            numeric::<f64>(&mut errors, "price", "nine", "Price must be a number."),
            None
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn numeric_skips_empty_input() {
        let mut errors = Vec::new();
        assert_eq!(
            numeric::<i64>(&mut errors, "quantity_in_stock", "", "must be a number"),
            None
        );
        assert!(errors.is_empty());
    }
}
