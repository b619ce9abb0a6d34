//! Reusable field validators
//!
//! Each validator is a closure taking the field path and the value, and
//! returning a human-readable message on failure.

use crate::core::field::FieldFormat;

/// Validator: string must not be blank
pub fn required() -> impl Fn(&str, &str) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &str| {
        if value.trim().is_empty() {
            Err(format!("'{}' is required", field))
        } else {
            Ok(())
        }
    }
}

/// Validator: number must be zero or more
pub fn non_negative() -> impl Fn(&str, &f64) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &f64| {
        if value.is_nan() || *value < 0.0 {
            Err(format!("'{}' must not be negative (value: {})", field, value))
        } else {
            Ok(())
        }
    }
}

/// Validator: count must be at least one
pub fn positive() -> impl Fn(&str, &u32) -> Result<(), String> + Send + Sync + Clone {
    |field: &str, value: &u32| {
        if *value == 0 {
            Err(format!("'{}' must be positive (value: {})", field, value))
        } else {
            Ok(())
        }
    }
}

/// Validator: string must match a format
pub fn format(
    format: FieldFormat,
) -> impl Fn(&str, &str) -> Result<(), String> + Send + Sync + Clone {
    move |field: &str, value: &str| {
        if format.matches(value) {
            Ok(())
        } else {
            Err(format!(
                "'{}' must be {} (value: {})",
                field,
                format.describe(),
                value
            ))
        }
    }
}

/// Validator: optional string must match a format when present
pub fn optional_format(
    format: FieldFormat,
) -> impl Fn(&str, &Option<String>) -> Result<(), String> + Send + Sync + Clone {
    let inner = self::format(format);
    move |field: &str, value: &Option<String>| match value {
        Some(v) => inner(field, v.as_str()),
        None => Ok(()),
    }
}
