//! Record validation
//!
//! Records are validated once, when they enter a store. The query pipeline
//! assumes well-formed records and never re-checks them.

pub mod validators;

use crate::core::error::{FieldError, ValidationError};

/// Collects field errors for one record
#[derive(Debug)]
pub struct FieldChecks<'a> {
    record_id: &'a str,
    errors: &'a mut Vec<FieldError>,
}

impl<'a> FieldChecks<'a> {
    pub fn new(record_id: &'a str, errors: &'a mut Vec<FieldError>) -> Self {
        Self { record_id, errors }
    }

    /// Run `validator` on `value`, recording a failure under `field`
    pub fn check<V, F>(&mut self, field: &str, value: &V, validator: F) -> &mut Self
    where
        V: ?Sized,
        F: Fn(&str, &V) -> Result<(), String>,
    {
        if let Err(message) = validator(field, value) {
            self.errors.push(FieldError {
                record_id: self.record_id.to_string(),
                field: field.to_string(),
                message,
            });
        }
        self
    }
}

/// Records that know how to check their own fields
pub trait ValidateRecord {
    /// Record id used to label errors
    fn record_id(&self) -> &str;

    /// Run field checks for this record
    fn check_fields(&self, checks: &mut FieldChecks<'_>);

    /// Validate a single record
    fn validate(&self) -> Result<(), ValidationError>
    where
        Self: Sized,
    {
        validate_all(std::slice::from_ref(self))
    }
}

/// Validate every record, reporting all failures at once
pub fn validate_all<T: ValidateRecord>(records: &[T]) -> Result<(), ValidationError> {
    let mut errors = Vec::new();
    for record in records {
        let mut checks = FieldChecks::new(record.record_id(), &mut errors);
        record.check_fields(&mut checks);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        tracing::warn!(failures = errors.len(), "records failed validation");
        Err(ValidationError::FieldErrors(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::validators::{non_negative, required};
    use super::*;

    struct Tin {
        id: String,
        weight: f64,
    }

    impl ValidateRecord for Tin {
        fn record_id(&self) -> &str {
            &self.id
        }

        fn check_fields(&self, checks: &mut FieldChecks<'_>) {
            checks
                .check("id", self.id.as_str(), required())
                .check("weight", &self.weight, non_negative());
        }
    }

    #[test]
    fn test_valid_record_passes() {
        let tin = Tin {
            id: "T1".to_string(),
            weight: 1.5,
        };
        assert!(tin.validate().is_ok());
    }

    #[test]
    fn test_all_failures_are_reported() {
        let tins = vec![
            Tin {
                id: "T1".to_string(),
                weight: -1.0,
            },
            Tin {
                id: " ".to_string(),
                weight: -2.0,
            },
        ];
        let err = validate_all(&tins).unwrap_err();
        let fields: Vec<(&str, &str)> = err
            .fields()
            .iter()
            .map(|e| (e.record_id.as_str(), e.field.as_str()))
            .collect();
        assert_eq!(fields, vec![("T1", "weight"), (" ", "id"), (" ", "weight")]);
    }
}
