//! Typed error handling for the Sunrise operations core
//!
//! The query pipeline itself never fails: invalid filter values are ignored
//! and out-of-range pages are clamped. Errors only exist at the edges where
//! records enter a store, where a store is written, and where configuration
//! is loaded.
//!
//! # Error Categories
//!
//! - [`StoreError`]: writes against a record store (unknown id, illegal
//!   lifecycle step)
//! - [`ValidationError`]: records rejected when loading a store
//! - [`ConfigError`]: configuration reading, parsing and validation
//!
//! # Example
//!
//! ```rust,ignore
//! match store.advance_status("ORD-2023-004") {
//!     Ok(snapshot) => render(snapshot),
//!     Err(StoreError::InvalidTransition { from, .. }) => {
//!         println!("order is already {}", from);
//!     }
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

use serde::Serialize;
use thiserror::Error;

/// The main error type for the crate
///
/// Each variant wraps the more specific error for its category so callers
/// can match on the category first and the detail second.
#[derive(Debug, Error)]
pub enum SunriseError {
    /// Store write errors
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Record validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl SunriseError {
    /// Get the error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            SunriseError::Store(e) => e.error_code(),
            SunriseError::Validation(_) => "VALIDATION_ERROR",
            SunriseError::Config(e) => e.error_code(),
        }
    }
}

// =============================================================================
// Store Errors
// =============================================================================

/// Errors raised by store writes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record with this id exists in the current snapshot
    #[error("{entity_type} with id '{id}' not found")]
    NotFound { entity_type: &'static str, id: String },

    /// The requested lifecycle step is not allowed from the current status
    #[error("cannot move {id} from '{from}' to '{to}'")]
    InvalidTransition { id: String, from: String, to: String },
}

impl StoreError {
    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::NotFound { .. } => "RECORD_NOT_FOUND",
            StoreError::InvalidTransition { .. } => "INVALID_TRANSITION",
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Id of the record the field belongs to
    pub record_id: String,
    /// Dotted path of the offending field (e.g. `customer.email`)
    pub field: String,
    pub message: String,
}

/// Errors related to record validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more fields failed validation
    #[error("validation failed: {}", format_field_errors(.0))]
    FieldErrors(Vec<FieldError>),
}

impl ValidationError {
    /// Field errors carried by this error
    pub fn fields(&self) -> &[FieldError] {
        match self {
            ValidationError::FieldErrors(errors) => errors,
        }
    }
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}.{}: {}", e.record_id, e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The YAML could not be parsed into a configuration
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The configuration parsed but holds out-of-range values
    #[error("invalid config: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::Io { .. } => "CONFIG_IO_ERROR",
            ConfigError::Parse(_) => "CONFIG_PARSE_ERROR",
            ConfigError::Invalid(_) => "CONFIG_INVALID",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_not_found_message() {
        let err = StoreError::NotFound {
            entity_type: "order",
            id: "ORD-404".to_string(),
        };
        assert_eq!(err.to_string(), "order with id 'ORD-404' not found");
        assert_eq!(err.error_code(), "RECORD_NOT_FOUND");
    }

    #[test]
    fn test_error_code_passes_through_category() {
        let err: SunriseError = StoreError::InvalidTransition {
            id: "ORD-1".to_string(),
            from: "delivered".to_string(),
            to: "cancelled".to_string(),
        }
        .into();
        assert_eq!(err.error_code(), "INVALID_TRANSITION");
        assert!(err.to_string().contains("delivered"));
    }

    #[test]
    fn test_field_errors_are_listed_in_message() {
        let err = ValidationError::FieldErrors(vec![
            FieldError {
                record_id: "ORD-1".to_string(),
                field: "total".to_string(),
                message: "must not be negative".to_string(),
            },
            FieldError {
                record_id: "ORD-2".to_string(),
                field: "id".to_string(),
                message: "is required".to_string(),
            },
        ]);
        let message = err.to_string();
        assert!(message.contains("ORD-1.total: must not be negative"));
        assert!(message.contains("ORD-2.id: is required"));
        assert_eq!(err.fields().len(), 2);

        let wrapped: SunriseError = err.into();
        assert_eq!(wrapped.error_code(), "VALIDATION_ERROR");
    }
}
