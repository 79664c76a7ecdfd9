//! Strict validation of phaser configuration values.
//!
//! The effect itself never rejects a value; its setters clamp. Validation
//! exists for configuration files, where a value outside its range is more
//! likely a typo than an intent, so it is reported instead of silently
//! clamped.

use thiserror::Error;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Parameter value out of range.
    #[error("parameter '{param}' value {value} out of range [{min}, {max}]")]
    OutOfRange {
        /// Name of the parameter.
        param: String,
        /// The value that was out of range.
        value: f32,
        /// Minimum allowed value.
        min: f32,
        /// Maximum allowed value.
        max: f32,
    },

    /// Coefficient bounds too close together or inverted.
    #[error("coefficient range [{min}, {max}] must satisfy max >= min + 0.01")]
    InvalidRange {
        /// Requested lower bound.
        min: f32,
        /// Requested upper bound.
        max: f32,
    },

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Check that `value` lies in `[min, max]`. NaN is always out of range.
pub fn check_range(param: &str, value: f32, min: f32, max: f32) -> ValidationResult<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            param: param.to_string(),
            value,
            min,
            max,
        })
    }
}

/// Fold a list of errors into one: `Ok` when empty, the error itself when
/// there is exactly one, [`ValidationError::Multiple`] otherwise.
pub fn collect_errors(mut errors: Vec<ValidationError>) -> ValidationResult<()> {
    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}
