//! Error types for parameter binding.

use thiserror::Error;

/// The main error type for binding operations.
#[derive(Debug, Error)]
pub enum BindError {
    /// The value's shape is outside the set MySQL parameters can carry.
    #[error("Unknown bindable type: {type_name}")]
    UnrecognizedBindableType { type_name: String },

    /// Number of values does not match the statement's placeholders.
    #[error("Parameter count mismatch: statement expects {expected}, got {got}")]
    ParamCount { expected: usize, got: usize },

    /// Statement declares more placeholders than allowed.
    #[error("Too many parameters: {got} (max {max})")]
    TooManyParams { max: usize, got: usize },

    /// Temporal value cannot be represented by the target type.
    #[error("Invalid temporal value: {0}")]
    InvalidTemporal(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BindError {
    /// Create an unrecognized type error for the given type name.
    pub fn unrecognized(type_name: impl Into<String>) -> Self {
        Self::UnrecognizedBindableType {
            type_name: type_name.into(),
        }
    }
}

/// Result type alias for binding operations.
pub type BindResult<T> = Result<T, BindError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BindError::unrecognized("bool");
        assert_eq!(err.to_string(), "Unknown bindable type: bool");

        let err = BindError::ParamCount {
            expected: 3,
            got: 2,
        };
        assert_eq!(
            err.to_string(),
            "Parameter count mismatch: statement expects 3, got 2"
        );
    }
}
