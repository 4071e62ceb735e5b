//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`TubError`]
//! via `From` before crossing a port boundary.

use std::num::ParseIntError;

/// Boxed error coming out of an adapter.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Top-level error crossing the port boundaries.
#[derive(Debug, thiserror::Error)]
pub enum TubError {
    /// Caller supplied input that does not make sense.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The persistent store failed to read or write.
    #[error("{0}")]
    Storage(BoxError),

    /// The actuator could not be reached.
    #[error("{0}")]
    Actuator(BoxError),

    /// A page could not be rendered.
    #[error("{0}")]
    Render(String),
}

/// Input validation failures.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// `settub` received something other than `on` or `off`.
    #[error("Invalid value")]
    InvalidTubValue(String),

    /// A numeric parameter could not be parsed.
    #[error("{source}")]
    InvalidInteger {
        field: &'static str,
        #[source]
        source: ParseIntError,
    },
}

impl ValidationError {
    /// Wrap a parse failure for the named request field.
    #[must_use]
    pub fn invalid_integer(field: &'static str, source: ParseIntError) -> Self {
        Self::InvalidInteger { field, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_invalid_tub_value_without_echoing_input() {
        let err: TubError = ValidationError::InvalidTubValue("xyz".to_string()).into();
        assert_eq!(err.to_string(), "Invalid value");
    }

    #[test]
    fn should_display_parse_error_text_for_invalid_integer() {
        let source = "abc".parse::<i64>().unwrap_err();
        let expected = source.to_string();
        let err: TubError = ValidationError::invalid_integer("value", source).into();
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn should_display_underlying_storage_error() {
        let err = TubError::Storage("disk full".into());
        assert_eq!(err.to_string(), "disk full");
    }
}
