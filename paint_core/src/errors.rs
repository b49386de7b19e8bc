//! # Error Types
//!
//! Structured error types for paint_core. These errors are designed to be
//! informative for both humans and LLMs, providing enough context to
//! understand and fix issues programmatically.
//!
//! The calculation functions themselves never fail: degenerate areas
//! propagate and the fixed container data is always valid. Errors arise at
//! the boundaries - parsing user input, or resolving a container kind from a
//! free-form string.
//!
//! ## Example
//!
//! ```rust
//! use paint_core::errors::{PaintError, PaintResult};
//!
//! fn parse_area(raw: &str) -> PaintResult<f64> {
//!     raw.trim().parse().map_err(|_| {
//!         PaintError::invalid_input("area_m2", raw, "expected a decimal number")
//!     })
//! }
//!
//! assert!(parse_area("sixty").is_err());
//! assert_eq!(parse_area("60").unwrap(), 60.0);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for paint_core operations
pub type PaintResult<T> = Result<T, PaintError>;

/// Structured error type for boundary operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum PaintError {
    /// An input value is invalid (not a number, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Container kind not recognized
    #[error("Container not found: {name}")]
    ContainerNotFound { name: String },
}

impl PaintError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        PaintError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a ContainerNotFound error
    pub fn container_not_found(name: impl Into<String>) -> Self {
        PaintError::ContainerNotFound { name: name.into() }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            PaintError::InvalidInput { .. } => "INVALID_INPUT",
            PaintError::ContainerNotFound { .. } => "CONTAINER_NOT_FOUND",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = PaintError::invalid_input("area_m2", "abc", "expected a decimal number");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: PaintError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            PaintError::invalid_input("area_m2", "x", "nope").error_code(),
            "INVALID_INPUT"
        );
        assert_eq!(
            PaintError::container_not_found("barrel").error_code(),
            "CONTAINER_NOT_FOUND"
        );
    }

    #[test]
    fn test_display_message() {
        let error = PaintError::container_not_found("barrel");
        assert_eq!(error.to_string(), "Container not found: barrel");
    }
}
