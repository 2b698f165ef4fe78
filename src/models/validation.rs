//! Validation error types

use std::fmt;

/// Validation error for form input
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Required field is missing or empty
    Empty { field: &'static str },

    /// Field value doesn't parse as the expected format
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} is required", field),
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Require a non-empty value, trimming surrounding whitespace.
pub fn require(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::Empty { field })
    } else {
        Ok(trimmed.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_trims() {
        assert_eq!(require("title", "  Book Club ").unwrap(), "Book Club");
    }

    #[test]
    fn require_rejects_blank() {
        let err = require("title", "   ").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "title" }));
    }

    #[test]
    fn error_display() {
        let err = ValidationError::Empty { field: "capacity" };
        assert_eq!(err.to_string(), "capacity is required");
    }
}
