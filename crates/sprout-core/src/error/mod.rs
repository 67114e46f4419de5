//! Error types and result aliases for Sprout operations.
//!
//! Provides a unified error type that covers all error conditions across the
//! Sprout crates with actionable error messages.

use thiserror::Error;

/// Unified error type for all Sprout operations
#[derive(Error, Debug)]
pub enum SproutError {
    // Descriptor errors
    #[error("Failed to parse sprout.toml: {message}")]
    ManifestParse { message: String },

    #[error("Descriptor field '{field}' is invalid: {reason}")]
    Validation { field: String, reason: String },

    #[error("No sprout.toml found in {searched} or any parent directory")]
    ManifestNotFound { searched: String },

    // Rendering errors
    #[error("Failed to encode metadata: {message}")]
    MetadataJson { message: String },

    // IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for Sprout operations
pub type SproutResult<T> = Result<T, SproutError>;

impl SproutError {
    /// Create an IO error from std::io::Error
    pub fn io(message: String, source: std::io::Error) -> Self {
        Self::Io { message, source }
    }

    /// Create a validation error for a named descriptor field
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            SproutError::ManifestParse { .. } => {
                Some("Check sprout.toml for TOML syntax errors")
            },
            SproutError::Validation { .. } => {
                Some("Edit sprout.toml and correct the reported field")
            },
            SproutError::ManifestNotFound { .. } => {
                Some("Run 'sprout init' to create a descriptor in this directory")
            },
            SproutError::Io { .. } => Some("Check that the path exists and is readable"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_constructor() {
        let err = SproutError::validation("package.name", "must not be empty");
        assert_eq!(
            err.to_string(),
            "Descriptor field 'package.name' is invalid: must not be empty"
        );
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error;

        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = SproutError::io("Failed to read README.md".to_string(), source);

        assert!(err.to_string().contains("README.md"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_suggestions() {
        let err = SproutError::ManifestNotFound {
            searched: "/tmp/project".to_string(),
        };
        assert!(err.suggestion().unwrap().contains("sprout init"));

        let err = SproutError::MetadataJson {
            message: "bad".to_string(),
        };
        assert!(err.suggestion().is_none());
    }
}
