//! Error message formatting with actionable suggestions.
//!
//! Formats a SproutError for the terminal: the error itself, a fix
//! suggestion when one exists, and the source chain.

use super::colors::{ColorSupport, Tone};
use sprout_core::error::SproutError;
use std::error::Error;

/// Error formatter with suggestions
pub struct ErrorFormatter {
    colors: ColorSupport,
}

impl ErrorFormatter {
    /// Create a new error formatter
    pub fn new() -> Self {
        Self {
            colors: ColorSupport::detect(),
        }
    }

    /// Format an error with context and suggestions
    pub fn format_error(&self, error: &SproutError) -> String {
        let mut output = String::new();

        output.push_str(&self.colors.paint(Tone::Error, "error"));
        output.push_str(": ");
        output.push_str(&error.to_string());

        if let Some(suggestion) = error.suggestion() {
            output.push('\n');
            output.push_str(&self.colors.paint(Tone::Dim, "help"));
            output.push_str(": ");
            output.push_str(suggestion);
        }

        let mut source = error.source();
        while let Some(err) = source {
            output.push('\n');
            output.push_str(&self.colors.paint(Tone::Dim, "caused by"));
            output.push_str(": ");
            output.push_str(&err.to_string());
            source = err.source();
        }

        output
    }
}

impl Default for ErrorFormatter {
    fn default() -> Self {
        Self::new()
    }
}
