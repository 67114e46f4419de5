//! Terminal color support detection and formatting.
//!
//! Color detection respects the NO_COLOR environment variable and only
//! enables escape codes when both stdout and stderr are terminals.

use std::env;
use std::io::{self, IsTerminal};

/// Output tones the CLI distinguishes
#[derive(Debug, Clone, Copy)]
pub enum Tone {
    Success,
    Warning,
    Error,
    Dim,
}

impl Tone {
    fn ansi(self) -> &'static str {
        match self {
            Tone::Success => "\x1b[32m",
            Tone::Warning => "\x1b[33m",
            Tone::Error => "\x1b[31m",
            Tone::Dim => "\x1b[2m",
        }
    }
}

/// Color support detection and formatting
pub struct ColorSupport {
    enabled: bool,
}

impl ColorSupport {
    /// Detect color support automatically
    pub fn detect() -> Self {
        Self {
            enabled: Self::should_use_colors(),
        }
    }

    /// Force disable colors
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    fn should_use_colors() -> bool {
        if env::var("NO_COLOR").is_ok() {
            return false;
        }

        io::stderr().is_terminal() && io::stdout().is_terminal()
    }

    /// Wrap `text` in the escape codes for `tone` when colors are enabled
    pub fn paint(&self, tone: Tone, text: &str) -> String {
        if self.enabled {
            format!("{}{}\x1b[0m", tone.ansi(), text)
        } else {
            text.to_string()
        }
    }
}
