//! Declared command-line entry points.
//!
//! An entry point maps an invocable command name to the callable that
//! implements it, in the string form descriptors declare:
//! "my-command = my_package.cli:main". Sprout only declares and validates the
//! mapping; generating runnable scripts is the packaging backend's job.

use super::metadata::is_valid_package_name;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Command name plus the callable location implementing it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPoint {
    pub name: String,
    pub module: String,
    pub attr: String,
}

/// Entry-point parsing errors
#[derive(Error, Debug)]
pub enum EntryPointError {
    #[error("Invalid entry point: '{input}' (expected 'name = module:attr')")]
    InvalidFormat { input: String },

    #[error("Invalid command name in entry point: '{name}'")]
    InvalidName { name: String },

    #[error("Invalid callable reference in entry point: '{target}'")]
    InvalidTarget { target: String },
}

impl EntryPoint {
    /// The callable location in "module:attr" form
    pub fn target(&self) -> String {
        format!("{}:{}", self.module, self.attr)
    }
}

impl FromStr for EntryPoint {
    type Err = EntryPointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();

        let (name_part, target_part) =
            input
                .split_once('=')
                .ok_or_else(|| EntryPointError::InvalidFormat {
                    input: input.to_string(),
                })?;

        let name = name_part.trim();
        if !is_valid_package_name(name) {
            return Err(EntryPointError::InvalidName {
                name: name.to_string(),
            });
        }

        let target = target_part.trim();
        let (module, attr) = target
            .split_once(':')
            .ok_or_else(|| EntryPointError::InvalidTarget {
                target: target.to_string(),
            })?;

        if !is_dotted_identifier(module) || !is_dotted_identifier(attr) {
            return Err(EntryPointError::InvalidTarget {
                target: target.to_string(),
            });
        }

        Ok(EntryPoint {
            name: name.to_string(),
            module: module.to_string(),
            attr: attr.to_string(),
        })
    }
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}:{}", self.name, self.module, self.attr)
    }
}

/// Check a dot-separated path of identifiers ("my_package.cli")
fn is_dotted_identifier(s: &str) -> bool {
    !s.is_empty() && s.split('.').all(is_identifier)
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {},
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}
