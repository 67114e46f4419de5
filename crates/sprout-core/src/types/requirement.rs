//! Declared dependency strings.
//!
//! A requirement is the string form a descriptor declares a dependency in:
//! a package name followed by an optional specifier list ("numpy>=1.20.0",
//! "requests>=2.0,<3", or a bare "tomli").

use super::metadata::is_valid_package_name;
use super::{SpecifierSet, Version, VersionError};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Dependency name plus version constraints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub name: String,
    pub specifiers: SpecifierSet,
}

/// Requirement parsing errors
#[derive(Error, Debug)]
pub enum RequirementError {
    #[error("Invalid requirement: {input}")]
    InvalidFormat { input: String },

    #[error("Invalid package name in requirement: '{name}'")]
    InvalidName { name: String },

    #[error(transparent)]
    Version(#[from] VersionError),
}

impl Requirement {
    /// Create a requirement with no version constraints
    pub fn unconstrained(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            specifiers: SpecifierSet::default(),
        }
    }

    /// Check if a candidate version satisfies this requirement
    pub fn matches(&self, version: &Version) -> bool {
        self.specifiers.matches(version)
    }
}

impl FromStr for Requirement {
    type Err = RequirementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(RequirementError::InvalidFormat {
                input: input.to_string(),
            });
        }

        // The name ends where the first operator character begins
        let operator_at = input.find(|c| matches!(c, '=' | '!' | '<' | '>' | '~'));
        let (name_part, spec_part) = match operator_at {
            Some(index) => (&input[..index], &input[index..]),
            None => (input, ""),
        };

        let name = name_part.trim();
        if !is_valid_package_name(name) {
            return Err(RequirementError::InvalidName {
                name: name.to_string(),
            });
        }

        let specifiers = SpecifierSet::parse(spec_part)?;

        Ok(Requirement {
            name: name.to_string(),
            specifiers,
        })
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.specifiers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirement_parsing() {
        let req = Requirement::from_str("numpy>=1.20.0").unwrap();

        assert_eq!(req.name, "numpy");
        assert!(req.matches(&Version::new(1, 20, 0)));
        assert!(!req.matches(&Version::new(1, 19, 0)));
    }

    #[test]
    fn test_bare_name() {
        let req = Requirement::from_str("tomli").unwrap();

        assert_eq!(req.name, "tomli");
        assert!(req.specifiers.is_empty());
        assert!(req.matches(&Version::new(0, 0, 1)));
    }

    #[test]
    fn test_multiple_clauses() {
        let req = Requirement::from_str("requests>=2.0,<3").unwrap();

        assert!(req.matches(&Version::new(2, 31, 0)));
        assert!(!req.matches(&Version::new(3, 0, 0)));
    }

    #[test]
    fn test_whitespace_tolerated() {
        let req = Requirement::from_str("  numpy >= 1.20.0 ").unwrap();
        assert_eq!(req.name, "numpy");
    }

    #[test]
    fn test_invalid_requirements() {
        assert!(Requirement::from_str("").is_err());
        assert!(Requirement::from_str(">=1.0.0").is_err());
        assert!(Requirement::from_str("bad name>=1.0").is_err());
        assert!(Requirement::from_str("numpy>=not.a.version").is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for input in ["numpy>=1.20.0", "tomli", "requests>=2.0,<3"] {
            let req = Requirement::from_str(input).unwrap();
            let reparsed = Requirement::from_str(&req.to_string()).unwrap();
            assert_eq!(reparsed, req);
        }
    }
}
