//! Dotted-numeric version type.
//!
//! Dependency strings and interpreter constraints carry versions with a
//! variable number of release segments ("3.8", "1.20.0", "2022.12.7") and an
//! optional pre-release tag. Missing segments compare as zero, so "1.2" and
//! "1.2.0" are the same version.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A version with dotted numeric release segments and an optional
/// pre-release tag ("1.20.0", "3.8", "2.0.0-rc.1")
#[derive(Debug, Clone)]
pub struct Version {
    pub release: Vec<u64>,
    pub pre: Option<String>,
}

/// Version parsing and validation errors
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Invalid version format: {input}")]
    InvalidFormat { input: String },

    #[error("Invalid number in version: {component}")]
    InvalidNumber { component: String },

    #[error("Invalid version specifier: {input}")]
    InvalidSpecifier { input: String },
}

impl Version {
    /// Create a three-segment version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            release: vec![major, minor, patch],
            pre: None,
        }
    }

    /// Release segment at `index`, zero when absent
    pub fn segment(&self, index: usize) -> u64 {
        self.release.get(index).copied().unwrap_or(0)
    }

    /// Check if this is a pre-release version
    pub fn is_prerelease(&self) -> bool {
        self.pre.is_some()
    }

    /// Ordering over zero-padded release segments; a pre-release sorts
    /// before the corresponding release
    fn precedence_cmp(&self, other: &Self) -> Ordering {
        let segments = self.release.len().max(other.release.len());
        for index in 0..segments {
            match self.segment(index).cmp(&other.segment(index)) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }

        match (&self.pre, &other.pre) {
            (None, None) => Ordering::Equal,
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (Some(a), Some(b)) => a.cmp(b),
        }
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(VersionError::InvalidFormat {
                input: input.to_string(),
            });
        }

        // Split on '-' for the pre-release tag
        let (release_part, pre) = match input.split_once('-') {
            Some((_, tag)) if tag.is_empty() => {
                return Err(VersionError::InvalidFormat {
                    input: input.to_string(),
                });
            },
            Some((release, tag)) => (release, Some(tag.to_string())),
            None => (input, None),
        };

        let mut release = Vec::new();
        for component in release_part.split('.') {
            let number = component
                .parse()
                .map_err(|_| VersionError::InvalidNumber {
                    component: component.to_string(),
                })?;
            release.push(number);
        }

        Ok(Version { release, pre })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut segments = self.release.iter();
        if let Some(first) = segments.next() {
            write!(f, "{}", first)?;
        }
        for segment in segments {
            write!(f, ".{}", segment)?;
        }

        if let Some(ref pre) = self.pre {
            write!(f, "-{}", pre)?;
        }

        Ok(())
    }
}

// Equality must agree with the padded ordering, so it cannot be derived.
impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.precedence_cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.precedence_cmp(other)
    }
}

// Versions travel as plain strings in descriptors and rendered metadata.
impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
