//! Version specifiers for dependency and interpreter constraints.
//!
//! A specifier pairs a comparison operator with a version ("==1.0.0",
//! ">=1.20.0", "~=2.3"). A specifier set is a comma-separated conjunction of
//! specifiers; a version matches the set when it matches every member.

use super::{Version, VersionError};
use std::fmt;
use std::str::FromStr;

/// Comparison operator in a version specifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Exact,      // ==1.0.0
    NotEqual,   // !=1.0.0
    Greater,    // >1.0.0
    GreaterEq,  // >=1.0.0
    Less,       // <1.0.0
    LessEq,     // <=1.0.0
    Compatible, // ~=1.2 (>=1.2, same leading segments up to the last)
}

/// Single version specifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specifier {
    pub op: Op,
    pub version: Version,
}

/// Conjunction of specifiers (">=1.20.0,<2.0"); empty matches everything
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecifierSet {
    pub specifiers: Vec<Specifier>,
}

impl Specifier {
    /// Check if a version matches this specifier
    pub fn matches(&self, version: &Version) -> bool {
        match self.op {
            Op::Exact => version == &self.version,
            Op::NotEqual => version != &self.version,
            Op::Greater => version > &self.version,
            Op::GreaterEq => version >= &self.version,
            Op::Less => version < &self.version,
            Op::LessEq => version <= &self.version,
            Op::Compatible => self.matches_compatible(version),
        }
    }

    /// ~=X.Y.Z allows >=X.Y.Z while keeping every segment but the last fixed
    fn matches_compatible(&self, version: &Version) -> bool {
        if version < &self.version {
            return false;
        }

        let fixed = self.version.release.len() - 1;
        (0..fixed).all(|index| version.segment(index) == self.version.segment(index))
    }
}

impl FromStr for Specifier {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();

        let (op, version_str) = if let Some(stripped) = input.strip_prefix("==") {
            (Op::Exact, stripped)
        } else if let Some(stripped) = input.strip_prefix("!=") {
            (Op::NotEqual, stripped)
        } else if let Some(stripped) = input.strip_prefix(">=") {
            (Op::GreaterEq, stripped)
        } else if let Some(stripped) = input.strip_prefix("<=") {
            (Op::LessEq, stripped)
        } else if let Some(stripped) = input.strip_prefix("~=") {
            (Op::Compatible, stripped)
        } else if let Some(stripped) = input.strip_prefix(">") {
            (Op::Greater, stripped)
        } else if let Some(stripped) = input.strip_prefix("<") {
            (Op::Less, stripped)
        } else {
            // Bare version means an exact pin
            (Op::Exact, input)
        };

        let version: Version = version_str.trim().parse()?;

        // A compatible-release clause needs a segment to hold fixed
        if op == Op::Compatible && version.release.len() < 2 {
            return Err(VersionError::InvalidSpecifier {
                input: input.to_string(),
            });
        }

        Ok(Specifier { op, version })
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Op::Exact => "==",
            Op::NotEqual => "!=",
            Op::Greater => ">",
            Op::GreaterEq => ">=",
            Op::Less => "<",
            Op::LessEq => "<=",
            Op::Compatible => "~=",
        };
        f.write_str(symbol)
    }
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.op, self.version)
    }
}

impl SpecifierSet {
    /// Parse a comma-separated specifier list; empty input is the empty set
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(Self::default());
        }

        let mut specifiers = Vec::new();
        for clause in input.split(',') {
            specifiers.push(clause.parse()?);
        }

        Ok(Self { specifiers })
    }

    /// Check if a version matches every specifier in the set
    pub fn matches(&self, version: &Version) -> bool {
        self.specifiers.iter().all(|spec| spec.matches(version))
    }

    pub fn is_empty(&self) -> bool {
        self.specifiers.is_empty()
    }
}

impl fmt::Display for SpecifierSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut specifiers = self.specifiers.iter();
        if let Some(first) = specifiers.next() {
            write!(f, "{}", first)?;
        }
        for spec in specifiers {
            write!(f, ",{}", spec)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specifier_parsing() {
        let spec = Specifier::from_str(">=1.20.0").unwrap();
        assert_eq!(spec.op, Op::GreaterEq);
        assert_eq!(spec.version, Version::new(1, 20, 0));
    }

    #[test]
    fn test_bare_version_is_exact() {
        let spec = Specifier::from_str("1.0.0").unwrap();
        assert_eq!(spec.op, Op::Exact);
    }

    #[test]
    fn test_greater_eq() {
        let spec = Specifier::from_str(">=1.20.0").unwrap();

        assert!(spec.matches(&Version::new(1, 20, 0)));
        assert!(spec.matches(&Version::new(1, 21, 0)));
        assert!(spec.matches(&Version::new(2, 0, 0)));
        assert!(!spec.matches(&Version::new(1, 19, 9)));
    }

    #[test]
    fn test_exact_and_not_equal() {
        let exact = Specifier::from_str("==1.2.0").unwrap();
        assert!(exact.matches(&Version::new(1, 2, 0)));
        assert!(!exact.matches(&Version::new(1, 2, 1)));

        let not_equal = Specifier::from_str("!=1.2.0").unwrap();
        assert!(!not_equal.matches(&Version::new(1, 2, 0)));
        assert!(not_equal.matches(&Version::new(1, 2, 1)));
    }

    #[test]
    fn test_compatible_release() {
        let spec = Specifier::from_str("~=1.20.0").unwrap();

        assert!(spec.matches(&Version::new(1, 20, 0)));
        assert!(spec.matches(&Version::new(1, 20, 5)));
        assert!(!spec.matches(&Version::new(1, 21, 0)));
        assert!(!spec.matches(&Version::new(2, 0, 0)));

        let spec = Specifier::from_str("~=1.20").unwrap();
        assert!(spec.matches(&Version::new(1, 20, 0)));
        assert!(spec.matches(&Version::new(1, 25, 0)));
        assert!(!spec.matches(&Version::new(2, 0, 0)));
    }

    #[test]
    fn test_compatible_needs_two_segments() {
        assert!(Specifier::from_str("~=2").is_err());
    }

    #[test]
    fn test_specifier_set() {
        let set = SpecifierSet::parse(">=1.20.0,<2.0").unwrap();

        assert!(set.matches(&Version::new(1, 20, 0)));
        assert!(set.matches(&Version::new(1, 99, 0)));
        assert!(!set.matches(&Version::new(2, 0, 0)));
        assert!(!set.matches(&Version::new(1, 19, 0)));
    }

    #[test]
    fn test_empty_set_matches_everything() {
        let set = SpecifierSet::parse("").unwrap();
        assert!(set.is_empty());
        assert!(set.matches(&Version::new(0, 0, 1)));
        assert!(set.matches(&Version::new(999, 0, 0)));
    }

    #[test]
    fn test_set_display_round_trip() {
        let set = SpecifierSet::parse(">=1.20.0,<2.0").unwrap();
        assert_eq!(set.to_string(), ">=1.20.0,<2.0");

        let reparsed = SpecifierSet::parse(&set.to_string()).unwrap();
        assert_eq!(reparsed, set);
    }

    #[test]
    fn test_malformed_clause() {
        assert!(SpecifierSet::parse(">=1.0,,<2.0").is_err());
        assert!(SpecifierSet::parse(">=abc").is_err());
    }
}
