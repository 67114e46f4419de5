//! Package metadata record.
//!
//! `PackageMetadata` is the resolved record handed to the external packaging
//! backend: descriptive fields, the declared dependency list, and the
//! declared entry-point mapping. It is constructed once per build invocation
//! and never mutated afterwards.

use super::{EntryPoint, Requirement, Version};
use crate::error::{SproutError, SproutResult};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Resolved distribution metadata for one package.
///
/// `dependencies` and the per-category entry-point lists keep their declared
/// order; consumers receive them exactly as written in the descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageMetadata {
    pub name: String,
    pub version: Version,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_email: Option<String>,

    /// Minimum interpreter version constraint, as declared
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_interpreter: Option<String>,

    /// Long description text, typically loaded from a README file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,

    /// Markup dialect of the long description ("text/markdown", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description_format: Option<String>,

    /// Declared dependency strings, in declaration order
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Category name to declared entry-point strings, in declaration order
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub entry_points: IndexMap<String, Vec<String>>,
}

impl PackageMetadata {
    /// Create metadata with the required fields only
    pub fn new(name: String, version: Version) -> Self {
        Self {
            name,
            version,
            description: None,
            url: None,
            author: None,
            author_email: None,
            requires_interpreter: None,
            long_description: None,
            long_description_format: None,
            dependencies: Vec::new(),
            entry_points: IndexMap::new(),
        }
    }

    /// Parse the declared dependency strings into requirements
    pub fn requirements(&self) -> SproutResult<Vec<Requirement>> {
        self.dependencies
            .iter()
            .map(|declared| {
                declared.parse().map_err(|e| {
                    SproutError::validation("dependencies", format!("{}", e))
                })
            })
            .collect()
    }

    /// Check if a dependency on `name` is declared
    pub fn has_dependency(&self, name: &str) -> bool {
        self.requirements()
            .map(|reqs| reqs.iter().any(|req| req.name == name))
            .unwrap_or(false)
    }

    /// Parse the declared entry points of one category
    pub fn entry_points_in(&self, category: &str) -> SproutResult<Vec<EntryPoint>> {
        let declared = match self.entry_points.get(category) {
            Some(declared) => declared,
            None => return Ok(Vec::new()),
        };

        declared
            .iter()
            .map(|entry| {
                entry.parse().map_err(|e| {
                    SproutError::validation(
                        format!("entry-points.{}", category),
                        format!("{}", e),
                    )
                })
            })
            .collect()
    }
}

/// Check if a package name is well formed: alphanumeric start, then
/// alphanumerics, hyphens, underscores, or dots, without a trailing hyphen
pub fn is_valid_package_name(name: &str) -> bool {
    if name.is_empty() || name.ends_with('-') {
        return false;
    }

    if !name.chars().next().unwrap_or(' ').is_alphanumeric() {
        return false;
    }

    name.chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_creation() {
        let meta = PackageMetadata::new("my-package".to_string(), Version::new(0, 1, 0));

        assert_eq!(meta.name, "my-package");
        assert_eq!(meta.version, Version::new(0, 1, 0));
        assert_eq!(meta.description, None);
        assert!(meta.dependencies.is_empty());
        assert!(meta.entry_points.is_empty());
    }

    #[test]
    fn test_requirements_parsing() {
        let mut meta = PackageMetadata::new("pkg".to_string(), Version::new(1, 0, 0));
        meta.dependencies = vec!["numpy>=1.20.0".to_string(), "tomli".to_string()];

        let reqs = meta.requirements().unwrap();
        assert_eq!(reqs.len(), 2);
        assert_eq!(reqs[0].name, "numpy");

        assert!(meta.has_dependency("numpy"));
        assert!(!meta.has_dependency("requests"));
    }

    #[test]
    fn test_malformed_dependency_is_rejected() {
        let mut meta = PackageMetadata::new("pkg".to_string(), Version::new(1, 0, 0));
        meta.dependencies = vec![">=1.0".to_string()];

        assert!(meta.requirements().is_err());
        assert!(!meta.has_dependency("anything"));
    }

    #[test]
    fn test_entry_points_in() {
        let mut meta = PackageMetadata::new("pkg".to_string(), Version::new(1, 0, 0));
        meta.entry_points.insert(
            "console_scripts".to_string(),
            vec![
                "first = pkg.cli:main".to_string(),
                "second = pkg.cli:alt".to_string(),
            ],
        );

        let parsed = meta.entry_points_in("console_scripts").unwrap();
        assert_eq!(parsed.len(), 2);
        // Declared order is preserved
        assert_eq!(parsed[0].name, "first");
        assert_eq!(parsed[1].name, "second");

        assert!(meta.entry_points_in("gui_scripts").unwrap().is_empty());
    }

    #[test]
    fn test_serde_round_trip() {
        let mut meta = PackageMetadata::new("pkg".to_string(), Version::new(1, 0, 0));
        meta.description = Some("A test package".to_string());
        meta.dependencies = vec!["b>=1.0".to_string(), "a>=2.0".to_string()];
        meta.entry_points
            .insert("console_scripts".to_string(), vec!["x = pkg:main".to_string()]);

        let json = serde_json::to_string(&meta).unwrap();
        let back: PackageMetadata = serde_json::from_str(&json).unwrap();

        assert_eq!(back, meta);
        // Declaration order survives the round trip
        assert_eq!(back.dependencies, vec!["b>=1.0", "a>=2.0"]);
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let meta = PackageMetadata::new("pkg".to_string(), Version::new(1, 0, 0));
        let json = serde_json::to_string(&meta).unwrap();

        assert!(!json.contains("long_description"));
        assert!(!json.contains("entry_points"));
    }

    #[test]
    fn test_valid_package_names() {
        assert!(is_valid_package_name("my-package"));
        assert!(is_valid_package_name("my_package"));
        assert!(is_valid_package_name("package123"));
        assert!(is_valid_package_name("zope.interface"));

        assert!(!is_valid_package_name(""));
        assert!(!is_valid_package_name("-invalid"));
        assert!(!is_valid_package_name("invalid-"));
        assert!(!is_valid_package_name("invalid name"));
        assert!(!is_valid_package_name("invalid@name"));
    }
}
