//! sprout.toml descriptor parsing, validation, and serialization

use crate::ConfigResult;
use camino::{Utf8Path, Utf8PathBuf};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use sprout_core::error::SproutError;
use sprout_core::types::{
    is_valid_package_name, EntryPoint, PackageMetadata, Requirement, SpecifierSet, Version,
};

/// Descriptor file name looked up in the project directory
pub const MANIFEST_FILE_NAME: &str = "sprout.toml";

/// The unmodified descriptor template written by `sprout init`.
///
/// `Manifest::template()` constructs the same descriptor as a value; the
/// two are kept in sync by a test.
pub const TEMPLATE: &str = r#"# Package descriptor. Fill in every field before handing the package to
# your packaging backend, then verify it with `sprout check`.

[package]
name = "my-package"
version = "0.0.0"
description = "A short summary of the package"
url = "https://github.com/user/my-package"
author = "Your Name"
author-email = "you@example.com"
readme = "README.md"
# readme-format = "text/markdown"
# requires-interpreter = ">=3.8"
dependencies = [
    "numpy>=1.20.0",
]

# Map command names to the callables that implement them, per category:
# [entry-points]
# console_scripts = ["my-command = my_package.cli:main"]
"#;

/// Complete sprout.toml descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Package metadata section
    pub package: PackageSection,

    /// Entry-point categories, each an ordered list of
    /// "command = module:attr" strings
    #[serde(
        default,
        rename = "entry-points",
        skip_serializing_if = "IndexMap::is_empty"
    )]
    pub entry_points: IndexMap<String, Vec<String>>,
}

/// Package metadata section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageSection {
    /// Package name (required)
    pub name: String,

    /// Package version (required)
    pub version: Version,

    /// Short summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Source repository location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Author name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Author contact address
    #[serde(default, rename = "author-email", skip_serializing_if = "Option::is_none")]
    pub author_email: Option<String>,

    /// Minimum interpreter version constraint (">=3.8")
    #[serde(
        default,
        rename = "requires-interpreter",
        skip_serializing_if = "Option::is_none"
    )]
    pub requires_interpreter: Option<String>,

    /// Long-description source file, relative to the descriptor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readme: Option<String>,

    /// Markup dialect of the readme; inferred from the extension if absent
    #[serde(default, rename = "readme-format", skip_serializing_if = "Option::is_none")]
    pub readme_format: Option<String>,

    /// Declared dependency strings, order preserved
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl Manifest {
    /// The unmodified template descriptor
    pub fn template() -> Self {
        Manifest {
            package: PackageSection {
                name: "my-package".to_string(),
                version: Version::new(0, 0, 0),
                description: Some("A short summary of the package".to_string()),
                url: Some("https://github.com/user/my-package".to_string()),
                author: Some("Your Name".to_string()),
                author_email: Some("you@example.com".to_string()),
                requires_interpreter: None,
                readme: Some("README.md".to_string()),
                readme_format: None,
                dependencies: vec!["numpy>=1.20.0".to_string()],
            },
            entry_points: IndexMap::new(),
        }
    }

    /// Convert this descriptor into the metadata record handed to the
    /// packaging backend. `long_description` is the loaded readme text, if
    /// the descriptor declared one.
    pub fn into_metadata(self, long_description: Option<String>) -> PackageMetadata {
        let Manifest {
            package,
            entry_points,
        } = self;
        let PackageSection {
            name,
            version,
            description,
            url,
            author,
            author_email,
            requires_interpreter,
            readme,
            readme_format,
            dependencies,
        } = package;

        let long_description_format = match &long_description {
            Some(_) => readme_format.or_else(|| {
                readme
                    .as_deref()
                    .and_then(|path| crate::readme::infer_format(path))
                    .map(str::to_string)
            }),
            None => None,
        };

        PackageMetadata {
            name,
            version,
            description,
            url,
            author,
            author_email,
            requires_interpreter,
            long_description,
            long_description_format,
            dependencies,
            entry_points,
        }
    }
}

/// Parse TOML string to a validated Manifest
pub fn parse_manifest(content: &str) -> ConfigResult<Manifest> {
    // First pass with toml_edit for better syntax error reporting
    content
        .parse::<toml_edit::DocumentMut>()
        .map_err(|e| SproutError::ManifestParse {
            message: format!("TOML syntax error: {}", e),
        })?;

    // Then parse with serde for type safety
    let manifest: Manifest = toml::from_str(content).map_err(|e| SproutError::ManifestParse {
        message: format!("TOML parsing error: {}", e),
    })?;

    validate_manifest(&manifest)?;

    Ok(manifest)
}

/// Serialize a Manifest to TOML string
pub fn serialize_manifest(manifest: &Manifest) -> ConfigResult<String> {
    toml::to_string_pretty(manifest).map_err(|e| SproutError::ManifestParse {
        message: format!("TOML serialization error: {}", e),
    })
}

/// Validate descriptor completeness
pub fn validate_manifest(manifest: &Manifest) -> ConfigResult<()> {
    let package = &manifest.package;

    if !is_valid_package_name(&package.name) {
        return Err(SproutError::validation(
            "package.name",
            format!(
                "'{}' is not a valid package name; names start with an alphanumeric \
                 character and may contain hyphens, underscores, and dots",
                package.name
            ),
        ));
    }

    for declared in &package.dependencies {
        declared.parse::<Requirement>().map_err(|e| {
            SproutError::validation("package.dependencies", format!("{}", e))
        })?;
    }

    if let Some(constraint) = &package.requires_interpreter {
        let specifiers = SpecifierSet::parse(constraint).map_err(|e| {
            SproutError::validation("package.requires-interpreter", format!("{}", e))
        })?;
        if specifiers.is_empty() {
            return Err(SproutError::validation(
                "package.requires-interpreter",
                "constraint must declare at least one specifier",
            ));
        }
    }

    if let Some(format) = &package.readme_format {
        if package.readme.is_none() {
            return Err(SproutError::validation(
                "package.readme-format",
                "readme-format is declared but readme is not",
            ));
        }
        if !crate::readme::KNOWN_FORMATS.contains(&format.as_str()) {
            return Err(SproutError::validation(
                "package.readme-format",
                format!(
                    "unknown dialect '{}'; expected one of {}",
                    format,
                    crate::readme::KNOWN_FORMATS.join(", ")
                ),
            ));
        }
    }

    for (category, entries) in &manifest.entry_points {
        if !is_valid_package_name(category) {
            return Err(SproutError::validation(
                "entry-points",
                format!("'{}' is not a valid category name", category),
            ));
        }
        for entry in entries {
            entry.parse::<EntryPoint>().map_err(|e| {
                SproutError::validation(format!("entry-points.{}", category), format!("{}", e))
            })?;
        }
    }

    Ok(())
}

/// Load and parse a descriptor from a file path
pub async fn load_from_file(path: &Utf8Path) -> ConfigResult<Manifest> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| SproutError::io(format!("Failed to read {}", path), e))?;

    parse_manifest(&content).map_err(|e| match e {
        SproutError::ManifestParse { message } => SproutError::ManifestParse {
            message: format!("In file {}: {}", path, message),
        },
        SproutError::Validation { field, reason } => SproutError::Validation {
            field,
            reason: format!("In file {}: {}", path, reason),
        },
        other => other,
    })
}

/// Find the descriptor for `start`, walking up the directory tree
pub fn locate_manifest(start: &Utf8Path) -> ConfigResult<Utf8PathBuf> {
    let mut current = start;

    loop {
        let candidate = current.join(MANIFEST_FILE_NAME);
        if candidate.exists() {
            return Ok(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => break,
        }
    }

    Err(SproutError::ManifestNotFound {
        searched: start.to_string(),
    })
}
