//! Long-description loading from README files.
//!
//! The descriptor names a README file; its text becomes the record's long
//! description verbatim. A missing or unreadable file is a fatal
//! configuration error that propagates to the invoker untouched.

use crate::ConfigResult;
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use sprout_core::error::SproutError;

/// Markup dialects a descriptor may declare for its readme
pub const KNOWN_FORMATS: [&str; 3] = ["text/markdown", "text/x-rst", "text/plain"];

/// Read the long-description file as UTF-8 text.
///
/// The handle is scoped to the read and released on every exit path. The
/// returned string is the file's exact contents; there is no retry and no
/// fallback for a missing or unreadable path.
pub async fn load_long_description(path: &Utf8Path) -> ConfigResult<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| SproutError::io(format!("Failed to read long description from {}", path), e))
}

/// Infer the markup dialect from a readme file name
pub fn infer_format(path: &str) -> Option<&'static str> {
    let extension = Utf8Path::new(path).extension()?.to_lowercase();
    match extension.as_str() {
        "md" | "markdown" => Some("text/markdown"),
        "rst" => Some("text/x-rst"),
        "txt" => Some("text/plain"),
        _ => None,
    }
}

/// Resolve the declared readme path against the descriptor's directory.
///
/// The declared path must stay inside the project: absolute paths and paths
/// that climb above the descriptor are rejected.
pub fn resolve_readme_path(manifest_dir: &Utf8Path, declared: &str) -> ConfigResult<Utf8PathBuf> {
    let declared_path = Utf8Path::new(declared);

    if declared_path.is_absolute() {
        return Err(SproutError::validation(
            "package.readme",
            format!("'{}' must be relative to the descriptor", declared),
        ));
    }

    let mut depth = 0i32;
    for component in declared_path.components() {
        match component {
            Utf8Component::CurDir => {},
            Utf8Component::ParentDir => {
                depth -= 1;
                if depth < 0 {
                    return Err(SproutError::validation(
                        "package.readme",
                        format!("'{}' escapes the project directory", declared),
                    ));
                }
            },
            Utf8Component::Normal(_) => depth += 1,
            _ => {
                return Err(SproutError::validation(
                    "package.readme",
                    format!("'{}' is not a plain relative path", declared),
                ));
            },
        }
    }

    Ok(manifest_dir.join(declared_path))
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use camino::Utf8PathBuf;
    use proptest::prelude::*;

    proptest! {
        // Loading returns exactly what the file contains, for arbitrary text
        #[test]
        fn long_description_round_trip(content in any::<String>()) {
            let dir = tempfile::tempdir().unwrap();
            let path = Utf8PathBuf::try_from(dir.path().join("README.md")).unwrap();
            std::fs::write(&path, &content).unwrap();

            let rt = tokio::runtime::Runtime::new().unwrap();
            let loaded = rt.block_on(load_long_description(&path)).unwrap();

            prop_assert_eq!(loaded, content);
        }
    }

    proptest! {
        // A path that was never created always fails, never returns a value
        #[test]
        fn missing_paths_fail(name in "[a-z]{1,12}")  {
            let dir = tempfile::tempdir().unwrap();
            let path = Utf8PathBuf::try_from(dir.path().join(format!("{}.md", name))).unwrap();

            let rt = tokio::runtime::Runtime::new().unwrap();
            prop_assert!(rt.block_on(load_long_description(&path)).is_err());
        }
    }
}
