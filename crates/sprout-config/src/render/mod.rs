//! Resolving a descriptor into the metadata record and rendering it as JSON
//! for the external packaging backend.

use crate::{manifest, readme, ConfigResult};
use camino::Utf8Path;
use sprout_core::error::SproutError;
use sprout_core::types::PackageMetadata;

/// Load the descriptor at `manifest_path` and resolve it into the final
/// metadata record, reading the declared README when present.
///
/// A declared README that is missing or unreadable fails the whole
/// resolution; there is no partial record.
pub async fn resolve_metadata(manifest_path: &Utf8Path) -> ConfigResult<PackageMetadata> {
    let loaded = manifest::load_from_file(manifest_path).await?;

    let long_description = match loaded.package.readme.clone() {
        Some(declared) => {
            let manifest_dir = manifest_path.parent().unwrap_or(Utf8Path::new("."));
            let readme_path = readme::resolve_readme_path(manifest_dir, &declared)?;
            Some(readme::load_long_description(&readme_path).await?)
        },
        None => None,
    };

    Ok(loaded.into_metadata(long_description))
}

/// Serialize a metadata record to pretty-printed JSON
pub fn serialize_metadata(metadata: &PackageMetadata) -> ConfigResult<String> {
    serde_json::to_string_pretty(metadata).map_err(|e| SproutError::MetadataJson {
        message: format!("JSON serialization error: {}", e),
    })
}

/// Parse a rendered metadata record back from JSON
pub fn parse_metadata(content: &str) -> ConfigResult<PackageMetadata> {
    serde_json::from_str(content).map_err(|e| SproutError::MetadataJson {
        message: format!("JSON parsing error: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::{Manifest, MANIFEST_FILE_NAME, TEMPLATE};
    use camino::Utf8PathBuf;

    async fn write_project(dir: &tempfile::TempDir, manifest: &str) -> Utf8PathBuf {
        let root = Utf8PathBuf::try_from(dir.path().to_path_buf()).unwrap();
        let path = root.join(MANIFEST_FILE_NAME);
        tokio::fs::write(&path, manifest).await.unwrap();
        path
    }

    #[tokio::test]
    async fn test_resolve_with_readme() {
        let dir = tempfile::tempdir().unwrap();
        let manifest_path = write_project(&dir, TEMPLATE).await;
        tokio::fs::write(dir.path().join("README.md"), "# Hello\nWorld\n")
            .await
            .unwrap();

        let metadata = resolve_metadata(&manifest_path).await.unwrap();

        assert_eq!(metadata.name, "my-package");
        assert_eq!(metadata.long_description.as_deref(), Some("# Hello\nWorld\n"));
        assert_eq!(
            metadata.long_description_format.as_deref(),
            Some("text/markdown")
        );
        assert!(metadata.has_dependency("numpy"));
    }

    #[tokio::test]
    async fn test_missing_readme_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        // Template declares README.md but the file is never written
        let manifest_path = write_project(&dir, TEMPLATE).await;

        let result = resolve_metadata(&manifest_path).await;
        assert!(matches!(result, Err(SproutError::Io { .. })));
    }

    #[tokio::test]
    async fn test_resolve_without_readme() {
        let dir = tempfile::tempdir().unwrap();
        let manifest_path = write_project(
            &dir,
            r#"
[package]
name = "quiet-package"
version = "1.0.0"
"#,
        )
        .await;

        let metadata = resolve_metadata(&manifest_path).await.unwrap();
        assert_eq!(metadata.long_description, None);
        assert_eq!(metadata.long_description_format, None);
    }

    #[tokio::test]
    async fn test_resolution_is_repeatable() {
        let dir = tempfile::tempdir().unwrap();
        let manifest_path = write_project(&dir, TEMPLATE).await;
        tokio::fs::write(dir.path().join("README.md"), "text")
            .await
            .unwrap();

        let first = resolve_metadata(&manifest_path).await.unwrap();
        let second = resolve_metadata(&manifest_path).await.unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_json_round_trip() {
        let metadata = Manifest::template().into_metadata(Some("# Hi\n".to_string()));

        let json = serialize_metadata(&metadata).unwrap();
        let reparsed = parse_metadata(&json).unwrap();

        assert_eq!(reparsed, metadata);
    }

    #[test]
    fn test_rendered_json_shape() {
        let metadata = Manifest::template().into_metadata(None);
        let json = serialize_metadata(&metadata).unwrap();

        assert!(json.contains("\"name\": \"my-package\""));
        assert!(json.contains("\"version\": \"0.0.0\""));
        assert!(json.contains("numpy>=1.20.0"));
        // No readme was loaded, so no long-description keys are emitted
        assert!(!json.contains("long_description"));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_metadata("not json"),
            Err(SproutError::MetadataJson { .. })
        ));
    }
}
