//! `sprout new` command implementation.
//!
//! Creates a new package directory containing a descriptor with the given
//! name and a stub README.

use super::CommandContext;
use camino::Utf8Path;
use sprout_config::manifest::{serialize_manifest, Manifest, MANIFEST_FILE_NAME};
use sprout_core::error::{SproutError, SproutResult};
use sprout_core::types::is_valid_package_name;
use std::fs;

/// Execute the `sprout new` command
pub async fn execute(name: String, ctx: &CommandContext) -> SproutResult<()> {
    if !is_valid_package_name(&name) {
        return Err(SproutError::validation(
            "name",
            format!(
                "'{}' is not a valid package name; names start with an alphanumeric \
                 character and may contain hyphens, underscores, and dots",
                name
            ),
        ));
    }

    let project_path = ctx.cwd.join(&name);
    if project_path.exists() {
        return Err(SproutError::validation(
            "name",
            format!("Directory '{}' already exists", name),
        ));
    }

    ctx.output
        .step("📁", &format!("Creating package directory: {}", name));
    create_project(&project_path, &name)?;

    ctx.output
        .success(&format!("Created new package: {}", name));
    ctx.output.info("");
    ctx.output.info("Next steps:");
    ctx.output.info(&format!("  cd {}", name));
    ctx.output.info("  edit sprout.toml");
    ctx.output.info("  sprout check");

    Ok(())
}

/// Create the package directory with a named descriptor and README stub
fn create_project(project_path: &Utf8Path, name: &str) -> SproutResult<()> {
    fs::create_dir_all(project_path)
        .map_err(|e| SproutError::io(format!("Failed to create {}", project_path), e))?;

    let mut manifest = Manifest::template();
    manifest.package.name = name.to_string();

    let manifest_path = project_path.join(MANIFEST_FILE_NAME);
    fs::write(&manifest_path, serialize_manifest(&manifest)?)
        .map_err(|e| SproutError::io(format!("Failed to create {}", manifest_path), e))?;

    let readme_path = project_path.join("README.md");
    let readme = format!(
        "# {}\n\n\
        Describe the package here; this text becomes the long description in\n\
        the rendered metadata.\n",
        name
    );
    fs::write(&readme_path, readme)
        .map_err(|e| SproutError::io(format!("Failed to create {}", readme_path), e))?;

    Ok(())
}
