//! `sprout check` command implementation.
//!
//! Locates the descriptor, validates every declared field, and confirms the
//! declared README exists.

use super::CommandContext;
use camino::Utf8Path;
use sprout_config::manifest::{load_from_file, locate_manifest};
use sprout_config::readme::resolve_readme_path;
use sprout_core::error::{SproutError, SproutResult};

/// Execute the `sprout check` command
pub async fn execute(ctx: &CommandContext) -> SproutResult<()> {
    let manifest_path = locate_manifest(&ctx.cwd)?;
    ctx.output.step("🔍", &format!("Checking {}", manifest_path));

    // Parsing validates names, versions, requirements, and entry points
    let manifest = load_from_file(&manifest_path).await?;

    match &manifest.package.readme {
        Some(declared) => {
            let manifest_dir = manifest_path.parent().unwrap_or(Utf8Path::new("."));
            let readme_path = resolve_readme_path(manifest_dir, declared)?;
            if !readme_path.exists() {
                return Err(SproutError::validation(
                    "package.readme",
                    format!("declared readme '{}' does not exist", declared),
                ));
            }
        },
        None => {
            ctx.output
                .warn("no readme declared; the rendered metadata will carry no long description");
        },
    }

    ctx.output.success(&format!(
        "{} {} is a valid descriptor",
        manifest.package.name, manifest.package.version
    ));
    ctx.output.info(&format!(
        "  {} dependencies declared",
        manifest.package.dependencies.len()
    ));

    let commands: usize = manifest.entry_points.values().map(|entries| entries.len()).sum();
    if commands > 0 {
        ctx.output
            .info(&format!("  {} command-line entry points declared", commands));
    }

    Ok(())
}
