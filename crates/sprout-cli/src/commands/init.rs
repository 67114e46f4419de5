//! `sprout init` command implementation.
//!
//! Writes the descriptor template and a stub README into the current
//! directory, skipping files that already exist.

use super::CommandContext;
use sprout_config::manifest::{MANIFEST_FILE_NAME, TEMPLATE};
use sprout_core::error::{SproutError, SproutResult};
use std::fs;

const README_STUB: &str = "# my-package\n\n\
Describe the package here; this text becomes the long description in the\n\
rendered metadata.\n";

/// Execute the `sprout init` command
pub async fn execute(ctx: &CommandContext) -> SproutResult<()> {
    let manifest_path = ctx.cwd.join(MANIFEST_FILE_NAME);

    if manifest_path.exists() {
        ctx.output
            .info("sprout.toml already exists, skipping initialization");
        return Ok(());
    }

    ctx.output
        .step("🌱", "Initializing package descriptor in current directory");

    fs::write(&manifest_path, TEMPLATE)
        .map_err(|e| SproutError::io(format!("Failed to create {}", manifest_path), e))?;
    ctx.output.success("Created sprout.toml");

    // The template declares README.md as the long-description source
    let readme_path = ctx.cwd.join("README.md");
    if !readme_path.exists() {
        fs::write(&readme_path, README_STUB)
            .map_err(|e| SproutError::io(format!("Failed to create {}", readme_path), e))?;
        ctx.output.success("Created README.md");
    }

    ctx.output.info("");
    ctx.output.info("Next steps:");
    ctx.output.info("  edit sprout.toml");
    ctx.output.info("  sprout check");
    ctx.output.info("  sprout render");

    Ok(())
}
