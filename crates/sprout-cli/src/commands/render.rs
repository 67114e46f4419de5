//! `sprout render` command implementation.
//!
//! Resolves the descriptor into the final metadata record and emits it as
//! JSON, on stdout or into a file, for the packaging backend to consume.

use super::CommandContext;
use sprout_config::manifest::locate_manifest;
use sprout_config::render::{resolve_metadata, serialize_metadata};
use sprout_core::error::{SproutError, SproutResult};
use std::path::PathBuf;

/// Execute the `sprout render` command
pub async fn execute(output_path: Option<PathBuf>, ctx: &CommandContext) -> SproutResult<()> {
    let manifest_path = locate_manifest(&ctx.cwd)?;

    let metadata = resolve_metadata(&manifest_path).await?;
    let json = serialize_metadata(&metadata)?;

    match output_path {
        Some(path) => {
            std::fs::write(&path, &json).map_err(|e| {
                SproutError::io(format!("Failed to write {}", path.display()), e)
            })?;
            ctx.output.success(&format!(
                "Rendered metadata for {} {} to {}",
                metadata.name,
                metadata.version,
                path.display()
            ));
        },
        None => {
            // Bare JSON on stdout so the backend can consume it directly
            println!("{}", json);
        },
    }

    Ok(())
}
