//! Command implementations and dispatch logic.
//!
//! This module contains all command handlers and the central dispatch
//! system. Each command is implemented as an async function that takes a
//! CommandContext.

use camino::Utf8PathBuf;
use sprout_core::error::{SproutError, SproutResult};
use tracing::info;

pub mod check;
pub mod init;
pub mod new;
pub mod render;


use crate::{output::OutputHandler, Commands};

/// Shared context for all commands
pub struct CommandContext {
    pub cwd: Utf8PathBuf,
    pub output: OutputHandler,
}

impl CommandContext {
    /// Create a new command context
    pub async fn new() -> SproutResult<Self> {
        let cwd = std::env::current_dir().map_err(|e| {
            SproutError::io("Failed to get current directory".to_string(), e)
        })?;

        let cwd = Utf8PathBuf::from_path_buf(cwd).map_err(|raw| {
            SproutError::validation(
                "cwd",
                format!("current directory {} is not valid UTF-8", raw.display()),
            )
        })?;

        Ok(Self {
            cwd,
            output: OutputHandler::new(),
        })
    }
}

/// Dispatch a command to its handler
pub async fn dispatch_command(command: Commands, ctx: &CommandContext) -> SproutResult<()> {
    match command {
        Commands::Init => {
            info!("Initializing descriptor in current directory");
            init::execute(ctx).await
        },
        Commands::New { name } => {
            info!("Creating new package: {}", name);
            new::execute(name, ctx).await
        },
        Commands::Check => {
            info!("Checking descriptor");
            check::execute(ctx).await
        },
        Commands::Render { output } => {
            info!("Rendering metadata (output: {:?})", output);
            render::execute(output, ctx).await
        },
        Commands::Version => {
            info!("Showing version information");
            show_version(ctx).await
        },
    }
}

async fn show_version(ctx: &CommandContext) -> SproutResult<()> {
    let version = env!("CARGO_PKG_VERSION");
    let build_date = env!("BUILD_DATE");
    let target = format!("{}-{}", std::env::consts::ARCH, std::env::consts::OS);

    ctx.output.info(&format!("🌱 Sprout v{}", version));
    ctx.output.info(&format!("Built: {}", build_date));
    ctx.output.info(&format!("Target: {}", target));
    ctx.output.info(&format!("Rust: {}", env!("RUSTC_VERSION")));

    Ok(())
}
