//! # sprout-cli
//!
//! Command-line interface for Sprout, the declarative package-metadata
//! toolkit.
//!
//! This is the main entry point for the `sprout` binary. It handles argument
//! parsing, sets up logging and error handling, and dispatches to the
//! appropriate command handlers.

use clap::{Parser, Subcommand};
use sprout_core::error::SproutResult;
use std::path::PathBuf;
use tracing::{error, info};

mod commands;
mod output;

use commands::CommandContext;

/// Declare package distribution metadata and hand it to a packaging backend
#[derive(Parser)]
#[command(name = "sprout", version, about = "Declarative package metadata toolkit")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a descriptor in the current directory
    Init,
    /// Create a new package directory
    New {
        name: String,
    },
    /// Validate the descriptor
    Check,
    /// Render the metadata record for the packaging backend
    Render {
        /// Write the JSON record to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);
    setup_panic_handler();

    info!("Starting Sprout CLI v{}", env!("CARGO_PKG_VERSION"));

    if let Err(err) = run_cli(cli) {
        let formatter = output::ErrorFormatter::new();
        eprintln!("{}", formatter.format_error(&err));
        std::process::exit(1);
    }
}

fn run_cli(cli: Cli) -> SproutResult<()> {
    // Create Tokio runtime for async operations
    let rt = tokio::runtime::Runtime::new().map_err(|e| {
        sprout_core::error::SproutError::io("Failed to create async runtime".to_string(), e)
    })?;

    rt.block_on(async {
        let ctx = CommandContext::new().await?;
        commands::dispatch_command(cli.command, &ctx).await
    })
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "sprout_cli={},sprout_config={},sprout_core={}",
            level, level, level
        ))
        .with_target(false)
        .init();
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        error!("Sprout encountered an unexpected error: {}", panic_info);
        eprintln!("🌱 Sprout crashed! This is a bug.");
        eprintln!("Please report this at: https://github.com/sprout-pkg/sprout/issues");
        eprintln!("Error: {}", panic_info);
    }));
}
