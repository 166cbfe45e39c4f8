//! QR code presets CLI
//!
//! Resolves the preset catalog once from flags and environment, then
//! prints the requested view of it.
//!
//! # Environment Variables
//!
//! - `VITE_QR_CODE_PRESETS`: JSON array of presets replacing the built-ins
//! - `VITE_DEFAULT_PRESET`: name of the default preset
//! - `RUST_LOG`: log filter (default: `warn`, or `debug` with `--verbose`)
//!
//! Logs go to stderr so stdout stays machine-readable.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use qr_presets::PresetCatalog;

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    qr_presets::logging::init(level).map_err(|e| CliError::Logging(e.to_string()))?;
    tracing::debug!("Verbose mode enabled");

    let catalog = PresetCatalog::resolve(&cli.preset_env());

    match cli.command {
        Commands::List { json } => commands::run_list(&catalog, json),
        Commands::Default { json } => commands::run_default(&catalog, json),
        Commands::Show { name } => commands::run_show(&catalog, &name),
    }
}
