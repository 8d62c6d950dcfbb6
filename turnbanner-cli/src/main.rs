//! TurnBanner CLI - Command-line interface
//!
//! Previews head-unit maneuver banners for route progress snapshots and
//! manages the TurnBanner configuration file.

mod commands;
mod error;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use turnbanner::config::LoggingSettings;
use turnbanner::logging::{init_logging, LoggingError, LoggingGuard};

use commands::common::{load_config, DisplayArgs};
use commands::config::ConfigCommands;
use error::CliError;

#[derive(Debug, Parser)]
#[command(name = "turnbanner")]
#[command(version, about = "Preview head-unit maneuver banners", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ~/.turnbanner/config.ini)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Project a route progress snapshot into maneuver banners
    Project(DisplayArgs),

    /// Show trip and maneuver estimates for a route progress snapshot
    Estimates(DisplayArgs),

    /// View or modify configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn verbosity_level(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Install logging. With `stderr_fallback`, an unusable log file degrades
/// to stderr-only logging instead of failing.
fn start_logging(
    settings: &LoggingSettings,
    level: Option<&str>,
    stderr_fallback: bool,
) -> Result<Option<LoggingGuard>, LoggingError> {
    match init_logging(settings, level) {
        Ok(guard) => Ok(Some(guard)),
        Err(e) if stderr_fallback => {
            let stderr_only = LoggingSettings {
                file: None,
                ..settings.clone()
            };
            // Fails only if a subscriber is already installed
            let guard = init_logging(&stderr_only, level).ok();
            tracing::warn!(error = %e, "Log file unusable, logging to stderr only");
            Ok(guard)
        }
        Err(e) => Err(e),
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config_path = cli.config.as_deref();
    let config = load_config(config_path);

    // A broken config file must not prevent `config set` from repairing it
    let logging = config
        .as_ref()
        .map(|c| c.logging.clone())
        .unwrap_or_default();
    let repairing = matches!(cli.command, Commands::Config { .. });
    let _guard = start_logging(&logging, verbosity_level(cli.verbose), repairing)?;

    match cli.command {
        Commands::Project(args) => commands::project::run(args, &config?),
        Commands::Estimates(args) => commands::estimates::run(args, &config?),
        Commands::Config { command } => commands::config::run(command, config_path),
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}
