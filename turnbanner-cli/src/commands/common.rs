//! Common types and utilities shared across CLI commands.

use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use turnbanner::config::{config_file_path, ConfigFile};
use turnbanner::format::{ApproximateDistanceFormatter, UnitSystem};
use turnbanner::projector::{ManeuverProjector, ProjectorConfig};

use crate::error::CliError;

/// Unit system selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum UnitsArg {
    /// Meters and kilometers
    Metric,
    /// Feet and miles
    Imperial,
}

impl From<UnitsArg> for UnitSystem {
    fn from(units: UnitsArg) -> Self {
        match units {
            UnitsArg::Metric => UnitSystem::Metric,
            UnitsArg::Imperial => UnitSystem::Imperial,
        }
    }
}

/// Display options shared by commands that format distances.
#[derive(Debug, Clone, Args)]
pub struct DisplayArgs {
    /// Route progress snapshot (JSON)
    pub snapshot: PathBuf,

    /// Unit system (overrides display.units)
    #[arg(long, value_enum)]
    pub units: Option<UnitsArg>,

    /// Show exact distances instead of rounded ones
    #[arg(long)]
    pub exact: bool,

    /// Print machine-readable JSON
    #[arg(long)]
    pub json: bool,
}

/// Load the configuration from `path`, or the default location.
pub fn load_config(path: Option<&Path>) -> Result<ConfigFile, CliError> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(config_file_path);
    Ok(ConfigFile::load_from(&path)?)
}

/// Resolve the distance formatter from CLI args and config.
pub fn resolve_formatter(args: &DisplayArgs, config: &ConfigFile) -> ApproximateDistanceFormatter {
    // CLI takes precedence, then config
    let units = args
        .units
        .map(UnitSystem::from)
        .unwrap_or(config.display.units);
    let approximate = !args.exact && config.display.approximate;
    ApproximateDistanceFormatter::new(units, approximate)
}

/// Build a projector from CLI args and config.
pub fn resolve_projector(args: &DisplayArgs, config: &ConfigFile) -> ManeuverProjector {
    ManeuverProjector::new(
        ProjectorConfig::from_config_file(config),
        resolve_formatter(args, config),
    )
}
