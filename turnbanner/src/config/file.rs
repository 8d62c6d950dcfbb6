//! INI configuration file.
//!
//! ```ini
//! [display]
//! units = metric
//! approximate = true
//! shield_height = 16
//! scale = 2
//!
//! [logging]
//! level = info
//! file = /var/log/turnbanner.log
//! ```

use std::path::{Path, PathBuf};

use ini::Ini;

use crate::format::UnitSystem;
use crate::projector::{DEFAULT_DISPLAY_SCALE, DEFAULT_SHIELD_HEIGHT};

use super::error::ConfigError;
use super::keys::ConfigKey;

/// Directory name under the user's home directory.
const CONFIG_DIR_NAME: &str = ".turnbanner";

/// Configuration file name.
const CONFIG_FILE_NAME: &str = "config.ini";

/// Default log filter.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Path to the configuration directory (`~/.turnbanner`).
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR_NAME)
}

/// Path to the configuration file (`~/.turnbanner/config.ini`).
pub fn config_file_path() -> PathBuf {
    config_dir().join(CONFIG_FILE_NAME)
}

/// `[display]` settings.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySettings {
    pub units: UnitSystem,
    pub approximate: bool,
    pub shield_height: f64,
    pub scale: u8,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            units: UnitSystem::Metric,
            approximate: true,
            shield_height: DEFAULT_SHIELD_HEIGHT,
            scale: DEFAULT_DISPLAY_SCALE,
        }
    }
}

/// `[logging]` settings.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// `EnvFilter` directive, e.g. `info` or `turnbanner=debug`.
    pub level: String,
    /// Optional log file; logs go to stderr only when unset.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            file: None,
        }
    }
}

/// Parsed configuration file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigFile {
    pub display: DisplaySettings,
    pub logging: LoggingSettings,
}

impl ConfigFile {
    /// Load from the default path. A missing file yields defaults.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_file_path())
    }

    /// Load from the given path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path).map_err(|e| match e {
            ini::Error::Io(source) => ConfigError::Io {
                path: path.to_path_buf(),
                source,
            },
            ini::Error::Parse(parse) => ConfigError::Parse {
                path: path.to_path_buf(),
                message: parse.to_string(),
            },
        })?;

        let mut config = Self::default();
        for key in ConfigKey::all() {
            let value = ini
                .section(Some(key.section()))
                .and_then(|section| section.get(key.key_name()));
            if let Some(value) = value {
                key.set(&mut config, value)?;
            }
        }

        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Save to the default path, creating the directory if needed.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&config_file_path())
    }

    /// Save to the given path, creating parent directories if needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_error = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }

        let mut ini = Ini::new();
        for key in ConfigKey::all() {
            let value = key.get(self);
            if !value.is_empty() {
                ini.with_section(Some(key.section()))
                    .set(key.key_name(), value);
            }
        }
        ini.write_to_file(path).map_err(io_error)
    }
}
