//! Typed configuration keys.
//!
//! Every setting is addressed as `section.key` (e.g. `display.units`) by
//! the CLI `config get/set/list` commands.

use std::path::PathBuf;
use std::str::FromStr;

use crate::format::UnitSystem;

use super::error::ConfigError;
use super::file::ConfigFile;

/// Known configuration settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    DisplayUnits,
    DisplayApproximate,
    DisplayShieldHeight,
    DisplayScale,
    LoggingLevel,
    LoggingFile,
}

impl ConfigKey {
    /// All keys, grouped by section.
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::DisplayUnits,
            ConfigKey::DisplayApproximate,
            ConfigKey::DisplayShieldHeight,
            ConfigKey::DisplayScale,
            ConfigKey::LoggingLevel,
            ConfigKey::LoggingFile,
        ]
    }

    /// INI section name.
    pub fn section(&self) -> &'static str {
        match self {
            ConfigKey::DisplayUnits
            | ConfigKey::DisplayApproximate
            | ConfigKey::DisplayShieldHeight
            | ConfigKey::DisplayScale => "display",
            ConfigKey::LoggingLevel | ConfigKey::LoggingFile => "logging",
        }
    }

    /// Key name within the section.
    pub fn key_name(&self) -> &'static str {
        match self {
            ConfigKey::DisplayUnits => "units",
            ConfigKey::DisplayApproximate => "approximate",
            ConfigKey::DisplayShieldHeight => "shield_height",
            ConfigKey::DisplayScale => "scale",
            ConfigKey::LoggingLevel => "level",
            ConfigKey::LoggingFile => "file",
        }
    }

    /// Full `section.key` name.
    pub fn name(&self) -> String {
        format!("{}.{}", self.section(), self.key_name())
    }

    /// Current value as a string; empty when unset.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::DisplayUnits => config.display.units.to_string(),
            ConfigKey::DisplayApproximate => config.display.approximate.to_string(),
            ConfigKey::DisplayShieldHeight => config.display.shield_height.to_string(),
            ConfigKey::DisplayScale => config.display.scale.to_string(),
            ConfigKey::LoggingLevel => config.logging.level.clone(),
            ConfigKey::LoggingFile => config
                .logging
                .file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
        }
    }

    /// Parse and store a value.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        let invalid = |reason: &str| ConfigError::InvalidValue {
            key: self.name(),
            value: value.to_string(),
            reason: reason.to_string(),
        };

        match self {
            ConfigKey::DisplayUnits => {
                config.display.units = value.parse::<UnitSystem>().map_err(|e| invalid(&e))?;
            }
            ConfigKey::DisplayApproximate => {
                config.display.approximate = parse_bool(value).ok_or_else(|| invalid("expected true or false"))?;
            }
            ConfigKey::DisplayShieldHeight => {
                let height: f64 = value.parse().map_err(|_| invalid("expected a number of points"))?;
                if !(height.is_finite() && height > 0.0) {
                    return Err(invalid("must be positive"));
                }
                config.display.shield_height = height;
            }
            ConfigKey::DisplayScale => {
                config.display.scale = match value.parse::<u8>() {
                    Ok(scale @ 1..=3) => scale,
                    _ => return Err(invalid("expected 1, 2 or 3")),
                };
            }
            ConfigKey::LoggingLevel => {
                if value.is_empty() {
                    return Err(invalid("must not be empty"));
                }
                config.logging.level = value.to_string();
            }
            ConfigKey::LoggingFile => {
                config.logging.file = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
        }
        Ok(())
    }
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigKey::all()
            .iter()
            .copied()
            .find(|key| key.name() == s.trim())
            .ok_or_else(|| ConfigError::UnknownKey(s.to_string()))
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_key() {
        assert_eq!("display.units".parse::<ConfigKey>().unwrap(), ConfigKey::DisplayUnits);
        assert_eq!("logging.file".parse::<ConfigKey>().unwrap(), ConfigKey::LoggingFile);
    }

    #[test]
    fn test_parse_unknown_key() {
        assert!(matches!(
            "display.colour".parse::<ConfigKey>(),
            Err(ConfigError::UnknownKey(_))
        ));
    }

    #[test]
    fn test_get_set_roundtrip_for_every_key() {
        let mut config = ConfigFile::default();
        for key in ConfigKey::all() {
            let value = key.get(&config);
            if !value.is_empty() {
                key.set(&mut config, &value).unwrap();
            }
        }
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_set_values() {
        let mut config = ConfigFile::default();
        ConfigKey::DisplayApproximate.set(&mut config, "no").unwrap();
        ConfigKey::DisplayShieldHeight.set(&mut config, "20.5").unwrap();
        ConfigKey::LoggingFile.set(&mut config, "/tmp/tb.log").unwrap();

        assert!(!config.display.approximate);
        assert_eq!(config.display.shield_height, 20.5);
        assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/tb.log")));

        ConfigKey::LoggingFile.set(&mut config, "").unwrap();
        assert_eq!(config.logging.file, None);
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = ConfigFile::default();
        assert!(ConfigKey::DisplayScale.set(&mut config, "4").is_err());
        assert!(ConfigKey::DisplayShieldHeight.set(&mut config, "-1").is_err());
        assert!(ConfigKey::DisplayUnits.set(&mut config, "cubits").is_err());
        assert!(ConfigKey::DisplayApproximate.set(&mut config, "maybe").is_err());
        assert!(ConfigKey::LoggingLevel.set(&mut config, " ").is_err());
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_sections_are_contiguous() {
        let sections: Vec<&str> = ConfigKey::all().iter().map(|k| k.section()).collect();
        assert_eq!(sections, vec!["display", "display", "display", "display", "logging", "logging"]);
    }
}
