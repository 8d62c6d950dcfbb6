//! Configuration file support.
//!
//! Settings live in `~/.turnbanner/config.ini`. A missing file is not an
//! error; every setting has a default.

mod error;
mod file;
mod keys;

pub use error::ConfigError;
pub use file::{
    config_dir, config_file_path, ConfigFile, DisplaySettings, LoggingSettings, DEFAULT_LOG_LEVEL,
};
pub use keys::ConfigKey;
