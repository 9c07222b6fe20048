use std::path::{Path, PathBuf};

pub use hydeclock_proto::config::*;

use log::{info, warn};
use masterror::Error;
use shellexpand::full;

mod manager;
mod watch;

pub use manager::{
    ConfigApplied, ConfigDegradation, ConfigImpact, ConfigManager, ConfigManagerError,
    ConfigUpdateError,
};
pub use watch::{ConfigEvent, subscription};

/// Failures while reading a configuration file from disk.
#[derive(Debug, Error)]
pub enum ConfigReadError {
    #[error("failed to read config at {path:?}: {source}")]
    Read {
        path:   PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {path:?}: {source}")]
    Parse {
        path:   PathBuf,
        source: toml::de::Error,
    },
}

/// Failures that prevent the widget from starting at all.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to expand config path {path}: {reason}")]
    Expand { path: String, reason: String },
    #[error("config file does not exist: {0:?}")]
    Missing(PathBuf),
    #[error("failed to create config directory {path:?}: {source}")]
    CreateDir {
        path:   PathBuf,
        source: std::io::Error,
    },
}

/// Resolves the config path and loads it.
///
/// An explicit `path` must exist. Without one the default location is used
/// and its parent directory created. A file that is missing, unparseable or
/// invalid falls back to [`Config::default`].
///
/// # Errors
///
/// Returns [`ConfigLoadError`] when the path cannot be expanded, an explicit
/// path does not exist, or the default directory cannot be created.
pub fn get_config(path: Option<PathBuf>) -> Result<(Config, PathBuf), ConfigLoadError> {
    match path {
        Some(path) => {
            info!("Config path provided {path:?}");
            let expanded = expand_path(&path)?;

            if !expanded.exists() {
                return Err(ConfigLoadError::Missing(expanded));
            }

            Ok((load_or_default(&expanded), expanded))
        }
        None => {
            let expanded = expand_path(Path::new(DEFAULT_CONFIG_FILE_PATH))?;

            if let Some(parent) = expanded.parent()
                && !parent.exists()
            {
                std::fs::create_dir_all(parent).map_err(|source| ConfigLoadError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }

            Ok((load_or_default(&expanded), expanded))
        }
    }
}

fn expand_path(path: &Path) -> Result<PathBuf, ConfigLoadError> {
    let str_path = path.to_string_lossy();
    let expanded = full(&str_path).map_err(|err| ConfigLoadError::Expand {
        path:   str_path.to_string(),
        reason: err.to_string(),
    })?;

    Ok(PathBuf::from(expanded.as_ref()))
}

fn load_or_default(path: &Path) -> Config {
    if !path.exists() {
        info!("No config file at {path:?}, using defaults");
        return Config::default();
    }

    match read_config(path) {
        Ok(config) => match config.validate() {
            Ok(()) => config,
            Err(err) => {
                warn!("Invalid config, using defaults: {err}");
                Config::default()
            }
        },
        Err(err) => {
            warn!("{err}");
            Config::default()
        }
    }
}

/// Reads and decodes a TOML config file without validating it.
pub fn read_config(path: &Path) -> Result<Config, ConfigReadError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigReadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Decoding config file {path:?}");

    let config = toml::from_str(&content).map_err(|source| ConfigReadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Config file loaded successfully");
    Ok(config)
}
