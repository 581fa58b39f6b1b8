//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::HelperConfig;
use crate::config::settings::{Settings, SettingsOverrides};
use crate::error::{FtcError, Result};

/// File name of the per-user configuration, placed in the home directory.
pub const CONFIG_FILE_NAME: &str = ".ftc-helper.yaml";

/// `~/.ftc-helper.yaml`, if a home directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME))
}

/// Load and parse a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<HelperConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            FtcError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            FtcError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a [`HelperConfig`].
///
/// An empty or comment-only file yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<HelperConfig> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| FtcError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;
    if value.is_null() {
        return Ok(HelperConfig::default());
    }

    serde_yaml::from_value(value).map_err(|e| FtcError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Find and load the config file.
///
/// An explicit path must exist. The default location is optional.
pub fn discover_config(explicit: Option<&Path>) -> Result<(HelperConfig, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let config = load_config_file(path)?;
        return Ok((config, Some(path.to_path_buf())));
    }

    match default_config_path() {
        Some(path) if path.is_file() => {
            let config = load_config_file(&path)?;
            Ok((config, Some(path)))
        }
        _ => {
            tracing::debug!("No config file found, using defaults");
            Ok((HelperConfig::default(), None))
        }
    }
}

/// Load the config file and resolve it against the process environment.
pub fn load_settings(explicit: Option<&Path>, overrides: &SettingsOverrides) -> Result<Settings> {
    let (config, source) = discover_config(explicit)?;
    if let Some(path) = &source {
        tracing::info!("Using config file: {}", path.display());
    }

    Ok(Settings::resolve(
        &config,
        source,
        overrides,
        &|key: &str| std::env::var(key),
        dirs::home_dir(),
    ))
}
