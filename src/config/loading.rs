//! Configuration loading functionality.
//!
//! Locates `daylight.toml`, reads it and validates the result. A missing file
//! in the default location simply means "no configuration"; a missing file in
//! an explicitly requested directory is an error.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::Config;
use super::validation::validate_config;
use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};

/// Default location of the config file, `$XDG_CONFIG_HOME/daylight/daylight.toml`.
pub fn default_config_path() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load the configuration from `config_dir`, or from the default location.
pub fn load(config_dir: Option<&Path>) -> Result<Config> {
    match config_dir {
        Some(dir) => {
            let path = dir.join(CONFIG_FILE_NAME);
            if !path.exists() {
                anyhow::bail!("Configuration file not found at {}", path.display());
            }
            load_from_path(&path)
        }
        None => {
            let path = default_config_path()?;
            if !path.exists() {
                log_debug!("No configuration file at {}", path.display());
                return Ok(Config::default());
            }
            load_from_path(&path)
        }
    }
}

/// Load and validate a configuration file.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config from {}", path.display()))?;

    validate_config(&config)
        .with_context(|| format!("Invalid configuration in {}", path.display()))?;

    log_debug!("Loaded configuration from {}", path.display());
    Ok(config)
}
