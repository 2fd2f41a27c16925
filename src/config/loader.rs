//! Configuration loading from file system

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use super::defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use super::types::Config;
use crate::error::{HotkeyError, Result};

/// Default config location: `<config dir>/hotkey-registry/config.json`
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME)
}

/// Load configuration from the default location.
///
/// Returns Config::default() if the file is missing or invalid.
pub fn load_config() -> Config {
    load_config_from(&config_path())
}

/// Load configuration from `path` (a leading `~` is expanded).
///
/// Returns Config::default() if the file is missing or invalid.
#[instrument(name = "load_config", skip_all, fields(path = %path.display()))]
pub fn load_config_from(path: &Path) -> Config {
    let path = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).as_ref());

    if !path.exists() {
        info!("Config file not found, using defaults");
        return Config::default();
    }

    match read_config(&path) {
        Ok(config) => {
            info!("Successfully loaded config");
            config
        }
        Err(e) => {
            warn!(error = %e, "Failed to load config, using defaults");
            Config::default()
        }
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .map_err(|e| HotkeyError::Config(format!("cannot read {}: {}", path.display(), e)))?;
    serde_json::from_str(&content)
        .map_err(|e| HotkeyError::Config(format!("invalid JSON in {}: {}", path.display(), e)))
}
