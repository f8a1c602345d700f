mod types;

use std::fs;
use std::path::{Path, PathBuf};

pub use types::{Config, DEFAULT_MARKER, PluginConfig};

use crate::error::Result;

const CONFIG_DIR: &str = "code-tooltip";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the user config, falling back to defaults when no file exists.
pub fn load_config() -> Result<Config> {
    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => {
            log::debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    log::debug!("Loaded config from {}", path.display());
    parse_config(&contents)
}

pub fn parse_config(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
