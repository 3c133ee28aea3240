// SPDX-License-Identifier: MPL-2.0
//! Site operator configuration, loaded from a `settings.toml` file.
//!
//! Configuration is optional everywhere: a missing or invalid file degrades
//! to defaults rather than erroring, since nothing here is required for the
//! navigation core to function.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "SunpowerNav";

/// Default retry budget for the deferred-scroll anchor check.
pub const DEFAULT_SCROLL_RETRY_LIMIT: u8 = 5;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Site-default language override, consulted by the locale chain after
    /// the persisted preference. Validated through the resolver like every
    /// other token.
    pub language: Option<String>,
    /// Overrides the deferred-scroll anchor retry budget.
    #[serde(default)]
    pub scroll_retry_limit: Option<u8>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            scroll_retry_limit: Some(DEFAULT_SCROLL_RETRY_LIMIT),
        }
    }
}

impl Config {
    /// The effective retry budget for a
    /// [`ScrollCoordinator`](crate::navigation::scroll::ScrollCoordinator).
    #[must_use]
    pub fn scroll_retry_limit(&self) -> u8 {
        self.scroll_retry_limit.unwrap_or(DEFAULT_SCROLL_RETRY_LIMIT)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
