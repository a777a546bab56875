//! # Global Configuration
//!
//! Handles the optional user configuration stored at `~/.config/stockroom/config`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    cell::RefCell,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{DEFAULT_LOW_STOCK_THRESHOLD, GLOBAL_CONFIG_DIR, GLOBAL_CONFIG_FILENAME};

/// Valid field names in the global config file.
/// Used for validation to detect unknown/invalid fields.
const VALID_FIELDS: &[&str] = &["low_stock_threshold", "allow_duplicate_ids", "color"];

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by integration tests to redirect config to a temp directory
    /// without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
/// This is used by tests to redirect global config without modifying env vars.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

/// Gets the current home directory override, if set.
fn get_home_override() -> Option<PathBuf> {
    HOME_OVERRIDE.with(|cell| cell.borrow().clone())
}

/// Global configuration stored at ~/.config/stockroom/config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Quantity below which an item counts as low stock
    #[serde(default = "default_threshold")]
    pub low_stock_threshold: u32,

    /// Whether adding an already-used ID is allowed
    #[serde(default)]
    pub allow_duplicate_ids: bool,

    /// Whether status messages are colored
    #[serde(default = "default_true")]
    pub color: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            allow_duplicate_ids: false,
            color: true,
        }
    }
}

#[allow(clippy::missing_const_for_fn)] // serde default functions can't be const
fn default_true() -> bool {
    true
}

#[allow(clippy::missing_const_for_fn)]
fn default_threshold() -> u32 {
    DEFAULT_LOW_STOCK_THRESHOLD
}

/// A loaded config plus the unknown keys found in the file
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: GlobalConfig,
    pub unknown_fields: Vec<String>,
}

impl GlobalConfig {
    /// Returns the path to the global config file (~/.config/stockroom/config)
    ///
    /// Checks for a thread-local home override first (used by tests),
    /// then falls back to $HOME/.config (XDG Base Directory).
    pub fn path() -> Option<PathBuf> {
        if let Some(home) = get_home_override() {
            return Some(
                home.join(".config")
                    .join(GLOBAL_CONFIG_DIR)
                    .join(GLOBAL_CONFIG_FILENAME),
            );
        }
        // Use $HOME/.config for XDG compliance (not dirs::config_dir which varies by OS)
        dirs::home_dir().map(|home| {
            home.join(".config")
                .join(GLOBAL_CONFIG_DIR)
                .join(GLOBAL_CONFIG_FILENAME)
        })
    }

    /// Loads the config from the default location.
    /// A missing file (or unknown home) yields the defaults.
    pub fn load() -> Result<LoadedConfig> {
        match Self::path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                debug!("no global config found, using defaults");
                Ok(LoadedConfig::default())
            }
        }
    }

    /// Loads the config from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<LoadedConfig> {
        debug!(path = %path.display(), "loading config");

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Parses TOML config content, collecting unknown keys.
    pub fn parse(content: &str) -> Result<LoadedConfig> {
        let table: toml::Table = toml::from_str(content)?;

        let unknown_fields = table
            .keys()
            .filter(|key| !VALID_FIELDS.contains(&key.as_str()))
            .cloned()
            .collect();

        let config: Self = toml::Value::Table(table).try_into()?;

        Ok(LoadedConfig {
            config,
            unknown_fields,
        })
    }

    /// Creates the config file with default values and comments.
    /// Returns true if created, false if it already exists.
    pub fn create_default_if_missing() -> Result<bool> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine config directory");
        };

        if path.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(&path, Self::default().to_commented_toml())
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(true)
    }

    /// Renders the config with explanatory comments for every option.
    pub fn to_commented_toml(&self) -> String {
        format!(
            r"# stockroom Configuration
# Location: ~/.config/stockroom/config
# Command-line flags override these values.

# Items with a quantity strictly below this value are listed as low stock.
# Default: {DEFAULT_LOW_STOCK_THRESHOLD}
low_stock_threshold = {threshold}

# Whether an item may be added with an ID that is already in use.
# When true, lookups only reach the first match and removal deletes all matches.
# Default: false
allow_duplicate_ids = {allow_duplicate_ids}

# Whether status messages are colored.
# Default: true
color = {color}
",
            threshold = self.low_stock_threshold,
            allow_duplicate_ids = self.allow_duplicate_ids,
            color = self.color,
        )
    }
}
