//! # Configuration
//!
//! Effective settings combining the config file (~/.config/stockroom/config)
//! with command-line overrides.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod global;

use std::path::PathBuf;

use anyhow::Result;

pub use self::global::{set_home_override, GlobalConfig, LoadedConfig};
use crate::inventory::IdPolicy;

/// Command-line values that take precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Alternate config file path
    pub config_path: Option<PathBuf>,
    pub low_stock_threshold: Option<u32>,
    pub allow_duplicate_ids: bool,
    pub no_color: bool,
}

/// Effective configuration: CLI flags > config file > defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub low_stock_threshold: u32,
    pub id_policy: IdPolicy,
    pub color: bool,

    /// Unknown keys found in the config file
    pub unknown_fields: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self::merge(LoadedConfig::default(), &Overrides::default())
    }
}

impl Config {
    /// Loads the config file (if any) and applies overrides
    pub fn load(overrides: &Overrides) -> Result<Self> {
        let loaded = match overrides.config_path {
            Some(ref path) => GlobalConfig::load_from(path)?,
            None => GlobalConfig::load()?,
        };
        Ok(Self::merge(loaded, overrides))
    }

    /// Applies overrides on top of file values
    pub fn merge(loaded: LoadedConfig, overrides: &Overrides) -> Self {
        let LoadedConfig {
            config: file,
            unknown_fields,
        } = loaded;

        let id_policy = if overrides.allow_duplicate_ids || file.allow_duplicate_ids {
            IdPolicy::AllowDuplicates
        } else {
            IdPolicy::Unique
        };

        Self {
            low_stock_threshold: overrides
                .low_stock_threshold
                .unwrap_or(file.low_stock_threshold),
            id_policy,
            color: file.color && !overrides.no_color,
            unknown_fields,
        }
    }
}
