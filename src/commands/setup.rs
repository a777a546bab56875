//! # Setup Command
//!
//! Writes a commented default configuration file.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::GlobalConfig;

/// Executes the setup command.
///
/// Creates `~/.config/stockroom/config` unless it already exists.
pub fn execute() -> Result<()> {
    let path = GlobalConfig::path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;

    if GlobalConfig::create_default_if_missing()? {
        eprintln!("{} Created config: {}", "✓".green(), path.display());
    } else {
        eprintln!("{} Config already exists: {}", "✓".green(), path.display());
    }

    Ok(())
}
