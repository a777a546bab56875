//! # Shell Command
//!
//! Runs the interactive inventory menu on stdin/stdout.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io;

use anyhow::Result;
use tracing::info;

use crate::{
    config::{Config, Overrides},
    shell::Shell,
    ui,
};

/// Arguments for the shell command
#[derive(Debug, Clone, Default)]
pub struct ShellArgs {
    pub overrides: Overrides,
}

/// Executes the shell command.
pub fn execute(args: &ShellArgs) -> Result<()> {
    let config = Config::load(&args.overrides)?;

    if !config.unknown_fields.is_empty() {
        let warnings: Vec<String> = config
            .unknown_fields
            .iter()
            .map(|field| format!("Unknown config field '{field}' ignored"))
            .collect();
        ui::print_warnings(&warnings, config.color);
    }

    info!(
        threshold = config.low_stock_threshold,
        policy = ?config.id_policy,
        "starting session"
    );

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut shell = Shell::new(stdin, stdout, &config);
    shell.run()?;

    info!(items = shell.inventory().len(), "session ended");
    Ok(())
}
