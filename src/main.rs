//! # stockroom CLI
//!
//! Command-line interface for the stockroom inventory tracker.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use owo_colors::OwoColorize;

use stockroom::{
    commands::{self, ShellArgs},
    config::Overrides,
    logging,
};

const GLOBAL_HELP: &str = "\
Configuration File:
  ~/.config/stockroom/config     low_stock_threshold, allow_duplicate_ids, color

Menu Actions:
  1  Add Item                    6  Search Item
  2  Update Item                 7  Display Low Stock Items
  3  Remove Item                 8  Sort Items
  4  Display Items by Category   9  Exit
  5  Display All Items

Getting Started:
  stockroom                      Start an interactive session
  stockroom --threshold 10       Treat quantities below 10 as low stock
  stockroom setup                Write a default config file

Items are kept in memory only; exiting discards them.";

#[derive(Parser)]
#[command(name = "stockroom")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Interactive console inventory tracker")]
#[command(
    long_about = "stockroom is an interactive console inventory tracker. Items have an ID, \
a name, a quantity, a price, and a category (clothing, electronics, or entertainment).\n\n\
Run without a subcommand to open the numbered menu. Items can be added, updated, \
removed, searched, filtered by category or low stock, and sorted by price."
)]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    #[command(flatten)]
    session: SessionOpts,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct SessionOpts {
    /// Quantity below which items count as low stock
    #[arg(long, global = true, value_name = "N")]
    threshold: Option<u32>,

    /// Allow adding items whose ID is already in use
    #[arg(long, global = true)]
    allow_duplicate_ids: bool,

    /// Disable colored status messages
    #[arg(long, global = true)]
    no_color: bool,

    /// Read configuration from this file instead of ~/.config/stockroom/config
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl From<SessionOpts> for Overrides {
    fn from(opts: SessionOpts) -> Self {
        Self {
            config_path: opts.config,
            low_stock_threshold: opts.threshold,
            allow_duplicate_ids: opts.allow_duplicate_ids,
            no_color: opts.no_color,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (default)
    #[command(
        long_about = "Start an interactive session.\n\n\
Shows the numbered menu and reads choices from standard input until Exit (9) \
is chosen or input ends. Invalid values are reported and asked for again.",
        after_help = "Examples:\n  \
stockroom shell\n  \
stockroom shell --threshold 3\n  \
printf '5\\n9\\n' | stockroom shell      Scripted session"
    )]
    Shell,

    /// Write a default config file
    #[command(
        long_about = "Write a default config file to ~/.config/stockroom/config.\n\n\
The file contains every option with comments. An existing file is left untouched."
    )]
    Setup,

    /// Generate shell completions
    #[command(after_help = "Examples:\n  \
stockroom completions zsh > ~/.zfunc/_stockroom\n  \
stockroom completions bash > ~/.local/share/bash-completion/completions/stockroom")]
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        None | Some(Commands::Shell) => commands::shell(&ShellArgs {
            overrides: cli.session.into(),
        }),

        Some(Commands::Setup) => commands::setup(),

        Some(Commands::Completions { shell }) => commands::completions(shell, &mut Cli::command()),
    }
}

