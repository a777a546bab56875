//! # Test Harness
//!
//! Shared helpers for driving scripted shell sessions and the `stockroom`
//! binary without touching the user's configuration.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)]

use std::{
    fs,
    io::Cursor,
    path::{Path, PathBuf},
};

use assert_cmd::Command;
use stockroom::{Category, Config, IdPolicy, Inventory, Item, Shell};
use tempfile::TempDir;

// =============================================================================
// Configs
// =============================================================================

/// Default settings with color disabled so output can be compared as text.
pub fn plain_config() -> Config {
    Config {
        color: false,
        ..Config::default()
    }
}

/// Plain settings that store duplicate IDs.
pub fn duplicates_config() -> Config {
    Config {
        id_policy: IdPolicy::AllowDuplicates,
        ..plain_config()
    }
}

// =============================================================================
// Inventories
// =============================================================================

/// A small inventory in a known order:
///
/// | ID | Name       | Qty | Price | Category      |
/// |----|------------|-----|-------|---------------|
/// | C1 | Shirt      | 10  | 20    | clothing      |
/// | E1 | Phone      | 4   | 300   | electronics   |
/// | T1 | Board Game | 5   | 35    | entertainment |
/// | C2 | Socks      | 6   | 3     | clothing      |
pub fn seeded_inventory() -> Inventory {
    let mut inventory = Inventory::new(IdPolicy::Unique);
    for item in [
        Item::new("c1", "Shirt", 10, 20.0, Category::Clothing),
        Item::new("e1", "Phone", 4, 300.0, Category::Electronics),
        Item::new("t1", "Board Game", 5, 35.0, Category::Entertainment),
        Item::new("c2", "Socks", 6, 3.0, Category::Clothing),
    ] {
        inventory.add(item).expect("seed IDs are unique");
    }
    inventory
}

/// IDs of the inventory in store order.
pub fn ids(inventory: &Inventory) -> Vec<String> {
    inventory.all().iter().map(|i| i.id().to_string()).collect()
}

// =============================================================================
// Scripted Sessions
// =============================================================================

/// Builds the stdin for a session, one answer per line.
#[derive(Debug, Default)]
pub struct Script(Vec<String>);

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends raw answer lines.
    pub fn lines(mut self, lines: &[&str]) -> Self {
        self.0.extend(lines.iter().map(|l| (*l).to_string()));
        self
    }

    /// Menu 1 with every answer valid.
    pub fn add(self, category: &str, id: &str, name: &str, quantity: &str, price: &str) -> Self {
        self.lines(&["1", category, id, name, quantity, price])
    }

    /// Menu 9.
    pub fn exit(self) -> Self {
        self.lines(&["9"])
    }

    pub fn build(&self) -> String {
        let mut out = self.0.join("\n");
        out.push('\n');
        out
    }
}

/// Runs a session over an empty inventory; returns the final store and stdout.
pub fn run_session(config: &Config, script: &Script) -> (Inventory, String) {
    run_session_with(config, Inventory::new(config.id_policy), script)
}

/// Runs a session over the given inventory; returns the final store and stdout.
pub fn run_session_with(
    config: &Config,
    inventory: Inventory,
    script: &Script,
) -> (Inventory, String) {
    run_session_bytes(config, inventory, script.build().into_bytes())
}

/// Runs a session over raw stdin bytes; returns the final store and stdout.
pub fn run_session_bytes(
    config: &Config,
    inventory: Inventory,
    input: Vec<u8>,
) -> (Inventory, String) {
    let input = Cursor::new(input);
    let mut shell = Shell::with_inventory(input, Vec::new(), config, inventory);
    shell.run().expect("session should succeed");
    let (inventory, output) = shell.into_parts();
    (
        inventory,
        String::from_utf8(output).expect("output should be UTF-8"),
    )
}

// =============================================================================
// Binary Environment
// =============================================================================

/// A temporary home directory for running the binary.
pub struct TestEnv {
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            home_dir: TempDir::new().expect("Failed to create temp home dir"),
        }
    }

    /// Path where the config file lives for this home.
    pub fn config_path(&self) -> PathBuf {
        self.home_dir
            .path()
            .join(".config")
            .join("stockroom")
            .join("config")
    }

    /// Writes the config file.
    pub fn write_config(&self, content: &str) {
        let path = self.config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create config directory");
        }
        fs::write(path, content).expect("Failed to write config");
    }

    /// Writes an arbitrary file inside the temp home.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.home_dir.path().join(name);
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn home(&self) -> &Path {
        self.home_dir.path()
    }

    /// A `stockroom` command isolated to this home, without colors or log filters.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("stockroom").unwrap();
        cmd.env("HOME", self.home_dir.path());
        cmd.env_remove("RUST_LOG");
        cmd
    }
}
