//! # Commands
//!
//! CLI command implementations for stockroom.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod completions;
pub mod setup;
pub mod shell;

pub use self::{
    completions::execute as completions,
    setup::execute as setup,
    shell::{execute as shell, ShellArgs},
};
