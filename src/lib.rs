//! # stockroom
//!
//! A minimal, interactive console inventory tracker.
//!
//! Items live in memory for the length of a session and are managed through
//! a numbered menu.
//!
//! ## Features
//!
//! - **Item Store**: ordered items with case-insensitive ID lookup
//! - **Queries**: filter by category or low stock, search by ID
//! - **Sorting**: persistent reordering by price
//! - **Validation**: typed parsing of console input with re-prompting
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod commands;
pub mod config;
pub mod constants;
pub mod inventory;
pub mod item;
pub mod logging;
pub mod shell;
pub mod ui;

pub use config::{set_home_override, Config};
pub use inventory::{FieldUpdate, IdPolicy, Inventory, InventoryError, SortOrder, UpdateReport};
pub use item::{Category, Item, ValidationError};
pub use shell::{Shell, MENU_TITLE};
