//! # Constants
//!
//! Centralized constants for magic values used throughout stockroom.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Inventory Rules
// =============================================================================

/// Items with a quantity strictly below this value are considered low stock.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 5;

// =============================================================================
// UI Display
// =============================================================================

/// Column width for the item ID in tables.
pub const UI_COL_ID_WIDTH: usize = 10;

/// Column width for the item name in tables.
pub const UI_COL_NAME_WIDTH: usize = 20;

/// Column width for the quantity in tables.
pub const UI_COL_QUANTITY_WIDTH: usize = 10;

/// Column width for the price in tables.
pub const UI_COL_PRICE_WIDTH: usize = 10;

/// Column width for the category in tables.
pub const UI_COL_CATEGORY_WIDTH: usize = 20;

/// Decimal places shown for prices.
pub const UI_PRICE_PRECISION: usize = 2;

// =============================================================================
// File System
// =============================================================================

/// Global configuration directory name (inside `~/.config`).
pub const GLOBAL_CONFIG_DIR: &str = "stockroom";

/// Global configuration file name (inside `GLOBAL_CONFIG_DIR`).
pub const GLOBAL_CONFIG_FILENAME: &str = "config";

// =============================================================================
// Logging
// =============================================================================

/// Environment variable that overrides the `--verbose` log level.
pub const LOG_ENV_VAR: &str = "RUST_LOG";
