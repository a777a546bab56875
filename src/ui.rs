//! # UI Utilities
//!
//! Table formatting and status-line styling shared by the interactive shell.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::fmt::Write;

use owo_colors::OwoColorize;
use unicode_width::UnicodeWidthStr;

use crate::{
    constants::{
        UI_COL_CATEGORY_WIDTH, UI_COL_ID_WIDTH, UI_COL_NAME_WIDTH, UI_COL_PRICE_WIDTH,
        UI_COL_QUANTITY_WIDTH, UI_PRICE_PRECISION,
    },
    item::Item,
};

// =============================================================================
// Table Formatting
// =============================================================================

/// Returns the table header line (without trailing newline).
pub fn table_header() -> String {
    format_row(["ID", "Name", "Quantity", "Price", "Category"])
}

/// Returns one table line for an item (without trailing newline).
pub fn table_row(item: &Item) -> String {
    format_row([
        item.id(),
        item.name(),
        &item.quantity().to_string(),
        &format_price(item.price()),
        item.category().as_str(),
    ])
}

/// Renders a header plus one line per item, each ending in a newline.
pub fn render_table<'a, I>(items: I) -> String
where
    I: IntoIterator<Item = &'a Item>,
{
    let mut out = table_header();
    out.push('\n');
    for item in items {
        out.push_str(&table_row(item));
        out.push('\n');
    }
    out
}

/// Formats a price with two decimals.
pub fn format_price(price: f64) -> String {
    format!("{price:.UI_PRICE_PRECISION$}")
}

fn format_row(cells: [&str; 5]) -> String {
    let widths = [
        UI_COL_ID_WIDTH,
        UI_COL_NAME_WIDTH,
        UI_COL_QUANTITY_WIDTH,
        UI_COL_PRICE_WIDTH,
        UI_COL_CATEGORY_WIDTH,
    ];

    let mut line = String::new();
    for (cell, width) in cells.iter().zip(widths) {
        let _ = write!(line, "{}", pad_left(cell, width));
    }
    line
}

/// Right-aligns `s` to `width` display columns. Longer values are not cut.
pub fn pad_left(s: &str, width: usize) -> String {
    let shown = s.width();
    if shown >= width {
        s.to_string()
    } else {
        format!("{}{s}", " ".repeat(width - shown))
    }
}

// =============================================================================
// Status Messages
// =============================================================================

/// Visual tone of a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Error,
    Dimmed,
}

/// Applies the tone's color to `msg` when `color` is enabled.
pub fn styled(msg: &str, tone: Tone, color: bool) -> String {
    if !color {
        return msg.to_string();
    }
    match tone {
        Tone::Success => msg.green().to_string(),
        Tone::Warning => msg.yellow().to_string(),
        Tone::Error => msg.red().to_string(),
        Tone::Dimmed => msg.dimmed().to_string(),
    }
}

/// Formats a warning line with a "warning:" prefix.
pub fn format_warning(warning: &str, color: bool) -> String {
    format!("{} {warning}", styled("warning:", Tone::Warning, color))
}

/// Prints warnings to stderr with a yellow prefix.
pub fn print_warnings(warnings: &[String], color: bool) {
    for warning in warnings {
        eprintln!("{}", format_warning(warning, color));
    }
}
