//! # Menu
//!
//! The numbered actions offered by the interactive shell.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::str::FromStr;

/// Title printed above the menu.
pub const MENU_TITLE: &str = "Inventory Management System";

/// A menu action, numbered 1 through 9
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Update,
    Remove,
    DisplayByCategory,
    DisplayAll,
    Search,
    DisplayLowStock,
    Sort,
    Exit,
}

impl MenuChoice {
    /// All choices in menu order.
    pub const ALL: [Self; 9] = [
        Self::Add,
        Self::Update,
        Self::Remove,
        Self::DisplayByCategory,
        Self::DisplayAll,
        Self::Search,
        Self::DisplayLowStock,
        Self::Sort,
        Self::Exit,
    ];

    /// Returns the number the user types for this choice
    pub const fn number(self) -> u32 {
        match self {
            Self::Add => 1,
            Self::Update => 2,
            Self::Remove => 3,
            Self::DisplayByCategory => 4,
            Self::DisplayAll => 5,
            Self::Search => 6,
            Self::DisplayLowStock => 7,
            Self::Sort => 8,
            Self::Exit => 9,
        }
    }

    /// Returns the menu label
    pub const fn label(self) -> &'static str {
        match self {
            Self::Add => "Add Item",
            Self::Update => "Update Item",
            Self::Remove => "Remove Item",
            Self::DisplayByCategory => "Display Items by Category",
            Self::DisplayAll => "Display All Items",
            Self::Search => "Search Item",
            Self::DisplayLowStock => "Display Low Stock Items",
            Self::Sort => "Sort Items",
            Self::Exit => "Exit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: u32 = s.trim().parse().map_err(|_| ())?;
        Self::ALL
            .into_iter()
            .find(|choice| choice.number() == number)
            .ok_or(())
    }
}

/// Renders the full menu, one action per line, ending in a newline.
pub fn render_menu() -> String {
    let mut out = format!("{MENU_TITLE}\n");
    for choice in MenuChoice::ALL {
        out.push_str(&format!("{}. {}\n", choice.number(), choice.label()));
    }
    out
}
