//! # Interactive Shell
//!
//! The numbered-menu session that drives the inventory. Generic over the
//! input and output streams, so a session can be scripted in tests.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod menu;
pub mod prompt;

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::debug;

pub use self::menu::{render_menu, MenuChoice, MENU_TITLE};
use crate::{
    config::Config,
    inventory::{FieldUpdate, IdPolicy, Inventory, SortOrder},
    item::{
        normalize_id,
        validate::{parse_category, parse_price, parse_quantity},
        Category, Item,
    },
    ui::{self, Tone},
};

const QUANTITY_RETRY: &str =
    "Invalid input. Please enter a non-negative numeric value for Quantity: ";
const PRICE_RETRY: &str = "Invalid input. Please enter a non-negative numeric value for Price: ";
const NOT_FOUND: &str = "Item not found!";

/// Whether the session keeps going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Skips to session end when a prompt hits end of input
macro_rules! or_exit {
    ($read:expr) => {
        match $read? {
            Some(value) => value,
            None => return Ok(Flow::Exit),
        }
    };
}

/// An interactive inventory session
pub struct Shell<R, W> {
    input: R,
    output: W,
    inventory: Inventory,
    low_stock_threshold: u32,
    color: bool,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a session with an empty inventory configured from `config`
    pub fn new(input: R, output: W, config: &Config) -> Self {
        Self::with_inventory(input, output, config, Inventory::new(config.id_policy))
    }

    /// Creates a session over an existing inventory
    pub fn with_inventory(input: R, output: W, config: &Config, inventory: Inventory) -> Self {
        Self {
            input,
            output,
            inventory,
            low_stock_threshold: config.low_stock_threshold,
            color: config.color,
        }
    }

    /// Returns the inventory
    pub const fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Consumes the session, returning the inventory and the output stream
    pub fn into_parts(self) -> (Inventory, W) {
        (self.inventory, self.output)
    }

    /// Runs the menu loop until Exit is chosen or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.output, "{}", render_menu())?;
            let Some(line) = self.read_line("Enter your choice: ")? else {
                debug!("input closed, ending session");
                return Ok(());
            };

            let flow = match line.parse::<MenuChoice>() {
                Ok(choice) => {
                    debug!(?choice, "menu selection");
                    self.dispatch(choice)?
                }
                Err(()) => {
                    self.say("Invalid choice. Please try again.", Tone::Error)?;
                    Flow::Continue
                }
            };

            writeln!(self.output)?;
            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::Add => self.add_item(),
            MenuChoice::Update => self.update_item(),
            MenuChoice::Remove => self.remove_item(),
            MenuChoice::DisplayByCategory => self.display_by_category(),
            MenuChoice::DisplayAll => self.display_all(),
            MenuChoice::Search => self.search_item(),
            MenuChoice::DisplayLowStock => self.display_low_stock(),
            MenuChoice::Sort => self.sort_items(),
            MenuChoice::Exit => {
                writeln!(self.output, "Exiting program.")?;
                Ok(Flow::Exit)
            }
        }
    }

    // =========================================================================
    // Actions
    // =========================================================================

    fn add_item(&mut self) -> Result<Flow> {
        let category = or_exit!(self.read_category());

        let id = or_exit!(self.read_non_empty("Enter Item ID: "));
        if self.inventory.policy() == IdPolicy::Unique && self.inventory.find(&id).is_some() {
            let msg = format!("Item with ID {} already exists!", normalize_id(&id));
            self.say(&msg, Tone::Error)?;
            return Ok(Flow::Continue);
        }

        let name = or_exit!(self.read_line("Enter Item Name: "));
        let quantity = or_exit!(self.read_quantity("Enter Quantity: "));
        let price = or_exit!(self.read_price("Enter Price: "));

        match self
            .inventory
            .add(Item::new(&id, name.trim(), quantity, price, category))
        {
            Ok(()) => self.say("Item added successfully!", Tone::Success)?,
            Err(err) => self.say(&err.to_string(), Tone::Error)?,
        }
        Ok(Flow::Continue)
    }

    fn update_item(&mut self) -> Result<Flow> {
        if self.inventory.is_empty() {
            self.say("No items.", Tone::Dimmed)?;
            return Ok(Flow::Continue);
        }

        let id = or_exit!(self.read_line("Enter Item ID to update: "));
        if self.inventory.find(&id).is_none() {
            self.say(NOT_FOUND, Tone::Error)?;
            return Ok(Flow::Continue);
        }

        let choice = or_exit!(self.read_line(
            "What would you like to update?\n1. Quantity\n2. Price\nEnter your choice: "
        ));
        let change = match choice.trim() {
            "1" => FieldUpdate::Quantity(or_exit!(self.read_quantity("Enter new quantity: "))),
            "2" => FieldUpdate::Price(or_exit!(self.read_price("Enter new price: "))),
            _ => {
                self.say("Invalid choice!", Tone::Error)?;
                return Ok(Flow::Continue);
            }
        };

        match self.inventory.update(&id, change) {
            Ok(report) => {
                let msg = match (report.old, report.new) {
                    (FieldUpdate::Quantity(old), FieldUpdate::Quantity(new)) => format!(
                        "Quantity of item {} updated from {old} to {new}",
                        report.name
                    ),
                    (old, new) => format!(
                        "Price of item {} updated from {} to {}",
                        report.name,
                        describe(old),
                        describe(new)
                    ),
                };
                self.say(&msg, Tone::Success)?;
            }
            Err(err) => self.say(&err.to_string(), Tone::Error)?,
        }
        Ok(Flow::Continue)
    }

    fn remove_item(&mut self) -> Result<Flow> {
        if self.inventory.is_empty() {
            self.say("No items.", Tone::Dimmed)?;
            return Ok(Flow::Continue);
        }

        let id = or_exit!(self.read_line("Enter Item ID to remove: "));
        match self.inventory.remove(&id) {
            Ok(removed) => {
                let name = removed.first().map_or("", Item::name);
                let msg = format!("Item {name} has been removed from the inventory.");
                self.say(&msg, Tone::Success)?;
            }
            Err(err) => self.say(&err.to_string(), Tone::Error)?,
        }
        Ok(Flow::Continue)
    }

    fn display_by_category(&mut self) -> Result<Flow> {
        let raw = or_exit!(self.read_line(&category_prompt()));
        let category = match parse_category(&raw) {
            Ok(category) => category,
            Err(err) => {
                self.say(&err.to_string(), Tone::Error)?;
                return Ok(Flow::Continue);
            }
        };

        let items = self.inventory.by_category(category);
        if items.is_empty() {
            let msg = format!("No items in category {category}.");
            self.say(&msg, Tone::Dimmed)?;
        } else {
            write!(self.output, "{}", ui::render_table(items))?;
        }
        Ok(Flow::Continue)
    }

    fn display_all(&mut self) -> Result<Flow> {
        if self.inventory.is_empty() {
            self.say("Empty items", Tone::Dimmed)?;
        } else {
            write!(self.output, "{}", ui::render_table(self.inventory.all()))?;
        }
        Ok(Flow::Continue)
    }

    fn search_item(&mut self) -> Result<Flow> {
        if self.inventory.is_empty() {
            self.say("There is no item to search.", Tone::Dimmed)?;
            return Ok(Flow::Continue);
        }

        let id = or_exit!(self.read_line("Enter Item ID to search: "));
        match self.inventory.search(&id) {
            Ok(item) => {
                let table = ui::render_table([item]);
                write!(self.output, "{table}")?;
            }
            Err(err) => self.say(&err.to_string(), Tone::Error)?,
        }
        Ok(Flow::Continue)
    }

    fn display_low_stock(&mut self) -> Result<Flow> {
        let items = self.inventory.low_stock(self.low_stock_threshold);
        if items.is_empty() {
            self.say("No low stock items.", Tone::Dimmed)?;
        } else {
            let table = ui::render_table(items);
            writeln!(self.output, "Low stock items:")?;
            write!(self.output, "{table}")?;
        }
        Ok(Flow::Continue)
    }

    fn sort_items(&mut self) -> Result<Flow> {
        let choice = or_exit!(self.read_line(
            "Sort by price:\n1. Ascending\n2. Descending\nEnter your choice: "
        ));
        let order = match choice.trim() {
            "1" => SortOrder::Ascending,
            "2" => SortOrder::Descending,
            _ => {
                self.say("Invalid choice! Sorting will not be performed.", Tone::Error)?;
                return Ok(Flow::Continue);
            }
        };

        self.inventory.sort_by_price(order);
        let msg = format!("Items sorted by price in {order} order.");
        self.say(&msg, Tone::Success)?;
        Ok(Flow::Continue)
    }

    // =========================================================================
    // Input Helpers
    // =========================================================================

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        prompt::read_line(&mut self.input, &mut self.output, prompt)
    }

    fn read_non_empty(&mut self, prompt: &str) -> Result<Option<String>> {
        prompt::read_until_valid(
            &mut self.input,
            &mut self.output,
            prompt,
            |line| {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    Err(())
                } else {
                    Ok(trimmed.to_string())
                }
            },
            |_| prompt.to_string(),
        )
    }

    fn read_category(&mut self) -> Result<Option<Category>> {
        let color = self.color;
        let ask = category_prompt();
        prompt::read_until_valid(
            &mut self.input,
            &mut self.output,
            &ask,
            parse_category,
            |err| {
                format!(
                    "{}\n{ask}",
                    ui::styled(&err.to_string(), Tone::Error, color)
                )
            },
        )
    }

    fn read_quantity(&mut self, prompt: &str) -> Result<Option<u32>> {
        prompt::read_until_valid(
            &mut self.input,
            &mut self.output,
            prompt,
            parse_quantity,
            |_| QUANTITY_RETRY.to_string(),
        )
    }

    fn read_price(&mut self, prompt: &str) -> Result<Option<f64>> {
        prompt::read_until_valid(
            &mut self.input,
            &mut self.output,
            prompt,
            parse_price,
            |_| PRICE_RETRY.to_string(),
        )
    }

    fn say(&mut self, msg: &str, tone: Tone) -> Result<()> {
        writeln!(self.output, "{}", ui::styled(msg, tone, self.color))?;
        Ok(())
    }
}

/// "Enter Category (Clothing, Electronics, Entertainment): "
fn category_prompt() -> String {
    let names: Vec<_> = Category::ALL.into_iter().map(Category::label).collect();
    format!("Enter Category ({}): ", names.join(", "))
}

fn describe(value: FieldUpdate) -> String {
    match value {
        FieldUpdate::Quantity(quantity) => quantity.to_string(),
        FieldUpdate::Price(price) => ui::format_price(price),
    }
}
