//! # Item
//!
//! Represents a single inventory record and its category.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod validate;

use std::{fmt, str::FromStr};

pub use self::validate::ValidationError;

/// Item category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Clothing,
    Electronics,
    Entertainment,
}

impl Category {
    /// All valid categories, in menu order.
    pub const ALL: [Self; 3] = [Self::Clothing, Self::Electronics, Self::Entertainment];

    /// Returns the lowercase name used for storage and display
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clothing => "clothing",
            Self::Electronics => "electronics",
            Self::Entertainment => "entertainment",
        }
    }

    /// Returns the capitalized name used in prompts
    pub const fn label(self) -> &'static str {
        match self {
            Self::Clothing => "Clothing",
            Self::Electronics => "Electronics",
            Self::Entertainment => "Entertainment",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    /// Parses a category name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|cat| cat.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ValidationError::UnknownCategory(trimmed.to_string()))
    }
}

/// A single inventory record.
///
/// The ID is normalized to uppercase on creation. Only quantity and price
/// can change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    id: String,
    name: String,
    quantity: u32,
    price: f64,
    category: Category,
}

impl Item {
    /// Creates a new item, uppercasing the ID
    pub fn new(
        id: &str,
        name: impl Into<String>,
        quantity: u32,
        price: f64,
        category: Category,
    ) -> Self {
        Self {
            id: normalize_id(id),
            name: name.into(),
            quantity,
            price,
            category,
        }
    }

    /// Returns the ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the quantity
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the unit price
    pub const fn price(&self) -> f64 {
        self.price
    }

    /// Returns the category
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Sets the quantity
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    /// Sets the unit price
    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }
}

/// Normalizes an item ID for storage and comparison.
pub fn normalize_id(id: &str) -> String {
    id.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uppercases_id() {
        let item = Item::new("ab1", "Shirt", 3, 9.0, Category::Clothing);
        assert_eq!(item.id(), "AB1");
        assert_eq!(item.name(), "Shirt");
    }

    #[test]
    fn test_name_case_preserved() {
        let item = Item::new("x", "iPhone mini", 1, 1.0, Category::Electronics);
        assert_eq!(item.name(), "iPhone mini");
    }

    #[test]
    fn test_normalize_id() {
        assert_eq!(normalize_id(" ab-1 "), "AB-1");
        assert_eq!(normalize_id("Ab1"), normalize_id("aB1"));
    }

    #[test]
    fn test_category_parse_case_insensitive() {
        assert_eq!("Clothing".parse::<Category>().unwrap(), Category::Clothing);
        assert_eq!(
            "ELECTRONICS".parse::<Category>().unwrap(),
            Category::Electronics
        );
        assert_eq!(
            " entertainment ".parse::<Category>().unwrap(),
            Category::Entertainment
        );
    }

    #[test]
    fn test_category_parse_unknown() {
        let err = "food".parse::<Category>().unwrap_err();
        assert_eq!(err, ValidationError::UnknownCategory("food".to_string()));
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Clothing.to_string(), "clothing");
        assert_eq!(Category::Entertainment.label(), "Entertainment");
    }

    #[test]
    fn test_setters() {
        let mut item = Item::new("a", "A", 1, 1.0, Category::Clothing);
        item.set_quantity(7);
        item.set_price(12.5);
        assert_eq!(item.quantity(), 7);
        assert!((item.price() - 12.5).abs() < f64::EPSILON);
    }
}
