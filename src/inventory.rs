//! # Inventory
//!
//! The in-memory item store and every query and mutation on it.
//! Items keep insertion order until an explicit sort reorders them.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::fmt;

use thiserror::Error;
use tracing::{debug, info};

use crate::item::{normalize_id, Category, Item};

/// Errors returned by store operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("Item not found!")]
    NotFound(String),

    #[error("Item with ID {0} already exists!")]
    DuplicateId(String),
}

/// How the store treats an ID that is already present on add
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdPolicy {
    /// Reject adds whose ID is already stored (case-insensitive)
    #[default]
    Unique,
    /// Store duplicates; lookups reach only the first, removal deletes all
    AllowDuplicates,
}

/// Sort direction for price sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "ascending"),
            Self::Descending => write!(f, "descending"),
        }
    }
}

/// A change to one mutable field of an item
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldUpdate {
    Quantity(u32),
    Price(f64),
}

/// Outcome of a successful update: which item, and the before/after values
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateReport {
    pub name: String,
    pub old: FieldUpdate,
    pub new: FieldUpdate,
}

/// Ordered in-memory collection of items
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: Vec<Item>,
    policy: IdPolicy,
}

impl Inventory {
    /// Creates an empty store with the given ID policy
    pub const fn new(policy: IdPolicy) -> Self {
        Self {
            items: Vec::new(),
            policy,
        }
    }

    /// Returns the ID policy
    pub const fn policy(&self) -> IdPolicy {
        self.policy
    }

    /// Returns the number of stored items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no items are stored
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns all items in store order
    pub fn all(&self) -> &[Item] {
        &self.items
    }

    /// Adds an item to the end of the store.
    ///
    /// Under [`IdPolicy::Unique`] an existing ID is rejected and nothing changes.
    pub fn add(&mut self, item: Item) -> Result<(), InventoryError> {
        if self.policy == IdPolicy::Unique && self.find(item.id()).is_some() {
            info!(id = item.id(), "rejected duplicate item");
            return Err(InventoryError::DuplicateId(item.id().to_string()));
        }

        debug!(id = item.id(), category = %item.category(), "added item");
        self.items.push(item);
        Ok(())
    }

    /// Finds the first item with the given ID (case-insensitive)
    pub fn find(&self, id: &str) -> Option<&Item> {
        let id = normalize_id(id);
        self.items.iter().find(|item| item.id() == id)
    }

    /// Finds the first item with the given ID for mutation
    pub fn find_mut(&mut self, id: &str) -> Option<&mut Item> {
        let id = normalize_id(id);
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Looks up an item, reporting a miss as an error
    pub fn search(&self, id: &str) -> Result<&Item, InventoryError> {
        self.find(id).ok_or_else(|| {
            info!(id, "item not found");
            InventoryError::NotFound(normalize_id(id))
        })
    }

    /// Updates quantity or price of the first item with the given ID.
    pub fn update(
        &mut self,
        id: &str,
        change: FieldUpdate,
    ) -> Result<UpdateReport, InventoryError> {
        let Some(item) = self.find_mut(id) else {
            info!(id, "update target not found");
            return Err(InventoryError::NotFound(normalize_id(id)));
        };

        let old = match change {
            FieldUpdate::Quantity(quantity) => {
                let old = FieldUpdate::Quantity(item.quantity());
                item.set_quantity(quantity);
                old
            }
            FieldUpdate::Price(price) => {
                let old = FieldUpdate::Price(item.price());
                item.set_price(price);
                old
            }
        };

        debug!(id = item.id(), ?old, new = ?change, "updated item");
        Ok(UpdateReport {
            name: item.name().to_string(),
            old,
            new: change,
        })
    }

    /// Removes every item whose ID matches, returning the removed items in
    /// store order.
    pub fn remove(&mut self, id: &str) -> Result<Vec<Item>, InventoryError> {
        let id = normalize_id(id);
        if !self.items.iter().any(|item| item.id() == id) {
            info!(%id, "remove target not found");
            return Err(InventoryError::NotFound(id));
        }

        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.items)
            .into_iter()
            .partition(|item| item.id() == id);
        self.items = kept;

        debug!(%id, count = removed.len(), "removed items");
        Ok(removed)
    }

    /// Returns items in the given category, in store order
    pub fn by_category(&self, category: Category) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| item.category() == category)
            .collect()
    }

    /// Returns items whose quantity is strictly below `threshold`
    pub fn low_stock(&self, threshold: u32) -> Vec<&Item> {
        self.items
            .iter()
            .filter(|item| item.quantity() < threshold)
            .collect()
    }

    /// Reorders the store by price. Equal prices keep their relative order.
    pub fn sort_by_price(&mut self, order: SortOrder) {
        match order {
            SortOrder::Ascending => self
                .items
                .sort_by(|a, b| a.price().total_cmp(&b.price())),
            SortOrder::Descending => self
                .items
                .sort_by(|a, b| b.price().total_cmp(&a.price())),
        }
        debug!(%order, "sorted items by price");
    }
}
