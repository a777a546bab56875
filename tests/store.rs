//! # Item Store Tests
//!
//! Behavior of the inventory through its public API.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod common;

use common::{ids, seeded_inventory};
use stockroom::{
    item::validate::{parse_price, parse_quantity},
    Category, FieldUpdate, IdPolicy, Inventory, InventoryError, Item, SortOrder,
};

// =============================================================================
// Add and Normalization
// =============================================================================

#[test]
fn test_add_normalizes_id_and_category() {
    let mut inventory = Inventory::new(IdPolicy::Unique);
    let category: Category = "ElEcTrOnIcS".parse().unwrap();
    inventory.add(Item::new("tv-01", "Big TV", 1, 499.0, category)).unwrap();

    let item = &inventory.all()[0];
    assert_eq!(item.id(), "TV-01");
    assert_eq!(item.category().to_string(), "electronics");
    assert_eq!(item.name(), "Big TV");
}

#[test]
fn test_invalid_numeric_input_never_reaches_store() {
    let inventory = Inventory::new(IdPolicy::Unique);
    for raw in ["ten", "-1", "1.5", "", " "] {
        assert!(parse_quantity(raw).is_err(), "quantity {raw:?} accepted");
        assert!(parse_price(raw).is_err(), "price {raw:?} accepted");
    }
    assert!(inventory.is_empty());
}

// =============================================================================
// Lookup
// =============================================================================

#[test]
fn test_find_is_case_insensitive() {
    let mut inventory = Inventory::new(IdPolicy::Unique);
    inventory.add(Item::new("Ab1", "Widget", 1, 1.0, Category::Electronics)).unwrap();

    assert_eq!(inventory.find("ab1").unwrap().name(), "Widget");
    assert_eq!(inventory.search("AB1").unwrap().name(), "Widget");
}

#[test]
fn test_duplicates_only_first_reachable() {
    let mut inventory = Inventory::new(IdPolicy::AllowDuplicates);
    inventory.add(Item::new("x", "First", 1, 1.0, Category::Clothing)).unwrap();
    inventory.add(Item::new("X", "Second", 2, 2.0, Category::Clothing)).unwrap();

    assert_eq!(inventory.find("x").unwrap().name(), "First");
    inventory.update("x", FieldUpdate::Quantity(9)).unwrap();
    assert_eq!(inventory.all()[0].quantity(), 9);
    assert_eq!(inventory.all()[1].quantity(), 2);
}

// =============================================================================
// Remove
// =============================================================================

#[test]
fn test_remove_missing_id_keeps_length() {
    let mut inventory = seeded_inventory();
    let before = inventory.len();
    assert_eq!(
        inventory.remove("nope"),
        Err(InventoryError::NotFound("NOPE".to_string()))
    );
    assert_eq!(inventory.len(), before);
}

#[test]
fn test_remove_deletes_all_duplicates() {
    let mut inventory = Inventory::new(IdPolicy::AllowDuplicates);
    inventory.add(Item::new("a1", "Shirt", 10, 9.0, Category::Clothing)).unwrap();
    inventory.add(Item::new("A1", "Hat", 2, 5.0, Category::Clothing)).unwrap();
    assert_eq!(ids(&inventory), ["A1", "A1"]);

    let removed = inventory.remove("a1").unwrap();
    assert_eq!(removed.len(), 2);
    assert_eq!(removed[0].name(), "Shirt");
    assert!(inventory.is_empty());
}

#[test]
fn test_unique_policy_rejects_case_variant() {
    let mut inventory = Inventory::new(IdPolicy::Unique);
    inventory.add(Item::new("a1", "Shirt", 10, 9.0, Category::Clothing)).unwrap();
    let err = inventory
        .add(Item::new("A1", "Hat", 2, 5.0, Category::Clothing))
        .unwrap_err();

    assert_eq!(err.to_string(), "Item with ID A1 already exists!");
    assert_eq!(inventory.len(), 1);
}

// =============================================================================
// Queries
// =============================================================================

#[test]
fn test_low_stock_boundary_excluded() {
    let inventory = seeded_inventory();
    let low: Vec<_> = inventory.low_stock(5).iter().map(|i| i.id()).collect();
    // T1 has exactly 5 and is not low stock
    assert_eq!(low, ["E1"]);
}

#[test]
fn test_category_filter_keeps_store_order() {
    let inventory = seeded_inventory();
    let clothing: Vec<_> = inventory
        .by_category(Category::Clothing)
        .iter()
        .map(|i| i.name())
        .collect();
    assert_eq!(clothing, ["Shirt", "Socks"]);
}

#[test]
fn test_queries_do_not_mutate() {
    let inventory = seeded_inventory();
    let before = ids(&inventory);
    let _ = inventory.by_category(Category::Electronics);
    let _ = inventory.low_stock(100);
    let _ = inventory.search("t1");
    assert_eq!(ids(&inventory), before);
}

// =============================================================================
// Sorting
// =============================================================================

#[test]
fn test_sort_descending_reverses_ascending() {
    let mut inventory = seeded_inventory();

    inventory.sort_by_price(SortOrder::Ascending);
    let ascending = ids(&inventory);
    assert_eq!(ascending, ["C2", "C1", "T1", "E1"]);

    inventory.sort_by_price(SortOrder::Descending);
    let mut expected = ascending;
    expected.reverse();
    assert_eq!(ids(&inventory), expected);
}

#[test]
fn test_sort_persists_for_later_reads() {
    let mut inventory = seeded_inventory();
    inventory.sort_by_price(SortOrder::Descending);
    let clothing: Vec<_> = inventory
        .by_category(Category::Clothing)
        .iter()
        .map(|i| i.id())
        .collect();
    assert_eq!(clothing, ["C1", "C2"]);
    assert_eq!(inventory.all()[0].id(), "E1");
}
