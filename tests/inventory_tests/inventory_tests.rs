//! Tests for Inventory
//!
//! These tests verify:
//! - Opening seeds the creation counter from the file
//! - Adds persist and bump the counter
//! - The capacity guard refuses adds without touching storage
//! - Reporting queries never change the counter

use std::fs;

use gamestock::{Config, Game, Inventory, InventoryError};
use rust_decimal::Decimal;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_inventory(capacity: usize) -> (TempDir, Inventory) {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::builder()
        .data_file(temp_dir.path().join("VideoGames.txt"))
        .capacity(capacity)
        .build();
    let inventory = Inventory::open(config).unwrap();
    (temp_dir, inventory)
}

fn game(id: i32) -> Game {
    Game::new(id, format!("Game {id}"), Decimal::new(1999, 2), 3.5, 2).unwrap()
}

// =============================================================================
// Open Tests
// =============================================================================

#[test]
fn test_open_missing_file() {
    let (_temp, inventory) = setup_temp_inventory(100);

    assert_eq!(inventory.total_created(), 0);
    assert_eq!(inventory.capacity(), 100);
    assert!(!inventory.store().exists());
}

#[test]
fn test_open_counts_valid_records() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("VideoGames.txt");
    fs::write(&path, "1000,A,1,1,1\nbroken\n1001,B,1,1,1\n").unwrap();

    let inventory = Inventory::open_path(&path).unwrap();

    assert_eq!(inventory.total_created(), 2);
    assert_eq!(inventory.capacity(), Config::DEFAULT_CAPACITY);
}

#[test]
fn test_open_directory_is_config_error() {
    let temp_dir = TempDir::new().unwrap();

    let result = Inventory::open_path(temp_dir.path());

    assert!(matches!(result, Err(InventoryError::Config(_))));
}

#[test]
fn test_reopen_continues_counter() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("VideoGames.txt");

    {
        let mut inventory = Inventory::open_path(&path).unwrap();
        inventory.add(game(1000)).unwrap();
        inventory.add(game(1001)).unwrap();
    }

    let inventory = Inventory::open_path(&path).unwrap();
    assert_eq!(inventory.total_created(), 2);
}

// =============================================================================
// Add Tests
// =============================================================================

#[test]
fn test_add_persists_and_counts() {
    let (_temp, mut inventory) = setup_temp_inventory(100);

    inventory.add(game(1234)).unwrap();

    assert_eq!(inventory.total_created(), 1);
    assert_eq!(inventory.find_by_id(1234).unwrap(), game(1234));
}

#[test]
fn test_add_allows_duplicate_ids() {
    let (_temp, mut inventory) = setup_temp_inventory(100);

    inventory.add(game(1234)).unwrap();
    inventory.add(game(1234)).unwrap();

    assert_eq!(inventory.total_created(), 2);
    assert_eq!(inventory.list_all().unwrap().count(), 2);
}

#[test]
fn test_add_refused_when_full() {
    let (_temp, mut inventory) = setup_temp_inventory(2);
    inventory.add(game(1000)).unwrap();
    inventory.add(game(1001)).unwrap();
    assert!(inventory.is_full());

    let before = fs::read(inventory.store().path()).unwrap();
    let result = inventory.add(game(1002));

    assert!(matches!(
        result,
        Err(InventoryError::InventoryFull { capacity: 2 })
    ));
    assert_eq!(inventory.total_created(), 2);
    assert_eq!(fs::read(inventory.store().path()).unwrap(), before);
}

#[test]
fn test_zero_capacity_never_creates_file() {
    let (_temp, mut inventory) = setup_temp_inventory(0);

    assert!(inventory.add(game(1000)).is_err());
    assert!(!inventory.store().exists());
}

// =============================================================================
// Query Shortcut Tests
// =============================================================================

#[test]
fn test_queries_do_not_change_counter() {
    let (_temp, mut inventory) = setup_temp_inventory(100);
    inventory.add(game(1000)).unwrap();
    inventory.add(game(1001)).unwrap();

    let _ = inventory.list_all().unwrap().count();
    let _ = inventory.find_by_id(1001).unwrap();
    let _ = inventory.find_by_max_price(Decimal::new(50, 0)).unwrap();
    let stats = inventory.statistics().unwrap();

    assert_eq!(stats.count, 2);
    assert_eq!(stats.total_quantity, 4);
    assert_eq!(inventory.total_created(), 2);
}

#[test]
fn test_statistics_no_data() {
    let (_temp, inventory) = setup_temp_inventory(100);

    assert!(matches!(inventory.statistics(), Err(InventoryError::NoData)));
}
