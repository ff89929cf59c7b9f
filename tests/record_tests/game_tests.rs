//! Tests for Game records
//!
//! These tests verify:
//! - Construction accepts exactly the valid ranges for every field
//! - Construction is all-or-nothing
//! - Setters re-validate and leave the game unchanged on failure
//! - Discounts, availability and display

use gamestock::record::{validate_id, Field, Game, ID_MAX, ID_MIN};
use gamestock::ValidationError;
use rust_decimal::Decimal;

// =============================================================================
// Helper Functions
// =============================================================================

fn price(units: i64, scale: u32) -> Decimal {
    Decimal::new(units, scale)
}

fn sample_game() -> Game {
    Game::new(1234, "Super Mario", price(100, 0), 4.5, 3).unwrap()
}

// =============================================================================
// Construction Tests
// =============================================================================

#[test]
fn test_new_valid_game() {
    let game = Game::new(4321, "Zelda", price(5999, 2), 5.0, 0).unwrap();

    assert_eq!(game.id(), 4321);
    assert_eq!(game.name(), "Zelda");
    assert_eq!(game.price(), price(5999, 2));
    assert_eq!(game.rating(), 5.0);
    assert_eq!(game.quantity(), 0);
}

#[test]
fn test_id_range_boundaries() {
    for id in [i32::MIN, -1, 0, 999, 10000, i32::MAX] {
        assert!(Game::new(id, "Game", Decimal::ZERO, 0.0, 0).is_err(), "id {id}");
    }
    for id in [ID_MIN, 1001, 5000, 9998, ID_MAX] {
        assert!(Game::new(id, "Game", Decimal::ZERO, 0.0, 0).is_ok(), "id {id}");
    }
}

#[test]
fn test_id_accepted_iff_four_digits() {
    for id in -20_000..20_000 {
        assert_eq!(validate_id(id).is_ok(), (1000..=9999).contains(&id));
    }
}

#[test]
fn test_empty_name_rejected() {
    let err = Game::new(1234, "", Decimal::ZERO, 0.0, 0).unwrap_err();
    assert_eq!(err.field, Field::Name);

    let err = Game::new(1234, "   \t", Decimal::ZERO, 0.0, 0).unwrap_err();
    assert_eq!(err.field, Field::Name);
    assert_eq!(err.reason, "Item name cannot be empty.");
}

#[test]
fn test_negative_price_rejected() {
    let err = Game::new(1234, "Game", price(-1, 2), 0.0, 0).unwrap_err();

    assert_eq!(err.field, Field::Price);
    assert_eq!(err.value, "-0.01");
}

#[test]
fn test_rating_range() {
    assert!(Game::new(1234, "Game", Decimal::ZERO, 0.0, 0).is_ok());
    assert!(Game::new(1234, "Game", Decimal::ZERO, 5.0, 0).is_ok());

    for rating in [-0.1, 5.01, f64::NAN, f64::INFINITY] {
        let err = Game::new(1234, "Game", Decimal::ZERO, rating, 0).unwrap_err();
        assert_eq!(err.field, Field::Rating);
    }
}

#[test]
fn test_negative_quantity_rejected() {
    let err = Game::new(1234, "Game", Decimal::ZERO, 0.0, -1).unwrap_err();

    assert_eq!(err.field, Field::Quantity);
    assert_eq!(err.value, "-1");
}

#[test]
fn test_first_invalid_field_reported() {
    // Both id and quantity are invalid; id is checked first
    let err = Game::new(99, "Game", Decimal::ZERO, 0.0, -5).unwrap_err();

    assert_eq!(
        err,
        ValidationError {
            field: Field::Id,
            value: "99".to_string(),
            reason: "Item number must be a 4-digit code.",
        }
    );
}

#[test]
fn test_default_game() {
    let game = Game::default();

    assert_eq!(game.id(), 1000);
    assert_eq!(game.name(), "Unknown Game");
    assert_eq!(game.price(), Decimal::ZERO);
    assert!(!game.is_available());
}

// =============================================================================
// Setter Tests
// =============================================================================

#[test]
fn test_setters_update_valid_values() {
    let mut game = sample_game();

    game.set_id(9999).unwrap();
    game.set_name("Metroid Prime").unwrap();
    game.set_price(price(2550, 2)).unwrap();
    game.set_rating(3.5).unwrap();
    game.set_quantity(12).unwrap();

    assert_eq!(game.id(), 9999);
    assert_eq!(game.name(), "Metroid Prime");
    assert_eq!(game.price(), price(2550, 2));
    assert_eq!(game.rating(), 3.5);
    assert_eq!(game.quantity(), 12);
}

#[test]
fn test_failed_setters_leave_game_unchanged() {
    let mut game = sample_game();
    let before = game.clone();

    assert!(game.set_id(100).is_err());
    assert!(game.set_name(" ").is_err());
    assert!(game.set_price(price(-5, 0)).is_err());
    assert!(game.set_rating(6.0).is_err());
    assert!(game.set_quantity(-3).is_err());

    assert_eq!(game, before);
}

// =============================================================================
// Discount Tests
// =============================================================================

#[test]
fn test_discount_ten_percent() {
    let mut game = sample_game();

    game.apply_discount(price(10, 0)).unwrap();

    assert_eq!(game.price(), price(90, 0));
}

#[test]
fn test_discount_zero_leaves_price() {
    let mut game = sample_game();

    game.apply_discount(Decimal::ZERO).unwrap();

    assert_eq!(game.price(), price(100, 0));
}

#[test]
fn test_discount_full_makes_free() {
    let mut game = sample_game();

    game.apply_discount(price(100, 0)).unwrap();

    assert_eq!(game.price(), Decimal::ZERO);
}

#[test]
fn test_discount_out_of_range_rejected() {
    let mut game = sample_game();

    for percent in [price(101, 0), price(-1, 0), price(10001, 2)] {
        let err = game.apply_discount(percent).unwrap_err();
        assert_eq!(err.field, Field::Discount);
        assert_eq!(game.price(), price(100, 0));
    }
}

#[test]
fn test_discount_fractional_percent() {
    let mut game = Game::new(1234, "Game", price(5999, 2), 4.0, 1).unwrap();

    game.apply_discount(price(25, 0)).unwrap();

    // 59.99 * 0.75
    assert_eq!(game.price(), price(449925, 4));
}

// =============================================================================
// Availability / Display Tests
// =============================================================================

#[test]
fn test_is_available() {
    let mut game = sample_game();
    assert!(game.is_available());

    game.set_quantity(0).unwrap();
    assert!(!game.is_available());
}

#[test]
fn test_display_info_block() {
    let game = Game::new(1234, "Super Mario", price(1999, 2), 4.5, 0).unwrap();
    let text = game.to_string();

    assert!(text.starts_with("[GAME INFO]"));
    assert!(text.contains("Item #:      1234"));
    assert!(text.contains("Title:       Super Mario"));
    assert!(text.contains("Price:       $19.99"));
    assert!(text.contains("Rating:      4.5/5"));
    assert!(text.contains("In Stock:    0"));
    assert!(text.ends_with("Availability:No"));
}

#[test]
fn test_display_rounds_price_to_cents() {
    let rounded_up = Game::new(1234, "Game", price(19999, 3), 4.0, 1).unwrap();
    let midpoint = Game::new(1234, "Game", price(135, 3), 4.0, 1).unwrap();
    let rounded_down = Game::new(1234, "Game", price(10004, 3), 4.0, 1).unwrap();

    assert!(rounded_up.to_string().contains("Price:       $20.00"));
    assert!(midpoint.to_string().contains("Price:       $0.14"));
    assert!(rounded_down.to_string().contains("Price:       $10.00"));
}

#[test]
fn test_validation_error_message() {
    let err = Game::new(1234, "Game", Decimal::ZERO, 7.0, 0).unwrap_err();

    assert_eq!(err.to_string(), "User rating must be between 0 and 5. (got \"7\")");
}
