//! Game record
//!
//! Field validators plus the `Game` type built from them.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

use super::{Field, ID_MAX, ID_MIN, RATING_MAX};
use crate::error::ValidationError;

// =============================================================================
// Field Validators
// =============================================================================

/// Accept a 4-digit item number
pub fn validate_id(id: i32) -> Result<i32, ValidationError> {
    if (ID_MIN..=ID_MAX).contains(&id) {
        Ok(id)
    } else {
        Err(ValidationError::new(
            Field::Id,
            id,
            "Item number must be a 4-digit code.",
        ))
    }
}

/// Accept any name with at least one non-whitespace character
pub fn validate_name(name: String) -> Result<String, ValidationError> {
    if name.trim().is_empty() {
        Err(ValidationError::new(
            Field::Name,
            name,
            "Item name cannot be empty.",
        ))
    } else {
        Ok(name)
    }
}

/// Accept a non-negative price
pub fn validate_price(price: Decimal) -> Result<Decimal, ValidationError> {
    if price < Decimal::ZERO {
        Err(ValidationError::new(
            Field::Price,
            price,
            "Price cannot be negative.",
        ))
    } else {
        Ok(price)
    }
}

/// Accept a rating in 0..=5; NaN is rejected
pub fn validate_rating(rating: f64) -> Result<f64, ValidationError> {
    if (0.0..=RATING_MAX).contains(&rating) {
        Ok(rating)
    } else {
        Err(ValidationError::new(
            Field::Rating,
            rating,
            "User rating must be between 0 and 5.",
        ))
    }
}

/// Accept a non-negative stock count
pub fn validate_quantity(quantity: i32) -> Result<i32, ValidationError> {
    if quantity >= 0 {
        Ok(quantity)
    } else {
        Err(ValidationError::new(
            Field::Quantity,
            quantity,
            "Quantity cannot be negative.",
        ))
    }
}

// =============================================================================
// Game
// =============================================================================

/// One validated game listing
///
/// Fields are private so every mutation goes through a validator.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    id: i32,
    name: String,
    price: Decimal,
    rating: f64,
    quantity: i32,
}

impl Game {
    /// Build a game, rejecting it as a whole if any field is invalid
    pub fn new(
        id: i32,
        name: impl Into<String>,
        price: Decimal,
        rating: f64,
        quantity: i32,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: validate_id(id)?,
            name: validate_name(name.into())?,
            price: validate_price(price)?,
            rating: validate_rating(rating)?,
            quantity: validate_quantity(quantity)?,
        })
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    /// In stock when at least one unit is left
    pub fn is_available(&self) -> bool {
        self.quantity > 0
    }

    // -------------------------------------------------------------------------
    // Setters (each leaves the game untouched on failure)
    // -------------------------------------------------------------------------

    pub fn set_id(&mut self, id: i32) -> Result<(), ValidationError> {
        self.id = validate_id(id)?;
        Ok(())
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        self.name = validate_name(name.into())?;
        Ok(())
    }

    pub fn set_price(&mut self, price: Decimal) -> Result<(), ValidationError> {
        self.price = validate_price(price)?;
        Ok(())
    }

    pub fn set_rating(&mut self, rating: f64) -> Result<(), ValidationError> {
        self.rating = validate_rating(rating)?;
        Ok(())
    }

    pub fn set_quantity(&mut self, quantity: i32) -> Result<(), ValidationError> {
        self.quantity = validate_quantity(quantity)?;
        Ok(())
    }

    /// Reduce the price by `percent` (0..=100)
    ///
    /// A result below zero is clamped to zero.
    pub fn apply_discount(&mut self, percent: Decimal) -> Result<(), ValidationError> {
        if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
            return Err(ValidationError::new(
                Field::Discount,
                percent,
                "Discount must be between 0 and 100.",
            ));
        }

        let discounted = self.price * (Decimal::ONE - percent / Decimal::ONE_HUNDRED);
        self.price = match validate_price(discounted) {
            Ok(price) => price,
            Err(_) => {
                tracing::warn!(
                    id = self.id,
                    price = %discounted,
                    "discount produced a negative price, clamping to zero"
                );
                Decimal::ZERO
            }
        };

        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self {
            id: ID_MIN,
            name: "Unknown Game".to_string(),
            price: Decimal::ZERO,
            rating: 0.0,
            quantity: 0,
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[GAME INFO]")?;
        writeln!(f, "Item #:      {}", self.id)?;
        writeln!(f, "Title:       {}", self.name)?;
        writeln!(
            f,
            "Price:       ${:.2}",
            self.price
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        )?;
        writeln!(f, "Rating:      {}/5", self.rating)?;
        writeln!(f, "In Stock:    {}", self.quantity)?;
        write!(
            f,
            "Availability:{}",
            if self.is_available() { "Yes" } else { "No" }
        )
    }
}
