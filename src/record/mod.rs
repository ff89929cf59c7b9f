//! Record Module
//!
//! The validated in-memory game listing.
//!
//! ## Invariants
//! ```text
//! ┌──────────┬───────────┬──────────────────────────────┐
//! │ Field    │ Type      │ Constraint                   │
//! ├──────────┼───────────┼──────────────────────────────┤
//! │ id       │ i32       │ 1000 ..= 9999                │
//! │ name     │ String    │ not empty / not whitespace   │
//! │ price    │ Decimal   │ >= 0                         │
//! │ rating   │ f64       │ 0 ..= 5                      │
//! │ quantity │ i32       │ >= 0                         │
//! └──────────┴───────────┴──────────────────────────────┘
//! ```
//!
//! Construction checks all five at once; setters re-check only their own.

mod game;

use std::fmt;

pub use game::{
    validate_id, validate_name, validate_price, validate_quantity, validate_rating, Game,
};

/// Smallest valid item number
pub const ID_MIN: i32 = 1000;

/// Largest valid item number
pub const ID_MAX: i32 = 9999;

/// Highest user rating
pub const RATING_MAX: f64 = 5.0;

/// Identifies the field a validation failure refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Name,
    Price,
    Rating,
    Quantity,
    Discount,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Id => "item number",
            Field::Name => "item name",
            Field::Price => "price",
            Field::Rating => "user rating",
            Field::Quantity => "quantity",
            Field::Discount => "discount",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
