//! Inventory statistics

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{InventoryError, Result};
use crate::record::Game;

/// Aggregate figures over every valid game
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    pub count: usize,
    pub average_price: Decimal,
    pub average_rating: f64,
    pub total_quantity: i64,
}

/// Running sums for a single pass
#[derive(Debug, Default)]
pub(super) struct StatsAccumulator {
    count: usize,
    total_price: Decimal,
    total_rating: f64,
    total_quantity: i64,
}

impl StatsAccumulator {
    /// Fold one game in; sums that leave the representable range fail
    /// instead of wrapping or panicking
    pub(super) fn add(&mut self, game: &Game) -> Result<()> {
        self.total_price = self
            .total_price
            .checked_add(game.price())
            .ok_or(InventoryError::Overflow("total price"))?;
        self.total_quantity = self
            .total_quantity
            .checked_add(i64::from(game.quantity()))
            .ok_or(InventoryError::Overflow("total quantity"))?;
        self.total_rating += game.rating();
        self.count += 1;
        Ok(())
    }

    /// None when nothing was accumulated
    pub(super) fn finish(self) -> Option<Stats> {
        if self.count == 0 {
            return None;
        }

        Some(Stats {
            count: self.count,
            average_price: self.total_price / Decimal::from(self.count),
            average_rating: self.total_rating / self.count as f64,
            total_quantity: self.total_quantity,
        })
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Decimal's precision formatting truncates; round half away from zero first
        let average_price = self
            .average_price
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        writeln!(f, "--- Statistical Analysis ---")?;
        writeln!(f, "Total Games:        {}", self.count)?;
        writeln!(f, "Average Price:      ${:.2}", average_price)?;
        writeln!(f, "Average Rating:     {:.2}/5", self.average_rating)?;
        write!(f, "Total Units In Stock: {}", self.total_quantity)
    }
}
