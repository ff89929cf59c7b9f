//! Query engine
//!
//! List, lookup, filter and aggregate over one store scan.

use rust_decimal::Decimal;

use crate::error::{InventoryError, Result};
use crate::record::Game;
use crate::storage::{Records, Store};

use super::stats::StatsAccumulator;
use super::Stats;

/// Read-only view over a store
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    store: &'a Store,
}

impl<'a> QueryEngine<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Every valid game, lazily, in file order
    ///
    /// An absent file and a file with no valid line both give an empty scan.
    pub fn list_all(&self) -> Result<Records> {
        self.store.read_all()
    }

    /// First game with the given item number
    ///
    /// Item numbers are not unique on disk; the earliest line wins and the
    /// scan stops there.
    pub fn find_by_id(&self, id: i32) -> Result<Game> {
        for game in self.store.read_all()? {
            let game = game?;
            if game.id() == id {
                return Ok(game);
            }
        }

        Err(InventoryError::NotFound { id })
    }

    /// Every game priced at or below `max_price`, in file order
    pub fn find_by_max_price(&self, max_price: Decimal) -> Result<Vec<Game>> {
        let mut matches = Vec::new();
        for game in self.store.read_all()? {
            let game = game?;
            if game.price() <= max_price {
                matches.push(game);
            }
        }

        Ok(matches)
    }

    /// Count, average price, average rating and total stock in one pass
    ///
    /// Returns `NoData` instead of dividing by zero, and `Overflow` when the
    /// price sum no longer fits in a `Decimal`.
    pub fn statistics(&self) -> Result<Stats> {
        let mut acc = StatsAccumulator::default();
        for game in self.store.read_all()? {
            acc.add(&game?)?;
        }

        acc.finish().ok_or(InventoryError::NoData)
    }
}
