//! Inventory Module
//!
//! The context that coordinates the store and the query engine.
//!
//! ## Responsibilities
//! - Own the backing store and its configuration
//! - Track how many games have been created (`total_created`)
//! - Refuse new games once the configured capacity is reached
//!
//! ## Creation Counter
//! The counter lives here rather than in the record type. It starts from the
//! number of valid games found on disk when the inventory is opened and grows
//! by one per successful [`Inventory::add`]. Reading games back for reports
//! never changes it.

use std::path::Path;

use rust_decimal::Decimal;

use crate::config::Config;
use crate::error::{InventoryError, Result};
use crate::query::{QueryEngine, Stats};
use crate::record::Game;
use crate::storage::{Records, Store};

/// A game inventory backed by one flat file
pub struct Inventory {
    /// Inventory configuration
    config: Config,

    /// Backing store
    store: Store,

    /// Games created so far (on disk at open time plus adds since)
    total_created: usize,
}

impl Inventory {
    /// Open the inventory described by `config`
    ///
    /// On startup:
    /// 1. Reject a data path that points at a directory
    /// 2. Scan the store once to seed the creation counter
    pub fn open(config: Config) -> Result<Self> {
        if config.data_file.is_dir() {
            return Err(InventoryError::Config(format!(
                "data file {} is a directory",
                config.data_file.display()
            )));
        }

        let store = Store::new(&config.data_file);

        let mut records = store.read_all()?;
        let mut total_created = 0;
        for game in records.by_ref() {
            game?;
            total_created += 1;
        }

        tracing::info!(
            path = %config.data_file.display(),
            games = total_created,
            skipped = records.skipped(),
            "inventory opened"
        );

        Ok(Self {
            config,
            store,
            total_created,
        })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified data file
    pub fn open_path(path: &Path) -> Result<Self> {
        let config = Config::builder().data_file(path).build();
        Self::open(config)
    }

    /// Persist a new game
    ///
    /// Refused without touching storage once the capacity is reached.
    pub fn add(&mut self, game: Game) -> Result<()> {
        if self.is_full() {
            tracing::warn!(
                capacity = self.config.capacity,
                id = game.id(),
                "inventory full, refusing add"
            );
            return Err(InventoryError::InventoryFull {
                capacity: self.config.capacity,
            });
        }

        self.store.append(&game)?;
        self.total_created += 1;

        tracing::info!(id = game.id(), total = self.total_created, "game added");
        Ok(())
    }

    /// Whether further adds will be refused
    pub fn is_full(&self) -> bool {
        self.total_created >= self.config.capacity
    }

    /// Read-side operations over the store
    pub fn queries(&self) -> QueryEngine<'_> {
        QueryEngine::new(&self.store)
    }

    // =========================================================================
    // Query Shortcuts
    // =========================================================================

    pub fn list_all(&self) -> Result<Records> {
        self.queries().list_all()
    }

    pub fn find_by_id(&self, id: i32) -> Result<Game> {
        self.queries().find_by_id(id)
    }

    pub fn find_by_max_price(&self, max_price: Decimal) -> Result<Vec<Game>> {
        self.queries().find_by_max_price(max_price)
    }

    pub fn statistics(&self) -> Result<Stats> {
        self.queries().statistics()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Games created so far
    pub fn total_created(&self) -> usize {
        self.total_created
    }

    /// Maximum number of games
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Get the backing store
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
