//! Configuration for gamestock
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for an inventory instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Backing file, one game per line. Created on the first add.
    pub data_file: PathBuf,

    // -------------------------------------------------------------------------
    // Inventory Configuration
    // -------------------------------------------------------------------------
    /// Maximum number of games that may be created before adds are refused
    pub capacity: usize,

    // -------------------------------------------------------------------------
    // Shell Configuration
    // -------------------------------------------------------------------------
    /// Wait for Enter after each report before showing the menu again
    pub pause_after_report: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(Self::DEFAULT_DATA_FILE),
            capacity: Self::DEFAULT_CAPACITY,
            pause_after_report: true,
        }
    }
}

impl Config {
    pub const DEFAULT_DATA_FILE: &'static str = "VideoGames.txt";
    pub const DEFAULT_CAPACITY: usize = 100;

    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the backing data file
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Set the maximum number of games
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    /// Enable or disable the pause after reports
    pub fn pause_after_report(mut self, pause: bool) -> Self {
        self.config.pause_after_report = pause;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
