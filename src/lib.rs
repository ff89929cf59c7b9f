//! # gamestock
//!
//! A console inventory manager for a video game shop with:
//! - Validated game records (item number, name, price, rating, stock)
//! - A flat comma-delimited file as the only storage
//! - Full-scan queries: list, lookup by item number, price filter, statistics
//! - A menu-driven interactive shell
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Interactive Shell                        │
//! │              (menu loop, prompts, retries)                   │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Inventory                              │
//! │            (creation counter, capacity guard)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ QueryEngine │─────────▶│    Store    │
//!   │ (read-side) │          │ (flat file) │
//!   └─────────────┘          └──────┬──────┘
//!                                   │
//!                                   ▼
//!                           ┌─────────────┐
//!                           │    Codec    │
//!                           │ (one line)  │
//!                           └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod codec;
pub mod storage;
pub mod query;
pub mod inventory;
pub mod shell;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{DecodeError, InventoryError, Result, ValidationError};
pub use config::Config;
pub use record::{Field, Game};
pub use query::Stats;
pub use inventory::Inventory;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of gamestock
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
