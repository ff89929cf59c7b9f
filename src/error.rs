//! Error types for gamestock
//!
//! Three layers of failure:
//! - [`ValidationError`]: a single field broke its invariant
//! - [`DecodeError`]: a persisted line could not be turned back into a game
//! - [`InventoryError`]: everything an inventory operation can surface

use thiserror::Error;

use crate::record::Field;

/// Result type alias using InventoryError
pub type Result<T> = std::result::Result<T, InventoryError>;

/// A field constraint was violated
///
/// Carries the field, the offending value as text and the user-facing reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason} (got {value:?})")]
pub struct ValidationError {
    pub field: Field,
    pub value: String,
    pub reason: &'static str,
}

impl ValidationError {
    pub fn new(field: Field, value: impl ToString, reason: &'static str) -> Self {
        Self {
            field,
            value: value.to_string(),
            reason,
        }
    }
}

/// A persisted line could not be decoded
///
/// Never surfaced to the user individually; the store skips the line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("expected 5 fields, found {found}")]
    FieldCount { found: usize },

    #[error("{field} is not a number: {value:?}")]
    Unparsable { field: Field, value: String },

    #[error("line is not valid UTF-8")]
    Encoding,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Unified error type for inventory operations
#[derive(Debug, Error)]
pub enum InventoryError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Record Errors
    // -------------------------------------------------------------------------
    #[error("{0}")]
    Validation(#[from] ValidationError),

    // -------------------------------------------------------------------------
    // Query Errors
    // -------------------------------------------------------------------------
    #[error("Game {id} not found")]
    NotFound { id: i32 },

    #[error("No data available")]
    NoData,

    #[error("Arithmetic overflow while computing {0}")]
    Overflow(&'static str),

    // -------------------------------------------------------------------------
    // Capacity Errors
    // -------------------------------------------------------------------------
    #[error("Inventory full ({capacity} games)")]
    InventoryFull { capacity: usize },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
