//! Storage Module
//!
//! File-backed collection of games.
//!
//! ## Responsibilities
//! - Full, restartable scan of the backing file
//! - Skip lines that fail to decode (torn writes, hand edits)
//! - Append one line per new game, creating the file on demand
//!
//! A missing file is an empty inventory, not an error. There is no locking:
//! one process owns the file at a time.

mod iterator;
mod store;

pub use iterator::Records;
pub use store::Store;
