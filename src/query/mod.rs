//! Query Module
//!
//! Read-side operations over a [`Store`](crate::storage::Store).
//!
//! Every query is a single linear pass over `Store::read_all`; there is no
//! index. Results keep file order.

mod engine;
mod stats;

pub use engine::QueryEngine;
pub use stats::Stats;
