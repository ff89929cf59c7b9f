//! Codec Module
//!
//! Converts games to and from the flat-file line format.
//!
//! ## Line Format
//! ```text
//! ┌──────┬───┬──────────────┬───┬───────┬───┬────────┬───┬──────────┐
//! │  id  │ , │ name (_=' ') │ , │ price │ , │ rating │ , │ quantity │
//! └──────┴───┴──────────────┴───┴───────┴───┴────────┴───┴──────────┘
//! ```
//!
//! No header, no quoting, no escaping. A name containing a comma produces a
//! line that will not decode; a name containing `_` comes back with a space.

mod line;

pub use line::{decode_bytes, decode_line, encode_line, parse_decimal};

/// Field separator
pub const SEPARATOR: char = ',';

/// Number of fields in a well-formed line
pub const FIELD_COUNT: usize = 5;

/// Persisted stand-in for a space inside a name
pub const SPACE_MARKER: char = '_';
