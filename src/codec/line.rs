//! Line codec
//!
//! Encoding and decoding of a single record line.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::{FIELD_COUNT, SEPARATOR, SPACE_MARKER};
use crate::error::DecodeError;
use crate::record::{Field, Game};

// =============================================================================
// Encoding
// =============================================================================

/// Encode a game as one line (without the trailing newline)
///
/// Format: id,name,price,rating,quantity
pub fn encode_line(game: &Game) -> String {
    let name = game.name().replace(' ', &SPACE_MARKER.to_string());
    format!(
        "{id}{sep}{name}{sep}{price}{sep}{rating}{sep}{quantity}",
        id = game.id(),
        price = game.price(),
        rating = game.rating(),
        quantity = game.quantity(),
        sep = SEPARATOR,
    )
}

// =============================================================================
// Decoding
// =============================================================================

/// Decode one line into a game
///
/// Numeric fields may carry surrounding whitespace. Every field is checked
/// against the record invariants.
pub fn decode_line(line: &str) -> Result<Game, DecodeError> {
    let parts: Vec<&str> = line.split(SEPARATOR).collect();
    if parts.len() != FIELD_COUNT {
        return Err(DecodeError::FieldCount { found: parts.len() });
    }

    let id: i32 = parse_field(Field::Id, parts[0])?;
    let name = parts[1].replace(SPACE_MARKER, " ");
    let price: Decimal = parse_field(Field::Price, parts[2])?;
    let rating: f64 = parse_field(Field::Rating, parts[3])?;
    let quantity: i32 = parse_field(Field::Quantity, parts[4])?;

    Ok(Game::new(id, name, price, rating, quantity)?)
}

/// Decode a raw line read from disk
///
/// Strips one trailing `\r` and rejects bytes that are not UTF-8.
pub fn decode_bytes(bytes: &[u8]) -> Result<Game, DecodeError> {
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    let line = std::str::from_utf8(bytes).map_err(|_| DecodeError::Encoding)?;
    decode_line(line)
}

/// Parse a price typed by hand or read from a field
///
/// Plain decimal notation only: `Decimal`'s own parser also accepts `_`
/// digit separators, which are not numbers in this format.
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    if raw.contains(SPACE_MARKER) {
        return None;
    }
    Decimal::from_str(raw).ok()
}

/// Parse a trimmed numeric field
fn parse_field<T: FromStr>(field: Field, raw: &str) -> Result<T, DecodeError> {
    let unparsable = || DecodeError::Unparsable {
        field,
        value: raw.to_string(),
    };

    if raw.contains(SPACE_MARKER) {
        return Err(unparsable());
    }
    raw.trim().parse().map_err(|_| unparsable())
}
