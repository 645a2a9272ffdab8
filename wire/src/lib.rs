//! Delimited-token field codec for the stead game protocol.
//!
//! This crate provides [`FieldReader`] and [`FieldWriter`] for encoding and
//! decoding the separator-delimited payload of a single protocol line, plus
//! [`RangeList`] for the compressed sparse-set encoding used by board edge
//! lists. It knows nothing about message kinds; that lives in `stead-message`.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - Every read checks token availability and shape.
//! - **No domain knowledge** - This crate never interprets a field's meaning.
//! - **Explicit errors** - All failures return structured errors, never panic.
//!
//! # Example
//!
//! ```
//! use wire::{FieldReader, FieldWriter};
//!
//! let mut w = FieldWriter::new();
//! w.push_str("abc");
//! w.push_int(5);
//! assert_eq!(w.finish(), "abc,5");
//!
//! let mut r = FieldReader::new("abc,5");
//! assert_eq!(r.next_str().unwrap(), "abc");
//! assert_eq!(r.next_int().unwrap(), 5);
//! assert!(r.is_empty());
//! ```

mod error;
mod range;
mod reader;
mod writer;

pub use error::{WireError, WireResult};
pub use range::RangeList;
pub use reader::FieldReader;
pub use writer::FieldWriter;

/// Primary separator, between the type id and the payload. At most one per
/// ordinary line; multi-kinds allow several.
pub const SEP: char = '|';

/// Secondary separator, between payload fields.
pub const SEP2: char = ',';

/// Placeholder token standing in for a null or empty string field, so that
/// two adjacent separators never have to represent "nothing".
///
/// The token deliberately fails [`is_single_line_and_safe`], so no real
/// field value can collide with it.
pub const EMPTY_STR: &str = "\t";

/// "Not for any game" marker, used when a game-scoped template shape carries
/// a payload that has no game. Control character SYN, so it can never be a
/// real game name.
pub const GAME_NONE: &str = "\u{16}";

/// Opening token of a counted array field: `'[' SEP2 count SEP2 elem...`.
pub const ARRAY_OPEN: &str = "[";

/// Tests whether `s` is non-empty and safe to embed in a wire line:
/// single line, no control characters, no separator characters.
#[must_use]
pub fn is_single_line_and_safe(s: &str) -> bool {
    is_single_line_and_safe_allowing_seps(s, false)
}

/// Variant of [`is_single_line_and_safe`] that can optionally allow the
/// separator characters, for free-text fields carried behind their own
/// sub-separator.
#[must_use]
pub fn is_single_line_and_safe_allowing_seps(s: &str, allow_seps: bool) -> bool {
    if s.is_empty() {
        return false;
    }
    if !allow_seps && s.contains([SEP, SEP2]) {
        return false;
    }
    !s.chars().any(|c| c.is_control() || (c != ' ' && c.is_whitespace()))
}

/// Maps a possibly-empty field to its on-wire token.
#[must_use]
pub fn empty_to_placeholder(s: &str) -> &str {
    if s.is_empty() {
        EMPTY_STR
    } else {
        s
    }
}

/// Maps an on-wire token back to its field value, turning the placeholder
/// into the empty string.
#[must_use]
pub fn placeholder_to_empty(s: &str) -> &str {
    if s == EMPTY_STR {
        ""
    } else {
        s
    }
}
