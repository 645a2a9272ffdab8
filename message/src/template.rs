//! Shared codec shapes that most concrete kinds are built from.
//!
//! The protocol's kinds cluster around a handful of layouts: a game name
//! followed by a fixed number of integers, a game name followed by strings
//! with optional tails, and variable-length multi tails. Concrete kinds keep
//! their own named payload structs and call these helpers instead of
//! re-deriving the token handling per kind.

use wire::{FieldReader, FieldWriter};

/// Decodes a payload that is exactly a game name (extra tokens ignored,
/// matching the tolerant tokenizer convention of the original protocol).
pub(crate) fn decode_game_only(data: &str) -> Option<String> {
    let mut r = FieldReader::new(data);
    let game = r.next_str().ok()?;
    Some(game.to_owned())
}

/// Decodes `game, int`.
pub(crate) fn decode_game_int(data: &str) -> Option<(String, i32)> {
    let mut r = FieldReader::new(data);
    let game = r.next_str().ok()?.to_owned();
    let v = r.next_int().ok()?;
    Some((game, v))
}

/// Decodes `game, int * N`.
pub(crate) fn decode_game_ints<const N: usize>(data: &str) -> Option<(String, [i32; N])> {
    let mut r = FieldReader::new(data);
    let game = r.next_str().ok()?.to_owned();
    let mut out = [0i32; N];
    for slot in &mut out {
        *slot = r.next_int().ok()?;
    }
    Some((game, out))
}

/// Encodes `game, int * N`.
pub(crate) fn encode_game_ints(game: &str, params: &[i32]) -> String {
    let mut w = FieldWriter::new();
    w.push_str(game);
    for &p in params {
        w.push_int(p);
    }
    w.finish()
}

/// Decodes a multi payload of `game` followed by decimal integers.
pub(crate) fn decode_multi_ints(parts: &[&str]) -> Option<(String, Vec<i32>)> {
    let (game, rest) = parts.split_first()?;
    let mut values = Vec::with_capacity(rest.len());
    for tok in rest {
        values.push(tok.parse().ok()?);
    }
    Some(((*game).to_owned(), values))
}

/// Encodes a multi payload of `game` followed by decimal integers.
pub(crate) fn encode_multi_ints(game: &str, values: &[i32]) -> String {
    let mut w = FieldWriter::multi();
    w.push_str(game);
    for &v in values {
        w.push_int(v);
    }
    w.finish()
}

/// Renders the generic multi form: `game=..|p=..|p=..`, or just the `p=`
/// fields when the payload has no game.
pub(crate) fn render_multi_ints(out: &mut String, game: Option<&str>, values: &[i32]) {
    use std::fmt::Write as _;
    if let Some(game) = game {
        let _ = write!(out, "game={game}");
    }
    for (i, v) in values.iter().enumerate() {
        if i > 0 || game.is_some() {
            out.push('|');
        }
        let _ = write!(out, "p={v}");
    }
}

/// Renders a bracketed name list: `[a, b, c]`.
pub(crate) fn render_name_list(out: &mut String, names: &[String]) {
    out.push('[');
    for (i, n) in names.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(n);
    }
    out.push(']');
}
