//! Compressed range-list encoding for sparse coordinate sets.

use crate::error::{WireError, WireResult};
use crate::reader::parse_hex;
use crate::FieldWriter;

/// A sparse set of non-negative coordinates stored in the wire's compressed
/// flat form: a value immediately followed by its own negation closes an
/// inclusive range, any other value stands alone.
///
/// `[0xc07, -0xc0b, 0xa03]` is the range `0xc07..=0xc0b` plus the single
/// coordinate `0xa03`. The flat form is kept as given so re-encoding is
/// byte-identical; [`RangeList::expand`] enumerates the members.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RangeList {
    values: Vec<i32>,
}

impl RangeList {
    /// Wraps an already-compressed flat sequence after validating its
    /// range pairs.
    pub fn new(values: Vec<i32>) -> WireResult<Self> {
        let mut prev: Option<i32> = None;
        for &v in &values {
            if v < 0 {
                let open = prev.ok_or(WireError::InvalidRangePair { open: 0, close: v })?;
                if open < 0 || -v < open {
                    return Err(WireError::InvalidRangePair { open, close: v });
                }
            }
            prev = Some(v);
        }
        Ok(Self { values })
    }

    /// Builds the compressed form from a sorted slice of distinct
    /// coordinates, folding runs of consecutive values into ranges.
    #[must_use]
    pub fn from_sorted(coords: &[i32]) -> Self {
        let mut values = Vec::new();
        let mut i = 0;
        while i < coords.len() {
            let start = coords[i];
            let mut j = i;
            while j + 1 < coords.len() && coords[j + 1] == coords[j] + 1 {
                j += 1;
            }
            values.push(start);
            if j > i {
                values.push(-coords[j]);
            }
            i = j + 1;
        }
        Self { values }
    }

    /// Returns the compressed flat sequence.
    #[must_use]
    pub fn as_flat(&self) -> &[i32] {
        &self.values
    }

    /// Returns `true` if the list holds no coordinates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Enumerates every coordinate in the set, ranges included.
    #[must_use]
    pub fn expand(&self) -> Vec<i32> {
        let mut out = Vec::new();
        let mut i = 0;
        while i < self.values.len() {
            let v = self.values[i];
            if i + 1 < self.values.len() && self.values[i + 1] < 0 {
                let end = -self.values[i + 1];
                out.extend(v..=end);
                i += 2;
            } else {
                out.push(v);
                i += 1;
            }
        }
        out
    }

    /// Writes the list as hex tokens.
    pub fn encode(&self, w: &mut FieldWriter) {
        for &v in &self.values {
            w.push_hex(v);
        }
    }

    /// Parses hex tokens into a validated list. A sole `0` token decodes as
    /// the explicit empty list (the sentinel pad used when an empty list
    /// would otherwise end the line with no tokens).
    pub fn decode_tokens(tokens: &[&str]) -> WireResult<Self> {
        let mut values = Vec::with_capacity(tokens.len());
        for tok in tokens {
            let v = parse_hex(tok).ok_or_else(|| WireError::InvalidInt {
                token: (*tok).to_owned(),
                radix: 16,
            })?;
            if v != 0 {
                values.push(v);
            }
        }
        Self::new(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_form_is_preserved() {
        let rl = RangeList::new(vec![0xc07, -0xc0b, 0xa03]).unwrap();
        assert_eq!(rl.as_flat(), &[0xc07, -0xc0b, 0xa03]);
    }

    #[test]
    fn expand_mixes_ranges_and_singles() {
        let rl = RangeList::new(vec![5, -8, 11]).unwrap();
        assert_eq!(rl.expand(), vec![5, 6, 7, 8, 11]);
    }

    #[test]
    fn from_sorted_compresses_runs() {
        let rl = RangeList::from_sorted(&[5, 6, 7, 8, 11]);
        assert_eq!(rl.as_flat(), &[5, -8, 11]);
    }

    #[test]
    fn from_sorted_expand_round_trip() {
        let coords = vec![1, 2, 3, 9, 12, 13];
        let rl = RangeList::from_sorted(&coords);
        assert_eq!(rl.expand(), coords);
    }

    #[test]
    fn rejects_close_without_open() {
        assert!(matches!(
            RangeList::new(vec![-5]),
            Err(WireError::InvalidRangePair { .. })
        ));
    }

    #[test]
    fn rejects_close_below_open() {
        assert!(matches!(
            RangeList::new(vec![9, -5]),
            Err(WireError::InvalidRangePair { open: 9, close: -5 })
        ));
    }

    #[test]
    fn decode_hex_tokens() {
        let rl = RangeList::decode_tokens(&["c07", "-c0b", "a03"]).unwrap();
        assert_eq!(rl.as_flat(), &[0xc07, -0xc0b, 0xa03]);
    }

    #[test]
    fn decode_zero_pad_is_empty() {
        let rl = RangeList::decode_tokens(&["0"]).unwrap();
        assert!(rl.is_empty());
    }

    #[test]
    fn encode_emits_hex() {
        let rl = RangeList::new(vec![0xe04, -0xe0a]).unwrap();
        let mut w = FieldWriter::new();
        rl.encode(&mut w);
        assert_eq!(w.finish(), "e04,-e0a");
    }
}
