//! Token-level reader over one line's payload.

use crate::error::{WireError, WireResult};
use crate::{ARRAY_OPEN, SEP2};

/// A forward-only cursor over the secondary-separated tokens of a payload.
///
/// Empty tokens (from adjacent separators) are skipped, matching the
/// original wire convention: real empty fields travel as the placeholder
/// token instead. All reads are checked and return errors on failure; the
/// reader never panics on malformed input.
#[derive(Debug)]
pub struct FieldReader<'a> {
    tokens: Vec<&'a str>,
    pos: usize,
}

impl<'a> FieldReader<'a> {
    /// Creates a reader over `payload`, splitting on [`SEP2`].
    #[must_use]
    pub fn new(payload: &'a str) -> Self {
        Self::with_separator(payload, SEP2)
    }

    /// Creates a reader splitting on an arbitrary separator character.
    #[must_use]
    pub fn with_separator(payload: &'a str, sep: char) -> Self {
        let tokens = payload.split(sep).filter(|t| !t.is_empty()).collect();
        Self { tokens, pos: 0 }
    }

    /// Creates a reader over tokens that were already split by the caller.
    #[must_use]
    pub fn from_tokens(tokens: Vec<&'a str>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Returns the number of tokens not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.pos
    }

    /// Returns `true` if every token has been consumed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Peeks at the next token without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.pos).copied()
    }

    /// Reads the next token as a raw string.
    pub fn next_str(&mut self) -> WireResult<&'a str> {
        let tok = self.tokens.get(self.pos).copied().ok_or(WireError::UnexpectedEnd {
            expected: "string field",
        })?;
        self.pos += 1;
        Ok(tok)
    }

    /// Reads the next token as a decimal signed integer.
    pub fn next_int(&mut self) -> WireResult<i32> {
        let tok = self.next_tok("integer field")?;
        tok.parse().map_err(|_| WireError::InvalidInt {
            token: tok.to_owned(),
            radix: 10,
        })
    }

    /// Reads the next token as a hexadecimal signed integer (lowercase
    /// digits, optional leading `-`). Used by the fields whose owning kind
    /// renders coordinates in hex.
    pub fn next_hex_int(&mut self) -> WireResult<i32> {
        let tok = self.next_tok("hex integer field")?;
        parse_hex(tok).ok_or_else(|| WireError::InvalidInt {
            token: tok.to_owned(),
            radix: 16,
        })
    }

    /// Reads the next token as a boolean (`true` / `false`).
    pub fn next_bool(&mut self) -> WireResult<bool> {
        let tok = self.next_tok("boolean field")?;
        match tok {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(WireError::InvalidBool {
                token: tok.to_owned(),
            }),
        }
    }

    /// Reads a counted integer array: an open-bracket token carrying the
    /// element count, then exactly that many integers.
    ///
    /// A count that does not match the tokens actually present is a
    /// malformed message, not a partial success.
    pub fn next_int_array(&mut self) -> WireResult<Vec<i32>> {
        let tok = self.next_tok("counted array")?;
        let declared: usize = tok
            .strip_prefix(ARRAY_OPEN)
            .and_then(|n| n.parse().ok())
            .ok_or_else(|| WireError::MissingArrayOpen {
                token: tok.to_owned(),
            })?;
        if self.remaining() < declared {
            return Err(WireError::ArrayCount {
                declared,
                actual: self.remaining(),
            });
        }
        let mut values = Vec::with_capacity(declared);
        for _ in 0..declared {
            values.push(self.next_int()?);
        }
        Ok(values)
    }

    /// Reads all remaining tokens as decimal integers.
    pub fn rest_ints(&mut self) -> WireResult<Vec<i32>> {
        let mut values = Vec::with_capacity(self.remaining());
        while !self.is_empty() {
            values.push(self.next_int()?);
        }
        Ok(values)
    }

    /// Reads all remaining tokens as raw strings.
    #[must_use]
    pub fn rest_strs(&mut self) -> Vec<&'a str> {
        let rest = self.tokens[self.pos..].to_vec();
        self.pos = self.tokens.len();
        rest
    }

    fn next_tok(&mut self, expected: &'static str) -> WireResult<&'a str> {
        let tok = self
            .tokens
            .get(self.pos)
            .copied()
            .ok_or(WireError::UnexpectedEnd { expected })?;
        self.pos += 1;
        Ok(tok)
    }
}

/// Parses a lowercase hex token with optional leading minus sign.
#[must_use]
pub(crate) fn parse_hex(tok: &str) -> Option<i32> {
    let (neg, digits) = match tok.strip_prefix('-') {
        Some(d) => (true, d),
        None => (false, tok),
    };
    let v = i64::from_str_radix(digits, 16).ok()?;
    let v = if neg { -v } else { v };
    i32::try_from(v).ok()
}
