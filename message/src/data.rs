//! Shared value types carried inside message payloads.

use std::fmt::Write as _;

use wire::{FieldReader, FieldWriter, WireResult};

/// Resource type codes. Code 0 is unused so that resource codes line up
/// with the land hex type codes.
pub mod resource {
    pub const CLAY: i32 = 1;
    pub const ORE: i32 = 2;
    pub const SHEEP: i32 = 3;
    pub const WHEAT: i32 = 4;
    pub const WOOD: i32 = 5;
    /// Hidden or unrevealed resources, countable but typeless.
    pub const UNKNOWN: i32 = 6;
}

/// A bundle of resource amounts, one slot per known type plus an
/// unknown-type slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResourceSet {
    pub clay: i32,
    pub ore: i32,
    pub sheep: i32,
    pub wheat: i32,
    pub wood: i32,
    pub unknown: i32,
}

impl ResourceSet {
    /// Creates a set from per-type amounts.
    #[must_use]
    pub const fn new(clay: i32, ore: i32, sheep: i32, wheat: i32, wood: i32, unknown: i32) -> Self {
        Self {
            clay,
            ore,
            sheep,
            wheat,
            wood,
            unknown,
        }
    }

    /// Amount of one resource type, 0 for out-of-range codes.
    #[must_use]
    pub const fn amount(&self, rtype: i32) -> i32 {
        match rtype {
            resource::CLAY => self.clay,
            resource::ORE => self.ore,
            resource::SHEEP => self.sheep,
            resource::WHEAT => self.wheat,
            resource::WOOD => self.wood,
            resource::UNKNOWN => self.unknown,
            _ => 0,
        }
    }

    /// Adds `amount` of `rtype`; out-of-range codes count as unknown.
    pub fn add(&mut self, amount: i32, rtype: i32) {
        match rtype {
            resource::CLAY => self.clay += amount,
            resource::ORE => self.ore += amount,
            resource::SHEEP => self.sheep += amount,
            resource::WHEAT => self.wheat += amount,
            resource::WOOD => self.wood += amount,
            _ => self.unknown += amount,
        }
    }

    /// Sets the amount of one resource type.
    pub fn set_amount(&mut self, amount: i32, rtype: i32) {
        match rtype {
            resource::CLAY => self.clay = amount,
            resource::ORE => self.ore = amount,
            resource::SHEEP => self.sheep = amount,
            resource::WHEAT => self.wheat = amount,
            resource::WOOD => self.wood = amount,
            resource::UNKNOWN => self.unknown = amount,
            _ => {}
        }
    }

    /// Returns `true` if every slot is zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.clay == 0
            && self.ore == 0
            && self.sheep == 0
            && self.wheat == 0
            && self.wood == 0
            && self.unknown == 0
    }

    /// Number of known resource types with a non-zero amount.
    #[must_use]
    pub fn known_type_count(&self) -> usize {
        [self.clay, self.ore, self.sheep, self.wheat, self.wood]
            .iter()
            .filter(|&&a| a != 0)
            .count()
    }

    /// Total of the known-type slots.
    #[must_use]
    pub const fn known_total(&self) -> i32 {
        self.clay + self.ore + self.sheep + self.wheat + self.wood
    }

    /// Writes the five known amounts as fields, in type-code order.
    pub fn encode_known(&self, w: &mut FieldWriter) {
        w.push_int(self.clay);
        w.push_int(self.ore);
        w.push_int(self.sheep);
        w.push_int(self.wheat);
        w.push_int(self.wood);
    }

    /// Writes all six amounts as fields.
    pub fn encode_all(&self, w: &mut FieldWriter) {
        self.encode_known(w);
        w.push_int(self.unknown);
    }

    /// Reads the five known amounts.
    pub fn decode_known(r: &mut FieldReader<'_>) -> WireResult<Self> {
        Ok(Self::new(
            r.next_int()?,
            r.next_int()?,
            r.next_int()?,
            r.next_int()?,
            r.next_int()?,
            0,
        ))
    }

    /// Reads all six amounts.
    pub fn decode_all(r: &mut FieldReader<'_>) -> WireResult<Self> {
        let mut rs = Self::decode_known(r)?;
        rs.unknown = r.next_int()?;
        Ok(rs)
    }

    /// Renders the labeled human-readable form.
    pub fn render(&self, out: &mut String) {
        let _ = write!(
            out,
            "clay={}|ore={}|sheep={}|wheat={}|wood={}|unknown={}",
            self.clay, self.ore, self.sheep, self.wheat, self.wood, self.unknown
        );
    }
}

/// One player's standing trade offer: who offers, which seats it is
/// addressed to, and the two resource bundles.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TradeOffer {
    pub game: String,
    pub from: i32,
    pub to: Vec<bool>,
    pub give: ResourceSet,
    pub get: ResourceSet,
}

impl TradeOffer {
    /// Renders the labeled human-readable form.
    pub fn render(&self, out: &mut String) {
        let _ = write!(out, "game={}|from={}|to=", self.game, self.from);
        for (i, t) in self.to.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            let _ = write!(out, "{t}");
        }
        out.push_str("|give=");
        self.give.render(out);
        out.push_str("|get=");
        self.get.render(out);
    }
}

/// Lock state of one seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SeatLockState {
    Unlocked,
    Locked,
    /// Unlocked, and additionally cleared of its bot when the board resets.
    ClearOnReset,
}

impl SeatLockState {
    /// The on-wire token for this state.
    #[must_use]
    pub const fn wire_token(self) -> &'static str {
        match self {
            Self::Locked => "true",
            Self::Unlocked => "false",
            Self::ClearOnReset => "clear",
        }
    }

    /// Parses an on-wire token.
    #[must_use]
    pub fn from_wire_token(tok: &str) -> Option<Self> {
        match tok {
            "true" => Some(Self::Locked),
            "false" => Some(Self::Unlocked),
            "clear" => Some(Self::ClearOnReset),
            _ => None,
        }
    }

    /// The symbolic name used by the human-readable rendering.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Locked => "LOCKED",
            Self::Unlocked => "UNLOCKED",
            Self::ClearOnReset => "CLEAR_ON_RESET",
        }
    }

    /// Parses a symbolic name back from a rendering.
    #[must_use]
    pub fn from_symbol(sym: &str) -> Option<Self> {
        match sym {
            "LOCKED" => Some(Self::Locked),
            "UNLOCKED" => Some(Self::Unlocked),
            "CLEAR_ON_RESET" => Some(Self::ClearOnReset),
            _ => None,
        }
    }
}
