//! Protocol version numbers and the per-kind version gate.

use std::fmt;

/// A protocol version, written as in `1119` for release 1.1.19.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProtocolVersion(u16);

impl ProtocolVersion {
    /// First release of the protocol.
    pub const V1_0_00: Self = Self(1000);
    /// Board resets, versioned handshake.
    pub const V1_1_00: Self = Self(1100);
    /// Expanded status values.
    pub const V1_1_06: Self = Self(1106);
    /// Per-game options.
    pub const V1_1_07: Self = Self(1107);
    /// Six-player board layout.
    pub const V1_1_08: Self = Self(1108);
    /// Per-player statistics.
    pub const V1_1_09: Self = Self(1109);
    /// Free debug placement.
    pub const V1_1_12: Self = Self(1112);
    /// Simple requests.
    pub const V1_1_18: Self = Self(1118);
    /// Dedicated auth request, simple actions.
    pub const V1_1_19: Self = Self(1119);
    /// Account-admin statuses.
    pub const V1_1_20: Self = Self(1120);
    /// Nickname reassignment status.
    pub const V1_2_00: Self = Self(1200);
    /// Sea board, element messages, renumbered card types, i18n.
    pub const V2_0_00: Self = Self(2000);
    /// Robbery reports.
    pub const V2_4_50: Self = Self(2450);
    /// Decline replies, bot data checks.
    pub const V2_5_00: Self = Self(2500);
    /// Undo support, last-action records, ship routes.
    pub const V2_7_00: Self = Self(2700);

    /// Wraps a raw version number.
    #[must_use]
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// The raw version number.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lowest protocol version that understands a message kind, or `None` for
/// an unregistered type id. The sender must not emit the kind to a peer
/// below this threshold; enforcement belongs to the session layer.
#[must_use]
pub fn minimum_version(type_id: u16) -> Option<ProtocolVersion> {
    message::minimum_version(type_id).map(ProtocolVersion::new)
}

/// Highest protocol version still using a kind, for kinds superseded by a
/// newer representation. `None` means open-ended (or unregistered).
#[must_use]
pub fn maximum_version(type_id: u16) -> Option<ProtocolVersion> {
    message::maximum_version(type_id).map(ProtocolVersion::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_ordering() {
        assert!(ProtocolVersion::V1_1_19 < ProtocolVersion::V2_0_00);
        assert!(ProtocolVersion::new(1111) > ProtocolVersion::V1_1_00);
    }

    #[test]
    fn kind_gates_come_from_the_registry() {
        assert_eq!(minimum_version(1102), Some(ProtocolVersion::V2_4_50));
        assert_eq!(minimum_version(1009), Some(ProtocolVersion::V1_0_00));
        assert_eq!(minimum_version(4242), None);
        assert_eq!(maximum_version(1047), Some(ProtocolVersion::new(1999)));
        assert_eq!(maximum_version(1009), None);
    }
}
