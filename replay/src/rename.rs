//! Renamed message kinds: archived logs may use a kind's historical name.
//!
//! An old name always resolves to exactly one current name; the current
//! kind's label stripper knows how to read both the old and new rendered
//! shapes where they differ.

/// Historical name -> current name.
const RENAMES: &[(&str, &str)] = &[
    ("BuyCardRequest", "BuyDevCardRequest"),
    ("DevCard", "DevCardAction"),
    ("DiscoveryPick", "PickResources"),
    ("Join", "JoinChannel"),
    ("JoinAuth", "JoinChannelAuth"),
    ("JoinGameRequest", "BotJoinGameRequest"),
    ("Leave", "LeaveChannel"),
    ("Members", "ChannelMembers"),
    ("MonopolyPick", "PickResourceType"),
    ("TextMsg", "ChannelTextMsg"),
];

/// Resolves a possibly-historical kind name to its current name.
#[must_use]
pub fn current_name_for(name: &str) -> &str {
    RENAMES
        .iter()
        .find(|(old, _)| *old == name)
        .map_or(name, |(_, current)| current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn old_names_resolve() {
        assert_eq!(current_name_for("DevCard"), "DevCardAction");
        assert_eq!(current_name_for("Members"), "ChannelMembers");
    }

    #[test]
    fn current_names_pass_through() {
        assert_eq!(current_name_for("DevCardAction"), "DevCardAction");
        assert_eq!(current_name_for("NotAKind"), "NotAKind");
    }

    #[test]
    fn every_rename_targets_a_registered_kind() {
        for (old, current) in RENAMES {
            assert!(
                message::type_for_name(current).is_some(),
                "{old} -> {current} points at an unregistered kind"
            );
            assert!(
                message::type_for_name(old).is_none(),
                "{old} is both a historical and a current name"
            );
        }
    }
}
