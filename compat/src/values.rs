//! Versioned values inside still-understood kinds: player-element news
//! actions and the development card renumbering.

use message::{dev_card, element_action};

use crate::version::ProtocolVersion;

/// News-flagged element actions first understood at this version.
pub const VERSION_FOR_ELEMENT_NEWS: ProtocolVersion = ProtocolVersion::V2_0_00;

/// Development card types 0 and 9 swapped meaning at this version.
pub const VERSION_FOR_RENUMBERED_DEVCARDS: ProtocolVersion = ProtocolVersion::V2_0_00;

/// Reports whether a peer at `version` recognizes a player-element action
/// code, including the negative news forms.
#[must_use]
pub fn element_action_valid_at(action: i32, version: ProtocolVersion) -> bool {
    match action {
        element_action::SET | element_action::GAIN | element_action::LOSE => true,
        element_action::SET_NEWS | element_action::GAIN_NEWS | element_action::LOSE_NEWS => {
            version >= VERSION_FOR_ELEMENT_NEWS
        }
        _ => false,
    }
}

/// Substitutes the plain action for a news-flagged one when the peer
/// predates the news flag; the update still applies, only the callout is
/// lost. Unknown codes are returned unchanged for the caller to reject.
#[must_use]
pub fn element_action_fallback_for(action: i32, version: ProtocolVersion) -> i32 {
    if element_action_valid_at(action, version) {
        return action;
    }
    match action {
        element_action::SET_NEWS => element_action::SET,
        element_action::GAIN_NEWS => element_action::GAIN,
        element_action::LOSE_NEWS => element_action::LOSE,
        other => other,
    }
}

/// Maps a development card type to the numbering a peer at `version`
/// uses. Card types 0 (unknown) and 9 (knight) swap below the
/// renumbering version; all other types are unchanged.
#[must_use]
pub fn devcard_type_for_version(card_type: i32, version: ProtocolVersion) -> i32 {
    if version >= VERSION_FOR_RENUMBERED_DEVCARDS {
        card_type
    } else {
        swap_legacy_devcard(card_type)
    }
}

/// Maps a development card type received from a peer at `version` back to
/// the current numbering. Symmetric with [`devcard_type_for_version`].
#[must_use]
pub fn devcard_type_from_version(card_type: i32, version: ProtocolVersion) -> i32 {
    devcard_type_for_version(card_type, version)
}

const fn swap_legacy_devcard(card_type: i32) -> i32 {
    match card_type {
        dev_card::UNKNOWN => dev_card::UNKNOWN_LEGACY,
        dev_card::KNIGHT => dev_card::KNIGHT_LEGACY,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn news_actions_gated_at_2000() {
        assert!(element_action_valid_at(
            element_action::GAIN_NEWS,
            ProtocolVersion::V2_0_00
        ));
        assert!(!element_action_valid_at(
            element_action::GAIN_NEWS,
            ProtocolVersion::V1_1_19
        ));
        assert_eq!(
            element_action_fallback_for(element_action::GAIN_NEWS, ProtocolVersion::V1_1_19),
            element_action::GAIN
        );
        assert_eq!(
            element_action_fallback_for(element_action::GAIN, ProtocolVersion::V1_0_00),
            element_action::GAIN
        );
    }

    #[test]
    fn devcard_swap_is_symmetric() {
        let old = ProtocolVersion::new(1118);
        for ct in dev_card::UNKNOWN..=dev_card::KNIGHT {
            let sent = devcard_type_for_version(ct, old);
            assert_eq!(devcard_type_from_version(sent, old), ct);
        }
        assert_eq!(devcard_type_for_version(dev_card::KNIGHT, old), 0);
        assert_eq!(devcard_type_for_version(dev_card::UNKNOWN, old), 9);
        assert_eq!(
            devcard_type_for_version(dev_card::KNIGHT, ProtocolVersion::V2_0_00),
            dev_card::KNIGHT
        );
    }
}
