//! Status value validity windows and the fallback chain.

use message::StatusMessage;

use crate::error::{CompatError, CompatResult};
use crate::version::ProtocolVersion;

/// Reports whether a peer at `version` recognizes `status_value`.
///
/// The windows follow the release history exactly: each release that
/// added status values extends the understood range, and a handful of
/// in-between releases shipped without the newest values of their era.
#[must_use]
pub fn status_valid_at(status_value: i32, version: ProtocolVersion) -> bool {
    let v = version.raw();
    match v {
        1106 => status_value <= StatusMessage::SV_ACCT_NOT_CREATED_ERR,
        1107..=1109 => status_value <= StatusMessage::SV_NEWGAME_NAME_TOO_LONG,
        1110 => status_value <= StatusMessage::SV_NEWCHANNEL_TOO_MANY_CREATED,
        1119 => status_value <= StatusMessage::SV_ACCT_NOT_CREATED_DENIED,
        1120 => status_value <= StatusMessage::SV_ACCT_CREATED_OK_FIRST_ONE,
        1200 => status_value <= StatusMessage::SV_OK_SET_NICKNAME,
        _ => {
            if v < 1106 {
                status_value == StatusMessage::SV_OK
            } else if v < 1119 {
                // 1111 - 1118
                status_value < StatusMessage::SV_PW_REQUIRED
            } else if v < 2000 {
                status_value < StatusMessage::SV_OK_DEBUG_MODE_ON
            } else {
                status_value <= StatusMessage::SV_MAX
            }
        }
    }
}

/// Substitutes an older, semantically-closest status value the peer
/// recognizes.
///
/// Each table entry points at a strictly older value, so the walk always
/// terminates; the nickname-reassignment status deliberately has no
/// substitute, because silently reporting plain success would leave the
/// peer authenticated under a name it does not know about.
pub fn status_fallback_for(
    status_value: i32,
    version: ProtocolVersion,
) -> CompatResult<i32> {
    let mut sv = status_value;
    while !status_valid_at(sv, version) {
        sv = match sv {
            StatusMessage::SV_OK_DEBUG_MODE_ON => StatusMessage::SV_OK,
            StatusMessage::SV_PW_REQUIRED => StatusMessage::SV_PW_WRONG,
            StatusMessage::SV_ACCT_CREATED_OK_FIRST_ONE => StatusMessage::SV_ACCT_CREATED_OK,
            StatusMessage::SV_OK_SET_NICKNAME => {
                return Err(CompatError::NoFallback {
                    value: status_value,
                    peer_version: version,
                })
            }
            _ => {
                if version.raw() >= 1106 {
                    StatusMessage::SV_NOT_OK_GENERIC
                } else {
                    StatusMessage::SV_OK
                }
            }
        };
    }
    Ok(sv)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_peers_understand_only_ok() {
        let v = ProtocolVersion::new(1005);
        assert!(status_valid_at(StatusMessage::SV_OK, v));
        assert!(!status_valid_at(StatusMessage::SV_NOT_OK_GENERIC, v));
    }

    #[test]
    fn newer_value_invalid_then_falls_back() {
        let v = ProtocolVersion::V1_1_19;
        let sv = StatusMessage::SV_ACCT_CREATED_OK_FIRST_ONE;
        assert!(!status_valid_at(sv, v));
        assert_eq!(
            status_fallback_for(sv, v),
            Ok(StatusMessage::SV_ACCT_CREATED_OK)
        );
    }

    #[test]
    fn fallback_recurses_to_generic_for_ancient_peers() {
        // two hops: first to the documented older equivalent, then to the
        // only value a pre-1106 peer understands
        let v = ProtocolVersion::new(1100);
        assert_eq!(
            status_fallback_for(StatusMessage::SV_ACCT_CREATED_OK_FIRST_ONE, v),
            Ok(StatusMessage::SV_OK)
        );
    }

    #[test]
    fn nickname_status_has_no_fallback() {
        let v = ProtocolVersion::V1_1_19;
        assert_eq!(
            status_fallback_for(StatusMessage::SV_OK_SET_NICKNAME, v),
            Err(CompatError::NoFallback {
                value: StatusMessage::SV_OK_SET_NICKNAME,
                peer_version: v,
            })
        );
    }

    #[test]
    fn valid_values_pass_through_unchanged() {
        let v = ProtocolVersion::V2_0_00;
        for sv in 0..=StatusMessage::SV_MAX {
            assert_eq!(status_fallback_for(sv, v), Ok(sv));
        }
    }
}
