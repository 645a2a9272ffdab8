//! Free-text kinds carried behind sub-separators.

use std::fmt::Write as _;

/// Game chat text from a player (and, before protocol 2000, from the
/// server too).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameTextMsg {
    pub game: String,
    pub nickname: String,
    pub text: String,
}

impl GameTextMsg {
    /// Nickname used for pre-2000 server announcements.
    pub const SERVER_NICKNAME: &'static str = "Server";

    const TEXT_SEP: char = '\0';

    pub(crate) fn encode_payload(&self) -> String {
        format!(
            "{}{}{}{}{}",
            self.game,
            Self::TEXT_SEP,
            self.nickname,
            Self::TEXT_SEP,
            self.text
        )
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let mut it = data.splitn(3, Self::TEXT_SEP);
        let game = it.next()?.to_owned();
        let nickname = it.next()?.to_owned();
        let text = it.next()?.to_owned();
        Some(Self {
            game,
            nickname,
            text,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!(
            "game={}|nickname={}|text={}",
            self.game, self.nickname, self.text
        )
    }

    pub(crate) fn strip_labels(body: &str) -> Option<String> {
        super::channel::strip_text_fields(body, "game=", "|nickname=", "|text=", Self::TEXT_SEP)
    }
}

/// Game text announcements from the server (protocol 2000+). The single
/// sub-separator is a control character no chat text can contain.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameServerText {
    pub game: String,
    pub text: String,
}

impl GameServerText {
    const TEXT_SEP: char = '\u{1}';

    pub(crate) fn encode_payload(&self) -> String {
        format!("{}{}{}", self.game, Self::TEXT_SEP, self.text)
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let (game, text) = data.split_once(Self::TEXT_SEP)?;
        Some(Self {
            game: game.to_owned(),
            text: text.to_owned(),
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!("game={}|text={}", self.game, self.text)
    }

    pub(crate) fn strip_labels(body: &str) -> Option<String> {
        let rest = body.strip_prefix("game=")?;
        let i = rest.find("|text=")?;
        Some(format!(
            "{}{}{}",
            &rest[..i],
            Self::TEXT_SEP,
            &rest[i + 6..]
        ))
    }
}

/// A player was awarded special victory points; the description text may
/// contain the secondary separator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SvpTextMessage {
    pub game: String,
    pub player_number: i32,
    pub svp: i32,
    pub description: String,
}

impl SvpTextMessage {
    /// Validates the description safety invariant.
    pub fn new(game: String, player_number: i32, svp: i32, description: String) -> Option<Self> {
        if !wire::is_single_line_and_safe_allowing_seps(&description, true)
            || description.contains('|')
        {
            return None;
        }
        Some(Self {
            game,
            player_number,
            svp,
            description,
        })
    }

    pub(crate) fn encode_payload(&self) -> String {
        format!(
            "{},{},{},{}",
            self.game, self.player_number, self.svp, self.description
        )
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let mut it = data.splitn(4, ',');
        let game = it.next()?.to_owned();
        let player_number = it.next()?.parse().ok()?;
        let svp = it.next()?.parse().ok()?;
        let description = it.next()?.to_owned();
        Self::new(game, player_number, svp, description)
    }

    pub(crate) fn render_payload(&self) -> String {
        format!(
            "game={}|pn={}|svp={}|desc={}",
            self.game, self.player_number, self.svp, self.description
        )
    }
}

/// Whether the most recent action can be undone, with an optional
/// localized reason.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UndoNotAllowedReasonText {
    pub game: String,
    pub not_allowed: bool,
    pub reason: Option<String>,
}

impl UndoNotAllowedReasonText {
    /// Validates the reason-text invariant: present means non-empty and
    /// single-line.
    pub fn new(game: String, not_allowed: bool, reason: Option<String>) -> Option<Self> {
        if let Some(r) = &reason {
            if r.is_empty() || !wire::is_single_line_and_safe_allowing_seps(r, true) {
                return None;
            }
        }
        Some(Self {
            game,
            not_allowed,
            reason,
        })
    }

    pub(crate) fn encode_payload(&self) -> String {
        let mut out = format!("{},{}", self.game, i32::from(self.not_allowed));
        if let Some(reason) = &self.reason {
            let _ = write!(out, ",{reason}");
        }
        out
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let mut it = data.splitn(3, ',');
        let game = it.next()?.to_owned();
        let flag: i32 = it.next()?.parse().ok()?;
        if flag != 0 && flag != 1 {
            return None;
        }
        let reason = it.next().map(ToOwned::to_owned);
        Self::new(game, flag == 1, reason)
    }

    pub(crate) fn render_payload(&self) -> String {
        let mut out = format!(
            "game={}|isNotAllowed={}",
            self.game,
            i32::from(self.not_allowed)
        );
        if let Some(reason) = &self.reason {
            let _ = write!(out, "|reason={reason}");
        }
        out
    }
}

/// Reply declining a player's request, with an optional detail pair and
/// free-text remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DeclinePlayerRequest {
    pub game: String,
    pub game_state: i32,
    pub reason_code: i32,
    pub detail1: i32,
    pub detail2: i32,
    pub reason_text: Option<String>,
}

impl DeclinePlayerRequest {
    pub const REASON_OTHER: i32 = 0;
    pub const REASON_NOT_THIS_GAME: i32 = 1;
    pub const REASON_NOT_YOUR_TURN: i32 = 2;
    pub const REASON_NOT_NOW: i32 = 3;
    pub const REASON_LOCATION: i32 = 4;
    pub const REASON_SPECIFICS: i32 = 5;

    fn has_details(&self) -> bool {
        self.detail1 != 0 || self.detail2 != 0 || self.reason_text.is_some()
    }

    pub(crate) fn encode_payload(&self) -> String {
        let mut out = format!("{},{},{}", self.game, self.game_state, self.reason_code);
        if self.has_details() {
            let _ = write!(out, ",{},{}", self.detail1, self.detail2);
            if let Some(text) = &self.reason_text {
                let _ = write!(out, ",{text}");
            }
        }
        out
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let mut it = data.splitn(6, ',');
        let game = it.next()?.to_owned();
        let game_state = it.next()?.parse().ok()?;
        let reason_code = it.next()?.parse().ok()?;
        let (detail1, detail2) = match it.next() {
            Some(d1) => (d1.parse().ok()?, it.next()?.parse().ok()?),
            None => (0, 0),
        };
        let reason_text = it.next().map(ToOwned::to_owned);
        Some(Self {
            game,
            game_state,
            reason_code,
            detail1,
            detail2,
            reason_text,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        let mut out = format!(
            "game={}|state={}|reason={}",
            self.game, self.game_state, self.reason_code
        );
        if self.has_details() {
            let _ = write!(out, "|detail1={}|detail2={}", self.detail1, self.detail2);
            if let Some(text) = &self.reason_text {
                let _ = write!(out, "|text={text}");
            }
        }
        out
    }

    pub(crate) fn strip_labels(body: &str) -> Option<String> {
        // the trailing free text may contain '=' and ','; keep it whole
        let (head, text) = match body.find("|text=") {
            Some(i) => (&body[..i], Some(&body[i + 6..])),
            None => (body, None),
        };
        let mut out = crate::strip::strip_attrib_names(head);
        if let Some(text) = text {
            let _ = write!(out, ",{text}");
        }
        Some(out)
    }
}
