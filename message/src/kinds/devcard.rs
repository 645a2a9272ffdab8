//! Development card and inventory item kinds.

use std::fmt::Write as _;

use wire::{FieldReader, FieldWriter};

use crate::template;

/// Development card type codes. Codes 0 and 9 were renumbered at protocol
/// 2000; see the compatibility layer for the legacy swap.
pub mod dev_card {
    pub const UNKNOWN: i32 = 0;
    pub const ROADS: i32 = 1;
    pub const DISCOVERY: i32 = 2;
    pub const MONOPOLY: i32 = 3;
    pub const CAPITOL: i32 = 4;
    pub const LIBRARY: i32 = 5;
    pub const UNIVERSITY: i32 = 6;
    pub const TEMPLE: i32 = 7;
    pub const TOWER: i32 = 8;
    pub const KNIGHT: i32 = 9;

    /// Legacy code for [`UNKNOWN`] before protocol 2000.
    pub const UNKNOWN_LEGACY: i32 = 9;
    /// Legacy code for [`KNIGHT`] before protocol 2000.
    pub const KNIGHT_LEGACY: i32 = 0;
}

/// Current player wants to buy a development card.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BuyDevCardRequest {
    pub game: String,
}

impl BuyDevCardRequest {
    pub(crate) fn encode_payload(&self) -> String {
        self.game.clone()
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        template::decode_game_only(data).map(|game| Self { game })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!("game={}", self.game)
    }
}

/// Actions on a player's development cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DevCardActionType {
    Draw,
    Play,
    AddNew,
    AddOld,
    CannotPlay,
}

impl DevCardActionType {
    /// The numeric action code on the wire.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Draw => 0,
            Self::Play => 1,
            Self::AddNew => 2,
            Self::AddOld => 3,
            Self::CannotPlay => 4,
        }
    }

    /// Parses a wire action code.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Draw),
            1 => Some(Self::Play),
            2 => Some(Self::AddNew),
            3 => Some(Self::AddOld),
            4 => Some(Self::CannotPlay),
            _ => None,
        }
    }

    /// The symbolic name used by the rendering.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Draw => "DRAW",
            Self::Play => "PLAY",
            Self::AddNew => "ADD_NEW",
            Self::AddOld => "ADD_OLD",
            Self::CannotPlay => "CANNOT_PLAY",
        }
    }

    /// Parses a symbolic name from a rendering.
    #[must_use]
    pub fn from_symbol(sym: &str) -> Option<Self> {
        match sym {
            "DRAW" => Some(Self::Draw),
            "PLAY" => Some(Self::Play),
            "ADD_NEW" => Some(Self::AddNew),
            "ADD_OLD" => Some(Self::AddOld),
            "CANNOT_PLAY" => Some(Self::CannotPlay),
            _ => None,
        }
    }
}

/// A development card moved in or out of a player's hand. The end-of-game
/// form carries several card types at once.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DevCardAction {
    pub game: String,
    pub player_number: i32,
    pub action: DevCardActionType,
    pub card_types: Vec<i32>,
}

impl DevCardAction {
    /// Single-card form.
    #[must_use]
    pub fn single(game: String, player_number: i32, action: DevCardActionType, card_type: i32) -> Self {
        Self {
            game,
            player_number,
            action,
            card_types: vec![card_type],
        }
    }

    /// The card type of the single-card form.
    #[must_use]
    pub fn card_type(&self) -> Option<i32> {
        match self.card_types.as_slice() {
            [ct] => Some(*ct),
            _ => None,
        }
    }

    pub(crate) fn encode_payload(&self) -> String {
        let mut w = FieldWriter::new();
        w.push_str(&self.game);
        w.push_int(self.player_number);
        w.push_int(self.action.code());
        for &ct in &self.card_types {
            w.push_int(ct);
        }
        w.finish()
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let mut r = FieldReader::new(data);
        let game = r.next_str().ok()?.to_owned();
        let player_number = r.next_int().ok()?;
        let action = DevCardActionType::from_code(r.next_int().ok()?)?;
        let card_types = r.rest_ints().ok()?;
        if card_types.is_empty() {
            return None;
        }
        Some(Self {
            game,
            player_number,
            action,
            card_types,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        let mut out = format!(
            "game={}|playerNum={}|actionType={}",
            self.game,
            self.player_number,
            self.action.symbol()
        );
        if let Some(ct) = self.card_type() {
            let _ = write!(out, "|cardType={ct}");
        } else {
            out.push_str("|cardTypes=[");
            for (i, ct) in self.card_types.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                let _ = write!(out, "{ct}");
            }
            out.push(']');
        }
        out
    }

    pub(crate) fn strip_labels(body: &str) -> Option<String> {
        let game = body.strip_prefix("game=")?;
        let game = &game[..game.find('|')?];
        let pn = super::trade::labeled_field(body, "|playerNum=")?;
        let action = super::trade::labeled_field(body, "|actionType=")?;
        let mut out = format!("{game},{pn}");

        // pre-renumbering renderings used the numeric action code, and the
        // legacy card-type numbering along with it
        let legacy = action.chars().next().is_some_and(|c| c.is_ascii_digit());
        if legacy {
            let _ = write!(out, ",{action}");
        } else {
            let _ = write!(out, ",{}", DevCardActionType::from_symbol(action)?.code());
        }

        let fixup = |ct: i32| -> i32 {
            if legacy {
                match ct {
                    dev_card::KNIGHT_LEGACY => dev_card::KNIGHT,
                    dev_card::UNKNOWN_LEGACY => dev_card::UNKNOWN,
                    other => other,
                }
            } else {
                ct
            }
        };
        if let Some(cts) = super::trade::labeled_field(body, "|cardTypes=") {
            let inner = cts.strip_prefix('[').and_then(|c| c.strip_suffix(']'))?;
            for ct in inner.split(", ") {
                let _ = write!(out, ",{}", fixup(ct.parse().ok()?));
            }
        } else {
            let ct = super::trade::labeled_field(body, "|cardType=")?;
            let _ = write!(out, ",{}", fixup(ct.parse().ok()?));
        }
        Some(out)
    }
}

/// How many development cards remain in the bank. Superseded by the
/// game-elements form at protocol 2000.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DevCardCount {
    pub game: String,
    pub count: i32,
}

impl DevCardCount {
    pub(crate) fn encode_payload(&self) -> String {
        template::encode_game_ints(&self.game, &[self.count])
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        template::decode_game_int(data).map(|(game, count)| Self { game, count })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!("game={}|numDevCards={}", self.game, self.count)
    }
}

/// Whether this player has already played a development card this turn.
/// Superseded by the player-element form at protocol 2000.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SetPlayedDevCard {
    pub game: String,
    pub player_number: i32,
    pub played: bool,
}

impl SetPlayedDevCard {
    pub(crate) fn encode_payload(&self) -> String {
        let mut w = FieldWriter::new();
        w.push_str(&self.game);
        w.push_int(self.player_number);
        w.push_bool(self.played);
        w.finish()
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let mut r = FieldReader::new(data);
        let game = r.next_str().ok()?.to_owned();
        let player_number = r.next_int().ok()?;
        let played = r.next_bool().ok()?;
        Some(Self {
            game,
            player_number,
            played,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!(
            "game={}|playerNumber={}|playedDevCard={}",
            self.game, self.player_number, self.played
        )
    }
}

/// Current player wants to play this development card.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlayDevCardRequest {
    pub game: String,
    pub card_type: i32,
}

impl PlayDevCardRequest {
    pub(crate) fn encode_payload(&self) -> String {
        template::encode_game_ints(&self.game, &[self.card_type])
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        template::decode_game_int(data).map(|(game, ct)| Self {
            game,
            card_type: ct,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!("game={}|devCard={}", self.game, self.card_type)
    }
}

/// Actions on scenario inventory items (non-card items a player holds).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InventoryItemAction {
    pub game: String,
    pub player_number: i32,
    pub action: i32,
    pub item_type: i32,
    /// Decline reason for [`Self::CANNOT_PLAY`], or the add-form flag bits.
    pub reason_code: i32,
}

impl InventoryItemAction {
    pub const ADD_PLAYABLE: i32 = 2;
    pub const ADD_OTHER: i32 = 3;
    pub const PLAY: i32 = 4;
    pub const CANNOT_PLAY: i32 = 5;
    pub const PLAYED: i32 = 6;
    pub const PLACING_EXTRA: i32 = 7;

    const FLAG_IS_KEPT: i32 = 0x01;
    const FLAG_IS_VP: i32 = 0x02;
    const FLAG_CAN_CANCEL: i32 = 0x04;

    /// Builds an add-form action with the flag bits folded into the
    /// reason code.
    #[must_use]
    pub fn add(
        game: String,
        player_number: i32,
        action: i32,
        item_type: i32,
        kept: bool,
        vp: bool,
        can_cancel: bool,
    ) -> Self {
        let reason_code = (if kept { Self::FLAG_IS_KEPT } else { 0 })
            | (if vp { Self::FLAG_IS_VP } else { 0 })
            | (if can_cancel { Self::FLAG_CAN_CANCEL } else { 0 });
        Self {
            game,
            player_number,
            action,
            item_type,
            reason_code,
        }
    }

    #[must_use]
    pub const fn is_kept(&self) -> bool {
        self.reason_code & Self::FLAG_IS_KEPT != 0
    }

    #[must_use]
    pub const fn is_vp(&self) -> bool {
        self.reason_code & Self::FLAG_IS_VP != 0
    }

    #[must_use]
    pub const fn can_cancel_play(&self) -> bool {
        self.reason_code & Self::FLAG_CAN_CANCEL != 0
    }

    const fn action_has_flags(&self) -> bool {
        self.action != Self::PLAY && self.action != Self::CANNOT_PLAY
    }

    pub(crate) fn encode_payload(&self) -> String {
        let mut w = FieldWriter::new();
        w.push_str(&self.game);
        w.push_int(self.player_number);
        w.push_int(self.action);
        w.push_int(self.item_type);
        if self.reason_code != 0 {
            w.push_int(self.reason_code);
        }
        w.finish()
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let mut r = FieldReader::new(data);
        let game = r.next_str().ok()?.to_owned();
        let player_number = r.next_int().ok()?;
        let action = r.next_int().ok()?;
        let item_type = r.next_int().ok()?;
        let reason_code = if r.is_empty() { 0 } else { r.next_int().ok()? };
        Some(Self {
            game,
            player_number,
            action,
            item_type,
            reason_code,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        let action = match self.action {
            Self::ADD_PLAYABLE => "ADD_PLAYABLE".to_owned(),
            Self::ADD_OTHER => "ADD_OTHER".to_owned(),
            Self::PLAY => "PLAY".to_owned(),
            Self::CANNOT_PLAY => "CANNOT_PLAY".to_owned(),
            Self::PLAYED => "PLAYED".to_owned(),
            Self::PLACING_EXTRA => "PLACING_EXTRA".to_owned(),
            other => other.to_string(),
        };
        let mut out = format!(
            "game={}|playerNum={}|action={action}|itemType={}",
            self.game, self.player_number, self.item_type
        );
        if self.action_has_flags() {
            let _ = write!(
                out,
                "|kept={}|isVP={}|canCancel={}",
                self.is_kept(),
                self.is_vp(),
                self.can_cancel_play()
            );
        } else {
            let _ = write!(out, "|rc={}", self.reason_code);
        }
        out
    }
}
