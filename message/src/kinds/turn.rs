//! Turn-flow kinds: game start, state, turns, dice and board resets.

use std::fmt::Write as _;

use wire::FieldWriter;

use crate::data::ResourceSet;
use crate::template;

/// The game is starting. Carries the new game state from protocol 2000 on;
/// a zero state is omitted for older peers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StartGame {
    pub game: String,
    pub game_state: i32,
}

impl StartGame {
    pub(crate) fn encode_payload(&self) -> String {
        if self.game_state != 0 {
            template::encode_game_ints(&self.game, &[self.game_state])
        } else {
            self.game.clone()
        }
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        decode_game_optional_int(data).map(|(game, game_state)| Self { game, game_state })
    }

    pub(crate) fn render_payload(&self) -> String {
        if self.game_state != 0 {
            format!("game={}|gameState={}", self.game, self.game_state)
        } else {
            format!("game={}", self.game)
        }
    }
}

/// Current game state broadcast.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameState {
    pub game: String,
    pub state: i32,
}

impl GameState {
    pub(crate) fn encode_payload(&self) -> String {
        template::encode_game_ints(&self.game, &[self.state])
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        template::decode_game_int(data).map(|(game, state)| Self { game, state })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!("game={}|state={}", self.game, self.state)
    }
}

/// It is now this seat's turn. Carries the new game state from protocol
/// 2000 on; a zero state is omitted.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Turn {
    pub game: String,
    pub player_number: i32,
    pub game_state: i32,
}

impl Turn {
    pub(crate) fn encode_payload(&self) -> String {
        if self.game_state != 0 {
            template::encode_game_ints(&self.game, &[self.player_number, self.game_state])
        } else {
            template::encode_game_ints(&self.game, &[self.player_number])
        }
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let mut r = wire::FieldReader::new(data);
        let game = r.next_str().ok()?.to_owned();
        let player_number = r.next_int().ok()?;
        let game_state = if r.is_empty() { 0 } else { r.next_int().ok()? };
        Some(Self {
            game,
            player_number,
            game_state,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        let mut out = format!("game={}|playerNumber={}", self.game, self.player_number);
        if self.game_state != 0 {
            let _ = write!(out, "|gameState={}", self.game_state);
        }
        out
    }
}

/// Server seats the current player without starting a turn (board reset
/// recovery).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SetTurn {
    pub game: String,
    pub player_number: i32,
}

impl SetTurn {
    pub(crate) fn encode_payload(&self) -> String {
        template::encode_game_ints(&self.game, &[self.player_number])
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        template::decode_game_int(data).map(|(game, player_number)| Self {
            game,
            player_number,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!("game={}|param={}", self.game, self.player_number)
    }
}

/// Which seat plays first this game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FirstPlayer {
    pub game: String,
    pub player_number: i32,
}

impl FirstPlayer {
    pub(crate) fn encode_payload(&self) -> String {
        template::encode_game_ints(&self.game, &[self.player_number])
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        template::decode_game_int(data).map(|(game, player_number)| Self {
            game,
            player_number,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!("game={}|playerNumber={}", self.game, self.player_number)
    }
}

/// Current player is done with their turn.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EndTurn {
    pub game: String,
}

impl EndTurn {
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

/// Current player requests a dice roll.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RollDice {
    pub game: String,
}

impl RollDice {
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

/// Server asks the current player to roll. Unused on modern servers but
/// kept in the registry for old peers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RollDiceRequest {
    pub game: String,
}

impl RollDiceRequest {
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

/// Prompt the client to auto-roll for this seat after a short delay.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RollDicePrompt {
    pub game: String,
    pub player_number: i32,
}

impl RollDicePrompt {
    pub(crate) fn encode_payload(&self) -> String {
        template::encode_game_ints(&self.game, &[self.player_number])
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        template::decode_game_int(data).map(|(game, player_number)| Self {
            game,
            player_number,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!("game={}|playerNumber={}", self.game, self.player_number)
    }
}

/// The dice total rolled this turn.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DiceResult {
    pub game: String,
    pub result: i32,
}

impl DiceResult {
    pub(crate) fn encode_payload(&self) -> String {
        template::encode_game_ints(&self.game, &[self.result])
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        template::decode_game_int(data).map(|(game, result)| Self { game, result })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!("game={}|param={}", self.game, self.result)
    }
}

/// This player must discard down to the hand limit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DiscardRequest {
    pub game: String,
    pub num_discards: i32,
}

impl DiscardRequest {
    pub(crate) fn encode_payload(&self) -> String {
        template::encode_game_ints(&self.game, &[self.num_discards])
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        template::decode_game_int(data).map(|(game, num_discards)| Self {
            game,
            num_discards,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!("game={}|numDiscards={}", self.game, self.num_discards)
    }
}

/// Resources a player discards after a seven.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Discard {
    pub game: String,
    pub resources: ResourceSet,
}

impl Discard {
    pub(crate) fn encode_payload(&self) -> String {
        let mut w = FieldWriter::new();
        w.push_str(&self.game);
        self.resources.encode_all(&mut w);
        w.finish()
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let mut r = wire::FieldReader::new(data);
        let game = r.next_str().ok()?.to_owned();
        let resources = ResourceSet::decode_all(&mut r).ok()?;
        Some(Self { game, resources })
    }

    pub(crate) fn render_payload(&self) -> String {
        let mut out = format!("game={}|resources=", self.game);
        self.resources.render(&mut out);
        out
    }

    pub(crate) fn strip_labels(body: &str) -> Option<String> {
        Some(crate::strip::strip_attrib_names(
            &body.replace("resources=", ""),
        ))
    }
}

/// Request to reset the board and start the game over.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResetBoardRequest {
    pub game: String,
}

impl ResetBoardRequest {
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

/// The board reset was authorized: rejoin the new game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResetBoardAuth {
    pub game: String,
    pub rejoin_player_number: i32,
    pub requesting_player_number: i32,
}

impl ResetBoardAuth {
    pub(crate) fn encode_payload(&self) -> String {
        template::encode_game_ints(
            &self.game,
            &[self.rejoin_player_number, self.requesting_player_number],
        )
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let (game, [rejoin, requesting]) = template::decode_game_ints::<2>(data)?;
        Some(Self {
            game,
            rejoin_player_number: rejoin,
            requesting_player_number: requesting,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!(
            "game={}|rejoinPN={}|requestingPN={}",
            self.game, self.rejoin_player_number, self.requesting_player_number
        )
    }
}

/// Server asks this player to vote on a board reset.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResetBoardVoteRequest {
    pub game: String,
    pub requesting_player_number: i32,
}

impl ResetBoardVoteRequest {
    pub(crate) fn encode_payload(&self) -> String {
        template::encode_game_ints(&self.game, &[self.requesting_player_number])
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        template::decode_game_int(data).map(|(game, pn)| Self {
            game,
            requesting_player_number: pn,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!("game={}|param={}", self.game, self.requesting_player_number)
    }
}

/// One player's vote on the proposed board reset.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResetBoardVote {
    pub game: String,
    pub player_number: i32,
    pub vote_yes: bool,
}

impl ResetBoardVote {
    pub(crate) fn encode_payload(&self) -> String {
        template::encode_game_ints(
            &self.game,
            &[self.player_number, i32::from(self.vote_yes)],
        )
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let (game, [pn, vote]) = template::decode_game_ints::<2>(data)?;
        Some(Self {
            game,
            player_number: pn,
            vote_yes: vote != 0,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!(
            "game={}|pn={}|vote={}",
            self.game,
            self.player_number,
            i32::from(self.vote_yes)
        )
    }
}

/// The board reset was voted down.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResetBoardReject {
    pub game: String,
}

impl ResetBoardReject {
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

/// A player changed their face icon.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChangeFace {
    pub game: String,
    pub player_number: i32,
    pub face_id: i32,
}

impl ChangeFace {
    pub(crate) fn encode_payload(&self) -> String {
        template::encode_game_ints(&self.game, &[self.player_number, self.face_id])
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let (game, [pn, face_id]) = template::decode_game_ints::<2>(data)?;
        Some(Self {
            game,
            player_number: pn,
            face_id,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!(
            "game={}|playerNumber={}|faceId={}",
            self.game, self.player_number, self.face_id
        )
    }
}

/// Decodes `game[, int]`, defaulting the optional trailing integer to 0.
fn decode_game_optional_int(data: &str) -> Option<(String, i32)> {
    let mut r = wire::FieldReader::new(data);
    let game = r.next_str().ok()?.to_owned();
    let v = if r.is_empty() { 0 } else { r.next_int().ok()? };
    Some((game, v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_optional_game_state() {
        let old = Turn {
            game: "ga".into(),
            player_number: 3,
            game_state: 0,
        };
        assert_eq!(old.encode_payload(), "ga,3");
        assert_eq!(old.render_payload(), "game=ga|playerNumber=3");
        assert_eq!(Turn::decode("ga,3").unwrap(), old);

        let new = Turn {
            game: "ga".into(),
            player_number: 3,
            game_state: 15,
        };
        assert_eq!(new.encode_payload(), "ga,3,15");
        assert_eq!(new.render_payload(), "game=ga|playerNumber=3|gameState=15");
        assert_eq!(Turn::decode("ga,3,15").unwrap(), new);
    }

    #[test]
    fn discard_strip_flattens_resources() {
        let m = Discard {
            game: "ga".into(),
            resources: ResourceSet::new(2, 1, 3, 1, 2, 0),
        };
        let stripped = Discard::strip_labels(&m.render_payload()).unwrap();
        assert_eq!(stripped, m.encode_payload());
    }

    #[test]
    fn reset_board_vote_wire_shape() {
        let m = ResetBoardVote {
            game: "ga".into(),
            player_number: 3,
            vote_yes: true,
        };
        assert_eq!(m.encode_payload(), "ga,3,1");
        assert_eq!(ResetBoardVote::decode("ga,3,1").unwrap(), m);
    }
}
