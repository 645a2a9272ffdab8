//! Game lobby kinds: joining, seating, membership and game lists.

use std::fmt::Write as _;

use wire::{FieldReader, FieldWriter};

use crate::strip::strip_attribs_to_list;
use crate::template;

use super::channel::{
    render_password_masked, strip_labeled_member_list, strip_member_list,
    strip_with_masked_password,
};

/// Request to join a game's members as a player or observer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct JoinGame {
    pub nickname: String,
    pub password: String,
    pub host: String,
    pub game: String,
}

impl JoinGame {
    pub(crate) fn encode_payload(&self) -> String {
        let mut w = FieldWriter::new();
        w.push_str(&self.nickname);
        w.push_str_or_placeholder(&self.password);
        w.push_str_or_placeholder(&self.host);
        w.push_str(&self.game);
        w.finish()
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let mut r = FieldReader::new(data);
        let nickname = r.next_str().ok()?.to_owned();
        let password = wire::placeholder_to_empty(r.next_str().ok()?).to_owned();
        let host = r.next_str().ok()?.to_owned();
        let game = r.next_str().ok()?.to_owned();
        Some(Self {
            nickname,
            password,
            host,
            game,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        let mut out = format!("nickname={}", self.nickname);
        render_password_masked(&mut out, &self.password);
        let _ = write!(out, "|host={}|game={}", self.host, self.game);
        out
    }

    pub(crate) fn strip_labels(body: &str) -> Option<String> {
        strip_with_masked_password(body)
    }
}

/// Server reply authorizing a game join. The extended form also carries
/// the board height/width and an optional vertical-shift array.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct JoinGameAuth {
    pub game: String,
    pub board_size: Option<(i32, i32)>,
    pub vertical_shift: Option<Vec<i32>>,
}

impl JoinGameAuth {
    pub(crate) fn encode_payload(&self) -> String {
        let mut w = FieldWriter::new();
        w.push_str(&self.game);
        if let Some((bh, bw)) = self.board_size {
            w.push_int(bh);
            w.push_int(bw);
            w.push_str("S");
            if let Some(vs) = &self.vertical_shift {
                for &v in vs {
                    w.push_int(v);
                }
            }
        }
        w.finish()
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let mut r = FieldReader::new(data);
        let game = r.next_str().ok()?.to_owned();
        if r.is_empty() {
            return Some(Self {
                game,
                board_size: None,
                vertical_shift: None,
            });
        }
        let bh = r.next_int().ok()?;
        let bw = r.next_int().ok()?;
        if r.next_str().ok()? != "S" {
            return None;
        }
        let vs = r.rest_ints().ok()?;
        Some(Self {
            game,
            board_size: Some((bh, bw)),
            vertical_shift: if vs.is_empty() { None } else { Some(vs) },
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        let mut out = format!("game={}", self.game);
        if let Some((bh, bw)) = self.board_size {
            let _ = write!(out, "|bh={bh}|bw={bw}");
            if let Some(vs) = &self.vertical_shift {
                out.push_str("|vs=[");
                for (i, v) in vs.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    let _ = write!(out, "{v}");
                }
                out.push(']');
            }
        }
        out
    }

    pub(crate) fn strip_labels(body: &str) -> Option<String> {
        let pieces = strip_attribs_to_list(body);
        let mut fields = String::new();
        fields.push_str(pieces.first()?);
        if pieces.len() > 1 {
            fields.push(',');
            fields.push_str(pieces.get(1)?);
            fields.push(',');
            fields.push_str(pieces.get(2)?);
            fields.push_str(",S");
            if let Some(vs) = pieces.get(3) {
                let inner = vs.strip_prefix('[').and_then(|v| v.strip_suffix(']'))?;
                for v in inner.split(", ") {
                    fields.push(',');
                    fields.push_str(v);
                }
            }
        }
        Some(fields)
    }
}

/// A member is leaving a game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LeaveGame {
    pub nickname: String,
    pub host: String,
    pub game: String,
}

impl LeaveGame {
    pub(crate) fn encode_payload(&self) -> String {
        let mut w = FieldWriter::new();
        w.push_str(&self.nickname);
        w.push_str(&self.host);
        w.push_str(&self.game);
        w.finish()
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let mut r = FieldReader::new(data);
        let nickname = r.next_str().ok()?.to_owned();
        let host = r.next_str().ok()?.to_owned();
        let game = r.next_str().ok()?.to_owned();
        Some(Self {
            nickname,
            host,
            game,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!(
            "nickname={}|host={}|game={}",
            self.nickname, self.host, self.game
        )
    }
}

/// A player is taking a seat.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SitDown {
    pub game: String,
    pub nickname: String,
    pub player_number: i32,
    pub robot: bool,
}

impl SitDown {
    pub(crate) fn encode_payload(&self) -> String {
        let mut w = FieldWriter::new();
        w.push_str(&self.game);
        w.push_str(&self.nickname);
        w.push_int(self.player_number);
        w.push_bool(self.robot);
        w.finish()
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let mut r = FieldReader::new(data);
        let game = r.next_str().ok()?.to_owned();
        let nickname = r.next_str().ok()?.to_owned();
        let player_number = r.next_int().ok()?;
        let robot = r.next_bool().ok()?;
        Some(Self {
            game,
            nickname,
            player_number,
            robot,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!(
            "game={}|nickname={}|playerNumber={}|robotFlag={}",
            self.game, self.nickname, self.player_number, self.robot
        )
    }
}

/// A new game has been created.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NewGame {
    pub game: String,
}

impl NewGame {
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

/// A game has been destroyed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DeleteGame {
    pub game: String,
}

impl DeleteGame {
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

/// List of all game names. A name may carry the unjoinable marker prefix
/// when the game needs a newer client than the receiver.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Games {
    pub games: Vec<String>,
}

impl Games {
    /// Prefix marking a game the receiving client cannot join.
    pub const MARKER_UNJOINABLE: char = '\u{7f}';

    pub(crate) fn encode_payload(&self) -> String {
        let mut w = FieldWriter::new();
        for g in &self.games {
            w.push_str(g);
        }
        w.finish()
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let mut r = FieldReader::new(data);
        let games = r.rest_strs().iter().map(|s| (*s).to_owned()).collect();
        Some(Self { games })
    }

    pub(crate) fn render_payload(&self) -> String {
        let mut out = String::from("games=");
        template::render_name_list(&mut out, &self.games);
        out
    }

    pub(crate) fn strip_labels(body: &str) -> Option<String> {
        strip_member_list("games=", body)
    }
}

/// List of all members of a game; receiving it signals that every game
/// detail has been sent.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameMembers {
    pub game: String,
    pub members: Vec<String>,
}

impl GameMembers {
    pub(crate) fn encode_payload(&self) -> String {
        let mut w = FieldWriter::new();
        w.push_str(&self.game);
        for m in &self.members {
            w.push_str(m);
        }
        w.finish()
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let mut r = FieldReader::new(data);
        let game = r.next_str().ok()?.to_owned();
        let members = r.rest_strs().iter().map(|s| (*s).to_owned()).collect();
        Some(Self { game, members })
    }

    pub(crate) fn render_payload(&self) -> String {
        let mut out = format!("game={}|members=", self.game);
        template::render_name_list(&mut out, &self.members);
        out
    }

    pub(crate) fn strip_labels(body: &str) -> Option<String> {
        strip_labeled_member_list("game=", body)
    }
}

/// Final scores and seat kinds, sent when a game ends.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameStats {
    pub game: String,
    pub scores: Vec<i32>,
    pub robots: Vec<bool>,
}

impl GameStats {
    pub(crate) fn encode_payload(&self) -> String {
        let mut w = FieldWriter::new();
        w.push_str(&self.game);
        for &s in &self.scores {
            w.push_int(s);
        }
        for &r in &self.robots {
            w.push_bool(r);
        }
        w.finish()
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let mut r = FieldReader::new(data);
        let game = r.next_str().ok()?.to_owned();
        let seats = r.remaining() / 2;
        let mut scores = Vec::with_capacity(seats);
        for _ in 0..seats {
            scores.push(r.next_int().ok()?);
        }
        let mut robots = Vec::with_capacity(seats);
        for _ in 0..seats {
            robots.push(r.next_bool().ok()?);
        }
        Some(Self {
            game,
            scores,
            robots,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        let mut out = format!("game={}", self.game);
        for s in &self.scores {
            let _ = write!(out, "|{s}");
        }
        for r in &self.robots {
            let _ = write!(out, "|{r}");
        }
        out
    }
}

/// Ask a bot client to join a game and take a seat.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BotJoinGameRequest {
    pub game: String,
    pub player_number: i32,
    /// Packed game options, `-` when the game has none. Kept as the raw
    /// tail since option values themselves contain the secondary separator.
    pub options: String,
}

impl BotJoinGameRequest {
    pub(crate) fn encode_payload(&self) -> String {
        format!("{},{},{}", self.game, self.player_number, self.options)
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let mut it = data.splitn(3, ',');
        let game = it.next()?.to_owned();
        let player_number = it.next()?.parse().ok()?;
        let options = it.next()?.to_owned();
        Some(Self {
            game,
            player_number,
            options,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!(
            "game={}|playerNumber={}|opts={}",
            self.game, self.player_number, self.options
        )
    }
}

/// Server tells a bot to leave the game; a human is taking its seat.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RobotDismiss {
    pub game: String,
}

impl RobotDismiss {
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

/// Periodic per-game timing probe for bots.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TimingPing {
    pub game: String,
}

impl TimingPing {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_game_auth_simple_and_extended() {
        let simple = JoinGameAuth {
            game: "ga".into(),
            board_size: None,
            vertical_shift: None,
        };
        assert_eq!(simple.encode_payload(), "ga");
        assert_eq!(JoinGameAuth::decode("ga").unwrap(), simple);

        let extended = JoinGameAuth {
            game: "ga".into(),
            board_size: Some((20, 21)),
            vertical_shift: Some(vec![-2, 1, 3, 0]),
        };
        assert_eq!(extended.encode_payload(), "ga,20,21,S,-2,1,3,0");
        assert_eq!(JoinGameAuth::decode("ga,20,21,S,-2,1,3,0").unwrap(), extended);
        assert_eq!(
            extended.render_payload(),
            "game=ga|bh=20|bw=21|vs=[-2, 1, 3, 0]"
        );
    }

    #[test]
    fn join_game_auth_strip() {
        let stripped =
            JoinGameAuth::strip_labels("game=ga|bh=20|bw=21|vs=[-2, 1, 3, 0]").unwrap();
        assert_eq!(stripped, "ga,20,21,S,-2,1,3,0");
        assert_eq!(JoinGameAuth::strip_labels("game=ga").unwrap(), "ga");
    }

    #[test]
    fn game_stats_wire_shape() {
        let m = GameStats {
            game: "ga".into(),
            scores: vec![10, 4, 3, 2],
            robots: vec![false, true, true, true],
        };
        assert_eq!(m.encode_payload(), "ga,10,4,3,2,false,true,true,true");
        assert_eq!(GameStats::decode(&m.encode_payload()).unwrap(), m);
        assert_eq!(
            m.render_payload(),
            "game=ga|10|4|3|2|false|true|true|true"
        );
    }

    #[test]
    fn bot_join_game_request_keeps_option_commas() {
        let m = BotJoinGameRequest {
            game: "ga".into(),
            player_number: 3,
            options: "PL=2,RD=t".into(),
        };
        assert_eq!(m.encode_payload(), "ga,3,PL=2,RD=t");
        assert_eq!(BotJoinGameRequest::decode("ga,3,PL=2,RD=t").unwrap(), m);
    }
}
