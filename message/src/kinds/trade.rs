//! Trading kinds: player offers, bank trades and resource picks.

use wire::{FieldReader, FieldWriter};

use crate::data::{ResourceSet, TradeOffer};
use crate::strip::strip_attribs_to_list;
use crate::template;

/// A player puts a trade offer on the table.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MakeOffer {
    pub game: String,
    pub offer: TradeOffer,
}

impl MakeOffer {
    pub(crate) fn encode_payload(&self) -> String {
        let mut w = FieldWriter::new();
        w.push_str(&self.game);
        w.push_int(self.offer.from);
        for &t in &self.offer.to {
            w.push_bool(t);
        }
        self.offer.give.encode_known(&mut w);
        self.offer.get.encode_known(&mut w);
        w.finish()
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let mut r = FieldReader::new(data);
        let game = r.next_str().ok()?.to_owned();
        let from = r.next_int().ok()?;
        let seat_count = r.remaining().checked_sub(2 * 5)?;
        let mut to = Vec::with_capacity(seat_count);
        for _ in 0..seat_count {
            to.push(r.next_bool().ok()?);
        }
        let give = ResourceSet::decode_known(&mut r).ok()?;
        let get = ResourceSet::decode_known(&mut r).ok()?;
        Some(Self {
            offer: TradeOffer {
                game: game.clone(),
                from,
                to,
                give,
                get,
            },
            game,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        let mut out = format!("game={}|offer=", self.game);
        self.offer.render(&mut out);
        out
    }

    pub(crate) fn strip_labels(body: &str) -> Option<String> {
        // game=ga|offer=game=ga|from=3|to=a,b..|give=clay=..|..|get=clay=..|..
        let game = body.strip_prefix("game=")?;
        let game = &game[..game.find('|')?];
        let from = labeled_field(body, "|from=")?;
        let to = labeled_field(body, "|to=")?;
        let give = resource_fields(body, "|give=")?;
        let get = resource_fields(body, "|get=")?;
        Some(format!("{game},{from},{to},{give},{get}"))
    }
}

/// Retract this player's current offer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ClearOffer {
    pub game: String,
    pub player_number: i32,
}

impl ClearOffer {
    pub(crate) fn encode_payload(&self) -> String {
        template::encode_game_ints(&self.game, &[self.player_number])
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        template::decode_game_int(data).map(|(game, pn)| Self {
            game,
            player_number: pn,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!("game={}|playerNumber={}", self.game, self.player_number)
    }
}

/// A player rejects the standing offers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RejectOffer {
    pub game: String,
    pub player_number: i32,
}

impl RejectOffer {
    pub(crate) fn encode_payload(&self) -> String {
        template::encode_game_ints(&self.game, &[self.player_number])
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        template::decode_game_int(data).map(|(game, pn)| Self {
            game,
            player_number: pn,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!("game={}|playerNumber={}", self.game, self.player_number)
    }
}

/// A player accepts another player's offer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AcceptOffer {
    pub game: String,
    pub accepting: i32,
    pub offering: i32,
}

impl AcceptOffer {
    pub(crate) fn encode_payload(&self) -> String {
        template::encode_game_ints(&self.game, &[self.accepting, self.offering])
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let (game, [accepting, offering]) = template::decode_game_ints::<2>(data)?;
        Some(Self {
            game,
            accepting,
            offering,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!(
            "game={}|accepting={}|offering={}",
            self.game, self.accepting, self.offering
        )
    }
}

/// Clear the trade-message area for one seat (or all seats, -1).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ClearTradeMsg {
    pub game: String,
    pub player_number: i32,
}

impl ClearTradeMsg {
    pub(crate) fn encode_payload(&self) -> String {
        template::encode_game_ints(&self.game, &[self.player_number])
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        template::decode_game_int(data).map(|(game, pn)| Self {
            game,
            player_number: pn,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!("game={}|playerNumber={}", self.game, self.player_number)
    }
}

/// Trade with the bank or a port. From protocol 2450 the server echoes the
/// trading seat number; the reply codes below use negative seat numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BankTrade {
    pub game: String,
    pub give: ResourceSet,
    pub get: ResourceSet,
    /// Trading seat, or a negative disallow-reply code; omitted on the
    /// wire when negative-and-unset (-1).
    pub player_number: i32,
}

impl BankTrade {
    /// Reply: cannot trade now.
    pub const PN_REPLY_CANNOT_MAKE_TRADE: i32 = -2;
    /// Reply: not your turn.
    pub const PN_REPLY_NOT_YOUR_TURN: i32 = -3;

    pub(crate) fn encode_payload(&self) -> String {
        let mut w = FieldWriter::new();
        w.push_str(&self.game);
        self.give.encode_known(&mut w);
        self.get.encode_known(&mut w);
        if self.player_number != -1 {
            w.push_int(self.player_number);
        }
        w.finish()
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let mut r = FieldReader::new(data);
        let game = r.next_str().ok()?.to_owned();
        let give = ResourceSet::decode_known(&mut r).ok()?;
        let get = ResourceSet::decode_known(&mut r).ok()?;
        let player_number = if r.is_empty() { -1 } else { r.next_int().ok()? };
        Some(Self {
            game,
            give,
            get,
            player_number,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        let mut out = format!("game={}|give=", self.game);
        self.give.render(&mut out);
        out.push_str("|get=");
        self.get.render(&mut out);
        if self.player_number != -1 {
            use std::fmt::Write as _;
            let _ = write!(out, "|pn={}", self.player_number);
        }
        out
    }

    pub(crate) fn strip_labels(body: &str) -> Option<String> {
        let game = body.strip_prefix("game=")?;
        let game = &game[..game.find('|')?];
        let give = resource_fields(body, "|give=")?;
        let get = resource_fields(body, "|get=")?;
        let mut out = format!("{game},{give},{get}");
        if let Some(pn) = labeled_field(body, "|pn=") {
            out.push(',');
            out.push_str(pn);
        }
        Some(out)
    }
}

/// Resources picked from a gold hex or a discovery card.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PickResources {
    pub game: String,
    pub resources: ResourceSet,
}

impl PickResources {
    pub(crate) fn encode_payload(&self) -> String {
        let mut w = FieldWriter::new();
        w.push_str(&self.game);
        self.resources.encode_known(&mut w);
        w.finish()
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let mut r = FieldReader::new(data);
        let game = r.next_str().ok()?.to_owned();
        let resources = ResourceSet::decode_known(&mut r).ok()?;
        Some(Self { game, resources })
    }

    pub(crate) fn render_payload(&self) -> String {
        let mut out = format!("game={}|resources=", self.game);
        self.resources.render(&mut out);
        out
    }

    pub(crate) fn strip_labels(body: &str) -> Option<String> {
        let cleaned = body.replace("resources=", "");
        let pieces = strip_attribs_to_list(&cleaned);
        // the unknown-amount slot is rendered but never sent for picks
        let fields: Vec<&str> = pieces.iter().copied().take(6).collect();
        Some(fields.join(","))
    }
}

/// The resource type chosen for a monopoly play.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PickResourceType {
    pub game: String,
    pub resource_type: i32,
}

impl PickResourceType {
    pub(crate) fn encode_payload(&self) -> String {
        template::encode_game_ints(&self.game, &[self.resource_type])
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        template::decode_game_int(data).map(|(game, rt)| Self {
            game,
            resource_type: rt,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!("game={}|resType={}", self.game, self.resource_type)
    }
}

/// The current player's choice of robbery victim (or robber vs pirate).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChoosePlayer {
    pub game: String,
    pub choice: i32,
}

impl ChoosePlayer {
    pub(crate) fn encode_payload(&self) -> String {
        template::encode_game_ints(&self.game, &[self.choice])
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        template::decode_game_int(data).map(|(game, choice)| Self { game, choice })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!("game={}|choice={}", self.game, self.choice)
    }
}

/// Ask the current player to pick a victim among the flagged seats. The
/// `NONE` token, when present, lets the player decline to rob anyone.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChoosePlayerRequest {
    pub game: String,
    pub choices: Vec<bool>,
    pub can_choose_none: bool,
}

impl ChoosePlayerRequest {
    const NONE_TOKEN: &'static str = "NONE";

    pub(crate) fn encode_payload(&self) -> String {
        let mut w = FieldWriter::new();
        w.push_str(&self.game);
        if self.can_choose_none {
            w.push_str(Self::NONE_TOKEN);
        }
        for &c in &self.choices {
            w.push_bool(c);
        }
        w.finish()
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let mut r = FieldReader::new(data);
        let game = r.next_str().ok()?.to_owned();
        let can_choose_none = r.peek() == Some(Self::NONE_TOKEN);
        if can_choose_none {
            let _ = r.next_str();
        }
        let mut choices = Vec::with_capacity(r.remaining());
        while !r.is_empty() {
            choices.push(r.next_bool().ok()?);
        }
        if choices.is_empty() {
            return None;
        }
        Some(Self {
            game,
            choices,
            can_choose_none,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        let mut out = format!("game={}", self.game);
        if self.can_choose_none {
            out.push_str("|canChooseNone=true");
        }
        out.push_str("|choices=[");
        for (i, c) in self.choices.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            use std::fmt::Write as _;
            let _ = write!(out, "{c}");
        }
        out.push(']');
        out
    }

    pub(crate) fn strip_labels(body: &str) -> Option<String> {
        let game = body.strip_prefix("game=")?;
        let game = &game[..game.find('|')?];
        let none = body.contains("|canChooseNone=true");
        let choices = labeled_field(body, "|choices=")?;
        let inner = choices.strip_prefix('[').and_then(|c| c.strip_suffix(']'))?;
        let mut out = String::from(game);
        if none {
            out.push(',');
            out.push_str(Self::NONE_TOKEN);
        }
        for c in inner.split(", ") {
            out.push(',');
            out.push_str(c);
        }
        Some(out)
    }
}

/// Returns the text of `label=` up to the next labeled piece (the next
/// `|name=`), so comma-separated list values stay whole.
pub(crate) fn labeled_field<'a>(body: &'a str, label: &str) -> Option<&'a str> {
    let start = body.find(label)? + label.len();
    let rest = &body[start..];
    let end = rest.find('|').unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Collects the six labeled resource amounts following `label` and returns
/// the first five (the known types) as comma-joined wire fields.
fn resource_fields(body: &str, label: &str) -> Option<String> {
    let start = body.find(label)? + label.len();
    let rest = &body[start..];
    let mut amounts = Vec::with_capacity(5);
    for piece in rest.split('|').take(5) {
        amounts.push(piece.find('=').map_or(piece, |i| &piece[i + 1..]));
    }
    if amounts.len() < 5 {
        return None;
    }
    Some(amounts.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer() -> MakeOffer {
        MakeOffer {
            game: "ga".into(),
            offer: TradeOffer {
                game: "ga".into(),
                from: 3,
                to: vec![false, false, true, false],
                give: ResourceSet::new(0, 1, 0, 1, 0, 0),
                get: ResourceSet::new(0, 0, 1, 0, 0, 0),
            },
        }
    }

    #[test]
    fn make_offer_wire_shape() {
        let m = offer();
        assert_eq!(
            m.encode_payload(),
            "ga,3,false,false,true,false,0,1,0,1,0,0,0,1,0,0"
        );
        assert_eq!(MakeOffer::decode(&m.encode_payload()).unwrap(), m);
    }

    #[test]
    fn make_offer_strip() {
        let m = offer();
        let stripped = MakeOffer::strip_labels(&m.render_payload()).unwrap();
        assert_eq!(stripped, m.encode_payload());
    }

    #[test]
    fn bank_trade_optional_player_number() {
        let m = BankTrade {
            game: "ga".into(),
            give: ResourceSet::new(0, 0, 2, 0, 0, 0),
            get: ResourceSet::new(1, 0, 0, 0, 0, 0),
            player_number: 3,
        };
        assert_eq!(m.encode_payload(), "ga,0,0,2,0,0,1,0,0,0,0,3");
        assert_eq!(BankTrade::decode(&m.encode_payload()).unwrap(), m);

        let stripped = BankTrade::strip_labels(&m.render_payload()).unwrap();
        assert_eq!(stripped, m.encode_payload());
    }

    #[test]
    fn choose_player_request_none_marker() {
        let m = ChoosePlayerRequest {
            game: "ga".into(),
            choices: vec![true, false, false, true],
            can_choose_none: true,
        };
        assert_eq!(m.encode_payload(), "ga,NONE,true,false,false,true");
        assert_eq!(ChoosePlayerRequest::decode(&m.encode_payload()).unwrap(), m);

        let stripped = ChoosePlayerRequest::strip_labels(&m.render_payload()).unwrap();
        assert_eq!(stripped, m.encode_payload());
    }
}
