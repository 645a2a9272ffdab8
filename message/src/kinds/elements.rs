//! Numeric game- and player-state update kinds.

use std::fmt::Write as _;

use wire::{FieldReader, FieldWriter};

use crate::data::{ResourceSet, SeatLockState};
use crate::template;

/// Player element action codes. The negative "news" forms mark an update
/// the client should call out; peers below protocol 2000 only know the
/// positive forms.
pub mod element_action {
    pub const SET: i32 = 100;
    pub const GAIN: i32 = 101;
    pub const LOSE: i32 = 102;
    pub const SET_NEWS: i32 = -100;
    pub const GAIN_NEWS: i32 = -101;
    pub const LOSE_NEWS: i32 = -102;
}

fn action_symbol(action: i32) -> String {
    match action {
        element_action::SET => "SET".to_owned(),
        element_action::GAIN => "GAIN".to_owned(),
        element_action::LOSE => "LOSE".to_owned(),
        other => other.to_string(),
    }
}

pub(crate) fn action_from_symbol(sym: &str) -> Option<i32> {
    match sym {
        "SET" => Some(element_action::SET),
        "GAIN" => Some(element_action::GAIN),
        "LOSE" => Some(element_action::LOSE),
        other => other.parse().ok(),
    }
}

/// Update one counter of one player's public state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlayerElement {
    pub game: String,
    pub player_number: i32,
    /// One of the positive [`element_action`] codes; the news flag is
    /// carried separately and folded into the code on the wire.
    pub action: i32,
    pub element_type: i32,
    pub amount: i32,
    pub news: bool,
}

impl PlayerElement {
    /// Validates that `action` is a positive form; the news flag is its
    /// own field, never a negative action code.
    pub fn new(
        game: String,
        player_number: i32,
        action: i32,
        element_type: i32,
        amount: i32,
        news: bool,
    ) -> Option<Self> {
        if action < 0 {
            return None;
        }
        Some(Self {
            game,
            player_number,
            action,
            element_type,
            amount,
            news,
        })
    }

    pub(crate) fn encode_payload(&self) -> String {
        let mut w = FieldWriter::new();
        w.push_str(&self.game);
        w.push_int(self.player_number);
        w.push_int(self.action);
        w.push_int(self.element_type);
        w.push_int(self.amount);
        if self.news {
            w.push_str("Y");
        }
        w.finish()
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let mut r = FieldReader::new(data);
        let game = r.next_str().ok()?.to_owned();
        let player_number = r.next_int().ok()?;
        let action = r.next_int().ok()?;
        let element_type = r.next_int().ok()?;
        let amount = r.next_int().ok()?;
        let news = r.peek() == Some("Y");
        Self::new(game, player_number, action, element_type, amount, news)
    }

    pub(crate) fn render_payload(&self) -> String {
        let mut out = format!(
            "game={}|playerNum={}|actionType={}|elementType={}|amount={}",
            self.game,
            self.player_number,
            action_symbol(self.action),
            self.element_type,
            self.amount
        );
        if self.news {
            out.push_str("|news=Y");
        }
        out
    }

    pub(crate) fn strip_labels(body: &str) -> Option<String> {
        let pieces = crate::strip::strip_attribs_to_list(body);
        let mut fields: Vec<String> = Vec::with_capacity(pieces.len());
        for (i, piece) in pieces.iter().enumerate() {
            if i == 2 {
                fields.push(action_from_symbol(piece)?.to_string());
            } else {
                fields.push((*piece).to_owned());
            }
        }
        Some(fields.join(","))
    }
}

/// Update several counters of one player's state at once.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlayerElements {
    pub game: String,
    pub player_number: i32,
    pub action: i32,
    pub element_types: Vec<i32>,
    pub amounts: Vec<i32>,
}

impl PlayerElements {
    /// Validates the paired-lists invariant.
    pub fn new(
        game: String,
        player_number: i32,
        action: i32,
        element_types: Vec<i32>,
        amounts: Vec<i32>,
    ) -> Option<Self> {
        if element_types.is_empty() || element_types.len() != amounts.len() {
            return None;
        }
        Some(Self {
            game,
            player_number,
            action,
            element_types,
            amounts,
        })
    }

    pub(crate) fn encode_payload(&self) -> String {
        let mut values = vec![self.player_number, self.action];
        for (&et, &amt) in self.element_types.iter().zip(&self.amounts) {
            values.push(et);
            values.push(amt);
        }
        template::encode_multi_ints(&self.game, &values)
    }

    pub(crate) fn decode(parts: &[&str]) -> Option<Self> {
        let (game, values) = template::decode_multi_ints(parts)?;
        if values.len() < 4 || values.len() % 2 != 0 {
            return None;
        }
        let player_number = values[0];
        let action = values[1];
        let mut element_types = Vec::new();
        let mut amounts = Vec::new();
        for pair in values[2..].chunks(2) {
            element_types.push(pair[0]);
            amounts.push(pair[1]);
        }
        Self::new(game, player_number, action, element_types, amounts)
    }

    pub(crate) fn render_payload(&self) -> String {
        let mut out = format!(
            "game={}|playerNum={}|actionType={}|",
            self.game,
            self.player_number,
            action_symbol(self.action)
        );
        for (i, (&et, &amt)) in self.element_types.iter().zip(&self.amounts).enumerate() {
            if i > 0 {
                out.push(',');
            }
            let _ = write!(out, "e{et}={amt}");
        }
        out
    }

    pub(crate) fn strip_labels(body: &str) -> Option<String> {
        let game = body.strip_prefix("game=")?;
        let game = &game[..game.find('|')?];
        let pn = super::trade::labeled_field(body, "|playerNum=")?;
        let action = action_from_symbol(super::trade::labeled_field(body, "|actionType=")?)?;
        let pairs = body.rsplit('|').next()?;
        let mut out = format!("{game}|{pn}|{action}");
        push_element_pairs(&mut out, pairs)?;
        Some(out)
    }
}

/// Update the value(s) of per-game status counters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameElements {
    pub game: String,
    pub element_types: Vec<i32>,
    pub values: Vec<i32>,
}

/// Game element type codes.
pub mod game_element {
    pub const ROUND_COUNT: i32 = 1;
    pub const DEV_CARD_COUNT: i32 = 2;
    pub const FIRST_PLAYER: i32 = 3;
    pub const CURRENT_PLAYER: i32 = 4;
    pub const LARGEST_ARMY_PLAYER: i32 = 5;
    pub const LONGEST_ROAD_PLAYER: i32 = 6;
}

impl GameElements {
    /// Validates the paired-lists invariant.
    pub fn new(game: String, element_types: Vec<i32>, values: Vec<i32>) -> Option<Self> {
        if element_types.is_empty() || element_types.len() != values.len() {
            return None;
        }
        Some(Self {
            game,
            element_types,
            values,
        })
    }

    pub(crate) fn encode_payload(&self) -> String {
        let mut values = Vec::with_capacity(2 * self.element_types.len());
        for (&et, &v) in self.element_types.iter().zip(&self.values) {
            values.push(et);
            values.push(v);
        }
        template::encode_multi_ints(&self.game, &values)
    }

    pub(crate) fn decode(parts: &[&str]) -> Option<Self> {
        let (game, values) = template::decode_multi_ints(parts)?;
        if values.len() < 2 || values.len() % 2 != 0 {
            return None;
        }
        let mut element_types = Vec::new();
        let mut vals = Vec::new();
        for pair in values.chunks(2) {
            element_types.push(pair[0]);
            vals.push(pair[1]);
        }
        Self::new(game, element_types, vals)
    }

    pub(crate) fn render_payload(&self) -> String {
        let mut out = format!("game={}|", self.game);
        for (i, (&et, &v)) in self.element_types.iter().zip(&self.values).enumerate() {
            if i > 0 {
                out.push(',');
            }
            let _ = write!(out, "e{et}={v}");
        }
        out
    }

    pub(crate) fn strip_labels(body: &str) -> Option<String> {
        let game = body.strip_prefix("game=")?;
        let game = &game[..game.find('|')?];
        let pairs = body.rsplit('|').next()?;
        let mut out = String::from(game);
        push_element_pairs(&mut out, pairs)?;
        Some(out)
    }
}

/// Flattens `e4=1,e2=25` pairs into `|4|1|2|25` wire fields.
fn push_element_pairs(out: &mut String, pairs: &str) -> Option<()> {
    for pair in pairs.split(',') {
        let (etype, value) = pair.strip_prefix('e')?.split_once('=')?;
        let _ = write!(out, "|{etype}|{value}");
    }
    Some(())
}

/// One player's accumulated statistics, sent at game end (or at sit-down
/// from protocol 2700). The first value selects the statistic type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlayerStats {
    pub game: String,
    /// Statistic type then its values, as sent.
    pub stats: Vec<i32>,
}

impl PlayerStats {
    /// Resources gained from dice rolls.
    pub const STYPE_RES_ROLL: i32 = 1;
    /// Per-trade-type give/get totals.
    pub const STYPE_TRADES: i32 = 2;

    /// The statistic type code.
    #[must_use]
    pub fn stat_type(&self) -> Option<i32> {
        self.stats.first().copied()
    }

    pub(crate) fn encode_payload(&self) -> String {
        template::encode_multi_ints(&self.game, &self.stats)
    }

    pub(crate) fn decode(parts: &[&str]) -> Option<Self> {
        let (game, stats) = template::decode_multi_ints(parts)?;
        if stats.is_empty() {
            return None;
        }
        Some(Self { game, stats })
    }

    pub(crate) fn render_payload(&self) -> String {
        let mut out = String::new();
        template::render_multi_ints(&mut out, Some(&self.game), &self.stats);
        out
    }
}

/// A player's hand size changed; the total is authoritative.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ResourceCount {
    pub game: String,
    pub player_number: i32,
    pub count: i32,
}

impl ResourceCount {
    pub(crate) fn encode_payload(&self) -> String {
        template::encode_game_ints(&self.game, &[self.player_number, self.count])
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let (game, [pn, count]) = template::decode_game_ints::<2>(data)?;
        Some(Self {
            game,
            player_number: pn,
            count,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!(
            "game={}|playerNumber={}|count={}",
            self.game, self.player_number, self.count
        )
    }
}

/// Resources gained by one player from a dice roll.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlayerRoll {
    pub player_number: i32,
    /// The player's resource total after gaining.
    pub total: i32,
    pub gained: ResourceSet,
}

/// All resources gained by players from one dice roll. The flat wire form
/// is: player count, then per player their number, new total, and
/// (amount, type) pairs, with a `0` amount separating players.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DiceResultResources {
    pub game: String,
    pub players: Vec<PlayerRoll>,
}

impl DiceResultResources {
    /// Validates that at least one player gained something.
    pub fn new(game: String, players: Vec<PlayerRoll>) -> Option<Self> {
        if players.is_empty() {
            return None;
        }
        Some(Self { game, players })
    }

    fn flat_values(&self) -> Vec<i32> {
        let mut values = vec![i32::try_from(self.players.len()).unwrap_or(0)];
        for (i, p) in self.players.iter().enumerate() {
            values.push(p.player_number);
            values.push(p.total);
            for rtype in crate::data::resource::CLAY..=crate::data::resource::WOOD {
                let amt = p.gained.amount(rtype);
                if amt != 0 {
                    values.push(amt);
                    values.push(rtype);
                }
            }
            if i + 1 < self.players.len() {
                values.push(0);
            }
        }
        values
    }

    pub(crate) fn encode_payload(&self) -> String {
        template::encode_multi_ints(&self.game, &self.flat_values())
    }

    pub(crate) fn decode(parts: &[&str]) -> Option<Self> {
        let (game, values) = template::decode_multi_ints(parts)?;
        let (&count, mut rest) = values.split_first()?;
        let mut players = Vec::new();
        while !rest.is_empty() {
            let (&pn, r) = rest.split_first()?;
            let (&total, r) = r.split_first()?;
            rest = r;
            let mut gained = ResourceSet::default();
            while let Some((&amt, r)) = rest.split_first() {
                rest = r;
                if amt == 0 {
                    break;
                }
                let (&rtype, r) = rest.split_first()?;
                rest = r;
                gained.add(amt, rtype);
            }
            players.push(PlayerRoll {
                player_number: pn,
                total,
                gained,
            });
        }
        if players.len() != usize::try_from(count).ok()? {
            return None;
        }
        Self::new(game, players)
    }

    pub(crate) fn render_payload(&self) -> String {
        let mut out = String::new();
        template::render_multi_ints(&mut out, Some(&self.game), &self.flat_values());
        out
    }
}

/// This player now holds the longest trade route.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LongestRoad {
    pub game: String,
    pub player_number: i32,
}

impl LongestRoad {
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

/// This player now holds the largest army.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LargestArmy {
    pub game: String,
    pub player_number: i32,
}

impl LargestArmy {
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

/// Lock or unlock seats: one seat, or every seat at once (protocol 2000+).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SetSeatLock {
    One {
        game: String,
        player_number: i32,
        state: SeatLockState,
    },
    All {
        game: String,
        states: Vec<SeatLockState>,
    },
}

impl SetSeatLock {
    /// Validates the all-seats form's seat count.
    pub fn all(game: String, states: Vec<SeatLockState>) -> Option<Self> {
        if states.len() != 4 && states.len() != 6 {
            return None;
        }
        Some(Self::All { game, states })
    }

    pub(crate) fn encode_payload(&self) -> String {
        let mut w = FieldWriter::new();
        match self {
            Self::One {
                game,
                player_number,
                state,
            } => {
                w.push_str(game);
                w.push_int(*player_number);
                w.push_str(state.wire_token());
            }
            Self::All { game, states } => {
                w.push_str(game);
                for st in states {
                    w.push_str(st.wire_token());
                }
            }
        }
        w.finish()
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let mut r = FieldReader::new(data);
        let game = r.next_str().ok()?.to_owned();
        let tok = r.next_str().ok()?;
        if tok.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            let player_number = tok.parse().ok()?;
            let state = SeatLockState::from_wire_token(r.next_str().ok()?)?;
            Some(Self::One {
                game,
                player_number,
                state,
            })
        } else {
            let mut states = vec![SeatLockState::from_wire_token(tok)?];
            while !r.is_empty() {
                states.push(SeatLockState::from_wire_token(r.next_str().ok()?)?);
            }
            Self::all(game, states)
        }
    }

    pub(crate) fn render_payload(&self) -> String {
        match self {
            Self::One {
                game,
                player_number,
                state,
            } => format!(
                "game={game}|playerNumber={player_number}|state={}",
                state.symbol()
            ),
            Self::All { game, states } => {
                let mut out = format!("game={game}|states=");
                for (i, st) in states.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    out.push_str(st.symbol());
                }
                out
            }
        }
    }

    pub(crate) fn strip_labels(body: &str) -> Option<String> {
        let game = body.strip_prefix("game=")?;
        let game = &game[..game.find('|')?];
        let mut out = String::from(game);
        if let Some(states) = super::trade::labeled_field(body, "|states=") {
            for sym in states.split(',') {
                let _ = write!(out, ",{}", SeatLockState::from_symbol(sym)?.wire_token());
            }
        } else {
            let pn = super::trade::labeled_field(body, "|playerNumber=")?;
            let state = SeatLockState::from_symbol(super::trade::labeled_field(body, "|state=")?)?;
            let _ = write!(out, ",{pn},{}", state.wire_token());
        }
        Some(out)
    }
}

/// Generic simple request from a player; meaning depends on the request
/// type code.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimpleRequest {
    pub game: String,
    pub player_number: i32,
    pub request_type: i32,
    pub value1: i32,
    pub value2: i32,
}

impl SimpleRequest {
    pub const PROMPT_PICK_RESOURCES: i32 = 1;
    pub const FORTRESS_ATTACK: i32 = 1000;
    pub const TRADE_PORT_PLACE: i32 = 1001;

    pub(crate) fn encode_payload(&self) -> String {
        template::encode_game_ints(
            &self.game,
            &[
                self.player_number,
                self.request_type,
                self.value1,
                self.value2,
            ],
        )
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let (game, [pn, rt, v1, v2]) = template::decode_game_ints::<4>(data)?;
        Some(Self {
            game,
            player_number: pn,
            request_type: rt,
            value1: v1,
            value2: v2,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!(
            "game={}|pn={}|reqType={}|v1={}|v2={}",
            self.game, self.player_number, self.request_type, self.value1, self.value2
        )
    }
}

/// Generic simple action announcement for a player or the whole game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimpleAction {
    pub game: String,
    pub player_number: i32,
    pub action_type: i32,
    pub value1: i32,
    pub value2: i32,
}

impl SimpleAction {
    pub(crate) fn encode_payload(&self) -> String {
        template::encode_game_ints(
            &self.game,
            &[
                self.player_number,
                self.action_type,
                self.value1,
                self.value2,
            ],
        )
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let (game, [pn, at, v1, v2]) = template::decode_game_ints::<4>(data)?;
        Some(Self {
            game,
            player_number: pn,
            action_type: at,
            value1: v1,
            value2: v2,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!(
            "game={}|pn={}|actType={}|v1={}|v2={}",
            self.game, self.player_number, self.action_type, self.value1, self.value2
        )
    }
}

/// Server asks a bot to cross-check its tracked game data against the
/// authoritative values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BotGameDataCheck {
    pub game: String,
    pub data_type: i32,
    pub values: Vec<i32>,
}

impl BotGameDataCheck {
    /// Per-seat resource totals.
    pub const TYPE_RESOURCE_AMOUNTS: i32 = 1;

    /// Validates the non-empty values invariant.
    pub fn new(game: String, data_type: i32, values: Vec<i32>) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        Some(Self {
            game,
            data_type,
            values,
        })
    }

    pub(crate) fn encode_payload(&self) -> String {
        let mut all = vec![self.data_type];
        all.extend_from_slice(&self.values);
        template::encode_multi_ints(&self.game, &all)
    }

    pub(crate) fn decode(parts: &[&str]) -> Option<Self> {
        let (game, values) = template::decode_multi_ints(parts)?;
        let (&data_type, rest) = values.split_first()?;
        Self::new(game, data_type, rest.to_vec())
    }

    pub(crate) fn render_payload(&self) -> String {
        let mut all = vec![self.data_type];
        all.extend_from_slice(&self.values);
        let mut out = String::new();
        template::render_multi_ints(&mut out, Some(&self.game), &all);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_element_news_flag() {
        let m = PlayerElement::new("ga".into(), 2, element_action::LOSE, 4, 1, true).unwrap();
        assert_eq!(m.encode_payload(), "ga,2,102,4,1,Y");
        assert_eq!(PlayerElement::decode("ga,2,102,4,1,Y").unwrap(), m);
        assert_eq!(
            m.render_payload(),
            "game=ga|playerNum=2|actionType=LOSE|elementType=4|amount=1|news=Y"
        );
    }

    #[test]
    fn player_element_rejects_negative_action() {
        assert!(PlayerElement::new("ga".into(), 2, element_action::LOSE_NEWS, 4, 1, false).is_none());
    }

    #[test]
    fn player_elements_pairs() {
        let m = PlayerElements::new(
            "ga".into(),
            2,
            element_action::GAIN,
            vec![1, 3, 4, 5],
            vec![1, 2, 3, 4],
        )
        .unwrap();
        assert_eq!(m.encode_payload(), "ga|2|101|1|1|3|2|4|3|5|4");
        let payload = m.encode_payload();
        let parts: Vec<&str> = payload.split('|').collect();
        assert_eq!(PlayerElements::decode(&parts).unwrap(), m);
        assert_eq!(
            m.render_payload(),
            "game=ga|playerNum=2|actionType=GAIN|e1=1,e3=2,e4=3,e5=4"
        );
        assert_eq!(
            PlayerElements::strip_labels(&m.render_payload()).unwrap(),
            payload
        );
    }

    #[test]
    fn game_elements_strip() {
        let m = GameElements::new("ga".into(), vec![2, 1, 3, 6, 5], vec![25, 2, 1, -1, -1]).unwrap();
        assert_eq!(m.encode_payload(), "ga|2|25|1|2|3|1|6|-1|5|-1");
        assert_eq!(
            m.render_payload(),
            "game=ga|e2=25,e1=2,e3=1,e6=-1,e5=-1"
        );
        assert_eq!(
            GameElements::strip_labels(&m.render_payload()).unwrap(),
            m.encode_payload()
        );
    }

    #[test]
    fn dice_result_resources_flat_form() {
        let m = DiceResultResources::new(
            "ga".into(),
            vec![
                PlayerRoll {
                    player_number: 1,
                    total: 6,
                    gained: ResourceSet::new(4, 0, 0, 0, 2, 0),
                },
                PlayerRoll {
                    player_number: 3,
                    total: 7,
                    gained: ResourceSet::new(0, 2, 0, 5, 0, 0),
                },
            ],
        )
        .unwrap();
        assert_eq!(m.encode_payload(), "ga|2|1|6|4|1|2|5|0|3|7|2|2|5|4");
        let payload = m.encode_payload();
        let parts: Vec<&str> = payload.split('|').collect();
        assert_eq!(DiceResultResources::decode(&parts).unwrap(), m);
    }

    #[test]
    fn seat_lock_both_forms() {
        let one = SetSeatLock::One {
            game: "ga".into(),
            player_number: 2,
            state: SeatLockState::Locked,
        };
        assert_eq!(one.encode_payload(), "ga,2,true");
        assert_eq!(SetSeatLock::decode("ga,2,true").unwrap(), one);

        let all = SetSeatLock::all(
            "ga".into(),
            vec![
                SeatLockState::Unlocked,
                SeatLockState::ClearOnReset,
                SeatLockState::Locked,
                SeatLockState::Unlocked,
            ],
        )
        .unwrap();
        assert_eq!(all.encode_payload(), "ga,false,clear,true,false");
        assert_eq!(SetSeatLock::decode("ga,false,clear,true,false").unwrap(), all);
        assert_eq!(
            all.render_payload(),
            "game=ga|states=UNLOCKED,CLEAR_ON_RESET,LOCKED,UNLOCKED"
        );
        assert_eq!(
            SetSeatLock::strip_labels(&all.render_payload()).unwrap(),
            all.encode_payload()
        );
    }
}
