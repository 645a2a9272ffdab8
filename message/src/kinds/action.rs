//! Scenario special items, robbery reports and the undo action record.

use std::fmt::Write as _;

use wire::{FieldReader, FieldWriter, EMPTY_STR};

use crate::data::{resource, ResourceSet};
use crate::strip::strip_attribs_to_list;

/// Special item requests and change announcements, used by scenarios that
/// track named item lists per game and per player.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SetSpecialItem {
    pub game: String,
    pub op: i32,
    pub type_key: String,
    pub game_item_index: i32,
    pub player_item_index: i32,
    pub player_number: i32,
    pub coord: i32,
    pub level: i32,
    pub string_value: Option<String>,
}

impl SetSpecialItem {
    pub const OP_SET: i32 = 1;
    pub const OP_CLEAR: i32 = 2;
    pub const OP_PICK: i32 = 3;
    pub const OP_DECLINE: i32 = 4;
    pub const OP_SET_PICK: i32 = 5;
    pub const OP_CLEAR_PICK: i32 = 6;

    const OP_SYMBOLS: [&'static str; 6] =
        ["SET", "CLEAR", "PICK", "DECLINE", "SET_PICK", "CLEAR_PICK"];

    /// Validates the index and string-value invariants.
    pub fn new(
        game: String,
        op: i32,
        type_key: String,
        game_item_index: i32,
        player_item_index: i32,
        player_number: i32,
        coord: i32,
        level: i32,
        string_value: Option<String>,
    ) -> Option<Self> {
        if player_number != -1 && player_item_index == -1 {
            return None;
        }
        if player_item_index == -1 && game_item_index == -1 {
            return None;
        }
        if let Some(sv) = &string_value {
            if !wire::is_single_line_and_safe(sv) {
                return None;
            }
        }
        Some(Self {
            game,
            op,
            type_key,
            game_item_index,
            player_item_index,
            player_number,
            coord,
            level,
            string_value: string_value.filter(|sv| !sv.is_empty()),
        })
    }

    pub(crate) fn encode_payload(&self) -> String {
        let mut w = FieldWriter::new();
        w.push_str(&self.game);
        w.push_int(self.op);
        w.push_str(&self.type_key);
        w.push_int(self.game_item_index);
        w.push_int(self.player_item_index);
        w.push_int(self.player_number);
        w.push_int(self.coord);
        w.push_int(self.level);
        w.push_str_or_placeholder(self.string_value.as_deref().unwrap_or(""));
        w.finish()
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let mut r = FieldReader::new(data);
        let game = r.next_str().ok()?.to_owned();
        let op = r.next_int().ok()?;
        let type_key = r.next_str().ok()?.to_owned();
        let game_item_index = r.next_int().ok()?;
        let player_item_index = r.next_int().ok()?;
        let player_number = r.next_int().ok()?;
        let coord = r.next_int().ok()?;
        let level = r.next_int().ok()?;
        let sv = r.next_str().ok()?;
        let string_value = if sv == EMPTY_STR {
            None
        } else {
            Some(sv.to_owned())
        };
        Self::new(
            game,
            op,
            type_key,
            game_item_index,
            player_item_index,
            player_number,
            coord,
            level,
            string_value,
        )
    }

    pub(crate) fn render_payload(&self) -> String {
        let op = usize::try_from(self.op - 1)
            .ok()
            .and_then(|i| Self::OP_SYMBOLS.get(i))
            .map_or_else(|| self.op.to_string(), |s| (*s).to_owned());
        let mut out = format!(
            "game={}|op={op}|typeKey={}|gi={}|pi={}|pn={}|co={}|lv={}",
            self.game,
            self.type_key,
            self.game_item_index,
            self.player_item_index,
            self.player_number,
            if self.coord >= 0 {
                super::board::render_hex32(self.coord)
            } else {
                self.coord.to_string()
            },
            self.level
        );
        match &self.string_value {
            Some(sv) => {
                let _ = write!(out, "|sv={sv}");
            }
            None => out.push_str("|sv null"),
        }
        out
    }

    pub(crate) fn strip_labels(body: &str) -> Option<String> {
        let sv_null = body.ends_with("|sv null");
        if !sv_null && !body.contains("|sv=") {
            return None;
        }
        let pieces = strip_attribs_to_list(body);
        if pieces.len() != 9 {
            return None;
        }
        let op = Self::OP_SYMBOLS
            .iter()
            .position(|s| *s == pieces[1])
            .map(|i| i + 1)?;
        let coord = if pieces[6].starts_with('-') {
            pieces[6].parse().ok()?
        } else {
            super::board::parse_hex32(pieces[6])?
        };
        let mut out = format!("{},{op},{},{},{},{},{coord},{}", pieces[0], pieces[2], pieces[3], pieces[4], pieces[5], pieces[7]);
        out.push(',');
        out.push_str(if sv_null { EMPTY_STR } else { pieces[8] });
        Some(out)
    }
}

/// Detail of a completed robbery: who robbed whom and what was taken.
/// Exactly one of the resource-type, resource-set, or player-element forms
/// is used per message.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum RobberyLoot {
    /// A single resource type and amount.
    Resource { resource_type: i32, amount: i32 },
    /// Several known resources at once.
    ResourceSet(ResourceSet),
    /// A player-element value (scenario cloth, for example).
    Element { element_type: i32, amount: i32 },
}

/// Report of a robbery's result.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReportRobbery {
    pub game: String,
    pub perpetrator: i32,
    pub victim: i32,
    pub loot: RobberyLoot,
    /// `true`: the amount moved from victim to perpetrator. `false`: the
    /// amounts are each side's new totals.
    pub is_gain_lose: bool,
    pub victim_amount: i32,
    pub extra_value: i32,
}

impl ReportRobbery {
    /// Validates the loot/amount invariants.
    pub fn new(
        game: String,
        perpetrator: i32,
        victim: i32,
        loot: RobberyLoot,
        is_gain_lose: bool,
        victim_amount: i32,
        extra_value: i32,
    ) -> Option<Self> {
        match &loot {
            RobberyLoot::ResourceSet(rs) => {
                if rs.is_empty() {
                    return None;
                }
                if !is_gain_lose || victim_amount != 0 {
                    return None;
                }
            }
            RobberyLoot::Resource { amount, .. } | RobberyLoot::Element { amount, .. } => {
                if *amount < 0 || victim_amount < 0 {
                    return None;
                }
                if is_gain_lose && victim_amount != 0 {
                    return None;
                }
            }
        }
        Some(Self {
            game,
            perpetrator,
            victim,
            loot,
            is_gain_lose,
            victim_amount,
            extra_value,
        })
    }

    pub(crate) fn encode_payload(&self) -> String {
        let mut w = FieldWriter::new();
        w.push_str(&self.game);
        w.push_int(self.perpetrator);
        w.push_int(self.victim);
        match &self.loot {
            RobberyLoot::Resource {
                resource_type,
                amount,
            } => {
                w.push_str("R");
                w.push_int(*resource_type);
                w.push_int(*amount);
            }
            RobberyLoot::ResourceSet(rs) => {
                w.push_str("S");
                for rtype in resource::CLAY..=resource::WOOD {
                    let amt = rs.amount(rtype);
                    if amt != 0 {
                        w.push_int(rtype);
                        w.push_int(amt);
                    }
                }
            }
            RobberyLoot::Element {
                element_type,
                amount,
            } => {
                w.push_str("E");
                w.push_int(*element_type);
                w.push_int(*amount);
            }
        }
        w.push_str(if self.is_gain_lose { "T" } else { "F" });
        if self.victim_amount != 0 || self.extra_value != 0 {
            w.push_int(self.victim_amount);
            if self.extra_value != 0 {
                w.push_int(self.extra_value);
            }
        }
        w.finish()
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let mut r = FieldReader::new(data);
        let game = r.next_str().ok()?.to_owned();
        let perpetrator = r.next_int().ok()?;
        let victim = r.next_int().ok()?;
        let kind = r.next_str().ok()?;
        let loot = match kind {
            "R" => RobberyLoot::Resource {
                resource_type: r.next_int().ok()?,
                amount: r.next_int().ok()?,
            },
            "E" => RobberyLoot::Element {
                element_type: r.next_int().ok()?,
                amount: r.next_int().ok()?,
            },
            "S" => {
                let mut rs = ResourceSet::default();
                let mut any = false;
                while let Some(tok) = r.peek() {
                    if tok == "T" || tok == "F" {
                        break;
                    }
                    let rtype = r.next_int().ok()?;
                    let amount = r.next_int().ok()?;
                    rs.set_amount(amount, rtype);
                    any = true;
                }
                if !any {
                    return None;
                }
                RobberyLoot::ResourceSet(rs)
            }
            _ => return None,
        };
        let is_gain_lose = match r.next_str().ok()? {
            "T" => true,
            "F" => false,
            _ => return None,
        };
        let victim_amount = if r.is_empty() { 0 } else { r.next_int().ok()? };
        let extra_value = if r.is_empty() { 0 } else { r.next_int().ok()? };
        Self::new(
            game,
            perpetrator,
            victim,
            loot,
            is_gain_lose,
            victim_amount,
            extra_value,
        )
    }

    pub(crate) fn render_payload(&self) -> String {
        let mut out = format!(
            "game={}|perp={}|victim={}",
            self.game, self.perpetrator, self.victim
        );
        match &self.loot {
            RobberyLoot::Resource {
                resource_type,
                amount,
            } => {
                let _ = write!(out, "|resType={resource_type}|amount={amount}");
            }
            RobberyLoot::ResourceSet(rs) => {
                out.push_str("|resSet=");
                rs.render(&mut out);
            }
            RobberyLoot::Element {
                element_type,
                amount,
            } => {
                let _ = write!(out, "|peType={element_type}|amount={amount}");
            }
        }
        let _ = write!(out, "|isGainLose={}", self.is_gain_lose);
        if self.victim_amount != 0 || !self.is_gain_lose {
            let _ = write!(out, "|victimAmount={}", self.victim_amount);
        }
        if self.extra_value != 0 {
            let _ = write!(out, "|extraValue={}", self.extra_value);
        }
        out
    }

    pub(crate) fn strip_labels(body: &str) -> Option<String> {
        let is_element = body.contains("|peType=");
        let is_set = !is_element && body.contains("|resSet=");
        let extra_without_victim =
            body.contains("|extraValue=") && !body.contains("|victimAmount=");

        let mut pieces: Vec<String> = strip_attribs_to_list(body)
            .iter()
            .map(|s| (*s).to_owned())
            .collect();
        if pieces.len() < 5 {
            return None;
        }
        pieces.insert(
            3,
            (if is_set {
                "S"
            } else if is_element {
                "E"
            } else {
                "R"
            })
            .to_owned(),
        );

        let mut bool_idx = 6;
        if is_set {
            // six labeled amounts become (type, amount) pairs, unknown
            // amounts are never sent
            if pieces.len() < 11 {
                return None;
            }
            let mut pairs = Vec::new();
            for (offset, rtype) in (resource::CLAY..=resource::WOOD).enumerate() {
                // the first amount keeps its inner label after the generic
                // strip removed only "resSet="
                let piece = pieces.get(4 + offset)?;
                let piece = piece.strip_prefix("clay=").unwrap_or(piece);
                let amt: i32 = piece.parse().ok()?;
                if amt != 0 {
                    pairs.push(rtype.to_string());
                    pairs.push(amt.to_string());
                }
            }
            pieces.splice(4..10, pairs.clone());
            bool_idx = 4 + pairs.len();
        }

        let flag = pieces.get_mut(bool_idx)?;
        *flag = (if flag == "true" { "T" } else { "F" }).to_owned();
        if extra_without_victim {
            pieces.insert(pieces.len() - 1, "0".to_owned());
        }
        Some(pieces.join(","))
    }
}

/// Snapshot of the game's most recent action, sent to a client joining or
/// reloading so undo keeps working.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SetLastAction {
    pub game: String,
    pub action_type: i32,
    pub param1: i32,
    pub param2: i32,
    pub param3: i32,
    pub resources1: Option<ResourceSet>,
    pub resources2: Option<ResourceSet>,
}

/// Symbolic names for the recorded action types that appear in
/// renderings.
const ACTION_TYPE_SYMBOLS: [(i32, &str); 8] = [
    (1, "ROLL_DICE"),
    (10, "BUILD_PIECE"),
    (20, "MOVE_PIECE"),
    (30, "BUY_DEV_CARD"),
    (40, "PLAY_DEV_CARD"),
    (50, "TRADE_BANK"),
    (60, "TRADE_PLAYER"),
    (70, "END_TURN"),
];

impl SetLastAction {
    pub(crate) fn encode_payload(&self) -> String {
        let mut w = FieldWriter::new();
        w.push_str(&self.game);
        w.push_int(self.action_type);
        w.push_int(self.param1);
        w.push_int(self.param2);
        w.push_int(self.param3);
        if let Some(rs) = &self.resources1 {
            w.push_str("R1");
            rs.encode_known(&mut w);
        }
        if let Some(rs) = &self.resources2 {
            w.push_str("R2");
            rs.encode_known(&mut w);
        }
        w.finish()
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let mut r = FieldReader::new(data);
        let game = r.next_str().ok()?.to_owned();
        let action_type = r.next_int().ok()?;
        let param1 = r.next_int().ok()?;
        let param2 = r.next_int().ok()?;
        let param3 = r.next_int().ok()?;
        let mut resources1 = None;
        let mut resources2 = None;
        while !r.is_empty() {
            match r.next_str().ok()? {
                "R1" => resources1 = Some(ResourceSet::decode_known(&mut r).ok()?),
                "R2" => resources2 = Some(ResourceSet::decode_known(&mut r).ok()?),
                _ => return None,
            }
        }
        Some(Self {
            game,
            action_type,
            param1,
            param2,
            param3,
            resources1,
            resources2,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        let mut out = format!("game={}|actType=", self.game);
        match ACTION_TYPE_SYMBOLS
            .iter()
            .find(|(code, _)| *code == self.action_type)
        {
            Some((_, sym)) => out.push_str(sym),
            None => {
                let _ = write!(out, "{}", self.action_type);
            }
        }
        if self.param1 != 0 || self.param2 != 0 || self.param3 != 0 {
            let _ = write!(out, "|p1={}", self.param1);
            if self.param2 != 0 || self.param3 != 0 {
                let _ = write!(out, "|p2={}", self.param2);
                if self.param3 != 0 {
                    let _ = write!(out, "|p3={}", self.param3);
                }
            }
        }
        if let Some(rs) = &self.resources1 {
            out.push_str("|rs1=[");
            rs.render(&mut out);
            out.push(']');
        }
        if let Some(rs) = &self.resources2 {
            out.push_str("|rs2=[");
            rs.render(&mut out);
            out.push(']');
        }
        out
    }

    pub(crate) fn strip_labels(body: &str) -> Option<String> {
        let mut body = body
            .replace("|rs1=[", "|R1|")
            .replace("|rs2=[", "|R2|")
            .replace("|unknown=0]", "");
        // map a symbolic action name back to its code
        let start = body.find("|actType=")? + 9;
        let end = body[start..].find('|').map_or(body.len(), |i| start + i);
        let ident = &body[start..end];
        if !ident.chars().next()?.is_ascii_digit() {
            let code = ACTION_TYPE_SYMBOLS
                .iter()
                .find(|(_, sym)| *sym == ident)
                .map(|(code, _)| *code)?;
            body.replace_range(start..end, &code.to_string());
        }
        let stripped = crate::strip::strip_attrib_names(&body);

        // omitted zero params must be restored before any resource tails
        let fields: Vec<&str> = stripped.split(',').collect();
        let r_pos = fields
            .iter()
            .position(|f| *f == "R1" || *f == "R2")
            .unwrap_or(fields.len());
        if r_pos >= 5 {
            return Some(stripped);
        }
        let mut out: Vec<String> = fields[..r_pos].iter().map(|s| (*s).to_owned()).collect();
        while out.len() < 5 {
            out.push("0".to_owned());
        }
        out.extend(fields[r_pos..].iter().map(|s| (*s).to_owned()));
        Some(out.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_item_sv_null() {
        let m = SetSpecialItem::new(
            "ga".into(),
            SetSpecialItem::OP_CLEAR_PICK,
            "_SC_WOND".into(),
            2,
            0,
            3,
            -1,
            0,
            None,
        )
        .unwrap();
        assert_eq!(m.encode_payload(), format!("ga,6,_SC_WOND,2,0,3,-1,0,{EMPTY_STR}"));
        assert_eq!(
            m.render_payload(),
            "game=ga|op=CLEAR_PICK|typeKey=_SC_WOND|gi=2|pi=0|pn=3|co=-1|lv=0|sv null"
        );
        assert_eq!(SetSpecialItem::decode(&m.encode_payload()).unwrap(), m);
        assert_eq!(
            SetSpecialItem::strip_labels(&m.render_payload()).unwrap(),
            m.encode_payload()
        );
    }

    #[test]
    fn special_item_sv_value() {
        let m = SetSpecialItem::new(
            "ga".into(),
            SetSpecialItem::OP_SET,
            "_SC_WOND".into(),
            2,
            0,
            3,
            -1,
            2,
            Some("w2".into()),
        )
        .unwrap();
        assert_eq!(m.encode_payload(), "ga,1,_SC_WOND,2,0,3,-1,2,w2");
        assert_eq!(
            SetSpecialItem::strip_labels(&m.render_payload()).unwrap(),
            m.encode_payload()
        );
    }

    #[test]
    fn robbery_resource_form() {
        let m = ReportRobbery::new(
            "ga".into(),
            2,
            3,
            RobberyLoot::Resource {
                resource_type: resource::WHEAT,
                amount: 1,
            },
            true,
            0,
            0,
        )
        .unwrap();
        assert_eq!(m.encode_payload(), "ga,2,3,R,4,1,T");
        assert_eq!(ReportRobbery::decode("ga,2,3,R,4,1,T").unwrap(), m);
        assert_eq!(
            m.render_payload(),
            "game=ga|perp=2|victim=3|resType=4|amount=1|isGainLose=true"
        );
        assert_eq!(
            ReportRobbery::strip_labels(&m.render_payload()).unwrap(),
            m.encode_payload()
        );
    }

    #[test]
    fn robbery_totals_form() {
        let m = ReportRobbery::new(
            "ga".into(),
            2,
            3,
            RobberyLoot::Resource {
                resource_type: resource::WHEAT,
                amount: 5,
            },
            false,
            7,
            4,
        )
        .unwrap();
        assert_eq!(m.encode_payload(), "ga,2,3,R,4,5,F,7,4");
        assert_eq!(ReportRobbery::decode(&m.encode_payload()).unwrap(), m);
        assert_eq!(
            ReportRobbery::strip_labels(&m.render_payload()).unwrap(),
            m.encode_payload()
        );
    }

    #[test]
    fn robbery_extra_without_victim_amount() {
        let m = ReportRobbery::new(
            "ga".into(),
            3,
            2,
            RobberyLoot::Element {
                element_type: 106,
                amount: 1,
            },
            true,
            0,
            4,
        )
        .unwrap();
        assert_eq!(m.encode_payload(), "ga,3,2,E,106,1,T,0,4");
        assert_eq!(
            m.render_payload(),
            "game=ga|perp=3|victim=2|peType=106|amount=1|isGainLose=true|extraValue=4"
        );
        assert_eq!(
            ReportRobbery::strip_labels(&m.render_payload()).unwrap(),
            m.encode_payload()
        );
    }

    #[test]
    fn robbery_resource_set_form() {
        let m = ReportRobbery::new(
            "ga".into(),
            -1,
            3,
            RobberyLoot::ResourceSet(ResourceSet::new(7, 0, 0, 6, 0, 0)),
            true,
            0,
            0,
        )
        .unwrap();
        assert_eq!(m.encode_payload(), "ga,-1,3,S,1,7,4,6,T");
        assert_eq!(ReportRobbery::decode(&m.encode_payload()).unwrap(), m);
        assert_eq!(
            ReportRobbery::strip_labels(&m.render_payload()).unwrap(),
            m.encode_payload()
        );
    }

    #[test]
    fn set_last_action_resource_tails() {
        let m = SetLastAction {
            game: "ga".into(),
            action_type: 40,
            param1: 2,
            param2: 0,
            param3: 0,
            resources1: Some(ResourceSet::new(1, 0, 0, 1, 0, 0)),
            resources2: None,
        };
        assert_eq!(m.encode_payload(), "ga,40,2,0,0,R1,1,0,0,1,0");
        assert_eq!(SetLastAction::decode(&m.encode_payload()).unwrap(), m);
        assert_eq!(
            m.render_payload(),
            "game=ga|actType=PLAY_DEV_CARD|p1=2|rs1=[clay=1|ore=0|sheep=0|wheat=1|wood=0|unknown=0]"
        );
        assert_eq!(
            SetLastAction::strip_labels(&m.render_payload()).unwrap(),
            m.encode_payload()
        );
    }

    #[test]
    fn set_last_action_zero_params() {
        let m = SetLastAction {
            game: "ga".into(),
            action_type: 70,
            param1: 0,
            param2: 0,
            param3: 0,
            resources1: None,
            resources2: None,
        };
        assert_eq!(m.encode_payload(), "ga,70,0,0,0");
        assert_eq!(m.render_payload(), "game=ga|actType=END_TURN");
        assert_eq!(
            SetLastAction::strip_labels(&m.render_payload()).unwrap(),
            m.encode_payload()
        );
    }
}
