//! Board geometry kinds: layouts, piece placement and legal positions.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use wire::{FieldReader, FieldWriter, RangeList};

use crate::template;

/// Land hex type codes used by the board model.
pub mod hex {
    pub const WATER: i32 = 0;
    pub const CLAY: i32 = 1;
    pub const ORE: i32 = 2;
    pub const SHEEP: i32 = 3;
    pub const WHEAT: i32 = 4;
    pub const WOOD: i32 = 5;
    pub const DESERT: i32 = 6;
}

/// Land hex codes as sent by the classic layout message, which must stay
/// wire-compatible with the very first protocol release: water and desert
/// swap codes relative to the board model.
const SENT_WATER: i32 = 6;
const SENT_DESERT: i32 = 0;

/// Dice number -> sent code for the classic layout message.
const NUM_TO_SENT: [i32; 13] = [-1, -1, 0, 1, 2, 3, 4, -1, 5, 6, 7, 8, 9];
/// Sent code -> dice number.
const SENT_TO_NUM: [i32; 10] = [2, 3, 4, 5, 6, 8, 9, 10, 11, 12];

/// Number of hexes in the classic board layout.
const CLASSIC_HEX_COUNT: usize = 37;

fn remap_hex_to_sent(h: i32) -> i32 {
    match h {
        hex::WATER => SENT_WATER,
        hex::DESERT => SENT_DESERT,
        other => other,
    }
}

fn remap_sent_to_hex(h: i32) -> i32 {
    match h {
        SENT_WATER => hex::WATER,
        SENT_DESERT => hex::DESERT,
        other => other,
    }
}

/// Formats an `i32` the way the renderings expect hex coordinates:
/// lowercase, two's complement for negatives.
pub(crate) fn render_hex32(v: i32) -> String {
    format!("{:x}", u32::from_le_bytes(v.to_le_bytes()))
}

/// Parses a [`render_hex32`]-style token.
pub(crate) fn parse_hex32(tok: &str) -> Option<i32> {
    u32::from_str_radix(tok, 16)
        .ok()
        .map(|v| i32::from_le_bytes(v.to_le_bytes()))
}

/// Classic 4-player board layout. The wire carries the first protocol
/// release's hex and dice-number codes; the stored arrays are the sent
/// form, remapped in [`BoardLayout::from_board`] and the accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BoardLayout {
    pub game: String,
    /// Hex layout in sent codes, 37 entries.
    pub hex_layout: Vec<i32>,
    /// Dice-number layout in sent codes, 37 entries.
    pub number_layout: Vec<i32>,
    pub robber_hex: i32,
}

impl BoardLayout {
    /// Builds the message from board-model values, remapping to the sent
    /// codes.
    #[must_use]
    pub fn from_board(game: String, hexes: &[i32], numbers: &[i32], robber_hex: i32) -> Self {
        let hex_layout = hexes.iter().map(|&h| remap_hex_to_sent(h)).collect();
        let number_layout = numbers
            .iter()
            .map(|&n| {
                usize::try_from(n)
                    .ok()
                    .and_then(|i| NUM_TO_SENT.get(i).copied())
                    .unwrap_or(-1)
            })
            .collect();
        Self {
            game,
            hex_layout,
            number_layout,
            robber_hex,
        }
    }

    /// Hex layout in board-model codes.
    #[must_use]
    pub fn board_hex_layout(&self) -> Vec<i32> {
        self.hex_layout.iter().map(|&h| remap_sent_to_hex(h)).collect()
    }

    /// Dice-number layout as actual dice numbers; no-number hexes are 0.
    #[must_use]
    pub fn board_number_layout(&self) -> Vec<i32> {
        self.number_layout
            .iter()
            .map(|&n| {
                usize::try_from(n).ok().and_then(|i| SENT_TO_NUM.get(i).copied()).unwrap_or(0)
            })
            .collect()
    }

    pub(crate) fn encode_payload(&self) -> String {
        let mut w = FieldWriter::new();
        w.push_str(&self.game);
        for &h in &self.hex_layout {
            w.push_int(h);
        }
        for &n in &self.number_layout {
            w.push_int(n);
        }
        w.push_int(self.robber_hex);
        w.finish()
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let mut r = FieldReader::new(data);
        let game = r.next_str().ok()?.to_owned();
        let mut hex_layout = Vec::with_capacity(CLASSIC_HEX_COUNT);
        for _ in 0..CLASSIC_HEX_COUNT {
            hex_layout.push(r.next_int().ok()?);
        }
        let mut number_layout = Vec::with_capacity(CLASSIC_HEX_COUNT);
        for _ in 0..CLASSIC_HEX_COUNT {
            number_layout.push(r.next_int().ok()?);
        }
        let robber_hex = r.next_int().ok()?;
        Some(Self {
            game,
            hex_layout,
            number_layout,
            robber_hex,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        let mut out = format!("game={}|hexLayout=", self.game);
        render_braced_ints(&mut out, &self.hex_layout, false);
        out.push_str("|numberLayout=");
        render_braced_ints(&mut out, &self.number_layout, false);
        let _ = write!(out, "|robberHex=0x{:x}", self.robber_hex);
        out
    }

    pub(crate) fn strip_labels(body: &str) -> Option<String> {
        let game = body.strip_prefix("game=")?;
        let game = &game[..game.find('|')?];
        let hexes = braced_field(body, "|hexLayout=")?;
        let numbers = braced_field(body, "|numberLayout=")?;
        let robber = body.rsplit("|robberHex=0x").next()?;
        let robber = parse_hex32(robber)?;
        let mut out = String::from(game);
        for tok in hexes.split_whitespace().chain(numbers.split_whitespace()) {
            out.push(',');
            out.push_str(tok);
        }
        let _ = write!(out, ",{robber}");
        Some(out)
    }
}

/// One keyed part of a v2 board layout.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LayoutPart {
    Int(i32),
    IntArray(Vec<i32>),
    /// Unrecognized scalar kept verbatim, so unknown future parts still
    /// round-trip.
    Str(String),
}

/// Board layout for the 6-player and sea board encodings: a board encoding
/// format number plus keyed parts. The `HL` part carries the same legacy
/// hex-code remap as the classic layout; every other part is sent as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BoardLayout2 {
    pub game: String,
    pub encoding_format: i32,
    pub parts: BTreeMap<String, LayoutPart>,
}

impl BoardLayout2 {
    /// Inserts the hex-layout part, remapping board-model codes to the
    /// legacy sent codes.
    pub fn insert_hex_layout(&mut self, hexes: &[i32]) {
        let sent = hexes.iter().map(|&h| remap_hex_to_sent(h)).collect();
        self.parts.insert("HL".into(), LayoutPart::IntArray(sent));
    }

    /// The hex-layout part in board-model codes, if present.
    #[must_use]
    pub fn board_hex_layout(&self) -> Option<Vec<i32>> {
        match self.parts.get("HL")? {
            LayoutPart::IntArray(sent) => {
                Some(sent.iter().map(|&h| remap_sent_to_hex(h)).collect())
            }
            _ => None,
        }
    }

    pub(crate) fn encode_payload(&self) -> String {
        let mut w = FieldWriter::new();
        w.push_str(&self.game);
        w.push_int(self.encoding_format);
        for (key, part) in &self.parts {
            w.push_str(key);
            match part {
                LayoutPart::Int(v) => w.push_int(*v),
                LayoutPart::IntArray(vs) => w.push_int_array(vs),
                LayoutPart::Str(s) => w.push_str(s),
            }
        }
        w.finish()
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let mut r = FieldReader::new(data);
        let game = r.next_str().ok()?.to_owned();
        let encoding_format = r.next_int().ok()?;
        let mut parts = BTreeMap::new();
        while !r.is_empty() {
            let key = r.next_str().ok()?.to_owned();
            let part = if r.peek()?.starts_with('[') {
                LayoutPart::IntArray(r.next_int_array().ok()?)
            } else {
                let tok = r.next_str().ok()?;
                tok.parse()
                    .map_or_else(|_| LayoutPart::Str(tok.to_owned()), LayoutPart::Int)
            };
            parts.insert(key, part);
        }
        Some(Self {
            game,
            encoding_format,
            parts,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        let mut out = format!("game={}|bef={}", self.game, self.encoding_format);
        for (key, part) in &self.parts {
            let _ = write!(out, "|{key}=");
            match part {
                LayoutPart::Int(v) => {
                    let _ = write!(out, "{v}");
                }
                LayoutPart::IntArray(vs) => {
                    let use_hex = key != "HL" && key != "NL";
                    render_braced_ints(&mut out, vs, use_hex);
                }
                LayoutPart::Str(s) => out.push_str(s),
            }
        }
        out
    }

    pub(crate) fn strip_labels(body: &str) -> Option<String> {
        let game = body.strip_prefix("game=")?;
        let game = &game[..game.find('|')?];
        let bef = super::trade::labeled_field(body, "|bef=")?;
        let mut out = format!("{game},{bef}");
        for piece in body.split('|').skip(2) {
            let (key, value) = piece.split_once('=')?;
            let _ = write!(out, ",{key}");
            if let Some(inner) = value.strip_prefix("{ ").and_then(|v| v.strip_suffix(" }")) {
                let toks: Vec<&str> = inner.split_whitespace().collect();
                let _ = write!(out, ",[{}", toks.len());
                let from_hex = key != "HL" && key != "NL";
                for tok in toks {
                    let v = if from_hex {
                        parse_hex32(tok)?
                    } else {
                        tok.parse().ok()?
                    };
                    let _ = write!(out, ",{v}");
                }
            } else {
                let _ = write!(out, ",{value}");
            }
        }
        Some(out)
    }
}

/// Legal and potential settlement positions for one player (or all
/// players), optionally with named land areas and per-seat legal sea edge
/// lists.
///
/// Distinct observable states, preserved through the codec:
/// - `nodes: None` with `starting_land_area == 0` means "combine all land
///   areas' nodes"; with a non-zero area it means the list was not sent.
/// - `nodes: Some(vec![])` is the explicit empty list, padded with a `0`
///   token in the extended wire form.
/// - a land area equal to the node list is implied on the wire (not
///   re-sent) and reconstructed on decode.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PotentialSettlements {
    pub game: String,
    pub player_number: i32,
    pub nodes: Option<Vec<i32>>,
    pub starting_land_area: i32,
    /// Land area `i` (1-based) is stored at index `i - 1`.
    pub land_areas: Option<Vec<Vec<i32>>>,
    pub legal_sea_edges: Option<Vec<RangeList>>,
}

impl PotentialSettlements {
    /// The simple single-list form.
    #[must_use]
    pub fn simple(game: String, player_number: i32, nodes: Vec<i32>) -> Self {
        Self {
            game,
            player_number,
            nodes: Some(nodes),
            starting_land_area: 1,
            land_areas: None,
            legal_sea_edges: None,
        }
    }

    fn area_implied(&self, area_index: usize) -> bool {
        let (Some(nodes), Some(areas)) = (&self.nodes, &self.land_areas) else {
            return false;
        };
        usize::try_from(self.starting_land_area).is_ok_and(|pan| {
            pan == area_index && pan >= 1 && areas.get(pan - 1) == Some(nodes)
        })
    }

    pub(crate) fn encode_payload(&self) -> String {
        let mut w = FieldWriter::new();
        w.push_str(&self.game);
        w.push_int(self.player_number);

        let extended = self.land_areas.is_some() || self.legal_sea_edges.is_some();
        match &self.nodes {
            Some(nodes) if nodes.is_empty() && extended => w.push_int(0),
            Some(nodes) => {
                for &n in nodes {
                    w.push_int(n);
                }
            }
            None => {}
        }
        if !extended {
            return w.finish();
        }

        let area_count = self.land_areas.as_ref().map_or(0, Vec::len);
        w.push_str("NA");
        w.push_int(i32::try_from(area_count).unwrap_or(0));
        w.push_str("PAN");
        w.push_int(self.starting_land_area);
        if let Some(areas) = &self.land_areas {
            for (idx, area) in areas.iter().enumerate() {
                let area_index = idx + 1;
                if self.area_implied(area_index) {
                    continue;
                }
                let mut label = String::from("LA");
                let _ = write!(label, "{area_index}");
                w.push_str(&label);
                for &n in area {
                    w.push_int(n);
                }
            }
        }
        if let Some(lse) = &self.legal_sea_edges {
            for (i, seat) in lse.iter().enumerate() {
                w.push_str("SE");
                if seat.is_empty() && i + 1 == lse.len() {
                    // an empty final list would otherwise end the line
                    // with no tokens
                    w.push_int(0);
                } else {
                    seat.encode(&mut w);
                }
            }
        }
        w.finish()
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let mut r = FieldReader::new(data);
        let game = r.next_str().ok()?.to_owned();
        let player_number = r.next_int().ok()?;

        let mut leading = Vec::new();
        let mut saw_na = false;
        while let Some(tok) = r.peek() {
            if tok == "NA" {
                let _ = r.next_str();
                saw_na = true;
                break;
            }
            leading.push(r.next_int().ok()?);
        }
        if !saw_na {
            return Some(Self::simple(game, player_number, leading));
        }

        // leading nodes before NA: absent, explicit-empty pad, or a list
        let nodes = if leading.is_empty() {
            None
        } else if leading == [0] {
            Some(Vec::new())
        } else {
            Some(leading)
        };

        let area_count = usize::try_from(r.next_int().ok()?).ok()?;
        if r.next_str().ok()? != "PAN" {
            return None;
        }
        let starting_land_area = r.next_int().ok()?;
        if starting_land_area < 0 {
            return None;
        }

        let mut areas: Vec<Option<Vec<i32>>> = vec![None; area_count];
        while let Some(tok) = r.peek() {
            if tok == "SE" {
                break;
            }
            let label = r.next_str().ok()?;
            let idx: usize = label.strip_prefix("LA")?.parse().ok()?;
            if idx == 0 || idx > area_count {
                return None;
            }
            let mut area = Vec::new();
            while let Some(tok) = r.peek() {
                if tok.starts_with("LA") || tok == "SE" {
                    break;
                }
                area.push(r.next_int().ok()?);
            }
            areas[idx - 1] = Some(area);
        }

        let mut legal_sea_edges = None;
        if r.peek() == Some("SE") {
            let mut lists = Vec::new();
            while r.peek() == Some("SE") {
                let _ = r.next_str();
                let mut toks = Vec::new();
                while let Some(tok) = r.peek() {
                    if tok == "SE" {
                        break;
                    }
                    toks.push(r.next_str().ok()?);
                }
                lists.push(RangeList::decode_tokens(&toks).ok()?);
            }
            legal_sea_edges = Some(lists);
        }

        // reconstruct the implied area from the node list
        let pan = usize::try_from(starting_land_area).ok()?;
        if pan >= 1 && pan <= area_count && areas[pan - 1].is_none() {
            areas[pan - 1] = Some(nodes.clone()?);
        }
        let land_areas = if area_count == 0 {
            None
        } else {
            // every declared area index must be present
            Some(areas.into_iter().collect::<Option<Vec<_>>>()?)
        };

        Some(Self {
            game,
            player_number,
            nodes,
            starting_land_area,
            land_areas,
            legal_sea_edges,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        let mut out = format!(
            "game={}|playerNum={}|list=",
            self.game, self.player_number
        );
        match &self.nodes {
            None if self.starting_land_area == 0 && self.land_areas.is_some() => {
                out.push_str("(fromAllLANodes)");
            }
            None => out.push_str("(null)"),
            Some(nodes) if nodes.is_empty() => out.push_str("(empty)"),
            Some(nodes) => {
                for &n in nodes {
                    let _ = write!(out, "{} ", render_hex32(n));
                }
            }
        }
        if let Some(areas) = &self.land_areas {
            if !areas.is_empty() {
                let _ = write!(out, "|pan={}", self.starting_land_area);
                for (idx, area) in areas.iter().enumerate() {
                    let _ = write!(out, "|la{}=", idx + 1);
                    if self.area_implied(idx + 1) {
                        out.push_str("(psList)");
                        continue;
                    }
                    for &n in area {
                        let _ = write!(out, "{} ", render_hex32(n));
                    }
                }
            }
        }
        if let Some(lse) = &self.legal_sea_edges {
            out.push_str("|lse={");
            for (i, seat) in lse.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push('{');
                render_lse_group(&mut out, seat);
                out.push('}');
            }
            out.push('}');
        }
        out
    }

    pub(crate) fn strip_labels(body: &str) -> Option<String> {
        let game = body.strip_prefix("game=")?;
        let game = &game[..game.find('|')?];
        let pn = super::trade::labeled_field(body, "|playerNum=")?;
        let list = super::trade::labeled_field(body, "|list=")?;
        let extended = body.contains("|pan=") || body.contains("|lse=");

        let mut out = format!("{game},{pn}");
        match list.trim_end() {
            "(null)" | "(fromAllLANodes)" => {}
            "(empty)" => {
                if extended {
                    out.push_str(",0");
                }
            }
            nodes => {
                for tok in nodes.split_whitespace() {
                    let _ = write!(out, ",{}", parse_hex32(tok)?);
                }
            }
        }
        if !extended {
            return Some(out);
        }

        let pan = super::trade::labeled_field(body, "|pan=").unwrap_or("0");
        let mut la_pieces: Vec<(usize, &str)> = Vec::new();
        for piece in body.split('|') {
            if let Some(rest) = piece.strip_prefix("la") {
                if let Some((idx, value)) = rest.split_once('=') {
                    if let Ok(idx) = idx.parse::<usize>() {
                        la_pieces.push((idx, value));
                    }
                }
            }
        }
        let _ = write!(out, ",NA,{},PAN,{pan}", la_pieces.len());
        for (idx, value) in la_pieces {
            if value == "(psList)" {
                continue;
            }
            let _ = write!(out, ",LA{idx}");
            for tok in value.split_whitespace() {
                let _ = write!(out, ",{}", parse_hex32(tok)?);
            }
        }

        if let Some(lse) = super::trade::labeled_field(body, "|lse=") {
            let inner = lse.strip_prefix("{{").and_then(|v| v.strip_suffix("}}"))?;
            let groups: Vec<&str> = inner.split("},{").collect();
            let last = groups.len() - 1;
            for (i, group) in groups.iter().enumerate() {
                out.push_str(",SE");
                if group.is_empty() {
                    if i == last {
                        out.push_str(",0");
                    }
                    continue;
                }
                for elem in group.split(',') {
                    match elem[1..].find('-') {
                        Some(pos) => {
                            let (start, close) = elem.split_at(pos + 1);
                            let _ = write!(out, ",{start},{close}");
                        }
                        None => {
                            let _ = write!(out, ",{elem}");
                        }
                    }
                }
            }
        }
        Some(out)
    }
}

fn render_lse_group(out: &mut String, seat: &RangeList) {
    let flat = seat.as_flat();
    for (j, &v) in flat.iter().enumerate() {
        if v < 0 {
            let _ = write!(out, "-{:x}", v.unsigned_abs());
        } else {
            if j > 0 {
                out.push(',');
            }
            let _ = write!(out, "{v:x}");
        }
    }
}

/// A player placed a piece on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PutPiece {
    pub game: String,
    pub player_number: i32,
    pub piece_type: i32,
    pub coord: i32,
}

impl PutPiece {
    pub(crate) fn encode_payload(&self) -> String {
        template::encode_game_ints(
            &self.game,
            &[self.player_number, self.piece_type, self.coord],
        )
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let (game, [pn, pt, coord]) = template::decode_game_ints::<3>(data)?;
        Some(Self {
            game,
            player_number: pn,
            piece_type: pt,
            coord,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!(
            "game={}|playerNumber={}|pieceType={}|coord={}",
            self.game,
            self.player_number,
            self.piece_type,
            render_hex32(self.coord)
        )
    }

    pub(crate) fn strip_labels(body: &str) -> Option<String> {
        strip_hex_coord_tail(body, 3)
    }
}

/// A player asked to build a piece of the given type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BuildRequest {
    pub game: String,
    pub piece_type: i32,
}

impl BuildRequest {
    pub(crate) fn encode_payload(&self) -> String {
        template::encode_game_ints(&self.game, &[self.piece_type])
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let (game, piece_type) = template::decode_game_int(data)?;
        Some(Self { game, piece_type })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!("game={}|pieceType={}", self.game, self.piece_type)
    }
}

/// A player cancelled a pending build request for the given piece type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CancelBuildRequest {
    pub game: String,
    pub piece_type: i32,
}

impl CancelBuildRequest {
    pub(crate) fn encode_payload(&self) -> String {
        template::encode_game_ints(&self.game, &[self.piece_type])
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let (game, piece_type) = template::decode_game_int(data)?;
        Some(Self { game, piece_type })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!("game={}|pieceType={}", self.game, self.piece_type)
    }
}

/// The robber (or pirate, negative coordinate) moved.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MoveRobber {
    pub game: String,
    pub player_number: i32,
    pub coord: i32,
}

impl MoveRobber {
    pub(crate) fn encode_payload(&self) -> String {
        template::encode_game_ints(&self.game, &[self.player_number, self.coord])
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let (game, [pn, coord]) = template::decode_game_ints::<2>(data)?;
        Some(Self {
            game,
            player_number: pn,
            coord,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!(
            "game={}|playerNumber={}|coord={}",
            self.game,
            self.player_number,
            render_hex32(self.coord)
        )
    }

    pub(crate) fn strip_labels(body: &str) -> Option<String> {
        strip_hex_coord_tail(body, 2)
    }
}

/// Where this player's most recent settlement went, for bots joining
/// mid-game. Superseded by the player-element form at protocol 2000.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LastSettlement {
    pub game: String,
    pub player_number: i32,
    pub coord: i32,
}

impl LastSettlement {
    pub(crate) fn encode_payload(&self) -> String {
        template::encode_game_ints(&self.game, &[self.player_number, self.coord])
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let (game, [pn, coord]) = template::decode_game_ints::<2>(data)?;
        Some(Self {
            game,
            player_number: pn,
            coord,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!(
            "game={}|playerNumber={}|coord={}",
            self.game,
            self.player_number,
            render_hex32(self.coord)
        )
    }

    pub(crate) fn strip_labels(body: &str) -> Option<String> {
        strip_hex_coord_tail(body, 2)
    }
}

/// Move a ship to a new edge.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MovePiece {
    pub game: String,
    pub player_number: i32,
    pub piece_type: i32,
    pub from_coord: i32,
    pub to_coord: i32,
}

impl MovePiece {
    /// Validates the coordinate invariants before construction.
    pub fn new(
        game: String,
        player_number: i32,
        piece_type: i32,
        from_coord: i32,
        to_coord: i32,
    ) -> Option<Self> {
        if piece_type < 0 || from_coord < 0 || to_coord < 0 {
            return None;
        }
        Some(Self {
            game,
            player_number,
            piece_type,
            from_coord,
            to_coord,
        })
    }

    pub(crate) fn encode_payload(&self) -> String {
        template::encode_game_ints(
            &self.game,
            &[
                self.player_number,
                self.piece_type,
                self.from_coord,
                self.to_coord,
            ],
        )
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let (game, [pn, pt, from, to]) = template::decode_game_ints::<4>(data)?;
        Self::new(game, pn, pt, from, to)
    }

    pub(crate) fn render_payload(&self) -> String {
        format!(
            "game={}|pn={}|pieceType={}|fromCoord={}|toCoord={}",
            self.game, self.player_number, self.piece_type, self.from_coord, self.to_coord
        )
    }
}

/// Remove a ship from the board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RemovePiece {
    pub game: String,
    pub player_number: i32,
    pub piece_type: i32,
    pub coord: i32,
}

impl RemovePiece {
    pub(crate) fn encode_payload(&self) -> String {
        template::encode_game_ints(
            &self.game,
            &[self.player_number, self.piece_type, self.coord],
        )
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let (game, [pn, pt, coord]) = template::decode_game_ints::<3>(data)?;
        Some(Self {
            game,
            player_number: pn,
            piece_type: pt,
            coord,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!(
            "game={}|pn={}|pieceType={}|coord={}",
            self.game, self.player_number, self.piece_type, self.coord
        )
    }
}

/// Undo the most recent piece placement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UndoPutPiece {
    pub game: String,
    pub player_number: i32,
    pub piece_type: i32,
    pub coord: i32,
}

impl UndoPutPiece {
    /// Validates the coordinate invariants before construction.
    pub fn new(game: String, player_number: i32, piece_type: i32, coord: i32) -> Option<Self> {
        if piece_type < 0 || coord < 0 {
            return None;
        }
        Some(Self {
            game,
            player_number,
            piece_type,
            coord,
        })
    }

    pub(crate) fn encode_payload(&self) -> String {
        template::encode_game_ints(
            &self.game,
            &[self.player_number, self.piece_type, self.coord],
        )
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let (game, [pn, pt, coord]) = template::decode_game_ints::<3>(data)?;
        Self::new(game, pn, pt, coord)
    }

    pub(crate) fn render_payload(&self) -> String {
        format!(
            "game={}|playerNumber={}|pieceType={}|coord={}",
            self.game,
            self.player_number,
            self.piece_type,
            render_hex32(self.coord)
        )
    }

    pub(crate) fn strip_labels(body: &str) -> Option<String> {
        strip_hex_coord_tail(body, 3)
    }
}

/// Reveal a fogged hex.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RevealFogHex {
    pub game: String,
    pub hex_coord: i32,
    pub hex_type: i32,
    pub dice_number: i32,
}

impl RevealFogHex {
    pub(crate) fn encode_payload(&self) -> String {
        template::encode_game_ints(
            &self.game,
            &[self.hex_coord, self.hex_type, self.dice_number],
        )
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let (game, [hc, ht, dn]) = template::decode_game_ints::<3>(data)?;
        Some(Self {
            game,
            hex_coord: hc,
            hex_type: ht,
            dice_number: dn,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!(
            "game={}|hexCoord={}|hexType={}|diceNum={}",
            self.game, self.hex_coord, self.hex_type, self.dice_number
        )
    }
}

/// Update the value field(s) of a piece on the board (scenario pieces).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PieceValue {
    pub game: String,
    pub piece_type: i32,
    pub coord: i32,
    pub value1: i32,
    pub value2: i32,
}

impl PieceValue {
    pub(crate) fn encode_payload(&self) -> String {
        template::encode_game_ints(
            &self.game,
            &[self.piece_type, self.coord, self.value1, self.value2],
        )
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let (game, [pt, coord, v1, v2]) = template::decode_game_ints::<4>(data)?;
        Some(Self {
            game,
            piece_type: pt,
            coord,
            value1: v1,
            value2: v2,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!(
            "game={}|pieceType={}|coord={}|pv1={}|pv2={}",
            self.game, self.piece_type, self.coord, self.value1, self.value2
        )
    }
}

/// Debug-mode free placement: toggle (piece type 0, coord 0/1) or place a
/// piece anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DebugFreePlace {
    pub game: String,
    pub player_number: i32,
    pub piece_type: i32,
    pub coord: i32,
}

impl DebugFreePlace {
    pub(crate) fn encode_payload(&self) -> String {
        template::encode_game_ints(
            &self.game,
            &[self.player_number, self.piece_type, self.coord],
        )
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let (game, [pn, pt, coord]) = template::decode_game_ints::<3>(data)?;
        Some(Self {
            game,
            player_number: pn,
            piece_type: pt,
            coord,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!(
            "game={}|playerNumber={}|pieceType={}|coord=0x{}",
            self.game,
            self.player_number,
            self.piece_type,
            render_hex32(self.coord)
        )
    }

    pub(crate) fn strip_labels(body: &str) -> Option<String> {
        let stripped = crate::strip::strip_attrib_names(body);
        let mut fields: Vec<&str> = stripped.split(',').collect();
        if fields.len() != 4 {
            return None;
        }
        let coord = parse_hex32(fields[3].strip_prefix("0x")?)?;
        let coord = coord.to_string();
        fields[3] = &coord;
        Some(fields.join(","))
    }
}

/// Open or close a trade ship route (scenario rule). Multi payload:
/// the closed flag then the affected edges.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SetShipRouteClosed {
    pub game: String,
    pub closed: bool,
    pub edges: Vec<i32>,
}

impl SetShipRouteClosed {
    /// Validates the non-empty edge list invariant.
    pub fn new(game: String, closed: bool, edges: Vec<i32>) -> Option<Self> {
        if edges.is_empty() {
            return None;
        }
        Some(Self {
            game,
            closed,
            edges,
        })
    }

    pub(crate) fn encode_payload(&self) -> String {
        let mut values = vec![i32::from(self.closed)];
        values.extend_from_slice(&self.edges);
        template::encode_multi_ints(&self.game, &values)
    }

    pub(crate) fn decode(parts: &[&str]) -> Option<Self> {
        let (game, values) = template::decode_multi_ints(parts)?;
        let (&closed, edges) = values.split_first()?;
        Self::new(game, closed != 0, edges.to_vec())
    }

    pub(crate) fn render_payload(&self) -> String {
        let mut values = vec![i32::from(self.closed)];
        values.extend_from_slice(&self.edges);
        let mut out = String::new();
        template::render_multi_ints(&mut out, Some(&self.game), &values);
        out
    }
}

/// Renders `{ 1 2 3 }` with optional hex digits.
fn render_braced_ints(out: &mut String, values: &[i32], use_hex: bool) {
    out.push('{');
    for &v in values {
        if use_hex {
            let _ = write!(out, " {}", render_hex32(v));
        } else {
            let _ = write!(out, " {v}");
        }
    }
    out.push_str(" }");
}

/// Extracts the contents of a `label={ ... }` rendering.
fn braced_field<'a>(body: &'a str, label: &str) -> Option<&'a str> {
    let start = body.find(label)? + label.len();
    let rest = &body[start..];
    let end = rest.find('}')?;
    rest[..end].strip_prefix('{')
}

/// Generic strip for kinds whose final field renders as a bare hex
/// coordinate; `hex_index` is the coordinate's position after the game
/// name.
fn strip_hex_coord_tail(body: &str, hex_index: usize) -> Option<String> {
    let stripped = crate::strip::strip_attrib_names(body);
    let mut fields: Vec<String> = stripped.split(',').map(str::to_owned).collect();
    if fields.len() != hex_index + 1 {
        return None;
    }
    fields[hex_index] = parse_hex32(&fields[hex_index])?.to_string();
    Some(fields.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex32_two_complement() {
        assert_eq!(render_hex32(0x40a), "40a");
        assert_eq!(render_hex32(-0x305), "fffffcfb");
        assert_eq!(parse_hex32("40a"), Some(0x40a));
        assert_eq!(parse_hex32("fffffcfb"), Some(-0x305));
    }

    #[test]
    fn classic_layout_remap_symmetry() {
        let hexes = vec![hex::WATER, hex::CLAY, hex::DESERT, hex::WOOD];
        let numbers = vec![-1, 8, -1, 5];
        let m = BoardLayout::from_board("ga".into(), &hexes, &numbers, 0x9b);
        assert_eq!(m.hex_layout, vec![6, 1, 0, 5]);
        assert_eq!(m.number_layout, vec![-1, 5, -1, 3]);
        assert_eq!(m.board_hex_layout(), hexes);
        assert_eq!(m.board_number_layout(), vec![0, 8, 0, 5]);
    }

    #[test]
    fn layout2_part_roundtrip() {
        let mut m = BoardLayout2 {
            game: "ga".into(),
            encoding_format: 3,
            parts: BTreeMap::new(),
        };
        m.insert_hex_layout(&[hex::WATER, hex::ORE]);
        m.parts.insert("RH".into(), LayoutPart::Int(0xa0c));
        m.parts
            .insert("PL".into(), LayoutPart::IntArray(vec![1, 4, 0]));

        let payload = m.encode_payload();
        assert_eq!(payload, "ga,3,HL,[2,6,2,PL,[3,1,4,0,RH,2572");
        assert_eq!(BoardLayout2::decode(&payload).unwrap(), m);
        assert_eq!(m.board_hex_layout(), Some(vec![hex::WATER, hex::ORE]));
    }

    #[test]
    fn layout2_strip_reverses_render() {
        let mut m = BoardLayout2 {
            game: "ga".into(),
            encoding_format: 1,
            parts: BTreeMap::new(),
        };
        m.parts
            .insert("PL".into(), LayoutPart::IntArray(vec![0x66, 0x68]));
        m.parts.insert("RH".into(), LayoutPart::Int(155));
        let stripped = BoardLayout2::strip_labels(&m.render_payload()).unwrap();
        assert_eq!(stripped, m.encode_payload());
    }

    #[test]
    fn potential_settlements_simple() {
        let m = PotentialSettlements::simple("ga".into(), 3, vec![0xc04, 0xe05, 0x60a]);
        assert_eq!(m.encode_payload(), "ga,3,3076,3589,1546");
        assert_eq!(PotentialSettlements::decode("ga,3,3076,3589,1546").unwrap(), m);
        assert_eq!(
            m.render_payload(),
            "game=ga|playerNum=3|list=c04 e05 60a "
        );
    }

    #[test]
    fn potential_settlements_empty_simple() {
        let m = PotentialSettlements::simple("ga".into(), 2, vec![]);
        assert_eq!(m.encode_payload(), "ga,2");
        assert_eq!(m.render_payload(), "game=ga|playerNum=2|list=(empty)");
    }

    #[test]
    fn potential_settlements_all_areas() {
        // one player's info: explicit node list plus four land areas
        let m = PotentialSettlements {
            game: "ga".into(),
            player_number: 0,
            nodes: Some(vec![0xa04, 0xa08]),
            starting_land_area: 0,
            land_areas: Some(vec![
                vec![0xc02],
                vec![0x408],
                vec![0xa0f],
                vec![0x100c],
            ]),
            legal_sea_edges: None,
        };
        assert_eq!(
            m.encode_payload(),
            "ga,0,2564,2568,NA,4,PAN,0,LA1,3074,LA2,1032,LA3,2575,LA4,4108"
        );
        assert_eq!(PotentialSettlements::decode(&m.encode_payload()).unwrap(), m);
        assert_eq!(
            m.render_payload(),
            "game=ga|playerNum=0|list=a04 a08 |pan=0|la1=c02 |la2=408 |la3=a0f |la4=100c "
        );
    }

    #[test]
    fn potential_settlements_empty_last_seat_pad() {
        let m = PotentialSettlements {
            game: "ga".into(),
            player_number: 3,
            nodes: Some(vec![]),
            starting_land_area: 0,
            land_areas: Some(vec![vec![0xa0f], vec![0x60a]]),
            legal_sea_edges: Some(vec![
                RangeList::new(vec![0xc07, -0xc0b, 0xe04, -0xe0a]).unwrap(),
                RangeList::default(),
                RangeList::new(vec![0xd07, -0xd0b, 0xa03]).unwrap(),
                RangeList::default(),
            ]),
        };
        assert_eq!(
            m.encode_payload(),
            "ga,3,0,NA,2,PAN,0,LA1,2575,LA2,1546,SE,c07,-c0b,e04,-e0a,SE,SE,d07,-d0b,a03,SE,0"
        );
        let back = PotentialSettlements::decode(&m.encode_payload()).unwrap();
        assert_eq!(back, m);
        // "present but empty" must not collapse to "absent"
        assert_eq!(back.nodes, Some(vec![]));
        assert_eq!(
            m.render_payload(),
            "game=ga|playerNum=3|list=(empty)|pan=0|la1=a0f |la2=60a \
             |lse={{c07-c0b,e04-e0a},{},{d07-d0b,a03},{}}"
        );
    }

    #[test]
    fn potential_settlements_implied_area() {
        let m = PotentialSettlements {
            game: "ga".into(),
            player_number: 2,
            nodes: Some(vec![0xa04, 0xa08]),
            starting_land_area: 1,
            land_areas: Some(vec![vec![0xa04, 0xa08], vec![0x60a]]),
            legal_sea_edges: None,
        };
        // the starting area equals the node list, so LA1 is not re-sent
        let payload = m.encode_payload();
        assert_eq!(payload, "ga,2,2564,2568,NA,2,PAN,1,LA2,1546");
        assert_eq!(PotentialSettlements::decode(&payload).unwrap(), m);
    }

    #[test]
    fn potential_settlements_null_nodes() {
        let m = PotentialSettlements {
            game: "ga".into(),
            player_number: -1,
            nodes: None,
            starting_land_area: 1,
            land_areas: Some(vec![vec![0x802], vec![0xc02]]),
            legal_sea_edges: None,
        };
        assert_eq!(m.encode_payload(), "ga,-1,NA,2,PAN,1,LA1,2050,LA2,3074");
        assert_eq!(PotentialSettlements::decode(&m.encode_payload()).unwrap(), m);
        assert_eq!(
            m.render_payload(),
            "game=ga|playerNum=-1|list=(null)|pan=1|la1=802 |la2=c02 "
        );
    }

    #[test]
    fn potential_settlements_strip_roundtrip() {
        let m = PotentialSettlements {
            game: "ga".into(),
            player_number: 3,
            nodes: None,
            starting_land_area: 0,
            land_areas: Some(vec![vec![0xa0f], vec![0x60a]]),
            legal_sea_edges: Some(vec![RangeList::new(vec![
                0xc07, -0xc0b, 0xd07, -0xd0b, 0xe04, -0xe0a, 0xa03,
            ])
            .unwrap()]),
        };
        let stripped = PotentialSettlements::strip_labels(&m.render_payload()).unwrap();
        assert_eq!(stripped, m.encode_payload());
    }

    #[test]
    fn put_piece_strip_hex_coord() {
        let m = PutPiece {
            game: "ga".into(),
            player_number: 3,
            piece_type: 0,
            coord: 1034,
        };
        assert_eq!(
            m.render_payload(),
            "game=ga|playerNumber=3|pieceType=0|coord=40a"
        );
        let stripped = PutPiece::strip_labels(&m.render_payload()).unwrap();
        assert_eq!(stripped, "ga,3,0,1034");
    }
}
