//! Game option and localization kinds.
//!
//! Option values are carried as packed `KEY=value` strings whose values may
//! contain the secondary separator, so several of these kinds treat the
//! option text as a raw tail rather than tokenizing it.

use std::fmt::Write as _;

use wire::{FieldWriter, EMPTY_STR, GAME_NONE};

use super::channel::render_password_masked;

/// Request to create a game with options; replaces the plain join-game
/// request for game creation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NewGameWithOptionsRequest {
    pub nickname: String,
    pub password: String,
    pub host: String,
    pub game: String,
    pub options: String,
}

impl NewGameWithOptionsRequest {
    pub(crate) fn encode_payload(&self) -> String {
        let mut w = FieldWriter::new();
        w.push_str(&self.nickname);
        w.push_str_or_placeholder(&self.password);
        w.push_str(&self.host);
        w.push_str(&self.game);
        w.push_str(&self.options);
        w.finish()
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let mut it = data.splitn(5, ',');
        let nickname = it.next()?.to_owned();
        let password = wire::placeholder_to_empty(it.next()?).to_owned();
        let host = it.next()?.to_owned();
        let game = it.next()?.to_owned();
        let options = it.next()?.to_owned();
        Some(Self {
            nickname,
            password,
            host,
            game,
            options,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        let mut out = format!("nickname={}", self.nickname);
        render_password_masked(&mut out, &self.password);
        let _ = write!(
            out,
            "|host={}|game={}|opts={}",
            self.host, self.game, self.options
        );
        out
    }
}

/// A game with options has been created.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NewGameWithOptions {
    pub game: String,
    /// Lowest protocol version able to join.
    pub min_version: i32,
    /// Packed options, `None` when the game has none (sent as `-`).
    pub options: Option<String>,
}

impl NewGameWithOptions {
    pub(crate) fn encode_payload(&self) -> String {
        format!(
            "{},{},{}",
            self.game,
            self.min_version,
            self.options.as_deref().unwrap_or("-")
        )
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let mut it = data.splitn(3, ',');
        let game = it.next()?.to_owned();
        let min_version = it.next()?.parse().ok()?;
        let options = match it.next()? {
            "-" => None,
            opts => Some(opts.to_owned()),
        };
        Some(Self {
            game,
            min_version,
            options,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!(
            "game={}|param1={}|param2={}",
            self.game,
            self.min_version,
            self.options.as_deref().unwrap_or("-")
        )
    }
}

/// Ask the server for its current game option defaults, or the reply
/// carrying the packed defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameOptionGetDefaults {
    pub options: Option<String>,
}

impl GameOptionGetDefaults {
    pub(crate) fn encode_payload(&self) -> String {
        self.options.clone().unwrap_or_default()
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        Some(Self {
            options: if data.is_empty() {
                None
            } else {
                Some(data.to_owned())
            },
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!("opts={}", self.options.as_deref().unwrap_or(""))
    }
}

/// Client asks for info on specific game options (or `-` for none), with
/// optional trailing request tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameOptionGetInfos {
    pub option_keys: Option<Vec<String>>,
    /// Asks for any option changed since the client's version.
    pub token_any_changes: bool,
    /// Asks for localized option descriptions.
    pub token_i18n_descs: bool,
    /// The request is solely the i18n token.
    pub only_token_i18n: bool,
}

impl GameOptionGetInfos {
    pub const TOKEN_ANY_CHANGES: &'static str = "?CHANGES";
    pub const TOKEN_I18N_DESCS: &'static str = "?I18N";

    pub(crate) fn encode_payload(&self) -> String {
        let mut w = FieldWriter::new();
        if !self.only_token_i18n {
            match &self.option_keys {
                None => w.push_str("-"),
                Some(keys) => {
                    for k in keys {
                        w.push_str(k);
                    }
                }
            }
            if self.token_any_changes {
                w.push_str(Self::TOKEN_ANY_CHANGES);
            }
        }
        if self.token_i18n_descs {
            w.push_str(Self::TOKEN_I18N_DESCS);
        }
        w.finish()
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let mut keys = Vec::new();
        let mut dash = false;
        let mut any_changes = false;
        let mut i18n = false;
        for tok in data.split(',').filter(|t| !t.is_empty()) {
            match tok {
                Self::TOKEN_I18N_DESCS => i18n = true,
                Self::TOKEN_ANY_CHANGES => any_changes = true,
                "-" => dash = true,
                key => keys.push(key.to_owned()),
            }
        }
        if dash && !keys.is_empty() {
            return None;
        }
        let option_keys = if dash || keys.is_empty() { None } else { Some(keys) };
        Some(Self {
            only_token_i18n: i18n && option_keys.is_none() && !dash && !any_changes,
            option_keys,
            token_any_changes: any_changes,
            token_i18n_descs: i18n,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!("options={}", self.encode_payload())
    }
}

/// Info about one game option: its type, version window, value ranges,
/// current values, flags and description. The wire keeps every field as a
/// token so unknown option types still round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameOptionInfo {
    pub key: String,
    pub option_type: i32,
    pub min_version: i32,
    pub last_mod_version: i32,
    pub default_bool: bool,
    pub default_int: i32,
    pub min_int: i32,
    pub max_int: i32,
    pub current_bool: bool,
    /// Current int or string value, as its wire token.
    pub current_value: String,
    /// Flag bits, or the legacy `t`/`f` drop-if-unused token.
    pub flags: String,
    pub description: String,
    /// Display strings for enum-typed options.
    pub enum_choices: Vec<String>,
}

impl GameOptionInfo {
    pub(crate) fn encode_payload(&self) -> String {
        let mut w = FieldWriter::multi();
        w.push_str(&self.key);
        w.push_int(self.option_type);
        w.push_int(self.min_version);
        w.push_int(self.last_mod_version);
        w.push_str(if self.default_bool { "t" } else { "f" });
        w.push_int(self.default_int);
        w.push_int(self.min_int);
        w.push_int(self.max_int);
        w.push_str(if self.current_bool { "t" } else { "f" });
        w.push_str_or_placeholder(&self.current_value);
        w.push_str(&self.flags);
        w.push_str_or_placeholder(&self.description);
        for choice in &self.enum_choices {
            w.push_str(choice);
        }
        w.finish()
    }

    pub(crate) fn decode(parts: &[&str]) -> Option<Self> {
        if parts.len() < 12 {
            return None;
        }
        Some(Self {
            key: parts[0].to_owned(),
            option_type: parts[1].parse().ok()?,
            min_version: parts[2].parse().ok()?,
            last_mod_version: parts[3].parse().ok()?,
            default_bool: parts[4] == "t",
            default_int: parts[5].parse().ok()?,
            min_int: parts[6].parse().ok()?,
            max_int: parts[7].parse().ok()?,
            current_bool: parts[8] == "t",
            current_value: wire::placeholder_to_empty(parts[9]).to_owned(),
            flags: parts[10].to_owned(),
            description: wire::placeholder_to_empty(parts[11]).to_owned(),
            enum_choices: parts[12..].iter().map(|s| (*s).to_owned()).collect(),
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        let payload = self.encode_payload();
        let mut out = String::new();
        for (i, tok) in payload.split('|').enumerate() {
            if i > 0 {
                out.push('|');
            }
            let _ = write!(out, "p={tok}");
        }
        out
    }
}

/// All games and their packed options, as name/options pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GamesWithOptions {
    /// Alternating game name and packed-options tokens; `-` marks a game
    /// without options.
    pub pairs: Vec<String>,
}

impl GamesWithOptions {
    /// Validates the name/options pairing invariant.
    pub fn new(pairs: Vec<String>) -> Option<Self> {
        if pairs.len() % 2 != 0 {
            return None;
        }
        Some(Self { pairs })
    }

    pub(crate) fn encode_payload(&self) -> String {
        let mut w = FieldWriter::multi();
        for p in &self.pairs {
            w.push_str(p);
        }
        w.finish()
    }

    pub(crate) fn decode(parts: &[&str]) -> Option<Self> {
        Self::new(parts.iter().map(|s| (*s).to_owned()).collect())
    }

    pub(crate) fn render_payload(&self) -> String {
        let mut out = String::new();
        for (i, p) in self.pairs.iter().enumerate() {
            if i > 0 {
                out.push('|');
            }
            let _ = write!(out, "p={p}");
        }
        out
    }
}

/// Localized text bundle for game options or scenarios.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LocalizedStrings {
    /// `"O"` for game options, `"S"` for scenarios.
    pub string_type: String,
    pub flags: u32,
    /// Key/text tokens; an empty string is a null entry (sent as the
    /// placeholder, rendered `(null)`).
    pub strings: Vec<String>,
}

impl LocalizedStrings {
    pub const TYPE_GAMEOPT: &'static str = "O";
    pub const TYPE_SCENARIO: &'static str = "S";

    pub const FLAG_TYPE_UNKNOWN: u32 = 0x01;
    pub const FLAG_REQ_ALL: u32 = 0x02;
    pub const FLAG_SENT_ALL: u32 = 0x04;

    /// Marker sent instead of text for a key the server does not know.
    pub const MARKER_KEY_UNKNOWN: &'static str = "\u{16}K";

    /// Validates the type and string-item invariants.
    pub fn new(string_type: String, flags: u32, strings: Vec<String>) -> Option<Self> {
        if !wire::is_single_line_and_safe(&string_type) {
            return None;
        }
        for item in &strings {
            if item.is_empty() || item == Self::MARKER_KEY_UNKNOWN {
                continue;
            }
            if item.contains('|') || !wire::is_single_line_and_safe_allowing_seps(item, true) {
                return None;
            }
        }
        Some(Self {
            string_type,
            flags,
            strings,
        })
    }

    pub(crate) fn encode_payload(&self) -> String {
        let mut w = FieldWriter::multi();
        w.push_str(&self.string_type);
        let mut flags = String::new();
        let _ = write!(flags, "{:x}", self.flags);
        w.push_str(&flags);
        for s in &self.strings {
            w.push_str_or_placeholder(s);
        }
        w.finish()
    }

    pub(crate) fn decode(parts: &[&str]) -> Option<Self> {
        if parts.len() < 2 {
            return None;
        }
        let string_type = parts[0].to_owned();
        let flags = u32::from_str_radix(parts[1], 16).ok()?;
        let strings = parts[2..]
            .iter()
            .map(|s| wire::placeholder_to_empty(s).to_owned())
            .collect();
        Self::new(string_type, flags, strings)
    }

    pub(crate) fn render_payload(&self) -> String {
        let mut out = format!("type={}|flags=0x{:x}", self.string_type, self.flags);
        if self.strings.is_empty() {
            out.push_str("|(strs empty)");
        } else {
            out.push_str("|strs=");
            for (i, s) in self.strings.iter().enumerate() {
                if i > 0 {
                    out.push('|');
                }
                if s.is_empty() {
                    out.push_str("(null)");
                } else if let Some(marker) = s.strip_prefix(GAME_NONE) {
                    out.push_str(marker);
                } else {
                    out.push_str(s);
                }
            }
        }
        out
    }
}

/// Scenario info exchange: a client request for one or more scenario
/// keys, or the server's reply about a single scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ScenarioInfo {
    /// Client request: scenario keys, optionally asking for anything
    /// changed since the client's version.
    Request {
        keys: Vec<String>,
        any_changed: bool,
    },
    /// Server reply describing one scenario.
    Scenario {
        key: String,
        min_version: i32,
        last_mod_version: i32,
        options: String,
        title: String,
        long_description: Option<String>,
    },
    /// Server reply: the requested key is unknown.
    KeyUnknown { key: String },
    /// Server reply: no more scenarios to send.
    NoMoreScenarios,
}

impl ScenarioInfo {
    /// Marker token introducing a client request's key list.
    pub const MARKER_REQUEST: &'static str = "[";
    /// Marker token asking for any changed scenario.
    pub const MARKER_ANY_CHANGED: &'static str = "?";
    /// Marker key for the no-more-scenarios reply.
    pub const MARKER_NO_MORE: &'static str = "-";
    /// `last_mod_version` value marking an unknown key reply.
    pub const MARKER_KEY_UNKNOWN: i32 = -2;

    pub(crate) fn encode_payload(&self) -> String {
        let mut w = FieldWriter::multi();
        match self {
            Self::Request { keys, any_changed } => {
                w.push_str(Self::MARKER_REQUEST);
                for k in keys {
                    w.push_str(k);
                }
                if *any_changed {
                    w.push_str(Self::MARKER_ANY_CHANGED);
                }
            }
            Self::Scenario {
                key,
                min_version,
                last_mod_version,
                options,
                title,
                long_description,
            } => {
                w.push_str(key);
                w.push_int(*min_version);
                w.push_int(*last_mod_version);
                w.push_str(options);
                w.push_str(title);
                if let Some(desc) = long_description {
                    w.push_str(desc);
                }
            }
            Self::KeyUnknown { key } => {
                w.push_str(key);
                w.push_int(0);
                w.push_int(Self::MARKER_KEY_UNKNOWN);
            }
            Self::NoMoreScenarios => {
                w.push_str(Self::MARKER_NO_MORE);
                for _ in 0..4 {
                    w.push_str(EMPTY_STR);
                }
            }
        }
        w.finish()
    }

    pub(crate) fn decode(parts: &[&str]) -> Option<Self> {
        match *parts.first()? {
            Self::MARKER_REQUEST => {
                let mut keys: Vec<String> =
                    parts[1..].iter().map(|s| (*s).to_owned()).collect();
                let any_changed = keys.last().is_some_and(|k| k == Self::MARKER_ANY_CHANGED);
                if any_changed {
                    keys.pop();
                }
                if keys.is_empty() && !any_changed {
                    return None;
                }
                Some(Self::Request { keys, any_changed })
            }
            Self::MARKER_NO_MORE => Some(Self::NoMoreScenarios),
            key => {
                let min_version = parts.get(1)?.parse().ok()?;
                let last_mod_version: i32 = parts.get(2)?.parse().ok()?;
                if last_mod_version == Self::MARKER_KEY_UNKNOWN {
                    return Some(Self::KeyUnknown {
                        key: key.to_owned(),
                    });
                }
                Some(Self::Scenario {
                    key: key.to_owned(),
                    min_version,
                    last_mod_version,
                    options: (*parts.get(3)?).to_owned(),
                    title: (*parts.get(4)?).to_owned(),
                    long_description: parts.get(5).map(|s| (*s).to_owned()),
                })
            }
        }
    }

    pub(crate) fn render_payload(&self) -> String {
        match self {
            Self::Request { .. } => {
                let payload = self.encode_payload();
                let mut out = String::new();
                for (i, tok) in payload.split('|').enumerate() {
                    if i > 0 {
                        out.push('|');
                    }
                    let _ = write!(out, "p={tok}");
                }
                out
            }
            Self::Scenario {
                key,
                min_version,
                last_mod_version,
                options,
                title,
                long_description,
            } => {
                let mut out = format!(
                    "key={key}|minVers={min_version}|lastModVers={last_mod_version}|opts={options}|title={title}"
                );
                if let Some(desc) = long_description {
                    let _ = write!(out, "|desc={desc}");
                }
                out
            }
            Self::KeyUnknown { key } => {
                format!("key={key}|minVers=0|lastModVers=MARKER_KEY_UNKNOWN")
            }
            Self::NoMoreScenarios => "noMoreScenarios=true".to_owned(),
        }
    }
}
