//! Connection-level kinds: authentication, versioning, status and pings.

use std::fmt::Write as _;

use wire::{FieldReader, FieldWriter, EMPTY_STR};

use crate::strip::strip_attribs_to_list;
use crate::template;

/// Authentication without joining a game or channel. The password is the
/// final field and may contain the secondary separator, so it is taken as
/// the raw remainder on decode.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AuthRequest {
    /// `"P"` for game player, `"UA"` for user admin.
    pub role: String,
    pub nickname: String,
    pub scheme: i32,
    pub host: Option<String>,
    pub password: String,
}

impl AuthRequest {
    /// Client plaintext password scheme.
    pub const SCHEME_CLIENT_PLAINTEXT: i32 = 1;

    pub(crate) fn encode_payload(&self) -> String {
        let mut w = FieldWriter::new();
        w.push_str(&self.role);
        w.push_str(&self.nickname);
        w.push_int(self.scheme);
        w.push_str_or_placeholder(self.host.as_deref().unwrap_or(""));
        w.push_str(&self.password);
        w.finish()
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let mut it = data.splitn(5, ',');
        let role = it.next()?.to_owned();
        let nickname = it.next()?.to_owned();
        let scheme = it.next()?.parse().ok()?;
        let host = match it.next()? {
            "" | EMPTY_STR => None,
            h => Some(h.to_owned()),
        };
        let password = it.next()?.to_owned();
        Some(Self {
            role,
            nickname,
            scheme,
            host,
            password,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        let mut out = format!(
            "role={}|nickname={}|scheme={}",
            self.role, self.nickname, self.scheme
        );
        if let Some(host) = &self.host {
            let _ = write!(out, "|host={host}");
        }
        if self.password.is_empty() {
            out.push_str("|password empty");
        } else {
            out.push_str("|password=***");
        }
        out
    }

    pub(crate) fn strip_labels(body: &str) -> Option<String> {
        let pieces = strip_attribs_to_list(body);
        let has_host = body.contains("|host=");
        let mut fields: Vec<&str> = Vec::with_capacity(5);
        for (i, piece) in pieces.iter().enumerate() {
            let last = i + 1 == pieces.len();
            if last {
                if !has_host {
                    fields.push(EMPTY_STR);
                }
                fields.push(if *piece == "password empty" { "" } else { "***" });
            } else {
                fields.push(piece);
            }
        }
        Some(fields.join(","))
    }
}

/// Version handshake, the first line each side sends. Optional trailing
/// fields are elided via the placeholder so older peers parse cleanly.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Version {
    pub number: i32,
    pub version_string: String,
    pub build: Option<String>,
    pub features: Option<String>,
    pub locale: Option<String>,
}

impl Version {
    pub(crate) fn encode_payload(&self) -> String {
        let mut w = FieldWriter::new();
        w.push_int(self.number);
        w.push_str(&self.version_string);
        w.push_str_or_placeholder(self.build.as_deref().unwrap_or(""));
        if self.features.is_some() || self.locale.is_some() {
            w.push_str_or_placeholder(self.features.as_deref().unwrap_or(""));
        }
        if let Some(locale) = &self.locale {
            w.push_str(locale);
        }
        w.finish()
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let mut r = FieldReader::new(data);
        let number = r.next_int().ok()?;
        let version_string = r.next_str().ok()?.to_owned();
        let opt = |r: &mut FieldReader<'_>| {
            r.next_str()
                .ok()
                .filter(|s| *s != EMPTY_STR)
                .map(ToOwned::to_owned)
        };
        let build = opt(&mut r);
        let features = opt(&mut r);
        let locale = opt(&mut r);
        Some(Self {
            number,
            version_string,
            build,
            features,
            locale,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!(
            "{}|str={}|verBuild={}|feats={}|cliLocale={}",
            self.number,
            self.version_string,
            self.build.as_deref().unwrap_or("(null)"),
            self.features.as_deref().unwrap_or("(null)"),
            self.locale.as_deref().unwrap_or("(null)")
        )
    }

    pub(crate) fn strip_labels(body: &str) -> Option<String> {
        let pieces = strip_attribs_to_list(body);
        let mut fields: Vec<&str> = Vec::with_capacity(pieces.len());
        for piece in pieces {
            fields.push(if piece == "(null)" { EMPTY_STR } else { piece });
        }
        // trailing elided fields are dropped entirely, not sent as placeholders
        while fields.last() == Some(&EMPTY_STR) {
            fields.pop();
        }
        Some(fields.join(","))
    }
}

/// Server status report. A zero status value is omitted from the wire, so
/// pre-status peers see only the text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StatusMessage {
    pub status_value: i32,
    pub text: String,
}

impl StatusMessage {
    pub const SV_OK: i32 = 0;
    pub const SV_NOT_OK_GENERIC: i32 = 1;
    pub const SV_NAME_NOT_FOUND: i32 = 2;
    pub const SV_PW_WRONG: i32 = 3;
    pub const SV_NAME_IN_USE: i32 = 4;
    pub const SV_CANT_JOIN_GAME_VERSION: i32 = 5;
    pub const SV_PROBLEM_WITH_DB: i32 = 6;
    pub const SV_ACCT_CREATED_OK: i32 = 7;
    pub const SV_ACCT_NOT_CREATED_ERR: i32 = 8;
    pub const SV_NEWGAME_OPTION_UNKNOWN: i32 = 9;
    pub const SV_NEWGAME_OPTION_VALUE_TOONEW: i32 = 10;
    pub const SV_NEWGAME_ALREADY_EXISTS: i32 = 11;
    pub const SV_NEWGAME_NAME_REJECTED: i32 = 12;
    pub const SV_NEWGAME_NAME_TOO_LONG: i32 = 13;
    pub const SV_NEWGAME_TOO_MANY_CREATED: i32 = 14;
    pub const SV_NEWCHANNEL_TOO_MANY_CREATED: i32 = 15;
    pub const SV_PW_REQUIRED: i32 = 16;
    pub const SV_ACCT_NOT_CREATED_DENIED: i32 = 17;
    pub const SV_ACCT_CREATED_OK_FIRST_ONE: i32 = 18;
    pub const SV_NAME_NOT_ALLOWED: i32 = 19;
    pub const SV_OK_SET_NICKNAME: i32 = 20;
    pub const SV_OK_DEBUG_MODE_ON: i32 = 21;

    /// Highest status value this implementation knows.
    pub const SV_MAX: i32 = Self::SV_OK_DEBUG_MODE_ON;

    pub(crate) fn encode_payload(&self) -> String {
        if self.status_value > 0 {
            format!("{},{}", self.status_value, self.text)
        } else {
            self.text.clone()
        }
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        if data.starts_with(',') {
            return None;
        }
        if let Some((head, rest)) = data.split_once(',') {
            if let Ok(sv) = head.parse::<i32>() {
                return Some(Self {
                    status_value: sv.max(0),
                    text: rest.to_owned(),
                });
            }
        }
        Some(Self {
            status_value: 0,
            text: data.to_owned(),
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        if self.status_value > 0 {
            format!("sv={}|status={}", self.status_value, self.text)
        } else {
            format!("status={}", self.text)
        }
    }
}

/// Connection refused; the reason text is the whole payload, rendered
/// without a label.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RejectConnection {
    pub reason: String,
}

impl RejectConnection {
    pub(crate) fn encode_payload(&self) -> String {
        self.reason.clone()
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        Some(Self {
            reason: data.to_owned(),
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        self.reason.clone()
    }
}

/// Keepalive probe; the payload is an arbitrary sleep hint.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ServerPing {
    pub sleep_time: i32,
}

impl ServerPing {
    pub(crate) fn encode_payload(&self) -> String {
        self.sleep_time.to_string()
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        data.parse().ok().map(|sleep_time| Self { sleep_time })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!("sleepTime={}", self.sleep_time)
    }
}

/// Admin liveness check against one game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AdminPing {
    pub game: String,
}

impl AdminPing {
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

/// Admin request to restart the server. No payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AdminReset;

impl AdminReset {
    pub(crate) fn encode_payload(&self) -> String {
        String::new()
    }

    pub(crate) fn decode(_data: &str) -> Option<Self> {
        Some(Self)
    }

    pub(crate) fn render_payload(&self) -> String {
        String::new()
    }
}

/// Broadcast text shown to every connection.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BCastTextMsg {
    pub text: String,
}

impl BCastTextMsg {
    pub(crate) fn encode_payload(&self) -> String {
        self.text.clone()
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        Some(Self {
            text: data.to_owned(),
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!("text={}", self.text)
    }
}

/// Client is leaving every game and channel. No payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LeaveAll;

impl LeaveAll {
    pub(crate) fn encode_payload(&self) -> String {
        String::new()
    }

    pub(crate) fn decode(_data: &str) -> Option<Self> {
        Some(Self)
    }

    pub(crate) fn render_payload(&self) -> String {
        String::new()
    }
}

/// A bot announces itself, with the shared secret cookie and its brain
/// class name.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ImARobot {
    pub nickname: String,
    pub cookie: String,
    pub bot_class: String,
}

impl ImARobot {
    pub(crate) fn encode_payload(&self) -> String {
        let mut w = FieldWriter::new();
        w.push_str(&self.nickname);
        w.push_str(&self.cookie);
        w.push_str(&self.bot_class);
        w.finish()
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let mut r = FieldReader::new(data);
        let nickname = r.next_str().ok()?.to_owned();
        let cookie = r.next_str().ok()?.to_owned();
        let bot_class = r.next_str().ok()?.to_owned();
        Some(Self {
            nickname,
            cookie,
            bot_class,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!(
            "nickname={}|cookie={}|rbclass={}",
            self.nickname, self.cookie, self.bot_class
        )
    }
}

/// Request to create a user account.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CreateAccount {
    pub nickname: String,
    pub password: String,
    pub host: String,
    pub email: String,
}

impl CreateAccount {
    pub(crate) fn encode_payload(&self) -> String {
        let mut w = FieldWriter::new();
        w.push_str(&self.nickname);
        w.push_str_or_placeholder(&self.password);
        w.push_str(&self.host);
        w.push_str_or_placeholder(&self.email);
        w.finish()
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let mut r = FieldReader::new(data);
        let nickname = r.next_str().ok()?.to_owned();
        let password = wire::placeholder_to_empty(r.next_str().ok()?).to_owned();
        let host = r.next_str().ok()?.to_owned();
        let email = wire::placeholder_to_empty(r.next_str().ok()?).to_owned();
        Some(Self {
            nickname,
            password,
            host,
            email,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        let mut out = format!("nickname={}", self.nickname);
        super::channel::render_password_masked(&mut out, &self.password);
        let _ = write!(out, "|host={}|email={}", self.host, self.email);
        out
    }

    pub(crate) fn strip_labels(body: &str) -> Option<String> {
        let stripped = super::channel::strip_with_masked_password(body)?;
        // empty trailing email travels as the placeholder
        Some(match stripped.strip_suffix(',') {
            Some(head) => format!("{head},{EMPTY_STR}"),
            None => stripped,
        })
    }
}

/// Tuning parameters pushed to a bot at connect.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UpdateRobotParams {
    pub max_game_length: i32,
    pub max_eta: i32,
    pub eta_bonus_factor: f32,
    pub adversarial_factor: f32,
    pub leader_adversarial_factor: f32,
    pub dev_card_multiplier: f32,
    pub threat_multiplier: f32,
    pub strategy_type: i32,
    pub trade_flag: i32,
}

impl UpdateRobotParams {
    pub(crate) fn encode_payload(&self) -> String {
        format!(
            "{},{},{:?},{:?},{:?},{:?},{:?},{},{}",
            self.max_game_length,
            self.max_eta,
            self.eta_bonus_factor,
            self.adversarial_factor,
            self.leader_adversarial_factor,
            self.dev_card_multiplier,
            self.threat_multiplier,
            self.strategy_type,
            self.trade_flag
        )
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let mut r = FieldReader::new(data);
        let factor = |r: &mut FieldReader<'_>| {
            r.next_str()
                .ok()
                .and_then(|tok| tok.parse::<f32>().ok())
                .filter(|f| f.is_finite())
        };
        Some(Self {
            max_game_length: r.next_int().ok()?,
            max_eta: r.next_int().ok()?,
            eta_bonus_factor: factor(&mut r)?,
            adversarial_factor: factor(&mut r)?,
            leader_adversarial_factor: factor(&mut r)?,
            dev_card_multiplier: factor(&mut r)?,
            threat_multiplier: factor(&mut r)?,
            strategy_type: r.next_int().ok()?,
            trade_flag: r.next_int().ok()?,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!(
            "mgl={}|me={}|ebf={:?}|af={:?}|laf={:?}|dcm={:?}|tm={:?}|st={}|tf={}",
            self.max_game_length,
            self.max_eta,
            self.eta_bonus_factor,
            self.adversarial_factor,
            self.leader_adversarial_factor,
            self.dev_card_multiplier,
            self.threat_multiplier,
            self.strategy_type,
            self.trade_flag
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_optional_value() {
        let plain = StatusMessage {
            status_value: 0,
            text: "simple ok status".into(),
        };
        assert_eq!(plain.encode_payload(), "simple ok status");
        assert_eq!(StatusMessage::decode("simple ok status").unwrap(), plain);

        let sv = StatusMessage {
            status_value: 11,
            text: "nonzero status text".into(),
        };
        assert_eq!(sv.encode_payload(), "11,nonzero status text");
        assert_eq!(StatusMessage::decode("11,nonzero status text").unwrap(), sv);
    }

    #[test]
    fn status_message_rejects_leading_separator() {
        assert!(StatusMessage::decode(",oops").is_none());
    }

    #[test]
    fn status_message_nonnumeric_head_is_text() {
        let m = StatusMessage::decode("try again, later").unwrap();
        assert_eq!(m.status_value, 0);
        assert_eq!(m.text, "try again, later");
    }

    #[test]
    fn version_elides_missing_tail() {
        let v = Version {
            number: 1118,
            version_string: "1.1.18".into(),
            build: Some("OV20130402".into()),
            features: None,
            locale: None,
        };
        assert_eq!(v.encode_payload(), "1118,1.1.18,OV20130402");
        let full = Version {
            number: 2450,
            version_string: "2.4.50".into(),
            build: Some("JM20200801".into()),
            features: Some(";6pl;sb;".into()),
            locale: Some("en_US".into()),
        };
        assert_eq!(
            full.encode_payload(),
            "2450,2.4.50,JM20200801,;6pl;sb;,en_US"
        );
        assert_eq!(Version::decode(&full.encode_payload()).unwrap(), full);
    }

    #[test]
    fn version_strip_drops_null_tail() {
        let stripped = Version::strip_labels(
            "1118|str=1.1.18|verBuild=OV20130402|feats=(null)|cliLocale=(null)",
        )
        .unwrap();
        assert_eq!(stripped, "1118,1.1.18,OV20130402");
    }

    #[test]
    fn auth_request_password_keeps_separators() {
        let m = AuthRequest {
            role: "P".into(),
            nickname: "n".into(),
            scheme: AuthRequest::SCHEME_CLIENT_PLAINTEXT,
            host: None,
            password: "pw,with,commas".into(),
        };
        let payload = m.encode_payload();
        assert_eq!(AuthRequest::decode(&payload).unwrap(), m);
    }

    #[test]
    fn robot_params_float_rendering() {
        let m = UpdateRobotParams {
            max_game_length: 120,
            max_eta: 35,
            eta_bonus_factor: 0.13,
            adversarial_factor: 1.0,
            leader_adversarial_factor: 1.0,
            dev_card_multiplier: 3.0,
            threat_multiplier: 1.0,
            strategy_type: 0,
            trade_flag: 1,
        };
        assert_eq!(m.encode_payload(), "120,35,0.13,1.0,1.0,3.0,1.0,0,1");
        assert_eq!(UpdateRobotParams::decode(&m.encode_payload()).unwrap(), m);
    }
}
