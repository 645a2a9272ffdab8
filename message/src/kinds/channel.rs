//! Chat channel lobby kinds.

use std::fmt::Write as _;

use wire::{FieldReader, FieldWriter, EMPTY_STR};

use crate::template;

/// Announcement that a new chat channel exists.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NewChannel {
    pub channel: String,
}

impl NewChannel {
    pub(crate) fn encode_payload(&self) -> String {
        self.channel.clone()
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        template::decode_game_only(data).map(|channel| Self { channel })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!("channel={}", self.channel)
    }
}

/// A channel has been destroyed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DeleteChannel {
    pub channel: String,
}

impl DeleteChannel {
    pub(crate) fn encode_payload(&self) -> String {
        self.channel.clone()
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        template::decode_game_only(data).map(|channel| Self { channel })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!("channel={}", self.channel)
    }
}

/// List of all chat channel names, sent once at connect.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Channels {
    pub channels: Vec<String>,
}

impl Channels {
    pub(crate) fn encode_payload(&self) -> String {
        let mut w = FieldWriter::new();
        for c in &self.channels {
            w.push_str(c);
        }
        w.finish()
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let mut r = FieldReader::new(data);
        let channels = r.rest_strs().iter().map(|s| (*s).to_owned()).collect();
        Some(Self { channels })
    }

    pub(crate) fn render_payload(&self) -> String {
        let mut out = String::from("channels=");
        template::render_name_list(&mut out, &self.channels);
        out
    }

    pub(crate) fn strip_labels(body: &str) -> Option<String> {
        strip_member_list("channels=", body)
    }
}

/// List of one channel's members, sent when the requester joins.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChannelMembers {
    pub channel: String,
    pub members: Vec<String>,
}

impl ChannelMembers {
    pub(crate) fn encode_payload(&self) -> String {
        let mut w = FieldWriter::new();
        w.push_str(&self.channel);
        for m in &self.members {
            w.push_str(m);
        }
        w.finish()
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let mut r = FieldReader::new(data);
        let channel = r.next_str().ok()?.to_owned();
        let members = r.rest_strs().iter().map(|s| (*s).to_owned()).collect();
        Some(Self { channel, members })
    }

    pub(crate) fn render_payload(&self) -> String {
        let mut out = format!("channel={}|members=", self.channel);
        template::render_name_list(&mut out, &self.members);
        out
    }

    pub(crate) fn strip_labels(body: &str) -> Option<String> {
        strip_labeled_member_list("channel=", body)
    }
}

/// Request to join (or create) a chat channel.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct JoinChannel {
    pub nickname: String,
    /// Empty when the account has no password; travels as the placeholder
    /// token and renders masked.
    pub password: String,
    pub host: String,
    pub channel: String,
}

impl JoinChannel {
    pub(crate) fn encode_payload(&self) -> String {
        let mut w = FieldWriter::new();
        w.push_str(&self.nickname);
        w.push_str_or_placeholder(&self.password);
        w.push_str(&self.host);
        w.push_str(&self.channel);
        w.finish()
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let mut r = FieldReader::new(data);
        let nickname = r.next_str().ok()?.to_owned();
        let password = wire::placeholder_to_empty(r.next_str().ok()?).to_owned();
        let host = r.next_str().ok()?.to_owned();
        let channel = r.next_str().ok()?.to_owned();
        Some(Self {
            nickname,
            password,
            host,
            channel,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        let mut out = format!("nickname={}", self.nickname);
        render_password_masked(&mut out, &self.password);
        let _ = write!(out, "|host={}|channel={}", self.host, self.channel);
        out
    }

    pub(crate) fn strip_labels(body: &str) -> Option<String> {
        strip_with_masked_password(body)
    }
}

/// Server reply authorizing a channel join.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct JoinChannelAuth {
    pub nickname: String,
    pub channel: String,
}

impl JoinChannelAuth {
    pub(crate) fn encode_payload(&self) -> String {
        let mut w = FieldWriter::new();
        w.push_str(&self.nickname);
        w.push_str(&self.channel);
        w.finish()
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let mut r = FieldReader::new(data);
        let nickname = r.next_str().ok()?.to_owned();
        let channel = r.next_str().ok()?.to_owned();
        Some(Self { nickname, channel })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!("nickname={}|channel={}", self.nickname, self.channel)
    }
}

/// A member is leaving a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LeaveChannel {
    pub nickname: String,
    pub host: String,
    pub channel: String,
}

impl LeaveChannel {
    pub(crate) fn encode_payload(&self) -> String {
        let mut w = FieldWriter::new();
        w.push_str(&self.nickname);
        w.push_str(&self.host);
        w.push_str(&self.channel);
        w.finish()
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let mut r = FieldReader::new(data);
        let nickname = r.next_str().ok()?.to_owned();
        let host = r.next_str().ok()?.to_owned();
        let channel = r.next_str().ok()?.to_owned();
        Some(Self {
            nickname,
            host,
            channel,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!(
            "nickname={}|host={}|channel={}",
            self.nickname, self.host, self.channel
        )
    }
}

/// A chat line in a channel. The free text may contain the ordinary
/// separators, so the fields travel behind a NUL sub-separator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChannelTextMsg {
    pub channel: String,
    pub nickname: String,
    pub text: String,
}

impl ChannelTextMsg {
    const TEXT_SEP: char = '\0';

    pub(crate) fn encode_payload(&self) -> String {
        format!(
            "{}{}{}{}{}",
            self.channel,
            Self::TEXT_SEP,
            self.nickname,
            Self::TEXT_SEP,
            self.text
        )
    }

    pub(crate) fn decode(data: &str) -> Option<Self> {
        let mut it = data.splitn(3, Self::TEXT_SEP);
        let channel = it.next()?.to_owned();
        let nickname = it.next()?.to_owned();
        let text = it.next()?.to_owned();
        Some(Self {
            channel,
            nickname,
            text,
        })
    }

    pub(crate) fn render_payload(&self) -> String {
        format!(
            "channel={}|nickname={}|text={}",
            self.channel, self.nickname, self.text
        )
    }

    pub(crate) fn strip_labels(body: &str) -> Option<String> {
        strip_text_fields(body, "channel=", "|nickname=", "|text=", Self::TEXT_SEP)
    }
}

/// Renders the masked password field: real passwords never appear in the
/// human-readable form.
pub(crate) fn render_password_masked(out: &mut String, password: &str) {
    if password.is_empty() || password == EMPTY_STR {
        out.push_str("|password empty");
    } else {
        out.push_str("|password=***");
    }
}

/// Strips a rendering whose second field is the masked password, restoring
/// the placeholder token for the empty form.
pub(crate) fn strip_with_masked_password(body: &str) -> Option<String> {
    let mut fields = Vec::new();
    for (i, piece) in body.split('|').enumerate() {
        if i == 1 {
            if piece == "password empty" {
                fields.push(EMPTY_STR);
            } else {
                fields.push(piece.strip_prefix("password=")?);
            }
            continue;
        }
        fields.push(piece.find('=').map_or(piece, |j| &piece[j + 1..]));
    }
    Some(fields.join(","))
}

/// Strips a `prefix` + `members=[a, b, c]` rendering back into positional
/// tokens. Also accepts the bracket-less legacy list shape `members=a,b,c`.
pub(crate) fn strip_labeled_member_list(prefix: &str, body: &str) -> Option<String> {
    let rest = body.strip_prefix(prefix)?;
    let (name, members) = rest.split_once("|members=")?;
    let mut out = String::from(name);
    push_member_tokens(&mut out, members);
    Some(out)
}

/// Strips a bare name-list rendering (`label=[a, b]` or `label=a,b`).
pub(crate) fn strip_member_list(label: &str, body: &str) -> Option<String> {
    let members = body.strip_prefix(label)?;
    let mut out = String::new();
    push_member_tokens(&mut out, members);
    Some(out.split_off(usize::from(out.starts_with(','))))
}

fn push_member_tokens(out: &mut String, members: &str) {
    if let Some(inner) = members.strip_prefix('[').and_then(|m| m.strip_suffix(']')) {
        for name in inner.split(", ") {
            out.push(',');
            out.push_str(name);
        }
    } else if !members.is_empty() {
        out.push(',');
        out.push_str(members);
    }
}

/// Strips a three-field free-text rendering back into `sub`-separated
/// wire fields. The final field keeps everything after its label, since
/// free text may contain separators.
pub(crate) fn strip_text_fields(
    body: &str,
    first: &str,
    second: &str,
    third: &str,
    sub: char,
) -> Option<String> {
    let rest = body.strip_prefix(first)?;
    let i = rest.find(second)?;
    let j = rest.find(third)?;
    if j < i {
        return None;
    }
    let mut out = String::with_capacity(body.len());
    out.push_str(&rest[..i]);
    out.push(sub);
    out.push_str(&rest[i + second.len()..j]);
    out.push(sub);
    out.push_str(&rest[j + third.len()..]);
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_channel_placeholder_password() {
        let m = JoinChannel {
            nickname: "m name".into(),
            password: String::new(),
            host: "-".into(),
            channel: "ch name".into(),
        };
        assert_eq!(m.encode_payload(), format!("m name,{EMPTY_STR},-,ch name"));
        assert_eq!(
            m.render_payload(),
            "nickname=m name|password empty|host=-|channel=ch name"
        );
        let back = JoinChannel::decode(&m.encode_payload()).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn masked_password_strip() {
        let stripped =
            strip_with_masked_password("nickname=m name|password empty|host=-|channel=ch name")
                .unwrap();
        assert_eq!(stripped, format!("m name,{EMPTY_STR},-,ch name"));

        let stripped =
            strip_with_masked_password("nickname=m name|password=***|host=-|channel=ch name")
                .unwrap();
        assert_eq!(stripped, "m name,***,-,ch name");
    }

    #[test]
    fn channel_text_nul_separators() {
        let m = ChannelTextMsg {
            channel: "cha".into(),
            nickname: "member name".into(),
            text: "msg which may,have,delimiters".into(),
        };
        let payload = m.encode_payload();
        assert_eq!(payload, "cha\0member name\0msg which may,have,delimiters");
        assert_eq!(ChannelTextMsg::decode(&payload).unwrap(), m);
    }

    #[test]
    fn member_list_strip_both_shapes() {
        let bracketed =
            strip_labeled_member_list("channel=", "channel=cha|members=[player0, droid 1, debug]")
                .unwrap();
        assert_eq!(bracketed, "cha,player0,droid 1,debug");

        let legacy =
            strip_labeled_member_list("channel=", "channel=cha|members=player0,droid 1,debug")
                .unwrap();
        assert_eq!(legacy, "cha,player0,droid 1,debug");
    }
}
