//! Library half of the stead-tools CLI: decode wire lines and parse
//! human-readable logs into structured reports.

use anyhow::{Context, Result};
use serde::Serialize;

use message::Message;
use replay::parse_rendering;

/// One line's decode outcome.
#[derive(Debug, Serialize)]
pub struct LineReport {
    /// 1-based input line number.
    pub line: usize,
    /// The raw input line.
    pub input: String,
    /// The decoded message, if any.
    pub message: Option<Message>,
    /// Why decoding failed, when it did.
    pub error: Option<String>,
}

/// Decodes wire lines (`typeId|payload`) into reports. Blank lines are
/// skipped.
#[must_use]
pub fn decode_wire_lines(input: &str) -> Vec<LineReport> {
    input
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.is_empty())
        .map(|(i, l)| {
            let message = message::dispatch(l);
            let error = message.is_none().then(|| "malformed or unknown line".to_owned());
            LineReport {
                line: i + 1,
                input: l.to_owned(),
                message,
                error,
            }
        })
        .collect()
}

/// Parses human-readable log lines (`KindName:label=value|...`) into
/// reports. Blank lines are skipped.
#[must_use]
pub fn parse_log_lines(input: &str) -> Vec<LineReport> {
    input
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.is_empty())
        .map(|(i, l)| match parse_rendering(l) {
            Ok(message) => LineReport {
                line: i + 1,
                input: l.to_owned(),
                message: Some(message),
                error: None,
            },
            Err(err) => LineReport {
                line: i + 1,
                input: l.to_owned(),
                message: None,
                error: Some(err.to_string()),
            },
        })
        .collect()
}

/// Registry metadata for one message kind.
#[derive(Debug, Serialize)]
pub struct KindInfo {
    pub type_id: u16,
    pub name: &'static str,
    pub minimum_version: u16,
    pub maximum_version: Option<u16>,
}

/// Looks up a kind by numeric type id or by name.
pub fn kind_info(query: &str) -> Result<KindInfo> {
    let type_id = match query.parse::<u16>() {
        Ok(id) => id,
        Err(_) => message::type_for_name(query)
            .with_context(|| format!("no message kind named {query:?}"))?,
    };
    let name = message::name_for_type(type_id)
        .with_context(|| format!("no message kind with type id {type_id}"))?;
    Ok(KindInfo {
        type_id,
        name,
        minimum_version: compat::minimum_version(type_id)
            .map_or(1000, compat::ProtocolVersion::raw),
        maximum_version: compat::maximum_version(type_id).map(compat::ProtocolVersion::raw),
    })
}

/// Renders reports as JSON.
pub fn reports_to_json(reports: &[LineReport]) -> Result<String> {
    serde_json::to_string_pretty(reports).context("serializing reports")
}

/// Renders reports as aligned human-oriented text.
#[must_use]
pub fn reports_to_pretty(reports: &[LineReport]) -> String {
    let mut out = String::new();
    for r in reports {
        match (&r.message, &r.error) {
            (Some(m), _) => {
                out.push_str(&format!("{:>5}  {}\n", r.line, m.render()));
            }
            (None, Some(err)) => {
                out.push_str(&format!("{:>5}  !! {err}: {}\n", r.line, r.input));
            }
            (None, None) => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_mixed_lines() {
        let reports = decode_wire_lines("1047|abc,5\n\n4242|zz\n");
        assert_eq!(reports.len(), 2);
        assert!(reports[0].message.is_some());
        assert!(reports[1].message.is_none());
        assert!(reports[1].error.is_some());
    }

    #[test]
    fn parse_log_lines_reports_errors() {
        let reports = parse_log_lines("EndTurn:game=ga\nBogus:x=1\n");
        assert!(reports[0].message.is_some());
        assert!(reports[1].error.as_deref().unwrap_or("").contains("Bogus"));
    }

    #[test]
    fn kind_info_by_id_and_name() {
        let by_id = kind_info("1047").unwrap();
        assert_eq!(by_id.name, "DevCardCount");
        let by_name = kind_info("DevCardCount").unwrap();
        assert_eq!(by_name.type_id, 1047);
        assert_eq!(by_name.maximum_version, Some(1999));
        assert!(kind_info("Bogus").is_err());
    }

    #[test]
    fn json_report_shape() {
        let reports = decode_wire_lines("1047|abc,5\n");
        let json = reports_to_json(&reports).unwrap();
        assert!(json.contains("\"DevCardCount\""));
        assert!(json.contains("\"line\": 1"));
    }
}
