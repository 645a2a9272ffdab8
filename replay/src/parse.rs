//! The rendering-to-message parse flow.

use message::{dispatch, Message, Strip};

use crate::error::{ReplayError, ReplayResult};
use crate::rename::current_name_for;

/// Parses one human-readable line (`KindName:label=value|...`) back into
/// the message it renders.
///
/// Historical kind names from archived logs are resolved through the
/// rename table before lookup. The stripped positional fields go through
/// the same decoder the live dispatcher uses, so a rendering and its wire
/// line always produce equal values.
pub fn parse_rendering(text: &str) -> ReplayResult<Message> {
    let (name, body) = text.split_once(':').ok_or_else(|| {
        ReplayError::MissingKindMarker {
            text: text.to_owned(),
        }
    })?;

    let current = current_name_for(name);
    let type_id = message::type_for_name(current).ok_or_else(|| ReplayError::UnknownKind {
        kind: name.to_owned(),
        text: text.to_owned(),
    })?;

    let stripped = match message::strip_behavior(type_id) {
        Some(Strip::Generic) => message::strip_attrib_names(body),
        Some(Strip::GenericMulti) => message::strip_attrib_names_multi(body),
        Some(Strip::Custom(strip)) => strip(body).ok_or_else(|| ReplayError::BadShape {
            kind: current.to_owned(),
            text: text.to_owned(),
        })?,
        Some(Strip::Unsupported) | None => {
            return Err(ReplayError::Unsupported {
                kind: current.to_owned(),
            })
        }
    };

    let line = if stripped.is_empty() {
        type_id.to_string()
    } else {
        format!("{type_id}{}{stripped}", wire::SEP)
    };
    dispatch(&line).ok_or_else(|| ReplayError::Undecodable {
        kind: current.to_owned(),
        text: text.to_owned(),
    })
}
