//! Inbound line dispatch: tokenize, look up the kind, decode.

use wire::SEP;

use crate::registry::{self, Convention, Message};

/// Decodes one inbound wire line into a message.
///
/// Fails closed: a line with an unparsable or unregistered type id, or a
/// malformed payload, is logged and dropped as `None` rather than
/// surfacing an error. Unknown ids are expected traffic when the peer
/// runs a newer protocol version.
///
/// The registry is read-only, so this is safe to call concurrently from
/// any number of callers.
#[must_use]
pub fn dispatch(line: &str) -> Option<Message> {
    let (id_token, rest) = line.split_once(SEP).unwrap_or((line, ""));
    let Ok(type_id) = id_token.parse::<u16>() else {
        tracing::debug!(line, "dropping line with unparsable type id");
        return None;
    };
    if type_id == registry::NULL_MESSAGE {
        return None;
    }
    if !registry::is_known(type_id) {
        tracing::debug!(type_id, "dropping line with unknown type id");
        return None;
    }

    let msg = match registry::convention(type_id)? {
        Convention::Data => {
            // ordinary kinds read one payload segment
            let data = rest.split(SEP).next().unwrap_or("");
            registry::decode_known(type_id, data, &[])
        }
        Convention::Multi => {
            let parts: Vec<&str> = rest.split(SEP).filter(|t| !t.is_empty()).collect();
            registry::decode_known(type_id, "", &parts)
        }
    };
    if msg.is_none() {
        tracing::debug!(type_id, line, "dropping malformed payload");
    }
    msg
}
