//! Error types for rendering parse failures.

use std::fmt;

/// Result type for rendering parse operations.
pub type ReplayResult<T> = Result<T, ReplayError>;

/// Why a human-readable line could not be parsed back into a message.
/// Each variant keeps the offending kind name and raw text for log
/// diagnosis.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReplayError {
    /// The line has no `Name:` marker.
    MissingKindMarker { text: String },

    /// The kind name (after renaming) is not in the registry.
    UnknownKind { kind: String, text: String },

    /// The kind's rendering is not reversible.
    Unsupported { kind: String },

    /// Label stripping failed; the body does not match the kind's
    /// rendered shape.
    BadShape { kind: String, text: String },

    /// The stripped fields were rejected by the wire decoder.
    Undecodable { kind: String, text: String },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingKindMarker { text } => {
                write!(f, "no kind-name marker in {text:?}")
            }
            Self::UnknownKind { kind, text } => {
                write!(f, "unknown kind {kind:?} in {text:?}")
            }
            Self::Unsupported { kind } => {
                write!(f, "rendering of {kind} is not reversible")
            }
            Self::BadShape { kind, text } => {
                write!(f, "{kind} rendering does not match its shape: {text:?}")
            }
            Self::Undecodable { kind, text } => {
                write!(f, "stripped {kind} fields failed to decode: {text:?}")
            }
        }
    }
}

impl std::error::Error for ReplayError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_kind_and_text() {
        let err = ReplayError::UnknownKind {
            kind: "Bogus".into(),
            text: "Bogus:x=1".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Bogus"));
        assert!(msg.contains("x=1"));
    }
}
