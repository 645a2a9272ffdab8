//! Error types for version compatibility decisions.

use std::fmt;

use crate::version::ProtocolVersion;

/// Result type for version compatibility decisions.
pub type CompatResult<T> = Result<T, CompatError>;

/// A compatibility decision that must not be papered over.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CompatError {
    /// The value has no safe substitute at the peer's version; the caller
    /// must reject or re-route the operation instead of downgrading.
    NoFallback {
        value: i32,
        peer_version: ProtocolVersion,
    },
}

impl fmt::Display for CompatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFallback {
                value,
                peer_version,
            } => {
                write!(
                    f,
                    "no fallback for value {value} at peer version {peer_version}"
                )
            }
        }
    }
}

impl std::error::Error for CompatError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_no_fallback() {
        let err = CompatError::NoFallback {
            value: 20,
            peer_version: ProtocolVersion::new(1119),
        };
        let msg = err.to_string();
        assert!(msg.contains("20"));
        assert!(msg.contains("1119"));
    }
}
