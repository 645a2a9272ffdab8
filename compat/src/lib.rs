//! Protocol version gates and value fallback tables.
//!
//! Two related jobs:
//!
//! - **Minimum-version gate**: every message kind declares the lowest
//!   protocol version that understands it; [`minimum_version`] exposes the
//!   threshold for the sending side to enforce.
//! - **Value fallback**: some individual values inside still-understood
//!   kinds are themselves versioned (status codes, player-element news
//!   actions, development card numbering). Given a value and a peer
//!   version, [`status_valid_at`] reports whether the peer recognizes it
//!   and [`status_fallback_for`] walks a fixed substitution table to an
//!   older, semantically-closest value - or fails loudly when no safe
//!   substitute exists.
//!
//! # Design Principles
//!
//! - **Tables, not heuristics** - Every window and substitution is an
//!   explicit entry checked exhaustively by tests.
//! - **No silent downgrades** - A value marked no-fallback surfaces
//!   [`CompatError::NoFallback`]; picking something plausible instead
//!   could leave the peer believing an operation succeeded differently
//!   than it did.

mod error;
mod status;
mod values;
mod version;

pub use error::{CompatError, CompatResult};
pub use status::{status_fallback_for, status_valid_at};
pub use values::{
    devcard_type_for_version, devcard_type_from_version, element_action_fallback_for,
    element_action_valid_at, VERSION_FOR_ELEMENT_NEWS, VERSION_FOR_RENUMBERED_DEVCARDS,
};
pub use version::{maximum_version, minimum_version, ProtocolVersion};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        let _ = ProtocolVersion::new(2000);
        let _ = minimum_version(1047);
        let _: CompatResult<i32> = Ok(0);
    }
}
