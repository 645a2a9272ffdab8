//! Message kinds, type registry and dispatcher for the stead game
//! protocol.
//!
//! Every message is a small immutable value: built by a caller for
//! outgoing use, or produced by [`dispatch`] for inbound lines. Each kind
//! owns its field layout, its wire codec and its human-readable rendering;
//! the registry maps stable type identifiers to decoders and version
//! windows.
//!
//! # Design Principles
//!
//! - **Fail closed** - Malformed or unknown lines decode to `None`, never
//!   a panic or an unwound error.
//! - **Static registries** - Type and name lookup are compile-time
//!   matches; nothing is built or mutated at runtime.
//! - **Kinds own their quirks** - Optional fields, sentinel pads and
//!   symbolic renderings live with the kind that defines them.
//!
//! # Example
//!
//! ```
//! use message::{dispatch, DevCardCount, Message};
//!
//! let m = Message::DevCardCount(DevCardCount { game: "abc".into(), count: 5 });
//! let line = m.encode();
//! assert_eq!(line, "1047|abc,5");
//! assert_eq!(dispatch(&line), Some(m));
//! ```

mod data;
mod dispatch;
mod kinds;
mod registry;
mod strip;
mod template;

pub use data::{resource, ResourceSet, SeatLockState, TradeOffer};
pub use dispatch::dispatch;
pub use kinds::*;
pub use registry::{
    convention, is_known, maximum_version, minimum_version, name_for_type, strip_behavior,
    type_for_name, Convention, Message, Strip, NULL_MESSAGE,
};
pub use strip::{strip_attrib_names, strip_attrib_names_multi, strip_attribs_to_list};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        let _ = ResourceSet::default();
        let _: Option<u16> = minimum_version(1047);
        let _ = is_known(1047);
        let _ = name_for_type(1047);
    }

    #[test]
    fn render_and_name_agree() {
        let m = Message::EndTurn(EndTurn { game: "ga".into() });
        assert_eq!(m.render(), "EndTurn:game=ga");
        assert_eq!(type_for_name(m.type_name()), Some(m.type_id()));
    }
}
