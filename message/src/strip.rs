//! Generic label stripping for the human-readable form.
//!
//! A rendering like `game=ga|accepting=2|offering=3` carries the same
//! positional fields as the wire payload with `name=` labels in front. The
//! generic strippers remove the labels; kinds whose renderings use hex
//! fields, symbolic names or nested structures override this with their own
//! logic.

use wire::{SEP, SEP2};

/// Strips `name=` labels from every `|`-separated piece and rejoins with
/// the ordinary secondary separator. Pieces without a label are kept as-is;
/// only the text up to the first `=` is treated as the label, so values may
/// themselves contain `=`.
#[must_use]
pub fn strip_attrib_names(body: &str) -> String {
    let pieces: Vec<&str> = strip_attribs_to_list(body);
    pieces.join(&SEP2.to_string())
}

/// Same as [`strip_attrib_names`] but rejoining with the primary
/// separator, for kinds decoded from a pre-split multi payload.
#[must_use]
pub fn strip_attrib_names_multi(body: &str) -> String {
    let pieces: Vec<&str> = strip_attribs_to_list(body);
    pieces.join(&SEP.to_string())
}

/// Splits a rendering into its label-stripped pieces.
#[must_use]
pub fn strip_attribs_to_list(body: &str) -> Vec<&str> {
    body.split(SEP)
        .map(|piece| piece.find('=').map_or(piece, |i| &piece[i + 1..]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_unlabeled() {
        assert_eq!(strip_attrib_names(""), "");
        assert_eq!(strip_attrib_names("xyz"), "xyz");
    }

    #[test]
    fn labeled_pieces() {
        assert_eq!(strip_attrib_names("param=xyz"), "xyz");
        assert_eq!(strip_attrib_names("xyz|p=abc"), "xyz,abc");
        assert_eq!(strip_attrib_names("param=xyz|p=abc"), "xyz,abc");
    }

    #[test]
    fn values_may_contain_equals() {
        assert_eq!(
            strip_attrib_names("game=fancy=game==name|p1=abc|p2=xyz"),
            "fancy=game==name,abc,xyz"
        );
        assert_eq!(
            strip_attrib_names("game=ga|pn1=usual_name|pn2===fancy=name"),
            "ga,usual_name,==fancy=name"
        );
    }

    #[test]
    fn bracketed_value_stays_one_piece() {
        assert_eq!(
            strip_attrib_names("game=ga_special=name|members=[player==0, droid 1, robot 2, debug]"),
            "ga_special=name,[player==0, droid 1, robot 2, debug]"
        );
    }

    #[test]
    fn list_form() {
        assert_eq!(strip_attribs_to_list("xyz|param=abc"), vec!["xyz", "abc"]);
        let li = strip_attribs_to_list("");
        assert_eq!(li, vec![""]);
    }
}
