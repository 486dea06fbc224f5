//! Mention family (`@handle`).
//!
//! The handle must not be glued to a preceding word character (that is an
//! email) and must not continue into a domain (`@host.com`).

use crate::engine::{Extractor, PatternSet, Signals};

pub const MENTION: &str = "Mention";

pub fn patterns() -> PatternSet {
    pattern_set![
        r"(?<![A-Za-z0-9_.@])@[A-Za-z0-9_]+(?![.]?[A-Za-z0-9_@])" => MENTION,
    ]
}

pub fn extractor() -> Extractor {
    Extractor::new(crate::Family::Mention.name(), patterns()).with_signals(Signals::HAS_AT)
}
