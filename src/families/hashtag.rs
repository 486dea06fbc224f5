//! Hashtag family.
//!
//! A hashtag starts a word: `#rust` matches, `a#b` and `##x` do not.

use crate::engine::{Extractor, PatternSet, Signals};

pub const HASHTAG: &str = "Hashtag";

pub fn patterns() -> PatternSet {
    pattern_set![
        r"(?<![A-Za-z0-9_#&])#[A-Za-z0-9_]+" => HASHTAG,
    ]
}

pub fn extractor() -> Extractor {
    Extractor::new(crate::Family::Hashtag.name(), patterns()).with_signals(Signals::HAS_HASH)
}
