//! Email address family.

use crate::engine::{Extractor, PatternSet, Signals};

pub const EMAIL: &str = "Email";

pub fn patterns() -> PatternSet {
    pattern_set![
        r"(?i)\b[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}\b" => EMAIL,
    ]
}

pub fn extractor() -> Extractor {
    Extractor::new(crate::Family::Email.name(), patterns()).with_signals(Signals::HAS_AT)
}
