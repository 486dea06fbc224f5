//! GUID family: 8-4-4-4-12 hex groups, bare or wrapped in braces.

use crate::engine::{Extractor, PatternSet, Signals};

pub const GUID: &str = "Guid";

pub fn patterns() -> PatternSet {
    pattern_set![
        r"(?i)\{[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}\}|\b[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}\b" => GUID,
    ]
}

pub fn extractor() -> Extractor {
    Extractor::new(crate::Family::Guid.name(), patterns()).with_signals(Signals::HAS_DASH)
}
