//! Phone number family.
//!
//! The pattern table unions a general pattern with per-country variants.
//! After the merge, [`post_process`] applies two policies:
//!
//! 1. **Boundary markers.** A candidate preceded by a boundary marker
//!    (`- . / + # *`) is usually the tail of a longer token and is dropped,
//!    unless the marker is a special separator (`-`, `.`) and the candidate
//!    looks formatted. Such a candidate is kept when the character before the
//!    separator is not a digit, and an international dialing prefix right
//!    before the separator is absorbed into an extended copy:
//!
//!    ```text
//!    "011-212-555-0100"
//!         ^ candidate "212-555-0100", separator '-', prefix "011"
//!    =>   entity "011-212-555-0100"
//!    ```
//!
//! 2. **Hex sequences.** Eight space-separated two-hex-digit groups (a MAC- or
//!    dump-like `00 10 00 31 46 D9 E9 11`) are not phone numbers; candidates
//!    overlapping one are removed.

use crate::engine::{Extractor, PatternSet, Signals};
use crate::ExtractedEntity;

pub const GENERAL: &str = "GeneralPhoneNumber";
pub const BR: &str = "BRPhoneNumber";
pub const UK: &str = "UKPhoneNumber";
pub const DE: &str = "DEPhoneNumber";
pub const US: &str = "USPhoneNumber";
pub const CN: &str = "CNPhoneNumber";
pub const DK: &str = "DKPhoneNumber";
pub const IT: &str = "ITPhoneNumber";
pub const NL: &str = "NLPhoneNumber";
pub const SPECIAL: &str = "SpecialPhoneNumber";

/// Characters that disqualify a candidate when they directly precede it.
pub const BOUNDARY_MARKERS: &[char] = &['-', '.', '/', '+', '#', '*'];

/// Boundary markers that may instead separate a dialing prefix from the number.
pub const SPECIAL_BOUNDARY_MARKERS: &[char] = &['-', '.'];

pub fn patterns() -> PatternSet {
    pattern_set![
        r"\b(?:\d\s?){4,12}-?[\d\s]{3}\d(?!-)\b|\(\d{5}\)\s?\d{5,6}\b|\+\d{2}\(\d\)\d{10}\b" => GENERAL,
        r"(?:(?:\+\s?|\b00)55\s?)?(?:\(\s?\d{2}\s?\)\s?|\b\d{2}\s)9?\d{4}-?\d{4}(?!-)\b" => BR,
        r"(?:(?:\+|\b00)44\s?(?:\(0\)\s?)?|\b0)\d{2,4}[\s-]?\d{3,4}[\s-]?\d{3,4}(?!-)\b" => UK,
        r"(?:(?:\+|\b00)49\s?(?:\(0\)\s?)?|\b0)\d{2,5}[\s/-]?\d{4,8}(?!-)\b" => DE,
        r"(?:(?:\+\s?|\b)1[\s.-]?)?(?:\(\s?\d{3}\s?\)\s?|\b\d{3}[\s.-]?)\d{3}[\s.-]?\d{4}(?:\s?(?:x|ext\.?)\s?\d{2,5})?(?!-)\b" => US,
        r"(?:(?:\+|\b00)86\s?)?\b1[3-9]\d[\s-]?\d{4}[\s-]?\d{4}(?!-)\b" => CN,
        r"(?:(?:\+|\b00)45\s?)?\b\d{2}\s?\d{2}\s?\d{2}\s?\d{2}(?!-)\b" => DK,
        r"(?:(?:\+|\b00)39\s?)?\b(?:0\d{1,3}[\s/-]?\d{5,8}|3\d{2}[\s-]?\d{6,7})(?!-)\b" => IT,
        r"(?:(?:\+|\b00)31\s?(?:\(0\)\s?)?|\b0)(?:6[\s-]?\d{8}|\d{2,3}[\s-]?\d{6,7})(?!-)\b" => NL,
        r"\b\d{3,4}[/-]\d{1,4}[/-]\d{3,4}\b" => SPECIAL,
    ]
}

pub fn extractor() -> Extractor {
    Extractor::new(crate::Family::PhoneNumber.name(), patterns())
        .with_post_processor(post_process)
        .with_signals(Signals::HAS_DIGITS)
}

/// Boundary-marker policy followed by the hex-sequence filter. The result is
/// sorted by `start`.
pub fn post_process(text: &str, entities: Vec<ExtractedEntity>) -> Vec<ExtractedEntity> {
    let mut kept = absorb_dialing_prefixes(text, entities);
    drop_hex_sequences(text, &mut kept);
    kept.sort_by_key(|e| e.start);
    kept
}

/// Apply the boundary-marker policy to every candidate. Candidates whose
/// `start` is not a char boundary of `text` are dropped.
pub fn absorb_dialing_prefixes(text: &str, entities: Vec<ExtractedEntity>) -> Vec<ExtractedEntity> {
    let format_indicator = regex!(r"[\s\-/.()]");
    let dialing_prefix = regex!(r"(?:\+\s?\d{1,3}|\b00\d{1,3}|\b011)$");

    let mut kept = Vec::with_capacity(entities.len());

    for entity in entities {
        let Some(head) = text.get(..entity.start) else {
            tracing::debug!(start = entity.start, "phone candidate outside the input");
            continue;
        };
        let mut before = head.chars().rev();
        let Some(marker) = before.next() else {
            kept.push(entity);
            continue;
        };
        if !BOUNDARY_MARKERS.contains(&marker) {
            kept.push(entity);
            continue;
        }
        if !SPECIAL_BOUNDARY_MARKERS.contains(&marker) || !format_indicator.is_match(&entity.text) {
            tracing::debug!(text = %entity.text, start = entity.start, %marker, "phone candidate dropped at boundary");
            continue;
        }
        let Some(gap) = before.next() else {
            tracing::debug!(text = %entity.text, start = entity.start, "phone candidate too close to input start");
            continue;
        };

        let front = &head[..head.len() - marker.len_utf8()];
        let extended = dialing_prefix.find(front).and_then(|m| {
            let start = m.start();
            let length = entity.length + (m.end() - m.start()) + marker.len_utf8();
            let span = text.get(start..start + length)?;
            Some(ExtractedEntity {
                start,
                length,
                text: span.trim().to_string(),
                kind: entity.kind.clone(),
                data: entity.data.clone(),
            })
        });

        if !gap.is_numeric() {
            kept.push(entity);
        }
        if let Some(extended) = extended {
            tracing::trace!(text = %extended.text, start = extended.start, "absorbed dialing prefix");
            kept.push(extended);
        }
    }

    kept
}

/// Remove candidates overlapping a grouped hex-byte sequence.
pub fn drop_hex_sequences(text: &str, entities: &mut Vec<ExtractedEntity>) {
    let mask = regex!(r"(?i)\b[0-9a-f]{2}(?:\s[0-9a-f]{2}){7}\b");

    for m in mask.find_iter(text) {
        entities.retain(|e| {
            let overlaps = e.overlaps(m.start(), m.end());
            if overlaps {
                tracing::debug!(text = %e.text, mask = m.as_str(), "phone candidate inside hex sequence");
            }
            !overlaps
        });
    }
}
