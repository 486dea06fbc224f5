//! Trigger scanning (input pre-classification).
//!
//! Inspects the raw input once and records cheap signals such as "contains a
//! digit" or "contains `@`". Every built-in extractor declares the signals at
//! least one of which its patterns need in order to match at all; when none
//! is present the extractor is skipped without running a single regex.
//!
//! ## Design notes
//!
//! - A signal must be a *necessary* condition for the family's patterns.
//!   Skipping is only an optimization and must never change the output.
//! - Extractors with an empty requirement (custom ones by default) always run.

use bitflags::bitflags;

bitflags! {
    /// Coarse input characteristics.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Signals: u32 {
        const HAS_DIGITS = 1 << 0;
        const HAS_AT     = 1 << 1;
        const HAS_HASH   = 1 << 2;
        const HAS_COLON  = 1 << 3;
        const HAS_DOT    = 1 << 4;
        const HAS_DASH   = 1 << 5;
    }
}

/// Signals detected in one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerInfo {
    pub signals: Signals,
}

impl TriggerInfo {
    /// Scan `input` for coarse signals.
    pub fn scan(input: &str) -> Self {
        let mut signals = Signals::empty();

        for b in input.bytes() {
            signals |= match b {
                b'0'..=b'9' => Signals::HAS_DIGITS,
                b'@' => Signals::HAS_AT,
                b'#' => Signals::HAS_HASH,
                b':' => Signals::HAS_COLON,
                b'.' => Signals::HAS_DOT,
                b'-' => Signals::HAS_DASH,
                _ => continue,
            };
            if signals.is_all() {
                break;
            }
        }

        TriggerInfo { signals }
    }

    /// Returns true when an extractor requiring any of `required` may match.
    pub fn satisfies(&self, required: Signals) -> bool {
        required.is_empty() || self.signals.intersects(required)
    }
}
