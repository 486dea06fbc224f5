//! IP address family (IPv4 and IPv6).
//!
//! IPv6 allows a run of zero groups to be abbreviated as `::`. A run that
//! starts with `::` right after a letter or digit (`x::1`), or ends with `::`
//! right before one (`a::b` style scopes), is far more likely to be part of
//! a larger token than an address, so [`is_unambiguous`] discards it before
//! the exact-span lookup.

use crate::engine::{Extractor, PatternSet, Signals};
use crate::Run;

pub const IPV4: &str = "ipv4";
pub const IPV6: &str = "ipv6";

/// The IPv6 zero-compression marker.
pub const IPV6_ELLIPSIS: &str = "::";

pub fn patterns() -> PatternSet {
    pattern_set![
        r"\b(?:(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)\.){3}(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)\b" => IPV4,
        r"[0-9A-Fa-f]{1,4}(?::[0-9A-Fa-f]{1,4}){7}|(?:[0-9A-Fa-f]{1,4}(?::[0-9A-Fa-f]{1,4}){0,6})?::(?:[0-9A-Fa-f]{1,4}(?::[0-9A-Fa-f]{1,4}){0,6})?" => IPV6,
    ]
}

pub fn extractor() -> Extractor {
    Extractor::new(crate::Family::Ip.name(), patterns())
        .with_run_filter(is_unambiguous)
        .with_signals(Signals::HAS_DIGITS | Signals::HAS_COLON)
}

/// Returns false for runs whose `::` touches an adjacent alphanumeric
/// character. Runs at the input boundary are never ambiguous on that side.
pub fn is_unambiguous(text: &str, run: &Run<'_>) -> bool {
    let trimmed = run.trimmed();

    let leading = trimmed.starts_with(IPV6_ELLIPSIS)
        && text[..run.start].chars().next_back().is_some_and(char::is_alphanumeric);
    let trailing =
        trimmed.ends_with(IPV6_ELLIPSIS) && text[run.end()..].chars().next().is_some_and(char::is_alphanumeric);

    !(leading || trailing)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_at(text: &str, start: usize, end: usize) -> Run<'_> {
        Run { start, length: end - start, text: &text[start..end] }
    }

    #[test]
    fn leading_ellipsis_after_letter_is_ambiguous() {
        let text = "x::1";
        assert!(!is_unambiguous(text, &run_at(text, 1, 4)));
    }

    #[test]
    fn leading_ellipsis_at_start_is_fine() {
        let text = "::1";
        assert!(is_unambiguous(text, &run_at(text, 0, 3)));
    }

    #[test]
    fn trailing_ellipsis_before_digit_is_ambiguous() {
        let text = "fe80::9";
        assert!(!is_unambiguous(text, &run_at(text, 0, 6)));
        assert!(is_unambiguous(text, &run_at(text, 0, 7)));
    }

    #[test]
    fn ellipsis_next_to_punctuation_is_fine() {
        let text = "(::1)";
        assert!(is_unambiguous(text, &run_at(text, 1, 4)));
    }
}
