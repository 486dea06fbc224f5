//! URL family.
//!
//! Three patterns in priority order: scheme URLs whose host is an IPv4
//! literal or `localhost`, domain URLs with a known top-level domain, and a
//! scheme/`www.` fallback. None of them may start right after a word
//! character, `.`, `@` or `-`, so the host of an email address is not a URL.
//! Short tokens like `7.am` or `8.pm` match the domain pattern (`.am` and
//! `.pm` are real TLDs) but are almost always times, so the validator rejects
//! them before they mark any coverage.

use crate::engine::{Extractor, PatternSet, Signals};
use crate::Occurrence;

pub const URL: &str = "Url";

pub fn patterns() -> PatternSet {
    pattern_set![
        r#"(?i)(?<![\w.@-])(?:https?|ftp)://(?:(?:(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)\.){3}(?:25[0-5]|2[0-4]\d|1\d\d|[1-9]?\d)|localhost)\b(?::\d{1,5})?(?:[/?#](?:[^\s]*[^\s.,;:!?)\]'"])?)?"# => URL,
        r#"(?i)(?<![\w.@-])(?:(?:https?|ftp)://)?(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+(?:com|org|net|edu|gov|mil|int|info|biz|io|co|me|tv|us|uk|ca|de|fr|es|it|nl|cn|jp|kr|in|au|br|ru|ch|se|no|dk|am|pm|ly|ai|app|dev)\b(?::\d{1,5})?(?:[/?#](?:[^\s]*[^\s.,;:!?)\]'"])?)?"# => URL,
        r#"(?i)(?<![\w.@-])(?:(?:https?|ftp)://|www\.)[0-9a-z](?:[-.\w]*[0-9a-z])?(?::\d+)?(?:/(?:[^\s]*[^\s.,;:!?)\]'"])?)?"# => URL,
    ]
}

pub fn extractor() -> Extractor {
    Extractor::new(crate::Family::Url.name(), patterns())
        .with_validator(is_unambiguous)
        .with_signals(Signals::HAS_DOT | Signals::HAS_COLON)
}

/// Rejects occurrences that are entirely an hour followed by `.am`/`.pm`.
pub fn is_unambiguous(occurrence: &Occurrence<'_>) -> bool {
    !regex!(r"(?i)^(?:1[0-2]|0?[1-9])\.(?:am|pm)$").is_match(occurrence.text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occurrence(text: &str) -> Occurrence<'_> {
        Occurrence { ordinal: 0, pattern: 1, start: 0, end: text.len(), text, tag: URL }
    }

    #[test]
    fn time_terms_are_rejected() {
        for term in ["7.am", "8.pm", "12.AM", "07.pm"] {
            assert!(!is_unambiguous(&occurrence(term)), "{term} should be rejected");
        }
    }

    #[test]
    fn domains_are_accepted() {
        for term in ["7.am.example.com", "news.am", "13.pm", "bing.com"] {
            assert!(is_unambiguous(&occurrence(term)), "{term} should be accepted");
        }
    }
}
