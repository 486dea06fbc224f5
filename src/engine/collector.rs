//! Occurrence collection.
//!
//! Runs every pattern of a `PatternSet` against the raw input and flattens the
//! results into one ordered list:
//!
//! ```text
//! patterns: [P0, P1, P2]
//! P0 -> (3..8) (12..15)
//! P1 -> (none)             skipped
//! P2 -> (3..8)
//!
//! occurrences: #0 P0 3..8, #1 P0 12..15, #2 P2 3..8
//! ```
//!
//! The list order (pattern order, then match order) is the order the merger
//! registers spans in, so it is what breaks exact-span ties.

use super::pattern_set::PatternSet;
use crate::Occurrence;

/// Collect all occurrences of every pattern in `patterns` over `text`.
///
/// Zero-length matches are dropped; they cannot cover any byte.
pub fn collect<'a>(text: &'a str, patterns: &'a PatternSet) -> Vec<Occurrence<'a>> {
    let mut occurrences = Vec::new();

    for (idx, pattern) in patterns.iter().enumerate() {
        let spans = pattern.matcher().find_spans(text);
        if spans.is_empty() {
            continue;
        }

        tracing::trace!(tag = pattern.tag(), pattern = idx, matches = spans.len(), "pattern matched");

        for (start, end) in spans {
            if start == end {
                tracing::trace!(tag = pattern.tag(), start, "skipping zero-length match");
                continue;
            }
            occurrences.push(Occurrence {
                ordinal: occurrences.len(),
                pattern: idx,
                start,
                end,
                text: &text[start..end],
                tag: pattern.tag(),
            });
        }
    }

    occurrences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_by_pattern_then_position() {
        let set = PatternSet::new().with(r"\d+", "digits").unwrap().with(r"[a-z]+", "word").unwrap();
        let found = collect("ab 12 cd 34", &set);

        let summary: Vec<(usize, &str, &str)> = found.iter().map(|o| (o.ordinal, o.tag, o.text)).collect();
        assert_eq!(
            summary,
            vec![(0, "digits", "12"), (1, "digits", "34"), (2, "word", "ab"), (3, "word", "cd")]
        );
    }

    #[test]
    fn keeps_identical_spans_from_different_patterns() {
        let set = PatternSet::new().with(r"abc", "first").unwrap().with(r"[a-c]{3}", "second").unwrap();
        let found = collect("xx abc", &set);

        assert_eq!(found.len(), 2);
        assert_eq!((found[0].start, found[0].end, found[0].tag), (3, 6, "first"));
        assert_eq!((found[1].start, found[1].end, found[1].tag), (3, 6, "second"));
        assert_eq!(found[1].pattern, 1);
    }

    #[test]
    fn patterns_without_matches_contribute_nothing() {
        let set = PatternSet::new().with(r"@", "at").unwrap().with(r"x", "x").unwrap();
        let found = collect("xyz", &set);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].ordinal, 0);
        assert_eq!(found[0].pattern, 1);
    }
}
