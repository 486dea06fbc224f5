//! Span merging.
//!
//! This is the operational core of the engine. Given the occurrences
//! collected for one family, it:
//!
//! 1. Lets the family's validator veto occurrences. A vetoed occurrence
//!    neither marks coverage nor registers its span.
//! 2. Marks every byte covered by an accepted occurrence and registers the
//!    occurrence's span in a first-write-wins `SpanIndex`.
//! 3. Scans the coverage left to right and closes a run at every covered
//!    byte followed by an uncovered byte (or the end of input).
//! 4. Per run: applies the family's run filter, then emits an entity only if
//!    some accepted occurrence spans the run *exactly*.
//!
//! ```text
//! input:     "x 555-0100 y"
//! occ #0:      555-0100        (tag A)
//! occ #1:      555             (tag B)
//! coverage:  ..########..
//! run:         2..10  -> exact match #0 -> entity(2, 8, tag A)
//!
//! occ #0:      555-01          (tag A)
//! occ #1:         -0100        (tag B)
//! run:         2..10  -> no exact match -> dropped
//! ```
//!
//! Runs built from several overlapping occurrences, none of which covers the
//! whole run, are unresolvable and produce nothing; they are never split or
//! approximated.

use super::span_index::{SpanIndex, SpanKey};
use crate::{ExtractedEntity, Occurrence, Run};

/// Occurrence veto applied before coverage marking.
pub type Validator = Box<dyn Fn(&Occurrence<'_>) -> bool + Send + Sync>;

/// Run veto applied before the exact-span lookup. Receives the full input
/// and the closed run; returning false discards the run.
pub type RunFilter = fn(&str, &Run<'_>) -> bool;

/// Per-family hooks for [`merge`].
#[derive(Default)]
pub struct MergePolicy<'p> {
    pub validator: Option<&'p Validator>,
    pub run_filter: Option<RunFilter>,
}

impl<'p> MergePolicy<'p> {
    fn accepts(&self, occurrence: &Occurrence<'_>) -> bool {
        self.validator.is_none_or(|valid| valid(occurrence))
    }

    fn keeps(&self, text: &str, run: &Run<'_>) -> bool {
        self.run_filter.is_none_or(|keep| keep(text, run))
    }
}

/// Counters describing one merge.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MergeStats {
    /// Occurrences that marked coverage.
    pub accepted: usize,
    /// Occurrences vetoed by the validator or outside the input.
    pub rejected: usize,
    /// Runs closed by the scan.
    pub runs: usize,
    /// Runs discarded by the run filter.
    pub filtered: usize,
    /// Runs with no exact-span occurrence.
    pub unresolved: usize,
    /// Entities emitted.
    pub emitted: usize,
}

/// Result of [`merge`].
#[derive(Debug, Default, Clone)]
pub struct MergeOutcome {
    pub entities: Vec<ExtractedEntity>,
    pub stats: MergeStats,
}

/// Merge `occurrences` over `text` into entities of type `kind`.
///
/// `occurrences` must be in collection order. Occurrences that are empty,
/// out of bounds or not on char boundaries are skipped and counted as
/// rejected. Empty input yields an empty outcome.
pub fn merge(text: &str, kind: &str, occurrences: &[Occurrence<'_>], policy: &MergePolicy<'_>) -> MergeOutcome {
    let mut stats = MergeStats::default();
    if text.is_empty() {
        return MergeOutcome { entities: Vec::new(), stats };
    }

    let mut covered = vec![false; text.len()];
    let mut index = SpanIndex::with_capacity(occurrences.len());

    for (idx, occ) in occurrences.iter().enumerate() {
        if occ.start >= occ.end || text.get(occ.start..occ.end).is_none() {
            tracing::trace!(start = occ.start, end = occ.end, "skipping malformed occurrence");
            stats.rejected += 1;
            continue;
        }
        if !policy.accepts(occ) {
            tracing::trace!(kind, tag = occ.tag, text = occ.text, "occurrence rejected by validator");
            stats.rejected += 1;
            continue;
        }
        covered[occ.start..occ.end].fill(true);
        index.register(SpanKey::of(occ), idx);
        stats.accepted += 1;
    }

    let mut entities = Vec::new();
    // Index of the most recent uncovered byte.
    let mut last: Option<usize> = None;

    for i in 0..covered.len() {
        if !covered[i] {
            last = Some(i);
            continue;
        }
        if i + 1 < covered.len() && covered[i + 1] {
            continue;
        }

        let start = last.map_or(0, |l| l + 1);
        let length = i + 1 - start;
        let run = Run { start, length, text: &text[start..start + length] };
        stats.runs += 1;

        if !policy.keeps(text, &run) {
            tracing::debug!(kind, start, length, text = run.text, "run discarded by filter");
            stats.filtered += 1;
            continue;
        }

        match index.lookup(SpanKey { start, length }) {
            Some(idx) => {
                entities.push(ExtractedEntity {
                    start,
                    length,
                    text: run.trimmed().to_string(),
                    kind: kind.to_string(),
                    data: occurrences[idx].tag.to_string(),
                });
                stats.emitted += 1;
            }
            None => {
                tracing::trace!(kind, start, length, text = run.text, "run has no exact-span occurrence");
                stats.unresolved += 1;
            }
        }
    }

    MergeOutcome { entities, stats }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occ<'a>(text: &'a str, ordinal: usize, start: usize, end: usize, tag: &'a str) -> Occurrence<'a> {
        Occurrence { ordinal, pattern: ordinal, start, end, text: &text[start..end], tag }
    }

    #[test]
    fn empty_text_yields_nothing() {
        let out = merge("", "email", &[], &MergePolicy::default());
        assert!(out.entities.is_empty());
        assert_eq!(out.stats, MergeStats::default());
    }

    #[test]
    fn exact_span_occurrence_becomes_entity() {
        let text = "contact me at a@b.com today";
        let out = merge(text, "email", &[occ(text, 0, 14, 21, "Email")], &MergePolicy::default());

        assert_eq!(
            out.entities,
            vec![ExtractedEntity {
                start: 14,
                length: 7,
                text: "a@b.com".to_string(),
                kind: "email".to_string(),
                data: "Email".to_string(),
            }]
        );
        assert_eq!(out.stats.runs, 1);
        assert_eq!(out.stats.emitted, 1);
    }

    #[test]
    fn contained_occurrence_defers_to_the_spanning_one() {
        let text = "x 555-0100 y";
        let occurrences = [occ(text, 0, 2, 5, "short"), occ(text, 1, 2, 10, "long")];
        let out = merge(text, "phonenumber", &occurrences, &MergePolicy::default());

        assert_eq!(out.entities.len(), 1);
        assert_eq!(out.entities[0].data, "long");
        assert_eq!((out.entities[0].start, out.entities[0].length), (2, 8));
    }

    #[test]
    fn overlap_without_exact_span_is_dropped() {
        let text = "x 555-0100 y";
        let occurrences = [occ(text, 0, 2, 8, "a"), occ(text, 1, 5, 10, "b")];
        let out = merge(text, "phonenumber", &occurrences, &MergePolicy::default());

        assert!(out.entities.is_empty());
        assert_eq!(out.stats.runs, 1);
        assert_eq!(out.stats.unresolved, 1);
    }

    #[test]
    fn earliest_occurrence_wins_identical_spans() {
        let text = "call 555-0100";
        let occurrences = [occ(text, 0, 5, 13, "US"), occ(text, 1, 5, 13, "UK")];
        let out = merge(text, "phonenumber", &occurrences, &MergePolicy::default());

        assert_eq!(out.entities.len(), 1);
        assert_eq!(out.entities[0].data, "US");
    }

    #[test]
    fn length_keeps_untrimmed_run() {
        let text = "x  ab  y";
        let out = merge(text, "t", &[occ(text, 0, 1, 7, "tag")], &MergePolicy::default());

        let entity = &out.entities[0];
        assert_eq!((entity.start, entity.length), (1, 6));
        assert_eq!(entity.text, "ab");
        assert_eq!(entity.end(), 7);
    }

    #[test]
    fn adjacent_occurrences_form_one_run() {
        let text = "abcdef";
        let occurrences = [occ(text, 0, 0, 3, "a"), occ(text, 1, 3, 6, "b")];
        let out = merge(text, "t", &occurrences, &MergePolicy::default());

        assert!(out.entities.is_empty());
        assert_eq!(out.stats.runs, 1);
    }

    #[test]
    fn separate_runs_are_emitted_in_order() {
        let text = "ab cd ef";
        let occurrences = [occ(text, 0, 6, 8, "third"), occ(text, 1, 0, 2, "first"), occ(text, 2, 3, 5, "second")];
        let out = merge(text, "t", &occurrences, &MergePolicy::default());

        let tags: Vec<&str> = out.entities.iter().map(|e| e.data.as_str()).collect();
        assert_eq!(tags, vec!["first", "second", "third"]);
    }

    #[test]
    fn rejected_occurrence_leaves_coverage_untouched() {
        let text = "ab cd";
        let occurrences = [occ(text, 0, 0, 5, "whole"), occ(text, 1, 3, 5, "tail")];
        let validator: Validator = Box::new(|o: &Occurrence<'_>| o.tag != "whole");
        let policy = MergePolicy { validator: Some(&validator), run_filter: None };
        let out = merge(text, "t", &occurrences, &policy);

        assert_eq!(out.entities.len(), 1);
        assert_eq!((out.entities[0].start, out.entities[0].text.as_str()), (3, "cd"));
        assert_eq!(out.stats.rejected, 1);
        assert_eq!(out.stats.accepted, 1);
    }

    #[test]
    fn run_filter_discards_before_lookup() {
        fn not_at_start(_: &str, run: &Run<'_>) -> bool {
            run.start > 0
        }

        let text = "ab cd";
        let occurrences = [occ(text, 0, 0, 2, "a"), occ(text, 1, 3, 5, "b")];
        let policy = MergePolicy { validator: None, run_filter: Some(not_at_start) };
        let out = merge(text, "t", &occurrences, &policy);

        assert_eq!(out.entities.len(), 1);
        assert_eq!(out.entities[0].data, "b");
        assert_eq!(out.stats.filtered, 1);
    }

    #[test]
    fn malformed_occurrences_are_skipped() {
        let text = "héllo";
        let bogus = [
            Occurrence { ordinal: 0, pattern: 0, start: 2, end: 3, text: "", tag: "split-char" },
            Occurrence { ordinal: 1, pattern: 0, start: 4, end: 40, text: "", tag: "past-end" },
            Occurrence { ordinal: 2, pattern: 0, start: 1, end: 1, text: "", tag: "empty" },
        ];
        let out = merge(text, "t", &bogus, &MergePolicy::default());

        assert!(out.entities.is_empty());
        assert_eq!(out.stats.rejected, 3);
    }
}
