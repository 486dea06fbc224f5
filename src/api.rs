use crate::ExtractedEntity;
use crate::engine::{ExtractorRun, MergeStats, TriggerInfo};
use crate::families::{Family, FamilyMask};
use std::time::{Duration, Instant};

/// Options that affect which entities are extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Families to run. Defaults to all of them.
    pub families: FamilyMask,
}

impl Default for Options {
    fn default() -> Self {
        Options { families: FamilyMask::all() }
    }
}

impl Options {
    /// Options selecting only `families`.
    pub fn only(families: impl IntoIterator<Item = Family>) -> Self {
        Options { families: families.into_iter().collect() }
    }
}

/// Result from [`extract`] and [`extract_with`].
#[derive(Debug, Clone)]
pub struct ExtractResult {
    /// The input text.
    pub text: String,
    /// Entities from every selected family, ordered by `start`.
    pub results: Vec<ExtractedEntity>,
    /// Total elapsed time.
    pub elapsed: Duration,
}

/// A compact occurrence summary used in verbose traces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccurrenceSummary {
    pub start: usize,
    pub end: usize,
    pub tag: String,
    pub preview: String,
}

/// Per-family trace returned by [`extract_verbose_with`].
#[derive(Debug, Clone)]
pub struct FamilyTrace {
    pub family: Family,
    /// True when the trigger scan ruled the family out.
    pub skipped: bool,
    pub duration: Duration,
    /// Occurrences collected across all patterns.
    pub occurrences: usize,
    /// Matches per pattern tag, in pattern order.
    pub per_pattern: Vec<(String, usize)>,
    pub stats: MergeStats,
    /// Entities surviving post-processing.
    pub emitted: usize,
    pub samples: Vec<OccurrenceSummary>,
}

/// Additional details returned by [`extract_verbose_with`].
#[derive(Debug, Clone)]
pub struct ExtractDetails {
    pub total: Duration,
    pub families: Vec<FamilyTrace>,
    /// Merge output of every family before post-processing.
    pub all_candidates: Vec<ExtractedEntity>,
}

/// Result from [`extract_verbose`] and [`extract_verbose_with`].
#[derive(Debug, Clone)]
pub struct ExtractResultVerbose {
    pub text: String,
    pub results: Vec<ExtractedEntity>,
    pub elapsed: Duration,
    pub details: ExtractDetails,
}

/// Extract entities of every built-in family from `text`.
///
/// # Example
/// ```
/// use seqtract::extract;
///
/// let out = extract("contact me at a@b.com today");
/// assert_eq!(out.results[0].text, "a@b.com");
/// ```
pub fn extract(text: &str) -> ExtractResult {
    extract_with(text, &Options::default())
}

/// Extract entities of the families selected in `options`.
pub fn extract_with(text: &str, options: &Options) -> ExtractResult {
    let started = Instant::now();
    let trigger = TriggerInfo::scan(text);

    let mut results = Vec::new();
    for family in options.families.families() {
        let extractor = family.extractor();
        if !extractor.is_triggered(&trigger) {
            continue;
        }
        results.extend(extractor.extract(text));
    }
    results.sort_by_key(|e| e.start);

    ExtractResult { text: text.to_string(), results, elapsed: started.elapsed() }
}

pub fn extract_verbose(text: &str) -> ExtractResultVerbose {
    extract_verbose_with(text, &Options::default())
}

/// Extract with `options` and return a per-family trace.
///
/// The default [`extract_with`] path does not allocate these traces.
pub fn extract_verbose_with(text: &str, options: &Options) -> ExtractResultVerbose {
    let started = Instant::now();
    let trigger = TriggerInfo::scan(text);

    let mut results = Vec::new();
    let mut all_candidates = Vec::new();
    let mut families = Vec::new();

    for family in options.families.families() {
        let extractor = family.extractor();
        if !extractor.is_triggered(&trigger) {
            tracing::debug!(%family, signals = ?trigger.signals, "family skipped by trigger scan");
            families.push(skipped_trace(family));
            continue;
        }

        let run = extractor.run(text);
        families.push(family_trace(family, text, &run));
        all_candidates.extend(run.candidates);
        results.extend(run.entities);
    }
    results.sort_by_key(|e| e.start);
    all_candidates.sort_by_key(|e| e.start);

    let total = started.elapsed();
    let details = ExtractDetails { total, families, all_candidates };

    ExtractResultVerbose { text: text.to_string(), results, elapsed: total, details }
}

fn skipped_trace(family: Family) -> FamilyTrace {
    FamilyTrace {
        family,
        skipped: true,
        duration: Duration::ZERO,
        occurrences: 0,
        per_pattern: Vec::new(),
        stats: MergeStats::default(),
        emitted: 0,
        samples: Vec::new(),
    }
}

fn family_trace(family: Family, text: &str, run: &ExtractorRun) -> FamilyTrace {
    FamilyTrace {
        family,
        skipped: false,
        duration: run.metrics.total(),
        occurrences: run.metrics.occurrences,
        per_pattern: run.metrics.per_pattern.clone(),
        stats: run.metrics.stats,
        emitted: run.entities.len(),
        samples: run
            .samples
            .iter()
            .map(|(start, end, tag)| OccurrenceSummary {
                start: *start,
                end: *end,
                tag: tag.clone(),
                preview: text.get(*start..*end).unwrap_or("").chars().take(80).collect(),
            })
            .collect(),
    }
}
