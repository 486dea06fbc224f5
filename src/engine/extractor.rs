//! Family extractor.
//!
//! An `Extractor` is one entity family's full pipeline: the pattern set plus
//! the optional hooks that specialize the shared merge algorithm.
//!
//! ```text
//! collect(patterns) ─▶ merge(validator, run_filter) ─▶ post_processor ─▶ entities
//! ```
//!
//! Built-in families live in `src/families/**`; callers can assemble their
//! own from any `PatternSet`.

use super::collector::collect;
use super::merger::{MergePolicy, RunFilter, Validator, merge};
use super::metrics::{ExtractorMetrics, ExtractorRun};
use super::pattern_set::PatternSet;
use super::trigger::{Signals, TriggerInfo};
use crate::{ExtractedEntity, Occurrence};
use std::fmt;
use std::time::Instant;

/// Family-specific rewrite of the merged entity list. Receives the full input.
pub type PostProcessor = fn(&str, Vec<ExtractedEntity>) -> Vec<ExtractedEntity>;

const SAMPLE_LIMIT: usize = 8;

pub struct Extractor {
    kind: String,
    patterns: PatternSet,
    validator: Option<Validator>,
    run_filter: Option<RunFilter>,
    post_processor: Option<PostProcessor>,
    requires: Signals,
}

impl Extractor {
    /// Create an extractor emitting entities of type `kind`.
    pub fn new(kind: impl Into<String>, patterns: PatternSet) -> Self {
        Extractor {
            kind: kind.into(),
            patterns,
            validator: None,
            run_filter: None,
            post_processor: None,
            requires: Signals::empty(),
        }
    }

    /// Veto occurrences before they mark coverage.
    pub fn with_validator(mut self, validator: impl Fn(&Occurrence<'_>) -> bool + Send + Sync + 'static) -> Self {
        self.validator = Some(Box::new(validator));
        self
    }

    /// Veto closed runs before the exact-span lookup.
    pub fn with_run_filter(mut self, filter: RunFilter) -> Self {
        self.run_filter = Some(filter);
        self
    }

    /// Rewrite the merged entities.
    pub fn with_post_processor(mut self, post: PostProcessor) -> Self {
        self.post_processor = Some(post);
        self
    }

    /// Skip this extractor on inputs carrying none of `signals`.
    pub fn with_signals(mut self, signals: Signals) -> Self {
        self.requires = signals;
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    pub fn requires(&self) -> Signals {
        self.requires
    }

    /// Returns true when this extractor may produce output for `trigger`.
    pub fn is_triggered(&self, trigger: &TriggerInfo) -> bool {
        trigger.satisfies(self.requires)
    }

    /// Extract entities from `text`.
    pub fn extract(&self, text: &str) -> Vec<ExtractedEntity> {
        self.run(text).entities
    }

    pub(crate) fn run(&self, text: &str) -> ExtractorRun {
        let mut metrics = ExtractorMetrics::default();

        let t0 = Instant::now();
        let occurrences = collect(text, &self.patterns);
        metrics.collect = t0.elapsed();
        metrics.occurrences = occurrences.len();
        metrics.per_pattern = self
            .patterns
            .iter()
            .enumerate()
            .map(|(idx, p)| (p.tag().to_string(), occurrences.iter().filter(|o| o.pattern == idx).count()))
            .collect();
        let samples =
            occurrences.iter().take(SAMPLE_LIMIT).map(|o| (o.start, o.end, o.tag.to_string())).collect();

        let t1 = Instant::now();
        let policy = MergePolicy { validator: self.validator.as_ref(), run_filter: self.run_filter };
        let outcome = merge(text, &self.kind, &occurrences, &policy);
        metrics.merge = t1.elapsed();
        metrics.stats = outcome.stats;

        let t2 = Instant::now();
        let candidates = outcome.entities;
        let entities = match self.post_processor {
            Some(post) => post(text, candidates.clone()),
            None => candidates.clone(),
        };
        metrics.post_process = t2.elapsed();

        tracing::debug!(
            kind = %self.kind,
            occurrences = metrics.occurrences,
            runs = metrics.stats.runs,
            candidates = candidates.len(),
            emitted = entities.len(),
            "extractor finished"
        );

        ExtractorRun { candidates, entities, samples, metrics }
    }
}

impl fmt::Debug for Extractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extractor")
            .field("kind", &self.kind)
            .field("patterns", &self.patterns)
            .field("validator", &self.validator.as_ref().map(|_| "<function>"))
            .field("run_filter", &self.run_filter.is_some())
            .field("post_processor", &self.post_processor.is_some())
            .field("requires", &self.requires)
            .finish()
    }
}
