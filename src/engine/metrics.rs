//! Extractor run metrics.
//!
//! `Extractor::extract` returns entities only. `Extractor::run` additionally
//! returns the pre-post-processing candidates, the merge counters and phase
//! timings, which the verbose API turns into a per-family trace.

use super::merger::MergeStats;
use crate::ExtractedEntity;
use std::time::Duration;

#[derive(Debug, Default, Clone)]
pub(crate) struct ExtractorMetrics {
    /// Time spent running patterns over the input.
    pub collect: Duration,
    /// Time spent in the span merge.
    pub merge: Duration,
    /// Time spent in the family post-processor.
    pub post_process: Duration,
    /// Occurrences produced by the collector.
    pub occurrences: usize,
    /// Matches per pattern, in pattern order.
    pub per_pattern: Vec<(String, usize)>,
    pub stats: MergeStats,
}

impl ExtractorMetrics {
    pub(crate) fn total(&self) -> Duration {
        self.collect + self.merge + self.post_process
    }
}

/// One extractor's output bundled with its metrics.
#[derive(Debug, Clone)]
pub(crate) struct ExtractorRun {
    /// Merge output before post-processing.
    pub candidates: Vec<ExtractedEntity>,
    /// Final entities.
    pub entities: Vec<ExtractedEntity>,
    /// First occurrences as `(start, end, tag)`, for debugging.
    pub samples: Vec<(usize, usize, String)>,
    pub metrics: ExtractorMetrics,
}
