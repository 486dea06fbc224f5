extern crate self as seqtract;

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod families;

pub use api::{
    ExtractDetails, ExtractResult, ExtractResultVerbose, FamilyTrace, OccurrenceSummary, Options, extract,
    extract_verbose, extract_verbose_with, extract_with,
};
pub use engine::{
    Extractor, MergeOutcome, MergePolicy, MergeStats, PostProcessor, RunFilter, Signals, TriggerInfo, Validator,
    collect, merge,
};
pub use engine::{Matcher, Pattern, PatternSet};
pub use error::{Error, Result};
pub use families::{Family, FamilyMask, email, guid, hashtag, ip, mention, phone, url};

use serde::Serialize;

// --- Core types --------------------------------------------------------------

/// One raw match of one pattern against the input.
///
/// `start`/`end` are byte offsets into the original input. `ordinal` is the
/// occurrence's position in the collection order (pattern order first, then
/// match order within the pattern) and is what distinguishes two occurrences
/// sharing the same span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence<'a> {
    /// Position in collection order.
    pub ordinal: usize,
    /// Index of the producing pattern inside its `PatternSet`.
    pub pattern: usize,
    /// Start byte index (inclusive).
    pub start: usize,
    /// End byte index (exclusive).
    pub end: usize,
    /// Matched slice of the input.
    pub text: &'a str,
    /// Tag of the producing pattern.
    pub tag: &'a str,
}

impl<'a> Occurrence<'a> {
    /// Byte length of the match.
    pub fn length(&self) -> usize {
        self.end - self.start
    }
}

/// A maximal contiguous block of covered bytes.
///
/// ```text
/// input:    "call +1 555 0100 now"
/// coverage:  .....###########.....
/// run:            ^ start   ^ start + length
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run<'a> {
    pub start: usize,
    pub length: usize,
    /// Untrimmed slice of the input covered by the run.
    pub text: &'a str,
}

impl<'a> Run<'a> {
    /// End byte index (exclusive).
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    /// The run's text with leading/trailing whitespace stripped.
    pub fn trimmed(&self) -> &'a str {
        self.text.trim()
    }
}

/// An entity found in the input.
///
/// `start`/`length` describe the untrimmed run the entity was built from,
/// while `text` is that run with surrounding whitespace stripped. When the run
/// has boundary whitespace `text.len()` is therefore smaller than `length`;
/// `start + length` always denotes the end of the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedEntity {
    /// Start byte index of the run.
    pub start: usize,
    /// Byte length of the run (untrimmed).
    pub length: usize,
    /// Trimmed text of the run.
    pub text: String,
    /// Entity type, e.g. `"phonenumber"` or `"url"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Tag of the pattern whose occurrence spans the run exactly.
    pub data: String,
}

impl ExtractedEntity {
    /// End byte index of the run (exclusive).
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    /// Returns true when `[start, end)` intersects this entity's run.
    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        self.start < end && self.end() > start
    }
}
