//! Pattern compilation.
//!
//! A `PatternSet` is the static side of an extractor: an ordered list of
//! compiled patterns, each carrying the tag reported on entities it produces.
//! List order is significant, it decides which tag wins when two patterns
//! match exactly the same span.
//!
//! ## Regex engines
//!
//! Most built-in patterns are plain regular expressions and compile with the
//! `regex` crate. Some need look-around (`(?!-)`, `(?<![\w@])`), which only
//! `fancy-regex` supports. `Matcher::new` tries `regex` first and falls back
//! to `fancy-regex`, so callers never pick an engine explicitly.
//!
//! ## Invariants
//!
//! - A compiled `Pattern` never matches the empty string. Zero-length
//!   occurrences cannot mark coverage and are rejected here.
//! - `PatternSet` is immutable once built and is `Send + Sync`, so one
//!   instance can serve concurrent extractions.

use crate::{Error, Result};
use std::fmt;

/// A compiled regular expression, backed by whichever engine accepted it.
pub enum Matcher {
    Basic(regex::Regex),
    Fancy(fancy_regex::Regex),
}

impl Matcher {
    /// Compile `source`, preferring the `regex` crate.
    pub fn new(source: &str) -> Result<Self> {
        match regex::Regex::new(source) {
            Ok(re) => Ok(Matcher::Basic(re)),
            Err(_) => fancy_regex::Regex::new(source)
                .map(Matcher::Fancy)
                .map_err(|err| Error::InvalidPattern { pattern: source.to_string(), reason: err.to_string() }),
        }
    }

    /// The source text of the pattern.
    pub fn as_str(&self) -> &str {
        match self {
            Matcher::Basic(re) => re.as_str(),
            Matcher::Fancy(re) => re.as_str(),
        }
    }

    /// Returns true when the pattern needed `fancy-regex`.
    pub fn is_fancy(&self) -> bool {
        matches!(self, Matcher::Fancy(_))
    }

    /// All non-overlapping matches as `(start, end)` byte spans, left to right.
    ///
    /// A `fancy-regex` runtime error (backtrack limit) ends the scan; the
    /// matches found before it are kept.
    pub fn find_spans(&self, text: &str) -> Vec<(usize, usize)> {
        match self {
            Matcher::Basic(re) => re.find_iter(text).map(|m| (m.start(), m.end())).collect(),
            Matcher::Fancy(re) => {
                let mut spans = Vec::new();
                for found in re.find_iter(text) {
                    match found {
                        Ok(m) => spans.push((m.start(), m.end())),
                        Err(err) => {
                            tracing::warn!(pattern = re.as_str(), error = %err, "regex scan aborted");
                            break;
                        }
                    }
                }
                spans
            }
        }
    }

    /// Returns true when the pattern matches anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Matcher::Basic(re) => re.is_match(text),
            Matcher::Fancy(re) => re.is_match(text).unwrap_or_else(|err| {
                tracing::warn!(pattern = re.as_str(), error = %err, "regex match aborted");
                false
            }),
        }
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let engine = if self.is_fancy() { "fancy" } else { "basic" };
        f.debug_struct("Matcher").field("engine", &engine).field("source", &self.as_str()).finish()
    }
}

/// A compiled matcher plus the tag identifying which sub-pattern matched.
#[derive(Debug)]
pub struct Pattern {
    matcher: Matcher,
    tag: String,
}

impl Pattern {
    /// Compile `source` and attach `tag`.
    ///
    /// Fails with [`Error::EmptyMatch`] when the pattern accepts the empty
    /// string.
    pub fn new(source: &str, tag: impl Into<String>) -> Result<Self> {
        let matcher = Matcher::new(source)?;
        if matcher.is_match("") {
            return Err(Error::EmptyMatch { pattern: source.to_string() });
        }
        Ok(Pattern { matcher, tag: tag.into() })
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

/// An ordered list of patterns for one entity family.
#[derive(Debug, Default)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    /// Create an empty set.
    pub fn new() -> Self {
        PatternSet { patterns: Vec::new() }
    }

    /// Compile and append a pattern. Later patterns lose exact-span ties.
    pub fn push(&mut self, source: &str, tag: impl Into<String>) -> Result<&mut Self> {
        self.patterns.push(Pattern::new(source, tag)?);
        Ok(self)
    }

    /// Builder-style variant of [`push`](Self::push).
    pub fn with(mut self, source: &str, tag: impl Into<String>) -> Result<Self> {
        self.push(source, tag)?;
        Ok(self)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pattern> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl FromIterator<Pattern> for PatternSet {
    fn from_iter<I: IntoIterator<Item = Pattern>>(iter: I) -> Self {
        PatternSet { patterns: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a PatternSet {
    type Item = &'a Pattern;
    type IntoIter = std::slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}
