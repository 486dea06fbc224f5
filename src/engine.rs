//! Span-merging extraction engine.
//!
//! This module is the entry point for everything that turns a `PatternSet`
//! and an input string into `ExtractedEntity`s. It is split into focused
//! submodules under `src/engine/`.
//!
//! ## How the parts work together
//!
//! ```text
//! input ── TriggerInfo::scan ──── skip families that cannot match
//!         (trigger.rs)
//!                                        │
//! PatternSet (pattern_set.rs) ──┐        v
//!                               └─ collect (collector.rs)
//!                                   - every pattern, in list order
//!                                   - every match, left to right
//!                                        │  Vec<Occurrence>
//!                                        v
//!                                 merge (merger.rs)
//!                                   - validator gates occurrences
//!                                   - mark byte coverage
//!                                   - first-write-wins span index (span_index.rs)
//!                                   - close runs left to right
//!                                   - run filter, exact-span lookup
//!                                        │  Vec<ExtractedEntity>
//!                                        v
//!                                 post-processor (per family)
//! ```
//!
//! `Extractor` (extractor.rs) bundles one family's pattern set with its
//! validator, run filter and post-processor and drives the pipeline above.
//! `metrics.rs` holds the timing/count data surfaced by the verbose API.
//!
//! ## Determinism
//!
//! The coverage scan and the span lookup are strictly sequential within one
//! input: the earliest collected occurrence with a run's exact span supplies
//! the entity's tag. Separate inputs share no state and can be extracted
//! concurrently.
//!
//! ## Debugging
//!
//! The engine logs through `tracing`. The `seqtract` binary reads its filter
//! from `SEQTRACT_LOG`, e.g. `SEQTRACT_LOG=seqtract=trace`.

#[path = "engine/collector.rs"]
mod collector;
#[path = "engine/extractor.rs"]
mod extractor;
#[path = "engine/merger.rs"]
mod merger;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/pattern_set.rs"]
mod pattern_set;
#[path = "engine/span_index.rs"]
mod span_index;
#[path = "engine/trigger.rs"]
mod trigger;

pub use collector::collect;
pub use extractor::{Extractor, PostProcessor};
pub use merger::{MergeOutcome, MergePolicy, MergeStats, RunFilter, Validator, merge};
pub(crate) use metrics::ExtractorRun;
pub use pattern_set::{Matcher, Pattern, PatternSet};
pub use trigger::{Signals, TriggerInfo};
