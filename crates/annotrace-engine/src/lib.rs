// Engine module - the analytical core (segmentation, classification, stats)
// This layer is pure: typed records in, typed records out, no I/O.

pub mod diff;
pub mod sentences;
pub mod sessions;
pub mod stats;
pub mod triggers;

pub use diff::diff_stats;
pub use sentences::collect_sentence_annotations;
pub use sessions::{segment_events, SessionSummary, DEFAULT_GAP_THRESHOLD_MS};
pub use stats::aggregate;
pub use triggers::{ace_significant_spans, primary_triggers, significant_spans};
