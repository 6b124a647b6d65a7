// Runtime module - batch orchestration over the ingest and engine layers
// Scans an export root, runs the per-project analyses, persists snapshots
// and reports. Per-project failures are recorded and skipped, never fatal
// for the batch.

pub mod config;
mod error;
pub mod pipeline;
pub mod report;
pub mod scan;
pub mod snapshot;

pub use config::Config;
pub use error::{Error, Result};
pub use pipeline::{
    collect_durations, collect_stats, DurationsOutcome, RunReport, Skip, StatsOutcome,
};
pub use report::{format_hms, DurationReport, IndicatorReport, TimeEntry};
pub use scan::{document_files, find_project_dirs, ProjectDir};
pub use snapshot::{today, SnapshotStore};
