// Ingest module - input-format adapters (schema-on-read)
// Raw artifacts (directory names, event.log lines, export JSON) are parsed
// here into the typed model; analysis itself lives in annotrace-engine.

mod error;
pub mod event_log;
pub mod export;
pub mod project_name;

pub use error::{Error, Result};
pub use event_log::{parse_line, read_event_log, EventLogReader, EVENT_LOG};
pub use export::{parse_export, read_export, AnnotatedDocument};
