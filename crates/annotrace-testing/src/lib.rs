pub mod fixtures;

pub use fixtures::{project_dir, EventLogBuilder, ExportDocumentBuilder};
