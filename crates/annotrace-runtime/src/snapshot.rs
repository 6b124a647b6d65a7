use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::time::SystemTime;

use regex::Regex;

use annotrace_types::{AnnotationStats, StatsSnapshot};

use crate::{Error, Result};

static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").unwrap());

/// Today's date (UTC) in the `YYYY-MM-DD` form used in snapshot filenames.
pub fn today() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

/// Stores stats snapshots as date-stamped JSON files in one directory.
///
/// "Most recent previous" is determined by file modification time among the
/// date-named `.json` files, not by filename sort. Other tooling depends on
/// that contract; the mtime semantics stay isolated in here.
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write a snapshot as `stats-<date>.json` (pretty-printed), creating
    /// the directory if needed. Call [`most_recent`](Self::most_recent)
    /// before writing, or the fresh file will shadow the real previous run.
    pub fn write(&self, snapshot: &StatsSnapshot) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(format!("stats-{}.json", snapshot.date));
        let content = serde_json::to_string_pretty(&snapshot.stats)?;
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Load the most recently modified date-stamped snapshot, if any.
    pub fn most_recent(&self) -> Result<Option<StatsSnapshot>> {
        let Some((path, date)) = self.most_recent_file()? else {
            return Ok(None);
        };
        let content = fs::read_to_string(&path)?;
        let stats: AnnotationStats = serde_json::from_str(&content).map_err(|err| {
            Error::Snapshot(format!("unreadable snapshot {}: {}", path.display(), err))
        })?;
        Ok(Some(StatsSnapshot { date, stats }))
    }

    fn most_recent_file(&self) -> Result<Option<(PathBuf, String)>> {
        if !self.dir.is_dir() {
            return Ok(None);
        }

        let mut candidates: Vec<(SystemTime, PathBuf, String)> = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let file_name = entry.file_name().to_string_lossy().to_string();
            if !file_name.ends_with(".json") {
                continue;
            }
            let Some(date) = DATE_PATTERN.find(&file_name) else {
                continue;
            };
            let modified = entry.metadata()?.modified()?;
            candidates.push((modified, entry.path(), date.as_str().to_string()));
        }

        candidates.sort_by_key(|(modified, _, _)| *modified);
        Ok(candidates.pop().map(|(_, path, date)| (path, date)))
    }
}
