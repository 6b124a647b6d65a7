use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;

/// `"<h>h:<m>m:<s>s"`, e.g. `7380 -> "2h:3m:0s"`.
pub fn format_hms(seconds: i64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds / 60) % 60;
    let remaining = seconds % 60;
    format!("{}h:{}m:{}s", hours, minutes, remaining)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub seconds: i64,
    pub formatted: String,
}

/// user -> event type -> total annotation time. Several projects can share
/// an event type (re-runs, renamed instances); their times sum.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DurationReport {
    entries: BTreeMap<String, BTreeMap<String, TimeEntry>>,
}

impl DurationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, user: &str, event_type: &str, seconds: i64) {
        let per_user = self.entries.entry(user.to_string()).or_default();
        match per_user.get_mut(event_type) {
            Some(entry) => {
                entry.seconds += seconds;
                entry.formatted = format_hms(entry.seconds);
            }
            None => {
                per_user.insert(
                    event_type.to_string(),
                    TimeEntry {
                        seconds,
                        formatted: format_hms(seconds),
                    },
                );
            }
        }
    }

    pub fn get(&self, user: &str, event_type: &str) -> Option<&TimeEntry> {
        self.entries.get(user)?.get(event_type)
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        write_pretty_json(path, self)
    }
}

/// user -> event type -> distinct indicator search queries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndicatorReport {
    entries: BTreeMap<String, BTreeMap<String, BTreeSet<String>>>,
}

impl IndicatorReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, user: &str, event_type: &str, queries: impl IntoIterator<Item = String>) {
        let set = self
            .entries
            .entry(user.to_string())
            .or_default()
            .entry(event_type.to_string())
            .or_default();
        set.extend(queries);
    }

    pub fn get(&self, user: &str, event_type: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(user)?.get(event_type)
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        write_pretty_json(path, self)
    }
}

fn write_pretty_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(value)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hms() {
        assert_eq!(format_hms(0), "0h:0m:0s");
        assert_eq!(format_hms(59), "0h:0m:59s");
        assert_eq!(format_hms(120), "0h:2m:0s");
        assert_eq!(format_hms(7380), "2h:3m:0s");
        assert_eq!(format_hms(3600 * 25 + 61), "25h:1m:1s");
    }

    #[test]
    fn test_duration_report_sums_same_event_type() {
        let mut report = DurationReport::new();
        report.add("gabbard", "Conflict.Attack", 100);
        report.add("gabbard", "Conflict.Attack", 50);
        report.add("gabbard", "Life.Die", 10);

        let entry = report.get("gabbard", "Conflict.Attack").unwrap();
        assert_eq!(entry.seconds, 150);
        assert_eq!(entry.formatted, "0h:2m:30s");
        assert_eq!(report.get("gabbard", "Life.Die").unwrap().seconds, 10);
    }

    #[test]
    fn test_duration_report_wire_shape() {
        let mut report = DurationReport::new();
        report.add("gabbard", "Conflict.Attack", 120);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["gabbard"]["Conflict.Attack"]["seconds"], 120);
        assert_eq!(json["gabbard"]["Conflict.Attack"]["formatted"], "0h:2m:0s");
    }

    #[test]
    fn test_indicator_report_unions_queries() {
        let mut report = IndicatorReport::new();
        report.add(
            "gabbard",
            "Conflict.Attack",
            ["airstrike".to_string(), "tank column".to_string()],
        );
        report.add("gabbard", "Conflict.Attack", ["airstrike".to_string()]);

        let queries = report.get("gabbard", "Conflict.Attack").unwrap();
        assert_eq!(queries.len(), 2);
    }
}
