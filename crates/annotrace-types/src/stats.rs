use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Aggregated sentence-annotation counts for one run.
///
/// Built fresh from the full corpus each run and immutable afterwards. All
/// maps are BTreeMaps so serialized output is sorted and diff-friendly.
/// Field names are camelCase on the wire for continuity with snapshots
/// written by earlier tooling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationStats {
    pub total: i64,
    #[serde(default)]
    pub by_user: BTreeMap<String, i64>,
    #[serde(default)]
    pub by_event_type: BTreeMap<String, i64>,
    #[serde(default)]
    pub by_corpus_positive: BTreeMap<String, i64>,
    #[serde(default)]
    pub by_corpus_negative: BTreeMap<String, i64>,
    /// Total annotation seconds per user, merged from the duration pass.
    /// Older snapshots predate this field, hence the default.
    #[serde(default)]
    pub annotation_times: BTreeMap<String, i64>,
}

/// A persisted statistics report: the stats plus the ISO date (`YYYY-MM-DD`)
/// carried in its filename. The diff engine only ever needs two of these,
/// the new run and the most recent previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub date: String,
    pub stats: AnnotationStats,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_are_camel_case() {
        let mut stats = AnnotationStats {
            total: 3,
            ..Default::default()
        };
        stats.by_user.insert("gabbard".to_string(), 3);
        stats.by_corpus_positive.insert("English".to_string(), 2);

        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["total"], 3);
        assert_eq!(json["byUser"]["gabbard"], 3);
        assert_eq!(json["byCorpusPositive"]["English"], 2);
        assert!(json.get("by_user").is_none());
    }

    #[test]
    fn test_round_trip_preserves_contents() {
        let mut stats = AnnotationStats {
            total: 7,
            ..Default::default()
        };
        stats.by_user.insert("ivanova".to_string(), 4);
        stats.by_user.insert("gabbard".to_string(), 3);
        stats.by_event_type.insert("Conflict.Attack".to_string(), 7);
        stats.by_corpus_negative.insert("Russian".to_string(), 1);
        stats.annotation_times.insert("ivanova".to_string(), 360);

        let json = serde_json::to_string(&stats).unwrap();
        let back: AnnotationStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
    }

    #[test]
    fn test_snapshot_without_annotation_times_still_loads() {
        let legacy = r#"{
            "total": 2,
            "byUser": {"gabbard": 2},
            "byEventType": {"Conflict.Attack": 2},
            "byCorpusPositive": {"English": 2},
            "byCorpusNegative": {}
        }"#;
        let stats: AnnotationStats = serde_json::from_str(legacy).unwrap();
        assert_eq!(stats.total, 2);
        assert!(stats.annotation_times.is_empty());
    }
}
