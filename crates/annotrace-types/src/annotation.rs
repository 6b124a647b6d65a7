use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Reference id of a span in the export's flat span table.
pub type SpanId = u64;

/// A character-offset interval in a document, optionally flagged as a
/// negative example.
///
/// Some corpus documents make the first token markable, in which case the
/// exporter omits `begin` and the containing sofa offset stands in for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    #[serde(default)]
    pub begin: Option<u64>,
    pub end: u64,
    #[serde(default)]
    pub sofa: Option<u64>,
    #[serde(default)]
    pub negative_example: bool,
}

impl Span {
    /// Begin offset, falling back to the sofa offset when `begin` is absent.
    pub fn begin_offset(&self) -> u64 {
        self.begin.or(self.sofa).unwrap_or(0)
    }
}

/// Flat span table from the export (`_referenced_fss`), keyed by reference id.
pub type SpanTable = BTreeMap<SpanId, Span>;

/// Directed edge between two spans: the governor is the argument, the
/// dependent the trigger/clue-word candidate. ACE corpora invert the
/// reading and mark the governor with an "interesting"/"trigger" label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    pub governor: SpanId,
    pub dependent: SpanId,
    pub relation_type: Option<String>,
}

/// A span the classifier deemed meaningful for statistics: a primary
/// trigger, an ACE clue word/secondary trigger, or an unlinked negative
/// example. Offsets are already resolved (sofa fallback applied).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignificantSpan {
    pub begin: u64,
    pub end: u64,
    pub negative_example: bool,
}

/// One annotated sentence attributed to a user/project.
///
/// `sentence_id` is `<document name>-<sentence begin offset>`; the collector
/// guarantees at most one record per sentence id per document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceAnnotation {
    pub sentence_id: String,
    pub user: String,
    pub event_type: String,
    pub corpus: String,
    pub negative_example: bool,
}

/// Per-project accumulator of active milliseconds by document.
///
/// Accumulation goes through [`DocumentTimes::add`] so a missing key is an
/// explicit insert, not a silently defaulted zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentTimes {
    times: BTreeMap<String, i64>,
}

impl DocumentTimes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `elapsed_ms` to the running total for `document`.
    pub fn add(&mut self, document: &str, elapsed_ms: i64) {
        match self.times.get_mut(document) {
            Some(total) => *total += elapsed_ms,
            None => {
                self.times.insert(document.to_string(), elapsed_ms);
            }
        }
    }

    pub fn get(&self, document: &str) -> Option<i64> {
        self.times.get(document).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.times.iter().map(|(doc, ms)| (doc.as_str(), *ms))
    }

    /// Project total in whole seconds (integer division of the ms sum).
    pub fn total_seconds(&self) -> i64 {
        self.times.values().sum::<i64>() / 1000
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_offset_fallback() {
        let with_begin = Span {
            begin: Some(12),
            end: 20,
            sofa: Some(1),
            negative_example: false,
        };
        assert_eq!(with_begin.begin_offset(), 12);

        let sofa_only = Span {
            begin: None,
            end: 20,
            sofa: Some(1),
            negative_example: false,
        };
        assert_eq!(sofa_only.begin_offset(), 1);
    }

    #[test]
    fn test_document_times_accumulates() {
        let mut times = DocumentTimes::new();
        times.add("doc_a", 1500);
        times.add("doc_a", 500);
        times.add("doc_b", 999);

        assert_eq!(times.get("doc_a"), Some(2000));
        assert_eq!(times.get("doc_b"), Some(999));
        assert_eq!(times.get("doc_c"), None);
        // 2999 ms floors to 2 seconds
        assert_eq!(times.total_seconds(), 2);
    }
}
