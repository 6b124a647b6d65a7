use std::collections::BTreeSet;

use annotrace_types::{DocumentTimes, LoggedEvent};

/// Default maximum gap between consecutive events still counted as
/// continuous work. Observed acceptable values have ranged from 2 to 10
/// minutes across deployments, so this is a parameter, not a constant.
pub const DEFAULT_GAP_THRESHOLD_MS: i64 = 120_000;

/// Per-user outcome of one project's event log: active milliseconds per
/// document, plus the distinct search queries the user issued.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub document_times: DocumentTimes,
    pub search_queries: BTreeSet<String>,
}

impl SessionSummary {
    /// Project total in whole seconds.
    pub fn total_seconds(&self) -> i64 {
        self.document_times.total_seconds()
    }
}

/// Reconstruct per-document active time for `user` from an ordered event
/// sequence, in a single linear pass.
///
/// Gaps of `gap_threshold_ms` or more are assumed to be breaks and are
/// excluded, so idle time never inflates the totals. The gap rule governs
/// whether a delta counts; elapsed time is flushed to a document's total
/// whenever the user moves to a different document, and once more at the
/// end of the log.
pub fn segment_events(
    events: &[LoggedEvent],
    user: &str,
    gap_threshold_ms: i64,
) -> SessionSummary {
    let mut current_document: Option<&str> = None;
    let mut previous_timestamp: Option<i64> = None;
    let mut elapsed_since_flush: i64 = 0;

    let mut document_times = DocumentTimes::new();
    let mut search_queries = BTreeSet::new();

    for event in events {
        if event.user != user {
            continue;
        }

        // Search queries are not tied to any document; collect them no
        // matter where in the log they appear.
        if event.is_search_query() {
            if let Some(query) = &event.query_text {
                search_queries.insert(query.clone());
            }
        }

        let Some(document_name) = event.document_name.as_deref() else {
            continue;
        };

        match previous_timestamp {
            // First qualifying event: start the clock, accumulate nothing.
            None => current_document = Some(document_name),
            Some(previous) => {
                let delta = event.timestamp_ms - previous;
                if delta < gap_threshold_ms {
                    elapsed_since_flush += delta;
                }
            }
        }

        if current_document != Some(document_name) {
            if let Some(previous_document) = current_document {
                document_times.add(previous_document, elapsed_since_flush);
            }
            elapsed_since_flush = 0;
            current_document = Some(document_name);
        }

        previous_timestamp = Some(event.timestamp_ms);
    }

    if let Some(document) = current_document {
        document_times.add(document, elapsed_since_flush);
    }

    SessionSummary {
        document_times,
        search_queries,
    }
}
