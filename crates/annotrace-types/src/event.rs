use serde::{Deserialize, Serialize};

/// One action recorded in a project's `event.log`.
///
/// Events are kept in the log's append order; the segmenter never re-sorts
/// them. Search events carry no document, document events carry no query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggedEvent {
    /// Epoch milliseconds (the log stores these as strings or numbers).
    pub timestamp_ms: i64,

    /// Event class name as recorded by the annotation tool,
    /// e.g. "AfterAnnotationUpdateEvent" or "ExternalSearchQueryEvent".
    pub kind: String,

    /// Acting user. Legacy logs call this field `annotator`.
    pub user: String,

    /// Document the event happened in, if any. Admin actions and search
    /// queries are not tied to a document.
    pub document_name: Option<String>,

    /// Query string for "ExternalSearchQueryEvent" events.
    pub query_text: Option<String>,
}

impl LoggedEvent {
    pub const SEARCH_QUERY_KIND: &'static str = "ExternalSearchQueryEvent";

    pub fn is_search_query(&self) -> bool {
        self.kind == Self::SEARCH_QUERY_KIND
    }
}
