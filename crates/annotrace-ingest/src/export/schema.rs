//! Raw shapes of the annotation export JSON (schema-on-read).
//!
//! The exporter writes one JSON file per annotated document:
//!
//! ```json
//! {
//!   "_views": {
//!     "_InitialView": {
//!       "Sentence": [{"sofa": 1, "begin": 0, "end": 80}, ...],
//!       "CTEventSpan": [1004, 1009, {"sofa": 1, "begin": 200, "end": 205,
//!                                    "negative_example": true}, 1003],
//!       "CTEventSpanType": [{"Governor": 1004, "Dependent": 1009,
//!                            "relation_type": "interesting"}]
//!     }
//!   },
//!   "_referenced_fss": {"1": {"_type": "Sofa", ...},
//!                       "1004": {"begin": 10, "end": 14, ...}}
//! }
//! ```
//!
//! Integers in `CTEventSpan` reference entries of `_referenced_fss`; inline
//! objects are argument-less spans that take part in no relation.

use std::collections::BTreeMap;

use serde::Deserialize;

/// The document-wide text holder; never a candidate span.
pub const SOFA_TYPE: &str = "Sofa";

#[derive(Debug, Deserialize)]
pub struct RawExportDocument {
    #[serde(rename = "_views")]
    pub views: RawViews,
    #[serde(rename = "_referenced_fss", default)]
    pub referenced_fss: BTreeMap<String, RawReferencedSpan>,
}

#[derive(Debug, Deserialize)]
pub struct RawViews {
    #[serde(rename = "_InitialView")]
    pub initial_view: RawInitialView,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawInitialView {
    #[serde(rename = "Sentence", default)]
    pub sentences: Vec<RawSpan>,
    #[serde(rename = "CTEventSpan", default)]
    pub event_spans: Option<Vec<RawSpanOrRef>>,
    #[serde(rename = "CTEventSpanType", default)]
    pub relations: Option<Vec<RawRelation>>,
}

/// Span-like object with offsets; `begin` may be absent when the sofa
/// offset stands in for it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSpan {
    #[serde(default)]
    pub sofa: Option<u64>,
    #[serde(default)]
    pub begin: Option<u64>,
    pub end: u64,
    #[serde(default)]
    pub negative_example: bool,
}

/// Entry of the `CTEventSpan` list: a reference id or an inline span.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawSpanOrRef {
    Ref(u64),
    Inline(RawSpan),
}

#[derive(Debug, Deserialize)]
pub struct RawRelation {
    #[serde(rename = "Governor")]
    pub governor: u64,
    #[serde(rename = "Dependent")]
    pub dependent: u64,
    #[serde(default)]
    pub relation_type: Option<String>,
}

/// Entry of the `_referenced_fss` table. The sofa entry has a different
/// shape (no `end`), so offsets are optional here and filtered during
/// conversion.
#[derive(Debug, Deserialize)]
pub struct RawReferencedSpan {
    #[serde(rename = "_type", default)]
    pub type_tag: Option<String>,
    #[serde(default)]
    pub sofa: Option<u64>,
    #[serde(default)]
    pub begin: Option<u64>,
    #[serde(default)]
    pub end: Option<u64>,
    #[serde(default)]
    pub negative_example: bool,
}

impl RawReferencedSpan {
    pub fn is_sofa(&self) -> bool {
        self.type_tag.as_deref() == Some(SOFA_TYPE)
    }
}
