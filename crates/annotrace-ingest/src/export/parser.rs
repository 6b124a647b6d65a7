use std::fs;
use std::path::Path;

use annotrace_types::{Relation, Span, SpanTable};

use crate::export::schema::{RawExportDocument, RawSpan, RawSpanOrRef};
use crate::{Error, Result};

/// One annotated document, extracted from an export JSON file.
///
/// `span_table` holds the relation-linked spans (`_referenced_fss`, minus
/// the sofa entry); `standalone_spans` are the inline `CTEventSpan` objects
/// that take part in no relation.
#[derive(Debug, Clone, Default)]
pub struct AnnotatedDocument {
    pub sentences: Vec<Span>,
    pub span_table: SpanTable,
    pub standalone_spans: Vec<Span>,
    pub relations: Vec<Relation>,
    /// Whether the export carried a `CTEventSpan` list at all. Documents
    /// without one contain no annotations worth classifying.
    pub has_event_spans: bool,
}

/// Parse an export JSON document from a string.
pub fn parse_export(json: &str) -> Result<AnnotatedDocument> {
    let raw: RawExportDocument = serde_json::from_str(json)?;
    convert(raw)
}

/// Read and parse an export JSON document from disk.
pub fn read_export(path: &Path) -> Result<AnnotatedDocument> {
    let content = fs::read_to_string(path)?;
    parse_export(&content)
}

fn convert(raw: RawExportDocument) -> Result<AnnotatedDocument> {
    let view = raw.views.initial_view;

    let mut span_table = SpanTable::new();
    for (key, entry) in raw.referenced_fss {
        if entry.is_sofa() {
            continue;
        }
        // Non-sofa entries without offsets are structural records
        // (type systems, views), not spans.
        let Some(end) = entry.end else { continue };
        let id = key
            .parse::<u64>()
            .map_err(|_| Error::Export(format!("non-numeric span reference id: {}", key)))?;
        span_table.insert(
            id,
            Span {
                begin: entry.begin,
                end,
                sofa: entry.sofa,
                negative_example: entry.negative_example,
            },
        );
    }

    let has_event_spans = view.event_spans.is_some();
    let standalone_spans = view
        .event_spans
        .unwrap_or_default()
        .into_iter()
        .filter_map(|entry| match entry {
            RawSpanOrRef::Ref(_) => None,
            RawSpanOrRef::Inline(span) => Some(to_span(span)),
        })
        .collect();

    let relations = view
        .relations
        .unwrap_or_default()
        .into_iter()
        .map(|raw| Relation {
            governor: raw.governor,
            dependent: raw.dependent,
            relation_type: raw.relation_type,
        })
        .collect();

    let sentences = view.sentences.into_iter().map(to_span).collect();

    Ok(AnnotatedDocument {
        sentences,
        span_table,
        standalone_spans,
        relations,
        has_event_spans,
    })
}

fn to_span(raw: RawSpan) -> Span {
    Span {
        begin: raw.begin,
        end: raw.end,
        sofa: raw.sofa,
        negative_example: raw.negative_example,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "_views": {
            "_InitialView": {
                "Sentence": [
                    {"sofa": 1, "end": 80},
                    {"sofa": 1, "begin": 81, "end": 200}
                ],
                "CTEventSpan": [
                    1004,
                    1009,
                    {"sofa": 1, "begin": 90, "end": 95, "negative_example": true}
                ],
                "CTEventSpanType": [
                    {"Governor": 1009, "Dependent": 1004, "relation_type": "place"}
                ]
            }
        },
        "_referenced_fss": {
            "1": {"_type": "Sofa", "sofaString": "some text"},
            "1004": {"sofa": 1, "begin": 10, "end": 14},
            "1009": {"sofa": 1, "begin": 20, "end": 25}
        }
    }"#;

    #[test]
    fn test_parse_sample_document() {
        let doc = parse_export(SAMPLE).unwrap();

        assert_eq!(doc.sentences.len(), 2);
        assert_eq!(doc.sentences[0].begin_offset(), 1);
        assert_eq!(doc.sentences[1].begin_offset(), 81);

        // Sofa entry is excluded from the span table
        assert_eq!(doc.span_table.len(), 2);
        assert_eq!(doc.span_table[&1004].begin, Some(10));

        assert_eq!(doc.standalone_spans.len(), 1);
        assert!(doc.standalone_spans[0].negative_example);

        assert_eq!(doc.relations.len(), 1);
        assert_eq!(doc.relations[0].governor, 1009);
        assert_eq!(doc.relations[0].dependent, 1004);
        assert!(doc.has_event_spans);
    }

    #[test]
    fn test_document_without_annotations() {
        let json = r#"{
            "_views": {"_InitialView": {"Sentence": [{"sofa": 1, "end": 10}]}},
            "_referenced_fss": {"1": {"_type": "Sofa"}}
        }"#;
        let doc = parse_export(json).unwrap();
        assert!(!doc.has_event_spans);
        assert!(doc.span_table.is_empty());
        assert!(doc.relations.is_empty());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(parse_export("{not json").is_err());
    }
}
