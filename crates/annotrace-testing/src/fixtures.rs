//! Builders for synthetic annotation projects.
//!
//! Tests assemble event logs and export documents from these instead of
//! carrying JSON sample files around; the builders emit the exact wire
//! shapes the ingest layer reads.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde_json::{json, Value};

/// Builds `event.log` content, one JSON object per line.
#[derive(Debug, Default)]
pub struct EventLogBuilder {
    lines: Vec<String>,
}

impl EventLogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a document-scoped annotation event.
    pub fn annotation(mut self, timestamp_ms: i64, user: &str, document: &str) -> Self {
        self.lines.push(
            json!({
                "event": "AfterAnnotationUpdateEvent",
                "created": timestamp_ms.to_string(),
                "user": user,
                "document_name": document,
            })
            .to_string(),
        );
        self
    }

    /// Append an indicator search event (no document association).
    pub fn search(mut self, timestamp_ms: i64, user: &str, query: &str) -> Self {
        self.lines.push(
            json!({
                "event": "ExternalSearchQueryEvent",
                "created": timestamp_ms.to_string(),
                "user": user,
                "details": {"query": query},
            })
            .to_string(),
        );
        self
    }

    /// Append an arbitrary raw line (for malformed-input tests).
    pub fn raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn build(&self) -> String {
        let mut content = self.lines.join("\n");
        content.push('\n');
        content
    }

    /// Write as `event.log` inside `project_dir`.
    pub fn write_to(&self, project_dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(project_dir)?;
        let path = project_dir.join("event.log");
        fs::write(&path, self.build())?;
        Ok(path)
    }
}

/// Builds one export JSON document.
#[derive(Debug)]
pub struct ExportDocumentBuilder {
    sentences: Vec<Value>,
    event_spans: Vec<Value>,
    relations: Vec<Value>,
    referenced: serde_json::Map<String, Value>,
}

impl Default for ExportDocumentBuilder {
    fn default() -> Self {
        let mut referenced = serde_json::Map::new();
        // Every export carries a sofa entry holding the document text.
        referenced.insert("1".to_string(), json!({"_type": "Sofa", "sofaString": ""}));
        Self {
            sentences: Vec::new(),
            event_spans: Vec::new(),
            relations: Vec::new(),
            referenced,
        }
    }
}

impl ExportDocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sentence(mut self, begin: u64, end: u64) -> Self {
        self.sentences.push(json!({"sofa": 1, "begin": begin, "end": end}));
        self
    }

    /// Add a span to `_referenced_fss` and reference it from `CTEventSpan`.
    pub fn referenced_span(mut self, id: u64, begin: u64, end: u64) -> Self {
        self.referenced.insert(
            id.to_string(),
            json!({"sofa": 1, "begin": begin, "end": end}),
        );
        self.event_spans.push(json!(id));
        self
    }

    /// Add an inline (argument-less) span to `CTEventSpan`.
    pub fn standalone_span(mut self, begin: u64, end: u64, negative: bool) -> Self {
        self.event_spans.push(json!({
            "sofa": 1,
            "begin": begin,
            "end": end,
            "negative_example": negative,
        }));
        self
    }

    pub fn relation(mut self, governor: u64, dependent: u64, label: Option<&str>) -> Self {
        let mut relation = json!({"Governor": governor, "Dependent": dependent});
        if let Some(label) = label {
            relation["relation_type"] = json!(label);
        }
        self.relations.push(relation);
        self
    }

    pub fn build(&self) -> String {
        json!({
            "_views": {
                "_InitialView": {
                    "Sentence": self.sentences,
                    "CTEventSpan": self.event_spans,
                    "CTEventSpanType": self.relations,
                }
            },
            "_referenced_fss": self.referenced,
        })
        .to_string()
    }

    /// Write as `<document_name>` inside `project_dir`.
    pub fn write_to(&self, project_dir: &Path, document_name: &str) -> Result<PathBuf> {
        fs::create_dir_all(project_dir)?;
        let path = project_dir.join(document_name);
        fs::write(&path, self.build())?;
        Ok(path)
    }
}

/// Create a project directory under an export root.
pub fn project_dir(export_root: &Path, project_name: &str) -> Result<PathBuf> {
    let dir = export_root.join(project_name);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_log_builder_emits_jsonl() {
        let log = EventLogBuilder::new()
            .annotation(1000, "gabbard", "doc_1")
            .search(2000, "gabbard", "airstrike")
            .build();
        let lines: Vec<_> = log.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["created"], "1000");
        assert_eq!(first["document_name"], "doc_1");
    }

    #[test]
    fn test_export_builder_shapes() {
        let doc = ExportDocumentBuilder::new()
            .sentence(0, 50)
            .referenced_span(1004, 5, 10)
            .standalone_span(20, 25, true)
            .relation(1004, 1009, Some("interesting"))
            .build();
        let value: Value = serde_json::from_str(&doc).unwrap();
        let view = &value["_views"]["_InitialView"];
        assert_eq!(view["Sentence"].as_array().unwrap().len(), 1);
        assert_eq!(view["CTEventSpan"][0], 1004);
        assert_eq!(view["CTEventSpanType"][0]["Governor"], 1004);
        assert_eq!(value["_referenced_fss"]["1"]["_type"], "Sofa");
        assert_eq!(value["_referenced_fss"]["1004"]["begin"], 5);
    }
}
