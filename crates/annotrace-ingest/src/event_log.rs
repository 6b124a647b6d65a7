use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Deserialize;

use annotrace_types::LoggedEvent;

use crate::{Error, Result};

/// Conventional file name for a project's activity log.
pub const EVENT_LOG: &str = "event.log";

/// Raw shape of one event.log line (schema-on-read; unknown fields ignored).
///
/// `created` arrives as a string in current logs and as a bare number in
/// some older ones. Very old logs also say `annotator` where current ones
/// say `user`.
#[derive(Debug, Deserialize)]
struct RawLogEvent {
    event: String,
    created: EpochMs,
    #[serde(default)]
    user: Option<String>,
    #[serde(default)]
    annotator: Option<String>,
    #[serde(default)]
    document_name: Option<String>,
    #[serde(default)]
    details: Option<RawDetails>,
}

#[derive(Debug, Deserialize)]
struct RawDetails {
    #[serde(default)]
    query: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EpochMs {
    Number(i64),
    Text(String),
}

impl EpochMs {
    fn to_millis(&self) -> std::result::Result<i64, std::num::ParseIntError> {
        match self {
            EpochMs::Number(ms) => Ok(*ms),
            EpochMs::Text(text) => text.trim().parse(),
        }
    }
}

impl RawLogEvent {
    fn into_event(self) -> std::result::Result<LoggedEvent, String> {
        let timestamp_ms = self
            .created
            .to_millis()
            .map_err(|_| "non-numeric `created` timestamp".to_string())?;
        let user = self.user.or(self.annotator).unwrap_or_default();
        let query_text = self.details.and_then(|details| details.query);

        Ok(LoggedEvent {
            timestamp_ms,
            kind: self.event,
            user,
            document_name: self.document_name,
            query_text,
        })
    }
}

/// Lazy line-by-line reader over an event.log source.
///
/// Yields events in append order. Any malformed line is an error; the
/// caller decides whether that aborts the project (it should) or the batch
/// (it must not).
pub struct EventLogReader<R: BufRead> {
    lines: std::io::Lines<R>,
    line_no: usize,
}

impl<R: BufRead> EventLogReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
        }
    }
}

impl EventLogReader<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> Iterator for EventLogReader<R> {
    type Item = Result<LoggedEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(err) => return Some(Err(err.into())),
            };
            self.line_no += 1;
            if line.trim().is_empty() {
                continue;
            }
            return Some(parse_line(&line).map_err(|err| match err {
                Error::Json(source) => Error::LogLine {
                    line: self.line_no,
                    source,
                },
                other => other,
            }));
        }
    }
}

/// Parse a single event.log line.
pub fn parse_line(line: &str) -> Result<LoggedEvent> {
    use serde::de::Error as _;

    let raw: RawLogEvent = serde_json::from_str(line)?;
    raw.into_event()
        .map_err(|msg| Error::Json(serde_json::Error::custom(msg)))
}

/// Read a whole event.log into memory. The segmenter needs a single linear
/// pass, so there is no reason to hold more than one project's log at once.
pub fn read_event_log(path: &Path) -> Result<Vec<LoggedEvent>> {
    EventLogReader::open(path)?.collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_current_format() {
        let line = r#"{"event":"AfterAnnotationUpdateEvent","created":"1581456000000","user":"gabbard","document_name":"doc_42"}"#;
        let event = parse_line(line).unwrap();
        assert_eq!(event.timestamp_ms, 1581456000000);
        assert_eq!(event.kind, "AfterAnnotationUpdateEvent");
        assert_eq!(event.user, "gabbard");
        assert_eq!(event.document_name.as_deref(), Some("doc_42"));
        assert_eq!(event.query_text, None);
    }

    #[test]
    fn test_parse_numeric_created_and_legacy_annotator() {
        let line = r#"{"event":"DocumentOpenedEvent","created":1581456000000,"annotator":"ivanova","document_name":"doc_1"}"#;
        let event = parse_line(line).unwrap();
        assert_eq!(event.timestamp_ms, 1581456000000);
        assert_eq!(event.user, "ivanova");
    }

    #[test]
    fn test_parse_search_query_event() {
        let line = r#"{"event":"ExternalSearchQueryEvent","created":"5000","user":"gabbard","details":{"query":"tank column"}}"#;
        let event = parse_line(line).unwrap();
        assert!(event.is_search_query());
        assert_eq!(event.query_text.as_deref(), Some("tank column"));
        assert_eq!(event.document_name, None);
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let log = "{\"event\":\"A\",\"created\":\"1\",\"user\":\"u\"}\nnot json\n";
        let mut reader = EventLogReader::new(log.as_bytes());
        assert!(reader.next().unwrap().is_ok());
        match reader.next().unwrap() {
            Err(Error::LogLine { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected LogLine error, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let log = "\n{\"event\":\"A\",\"created\":\"1\",\"user\":\"u\"}\n\n";
        let events: Result<Vec<_>> = EventLogReader::new(log.as_bytes()).collect();
        assert_eq!(events.unwrap().len(), 1);
    }

    #[test]
    fn test_read_event_log_from_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(EVENT_LOG);
        std::fs::write(
            &path,
            "{\"event\":\"A\",\"created\":\"1\",\"user\":\"u\"}\n{\"event\":\"B\",\"created\":\"2\",\"user\":\"u\"}\n",
        )
        .unwrap();

        let events = read_event_log(&path).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].kind, "B");
    }

    #[test]
    fn test_missing_user_becomes_empty() {
        // Admin-less system events carry no user; they must never match a
        // real target user downstream.
        let line = r#"{"event":"SessionCreatedEvent","created":"9"}"#;
        let event = parse_line(line).unwrap();
        assert_eq!(event.user, "");
    }
}
