use std::fmt;

/// Result type for annotrace-ingest operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the ingest layer
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// JSON parsing failed
    Json(serde_json::Error),

    /// A line of an event.log could not be parsed
    LogLine {
        line: usize,
        source: serde_json::Error,
    },

    /// Project/directory name matched no known naming convention,
    /// or yielded a blank user or event type
    ProjectName(String),

    /// Annotation export JSON had an unexpected shape
    Export(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::LogLine { line, source } => {
                write!(f, "Malformed event.log line {}: {}", line, source)
            }
            Error::ProjectName(name) => write!(f, "Unparseable project name: {}", name),
            Error::Export(msg) => write!(f, "Export error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::LogLine { source, .. } => Some(source),
            Error::ProjectName(_) | Error::Export(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
