pub mod annotation;
pub mod event;
pub mod project;
pub mod stats;

pub use annotation::{
    DocumentTimes, Relation, SentenceAnnotation, SignificantSpan, Span, SpanId, SpanTable,
};
pub use event::LoggedEvent;
pub use project::{Language, ProjectName};
pub use stats::{AnnotationStats, StatsSnapshot};
