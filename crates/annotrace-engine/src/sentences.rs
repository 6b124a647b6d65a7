use std::collections::BTreeSet;

use annotrace_types::{ProjectName, SentenceAnnotation, SignificantSpan, Span};

/// Map significant spans onto their enclosing sentences.
///
/// Sentences are scanned in order and the first one whose interval contains
/// the span wins. Multiple triggers in one sentence collapse into a single
/// record (dedup on sentence id). A span contained by no sentence cannot be
/// attributed and is dropped.
pub fn collect_sentence_annotations(
    document_name: &str,
    sentences: &[Span],
    significant_spans: &[SignificantSpan],
    project: &ProjectName,
) -> Vec<SentenceAnnotation> {
    let mut annotations = Vec::new();
    let mut seen_sentences = BTreeSet::new();

    for span in significant_spans {
        for sentence in sentences {
            let sentence_begin = sentence.begin_offset();
            if span.begin >= sentence_begin && span.end <= sentence.end {
                let sentence_id = format!("{}-{}", document_name, sentence_begin);
                if seen_sentences.insert(sentence_id.clone()) {
                    annotations.push(SentenceAnnotation {
                        sentence_id,
                        user: project.user().to_string(),
                        event_type: project.event_type().to_string(),
                        corpus: project.corpus().to_string(),
                        negative_example: span.negative_example,
                    });
                }
                break;
            }
        }
    }

    annotations
}
