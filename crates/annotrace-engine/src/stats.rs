use std::collections::BTreeMap;

use annotrace_types::{AnnotationStats, SentenceAnnotation};

/// Aggregate all sentence annotations from one run into sorted count maps.
///
/// `annotation_times` carries total seconds per user from the duration
/// pass; it rides along in the snapshot untouched by the counting.
pub fn aggregate(
    annotations: &[SentenceAnnotation],
    annotation_times: BTreeMap<String, i64>,
) -> AnnotationStats {
    let (positive, negative): (Vec<_>, Vec<_>) =
        annotations.iter().partition(|a| !a.negative_example);

    AnnotationStats {
        total: annotations.len() as i64,
        by_user: count_by(annotations.iter(), |a| &a.user),
        by_event_type: count_by(annotations.iter(), |a| &a.event_type),
        by_corpus_positive: count_by(positive.iter().copied(), |a| &a.corpus),
        by_corpus_negative: count_by(negative.iter().copied(), |a| &a.corpus),
        annotation_times,
    }
}

fn count_by<'a, I, F>(items: I, key: F) -> BTreeMap<String, i64>
where
    I: Iterator<Item = &'a SentenceAnnotation>,
    F: Fn(&'a SentenceAnnotation) -> &'a str,
{
    let mut counts = BTreeMap::new();
    for item in items {
        match counts.get_mut(key(item)) {
            Some(count) => *count += 1,
            None => {
                counts.insert(key(item).to_string(), 1);
            }
        }
    }
    counts
}
