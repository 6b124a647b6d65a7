use std::collections::BTreeMap;

use annotrace_types::AnnotationStats;

/// Key-wise subtraction of two successive statistics aggregates.
///
/// The diff maps cover only keys present in *both* inputs: a key that
/// first appeared in `new_stats` is omitted (report renderers fall back to
/// showing the raw new value for it), and a key that vanished from
/// `previous` is dropped. This asymmetry is part of the report contract
/// and must not be "fixed".
pub fn diff_stats(new_stats: &AnnotationStats, previous: &AnnotationStats) -> AnnotationStats {
    AnnotationStats {
        total: new_stats.total - previous.total,
        by_user: diff_map(&new_stats.by_user, &previous.by_user),
        by_event_type: diff_map(&new_stats.by_event_type, &previous.by_event_type),
        by_corpus_positive: diff_map(&new_stats.by_corpus_positive, &previous.by_corpus_positive),
        by_corpus_negative: diff_map(&new_stats.by_corpus_negative, &previous.by_corpus_negative),
        annotation_times: diff_map(&new_stats.annotation_times, &previous.annotation_times),
    }
}

fn diff_map(
    new_map: &BTreeMap<String, i64>,
    previous_map: &BTreeMap<String, i64>,
) -> BTreeMap<String, i64> {
    new_map
        .iter()
        .filter_map(|(key, new_count)| {
            previous_map
                .get(key)
                .map(|old_count| (key.clone(), new_count - old_count))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, i64)]) -> BTreeMap<String, i64> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect()
    }

    #[test]
    fn test_diff_subtracts_shared_keys() {
        let new_stats = AnnotationStats {
            total: 10,
            by_user: map(&[("gabbard", 7), ("ivanova", 3)]),
            ..Default::default()
        };
        let previous = AnnotationStats {
            total: 6,
            by_user: map(&[("gabbard", 4), ("ivanova", 2)]),
            ..Default::default()
        };

        let diff = diff_stats(&new_stats, &previous);
        assert_eq!(diff.total, 4);
        assert_eq!(diff.by_user, map(&[("gabbard", 3), ("ivanova", 1)]));
    }

    #[test]
    fn test_new_key_is_omitted_from_diff() {
        let new_stats = AnnotationStats {
            total: 5,
            by_user: map(&[("gabbard", 3), ("newcomer", 2)]),
            ..Default::default()
        };
        let previous = AnnotationStats {
            total: 3,
            by_user: map(&[("gabbard", 3)]),
            ..Default::default()
        };

        let diff = diff_stats(&new_stats, &previous);
        assert_eq!(diff.by_user, map(&[("gabbard", 0)]));
    }

    #[test]
    fn test_vanished_key_is_dropped() {
        let new_stats = AnnotationStats {
            total: 1,
            by_event_type: map(&[("Conflict.Attack", 1)]),
            ..Default::default()
        };
        let previous = AnnotationStats {
            total: 4,
            by_event_type: map(&[("Conflict.Attack", 1), ("Life.Die", 3)]),
            ..Default::default()
        };

        let diff = diff_stats(&new_stats, &previous);
        assert_eq!(diff.total, -3);
        assert_eq!(diff.by_event_type, map(&[("Conflict.Attack", 0)]));
    }

    #[test]
    fn test_diff_never_invents_keys() {
        let new_stats = AnnotationStats {
            total: 2,
            by_corpus_positive: map(&[("English", 2)]),
            ..Default::default()
        };
        let previous = AnnotationStats {
            total: 1,
            by_corpus_negative: map(&[("Russian", 1)]),
            ..Default::default()
        };

        let diff = diff_stats(&new_stats, &previous);
        assert!(diff.by_corpus_positive.is_empty());
        assert!(diff.by_corpus_negative.is_empty());
    }
}
