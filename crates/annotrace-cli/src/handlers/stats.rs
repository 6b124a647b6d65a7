use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Result;

use annotrace_runtime::{collect_stats, today, SnapshotStore};

pub fn handle(export_root: &Path, stats_dir: &Path, gap_threshold_ms: i64) -> Result<()> {
    let store = SnapshotStore::new(stats_dir);
    let outcome = collect_stats(export_root, gap_threshold_ms, &store, &today())?;
    super::print_report(&outcome.report);

    let stats = &outcome.snapshot.stats;
    match (&outcome.previous_date, &outcome.diff) {
        (Some(previous_date), Some(diff)) => {
            println!("Changes since {}:", previous_date);
            println!("Total annotations: {} ({:+})", stats.total, diff.total);
            print_counts("By user", &stats.by_user, Some(&diff.by_user));
            print_counts("By event type", &stats.by_event_type, Some(&diff.by_event_type));
            print_counts(
                "Positive examples by corpus",
                &stats.by_corpus_positive,
                Some(&diff.by_corpus_positive),
            );
            print_counts(
                "Negative examples by corpus",
                &stats.by_corpus_negative,
                Some(&diff.by_corpus_negative),
            );
        }
        _ => {
            println!("No previous report found; showing absolute counts.");
            println!("Total annotations: {}", stats.total);
            print_counts("By user", &stats.by_user, None);
            print_counts("By event type", &stats.by_event_type, None);
            print_counts("Positive examples by corpus", &stats.by_corpus_positive, None);
            print_counts("Negative examples by corpus", &stats.by_corpus_negative, None);
        }
    }

    println!("Snapshot written to {}", outcome.snapshot_path.display());
    Ok(())
}

/// New keys have no previous value to diff against; show their raw count.
fn print_counts(
    heading: &str,
    counts: &BTreeMap<String, i64>,
    diff: Option<&BTreeMap<String, i64>>,
) {
    if counts.is_empty() {
        return;
    }
    println!("{}:", heading);
    for (key, count) in counts {
        match diff.and_then(|diff| diff.get(key)) {
            Some(delta) => println!("  {}: {} ({:+})", key, count, delta),
            None => println!("  {}: {}", key, count),
        }
    }
}
