use std::path::Path;

use anyhow::Result;

use annotrace_runtime::{collect_durations, today};

pub fn handle(export_root: &Path, report_dir: &Path, gap_threshold_ms: i64) -> Result<()> {
    let outcome = collect_durations(export_root, gap_threshold_ms)?;
    super::print_report(&outcome.report);

    let date = today();
    let times_path = report_dir.join(format!("totalAnnotationTimes-{}.json", date));
    let indicators_path = report_dir.join(format!("indicatorSearches-{}.json", date));
    outcome.durations.write_to(&times_path)?;
    outcome.indicators.write_to(&indicators_path)?;

    println!(
        "Processed {} projects ({} skipped)",
        outcome.report.processed,
        outcome.report.skipped.len()
    );
    println!("Annotation times written to {}", times_path.display());
    println!("Indicator searches written to {}", indicators_path.display());
    Ok(())
}
