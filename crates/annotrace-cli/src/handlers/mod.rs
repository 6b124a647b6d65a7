pub mod durations;
pub mod stats;

use annotrace_runtime::RunReport;

/// Print skips and warnings to stderr so piped stdout stays clean JSON-free.
pub(crate) fn print_report(report: &RunReport) {
    for skip in &report.skipped {
        eprintln!("Skipping {} - {}", skip.name, skip.reason);
    }
    for warning in &report.warnings {
        eprintln!("Warning: {}", warning);
    }
}
