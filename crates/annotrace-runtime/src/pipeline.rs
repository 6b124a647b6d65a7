use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use annotrace_engine::{
    aggregate, collect_sentence_annotations, diff_stats, segment_events, significant_spans,
};
use annotrace_ingest::{project_name, read_event_log, read_export};
use annotrace_types::{AnnotationStats, SentenceAnnotation, StatsSnapshot};

use crate::report::{DurationReport, IndicatorReport};
use crate::scan::{document_files, find_project_dirs, ProjectDir};
use crate::snapshot::SnapshotStore;
use crate::Result;

/// What the batch did: processed project count, plus every project or
/// document that was skipped and why. A single corrupt artifact must never
/// suppress statistics for the rest of the corpus, so failures land here
/// instead of aborting the run.
#[derive(Debug, Default)]
pub struct RunReport {
    pub processed: usize,
    pub skipped: Vec<Skip>,
    pub warnings: Vec<String>,
}

#[derive(Debug)]
pub struct Skip {
    pub name: String,
    pub reason: String,
}

impl RunReport {
    pub fn skip(&mut self, name: impl Into<String>, reason: impl ToString) {
        self.skipped.push(Skip {
            name: name.into(),
            reason: reason.to_string(),
        });
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }
}

/// Result of the duration pass over one export root.
#[derive(Debug, Default)]
pub struct DurationsOutcome {
    pub durations: DurationReport,
    pub indicators: IndicatorReport,
    /// Total annotation seconds per user, for the stats snapshot.
    pub annotation_times: BTreeMap<String, i64>,
    pub report: RunReport,
}

/// Reconstruct per-user annotation times and indicator searches from every
/// project's event log under `export_root`.
pub fn collect_durations(export_root: &Path, gap_threshold_ms: i64) -> Result<DurationsOutcome> {
    let mut outcome = DurationsOutcome::default();

    for project in find_project_dirs(export_root)? {
        let parsed = match project_name::parse(&project.name) {
            Ok(parsed) => parsed,
            Err(err) => {
                outcome.report.skip(&project.name, err);
                continue;
            }
        };
        if !project.has_event_log() {
            outcome.report.skip(&project.name, "no event.log found");
            continue;
        }
        let events = match read_event_log(&project.event_log_path()) {
            Ok(events) => events,
            Err(err) => {
                outcome.report.skip(&project.name, err);
                continue;
            }
        };

        let summary = segment_events(&events, parsed.user(), gap_threshold_ms);
        let seconds = summary.total_seconds();

        outcome
            .durations
            .add(parsed.user(), parsed.event_type(), seconds);
        outcome.indicators.add(
            parsed.user(),
            parsed.event_type(),
            summary.search_queries.iter().cloned(),
        );
        accumulate(&mut outcome.annotation_times, parsed.user(), seconds);
        outcome.report.processed += 1;
    }

    Ok(outcome)
}

/// Result of the stats pass: the new snapshot (already persisted), the diff
/// against the most recent previous one, and the run report.
#[derive(Debug)]
pub struct StatsOutcome {
    pub snapshot: StatsSnapshot,
    pub snapshot_path: PathBuf,
    pub previous_date: Option<String>,
    pub diff: Option<AnnotationStats>,
    pub report: RunReport,
}

/// Collect sentence annotations from every exported document, aggregate
/// them, persist a date-stamped snapshot and diff it against the most
/// recent previous one.
pub fn collect_stats(
    export_root: &Path,
    gap_threshold_ms: i64,
    store: &SnapshotStore,
    date: &str,
) -> Result<StatsOutcome> {
    let mut report = RunReport::default();
    let mut annotations: Vec<SentenceAnnotation> = Vec::new();
    let mut annotation_times: BTreeMap<String, i64> = BTreeMap::new();

    for project in find_project_dirs(export_root)? {
        // Bulk corpora get their stats elsewhere.
        if project.name.contains("gigaword") {
            continue;
        }
        let parsed = match project_name::parse(&project.name) {
            Ok(parsed) => parsed,
            Err(err) => {
                report.skip(&project.name, err);
                continue;
            }
        };

        if project.has_event_log() {
            match read_event_log(&project.event_log_path()) {
                Ok(events) => {
                    let summary = segment_events(&events, parsed.user(), gap_threshold_ms);
                    accumulate(&mut annotation_times, parsed.user(), summary.total_seconds());
                }
                Err(err) => {
                    report.warn(format!(
                        "{}: annotation time omitted, event.log unreadable: {}",
                        project.name, err
                    ));
                }
            }
        }

        collect_project_annotations(&project, &parsed, &mut annotations, &mut report)?;
        report.processed += 1;
    }

    let stats = aggregate(&annotations, annotation_times);

    // Look up the previous snapshot before writing the new one, or the
    // fresh file would shadow it.
    let previous = store.most_recent()?;
    let diff = previous
        .as_ref()
        .map(|previous| diff_stats(&stats, &previous.stats));
    let previous_date = previous.map(|snapshot| snapshot.date);

    let snapshot = StatsSnapshot {
        date: date.to_string(),
        stats,
    };
    let snapshot_path = store.write(&snapshot)?;

    Ok(StatsOutcome {
        snapshot,
        snapshot_path,
        previous_date,
        diff,
        report,
    })
}

fn collect_project_annotations(
    project: &ProjectDir,
    parsed: &annotrace_types::ProjectName,
    annotations: &mut Vec<SentenceAnnotation>,
    report: &mut RunReport,
) -> Result<()> {
    for document_path in document_files(project)? {
        let document_name = document_path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        let label = format!("{}/{}", project.name, document_name);

        let document = match read_export(&document_path) {
            Ok(document) => document,
            Err(err) => {
                report.skip(&label, err);
                continue;
            }
        };
        if !document.has_event_spans {
            continue;
        }

        let significant = significant_spans(
            parsed,
            &document.span_table,
            &document.relations,
            &document.standalone_spans,
        );
        if significant.is_empty() && !document.relations.is_empty() {
            // A document may legitimately hold only linked arguments whose
            // trigger cannot be resolved locally; count nothing but say so.
            report.warn(format!("{}: relations present but no significant spans", label));
        }

        annotations.extend(collect_sentence_annotations(
            &document_name,
            &document.sentences,
            &significant,
            parsed,
        ));
    }
    Ok(())
}

fn accumulate(times: &mut BTreeMap<String, i64>, user: &str, seconds: i64) {
    match times.get_mut(user) {
        Some(total) => *total += seconds,
        None => {
            times.insert(user.to_string(), seconds);
        }
    }
}
