use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "annotrace")]
#[command(about = "Analyze crowd-annotation exports: durations, trigger stats, snapshot diffs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (TOML). Defaults to the platform config directory;
    /// flags override whatever the file says.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Maximum gap (ms) between events still counted as continuous work.
    #[arg(long, global = true)]
    pub gap_threshold_ms: Option<i64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Reconstruct per-user annotation times and indicator searches from
    /// the projects' event logs
    Durations {
        /// Root directory of the exported annotation projects
        #[arg(long)]
        export_root: Option<PathBuf>,

        /// Where to write the time and indicator reports
        #[arg(long)]
        report_dir: Option<PathBuf>,
    },

    /// Collect sentence-level statistics, persist a date-stamped snapshot
    /// and diff it against the most recent previous one
    Stats {
        /// Root directory of the exported annotation projects
        #[arg(long)]
        export_root: Option<PathBuf>,

        /// Directory holding the stats snapshots
        #[arg(long)]
        stats_dir: Option<PathBuf>,
    },
}
