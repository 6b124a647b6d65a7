use std::path::PathBuf;

use anyhow::{bail, Result};

use annotrace_runtime::Config;

use super::args::{Cli, Commands};
use super::handlers;

pub fn run(cli: Cli) -> Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::default_path()?,
    };
    let config = Config::load_from(&config_path)?;
    let gap_threshold_ms = cli.gap_threshold_ms.unwrap_or(config.gap_threshold_ms);

    match cli.command {
        Commands::Durations {
            export_root,
            report_dir,
        } => {
            let export_root = resolve(
                export_root,
                config.export_root.clone(),
                "--export-root",
                "export_root",
            )?;
            let report_dir = resolve(
                report_dir,
                config.report_dir.clone(),
                "--report-dir",
                "report_dir",
            )?;
            handlers::durations::handle(&export_root, &report_dir, gap_threshold_ms)
        }
        Commands::Stats {
            export_root,
            stats_dir,
        } => {
            let export_root = resolve(
                export_root,
                config.export_root.clone(),
                "--export-root",
                "export_root",
            )?;
            let stats_dir = resolve(
                stats_dir,
                config.stats_dir.clone(),
                "--stats-dir",
                "stats_dir",
            )?;
            handlers::stats::handle(&export_root, &stats_dir, gap_threshold_ms)
        }
    }
}

/// Flag wins over config file; neither present is a usage error.
fn resolve(
    flag: Option<PathBuf>,
    configured: Option<PathBuf>,
    flag_name: &str,
    config_key: &str,
) -> Result<PathBuf> {
    match flag.or(configured) {
        Some(path) => Ok(path),
        None => bail!(
            "{} not given and `{}` is not set in the config file",
            flag_name,
            config_key
        ),
    }
}
