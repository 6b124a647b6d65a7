use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use annotrace_engine::DEFAULT_GAP_THRESHOLD_MS;

use crate::{Error, Result};

/// Run configuration, loaded from a TOML file. Every field is optional;
/// CLI flags override whatever the file says.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Maximum gap between events still counted as continuous work.
    /// Deployments have used anywhere from 2 to 10 minutes.
    #[serde(default = "default_gap_threshold_ms")]
    pub gap_threshold_ms: i64,

    /// Root of the exported annotation projects.
    #[serde(default)]
    pub export_root: Option<PathBuf>,

    /// Directory holding the date-stamped stats snapshots.
    #[serde(default)]
    pub stats_dir: Option<PathBuf>,

    /// Directory for duration/indicator reports.
    #[serde(default)]
    pub report_dir: Option<PathBuf>,
}

fn default_gap_threshold_ms() -> i64 {
    DEFAULT_GAP_THRESHOLD_MS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gap_threshold_ms: DEFAULT_GAP_THRESHOLD_MS,
            export_root: None,
            stats_dir: None,
            report_dir: None,
        }
    }
}

impl Config {
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Default config location: `$ANNOTRACE_CONFIG`, else the platform
    /// config directory, else `~/.annotrace/config.toml`.
    pub fn default_path() -> Result<PathBuf> {
        if let Ok(env_path) = std::env::var("ANNOTRACE_CONFIG") {
            return Ok(PathBuf::from(env_path));
        }

        if let Some(config_dir) = dirs::config_dir() {
            return Ok(config_dir.join("annotrace").join("config.toml"));
        }

        if let Some(home) = std::env::var_os("HOME") {
            return Ok(PathBuf::from(home).join(".annotrace").join("config.toml"));
        }

        Err(Error::Config(
            "Could not determine config path: no HOME or config directory found".to_string(),
        ))
    }
}
