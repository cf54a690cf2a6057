use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Report rendering options, loadable from `~/.sha256trace/config.toml`.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Rounds at the start printed in full register detail.
    pub detail_head: usize,
    /// Rounds at the end printed in full register detail.
    pub detail_tail: usize,
    /// Colored console output.
    pub color: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        // Matches the original report shape: rounds 0-4 and 60-63 in full.
        Self {
            detail_head: 5,
            detail_tail: 4,
            color: true,
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    // ~\Users\you\.sha256trace\config.toml on Windows; ~/.sha256trace/config.toml elsewhere
    dirs_next::home_dir().map(|h| h.join(".sha256trace").join("config.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}

/// Load the config file if present; a missing file means defaults.
pub fn load_config(path: Option<&Path>) -> Result<ReportConfig> {
    let Some(path) = path else {
        return Ok(ReportConfig::default());
    };
    match std::fs::read_to_string(path) {
        Ok(text) => {
            toml::from_str(&text).with_context(|| format!("Parse config file {}", path.display()))
        }
        Err(_) => Ok(ReportConfig::default()),
    }
}
