//! Run settings file handling for saving and loading paint shop settings.
//!
//! Settings are plain JSON. Every field has a default, so `{}` is a valid
//! settings file. Command-line flags win over anything loaded here.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum::{Display, EnumIter, EnumString};
use tracing_subscriber::EnvFilter;

/// How a successful batch is written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Space-separated finish symbols
    #[default]
    Text,
    /// Finishes plus resolver counters as a JSON object
    Json,
}

/// Settings that shape a run
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub output: OutputFormat,
    /// Reject colour codes above the header's colour count
    pub strict_codes: bool,
    /// Default tracing filter used when RUST_LOG is unset
    pub log_filter: Option<String>,
}

impl RunConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save settings to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize settings to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write settings to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load settings from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read settings from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse settings JSON")?;

        Ok(config)
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if let Some(filter) = &self.log_filter {
            if filter.trim().is_empty() {
                anyhow::bail!("log_filter must not be blank");
            }
            EnvFilter::try_new(filter)
                .with_context(|| format!("Invalid log_filter '{}'", filter))?;
        }
        Ok(())
    }
}
