//! Clinic configuration.
//!
//! The clinic's physical sites are deployment configuration, not roster
//! data: they are always offered as query locations even when the current
//! spreadsheet has no clinician at one of them. A `clinic.toml` in the data
//! directory can replace the defaults; most deployments never write one.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// The location value that bypasses the location predicate entirely.
pub const FLEXIBLE_LOCATION: &str = "Flexible";

/// Optional configuration file inside the data directory.
pub const CONFIG_FILE: &str = "clinic.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicConfig {
    /// Clinic sites always offered as query locations, in display order,
    /// ahead of "Flexible" and any roster-derived extras.
    pub clinic_sites: Vec<String>,
}

impl Default for ClinicConfig {
    fn default() -> Self {
        Self {
            clinic_sites: vec!["Maroochydore".to_string(), "Sippy Downs".to_string()],
        }
    }
}

impl ClinicConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("read clinic config: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("parse clinic config: {}", path.display()))
    }

    /// Load `clinic.toml` from the data directory, falling back to the
    /// defaults when it is absent or unreadable.
    pub fn load_or_default(data_dir: &Path) -> Self {
        let path = data_dir.join(CONFIG_FILE);
        if !path.exists() {
            debug!(path = %path.display(), "no clinic config; using defaults");
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => config,
            Err(error) => {
                warn!(%error, "clinic config unreadable; using defaults");
                Self::default()
            }
        }
    }
}
