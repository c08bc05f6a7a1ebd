//! Administrator availability overrides.
//!
//! Overrides are keyed by clinician name, not row position, so they survive
//! roster re-ingestion. They never expire; an administrator sets or
//! replaces them explicitly.

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use triage_model::AvailabilityStatus;

use crate::document::{load_json, store_json};
use crate::error::Result;

/// File name of the override document inside the data directory.
pub const OVERRIDES_FILE: &str = "availability_overrides.json";

/// One administrator-set availability value. Supersedes the roster's
/// embedded fields entirely for the named clinician.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityOverride {
    pub status: AvailabilityStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_from_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl AvailabilityOverride {
    pub fn new(
        status: AvailabilityStatus,
        available_from_date: Option<String>,
        notes: Option<String>,
    ) -> Self {
        Self {
            status,
            available_from_date,
            notes,
            updated_at: Utc::now(),
        }
    }
}

/// The full override map, keyed by clinician name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityOverrides {
    #[serde(flatten)]
    entries: BTreeMap<String, AvailabilityOverride>,
}

impl AvailabilityOverrides {
    pub fn get(&self, clinician_name: &str) -> Option<&AvailabilityOverride> {
        self.entries.get(clinician_name)
    }

    pub fn insert(&mut self, clinician_name: impl Into<String>, entry: AvailabilityOverride) {
        self.entries.insert(clinician_name.into(), entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AvailabilityOverride)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }
}

/// On-disk home of the override document.
#[derive(Debug, Clone)]
pub struct OverrideStore {
    root: PathBuf,
}

impl OverrideStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn overrides_path(&self) -> PathBuf {
        self.root.join(OVERRIDES_FILE)
    }

    /// Load the override map. A missing document is an empty map.
    pub fn load(&self) -> Result<AvailabilityOverrides> {
        Ok(load_json(&self.overrides_path())?.unwrap_or_default())
    }

    /// Load the override map, degrading to roster-only availability when
    /// the document is absent or unreadable. Matching never fails because
    /// overrides cannot be read.
    pub fn load_or_default(&self) -> AvailabilityOverrides {
        match self.load() {
            Ok(overrides) => {
                debug!(count = overrides.len(), "availability overrides loaded");
                overrides
            }
            Err(error) => {
                warn!(%error, "availability overrides unreadable; using roster availability only");
                AvailabilityOverrides::default()
            }
        }
    }

    /// Set or replace one clinician's override. Read-modify-write against
    /// the whole document, replaced atomically.
    pub fn set(
        &self,
        clinician_name: &str,
        entry: AvailabilityOverride,
    ) -> Result<AvailabilityOverrides> {
        let mut overrides = self.load()?;
        overrides.insert(clinician_name, entry);
        store_json(&self.overrides_path(), &overrides)?;
        Ok(overrides)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_document_round_trips() {
        let mut overrides = AvailabilityOverrides::default();
        overrides.insert(
            "Dr Example",
            AvailabilityOverride::new(
                AvailabilityStatus::Closed,
                Some("2026-10-01".to_string()),
                Some("extended leave".to_string()),
            ),
        );
        let json = serde_json::to_string(&overrides).expect("serialize overrides");
        // Flattened map: the clinician name is the key
        assert!(json.contains("\"Dr Example\""));
        let round: AvailabilityOverrides =
            serde_json::from_str(&json).expect("deserialize overrides");
        assert_eq!(
            round.get("Dr Example").map(|entry| entry.status),
            Some(AvailabilityStatus::Closed)
        );
    }
}
