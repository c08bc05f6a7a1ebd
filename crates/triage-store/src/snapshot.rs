//! The roster snapshot: the full, atomically-replaced set of clinician
//! records currently in effect.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::Digest;
use tracing::info;

use triage_model::ClinicianRecord;

use crate::document::{load_json, store_json};
use crate::error::Result;

/// File name of the roster snapshot document inside the data directory.
pub const ROSTER_FILE: &str = "roster.json";

/// A roster snapshot plus its provenance envelope.
///
/// The digest identifies the uploaded bytes so an administrator can tell
/// which spreadsheet version is live; `ingested_at` feeds the dashboard's
/// "last updated" display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterSnapshot {
    pub ingested_at: DateTime<Utc>,
    pub source_digest: String,
    pub records: Vec<ClinicianRecord>,
}

impl RosterSnapshot {
    pub fn new(records: Vec<ClinicianRecord>, source_bytes: &[u8]) -> Self {
        Self {
            ingested_at: Utc::now(),
            source_digest: sha256_hex(source_bytes),
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(sha2::Sha256::digest(bytes))
}

/// On-disk home of the roster snapshot.
///
/// Replacement is wholesale: the new snapshot lands via temp-file rename,
/// so a failed ingestion leaves the prior roster untouched.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    root: PathBuf,
}

impl SnapshotStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn roster_path(&self) -> PathBuf {
        self.root.join(ROSTER_FILE)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load the current snapshot. `None` when no roster has ever been
    /// ingested.
    pub fn load(&self) -> Result<Option<RosterSnapshot>> {
        load_json(&self.roster_path())
    }

    /// Replace the snapshot wholesale.
    pub fn replace(&self, snapshot: &RosterSnapshot) -> Result<()> {
        store_json(&self.roster_path(), snapshot)?;
        info!(
            records = snapshot.len(),
            digest = %snapshot.source_digest,
            "roster snapshot replaced"
        );
        Ok(())
    }
}
