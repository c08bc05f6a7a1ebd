//! The triage service facade.
//!
//! Owns the snapshot and override stores and exposes the operations the
//! surrounding layer (CLI, web frontend) calls. Every operation is
//! synchronous and stateless per call: the roster is reloaded from the
//! snapshot document each time, and the caller is responsible for
//! serializing ingestion against queries.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, info_span};

use triage_ingest::read_roster_file;
use triage_model::{
    AgeGroup, AvailabilityStatus, ClinicianRecord, FundingSource, MatchQuery, MatchResult,
};
use triage_store::{AvailabilityOverride, OverrideStore, RosterSnapshot, SnapshotStore};

use crate::availability;
use crate::config::ClinicConfig;
use crate::engine;
use crate::facets;

/// Outcome of a successful roster ingestion.
#[derive(Debug, Clone, Serialize)]
pub struct IngestReport {
    pub count: usize,
    pub source_digest: String,
    pub ingested_at: DateTime<Utc>,
}

/// Administrative view of the current snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct RosterSummary {
    pub count: usize,
    pub ingested_at: DateTime<Utc>,
    pub source_digest: String,
    pub override_count: usize,
}

/// One clinician in the administrative roster listing, with effective
/// availability already resolved.
#[derive(Debug, Clone, Serialize)]
pub struct ClinicianListing {
    pub name: String,
    pub profession: String,
    pub gender: String,
    pub availability_status: AvailabilityStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_from_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TriageService {
    snapshots: SnapshotStore,
    overrides: OverrideStore,
    config: ClinicConfig,
}

impl TriageService {
    /// Open the service over a data directory, reading `clinic.toml` when
    /// present.
    pub fn open(data_dir: impl Into<PathBuf>) -> Self {
        let root = data_dir.into();
        let config = ClinicConfig::load_or_default(&root);
        Self {
            snapshots: SnapshotStore::new(&root),
            overrides: OverrideStore::new(&root),
            config,
        }
    }

    pub fn with_config(mut self, config: ClinicConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ClinicConfig {
        &self.config
    }

    /// Ingest a roster file, replacing the current snapshot wholesale.
    /// On any failure the prior snapshot is left untouched.
    pub fn ingest_roster(&self, path: &Path) -> Result<IngestReport> {
        let span = info_span!("ingest_roster", path = %path.display());
        let _guard = span.enter();

        let bytes =
            fs::read(path).with_context(|| format!("read roster file: {}", path.display()))?;
        let records = read_roster_file(path)?;
        let snapshot = RosterSnapshot::new(records, &bytes);
        let report = IngestReport {
            count: snapshot.len(),
            source_digest: snapshot.source_digest.clone(),
            ingested_at: snapshot.ingested_at,
        };
        self.snapshots.replace(&snapshot)?;
        info!(count = report.count, "roster ingested");
        Ok(report)
    }

    /// Presentations offered by the current roster. Empty when no roster
    /// has ever been ingested.
    pub fn presentations(&self) -> Result<Vec<String>> {
        Ok(facets::list_presentations(&self.roster_records()?))
    }

    /// The fixed age brackets.
    pub fn age_groups(&self) -> &'static [AgeGroup] {
        facets::age_groups()
    }

    /// The fixed funding sources.
    pub fn funding_sources(&self) -> &'static [FundingSource] {
        facets::funding_sources()
    }

    /// Queryable locations: configured sites, "Flexible", roster extras.
    pub fn locations(&self) -> Result<Vec<String>> {
        Ok(facets::list_locations(&self.roster_records()?, &self.config))
    }

    /// Run one triage query against the current snapshot. An empty result
    /// is a normal outcome; a missing roster yields an empty result too.
    pub fn find_matches(&self, query: &MatchQuery) -> Result<Vec<MatchResult>> {
        let records = self.roster_records()?;
        let overrides = self.overrides.load_or_default();
        Ok(engine::find_matches(&records, &overrides, query))
    }

    /// Set or replace an availability override for a named clinician.
    /// The clinician must exist in the current roster.
    pub fn set_availability(
        &self,
        clinician_name: &str,
        status: AvailabilityStatus,
        available_from_date: Option<String>,
        notes: Option<String>,
    ) -> Result<()> {
        let Some(snapshot) = self.snapshots.load()? else {
            bail!("no roster has been ingested yet; upload a roster first");
        };
        let known = snapshot
            .records
            .iter()
            .any(|record| record.name() == Some(clinician_name));
        if !known {
            bail!("no clinician named {clinician_name:?} in the current roster");
        }

        self.overrides.set(
            clinician_name,
            AvailabilityOverride::new(status, available_from_date, notes),
        )?;
        info!(clinician = %clinician_name, %status, "availability override set");
        Ok(())
    }

    /// Snapshot provenance for the administrative dashboard. `None` when
    /// no roster has ever been ingested.
    pub fn roster_summary(&self) -> Result<Option<RosterSummary>> {
        let Some(snapshot) = self.snapshots.load()? else {
            return Ok(None);
        };
        let overrides = self.overrides.load_or_default();
        Ok(Some(RosterSummary {
            count: snapshot.len(),
            ingested_at: snapshot.ingested_at,
            source_digest: snapshot.source_digest,
            override_count: overrides.len(),
        }))
    }

    /// The administrative roster listing, grouped by location (sorted),
    /// with effective availability resolved per clinician. Clinicians keep
    /// roster order within each location.
    pub fn clinicians_by_location(&self) -> Result<Vec<(String, Vec<ClinicianListing>)>> {
        let records = self.roster_records()?;
        let overrides = self.overrides.load_or_default();

        let mut grouped: BTreeMap<String, Vec<ClinicianListing>> = BTreeMap::new();
        for record in &records {
            let resolved = availability::resolve(record, &overrides);
            let listing = ClinicianListing {
                name: record
                    .name()
                    .unwrap_or(triage_model::UNKNOWN_VALUE)
                    .to_string(),
                profession: record.profession().to_string(),
                gender: record.gender().to_string(),
                availability_status: resolved.status,
                available_from_date: resolved.available_from_date,
                availability_notes: resolved.notes,
            };
            grouped
                .entry(record.primary_location().to_string())
                .or_default()
                .push(listing);
        }
        Ok(grouped.into_iter().collect())
    }

    fn roster_records(&self) -> Result<Vec<ClinicianRecord>> {
        Ok(self
            .snapshots
            .load()?
            .map(|snapshot| snapshot.records)
            .unwrap_or_default())
    }
}
