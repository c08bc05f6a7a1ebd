//! Precedence resolution for the two availability sources.
//!
//! A clinician's availability lives in two places: the roster snapshot
//! (refreshed only on re-ingestion) and the administrator override store
//! (mutable at any time). An override supersedes the roster fields
//! entirely; there is no field-by-field merge.

use triage_model::{AvailabilityStatus, ClinicianRecord};
use triage_store::AvailabilityOverrides;

/// The single effective availability for one clinician.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveAvailability {
    pub status: AvailabilityStatus,
    pub available_from_date: Option<String>,
    pub notes: Option<String>,
}

impl EffectiveAvailability {
    /// True when the clinician must not appear in any match result.
    /// Absent or unrecognized data never excludes (fail open).
    pub fn is_excluded(&self) -> bool {
        self.status.is_excluded()
    }
}

/// Resolve one clinician's effective availability.
pub fn resolve(
    record: &ClinicianRecord,
    overrides: &AvailabilityOverrides,
) -> EffectiveAvailability {
    if let Some(name) = record.name()
        && let Some(entry) = overrides.get(name)
    {
        return EffectiveAvailability {
            status: entry.status,
            available_from_date: entry.available_from_date.clone(),
            notes: entry.notes.clone(),
        };
    }
    EffectiveAvailability {
        status: record.availability_status(),
        available_from_date: record.available_from_date().map(str::to_string),
        notes: record.availability_notes().map(str::to_string),
    }
}
