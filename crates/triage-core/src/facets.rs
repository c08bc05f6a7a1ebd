//! Schema introspection: the query facets the current roster supports.
//!
//! Presentations are data-driven — clinics configure their own treatment
//! taxonomy through roster columns. Age groups and funding sources are
//! domain-fixed policy categories and are always fully offered. Locations
//! sit in between: configured sites plus "Flexible" first, then whatever
//! extra locations the roster mentions.

use std::collections::BTreeSet;

use triage_model::{AgeGroup, ClinicianRecord, FundingSource, presentation_label};

use crate::config::{ClinicConfig, FLEXIBLE_LOCATION};

/// Presentations offered by the roster, as sorted human labels.
///
/// The column set is derived from the first record's keys; all records are
/// assumed to share one schema. An empty roster yields an empty list.
pub fn list_presentations(records: &[ClinicianRecord]) -> Vec<String> {
    let Some(first) = records.first() else {
        return Vec::new();
    };
    let labels: BTreeSet<String> = first.columns().filter_map(presentation_label).collect();
    labels.into_iter().collect()
}

/// The fixed age brackets. Never derived from roster content.
pub fn age_groups() -> &'static [AgeGroup] {
    AgeGroup::all()
}

/// The fixed funding sources. Never derived from roster content.
pub fn funding_sources() -> &'static [FundingSource] {
    FundingSource::all()
}

/// Queryable locations: configured sites, then "Flexible", then observed
/// extras in lexicographic order.
pub fn list_locations(records: &[ClinicianRecord], config: &ClinicConfig) -> Vec<String> {
    let mut locations: Vec<String> = config.clinic_sites.clone();
    locations.push(FLEXIBLE_LOCATION.to_string());

    let mut extras: BTreeSet<String> = BTreeSet::new();
    for record in records {
        if let Some(location) = record.get("primary_location")
            && !locations.iter().any(|known| known == location)
        {
            extras.insert(location.to_string());
        }
    }
    locations.extend(extras);
    locations
}
