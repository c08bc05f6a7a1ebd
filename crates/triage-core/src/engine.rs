//! The match engine: strict multi-criteria filtering.
//!
//! Every clinician is evaluated against five predicates in a fixed order,
//! short-circuiting on the first failure. There is no partial credit: a
//! clinician either passes every gate or is excluded. Zero matches is a
//! normal outcome, not an error.

use tracing::debug;

use triage_model::{
    ClinicianRecord, Eligibility, FundingSource, MatchQuery, MatchResult, UNKNOWN_VALUE,
    notes_column, service_type_column, treats_column,
};
use triage_store::AvailabilityOverrides;

use crate::availability;
use crate::config::FLEXIBLE_LOCATION;
use crate::rank;

/// Filter the roster against a query and return the ranked results.
pub fn find_matches(
    records: &[ClinicianRecord],
    overrides: &AvailabilityOverrides,
    query: &MatchQuery,
) -> Vec<MatchResult> {
    let treats = treats_column(&query.presentation);
    let service_type = service_type_column(&query.presentation);
    let notes = notes_column(&query.presentation);

    let mut results = Vec::new();
    for record in records {
        // 1. Availability: overrides supersede the roster snapshot.
        let resolved = availability::resolve(record, overrides);
        if resolved.is_excluded() {
            continue;
        }
        // 2. Location: exact match unless the query is flexible.
        if !location_matches(&query.location, record) {
            continue;
        }
        // 3. Presentation: strict Y gate.
        let presentation = record.eligibility(&treats);
        if !presentation.treats() {
            continue;
        }
        // 4. Age group: strict Y gate.
        if !record.eligibility(query.age_group.column()).treats() {
            continue;
        }
        // 5. Funding: MHCP is universal, everything else needs Y.
        let funding = record.eligibility(query.funding_source.column());
        if !funding_accepted(query.funding_source, funding) {
            continue;
        }

        let (match_score, match_details) =
            rank::score_candidate(presentation, funding, query.funding_source);
        results.push(MatchResult {
            name: record.name().unwrap_or(UNKNOWN_VALUE).to_string(),
            profession: record.profession().to_string(),
            gender: record.gender().to_string(),
            location: record.primary_location().to_string(),
            service_type: record.get(&service_type).unwrap_or(UNKNOWN_VALUE).to_string(),
            notes: record.get(&notes).map(str::to_string),
            match_score,
            match_details,
            availability_status: resolved.status,
            available_from_date: resolved.available_from_date,
            availability_notes: resolved.notes,
        });
    }

    rank::sort_results(&mut results);
    debug!(
        candidates = records.len(),
        matches = results.len(),
        presentation = %query.presentation,
        location = %query.location,
        "match complete"
    );
    results
}

fn location_matches(queried: &str, record: &ClinicianRecord) -> bool {
    queried == FLEXIBLE_LOCATION || record.primary_location() == queried
}

fn funding_accepted(source: FundingSource, value: Eligibility) -> bool {
    source.is_universal() || value.treats()
}
