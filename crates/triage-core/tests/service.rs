//! Service-level integration: ingest from disk, query, override, re-ingest.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use triage_core::TriageService;
use triage_model::{AgeGroup, AvailabilityStatus, FundingSource, MatchQuery};

const ROSTER_V1: &str = "\
clinician_name,profession,gender,primary_location,availability_status,anxiety_treats,anxiety_service_type,depression_treats,age_18_plus,age_12_18,ndis,mhcp
Dr A,Clinical Psychologist,F,Sippy Downs,Available,Y,Individual,Y,Y,,Y,Y
Dr B,Psychologist,M,Maroochydore,Available,Y,,N,Y,Y,,Y
Dr C,Psychologist,F,Noosa,Unavailable,Y,,Y,Y,,Y,Y
";

const ROSTER_V2: &str = "\
clinician_name,profession,gender,primary_location,availability_status,anxiety_treats,age_18_plus,ndis
Dr A,Clinical Psychologist,F,Sippy Downs,Available,Y,Y,Y
";

fn write_roster(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write roster");
    path
}

fn anxiety_adult_query(location: &str) -> MatchQuery {
    MatchQuery {
        age_group: AgeGroup::EighteenPlus,
        presentation: "Anxiety".to_string(),
        funding_source: FundingSource::Mhcp,
        location: location.to_string(),
    }
}

#[test]
fn before_any_ingestion_everything_is_empty() {
    let dir = TempDir::new().expect("temp dir");
    let service = TriageService::open(dir.path().join("data"));

    assert!(service.presentations().expect("presentations").is_empty());
    assert_eq!(
        service.locations().expect("locations"),
        vec!["Maroochydore", "Sippy Downs", "Flexible"]
    );
    assert!(service
        .find_matches(&anxiety_adult_query("Flexible"))
        .expect("match")
        .is_empty());
    assert!(service.roster_summary().expect("summary").is_none());
}

#[test]
fn ingest_then_introspect_then_match() {
    let dir = TempDir::new().expect("temp dir");
    let service = TriageService::open(dir.path().join("data"));
    let roster = write_roster(&dir, "roster.csv", ROSTER_V1);

    let report = service.ingest_roster(&roster).expect("ingest");
    assert_eq!(report.count, 3);
    assert_eq!(report.source_digest.len(), 64);

    assert_eq!(
        service.presentations().expect("presentations"),
        vec!["Anxiety", "Depression"]
    );
    assert_eq!(
        service.locations().expect("locations"),
        vec!["Maroochydore", "Sippy Downs", "Flexible", "Noosa"]
    );

    // Dr C is Unavailable; Dr A and Dr B both match under Flexible/MHCP.
    let results = service
        .find_matches(&anxiety_adult_query("Flexible"))
        .expect("match");
    let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Dr A", "Dr B"]);
    assert_eq!(results[0].service_type, "Individual");

    let summary = service
        .roster_summary()
        .expect("summary")
        .expect("summary present");
    assert_eq!(summary.count, 3);
    assert_eq!(summary.override_count, 0);
}

#[test]
fn failed_ingestion_leaves_the_snapshot_untouched() {
    let dir = TempDir::new().expect("temp dir");
    let service = TriageService::open(dir.path().join("data"));
    let good = write_roster(&dir, "good.csv", ROSTER_V1);
    let empty = write_roster(&dir, "empty.csv", "clinician_name,anxiety_treats\n");

    service.ingest_roster(&good).expect("ingest good roster");
    assert!(service.ingest_roster(&empty).is_err());

    let summary = service
        .roster_summary()
        .expect("summary")
        .expect("summary present");
    assert_eq!(summary.count, 3);
}

#[test]
fn override_excludes_then_survives_reingestion() {
    let dir = TempDir::new().expect("temp dir");
    let service = TriageService::open(dir.path().join("data"));
    let v1 = write_roster(&dir, "v1.csv", ROSTER_V1);
    let v2 = write_roster(&dir, "v2.csv", ROSTER_V2);

    service.ingest_roster(&v1).expect("ingest v1");
    service
        .set_availability("Dr A", AvailabilityStatus::Closed, None, Some("leave".into()))
        .expect("set override");

    let results = service
        .find_matches(&anxiety_adult_query("Sippy Downs"))
        .expect("match");
    assert!(results.is_empty(), "closed override must exclude Dr A");

    // Replacing the roster does not clear the override: it is keyed by
    // name, not row position.
    service.ingest_roster(&v2).expect("ingest v2");
    let results = service
        .find_matches(&anxiety_adult_query("Sippy Downs"))
        .expect("match");
    assert!(results.is_empty());

    service
        .set_availability("Dr A", AvailabilityStatus::Available, None, None)
        .expect("reopen");
    let results = service
        .find_matches(&anxiety_adult_query("Sippy Downs"))
        .expect("match");
    assert_eq!(results.len(), 1);
}

#[test]
fn set_availability_requires_a_known_clinician() {
    let dir = TempDir::new().expect("temp dir");
    let service = TriageService::open(dir.path().join("data"));

    // No roster at all
    assert!(service
        .set_availability("Dr A", AvailabilityStatus::Closed, None, None)
        .is_err());

    let roster = write_roster(&dir, "roster.csv", ROSTER_V1);
    service.ingest_roster(&roster).expect("ingest");

    assert!(service
        .set_availability("Dr Nobody", AvailabilityStatus::Closed, None, None)
        .is_err());
    assert!(service
        .set_availability("Dr A", AvailabilityStatus::Closed, None, None)
        .is_ok());
}

#[test]
fn roster_listing_groups_by_location_with_effective_availability() {
    let dir = TempDir::new().expect("temp dir");
    let service = TriageService::open(dir.path().join("data"));
    let roster = write_roster(&dir, "roster.csv", ROSTER_V1);
    service.ingest_roster(&roster).expect("ingest");
    service
        .set_availability("Dr B", AvailabilityStatus::Closed, None, None)
        .expect("override");

    let grouped = service.clinicians_by_location().expect("listing");
    let locations: Vec<&str> = grouped.iter().map(|(loc, _)| loc.as_str()).collect();
    assert_eq!(locations, vec!["Maroochydore", "Noosa", "Sippy Downs"]);

    let (_, maroochydore) = &grouped[0];
    assert_eq!(maroochydore[0].name, "Dr B");
    assert_eq!(
        maroochydore[0].availability_status,
        AvailabilityStatus::Closed
    );
}
