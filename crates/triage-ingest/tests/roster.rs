use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use triage_ingest::{IngestError, read_roster_file, read_roster_table};
use triage_model::{AvailabilityStatus, Eligibility};

fn write_roster(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write roster");
    path
}

#[test]
fn reads_a_plain_roster() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_roster(
        &dir,
        "roster.csv",
        "clinician_name,profession,primary_location,availability_status,anxiety_treats,age_18_plus,mhcp\n\
         Dr A,Psychologist,Sippy Downs,Available,Y,Y,Y\n\
         Dr B,Psychologist,Maroochydore,Closed,Conditional,Y,\n",
    );

    let records = read_roster_file(&path).expect("read roster");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name(), Some("Dr A"));
    assert_eq!(records[0].primary_location(), "Sippy Downs");
    assert_eq!(records[0].availability_status(), AvailabilityStatus::Available);
    assert_eq!(records[0].eligibility("anxiety_treats"), Eligibility::Treats);
    assert_eq!(records[1].availability_status(), AvailabilityStatus::Closed);
    assert_eq!(
        records[1].eligibility("anxiety_treats"),
        Eligibility::Conditional
    );
    // Blank mhcp cell reads as absent
    assert_eq!(records[1].get("mhcp"), None);
}

#[test]
fn spreadsheet_banner_rows_are_skipped() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_roster(
        &dir,
        "roster.csv",
        "Clinic Roster Export,,,\n\
         clinician_name,profession,primary_location,anxiety_treats\n\
         Dr A,Psychologist,Sippy Downs,Y\n",
    );

    let table = read_roster_table(&path).expect("read table");
    assert_eq!(
        table.headers,
        vec!["clinician_name", "profession", "primary_location", "anxiety_treats"]
    );
    assert_eq!(table.rows.len(), 1);

    let records = read_roster_file(&path).expect("read roster");
    assert_eq!(records[0].name(), Some("Dr A"));
}

#[test]
fn spaced_headers_normalize_to_column_keys() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_roster(
        &dir,
        "roster.csv",
        "Clinician Name,Primary Location\nDr A,Sippy Downs\n",
    );

    let records = read_roster_file(&path).expect("read roster");
    assert_eq!(records[0].name(), Some("Dr A"));
    assert_eq!(records[0].primary_location(), "Sippy Downs");
}

#[test]
fn empty_roster_is_an_ingestion_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_roster(&dir, "roster.csv", "clinician_name,anxiety_treats\n");

    match read_roster_file(&path) {
        Err(IngestError::Empty { .. }) => {}
        other => panic!("expected Empty error, got {other:?}"),
    }
}

#[test]
fn unreadable_roster_is_an_ingestion_error() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("missing.csv");

    assert!(read_roster_file(&path).is_err());
}

#[test]
fn short_rows_are_padded_to_header_width() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_roster(
        &dir,
        "roster.csv",
        "clinician_name,profession,anxiety_treats\nDr A,Psychologist\n",
    );

    let records = read_roster_file(&path).expect("read roster");
    assert_eq!(records[0].get("anxiety_treats"), None);
    assert_eq!(records[0].eligibility("anxiety_treats"), Eligibility::No);
}
