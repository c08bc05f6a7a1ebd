use tempfile::TempDir;

use triage_model::{AvailabilityStatus, ClinicianRecord};
use triage_store::{
    AvailabilityOverride, OverrideStore, RosterSnapshot, SnapshotStore,
};

fn record(name: &str) -> ClinicianRecord {
    ClinicianRecord::from_fields([("clinician_name", name), ("anxiety_treats", "Y")])
}

#[test]
fn snapshot_replace_then_load_round_trips() {
    let dir = TempDir::new().expect("temp dir");
    let store = SnapshotStore::new(dir.path());

    assert!(store.load().expect("load").is_none());

    let snapshot = RosterSnapshot::new(vec![record("Dr A"), record("Dr B")], b"csv bytes");
    store.replace(&snapshot).expect("replace");

    let loaded = store.load().expect("load").expect("snapshot present");
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded.source_digest, snapshot.source_digest);
    assert_eq!(loaded.records[0].name(), Some("Dr A"));
}

#[test]
fn snapshot_replacement_is_wholesale() {
    let dir = TempDir::new().expect("temp dir");
    let store = SnapshotStore::new(dir.path());

    store
        .replace(&RosterSnapshot::new(vec![record("Dr A")], b"v1"))
        .expect("replace v1");
    store
        .replace(&RosterSnapshot::new(vec![record("Dr C")], b"v2"))
        .expect("replace v2");

    let loaded = store.load().expect("load").expect("snapshot present");
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded.records[0].name(), Some("Dr C"));
}

#[test]
fn missing_override_document_is_empty() {
    let dir = TempDir::new().expect("temp dir");
    let store = OverrideStore::new(dir.path());

    assert!(store.load().expect("load").is_empty());
    assert!(store.load_or_default().is_empty());
}

#[test]
fn set_override_persists_and_replaces() {
    let dir = TempDir::new().expect("temp dir");
    let store = OverrideStore::new(dir.path());

    store
        .set(
            "Dr A",
            AvailabilityOverride::new(AvailabilityStatus::Unavailable, None, None),
        )
        .expect("set");
    store
        .set(
            "Dr A",
            AvailabilityOverride::new(
                AvailabilityStatus::Available,
                Some("2026-09-01".to_string()),
                None,
            ),
        )
        .expect("replace");

    let overrides = store.load().expect("load");
    assert_eq!(overrides.len(), 1);
    let entry = overrides.get("Dr A").expect("entry");
    assert_eq!(entry.status, AvailabilityStatus::Available);
    assert_eq!(entry.available_from_date.as_deref(), Some("2026-09-01"));
}

#[test]
fn overrides_survive_roster_replacement() {
    let dir = TempDir::new().expect("temp dir");
    let snapshots = SnapshotStore::new(dir.path());
    let overrides = OverrideStore::new(dir.path());

    snapshots
        .replace(&RosterSnapshot::new(vec![record("Dr A")], b"v1"))
        .expect("replace v1");
    overrides
        .set(
            "Dr A",
            AvailabilityOverride::new(AvailabilityStatus::Closed, None, None),
        )
        .expect("set override");

    // Re-ingesting the roster must not touch the override document.
    snapshots
        .replace(&RosterSnapshot::new(vec![record("Dr A")], b"v2"))
        .expect("replace v2");

    let loaded = overrides.load().expect("load");
    assert_eq!(
        loaded.get("Dr A").map(|entry| entry.status),
        Some(AvailabilityStatus::Closed)
    );
}

#[test]
fn corrupt_override_document_degrades_to_empty() {
    let dir = TempDir::new().expect("temp dir");
    let store = OverrideStore::new(dir.path());
    std::fs::write(store.overrides_path(), b"{not json").expect("write corrupt file");

    assert!(store.load().is_err());
    assert!(store.load_or_default().is_empty());
}
