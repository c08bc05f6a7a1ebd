//! Conversion of a raw table into clinician records.

use std::collections::BTreeSet;
use std::path::Path;

use tracing::{debug, warn};

use triage_model::ClinicianRecord;

use crate::csv_table::{read_roster_table, RosterTable};
use crate::error::{IngestError, Result};

/// Build clinician records from a normalized table.
///
/// Every header is carried on every record; blank cells keep the canonical
/// empty marker so schema introspection can derive the column set from any
/// record. Rows with no clinician name cannot be addressed by overrides and
/// are skipped with a warning; duplicate names are a roster precondition
/// violation and warn but are kept (fail soft).
pub fn records_from_table(table: &RosterTable) -> Vec<ClinicianRecord> {
    let mut records = Vec::with_capacity(table.rows.len());
    let mut seen_names: BTreeSet<String> = BTreeSet::new();

    for (row_index, row) in table.rows.iter().enumerate() {
        let mut record = ClinicianRecord::new();
        for (header, value) in table.headers.iter().zip(row) {
            if header.is_empty() {
                continue;
            }
            record.set(header.clone(), value.trim().to_string());
        }

        let Some(name) = record.name().map(str::to_string) else {
            warn!(row = row_index + 1, "skipping roster row without a clinician name");
            continue;
        };
        if !seen_names.insert(name.clone()) {
            warn!(
                clinician = %name,
                "duplicate clinician name in roster; availability overrides will be ambiguous"
            );
        }
        records.push(record);
    }
    records
}

/// Read a roster file end to end: raw table, then records.
///
/// A roster with headers but no usable clinician rows is an ingestion
/// error; the caller leaves any prior snapshot untouched.
pub fn read_roster_file(path: &Path) -> Result<Vec<ClinicianRecord>> {
    let table = read_roster_table(path)?;
    debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.rows.len(),
        "roster table read"
    );
    let records = records_from_table(&table);
    if records.is_empty() {
        return Err(IngestError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv_table::RosterTable;

    fn table(headers: &[&str], rows: &[&[&str]]) -> RosterTable {
        RosterTable {
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn blank_cells_read_as_absent_but_keep_their_column() {
        let table = table(
            &["clinician_name", "profession", "anxiety_treats"],
            &[&["Dr Example", "", "Y"]],
        );
        let records = records_from_table(&table);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("profession"), None);
        assert_eq!(records[0].get("anxiety_treats"), Some("Y"));
        // The blank column is still part of the record's schema
        assert!(records[0].columns().any(|column| column == "profession"));
    }

    #[test]
    fn unnamed_rows_are_skipped() {
        let table = table(
            &["clinician_name", "anxiety_treats"],
            &[&["", "Y"], &["Dr Example", "Y"]],
        );
        let records = records_from_table(&table);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name(), Some("Dr Example"));
    }

    #[test]
    fn duplicate_names_are_kept() {
        let table = table(
            &["clinician_name"],
            &[&["Dr Example"], &["Dr Example"]],
        );
        assert_eq!(records_from_table(&table).len(), 2);
    }
}
