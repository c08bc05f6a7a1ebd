use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::columns::{NAME_COLUMN, UNKNOWN_VALUE};
use crate::enums::{AvailabilityStatus, Eligibility};

/// One clinician's attribute profile, derived from one roster row.
///
/// The roster schema is dynamic, so a record is a flat map from normalized
/// column name to cell value rather than a fixed struct. Blank cells are
/// stored as the empty marker so every record carries the full column set;
/// accessors treat absent and empty identically.
///
/// Precondition (documented, not enforced): clinician names are unique
/// within a roster. Override merging is keyed by name and becomes ambiguous
/// otherwise; ingestion warns on duplicates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClinicianRecord {
    #[serde(flatten)]
    fields: BTreeMap<String, String>,
}

impl ClinicianRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Look up a cell. Absent and blank cells both yield `None`.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .get(column)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    pub fn set(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(column.into(), value.into());
    }

    /// Column names present on this record, in lexicographic order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.get(NAME_COLUMN)
    }

    pub fn profession(&self) -> &str {
        self.get("profession").unwrap_or(UNKNOWN_VALUE)
    }

    pub fn gender(&self) -> &str {
        self.get("gender").unwrap_or(UNKNOWN_VALUE)
    }

    pub fn primary_location(&self) -> &str {
        self.get("primary_location").unwrap_or(UNKNOWN_VALUE)
    }

    pub fn availability_status(&self) -> AvailabilityStatus {
        self.get("availability_status")
            .map(AvailabilityStatus::from_cell)
            .unwrap_or_default()
    }

    pub fn available_from_date(&self) -> Option<&str> {
        self.get("available_from_date")
    }

    pub fn availability_notes(&self) -> Option<&str> {
        self.get("availability_notes")
    }

    /// Decode the tri-state eligibility flag stored under `column`.
    pub fn eligibility(&self, column: &str) -> Eligibility {
        Eligibility::from_cell(self.get(column))
    }
}
