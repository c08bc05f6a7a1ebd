//! Raw tabular reading.
//!
//! Clinic rosters are exported from spreadsheets and routinely carry a
//! banner or title row above the real header, so the header row is detected
//! rather than assumed to be first. Headers are normalized to the
//! snake_case keys the rest of the system derives column names in.

use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

/// A roster file reduced to normalized headers plus string rows.
/// Rows are padded or truncated to the header width.
#[derive(Debug, Clone)]
pub struct RosterTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Normalize a header cell to a snake_case column key:
/// trim, strip BOM, lowercase, collapse whitespace runs to `_`.
fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut normalized = String::with_capacity(trimmed.len());
    let mut parts = trimmed.split_whitespace();
    if let Some(first) = parts.next() {
        normalized.push_str(&first.to_lowercase());
        for part in parts {
            normalized.push('_');
            normalized.push_str(&part.to_lowercase());
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Per-row shape statistics used by header detection.
#[derive(Debug, Default, Clone, Copy)]
struct RowShape {
    total: usize,
    non_empty: usize,
    identifier: usize,
}

impl RowShape {
    fn non_empty_ratio(self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.non_empty as f64 / self.total as f64
        }
    }

    fn identifier_ratio(self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.identifier as f64 / self.total as f64
        }
    }
}

fn row_shape(row: &[String]) -> RowShape {
    let mut shape = RowShape {
        total: row.len(),
        ..RowShape::default()
    };
    for cell in row {
        let trimmed = cell.trim();
        if trimmed.is_empty() {
            continue;
        }
        shape.non_empty += 1;
        if is_column_key_like(trimmed) {
            shape.identifier += 1;
        }
    }
    shape
}

/// True for cells shaped like column keys: `clinician_name`,
/// `anxiety_treats`, `age_18_plus`. Data cells ("Sippy Downs", "Y",
/// "Dr Example") rarely qualify across a whole row.
fn is_column_key_like(value: &str) -> bool {
    if value.contains(' ') {
        return false;
    }
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return false;
    }
    chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

/// Pick the header row among the leading rows: the first row that is
/// mostly key-shaped and fully populated. Banner rows are sparse and
/// spaced; data rows carry spaced values ("Sippy Downs", "Dr Example")
/// and blank eligibility cells. When nothing qualifies, the first row is
/// the header.
fn detect_header_row(rows: &[Vec<String>]) -> usize {
    let probe = rows.len().min(4);
    for (idx, row) in rows.iter().take(probe).enumerate() {
        let shape = row_shape(row);
        if shape.identifier_ratio() >= 0.6 && shape.non_empty_ratio() >= 0.8 {
            return idx;
        }
    }
    0
}

/// Read a roster CSV into a normalized table.
///
/// Fully blank rows are skipped; every data row is sized to the header
/// width. An empty file yields an empty table, not an error (callers decide
/// whether that is fatal).
pub fn read_roster_table(path: &Path) -> Result<RosterTable> {
    let bytes = std::fs::read(path).map_err(|source| IngestError::io(path, source))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes.as_slice());

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::csv(path, source))?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }
    if raw_rows.is_empty() {
        return Ok(RosterTable {
            headers: Vec::new(),
            rows: Vec::new(),
        });
    }

    let header_index = detect_header_row(&raw_rows);
    let headers: Vec<String> = raw_rows[header_index]
        .iter()
        .map(|value| normalize_header(value))
        .collect();

    let mut rows = Vec::new();
    for record in raw_rows.iter().skip(header_index + 1) {
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            let value = record.get(idx).map(String::as_str).unwrap_or("");
            row.push(value.to_string());
        }
        rows.push(row);
    }
    Ok(RosterTable { headers, rows })
}
