//! Derived column keys.
//!
//! The roster schema is not fixed: which presentations exist is inferred
//! from whichever `*_treats` columns the uploaded spreadsheet carries. The
//! mapping between a presentation's display name and its column keys lives
//! here so every component derives them the same way.

/// Roster column holding the clinician's unique name.
pub const NAME_COLUMN: &str = "clinician_name";

/// Suffix of per-presentation eligibility columns.
pub const TREATS_SUFFIX: &str = "_treats";

/// Suffix of per-presentation service type columns.
pub const SERVICE_TYPE_SUFFIX: &str = "_service_type";

/// Suffix of per-presentation notes columns.
pub const NOTES_SUFFIX: &str = "_notes";

/// Canonical placeholder for absent descriptive fields.
pub const UNKNOWN_VALUE: &str = "Unknown";

fn presentation_key(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

/// Eligibility column for a presentation display name.
/// `"Eating Disorders"` -> `"eating_disorders_treats"`.
pub fn treats_column(presentation: &str) -> String {
    format!("{}{}", presentation_key(presentation), TREATS_SUFFIX)
}

/// Service type column for a presentation display name.
pub fn service_type_column(presentation: &str) -> String {
    format!("{}{}", presentation_key(presentation), SERVICE_TYPE_SUFFIX)
}

/// Notes column for a presentation display name.
pub fn notes_column(presentation: &str) -> String {
    format!("{}{}", presentation_key(presentation), NOTES_SUFFIX)
}

/// Recover the human label from an eligibility column name, or `None` when
/// the column is not a `*_treats` column.
/// `"eating_disorders_treats"` -> `"Eating Disorders"`.
pub fn presentation_label(column: &str) -> Option<String> {
    let stem = column.strip_suffix(TREATS_SUFFIX)?;
    if stem.is_empty() {
        return None;
    }
    Some(title_case(&stem.replace('_', " ")))
}

/// Title-case every whitespace-separated word: first letter uppercased,
/// the rest lowercased.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for (idx, word) in text.split(' ').enumerate() {
        if idx > 0 {
            out.push(' ');
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.extend(chars.flat_map(char::to_lowercase));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_column_keys_from_display_name() {
        assert_eq!(treats_column("Anxiety"), "anxiety_treats");
        assert_eq!(treats_column("Eating Disorders"), "eating_disorders_treats");
        assert_eq!(
            service_type_column("Eating Disorders"),
            "eating_disorders_service_type"
        );
        assert_eq!(notes_column("Eating Disorders"), "eating_disorders_notes");
    }

    #[test]
    fn label_round_trips_through_column_key() {
        assert_eq!(
            presentation_label("eating_disorders_treats").as_deref(),
            Some("Eating Disorders")
        );
        assert_eq!(presentation_label("anxiety_treats").as_deref(), Some("Anxiety"));
        assert_eq!(treats_column("Eating Disorders"), "eating_disorders_treats");
    }

    #[test]
    fn non_treats_columns_have_no_label() {
        assert_eq!(presentation_label("primary_location"), None);
        assert_eq!(presentation_label("anxiety_notes"), None);
        assert_eq!(presentation_label("_treats"), None);
    }

    #[test]
    fn title_case_lowercases_the_tail() {
        // Matches the label derivation used for display lists: acronym
        // casing is not preserved.
        assert_eq!(presentation_label("adhd_treats").as_deref(), Some("Adhd"));
        assert_eq!(presentation_label("ptsd_treats").as_deref(), Some("Ptsd"));
    }
}
