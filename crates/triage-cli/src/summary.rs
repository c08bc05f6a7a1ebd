//! Terminal rendering of match results and roster listings.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use triage_core::{ClinicianListing, RosterSummary};
use triage_model::{AgeGroup, AvailabilityStatus, FundingSource, MatchQuery, MatchResult};

pub fn print_matches(query: &MatchQuery, matches: &[MatchResult]) {
    println!(
        "Matches for {} / {} / {} / {}: {}",
        query.age_group.label(),
        query.presentation,
        query.funding_source.label(),
        query.location,
        matches.len()
    );
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Profession"),
        header_cell("Gender"),
        header_cell("Location"),
        header_cell("Service Type"),
        header_cell("Score"),
        header_cell("Availability"),
        header_cell("Available From"),
        header_cell("Notes"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 5, CellAlignment::Right);
    for result in matches {
        let mut notes = Vec::new();
        notes.extend(result.match_details.iter().cloned());
        if let Some(presentation_notes) = &result.notes {
            notes.push(presentation_notes.clone());
        }
        if let Some(availability_notes) = &result.availability_notes {
            notes.push(availability_notes.clone());
        }
        let joined = notes.join("; ");
        table.add_row(vec![
            Cell::new(&result.name).add_attribute(Attribute::Bold),
            Cell::new(&result.profession),
            Cell::new(&result.gender),
            Cell::new(&result.location),
            Cell::new(&result.service_type),
            score_cell(result.match_score),
            status_cell(result.availability_status),
            optional_cell(result.available_from_date.as_deref()),
            optional_cell(if joined.is_empty() {
                None
            } else {
                Some(joined.as_str())
            }),
        ]);
    }
    println!("{table}");
}

pub fn print_facets(
    presentations: &[String],
    age_groups: &[AgeGroup],
    funding_sources: &[FundingSource],
    locations: &[String],
) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Facet"),
        header_cell("Id"),
        header_cell("Label"),
    ]);
    apply_table_style(&mut table);
    for group in age_groups {
        table.add_row(vec![
            Cell::new("age group"),
            Cell::new(group.id()),
            Cell::new(group.label()),
        ]);
    }
    for source in funding_sources {
        table.add_row(vec![
            Cell::new("funding"),
            Cell::new(source.id()),
            Cell::new(source.label()),
        ]);
    }
    println!("{table}");

    if presentations.is_empty() {
        println!("Presentations: none (no roster ingested)");
    } else {
        println!("Presentations: {}", presentations.join(", "));
    }
    println!("Locations: {}", locations.join(", "));
}

pub fn print_roster(
    summary: Option<&RosterSummary>,
    grouped: &[(String, Vec<ClinicianListing>)],
) {
    match summary {
        Some(summary) => {
            println!(
                "Roster: {} clinicians, ingested {} (digest {}), {} override(s)",
                summary.count,
                summary.ingested_at.format("%Y-%m-%d %H:%M:%S UTC"),
                &summary.source_digest[..12.min(summary.source_digest.len())],
                summary.override_count
            );
        }
        None => {
            println!("No roster has been ingested yet.");
            return;
        }
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Location"),
        header_cell("Name"),
        header_cell("Profession"),
        header_cell("Gender"),
        header_cell("Availability"),
        header_cell("Available From"),
        header_cell("Notes"),
    ]);
    apply_table_style(&mut table);
    for (location, listings) in grouped {
        for listing in listings {
            table.add_row(vec![
                Cell::new(location),
                Cell::new(&listing.name).add_attribute(Attribute::Bold),
                Cell::new(&listing.profession),
                Cell::new(&listing.gender),
                status_cell(listing.availability_status),
                optional_cell(listing.available_from_date.as_deref()),
                optional_cell(listing.availability_notes.as_deref()),
            ]);
        }
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn score_cell(score: u8) -> Cell {
    if score == 100 {
        Cell::new(score).fg(Color::Green)
    } else {
        Cell::new(score).fg(Color::Yellow)
    }
}

fn status_cell(status: AvailabilityStatus) -> Cell {
    match status {
        AvailabilityStatus::Available => Cell::new(status).fg(Color::Green),
        AvailabilityStatus::Unknown => Cell::new(status).fg(Color::DarkGrey),
        AvailabilityStatus::Unavailable | AvailabilityStatus::Closed => {
            Cell::new(status).fg(Color::Red)
        }
    }
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) if !value.is_empty() => Cell::new(value),
        _ => Cell::new("-").fg(Color::DarkGrey),
    }
}
