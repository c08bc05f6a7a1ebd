use anyhow::{Context, Result};

use triage_core::TriageService;
use triage_model::MatchQuery;

use crate::cli::{Cli, IngestArgs, MatchArgs, SetAvailabilityArgs};
use crate::summary::{print_facets, print_matches, print_roster};

fn open_service(cli: &Cli) -> TriageService {
    TriageService::open(&cli.data_dir)
}

pub fn run_ingest(cli: &Cli, args: &IngestArgs) -> Result<()> {
    let service = open_service(cli);
    let report = service.ingest_roster(&args.file)?;
    println!(
        "Ingested {} clinicians from {}",
        report.count,
        args.file.display()
    );
    println!("Snapshot digest: {}", report.source_digest);
    Ok(())
}

pub fn run_facets(cli: &Cli) -> Result<()> {
    let service = open_service(cli);
    let presentations = service.presentations()?;
    let locations = service.locations()?;
    print_facets(
        &presentations,
        service.age_groups(),
        service.funding_sources(),
        &locations,
    );
    Ok(())
}

pub fn run_match(cli: &Cli, args: &MatchArgs) -> Result<()> {
    let service = open_service(cli);
    let query = MatchQuery {
        age_group: args.age_group,
        presentation: args.presentation.clone(),
        funding_source: args.funding,
        location: args.location.clone(),
    };
    let matches = service.find_matches(&query)?;

    if args.json {
        let rendered =
            serde_json::to_string_pretty(&matches).context("serialize match results")?;
        println!("{rendered}");
        return Ok(());
    }
    if matches.is_empty() {
        println!("No matching clinicians found.");
        return Ok(());
    }
    print_matches(&query, &matches);
    Ok(())
}

pub fn run_set_availability(cli: &Cli, args: &SetAvailabilityArgs) -> Result<()> {
    let service = open_service(cli);
    service.set_availability(
        &args.clinician,
        args.status,
        args.available_from.clone(),
        args.notes.clone(),
    )?;
    println!("Updated availability for {}: {}", args.clinician, args.status);
    Ok(())
}

pub fn run_roster(cli: &Cli) -> Result<()> {
    let service = open_service(cli);
    let summary = service.roster_summary()?;
    let grouped = service.clinicians_by_location()?;
    print_roster(summary.as_ref(), &grouped);
    Ok(())
}
