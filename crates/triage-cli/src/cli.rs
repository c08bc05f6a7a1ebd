//! CLI argument definitions for the triage tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use triage_model::{AgeGroup, AvailabilityStatus, FundingSource};

#[derive(Parser)]
#[command(
    name = "triage",
    version,
    about = "Clinic triage - match patients to eligible clinicians",
    long_about = "Match patients to clinicians by age group, presentation, funding\n\
                  source and location, against the currently ingested roster.\n\
                  Availability overrides set here supersede the roster snapshot."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding the roster snapshot and override documents.
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        default_value = "data",
        global = true
    )]
    pub data_dir: PathBuf,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Ingest a roster CSV export, replacing the current snapshot.
    Ingest(IngestArgs),

    /// List the query facets the current roster offers.
    Facets,

    /// Find and rank clinicians for a patient query.
    Match(MatchArgs),

    /// Set an availability override for a named clinician.
    SetAvailability(SetAvailabilityArgs),

    /// Show the current roster grouped by location.
    Roster,
}

#[derive(Parser)]
pub struct IngestArgs {
    /// Path to the roster CSV file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Parser)]
pub struct MatchArgs {
    /// Age group id (see `triage facets`), e.g. age_18_plus.
    #[arg(long = "age-group", value_name = "ID")]
    pub age_group: AgeGroup,

    /// Presentation name as listed by `triage facets`, e.g. "Anxiety".
    #[arg(long, value_name = "NAME")]
    pub presentation: String,

    /// Funding source id (see `triage facets`), e.g. mhcp.
    #[arg(long = "funding", value_name = "ID")]
    pub funding: FundingSource,

    /// Location, a clinic site or "Flexible".
    #[arg(long, value_name = "LOCATION")]
    pub location: String,

    /// Print results as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct SetAvailabilityArgs {
    /// Clinician name exactly as it appears in the roster.
    #[arg(value_name = "NAME")]
    pub clinician: String,

    /// New status: Available, Unavailable, Closed or Unknown.
    #[arg(long, value_name = "STATUS")]
    pub status: AvailabilityStatus,

    /// Date the clinician is next taking patients.
    #[arg(long = "available-from", value_name = "DATE")]
    pub available_from: Option<String>,

    /// Free-text note shown alongside the status.
    #[arg(long, value_name = "TEXT")]
    pub notes: Option<String>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
