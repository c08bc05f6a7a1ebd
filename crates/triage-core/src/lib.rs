pub mod availability;
pub mod config;
pub mod engine;
pub mod facets;
pub mod rank;
pub mod service;

pub use availability::{EffectiveAvailability, resolve};
pub use config::{CONFIG_FILE, ClinicConfig, FLEXIBLE_LOCATION};
pub use engine::find_matches;
pub use facets::{age_groups, funding_sources, list_locations, list_presentations};
pub use rank::{score_candidate, sort_results};
pub use service::{ClinicianListing, IngestReport, RosterSummary, TriageService};
