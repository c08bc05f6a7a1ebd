use serde::{Deserialize, Serialize};

use crate::catalog::{AgeGroup, FundingSource};
use crate::enums::AvailabilityStatus;

/// One triage search: all four criteria are required.
///
/// Presentation and location are roster-driven strings; callers should offer
/// only values the introspection functions currently list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchQuery {
    pub age_group: AgeGroup,
    pub presentation: String,
    pub funding_source: FundingSource,
    pub location: String,
}

/// One eligible clinician, scored and annotated for display.
/// Ephemeral: recomputed per query, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub name: String,
    pub profession: String,
    pub gender: String,
    pub location: String,
    pub service_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub match_score: u8,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub match_details: Vec<String>,
    pub availability_status: AvailabilityStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_from_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_notes: Option<String>,
}
