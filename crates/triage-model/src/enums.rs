use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Clinician availability as recorded in the roster or an override.
///
/// `Unavailable` and `Closed` exclude a clinician from matching; `Unknown`
/// does not. Missing data fails open toward showing more options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AvailabilityStatus {
    Available,
    Unavailable,
    Closed,
    #[default]
    Unknown,
}

impl AvailabilityStatus {
    /// Decode a roster cell. Anything unrecognized maps to `Unknown`
    /// rather than failing; spreadsheets are best-effort input.
    pub fn from_cell(raw: &str) -> Self {
        Self::from_str(raw).unwrap_or(Self::Unknown)
    }

    /// Returns true if this status removes the clinician from matching.
    pub fn is_excluded(&self) -> bool {
        matches!(self, Self::Unavailable | Self::Closed)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Unavailable => "Unavailable",
            Self::Closed => "Closed",
            Self::Unknown => "Unknown",
        }
    }

    /// All statuses an administrator may set.
    pub const fn all() -> &'static [AvailabilityStatus] {
        &[
            Self::Available,
            Self::Unavailable,
            Self::Closed,
            Self::Unknown,
        ]
    }
}

impl fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AvailabilityStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("AVAILABLE") {
            Ok(Self::Available)
        } else if trimmed.eq_ignore_ascii_case("UNAVAILABLE") {
            Ok(Self::Unavailable)
        } else if trimmed.eq_ignore_ascii_case("CLOSED") {
            Ok(Self::Closed)
        } else if trimmed.eq_ignore_ascii_case("UNKNOWN") {
            Ok(Self::Unknown)
        } else {
            Err(ModelError::UnknownAvailabilityStatus(trimmed.to_string()))
        }
    }
}

/// Tri-state eligibility of a clinician for a presentation, age group or
/// funding source.
///
/// Cell decoding is strict: exactly `Y` means treats, exactly `Conditional`
/// means treats with caveats, everything else (including absent cells) means
/// does not treat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Eligibility {
    Treats,
    Conditional,
    #[default]
    No,
}

impl Eligibility {
    pub fn from_cell(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("Y") => Self::Treats,
            Some("Conditional") => Self::Conditional,
            _ => Self::No,
        }
    }

    /// Returns true only for an unconditional `Y`. This is the inclusion
    /// gate used by the match engine.
    pub fn treats(&self) -> bool {
        matches!(self, Self::Treats)
    }

    pub fn is_conditional(&self) -> bool {
        matches!(self, Self::Conditional)
    }
}
