//! Domain-fixed query facets.
//!
//! Age groups and funding sources are clinical policy categories, not roster
//! data: every bracket and source is always offered regardless of what the
//! current spreadsheet contains. Presentations, by contrast, are derived
//! from the roster columns (see `triage-core`). That asymmetry is
//! deliberate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Fixed patient age brackets.
///
/// The stable id doubles as the roster eligibility column for the bracket
/// (e.g. `age_18_plus` holds `Y` when the clinician sees adults).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    ZeroToSix,
    SixToTwelve,
    TwelveToEighteen,
    EighteenPlus,
    SeventyPlus,
}

impl AgeGroup {
    pub const fn id(&self) -> &'static str {
        match self {
            Self::ZeroToSix => "age_0_6",
            Self::SixToTwelve => "age_6_12",
            Self::TwelveToEighteen => "age_12_18",
            Self::EighteenPlus => "age_18_plus",
            Self::SeventyPlus => "age_70_plus",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::ZeroToSix => "0-6 years",
            Self::SixToTwelve => "6-12 years",
            Self::TwelveToEighteen => "12-18 years",
            Self::EighteenPlus => "18+ years",
            Self::SeventyPlus => "70+ years",
        }
    }

    /// The roster column holding this bracket's eligibility flag.
    pub const fn column(&self) -> &'static str {
        self.id()
    }

    pub const fn all() -> &'static [AgeGroup] {
        &[
            Self::ZeroToSix,
            Self::SixToTwelve,
            Self::TwelveToEighteen,
            Self::EighteenPlus,
            Self::SeventyPlus,
        ]
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|group| group.id() == id.trim())
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for AgeGroup {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| ModelError::UnknownAgeGroup(s.trim().to_string()))
    }
}

/// Fixed funding sources accepted across the clinic.
///
/// `Mhcp` (Medicare Mental Health Care Plan) is universally accepted: every
/// clinician passes the funding gate for it regardless of the roster field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FundingSource {
    Mhcp,
    Ndis,
    Dva,
    WorkersCompensation,
    Qps,
    Eap,
    Private,
}

impl FundingSource {
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Mhcp => "mhcp",
            Self::Ndis => "ndis",
            Self::Dva => "dva",
            Self::WorkersCompensation => "wc",
            Self::Qps => "qps",
            Self::Eap => "eap",
            Self::Private => "private",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Mhcp => "MHCP",
            Self::Ndis => "NDIS",
            Self::Dva => "DVA",
            Self::WorkersCompensation => "Workers Compensation",
            Self::Qps => "QPS",
            Self::Eap => "EAP",
            Self::Private => "Private",
        }
    }

    /// The roster column holding this source's acceptance flag.
    pub const fn column(&self) -> &'static str {
        self.id()
    }

    /// Returns true for the source every clinician is treated as accepting.
    pub const fn is_universal(&self) -> bool {
        matches!(self, Self::Mhcp)
    }

    pub const fn all() -> &'static [FundingSource] {
        &[
            Self::Mhcp,
            Self::Ndis,
            Self::Dva,
            Self::WorkersCompensation,
            Self::Qps,
            Self::Eap,
            Self::Private,
        ]
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|source| source.id() == id.trim())
    }
}

impl fmt::Display for FundingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for FundingSource {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| ModelError::UnknownFundingSource(s.trim().to_string()))
    }
}
