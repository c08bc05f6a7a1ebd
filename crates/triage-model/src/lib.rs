pub mod catalog;
pub mod columns;
pub mod enums;
pub mod error;
pub mod query;
pub mod record;

pub use catalog::{AgeGroup, FundingSource};
pub use columns::{
    NAME_COLUMN, TREATS_SUFFIX, UNKNOWN_VALUE, notes_column, presentation_label,
    service_type_column, treats_column,
};
pub use enums::{AvailabilityStatus, Eligibility};
pub use error::{ModelError, Result};
pub use query::{MatchQuery, MatchResult};
pub use record::ClinicianRecord;
