use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown age group id: {0}")]
    UnknownAgeGroup(String),
    #[error("unknown funding source id: {0}")]
    UnknownFundingSource(String),
    #[error("unknown availability status: {0}")]
    UnknownAvailabilityStatus(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
