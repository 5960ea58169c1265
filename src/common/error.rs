use thiserror::Error;

/// Error types surfaced by the stats date layer
#[derive(Error, Debug)]
pub enum StatsRangesError {
    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),

    #[error("Unknown granularity: {0}")]
    UnknownGranularity(String),
}

/// Result type for stats date operations
pub type Result<T> = std::result::Result<T, StatsRangesError>;
