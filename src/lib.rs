pub mod common;
pub mod domain;
pub mod ranges;
pub mod site_time;

// Re-export commonly used types
pub use common::error::{Result, StatsRangesError};
pub use domain::*;

// Re-export external dependencies that consumers will need
pub use chrono;
pub use serde;
