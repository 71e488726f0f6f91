//! Configuration error type.

use thiserror::Error;

/// Errors raised while validating planner configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("min_scheduled_time ({min}) must be strictly less than max_scheduled_time ({max})")]
    EmptyTimeRange { min: u64, max: u64 },
}

/// Shorthand result type for `tl-core`.
pub type CoreResult<T> = Result<T, CoreError>;
