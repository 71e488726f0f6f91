//! Solver error type.

use thiserror::Error;

use tl_core::CoreError;

/// Errors raised by [`solve`](crate::solve).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("invalid solver configuration: {0}")]
    Config(#[from] CoreError),
}

/// Shorthand result type for `tl-schedule`.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
