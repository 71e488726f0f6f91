//! Error types for tl-io.

use thiserror::Error;

use tl_network::NetworkError;

/// Errors raised while reading a problem file or writing a schedule file.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: {msg}")]
    Parse { line: u64, msg: String },

    #[error("unexpected end of input: expected {0}")]
    Truncated(String),

    #[error("invalid network: {0}")]
    Network(#[from] NetworkError),
}

/// Alias for `Result<T, FormatError>`.
pub type FormatResult<T> = Result<T, FormatError>;
