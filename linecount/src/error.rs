//! Error types for the counting library

use thiserror::Error;

/// Result type alias for the counting library
pub type Result<T> = std::result::Result<T, CountError>;

/// Errors that can occur when exporting the event log
///
/// The counting state machine itself raises no errors; all documented edge
/// cases resolve to defined defaults.
#[derive(Error, Debug)]
pub enum CountError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
