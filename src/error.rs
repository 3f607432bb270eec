//! Error types for hoa-explore

use thiserror::Error;

/// Main error type for hoa-explore operations
///
/// Lookup failures never surface here; the prediction client folds them
/// into [`crate::predict::Outcome::Failed`].
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),
}

/// Result type alias for hoa-explore operations
pub type Result<T> = std::result::Result<T, Error>;
