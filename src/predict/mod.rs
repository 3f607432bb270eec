//! Prediction client
//!
//! Resolves a clicked coordinate to an [`Outcome`] by asking the HOA
//! prediction backend. Each backend is a single file implementing
//! [`PredictionBackend`].
//!
//! Transport and decoding errors never escape a lookup: they are folded into
//! [`Outcome::Failed`] so that callers only ever route outcomes.

pub mod http;

use crate::coord::Coordinates;
use serde::Serialize;
use std::future::Future;
use thiserror::Error;

/// Why a lookup could not produce an answer
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum FailureReason {
    /// Connection failed, timed out, or the backend answered non-2xx
    #[error("network error: {0}")]
    Network(String),

    /// The body was not the JSON shape the backend documents
    #[error("protocol error: {0}")]
    Protocol(String),
}

/// State of the lookup for the current click
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Outcome {
    /// No click has happened yet
    Idle,
    /// Lookup in flight
    Pending,
    /// Backend returned a probability (0-100, backend precision)
    Found { probability: f64 },
    /// Backend explicitly reported no parcel at the coordinate
    NotFound,
    /// Transport or decoding failure
    Failed { reason: FailureReason },
}

impl Outcome {
    /// Shorthand for a network failure
    pub fn network(detail: impl Into<String>) -> Self {
        Self::Failed {
            reason: FailureReason::Network(detail.into()),
        }
    }

    /// Shorthand for a protocol failure
    pub fn protocol(detail: impl Into<String>) -> Self {
        Self::Failed {
            reason: FailureReason::Protocol(detail.into()),
        }
    }

    /// True for outcomes a finished lookup can produce
    pub fn is_resolved(&self) -> bool {
        matches!(
            self,
            Self::Found { .. } | Self::NotFound | Self::Failed { .. }
        )
    }
}

/// Trait for prediction backends
///
/// A lookup issues exactly one request and never retries. Implementations
/// must only return resolved outcomes (`Found`, `NotFound`, `Failed`).
pub trait PredictionBackend: Send + Sync {
    /// Look up the HOA probability for the parcel at `coords`
    fn lookup(&self, coords: Coordinates) -> impl Future<Output = Outcome> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_resolved() {
        assert!(!Outcome::Idle.is_resolved());
        assert!(!Outcome::Pending.is_resolved());
        assert!(Outcome::Found { probability: 12.0 }.is_resolved());
        assert!(Outcome::NotFound.is_resolved());
        assert!(Outcome::network("refused").is_resolved());
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_value(Outcome::Found { probability: 73.5 }).unwrap();
        assert_eq!(json, serde_json::json!({"state": "found", "probability": 73.5}));

        let json = serde_json::to_value(Outcome::protocol("bad body")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "state": "failed",
                "reason": {"kind": "protocol", "detail": "bad body"}
            })
        );
    }

    #[test]
    fn test_failure_reason_display() {
        assert_eq!(
            FailureReason::Network("connection refused".into()).to_string(),
            "network error: connection refused"
        );
    }
}
