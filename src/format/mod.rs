//! Output formatters
//!
//! Provides trait-based output formatting for one-shot lookup results.

pub mod json;
pub mod text;

use crate::controller::ControllerState;
use crate::coord::Coordinates;
use crate::error::Result;
use crate::predict::Outcome;
use crate::present::DisplayState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Information about an output format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Format name
    pub name: String,
    /// Format description
    pub description: String,
}

/// A finished lookup, ready to be printed
#[derive(Debug, Clone, Serialize)]
pub struct LookupReport {
    pub coordinates: Coordinates,
    pub outcome: Outcome,
    pub display: DisplayState,
    pub backend_url: String,
    pub timestamp: DateTime<Utc>,
}

impl LookupReport {
    /// Build a report from a resolved controller state
    ///
    /// Returns `None` before the first click.
    pub fn from_state(state: &ControllerState, backend_url: &str) -> Option<Self> {
        let coordinates = state.coordinate?;
        Some(Self {
            coordinates,
            outcome: state.outcome.clone(),
            display: state.display(),
            backend_url: backend_url.to_string(),
            timestamp: Utc::now(),
        })
    }
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// Format a lookup report
    fn format(&self, report: &LookupReport) -> Result<String>;
}

/// Get a formatter by name
pub fn get_formatter(name: &str) -> Option<Box<dyn OutputFormatter>> {
    match name.to_lowercase().as_str() {
        "json" => Some(Box::new(json::JsonFormatter)),
        "text" => Some(Box::new(text::TextFormatter)),
        _ => None,
    }
}

/// List all available formatters
pub fn available_formats() -> Vec<FormatInfo> {
    [
        &json::JsonFormatter as &dyn OutputFormatter,
        &text::TextFormatter,
    ]
    .into_iter()
    .map(|f| FormatInfo {
        name: f.name().to_string(),
        description: f.description().to_string(),
    })
    .collect()
}
