//! JSON output formatter

use crate::error::Result;
use crate::format::{LookupReport, OutputFormatter};

/// JSON formatter - outputs the full report, failure reason included
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Full JSON report"
    }

    fn format(&self, report: &LookupReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}
