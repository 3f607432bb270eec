//! Human-readable text output formatter

use crate::error::Result;
use crate::format::{LookupReport, OutputFormatter};

/// Text formatter - prints the panel message the map would show
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable text"
    }

    fn format(&self, report: &LookupReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!("Location: {}\n", report.coordinates));
        if let Some(text) = report.display.text() {
            output.push_str(&text);
            output.push('\n');
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::tests::report_for;
    use crate::predict::Outcome;

    #[test]
    fn test_text_format_found() {
        let report = report_for(Outcome::Found { probability: 73.5 });
        let output = TextFormatter.format(&report).unwrap();

        assert!(output.contains("Location: (33.200000, -96.900000)"));
        assert!(output.contains("HOA Probability: 73.5%"));
    }

    #[test]
    fn test_text_format_hides_failure_reason() {
        let report = report_for(Outcome::network("connection refused"));
        let output = TextFormatter.format(&report).unwrap();

        assert!(output.contains("Error contacting backend."));
        assert!(!output.contains("refused"));
    }

    #[test]
    fn test_text_formatter_info() {
        assert_eq!(TextFormatter.name(), "text");
        assert!(!TextFormatter.description().is_empty());
    }
}
