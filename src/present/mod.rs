//! Result presenter
//!
//! Pure projection of an [`Outcome`] into what the user sees. Nothing here
//! touches the network or the UI, and the failure reason is never part of
//! the visible message.

use crate::predict::Outcome;
use serde::Serialize;

/// Message shown while a lookup is in flight
pub const LOADING_MESSAGE: &str = "Loading...";

/// Message shown when the backend has no parcel at the point
pub const NOT_FOUND_MESSAGE: &str = "No parcel found at that location.";

/// Message shown when the backend could not be reached or understood
pub const CONTACT_ERROR_MESSAGE: &str = "Error contacting backend.";

const FOUND_ICON: &str = "🏘️";
const NOT_FOUND_ICON: &str = "❌";
const ERROR_ICON: &str = "🚨";

/// Visual treatment of the result panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Panel not rendered
    Hidden,
    Loading,
    Success,
    Warning,
    Error,
}

/// What the result panel should render
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayState {
    /// Panel text; `None` means nothing is rendered
    pub message: Option<String>,
    pub icon: Option<&'static str>,
    pub tone: Tone,
}

impl DisplayState {
    fn new(message: impl Into<String>, icon: Option<&'static str>, tone: Tone) -> Self {
        Self {
            message: Some(message.into()),
            icon,
            tone,
        }
    }

    /// Whether anything should be rendered at all
    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }

    /// Icon and message joined for plain-text output
    pub fn text(&self) -> Option<String> {
        let message = self.message.as_deref()?;
        Some(match self.icon {
            Some(icon) => format!("{} {}", icon, message),
            None => message.to_string(),
        })
    }
}

/// Project an outcome into a display state
pub fn present(outcome: &Outcome) -> DisplayState {
    match outcome {
        Outcome::Idle => DisplayState {
            message: None,
            icon: None,
            tone: Tone::Hidden,
        },
        Outcome::Pending => DisplayState::new(LOADING_MESSAGE, None, Tone::Loading),
        // f64 Display keeps the backend's digits: 73.5 -> "73.5", 80 -> "80"
        Outcome::Found { probability } => DisplayState::new(
            format!("HOA Probability: {}%", probability),
            Some(FOUND_ICON),
            Tone::Success,
        ),
        Outcome::NotFound => DisplayState::new(NOT_FOUND_MESSAGE, Some(NOT_FOUND_ICON), Tone::Warning),
        Outcome::Failed { .. } => {
            DisplayState::new(CONTACT_ERROR_MESSAGE, Some(ERROR_ICON), Tone::Error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_renders_nothing() {
        let display = present(&Outcome::Idle);
        assert!(!display.is_visible());
        assert_eq!(display.text(), None);
        assert_eq!(display.tone, Tone::Hidden);
    }

    #[test]
    fn test_pending_is_loading() {
        let display = present(&Outcome::Pending);
        assert_eq!(display.message.as_deref(), Some(LOADING_MESSAGE));
        assert_eq!(display.tone, Tone::Loading);
    }

    #[test]
    fn test_found_embeds_percentage() {
        let display = present(&Outcome::Found { probability: 73.5 });
        let message = display.message.unwrap();
        assert!(message.contains("73.5%"), "message: {}", message);
        assert_eq!(display.tone, Tone::Success);
    }

    #[test]
    fn test_found_keeps_backend_precision() {
        let message = |p| present(&Outcome::Found { probability: p }).message.unwrap();
        assert_eq!(message(80.0), "HOA Probability: 80%");
        assert_eq!(message(12.34), "HOA Probability: 12.34%");
        assert_eq!(message(0.0), "HOA Probability: 0%");
    }

    #[test]
    fn test_not_found_message() {
        let display = present(&Outcome::NotFound);
        assert_eq!(display.message.as_deref(), Some(NOT_FOUND_MESSAGE));
        assert_eq!(display.text().unwrap(), "❌ No parcel found at that location.");
    }

    #[test]
    fn test_failure_hides_reason() {
        let network = present(&Outcome::network("connection refused"));
        let protocol = present(&Outcome::protocol("invalid JSON body"));

        assert_eq!(network, protocol);
        assert_eq!(network.message.as_deref(), Some(CONTACT_ERROR_MESSAGE));
        assert!(!network.text().unwrap().contains("refused"));
        assert_eq!(network.tone, Tone::Error);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_value(present(&Outcome::Pending)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"message": "Loading...", "icon": null, "tone": "loading"})
        );
    }
}
