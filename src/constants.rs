//! Centralized constants for the hoa-explore crate
//!
//! This module consolidates constants that are used across multiple modules
//! to avoid duplication and ensure consistency.

/// Prediction backend endpoints
pub mod api {
    /// Default base URL of the prediction backend
    pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

    /// Prediction endpoint path
    pub const PREDICT_PATH: &str = "/predict";

    /// User agent sent with every backend request
    pub const USER_AGENT: &str = concat!("hoa-explore/", env!("CARGO_PKG_VERSION"));
}

/// Map surface defaults
pub mod map {
    /// Initial map center latitude (north Texas)
    pub const CENTER_LAT: f64 = 33.2;

    /// Initial map center longitude
    pub const CENTER_LNG: f64 = -96.9;

    /// Initial zoom level
    pub const ZOOM: u8 = 12;

    /// OpenStreetMap tile URL template
    pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

    /// Tile attribution string
    pub const ATTRIBUTION: &str = "© OpenStreetMap contributors";

    /// Label shown on the clicked-location pin
    pub const MARKER_LABEL: &str = "Clicked location";
}
