//! Geographic coordinates and the click source that produces them

pub mod source;

use serde::{Deserialize, Serialize};

pub use source::CoordinateSource;

/// A geographic coordinate (latitude, longitude)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Create new coordinates
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Check that both components are finite numbers
    ///
    /// Range checks are left to the map surface; the prediction client only
    /// needs something it can put in a query string.
    pub fn validate(&self) -> crate::error::Result<()> {
        if !self.lat.is_finite() {
            return Err(crate::error::Error::InvalidCoordinates(format!(
                "Latitude {} is not a finite number",
                self.lat
            )));
        }
        if !self.lng.is_finite() {
            return Err(crate::error::Error::InvalidCoordinates(format!(
                "Longitude {} is not a finite number",
                self.lng
            )));
        }
        Ok(())
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}
