//! Marker overlay
//!
//! Keeps the pin for the most recently clicked coordinate. It has no logic
//! of its own: it is fed by the coordinate source and read by renderers.

use crate::constants::map::MARKER_LABEL;
use crate::coord::{CoordinateSource, Coordinates};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::watch;

/// A labelled pin on the map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub position: Coordinates,
    pub label: &'static str,
}

impl Marker {
    /// Pin for a clicked coordinate
    pub fn at(position: Coordinates) -> Self {
        Self {
            position,
            label: MARKER_LABEL,
        }
    }
}

/// Holder of the current pin
#[derive(Debug, Clone)]
pub struct MarkerOverlay {
    tx: Arc<watch::Sender<Option<Marker>>>,
}

impl MarkerOverlay {
    /// Create an overlay with no pin
    pub fn new() -> Self {
        let (tx, _) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    /// Create an overlay that follows every click from `source`
    pub fn attach(source: &mut CoordinateSource) -> Self {
        let overlay = Self::new();
        let follower = overlay.clone();
        source.subscribe(move |coords| follower.place(coords));
        overlay
    }

    /// Move the pin to `position`
    pub fn place(&self, position: Coordinates) {
        self.tx.send_replace(Some(Marker::at(position)));
    }

    /// Current pin, if any click has happened
    pub fn current(&self) -> Option<Marker> {
        self.tx.borrow().clone()
    }

    /// Receiver that is notified on every pin move
    #[cfg(test)]
    pub(crate) fn subscribe(&self) -> watch::Receiver<Option<Marker>> {
        self.tx.subscribe()
    }
}

impl Default for MarkerOverlay {
    fn default() -> Self {
        Self::new()
    }
}
