//! Coordinate source
//!
//! Turns map click notifications into [`Coordinates`] and hands each one to
//! every subscriber, synchronously and in subscription order.

use crate::coord::Coordinates;

type Subscriber = Box<dyn Fn(Coordinates) + Send + Sync>;

/// Fan-out point for map clicks
#[derive(Default)]
pub struct CoordinateSource {
    subscribers: Vec<Subscriber>,
}

impl CoordinateSource {
    /// Create a source with no subscribers
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber; it sees every click made after this call
    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: Fn(Coordinates) + Send + Sync + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Record a click at `(lat, lng)` and publish it
    pub fn click(&self, lat: f64, lng: f64) -> Coordinates {
        let coords = Coordinates::new(lat, lng);
        tracing::debug!(lat, lng, subscribers = self.subscribers.len(), "map click");
        for subscriber in &self.subscribers {
            subscriber(coords);
        }
        coords
    }

    /// Number of registered subscribers
    #[cfg(test)]
    pub(crate) fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl std::fmt::Debug for CoordinateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoordinateSource")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
