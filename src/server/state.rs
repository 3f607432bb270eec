//! Server shared state
//!
//! Wires the click pipeline together: one coordinate source feeding the
//! marker overlay and the interaction controller.

use crate::config::Config;
use crate::controller::{Controller, ControllerHandle, Generation};
use crate::coord::{CoordinateSource, Coordinates};
use crate::error::{Error, Result};
use crate::marker::MarkerOverlay;
use crate::predict::http::HttpPredictor;
use crate::predict::PredictionBackend;
use std::sync::Arc;
use std::time::Instant;

/// Shared state for the HTTP server
pub struct AppState {
    /// Configuration, read once at startup
    pub config: Config,

    source: CoordinateSource,
    controller: ControllerHandle,
    marker: MarkerOverlay,
    backend_url: String,
    started: Instant,
}

impl AppState {
    /// Build the pipeline around an arbitrary prediction backend
    ///
    /// Must be called inside a tokio runtime; the controller task is spawned
    /// here.
    pub fn new<B>(config: Config, backend: Arc<B>, backend_url: impl Into<String>) -> Self
    where
        B: PredictionBackend + 'static,
    {
        let mut source = CoordinateSource::new();
        let marker = MarkerOverlay::attach(&mut source);
        let controller = Controller::spawn(backend);
        controller.attach(&mut source);

        Self {
            config,
            source,
            controller,
            marker,
            backend_url: backend_url.into(),
            started: Instant::now(),
        }
    }

    /// Build the pipeline with the HTTP backend from `config`
    pub fn from_config(config: Config) -> Result<Self> {
        let predictor = HttpPredictor::from_config(&config.backend)?;
        let backend_url = predictor.base_url().to_string();
        Ok(Self::new(config, Arc::new(predictor), backend_url))
    }

    /// Feed a map click into the pipeline
    ///
    /// Returns once the controller has taken the click, with the generation
    /// it was given.
    pub async fn click(&self, lat: f64, lng: f64) -> Result<(Coordinates, Generation)> {
        let before = self.controller.snapshot().generation;
        let coordinates = self.source.click(lat, lng);
        let generation = self
            .controller
            .accepted_after(before)
            .await
            .ok_or_else(|| Error::Server("Controller stopped".to_string()))?;
        Ok((coordinates, generation))
    }

    /// Controller handle
    pub fn controller(&self) -> &ControllerHandle {
        &self.controller
    }

    /// Marker overlay
    pub fn marker(&self) -> &MarkerOverlay {
        &self.marker
    }

    /// Prediction backend base URL
    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    /// Seconds since the state was created
    pub fn uptime_secs(&self) -> u64 {
        self.started.elapsed().as_secs()
    }
}
