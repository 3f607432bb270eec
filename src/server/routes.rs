//! HTTP API routes
//!
//! The browser page only renders; every click goes through `/api/click` and
//! the page draws whatever `/api/state` reports.

use crate::controller::Generation;
use crate::coord::Coordinates;
use crate::error::Error;
use crate::marker::Marker;
use crate::present::DisplayState;
use crate::server::state::AppState;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::services::ServeDir;

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    // Determine static files path
    // Try relative to cwd first, then next to the executable
    let static_path = if std::path::Path::new("static").exists() {
        "static".to_string()
    } else if let Some(path) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("static")))
        .filter(|path| path.exists())
    {
        path.to_string_lossy().to_string()
    } else {
        "static".to_string()
    };

    Router::new()
        .route("/api/map", get(map_handler))
        .route("/api/click", post(click_handler))
        .route("/api/state", get(state_handler))
        .route("/api/status", get(status_handler))
        .fallback_service(ServeDir::new(&static_path).append_index_html_on_directories(true))
        .with_state(state)
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let code = match &err {
            Error::InvalidCoordinates(_) => "INVALID_COORDINATES",
            Error::Config(_) => "CONFIG_ERROR",
            _ => "INTERNAL_ERROR",
        };
        ApiError {
            error: err.to_string(),
            code: code.to_string(),
        }
    }
}

/// Initial map view
#[derive(Debug, Serialize, Deserialize)]
pub struct MapResponse {
    pub center: Coordinates,
    pub zoom: u8,
    pub tile_url: String,
    pub attribution: String,
}

/// Map configuration endpoint
///
/// GET /api/map
async fn map_handler(State(state): State<Arc<AppState>>) -> Json<MapResponse> {
    let map = &state.config.map;
    Json(MapResponse {
        center: Coordinates::new(map.center_lat, map.center_lng),
        zoom: map.zoom,
        tile_url: map.tile_url.clone(),
        attribution: map.attribution.clone(),
    })
}

/// Click request body
#[derive(Debug, Deserialize)]
pub struct ClickRequest {
    pub lat: f64,
    pub lng: f64,
}

/// Click acknowledgement
#[derive(Debug, Serialize)]
pub struct ClickResponse {
    pub coordinates: Coordinates,
    /// Generation the controller gave this click; `/api/state` belongs to
    /// this click once it reports at least this generation
    pub generation: Generation,
    pub marker: Option<Marker>,
}

/// Map click endpoint
///
/// POST /api/click
async fn click_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ClickRequest>,
) -> Result<(StatusCode, Json<ClickResponse>), ApiError> {
    Coordinates::new(req.lat, req.lng).validate()?;

    let (coordinates, generation) = state.click(req.lat, req.lng).await?;
    Ok((
        StatusCode::ACCEPTED,
        Json(ClickResponse {
            coordinates,
            generation,
            marker: state.marker().current(),
        }),
    ))
}

/// Current view of the pipeline
///
/// Marker and display are both taken from one controller snapshot, so they
/// always describe the same click.
#[derive(Debug, Serialize)]
pub struct StateResponse {
    pub generation: Generation,
    pub marker: Option<Marker>,
    pub display: DisplayState,
}

/// Current state endpoint
///
/// GET /api/state
async fn state_handler(State(state): State<Arc<AppState>>) -> Json<StateResponse> {
    let snapshot = state.controller().snapshot();
    Json(StateResponse {
        generation: snapshot.generation,
        marker: snapshot.coordinate.map(Marker::at),
        display: snapshot.display(),
    })
}

/// Status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Server is running
    pub running: bool,
    /// Server version
    pub version: String,
    /// Prediction backend base URL
    pub backend_url: String,
    /// Uptime in seconds
    pub uptime_secs: u64,
}

/// Server status endpoint
///
/// GET /api/status
async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        running: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
        backend_url: state.backend_url().to_string(),
        uptime_secs: state.uptime_secs(),
    })
}
