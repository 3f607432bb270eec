//! hoa-explore: click a map, get an HOA probability
//!
//! A library and CLI tool that turns map clicks into lookups against an HOA
//! prediction service and shows exactly one result per click, even when
//! answers arrive out of order.
//!
//! ## Pipeline
//!
//! - [`coord::CoordinateSource`] publishes each click
//! - [`marker::MarkerOverlay`] pins the latest click
//! - [`controller`] tags every click with a generation and only accepts
//!   the lookup result for the newest one
//! - [`predict::http::HttpPredictor`] performs the lookup
//! - [`present::present`] turns the outcome into the panel message
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hoa_explore::controller::Controller;
//! use hoa_explore::coord::CoordinateSource;
//! use hoa_explore::predict::http::HttpPredictor;
//! use std::sync::Arc;
//!
//! # async fn demo() -> hoa_explore::Result<()> {
//! let predictor = HttpPredictor::new("http://localhost:8000", None)?;
//! let controller = Controller::spawn(Arc::new(predictor));
//!
//! let mut source = CoordinateSource::new();
//! controller.attach(&mut source);
//! source.click(33.2, -96.9);
//!
//! if let Some(state) = controller.resolved().await {
//!     println!("{:?}", state.display().text());
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod controller;
pub mod coord;
pub mod error;
pub mod format;
pub mod marker;
pub mod predict;
pub mod present;
pub mod server;

// Re-export commonly used types
pub use config::Config;
pub use controller::{ControllerHandle, ControllerState, Generation};
pub use coord::Coordinates;
pub use error::{Error, Result};
pub use predict::{FailureReason, Outcome};
pub use present::{present, DisplayState};
