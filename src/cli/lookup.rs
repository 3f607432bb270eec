//! Lookup command handler
//!
//! Runs one click through the controller and prints the result panel.

use crate::config::Config;
use crate::controller::Controller;
use crate::coord::{CoordinateSource, Coordinates};
use crate::error::{Error, Result};
use crate::format::{available_formats, get_formatter, LookupReport};
use crate::predict::http::HttpPredictor;
use clap::Args;
use std::sync::Arc;

/// Lookup command arguments
#[derive(Args)]
pub struct LookupArgs {
    /// Latitude
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude
    #[arg(long, allow_hyphen_values = true)]
    pub lng: f64,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Prediction backend base URL (overrides config)
    #[arg(long)]
    pub backend: Option<String>,

    /// Request timeout in seconds (overrides config, 0 disables)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// List available formats
    #[arg(short = 'F', long = "list-formats")]
    pub list_formats: bool,
}

/// Run the lookup command
pub async fn run(args: LookupArgs) -> Result<()> {
    if args.list_formats {
        list_formats();
        return Ok(());
    }

    let mut config = Config::load()?;
    if let Some(backend) = &args.backend {
        config.set("backend.url", backend)?;
    }
    if let Some(timeout) = args.timeout {
        config.backend.timeout_secs = timeout;
    }

    Coordinates::new(args.lat, args.lng).validate()?;

    let format = args.format.as_deref().unwrap_or("text");
    let formatter = get_formatter(format)
        .ok_or_else(|| Error::Config(format!("Unknown format: {}", format)))?;

    let predictor = HttpPredictor::from_config(&config.backend)?;
    let backend_url = predictor.base_url().to_string();

    let controller = Controller::spawn(Arc::new(predictor));
    let mut source = CoordinateSource::new();
    controller.attach(&mut source);

    source.click(args.lat, args.lng);

    let state = controller
        .resolved()
        .await
        .ok_or_else(|| Error::Server("Controller stopped before the lookup finished".to_string()))?;
    let report = LookupReport::from_state(&state, &backend_url)
        .ok_or_else(|| Error::Server("Lookup finished without a coordinate".to_string()))?;

    print!("{}", formatter.format(&report)?);
    if format != "text" {
        println!();
    }

    Ok(())
}

/// Print available output formats
fn list_formats() {
    println!("Available output formats:");
    for format in available_formats() {
        println!("  {:6} - {}", format.name, format.description);
    }
}
