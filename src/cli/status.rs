//! Status command handler
//!
//! Shows whether the prediction backend and the local server answer.

use crate::config::Config;
use crate::error::Result;
use crate::predict::http::HttpPredictor;
use clap::Args;

/// Status command arguments
#[derive(Args)]
pub struct StatusArgs {
    /// Prediction backend base URL (overrides config)
    #[arg(long)]
    pub backend: Option<String>,

    /// Also check if the local server is running
    #[arg(long)]
    pub server: bool,
}

/// Run the status command
pub async fn run(args: StatusArgs) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(backend) = &args.backend {
        config.set("backend.url", backend)?;
    }

    println!("hoa-explore v{}", env!("CARGO_PKG_VERSION"));
    println!();

    let predictor = HttpPredictor::from_config(&config.backend)?;
    match predictor.health().await {
        Ok(message) => {
            println!("Backend: REACHABLE at {}", predictor.base_url());
            println!("  {}", message);
        }
        Err(e) => {
            println!("Backend: UNREACHABLE at {}", predictor.base_url());
            println!("  {}", e);
        }
    }
    println!();

    if args.server {
        check_server_status(&config).await;
    }

    Ok(())
}

/// Check if the server is running
async fn check_server_status(config: &Config) {
    let url = format!("http://{}/api/status", config.server_addr());

    match reqwest::get(&url).await {
        Ok(response) => {
            if response.status().is_success() {
                println!("Server: RUNNING on {}", config.server_addr());
                if let Ok(status) = response.json::<serde_json::Value>().await {
                    if let Some(version) = status.get("version").and_then(|v| v.as_str()) {
                        println!("  Version: {}", version);
                    }
                    if let Some(uptime) = status.get("uptime_secs").and_then(|v| v.as_u64()) {
                        println!("  Uptime: {}s", uptime);
                    }
                }
            } else {
                println!("Server: ERROR (status {})", response.status());
            }
        }
        Err(_) => {
            println!("Server: NOT RUNNING on {}", config.server_addr());
        }
    }
}
