//! hoa-explore CLI entry point
//!
//! Map click → HOA probability, as a web app or one-shot lookup

use hoa_explore::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
