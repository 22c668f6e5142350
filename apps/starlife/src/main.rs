//! # Starlife - Stellar Evolution Simulator
//!
//! The main binary for the Starlife stellar-evolution engine.
//!
//! This application provides:
//! - CLI interface for simulations, comparisons and playback
//! - HTTP REST API server (axum-based)
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │              apps/starlife (THE BINARY)              │
//! │                                                      │
//! │  ┌─────────────┐   ┌─────────────┐   ┌────────────┐  │
//! │  │    CLI      │   │  HTTP API   │   │  Playback  │  │
//! │  │   (clap)    │   │   (axum)    │   │  (cursor)  │  │
//! │  └──────┬──────┘   └──────┬──────┘   └─────┬──────┘  │
//! │         └─────────────────┼────────────────┘         │
//! │                           ▼                          │
//! │                  ┌─────────────────┐                 │
//! │                  │  starlife-core  │                 │
//! │                  │   (THE LOGIC)   │                 │
//! │                  └─────────────────┘                 │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Simulate a 12 solar-mass star
//! starlife simulate --mass 12
//!
//! # Compare its red supergiant phase with real stars
//! starlife compare --mass 12 --stage "Red Supergiant"
//!
//! # Start the HTTP server
//! starlife server --host 0.0.0.0 --port 8080
//! ```

use clap::Parser;
use starlife::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // Initialize tracing. STARLIFE_LOG_FORMAT=json switches to JSON output.
    let log_format = std::env::var("STARLIFE_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "starlife=info,tower_http=debug".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Display startup banner
    if !cli.quiet && !cli.json_mode {
        print_banner();
    }

    // Execute command
    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the Starlife startup banner.
fn print_banner() {
    println!(
        r#"
     *        .        *         .
  ___ _             _ _  __
 / __| |_ __ _ _ _ | (_)/ _|___
 \__ \  _/ _` | '_|| | |  _/ -_)
 |___/\__\__,_|_|  |_|_|_| \___|

  Stellar Evolution Simulator v{}

  From main sequence to remnant
"#,
        env!("CARGO_PKG_VERSION")
    );
}
