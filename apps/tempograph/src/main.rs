//! # tempograph - Temporal RDF Graph Viewer
//!
//! The main binary for the tempograph temporal graph-state engine.
//!
//! This application provides:
//! - A fixed-interval poll loop over a mutating RDF document
//! - CLI interface for watching and one-shot projection
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                 apps/tempograph (THE BINARY)                 │
//! │                                                              │
//! │  ┌──────────┐   ┌───────────┐   ┌──────────┐   ┌─────────┐  │
//! │  │   CLI    │   │ fetchText │   │ N-Triples│   │  JSON   │  │
//! │  │  (clap)  │   │ (tokio fs)│   │  parser  │   │ renderer│  │
//! │  └────┬─────┘   └─────┬─────┘   └────┬─────┘   └────┬────┘  │
//! │       └───────────────┴──────────────┴──────────────┘       │
//! │                            ▼                                 │
//! │                  ┌──────────────────┐                        │
//! │                  │ tempograph-core  │                        │
//! │                  │   (THE LOGIC)    │                        │
//! │                  └──────────────────┘                        │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Poll a document every second, types as tags
//! tempograph watch --source ~/data/graph.nt
//!
//! # Faster polling, types as synthesized nodes
//! tempograph watch --source graph.nt --interval-ms 250 --types nodes
//!
//! # One-shot projection
//! tempograph project --file graph.nt --types off
//! ```

mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

// Current-thread runtime: the poll loop, seeks, and history mutations
// all run on one event loop, so mutual exclusion is structural.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing — TEMPOGRAPH_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("TEMPOGRAPH_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tempograph=info".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Display startup banner
    if !cli.quiet {
        print_banner();
    }

    // Execute command
    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the tempograph startup banner.
fn print_banner() {
    println!(
        r"
  ┌┬┐┌─┐┌┬┐┌─┐┌─┐┌─┐┬─┐┌─┐┌─┐┬ ┬
   │ ├┤ │││├─┘│ ││ ┬├┬┘├─┤├─┘├─┤
   ┴ └─┘┴ ┴┴  └─┘└─┘┴└─┴ ┴┴  ┴ ┴

  Temporal RDF Graph Viewer v{}

  Poll • Project • Scrub
",
        env!("CARGO_PKG_VERSION")
    );
}
