//! # tempograph CLI Module
//!
//! This module implements the CLI interface for tempograph.
//!
//! ## Available Commands
//!
//! - `watch` - Poll an RDF document and stream snapshot frames
//! - `project` - One-shot: project a document and print the result

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tempograph_core::EngineError;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// tempograph - animated, scrubbable timeline over a mutating RDF document
///
/// Polls a document at a fixed interval, projects its triples into a
/// node-link graph, and appends each meaningful change to an in-memory
/// history that a renderer can play back live or scrub through.
#[derive(Parser, Debug)]
#[command(name = "tempograph")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Poll a document and stream snapshot frames as JSON
    Watch {
        /// Path of the RDF document to poll (supports ~-prefixed paths)
        #[arg(short, long)]
        source: Option<String>,

        /// Fixed poll interval in milliseconds
        #[arg(short, long)]
        interval_ms: Option<u64>,

        /// Type display policy (on, nodes, off)
        #[arg(short, long)]
        types: Option<String>,

        /// Optional TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Project a document once and print the resulting graph
    Project {
        /// Path of the RDF document
        #[arg(short, long)]
        file: PathBuf,

        /// Type display policy (on, nodes, off)
        #[arg(short, long, default_value = "on")]
        types: String,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), EngineError> {
    match cli.command {
        Commands::Watch {
            source,
            interval_ms,
            types,
            config,
        } => cmd_watch(source, interval_ms, types, config).await,
        Commands::Project { file, types } => cmd_project(&file, &types).await,
    }
}
