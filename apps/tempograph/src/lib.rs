//! # tempograph (application library)
//!
//! The capability adapters the core engine consumes, factored into a
//! library so the integration tests can drive the full pipeline
//! without spawning the binary:
//!
//! - `config` — TOML watch configuration and layout passthrough
//! - `source` — the fetchText capability (tokio::fs, `~` expansion)
//! - `parser` — line-oriented N-Triples subset parser
//! - `render` — JSON-emitting renderer adapter

pub mod config;
pub mod parser;
pub mod render;
pub mod source;

pub use config::{LayoutTuning, WatchConfig};
pub use parser::NTriplesParser;
pub use render::JsonRenderer;
pub use source::{expand_home, fetch_text};
