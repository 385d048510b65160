//! # tempograph-core
//!
//! The temporal graph-state engine for tempograph - THE LOGIC.
//!
//! This crate ingests RDF statements from a polled, mutating document
//! and presents them as an ordered, deduplicated history of node-link
//! snapshots with a live/paused, scrubbable timeline:
//!
//! - detect meaningful changes in the polled source (byte pre-filter),
//! - project raw triples into a node-link graph under a configurable
//!   type-display policy,
//! - keep an append-only history indexed by wall-clock time and tick,
//! - drive a playhead that either tracks the newest snapshot (live) or
//!   stays pinned while the user examines history (paused).
//!
//! ## Architectural Constraints
//!
//! The CORE:
//! - Is the ONLY place where the history and playhead exist (stateful)
//! - Has NO async, NO network dependencies (pure Rust); transport,
//!   parsing, and rendering are capabilities supplied by the caller
//! - Uses integer arithmetic only (the time axis is milliseconds)
//! - Never persists anything: the history is in-memory and rebuilt
//!   from the external document on restart

// =============================================================================
// MODULES
// =============================================================================

pub mod detector;
pub mod engine;
pub mod history;
pub mod projector;
pub mod shorten;
pub mod timeline;
pub mod types;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{
    EngineError, GraphLink, GraphNode, Iri, Label, Projection, Snapshot, Statement, Term, Tick,
    TimestampMs, TypeDisplayPolicy,
};

// =============================================================================
// RE-EXPORTS: Engine Components
// =============================================================================

pub use detector::ChangeDetector;
pub use engine::{Engine, PollReport, Renderer, StatementParser};
pub use history::{AppendResult, HistoryStore};
pub use projector::Projector;
pub use shorten::{shorten, shorten_label};
pub use timeline::{Mode, Playhead, RenderRequest, TimelineController};
