//! # Renderer Adapter
//!
//! JSON-emitting implementation of the core's `Renderer` capability.
//! The real consumer is a force-directed node-link view; this adapter
//! emits one JSON document per effective playhead change so any
//! downstream renderer (or a human on a terminal) can consume the
//! stream. The layout tuning block is forwarded verbatim.

use crate::config::LayoutTuning;
use serde_json::json;
use tempograph_core::{Renderer, Snapshot};

/// Renderer that prints each displayed snapshot as a JSON document.
#[derive(Debug)]
pub struct JsonRenderer {
    layout: LayoutTuning,
    /// Render count, for log correlation.
    frames: u64,
}

impl JsonRenderer {
    /// Create a renderer with the given layout passthrough.
    #[must_use]
    pub fn new(layout: LayoutTuning) -> Self {
        Self { layout, frames: 0 }
    }

    /// Number of frames emitted so far.
    #[must_use]
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Build the JSON document for one frame.
    fn frame_json(&self, snapshot: &Snapshot, animate: bool) -> serde_json::Value {
        json!({
            "frame": self.frames,
            "timestamp_ms": snapshot.timestamp.value(),
            "animate": animate,
            "nodes": snapshot.nodes(),
            "links": snapshot.links(),
            "layout": self.layout,
        })
    }
}

impl Renderer for JsonRenderer {
    fn render(&mut self, snapshot: &Snapshot, animate: bool) {
        let frame = self.frame_json(snapshot, animate);
        self.frames = self.frames.saturating_add(1);
        tracing::info!(
            nodes = snapshot.nodes().len(),
            links = snapshot.links().len(),
            animate,
            timestamp_ms = snapshot.timestamp.value(),
            "render"
        );
        println!("{frame}");
    }
}

// =============================================================================
// TESTS
// =============================================================================
