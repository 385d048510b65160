//! # Watch Configuration
//!
//! TOML configuration for the poll loop, plus the layout tuning block
//! that is consumed only by the external renderer. Layout values are
//! passed through unchanged; they are not part of the core engine's
//! contract.

use serde::{Deserialize, Serialize};
use tempograph_core::{EngineError, TypeDisplayPolicy};

/// Reference poll interval: 1000 ms.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

// =============================================================================
// LAYOUT TUNING (renderer passthrough)
// =============================================================================

/// Force-layout tuning parameters, forwarded verbatim to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutTuning {
    /// Target link length in pixels.
    pub link_distance: u32,
    /// Node charge strength (negative repels).
    pub charge_strength: i32,
    /// Collision radius in pixels.
    pub collision_radius: u32,
}

impl Default for LayoutTuning {
    fn default() -> Self {
        Self {
            link_distance: 120,
            charge_strength: -300,
            collision_radius: 24,
        }
    }
}

// =============================================================================
// WATCH CONFIG
// =============================================================================

/// Configuration for the `watch` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WatchConfig {
    /// Path (or `~`-prefixed path) of the RDF document to poll.
    pub source: String,
    /// Fixed poll interval in milliseconds.
    pub poll_interval_ms: Option<u64>,
    /// How `rdf:type` statements are displayed.
    pub type_display: Option<TypeDisplayPolicy>,
    /// Renderer-only layout tuning.
    pub layout: LayoutTuning,
}

impl WatchConfig {
    /// Parse a TOML configuration document.
    pub fn from_toml(text: &str) -> Result<Self, EngineError> {
        toml::from_str(text).map_err(|e| EngineError::Configuration(e.to_string()))
    }

    /// Effective poll interval.
    #[must_use]
    pub fn interval_ms(&self) -> u64 {
        self.poll_interval_ms.unwrap_or(DEFAULT_POLL_INTERVAL_MS)
    }

    /// Effective type-display policy.
    #[must_use]
    pub fn policy(&self) -> TypeDisplayPolicy {
        self.type_display.unwrap_or_default()
    }

    /// Validate the configuration before the loop starts.
    ///
    /// A configuration error is surfaced here, at the settings surface,
    /// and never disturbs an already-running history.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.source.trim().is_empty() {
            return Err(EngineError::Configuration(
                "source path must not be empty".to_string(),
            ));
        }
        if self.interval_ms() == 0 {
            return Err(EngineError::Configuration(
                "poll interval must be at least 1 ms".to_string(),
            ));
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
