//! # Timeline Controller
//!
//! Owns the playhead (current tick + live/paused mode), exposes
//! seek-by-time and seek-by-tick, and decides on each new snapshot
//! whether to auto-advance.
//!
//! State machine: two modes, no terminal state.
//! - `Live -> Paused` on a manual seek away from the newest tick, or on
//!   any manual interaction with the timeline surface.
//! - `Paused -> Live` on a seek landing exactly on the newest tick, or
//!   on an explicit `go_live`.
//!
//! Every operation that changes the effective playhead target yields a
//! [`RenderRequest`]; the controller never emits the same
//! `(tick, animate)` pair twice in direct succession, so the external
//! renderer is called exactly once per effective change.

use crate::history::HistoryStore;
use crate::types::{Tick, TimestampMs};
use serde::{Deserialize, Serialize};

// =============================================================================
// PLAYHEAD
// =============================================================================

/// Live: the playhead tracks the newest snapshot automatically.
/// Paused: the playhead stays fixed until explicitly moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Mode {
    /// Auto-advance to each new snapshot.
    #[default]
    Live,
    /// Pinned; new data accumulates in the background.
    Paused,
}

/// Which snapshot is currently displayed, and whether the view tracks
/// new arrivals. `index` is meaningful only while the history is
/// non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Playhead {
    /// Tick of the displayed snapshot.
    pub index: Tick,
    /// Live or paused.
    pub mode: Mode,
}

/// One render instruction for the external renderer: which tick to
/// show and whether to animate the transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderRequest {
    /// Snapshot to display.
    pub tick: Tick,
    /// True only for live auto-advance; seeks render without animation.
    pub animate: bool,
}

// =============================================================================
// TIMELINE CONTROLLER
// =============================================================================

/// Owns the playhead. The history is read-only from here; range bounds
/// are taken from it on every operation rather than cached.
#[derive(Debug, Default)]
pub struct TimelineController {
    playhead: Playhead,
    /// Guard against rendering the same (tick, animate) pair twice in
    /// direct succession.
    last_request: Option<RenderRequest>,
}

impl TimelineController {
    /// Create a controller in the initial state: live, index 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current playhead state.
    #[must_use]
    pub const fn playhead(&self) -> Playhead {
        self.playhead
    }

    /// A new snapshot was appended at `tick`.
    ///
    /// Live mode auto-advances to it and requests an animated render.
    /// Paused mode leaves the playhead untouched — the user is
    /// examining history, and new data must not disturb the view.
    pub fn on_snapshot_added(
        &mut self,
        history: &HistoryStore,
        tick: Tick,
    ) -> Option<RenderRequest> {
        debug_assert!(history.get(tick).is_some());
        match self.playhead.mode {
            Mode::Live => {
                self.playhead.index = tick;
                self.request(tick, true)
            }
            Mode::Paused => None,
        }
    }

    /// Seek to a tick, clamped to the valid range.
    ///
    /// Landing exactly on the newest tick re-enters live mode; landing
    /// anywhere earlier pauses. Seeks render without animation.
    pub fn seek_to_tick(&mut self, history: &HistoryStore, tick: Tick) -> Option<RenderRequest> {
        let max_tick = history.max_tick()?;
        let clamped = Tick::new(tick.value().min(max_tick.value()));
        self.playhead.index = clamped;
        self.playhead.mode = if clamped == max_tick {
            Mode::Live
        } else {
            Mode::Paused
        };
        self.request(clamped, false)
    }

    /// Seek to the tick whose snapshot timestamp is closest to `t`
    /// (ties break toward the earlier tick), then apply the same
    /// tick-selection and mode logic as `seek_to_tick`.
    pub fn seek_to_time(
        &mut self,
        history: &HistoryStore,
        t: TimestampMs,
    ) -> Option<RenderRequest> {
        let tick = history.nearest_tick(t)?;
        self.seek_to_tick(history, tick)
    }

    /// Jump to the newest snapshot and resume live tracking.
    pub fn go_live(&mut self, history: &HistoryStore) -> Option<RenderRequest> {
        let max_tick = history.max_tick()?;
        self.playhead.index = max_tick;
        self.playhead.mode = Mode::Live;
        self.request(max_tick, false)
    }

    /// Manual interaction with the timeline surface (e.g. clicking its
    /// background) pins the view so an in-flight live update cannot
    /// yank it away mid-interaction. Never moves the index, never
    /// renders.
    pub fn on_timeline_interaction(&mut self) {
        if self.playhead.mode == Mode::Live {
            self.playhead.mode = Mode::Paused;
        }
    }

    /// Return to the initial state. Invoked when the history is
    /// cleared by a source or policy change.
    pub fn reset(&mut self) {
        self.playhead = Playhead::default();
        self.last_request = None;
    }

    /// Emit a render request unless it repeats the previous one.
    fn request(&mut self, tick: Tick, animate: bool) -> Option<RenderRequest> {
        let request = RenderRequest { tick, animate };
        if self.last_request == Some(request) {
            return None;
        }
        self.last_request = Some(request);
        Some(request)
    }
}

// =============================================================================
// TESTS
// =============================================================================
