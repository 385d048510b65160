//! # Engine Orchestrator
//!
//! Wires the change detector, triple projector, history store, and
//! timeline controller into one poll-driven pipeline:
//!
//! ```text
//! raw text -> ChangeDetector -> (if changed) Projector -> candidate
//!          -> HistoryStore (dedup + append) -> TimelineController
//!          -> RenderRequest
//! ```
//!
//! ## Generation guard
//!
//! Source-path and policy changes must not let a stale in-flight fetch
//! append a snapshot built under the old configuration. Every poll
//! cycle captures a generation token before the fetch; `complete_poll`
//! discards results whose token no longer matches. Configuration
//! changes bump the generation and clear state atomically, replacing
//! ad hoc "clear everything" resets with a race-free check.
//!
//! ## Threading
//!
//! The engine is single-threaded by contract: polls are strictly
//! sequential (one in flight at a time), and seeks arrive from the
//! same event loop. Mutual exclusion is structural, not explicit.

use crate::detector::ChangeDetector;
use crate::history::{AppendResult, HistoryStore};
use crate::projector::Projector;
use crate::timeline::{Playhead, RenderRequest, TimelineController};
use crate::types::{EngineError, Snapshot, Statement, Tick, TimestampMs, TypeDisplayPolicy};

// =============================================================================
// CAPABILITY TRAITS
// =============================================================================

/// The consumed parser capability: raw document text to statements.
///
/// # Extension Point
///
/// This trait is intentionally defined without in-crate
/// implementations. The application layer supplies the concrete parser
/// (Turtle, N-Triples, a SPARQL result adapter). A parse failure
/// abandons the whole document; the engine treats the poll as a no-op.
pub trait StatementParser {
    /// Parse raw text into a statement sequence.
    fn parse(&self, text: &str) -> Result<Vec<Statement>, EngineError>;
}

/// The exposed renderer capability.
///
/// Called exactly once per effective playhead change; the timeline
/// controller guarantees the same `(snapshot, animate)` pair is never
/// delivered twice in direct succession.
pub trait Renderer {
    /// Display the snapshot, animating the transition when `animate`.
    fn render(&mut self, snapshot: &Snapshot, animate: bool);
}

// =============================================================================
// POLL REPORT
// =============================================================================

/// Outcome of one completed poll cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollReport {
    /// The generation token predates a configuration change; the
    /// result was discarded without touching any state.
    Stale,
    /// Raw text byte-identical to the last observed; projection skipped.
    Unchanged,
    /// The parser rejected the document; poll treated as a no-op.
    ParseFailed(String),
    /// Projection succeeded but equals the newest snapshot.
    Deduped,
    /// A new snapshot was appended.
    Appended {
        /// Tick of the new snapshot.
        tick: Tick,
        /// Render instruction, present when the playhead advanced
        /// (live mode) and the request is not a direct repeat.
        render: Option<RenderRequest>,
    },
}

// =============================================================================
// ENGINE
// =============================================================================

/// The temporal graph-state engine.
///
/// Owns the history and playhead; both are mutated only through the
/// poll-completion path and the seek surface below.
#[derive(Debug, Default)]
pub struct Engine {
    policy: TypeDisplayPolicy,
    generation: u64,
    detector: ChangeDetector,
    history: HistoryStore,
    timeline: TimelineController,
}

impl Engine {
    /// Create an engine with the given type-display policy and an
    /// empty history.
    #[must_use]
    pub fn new(policy: TypeDisplayPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Capture the generation token for a poll about to start. The
    /// token must be handed back to [`Engine::complete_poll`].
    #[must_use]
    pub const fn begin_poll(&self) -> u64 {
        self.generation
    }

    /// Complete a poll cycle with successfully fetched text.
    ///
    /// `clock` is milliseconds since engine start, sampled by the
    /// caller from a monotonic clock at capture time. Transport
    /// failures never reach this method — the caller logs and skips.
    pub fn complete_poll<P: StatementParser>(
        &mut self,
        token: u64,
        text: &str,
        parser: &P,
        clock: TimestampMs,
    ) -> PollReport {
        if token != self.generation {
            return PollReport::Stale;
        }

        if !self.detector.observe(text) {
            return PollReport::Unchanged;
        }

        // Text is committed to the detector before parsing, so
        // re-polling the same malformed document short-circuits above.
        let statements = match parser.parse(text) {
            Ok(statements) => statements,
            Err(e) => return PollReport::ParseFailed(e.to_string()),
        };

        self.ingest(&statements, clock)
    }

    /// Project, append, and advance the playhead for a parsed
    /// statement sequence.
    fn ingest(&mut self, statements: &[Statement], clock: TimestampMs) -> PollReport {
        let candidate = Projector::project(statements, self.policy);
        match self.history.append(candidate, clock) {
            AppendResult::Deduped => PollReport::Deduped,
            AppendResult::Added(tick) => {
                let render = self.timeline.on_snapshot_added(&self.history, tick);
                PollReport::Appended { tick, render }
            }
        }
    }

    /// Change the type-display policy.
    ///
    /// Node/link shape depends on the policy, so a change invalidates
    /// the entire history: the generation is bumped (discarding any
    /// in-flight poll), history and playhead are cleared, and the graph
    /// is rebuilt immediately from the last known raw text.
    pub fn set_policy<P: StatementParser>(
        &mut self,
        policy: TypeDisplayPolicy,
        parser: &P,
        clock: TimestampMs,
    ) -> PollReport {
        if policy == self.policy {
            return PollReport::Unchanged;
        }
        self.policy = policy;
        self.generation = self.generation.wrapping_add(1);
        self.history.clear();
        self.timeline.reset();

        let Some(text) = self.detector.last_text().map(str::to_string) else {
            return PollReport::Unchanged;
        };
        match parser.parse(&text) {
            Ok(statements) => self.ingest(&statements, clock),
            Err(e) => PollReport::ParseFailed(e.to_string()),
        }
    }

    /// The source path changed. Bumps the generation (discarding any
    /// in-flight poll) and clears history, playhead, and the
    /// last-observed-text marker, so the first poll of the new source
    /// always projects. Returns the new generation token.
    pub fn invalidate_source(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.detector.reset();
        self.history.clear();
        self.timeline.reset();
        self.generation
    }

    // =========================================================================
    // SEEK SURFACE (delegates to the timeline controller)
    // =========================================================================

    /// Seek to a tick, clamped to the valid range.
    pub fn seek_to_tick(&mut self, tick: Tick) -> Option<RenderRequest> {
        self.timeline.seek_to_tick(&self.history, tick)
    }

    /// Seek to the snapshot nearest to the given engine-relative time.
    pub fn seek_to_time(&mut self, t: TimestampMs) -> Option<RenderRequest> {
        self.timeline.seek_to_time(&self.history, t)
    }

    /// Jump to the newest snapshot and resume live tracking.
    pub fn go_live(&mut self) -> Option<RenderRequest> {
        self.timeline.go_live(&self.history)
    }

    /// Manual interaction with the timeline surface pins the view.
    pub fn on_timeline_interaction(&mut self) {
        self.timeline.on_timeline_interaction();
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// The history store (read-only).
    #[must_use]
    pub const fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Current playhead state.
    #[must_use]
    pub const fn playhead(&self) -> Playhead {
        self.timeline.playhead()
    }

    /// Current type-display policy.
    #[must_use]
    pub const fn policy(&self) -> TypeDisplayPolicy {
        self.policy
    }

    /// Current configuration generation.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Snapshot for a render request, if the tick is in range.
    #[must_use]
    pub fn snapshot(&self, tick: Tick) -> Option<&Snapshot> {
        self.history.get(tick)
    }
}

// =============================================================================
// TESTS
// =============================================================================
