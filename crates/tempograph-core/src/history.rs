//! # State History Store
//!
//! Append-only, time-ordered sequence of graph snapshots, indexed by
//! integer tick (0-based position) and by timestamp.
//!
//! Invariants:
//! - The history never shrinks and never reorders; `append` is the
//!   only mutation path (besides the full `clear` used on
//!   configuration changes).
//! - Timestamps are strictly monotonic across snapshots.
//! - No two adjacent snapshots are structurally equal in their
//!   `(nodes, links)` projection.
//!
//! Structural equality is ORDER-SENSITIVE: the projector's output is
//! compared verbatim, with no sort normalization, so two semantically
//! identical documents with differently ordered statements may produce
//! distinct snapshots. The UI timeline treats ticks as stable
//! historical facts; once rendered at tick N, that tick's content never
//! changes retroactively.

use crate::types::{Projection, Snapshot, Tick, TimestampMs};
use serde::{Deserialize, Serialize};

// =============================================================================
// APPEND RESULT
// =============================================================================

/// Outcome of one `append` attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppendResult {
    /// A new snapshot was appended at the given tick.
    Added(Tick),
    /// The candidate equals the newest snapshot; history untouched.
    Deduped,
}

// =============================================================================
// HISTORY STORE
// =============================================================================

/// Ordered sequence of snapshots, insertion order = temporal order.
#[derive(Debug, Default)]
pub struct HistoryStore {
    snapshots: Vec<Snapshot>,
}

impl HistoryStore {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a candidate projection captured at `clock` milliseconds
    /// since engine start.
    ///
    /// Dedups against the newest snapshot only, by deep structural
    /// equality over the full node/link sets (including `types`
    /// lists, order-sensitive). The stored timestamp is clamped to
    /// strictly exceed the previous snapshot's, so the monotonicity
    /// invariant holds even when the integer-millisecond clock ties.
    pub fn append(&mut self, candidate: Projection, clock: TimestampMs) -> AppendResult {
        if let Some(last) = self.snapshots.last() {
            if last.graph == candidate {
                return AppendResult::Deduped;
            }
        }

        let floor = self
            .snapshots
            .last()
            .map_or(0, |s| s.timestamp.value().saturating_add(1));
        let timestamp = TimestampMs::new(clock.value().max(floor));

        self.snapshots.push(Snapshot {
            graph: candidate,
            timestamp,
        });
        AppendResult::Added(Tick::new(self.snapshots.len() - 1))
    }

    /// Number of snapshots in the history.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// True when no snapshot has been appended yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshot at the given tick, if in range.
    #[must_use]
    pub fn get(&self, tick: Tick) -> Option<&Snapshot> {
        self.snapshots.get(tick.value())
    }

    /// Newest snapshot, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    /// Tick of the newest snapshot, if any.
    #[must_use]
    pub fn max_tick(&self) -> Option<Tick> {
        self.snapshots.len().checked_sub(1).map(Tick::new)
    }

    /// Timestamp of the newest snapshot, if any.
    #[must_use]
    pub fn max_time(&self) -> Option<TimestampMs> {
        self.snapshots.last().map(|s| s.timestamp)
    }

    /// Tick whose snapshot timestamp is closest to `t`.
    ///
    /// Ties break toward the earlier tick: the scan runs from tick 0
    /// upward and keeps the first minimum found.
    #[must_use]
    pub fn nearest_tick(&self, t: TimestampMs) -> Option<Tick> {
        let mut best: Option<(Tick, u64)> = None;
        for (index, snapshot) in self.snapshots.iter().enumerate() {
            let distance = snapshot.timestamp.distance(t);
            match best {
                Some((_, best_distance)) if distance >= best_distance => {}
                _ => best = Some((Tick::new(index), distance)),
            }
        }
        best.map(|(tick, _)| tick)
    }

    /// Discard all snapshots. Only invoked on source/policy changes,
    /// which invalidate the entire history.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GraphLink, GraphNode, Label};

    fn projection(node_ids: &[&str]) -> Projection {
        Projection {
            nodes: node_ids
                .iter()
                .map(|id| GraphNode {
                    id: Label::new(*id),
                    label: Label::new(*id),
                    types: Vec::new(),
                    is_type_node: false,
                })
                .collect(),
            links: Vec::new(),
        }
    }

    #[test]
    fn append_assigns_sequential_ticks() {
        let mut history = HistoryStore::new();
        assert_eq!(
            history.append(projection(&["a"]), TimestampMs::new(10)),
            AppendResult::Added(Tick::new(0))
        );
        assert_eq!(
            history.append(projection(&["a", "b"]), TimestampMs::new(20)),
            AppendResult::Added(Tick::new(1))
        );
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn idempotent_reappend_is_deduped() {
        let mut history = HistoryStore::new();
        history.append(projection(&["a"]), TimestampMs::new(10));
        assert_eq!(
            history.append(projection(&["a"]), TimestampMs::new(20)),
            AppendResult::Deduped
        );
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn dedup_compares_newest_only() {
        // a, then b, then a again: the third is NOT a duplicate of the
        // newest snapshot, so it is appended.
        let mut history = HistoryStore::new();
        history.append(projection(&["a"]), TimestampMs::new(10));
        history.append(projection(&["b"]), TimestampMs::new(20));
        assert_eq!(
            history.append(projection(&["a"]), TimestampMs::new(30)),
            AppendResult::Added(Tick::new(2))
        );
    }

    #[test]
    fn timestamps_are_strictly_monotonic() {
        let mut history = HistoryStore::new();
        history.append(projection(&["a"]), TimestampMs::new(100));
        // Clock tie: same millisecond. Clamped to 101.
        history.append(projection(&["b"]), TimestampMs::new(100));
        // Clock regression would also be clamped.
        history.append(projection(&["c"]), TimestampMs::new(50));

        let times: Vec<u64> = (0..history.len())
            .filter_map(|i| history.get(Tick::new(i)))
            .map(|s| s.timestamp.value())
            .collect();
        assert_eq!(times, vec![100, 101, 102]);
        for pair in times.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn dedup_is_order_sensitive() {
        // Same node set, different insertion order: treated as distinct.
        // Deliberate fidelity choice; see DESIGN.md.
        let mut history = HistoryStore::new();
        history.append(projection(&["a", "b"]), TimestampMs::new(10));
        assert_eq!(
            history.append(projection(&["b", "a"]), TimestampMs::new(20)),
            AppendResult::Added(Tick::new(1))
        );
    }

    #[test]
    fn dedup_includes_types_lists() {
        let mut tagged = projection(&["a"]);
        tagged.nodes[0].types.push(Label::new("Person"));

        let mut history = HistoryStore::new();
        history.append(projection(&["a"]), TimestampMs::new(10));
        assert_eq!(
            history.append(tagged, TimestampMs::new(20)),
            AppendResult::Added(Tick::new(1))
        );
    }

    #[test]
    fn dedup_includes_links() {
        let mut linked = projection(&["a", "b"]);
        linked.links.push(GraphLink {
            source: Label::new("a"),
            target: Label::new("b"),
            predicate: Label::new("knows"),
        });

        let mut history = HistoryStore::new();
        history.append(projection(&["a", "b"]), TimestampMs::new(10));
        assert_eq!(
            history.append(linked, TimestampMs::new(20)),
            AppendResult::Added(Tick::new(1))
        );
    }

    #[test]
    fn nearest_tick_breaks_ties_toward_earlier() {
        // Snapshots at 1000ms and 3000ms; 2000ms is equidistant.
        let mut history = HistoryStore::new();
        history.append(projection(&["a"]), TimestampMs::new(1000));
        history.append(projection(&["b"]), TimestampMs::new(3000));
        assert_eq!(
            history.nearest_tick(TimestampMs::new(2000)),
            Some(Tick::new(0))
        );
    }

    #[test]
    fn nearest_tick_finds_closest() {
        let mut history = HistoryStore::new();
        history.append(projection(&["a"]), TimestampMs::new(1000));
        history.append(projection(&["b"]), TimestampMs::new(3000));
        history.append(projection(&["c"]), TimestampMs::new(8000));
        assert_eq!(
            history.nearest_tick(TimestampMs::new(3400)),
            Some(Tick::new(1))
        );
        assert_eq!(
            history.nearest_tick(TimestampMs::new(0)),
            Some(Tick::new(0))
        );
        assert_eq!(
            history.nearest_tick(TimestampMs::new(999_999)),
            Some(Tick::new(2))
        );
    }

    #[test]
    fn nearest_tick_on_empty_history_is_none() {
        let history = HistoryStore::new();
        assert_eq!(history.nearest_tick(TimestampMs::new(0)), None);
    }

    #[test]
    fn clear_empties_history() {
        let mut history = HistoryStore::new();
        history.append(projection(&["a"]), TimestampMs::new(10));
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.max_tick(), None);
        assert_eq!(history.max_time(), None);
    }

    #[test]
    fn max_tick_and_time_track_newest() {
        let mut history = HistoryStore::new();
        history.append(projection(&["a"]), TimestampMs::new(10));
        history.append(projection(&["b"]), TimestampMs::new(25));
        assert_eq!(history.max_tick(), Some(Tick::new(1)));
        assert_eq!(history.max_time(), Some(TimestampMs::new(25)));
    }
}
