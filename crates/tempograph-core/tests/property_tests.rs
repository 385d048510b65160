//! # Property-Based Tests
//!
//! Verification tests using proptest.
//!
//! These tests ensure determinism and the history/timeline invariants
//! hold for arbitrary inputs, not just the hand-picked fixtures in the
//! module tests.

use proptest::collection::vec;
use proptest::prelude::*;
use tempograph_core::{
    AppendResult, GraphNode, HistoryStore, Iri, Label, Projection, Projector, Statement, Term,
    Tick, TimelineController, TimestampMs, TypeDisplayPolicy,
};

// =============================================================================
// STRATEGIES
// =============================================================================

/// A small IRI universe keeps collisions and merges frequent.
fn iri_strategy() -> impl Strategy<Value = Iri> {
    (0u8..8).prop_map(|n| Iri::new(format!("http://ex.org/r{n}")))
}

fn predicate_strategy() -> impl Strategy<Value = Iri> {
    prop_oneof![
        Just(Iri::new("http://www.w3.org/1999/02/22-rdf-syntax-ns#type")),
        (0u8..4).prop_map(|n| Iri::new(format!("http://ex.org/p{n}"))),
    ]
}

fn term_strategy() -> impl Strategy<Value = Term> {
    prop_oneof![
        iri_strategy().prop_map(Term::Resource),
        "[a-z]{1,8}".prop_map(|value| Term::Literal { value, lang: None }),
    ]
}

fn statement_strategy() -> impl Strategy<Value = Statement> {
    (iri_strategy(), predicate_strategy(), term_strategy())
        .prop_map(|(s, p, o)| Statement::new(s, p, o))
}

fn policy_strategy() -> impl Strategy<Value = TypeDisplayPolicy> {
    prop_oneof![
        Just(TypeDisplayPolicy::On),
        Just(TypeDisplayPolicy::AsNodes),
        Just(TypeDisplayPolicy::Off),
    ]
}

fn projection_of(ids: &[u8]) -> Projection {
    Projection {
        nodes: ids
            .iter()
            .map(|id| GraphNode {
                id: Label::new(format!("n{id}")),
                label: Label::new(format!("n{id}")),
                types: Vec::new(),
                is_type_node: false,
            })
            .collect(),
        links: Vec::new(),
    }
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// Projecting the same statement sequence twice under the same
    /// policy yields structurally identical output.
    #[test]
    fn projection_is_deterministic(
        statements in vec(statement_strategy(), 0..40),
        policy in policy_strategy()
    ) {
        let first = Projector::project(&statements, policy);
        let second = Projector::project(&statements, policy);
        prop_assert_eq!(first, second);
    }

    /// No literal value ever appears as a node id, under any policy.
    #[test]
    fn literals_are_excluded_from_projection(
        statements in vec(statement_strategy(), 0..40),
        policy in policy_strategy()
    ) {
        let projection = Projector::project(&statements, policy);
        for statement in &statements {
            if let Term::Literal { value, .. } = &statement.object {
                prop_assert!(projection.nodes.iter().all(|n| n.id.as_str() != value));
            }
        }
    }

    /// Node ids are unique within one projection.
    #[test]
    fn node_ids_are_unique(
        statements in vec(statement_strategy(), 0..40),
        policy in policy_strategy()
    ) {
        let projection = Projector::project(&statements, policy);
        let mut ids: Vec<&str> = projection.nodes.iter().map(|n| n.id.as_str()).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), total);
    }

    /// Appending the same projection twice always dedups the second.
    #[test]
    fn reappend_is_idempotent(ids in vec(0u8..16, 1..8), clock in 0u64..100_000) {
        let mut history = HistoryStore::new();
        let first = history.append(projection_of(&ids), TimestampMs::new(clock));
        prop_assert_eq!(first, AppendResult::Added(Tick::new(0)));

        let second = history.append(projection_of(&ids), TimestampMs::new(clock + 1));
        prop_assert_eq!(second, AppendResult::Deduped);
        prop_assert_eq!(history.len(), 1);
    }

    /// Timestamps are strictly monotonic for any clock sequence,
    /// including ties and regressions.
    #[test]
    fn timestamps_strictly_increase(clocks in vec(0u64..10_000, 1..30)) {
        let mut history = HistoryStore::new();
        for (i, clock) in clocks.iter().enumerate() {
            // Distinct projections so nothing dedups.
            history.append(projection_of(&[(i % 256) as u8, 255]), TimestampMs::new(*clock));
        }
        let times: Vec<u64> = (0..history.len())
            .filter_map(|i| history.get(Tick::new(i)))
            .map(|s| s.timestamp.value())
            .collect();
        for pair in times.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }

    /// The playhead index stays within range under arbitrary seeks.
    #[test]
    fn playhead_always_in_range(
        history_len in 1usize..12,
        seeks in vec(0usize..64, 1..20)
    ) {
        let mut history = HistoryStore::new();
        for i in 0..history_len {
            history.append(projection_of(&[i as u8]), TimestampMs::new(i as u64 * 7));
        }

        let mut controller = TimelineController::new();
        for seek in seeks {
            controller.seek_to_tick(&history, Tick::new(seek));
            prop_assert!(controller.playhead().index.value() < history.len());
        }
    }

    /// nearest_tick returns a tick whose distance is minimal, and the
    /// earliest such tick.
    #[test]
    fn nearest_tick_is_first_minimum(
        clocks in vec(1u64..5_000, 1..15),
        target in 0u64..10_000
    ) {
        let mut history = HistoryStore::new();
        for (i, clock) in clocks.iter().enumerate() {
            history.append(projection_of(&[(i % 256) as u8, 255]), TimestampMs::new(*clock));
        }

        let t = TimestampMs::new(target);
        let tick = history.nearest_tick(t).expect("non-empty history");
        let chosen = history.get(tick).expect("in range").timestamp.distance(t);

        for i in 0..history.len() {
            let distance = history.get(Tick::new(i)).expect("in range").timestamp.distance(t);
            prop_assert!(chosen <= distance);
            // Strictly earlier ticks must be strictly worse.
            if i < tick.value() {
                prop_assert!(distance > chosen);
            }
        }
    }
}
