//! # Triple Projector
//!
//! Converts a flat list of statements into a node-link [`Projection`]
//! under the current [`TypeDisplayPolicy`].
//!
//! Two passes over the statement sequence:
//! 1. Type-index pass: accumulate shortened `rdf:type` object labels
//!    per shortened subject (no deduplication — repeated identical
//!    type statements produce repeated entries, mirroring source
//!    multiplicity).
//! 2. Build pass: create nodes and links per statement. Node identity
//!    is the shortened label; re-declaring an id is a no-op merge, so
//!    fields are set exactly once, at first encounter.
//!
//! Literal-valued objects produce no node and no link: literal facts
//! are not visualized as graph structure.
//!
//! No failure mode — malformed statements are assumed already filtered
//! out by the upstream parser capability.

use crate::shorten::shorten;
use crate::types::{GraphLink, GraphNode, Label, Projection, Statement, Term, TypeDisplayPolicy};
use std::collections::{BTreeMap, BTreeSet};

/// Shortened form of the `rdf:type` predicate.
const TYPE_PREDICATE: &str = "type";

// =============================================================================
// PROJECTION BUILDER
// =============================================================================

/// Accumulates nodes and links in first-encounter order while keeping
/// membership lookups deterministic.
#[derive(Default)]
struct ProjectionBuilder {
    nodes: Vec<GraphNode>,
    links: Vec<GraphLink>,
    /// Node id -> position in `nodes`. BTreeMap for determinism.
    node_index: BTreeMap<String, usize>,
    /// Already-emitted (source, target, predicate) triples.
    seen_links: BTreeSet<(String, String, String)>,
}

impl ProjectionBuilder {
    /// Ensure a node with the given id exists. Fields are set only at
    /// first encounter; later declarations are no-op merges.
    fn ensure_node(&mut self, id: &str, types: Vec<Label>, is_type_node: bool) {
        if self.node_index.contains_key(id) {
            return;
        }
        self.node_index.insert(id.to_string(), self.nodes.len());
        self.nodes.push(GraphNode {
            id: Label::new(id),
            label: Label::new(id),
            types,
            is_type_node,
        });
    }

    /// Emit a directed link. Duplicate identical declarations are
    /// idempotent; same pair with a different predicate is distinct.
    fn push_link(&mut self, source: &str, target: &str, predicate: &str) {
        let key = (
            source.to_string(),
            target.to_string(),
            predicate.to_string(),
        );
        if !self.seen_links.insert(key) {
            return;
        }
        self.links.push(GraphLink {
            source: Label::new(source),
            target: Label::new(target),
            predicate: Label::new(predicate),
        });
    }

    fn finish(self) -> Projection {
        Projection {
            nodes: self.nodes,
            links: self.links,
        }
    }
}

// =============================================================================
// PROJECTOR
// =============================================================================

/// The Projector turns parsed statements into a candidate projection.
///
/// Stateless; the timestamp of the resulting snapshot is assigned by
/// the history store at append time, not here.
pub struct Projector;

impl Projector {
    /// Project a statement sequence into a `(nodes, links)` pair under
    /// the given policy.
    ///
    /// Deterministic: the same statement sequence under the same policy
    /// always yields a structurally identical projection.
    #[must_use]
    pub fn project(statements: &[Statement], policy: TypeDisplayPolicy) -> Projection {
        // Pass 1: type index. Only resource-valued type objects count;
        // a literal in object position is dropped like any other literal.
        let mut types_of: BTreeMap<String, Vec<Label>> = BTreeMap::new();
        for statement in statements {
            if shorten(statement.predicate.as_str()) != TYPE_PREDICATE {
                continue;
            }
            if let Term::Resource(object) = &statement.object {
                types_of
                    .entry(shorten(statement.subject.as_str()).to_string())
                    .or_default()
                    .push(Label::new(shorten(object.as_str())));
            }
        }

        let types_for = |id: &str| -> Vec<Label> {
            if policy == TypeDisplayPolicy::On {
                types_of.get(id).cloned().unwrap_or_default()
            } else {
                Vec::new()
            }
        };

        // Pass 2: build.
        let mut builder = ProjectionBuilder::default();
        for statement in statements {
            let subject = shorten(statement.subject.as_str());
            let predicate = shorten(statement.predicate.as_str());

            if predicate == TYPE_PREDICATE {
                builder.ensure_node(subject, types_for(subject), false);
                if policy == TypeDisplayPolicy::AsNodes {
                    if let Term::Resource(object) = &statement.object {
                        let type_id = shorten(object.as_str());
                        builder.ensure_node(type_id, Vec::new(), true);
                        builder.push_link(subject, type_id, TYPE_PREDICATE);
                    }
                }
                // Under On/Off the type relation is a tag or suppressed,
                // never a structural edge.
                continue;
            }

            builder.ensure_node(subject, types_for(subject), false);
            if let Term::Resource(object) = &statement.object {
                let target = shorten(object.as_str());
                builder.ensure_node(target, types_for(target), false);
                builder.push_link(subject, target, predicate);
            }
        }

        builder.finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
