//! # Core Type Definitions
//!
//! This module contains all core types for the tempograph engine:
//! - RDF identifiers and terms (`Iri`, `Label`, `Term`, `Statement`)
//! - Graph projection structures (`GraphNode`, `GraphLink`, `Projection`)
//! - History structures (`Snapshot`, `Tick`, `TimestampMs`)
//! - Display configuration (`TypeDisplayPolicy`)
//! - Error types (`EngineError`)
//!
//! ## Determinism Guarantees
//!
//! All types in this module:
//! - Use integer arithmetic only (no floating-point; the time axis is
//!   carried as integer milliseconds)
//! - Implement `Ord` where they act as map keys, for deterministic
//!   ordering in `BTreeMap`/`BTreeSet`

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// RDF IDENTIFIERS & TERMS
// =============================================================================

/// A full internationalized resource identifier.
/// The unique name of a graph subject, predicate, or resource object.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Iri(pub String);

impl Iri {
    /// Create a new IRI from a string.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the IRI as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A shortened display label derived from an IRI.
///
/// Labels are the natural key of graph nodes. Two distinct IRIs may
/// collide to the same label; that lossiness is accepted at the display
/// layer and not corrected here.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Label(pub String);

impl Label {
    /// Create a new label from a string.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The object position of a statement.
///
/// Always a tagged variant: either a resource (another IRI, which the
/// projector turns into a node and a link) or a literal value with an
/// optional language tag (which the projector drops entirely).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Term {
    /// A resource object: another node in the graph.
    Resource(Iri),
    /// A literal value, never visualized as graph structure.
    Literal {
        /// The lexical form of the literal.
        value: String,
        /// Optional language tag (e.g. `en`, `de`).
        lang: Option<String>,
    },
}

impl Term {
    /// True when the object is a resource rather than a literal.
    #[must_use]
    pub const fn is_resource(&self) -> bool {
        matches!(self, Self::Resource(_))
    }
}

/// One subject-predicate-object fact, the unit the parser capability
/// emits. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    /// Subject of the fact.
    pub subject: Iri,
    /// Predicate (relationship) of the fact.
    pub predicate: Iri,
    /// Object of the fact: resource or literal.
    pub object: Term,
}

impl Statement {
    /// Create a new statement.
    #[must_use]
    pub fn new(subject: Iri, predicate: Iri, object: Term) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }
}

// =============================================================================
// GRAPH PROJECTION
// =============================================================================

/// A node in a projected graph snapshot.
///
/// `id` is the shortened IRI and is unique within one projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Shortened IRI; the natural key within a snapshot.
    pub id: Label,
    /// Display label (identical to `id` in this projection).
    pub label: Label,
    /// Shortened `rdf:type` object labels, populated only under
    /// `TypeDisplayPolicy::On`. A display list, not a set: repeated
    /// type statements produce repeated entries.
    pub types: Vec<Label>,
    /// True only for nodes synthesized under `TypeDisplayPolicy::AsNodes`.
    pub is_type_node: bool,
}

/// A directed link in a projected graph snapshot.
///
/// Multiple links between the same ordered pair with different
/// predicates are distinct.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GraphLink {
    /// Shortened source node id.
    pub source: Label,
    /// Shortened target node id.
    pub target: Label,
    /// Shortened predicate IRI.
    pub predicate: Label,
}

/// The `(nodes, links)` pair produced by one projection pass.
///
/// This is the candidate the history store dedups and timestamps into
/// a [`Snapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Projection {
    /// Nodes in first-encounter order.
    pub nodes: Vec<GraphNode>,
    /// Links in emission order.
    pub links: Vec<GraphLink>,
}

impl Projection {
    /// Check if the projection is empty (no nodes, no links).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.links.is_empty()
    }
}

// =============================================================================
// HISTORY PRIMITIVES
// =============================================================================

/// Milliseconds elapsed since the engine started.
///
/// Sampled from a monotonic clock at capture time, never from the
/// document. Integer milliseconds keep the whole engine float-free.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct TimestampMs(pub u64);

impl TimestampMs {
    /// Create a new timestamp with the given millisecond value.
    #[must_use]
    pub const fn new(ms: u64) -> Self {
        Self(ms)
    }

    /// Get the raw millisecond value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Absolute distance to another timestamp, in milliseconds.
    #[must_use]
    pub const fn distance(self, other: Self) -> u64 {
        self.0.abs_diff(other.0)
    }
}

/// Integer index of a snapshot within the history (0-based).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Tick(pub usize);

impl Tick {
    /// Create a new tick with the given position.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw position value.
    #[must_use]
    pub const fn value(self) -> usize {
        self.0
    }
}

/// One immutable point-in-time projection of the graph.
///
/// Owned exclusively by the history store once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The projected node-link graph.
    pub graph: Projection,
    /// Milliseconds since engine start, sampled at capture time.
    pub timestamp: TimestampMs,
}

impl Snapshot {
    /// Nodes of the projected graph.
    #[must_use]
    pub fn nodes(&self) -> &[GraphNode] {
        &self.graph.nodes
    }

    /// Links of the projected graph.
    #[must_use]
    pub fn links(&self) -> &[GraphLink] {
        &self.graph.links
    }
}

// =============================================================================
// TYPE DISPLAY POLICY
// =============================================================================

/// How `rdf:type` statements appear in the projected graph.
///
/// Process-wide configuration, changeable at runtime. A change
/// invalidates the entire history, because node/link shape depends on
/// it (see `Engine::set_policy`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TypeDisplayPolicy {
    /// Types shown as tags on the subject node's `types` list.
    #[default]
    On,
    /// Types shown as synthesized nodes with a `type` link.
    #[serde(rename = "nodes")]
    AsNodes,
    /// Types suppressed entirely.
    Off,
}

impl std::str::FromStr for TypeDisplayPolicy {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on" => Ok(Self::On),
            "nodes" => Ok(Self::AsNodes),
            "off" => Ok(Self::Off),
            other => Err(EngineError::Configuration(format!(
                "unknown type display policy: {other} (expected on|nodes|off)"
            ))),
        }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the tempograph engine.
///
/// None of these are fatal: the engine is designed to run indefinitely
/// against an intermittently-available or momentarily-invalid source.
/// Every poll is an implicit retry.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Fetch failed or timed out. Logged, poll skipped, retried on the
    /// next interval.
    #[error("transport error: {0}")]
    Transport(String),

    /// Malformed RDF. Logged, poll skipped, treated identically to
    /// no-change.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid configuration (e.g. source path syntax). Surfaced at the
    /// settings surface; never disturbs an already-running history.
    #[error("configuration error: {0}")]
    Configuration(String),
}

// =============================================================================
// TESTS
// =============================================================================
