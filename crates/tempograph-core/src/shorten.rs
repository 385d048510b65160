//! # URI Shortener
//!
//! Pure mapping from a full IRI to its display label: the substring
//! after the last `/` or `#`, or the IRI unchanged when neither
//! separator occurs. Leaf dependency of the projector.
//!
//! Total, no failure mode. Distinct IRIs may collide to the same label
//! (`ex:a#foo` and `ex:b#foo` both shorten to `foo`); that is accepted
//! display-layer lossiness, not corrected by this engine.

use crate::types::{Iri, Label};

/// Shorten an IRI string to its last path/fragment segment.
#[must_use]
pub fn shorten(iri: &str) -> &str {
    match iri.rfind(['/', '#']) {
        Some(pos) => &iri[pos + 1..],
        None => iri,
    }
}

/// Shorten an [`Iri`] into an owned [`Label`].
#[must_use]
pub fn shorten_label(iri: &Iri) -> Label {
    Label::new(shorten(iri.as_str()))
}

// =============================================================================
// TESTS
// =============================================================================
