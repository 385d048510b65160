//! # Change Detector
//!
//! Byte-identity pre-filter over the raw document text. Suppresses
//! re-projection on no-op polls so the projector and renderer are not
//! exercised for text that cannot have changed the graph.
//!
//! This is a cheap pre-filter only: two different raw texts can still
//! project to the same graph (whitespace edits, statement reordering),
//! so the history store's structural dedup remains authoritative.

/// Holds the last raw document text observed (`None` initially).
#[derive(Debug, Default)]
pub struct ChangeDetector {
    last_text: Option<String>,
}

impl ChangeDetector {
    /// Create a detector that has observed nothing yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe a successful poll result.
    ///
    /// Returns `false` when the text is byte-identical to the
    /// last-observed text (skip projection). Otherwise stores the new
    /// text as last-observed and returns `true` (forward to projector).
    pub fn observe(&mut self, text: &str) -> bool {
        if self.last_text.as_deref() == Some(text) {
            return false;
        }
        self.last_text = Some(text.to_string());
        true
    }

    /// Last raw text observed, if any. Used to rebuild the history
    /// immediately after a type-display policy change.
    #[must_use]
    pub fn last_text(&self) -> Option<&str> {
        self.last_text.as_deref()
    }

    /// Forget the last-observed text. Called when the source path
    /// changes so the first poll of the new source always projects.
    pub fn reset(&mut self) {
        self.last_text = None;
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_observation_always_changes() {
        let mut detector = ChangeDetector::new();
        assert!(detector.observe(":a :knows :b ."));
    }

    #[test]
    fn identical_text_is_suppressed() {
        let mut detector = ChangeDetector::new();
        assert!(detector.observe(":a :knows :b ."));
        assert!(!detector.observe(":a :knows :b ."));
    }

    #[test]
    fn changed_text_passes_and_becomes_baseline() {
        let mut detector = ChangeDetector::new();
        assert!(detector.observe("v1"));
        assert!(detector.observe("v2"));
        assert!(!detector.observe("v2"));
    }

    #[test]
    fn whitespace_edit_counts_as_change() {
        // Byte identity only; structural dedup downstream catches this.
        let mut detector = ChangeDetector::new();
        assert!(detector.observe(":a :knows :b ."));
        assert!(detector.observe(":a  :knows :b ."));
    }

    #[test]
    fn reset_forgets_baseline() {
        let mut detector = ChangeDetector::new();
        assert!(detector.observe("v1"));
        detector.reset();
        assert!(detector.last_text().is_none());
        assert!(detector.observe("v1"));
    }

    #[test]
    fn last_text_exposes_cached_document() {
        let mut detector = ChangeDetector::new();
        detector.observe("v1");
        assert_eq!(detector.last_text(), Some("v1"));
    }
}
