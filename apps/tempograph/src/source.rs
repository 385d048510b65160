//! # Source Adapter
//!
//! The consumed fetchText capability: given a path, return the raw
//! document text. Tolerates `~`-prefixed home-relative paths and
//! arbitrary absolute/relative paths. Every failure maps to
//! `EngineError::Transport`; the poll loop logs it and retries on the
//! next interval.

use std::path::PathBuf;
use tempograph_core::EngineError;

/// Expand a leading `~` or `~/` to the user's home directory.
pub fn expand_home(path: &str) -> Result<PathBuf, EngineError> {
    let Some(rest) = path.strip_prefix('~') else {
        return Ok(PathBuf::from(path));
    };
    let home = std::env::var("HOME")
        .map_err(|_| EngineError::Configuration("cannot expand '~': HOME is not set".to_string()))?;
    let rest = rest.strip_prefix('/').unwrap_or(rest);
    Ok(PathBuf::from(home).join(rest))
}

/// Fetch the raw document text for one poll cycle.
pub async fn fetch_text(path: &str) -> Result<String, EngineError> {
    let resolved = expand_home(path)?;
    tokio::fs::read_to_string(&resolved)
        .await
        .map_err(|e| EngineError::Transport(format!("{}: {e}", resolved.display())))
}

// =============================================================================
// TESTS
// =============================================================================
