//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands:
//! the fixed-interval poll loop (`watch`) and the one-shot projection
//! (`project`).

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tempograph::{JsonRenderer, NTriplesParser, WatchConfig, fetch_text};
use tempograph_core::{
    Engine, EngineError, PollReport, Projector, Renderer, StatementParser, TimestampMs,
    TypeDisplayPolicy,
};

// =============================================================================
// CONFIG RESOLUTION
// =============================================================================

/// Merge the optional TOML file with CLI overrides (CLI wins).
fn resolve_config(
    source: Option<String>,
    interval_ms: Option<u64>,
    types: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<WatchConfig, EngineError> {
    let mut config = match config_path {
        Some(path) => {
            let text = std::fs::read_to_string(&path).map_err(|e| {
                EngineError::Configuration(format!("cannot read {}: {e}", path.display()))
            })?;
            WatchConfig::from_toml(&text)?
        }
        None => WatchConfig::default(),
    };

    if let Some(source) = source {
        config.source = source;
    }
    if let Some(interval_ms) = interval_ms {
        config.poll_interval_ms = Some(interval_ms);
    }
    if let Some(types) = types {
        config.type_display = Some(types.parse::<TypeDisplayPolicy>()?);
    }

    config.validate()?;
    Ok(config)
}

// =============================================================================
// WATCH
// =============================================================================

/// Poll the source at a fixed interval and stream snapshot frames.
///
/// Polls are strictly sequential: the fetch, projection, and append of
/// one cycle complete before the next interval tick is awaited, so the
/// history sees no overlapping updates.
pub async fn cmd_watch(
    source: Option<String>,
    interval_ms: Option<u64>,
    types: Option<String>,
    config_path: Option<PathBuf>,
) -> Result<(), EngineError> {
    let config = resolve_config(source, interval_ms, types, config_path)?;

    let mut engine = Engine::new(config.policy());
    let parser = NTriplesParser::new();
    let mut renderer = JsonRenderer::new(config.layout);
    let started = Instant::now();

    tracing::info!(
        source = %config.source,
        interval_ms = config.interval_ms(),
        policy = ?config.policy(),
        "watching"
    );

    let mut interval = tokio::time::interval(Duration::from_millis(config.interval_ms()));
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                poll_once(&mut engine, &parser, &mut renderer, &config.source, started).await;
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!(snapshots = engine.history().len(), "shutting down");
                return Ok(());
            }
        }
    }
}

/// One poll cycle: fetch, complete, render if the playhead advanced.
async fn poll_once(
    engine: &mut Engine,
    parser: &NTriplesParser,
    renderer: &mut JsonRenderer,
    source: &str,
    started: Instant,
) {
    let token = engine.begin_poll();

    let text = match fetch_text(source).await {
        Ok(text) => text,
        Err(e) => {
            // Never fatal: the next interval is the retry.
            tracing::warn!(error = %e, "poll skipped");
            return;
        }
    };

    let clock = TimestampMs::new(started.elapsed().as_millis() as u64);
    match engine.complete_poll(token, &text, parser, clock) {
        PollReport::Stale => tracing::debug!("stale poll discarded"),
        PollReport::Unchanged => tracing::trace!("no change"),
        PollReport::ParseFailed(reason) => tracing::warn!(%reason, "parse failed, poll skipped"),
        PollReport::Deduped => tracing::debug!("projection unchanged, deduped"),
        PollReport::Appended { tick, render } => {
            tracing::info!(tick = tick.value(), "snapshot appended");
            if let Some(request) = render {
                if let Some(snapshot) = engine.snapshot(request.tick) {
                    renderer.render(snapshot, request.animate);
                }
            }
        }
    }
}

// =============================================================================
// PROJECT
// =============================================================================

/// One-shot projection: read, parse, project, print.
pub async fn cmd_project(file: &Path, types: &str) -> Result<(), EngineError> {
    let policy = types.parse::<TypeDisplayPolicy>()?;
    let path = file
        .to_str()
        .ok_or_else(|| EngineError::Configuration("path is not valid UTF-8".to_string()))?;

    let text = fetch_text(path).await?;
    let statements = NTriplesParser::new().parse(&text)?;
    let projection = Projector::project(&statements, policy);

    tracing::info!(
        statements = statements.len(),
        nodes = projection.nodes.len(),
        links = projection.links.len(),
        "projected"
    );

    let rendered = serde_json::to_string_pretty(&projection)
        .map_err(|e| EngineError::Configuration(e.to_string()))?;
    println!("{rendered}");
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
