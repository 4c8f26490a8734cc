//! Session replay: feeds a recorded event script through an [`Editor`].
//!
//! A script is a JSON array of [`EditorEvent`]s, for example
//!
//! ```json
//! [
//!   {"type": "PointerDown", "x": 0.0, "y": 0.0},
//!   {"type": "PointerUp", "x": 0.0, "y": 0.0},
//!   {"type": "Command", "command": "ToggleClosePath"}
//! ]
//! ```

use std::fs;

use anyhow::Context;
use curvekit_core::PathError;
use curvekit_designer::{Editor, EditorEvent, EditorOutcome};
use tracing::{debug, info, warn};

/// Counters collected while replaying a script.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplaySummary {
    pub events: usize,
    pub commits: usize,
    pub rejected: Vec<PathError>,
    /// Documents produced by `Export` commands, in order.
    pub exports: Vec<String>,
}

/// Parses a JSON event script.
pub fn parse_script(json: &str) -> curvekit_core::Result<Vec<EditorEvent>> {
    Ok(serde_json::from_str(json)?)
}

/// Reads and parses an event script from disk.
pub fn load_script(file: &std::path::Path) -> anyhow::Result<Vec<EditorEvent>> {
    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read script {}", file.display()))?;
    let events = parse_script(&content)
        .with_context(|| format!("Failed to parse script {}", file.display()))?;
    info!("Loaded {} events from {}", events.len(), file.display());
    Ok(events)
}

/// Runs every event through `editor`.
pub fn replay<I>(editor: &mut Editor, events: I) -> ReplaySummary
where
    I: IntoIterator<Item = EditorEvent>,
{
    let mut summary = ReplaySummary::default();
    for event in events {
        summary.events += 1;
        match editor.handle_event(event) {
            EditorOutcome::Committed => summary.commits += 1,
            EditorOutcome::Rejected(e) => {
                if e.is_user_facing() {
                    warn!("Event {} rejected: {}", summary.events, e);
                }
                summary.rejected.push(e);
            }
            EditorOutcome::Exported(document) => summary.exports.push(document),
            EditorOutcome::Unchanged | EditorOutcome::Updated => {}
        }
    }
    debug!(
        "Replayed {} events: {} commits, {} rejected",
        summary.events,
        summary.commits,
        summary.rejected.len()
    );
    summary
}
