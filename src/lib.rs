//! # CurveKit
//!
//! An interactive cubic-Bézier path editor engine with mirror symmetry and
//! linear undo/redo.
//!
//! ## Architecture
//!
//! CurveKit is organized as a workspace with multiple crates:
//!
//! 1. **curvekit-core** - `Point`, error types and shared constants
//! 2. **curvekit-settings** - Editor settings, JSON/TOML load and save
//! 3. **curvekit-designer** - Geometry, path model, viewport, history,
//!    interaction state machine, editor facade and SVG export
//! 4. **curvekit** - Logging setup, session replay and the main binary
//!
//! ## Features
//!
//! - **Path Editing**: click-to-append, anchor and handle dragging, curve
//!   insertion, node deletion, open/close
//! - **Symmetry**: mirror a closed shape across one of its straight edges
//! - **View Control**: cursor-anchored wheel zoom, space-drag panning, grid snap
//! - **History**: bounded linear undo/redo
//! - **Export**: SVG path data and standalone documents

pub mod session;

pub use curvekit_core::{Error, PathError, Point, Result};
pub use curvekit_designer as designer;
pub use curvekit_designer::{
    Editor, EditorCommand, EditorEvent, EditorOutcome, HistoryManager, InteractionState, Key,
    Modifiers, Node, NodeKind, Path, PointRole, Viewport,
};
pub use curvekit_settings::{Config, EditorSettings, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting on stderr, so stdout stays free for
///   exported documents
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
