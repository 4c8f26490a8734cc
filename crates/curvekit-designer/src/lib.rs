//! # CurveKit Designer
//!
//! The interactive path-editing engine: a single cubic-Bézier path built and
//! reshaped on a pannable, zoomable canvas, with linear undo/redo and a
//! reflect-and-merge symmetry operation.
//!
//! ## Core Components
//!
//! - **Geometry**: cubic evaluation, sampled nearest point, subdivision,
//!   line reflection and collinearity tests
//! - **Model**: nodes, the open/closed path and its structural edits
//! - **Viewport**: device ↔ world transform, cursor-anchored zoom, grid snap
//! - **Interaction**: pointer state, modifiers and hit-testing
//! - **History**: bounded linear undo/redo of path snapshots
//! - **Editor**: the facade that turns input events into committed edits
//! - **SVG Export**: path data and standalone documents
//!
//! ## Architecture
//!
//! ```text
//! EditorEvent (device coordinates)
//!   └── Viewport (device → world)
//!         └── Interaction (hit-test against the Path)
//!               └── Path edit ──► History commit
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use curvekit_designer::{Editor, EditorCommand, EditorEvent, Modifiers};
//!
//! let mut editor = Editor::new();
//! for (x, y) in [(0.0, 0.0), (100.0, 0.0), (100.0, 100.0)] {
//!     editor.handle_event(EditorEvent::PointerDown { x, y, modifiers: Modifiers::NONE });
//!     editor.handle_event(EditorEvent::PointerUp { x, y });
//! }
//! editor.execute(EditorCommand::ToggleClosePath);
//! assert!(editor.path().is_closed());
//! assert!(editor.path_description().ends_with('Z'));
//! ```

pub mod editor;
pub mod geometry;
pub mod history;
pub mod interaction;
pub mod model;
pub mod svg_export;
pub mod viewport;

pub use editor::{Editor, EditorCommand, EditorEvent, EditorOutcome, Language};
pub use geometry::{
    evaluate_cubic, is_collinear, nearest_point_on_cubic, reflect_across_line, subdivide_cubic,
    Cubic, NearestPoint, Subdivision,
};
pub use history::{HistoryEntry, HistoryManager};
pub use interaction::{
    HitTarget, HitTester, InteractionState, Key, Modifiers, PendingClick, Selection,
};
pub use model::{Node, NodeKind, Path, PointRole, SegmentHit};
pub use svg_export::{export_document, path_description};
pub use viewport::{snap_to_grid, Viewport};

pub use curvekit_core::{PathError, Point};
