//! Default tuning constants for the path editor.
//!
//! Distances suffixed `_RADIUS` and `DRAG_THRESHOLD` are in device pixels and
//! are divided by the current zoom before being compared in world space.

/// Handle length of a freshly appended node, as a fraction of the distance to
/// the previous anchor.
pub const SMOOTHING_FACTOR: f64 = 0.25;

/// Handle offset along the x-axis for the first, isolated node.
pub const ISOLATED_HANDLE_OFFSET: f64 = 50.0;

/// Absolute cross-product magnitude below which three points count as collinear.
pub const COLLINEAR_TOLERANCE: f64 = 1e-3;

/// Number of parameter intervals sampled by the nearest-point search.
pub const NEAREST_SAMPLES: usize = 50;

/// Smallest sample count accepted for the nearest-point search.
pub const MIN_NEAREST_SAMPLES: usize = 30;

/// Multiplicative zoom step per wheel tick.
pub const ZOOM_STEP: f64 = 1.1;

pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 10.0;

/// Grid spacing in world units.
pub const GRID_SIZE: f64 = 20.0;

/// Pointer travel (device px) that turns a click into a drag.
pub const DRAG_THRESHOLD: f64 = 5.0;

pub const ANCHOR_HIT_RADIUS: f64 = 10.0;
pub const HANDLE_HIT_RADIUS: f64 = 8.0;
pub const INSERT_HIT_RADIUS: f64 = 10.0;

/// Width and height of the exported SVG canvas in world units.
pub const EXPORT_EXTENT: f64 = 4000.0;

/// Maximum number of history entries kept.
pub const DEFAULT_HISTORY_DEPTH: usize = 100;

/// Minimum number of nodes for a closed path.
pub const MIN_CLOSED_NODES: usize = 3;
