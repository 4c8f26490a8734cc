//! Viewport and coordinate transformation for the editing canvas.
//!
//! Converts between device coordinates (pointer pixels) and world coordinates
//! (path space). Manages cursor-anchored zoom and drag panning.

use std::fmt;

use curvekit_core::constants::{MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
use curvekit_core::Point;
use curvekit_settings::EditorSettings;

/// Represents the viewport transformation state (zoom and pan).
///
/// ```text
/// device = world * zoom + pan
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    zoom: f64,
    pan: Point,
    min_zoom: f64,
    max_zoom: f64,
    zoom_step: f64,
}

impl Viewport {
    /// Creates a viewport at 1:1 zoom with no pan.
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            pan: Point::ZERO,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            zoom_step: ZOOM_STEP,
        }
    }

    /// Creates a viewport using the zoom limits from settings.
    pub fn with_settings(settings: &EditorSettings) -> Self {
        Self {
            min_zoom: settings.min_zoom,
            max_zoom: settings.max_zoom,
            zoom_step: settings.zoom_step,
            ..Self::new()
        }
    }

    /// Gets the current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Gets the pan offset in device pixels.
    pub fn pan(&self) -> Point {
        self.pan
    }

    /// Sets the zoom level, clamped to the configured range.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    pub fn set_pan(&mut self, pan: Point) {
        self.pan = pan;
    }

    /// Pans by a device-space delta.
    pub fn pan_by(&mut self, delta: Point) {
        self.pan += delta;
    }

    /// Converts device coordinates to world coordinates.
    pub fn device_to_world(&self, device: Point) -> Point {
        (device - self.pan) / self.zoom
    }

    /// Converts world coordinates to device coordinates.
    pub fn world_to_device(&self, world: Point) -> Point {
        world * self.zoom + self.pan
    }

    /// Converts a device-space length (hit radius, drag threshold) into world units.
    pub fn device_length_to_world(&self, length: f64) -> f64 {
        length / self.zoom
    }

    /// Zooms by `factor`, keeping the world point under `device` fixed on screen.
    ///
    /// The new zoom is clamped; the pan is derived from the clamped value so the
    /// anchor point stays put even at the limits.
    pub fn zoom_at(&mut self, device: Point, factor: f64) {
        let old_zoom = self.zoom;
        let new_zoom = (old_zoom * factor).clamp(self.min_zoom, self.max_zoom);
        if new_zoom == old_zoom {
            return;
        }
        self.pan = device - (device - self.pan) * (new_zoom / old_zoom);
        self.zoom = new_zoom;
    }

    /// Applies one wheel gesture at `device`. Negative `delta_y` (scrolling
    /// up) zooms in by one step, positive zooms out, zero does nothing.
    pub fn wheel(&mut self, device: Point, delta_y: f64) {
        if delta_y < 0.0 {
            self.zoom_at(device, self.zoom_step);
        } else if delta_y > 0.0 {
            self.zoom_at(device, 1.0 / self.zoom_step);
        }
    }

    /// Resets viewport to the default state (1:1 zoom, no pan).
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan = Point::ZERO;
    }
}

/// Rounds each coordinate to the nearest multiple of `grid_size`.
pub fn snap_to_grid(p: Point, grid_size: f64) -> Point {
    if !(grid_size > 0.0) {
        return p;
    }
    Point::new(
        (p.x / grid_size).round() * grid_size,
        (p.y / grid_size).round() * grid_size,
    )
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.zoom, self.pan.x, self.pan.y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}
