//! Interaction state and hit-testing for pointer input.
//!
//! The editor owns one [`InteractionState`] plus a pending click and the
//! space-held flag; this module defines those pieces and the hit-test that
//! decides what a pointer-down grabs.

use serde::{Deserialize, Serialize};

use crate::model::{NodeKind, Path, PointRole};
use curvekit_core::Point;
use curvekit_settings::EditorSettings;

/// What the pointer is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    /// A node point follows the pointer; committed on release.
    Dragging { index: usize, role: PointRole },
    /// The view follows the pointer. `last` is the previous device position.
    Panning { last: Point },
    /// The next pointer-down selects the symmetry axis.
    PickingSymmetryEdge,
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, InteractionState::Idle)
    }
}

/// A pointer-down on empty canvas that may still become an append.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingClick {
    /// Pointer-down position in world space, before snapping.
    pub world: Point,
    pub kind: NodeKind,
}

/// The single selected node point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub index: usize,
    pub role: PointRole,
}

/// Modifier keys held during a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    /// Smoothing modifier: appended nodes become Smooth.
    pub shift: bool,
    pub ctrl: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        meta: false,
    };

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::NONE
        }
    }

    /// Ctrl or Meta suppresses appending on empty canvas.
    pub fn suppresses_append(&self) -> bool {
        self.ctrl || self.meta
    }

    pub fn node_kind(&self) -> NodeKind {
        if self.shift {
            NodeKind::Smooth
        } else {
            NodeKind::Corner
        }
    }
}

/// Keys the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Space,
    Delete,
    Backspace,
    Escape,
    /// Any other key; ignored.
    Other,
}

impl Key {
    pub fn is_delete(self) -> bool {
        matches!(self, Key::Delete | Key::Backspace)
    }
}

/// What a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitTarget {
    /// An anchor, or a handle of a closed path.
    Point { index: usize, role: PointRole },
    /// Near a segment interior, at parameter `t`.
    Segment { segment: usize, t: f64 },
}

/// Hit radii in device pixels; divided by the zoom before testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitTester {
    pub anchor_radius: f64,
    pub handle_radius: f64,
    pub insert_radius: f64,
    pub samples: usize,
}

impl HitTester {
    pub fn from_settings(settings: &EditorSettings) -> Self {
        Self {
            anchor_radius: settings.anchor_hit_radius,
            handle_radius: settings.handle_hit_radius,
            insert_radius: settings.insert_hit_radius,
            samples: settings.nearest_samples,
        }
    }

    /// Tests `world` against `path` at the given zoom.
    ///
    /// Anchors win over handles, handles over segments. Handles are only
    /// pickable on closed paths. A segment hit needs a sampled `t` strictly
    /// inside (0, 1).
    pub fn hit_test(&self, path: &Path, world: Point, zoom: f64) -> Option<HitTarget> {
        let anchor_radius = self.anchor_radius / zoom;
        if let Some((index, role)) = closest(path, world, anchor_radius, &[PointRole::Anchor]) {
            return Some(HitTarget::Point { index, role });
        }

        if path.is_closed() {
            let handle_radius = self.handle_radius / zoom;
            let roles = [PointRole::Ctrl1, PointRole::Ctrl2];
            if let Some((index, role)) = closest(path, world, handle_radius, &roles) {
                return Some(HitTarget::Point { index, role });
            }
        }

        let insert_radius = self.insert_radius / zoom;
        path.nearest_segment(world, self.samples)
            .filter(|hit| hit.distance <= insert_radius && hit.t > 0.0 && hit.t < 1.0)
            .map(|hit| HitTarget::Segment {
                segment: hit.segment,
                t: hit.t,
            })
    }
}

impl Default for HitTester {
    fn default() -> Self {
        Self::from_settings(&EditorSettings::default())
    }
}

/// Closest point among `roles` of every node within `radius` of `world`.
fn closest(path: &Path, world: Point, radius: f64, roles: &[PointRole]) -> Option<(usize, PointRole)> {
    let mut best: Option<(usize, PointRole, f64)> = None;
    for (index, node) in path.nodes().iter().enumerate() {
        for &role in roles {
            let distance = node.point(role).distance_to(&world);
            if distance <= radius && best.is_none_or(|(_, _, d)| distance < d) {
                best = Some((index, role, distance));
            }
        }
    }
    best.map(|(index, role, _)| (index, role))
}
