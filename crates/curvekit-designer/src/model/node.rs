use serde::{Deserialize, Serialize};

use crate::geometry::reflect_across_line;
use curvekit_core::Point;

/// How a node treats its two handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NodeKind {
    /// Handles move independently.
    #[default]
    Corner,
    /// Handles stay on opposite rays through the anchor; each keeps its own length.
    Smooth,
}

impl NodeKind {
    pub fn toggled(self) -> Self {
        match self {
            NodeKind::Corner => NodeKind::Smooth,
            NodeKind::Smooth => NodeKind::Corner,
        }
    }
}

/// One of the three draggable points of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointRole {
    Anchor,
    Ctrl1,
    Ctrl2,
}

impl PointRole {
    pub fn is_handle(self) -> bool {
        !matches!(self, PointRole::Anchor)
    }

    /// The other handle of the same node; the anchor has no opposite.
    pub fn opposite(self) -> Option<PointRole> {
        match self {
            PointRole::Anchor => None,
            PointRole::Ctrl1 => Some(PointRole::Ctrl2),
            PointRole::Ctrl2 => Some(PointRole::Ctrl1),
        }
    }
}

/// A control vertex of the path. Handles are absolute world positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub anchor: Point,
    /// Incoming handle.
    pub ctrl1: Point,
    /// Outgoing handle.
    pub ctrl2: Point,
    pub kind: NodeKind,
}

impl Node {
    pub fn new(anchor: Point, ctrl1: Point, ctrl2: Point, kind: NodeKind) -> Self {
        Self {
            anchor,
            ctrl1,
            ctrl2,
            kind,
        }
    }

    /// A corner node whose handles sit on the anchor.
    pub fn corner(anchor: Point) -> Self {
        Self::new(anchor, anchor, anchor, NodeKind::Corner)
    }

    pub fn point(&self, role: PointRole) -> Point {
        match role {
            PointRole::Anchor => self.anchor,
            PointRole::Ctrl1 => self.ctrl1,
            PointRole::Ctrl2 => self.ctrl2,
        }
    }

    fn point_mut(&mut self, role: PointRole) -> &mut Point {
        match role {
            PointRole::Anchor => &mut self.anchor,
            PointRole::Ctrl1 => &mut self.ctrl1,
            PointRole::Ctrl2 => &mut self.ctrl2,
        }
    }

    /// Moves the anchor to `to`, carrying both handles along rigidly.
    pub fn move_anchor(&mut self, to: Point) {
        let delta = to - self.anchor;
        self.anchor = to;
        self.ctrl1 += delta;
        self.ctrl2 += delta;
    }

    /// Places a handle at `to`. Smooth nodes re-aim the opposite handle onto the
    /// exactly opposite ray, keeping that handle's previous length.
    ///
    /// Passing `PointRole::Anchor` moves the anchor.
    pub fn set_handle(&mut self, role: PointRole, to: Point) {
        let Some(opposite) = role.opposite() else {
            self.move_anchor(to);
            return;
        };

        *self.point_mut(role) = to;

        if self.kind == NodeKind::Smooth {
            let direction = self.anchor - to;
            if direction.length() == 0.0 {
                return;
            }
            let length = self.point(opposite).distance_to(&self.anchor);
            *self.point_mut(opposite) = self.anchor + Point::from_angle(direction.angle()) * length;
        }
    }

    /// Switches the node kind. Becoming Smooth re-aligns `ctrl1` against `ctrl2`.
    pub fn set_kind(&mut self, kind: NodeKind) {
        self.kind = kind;
        if kind == NodeKind::Smooth {
            let ctrl2 = self.ctrl2;
            self.set_handle(PointRole::Ctrl2, ctrl2);
        }
    }

    /// Mirror image across the line through `a` and `b`.
    pub fn reflected(&self, a: Point, b: Point) -> Node {
        Node {
            anchor: reflect_across_line(self.anchor, a, b),
            ctrl1: reflect_across_line(self.ctrl1, a, b),
            ctrl2: reflect_across_line(self.ctrl2, a, b),
            kind: self.kind,
        }
    }

    /// Same node seen when the path is traversed in the opposite direction.
    pub fn reversed(&self) -> Node {
        Node {
            ctrl1: self.ctrl2,
            ctrl2: self.ctrl1,
            ..*self
        }
    }

    pub fn translated(&self, delta: Point) -> Node {
        Node {
            anchor: self.anchor + delta,
            ctrl1: self.ctrl1 + delta,
            ctrl2: self.ctrl2 + delta,
            kind: self.kind,
        }
    }
}
