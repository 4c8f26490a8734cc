use std::sync::Arc;

use lyon::math::point;

use super::{Node, NodeKind, PointRole};
use crate::geometry::{nearest_point_on_cubic_sampled, subdivide_cubic, Cubic};
use curvekit_core::constants::{ISOLATED_HANDLE_OFFSET, MIN_CLOSED_NODES, SMOOTHING_FACTOR};
use curvekit_core::{PathError, Point};

/// Closest segment to a probe point, as found by the sampled search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentHit {
    pub segment: usize,
    pub t: f64,
    pub distance: f64,
}

/// The edited path: an ordered node sequence plus the closed flag.
///
/// Nodes live behind an `Arc` so history snapshots share them. Structural
/// edits build a new sequence; positional edits go through `Arc::make_mut`, so
/// a sequence held by history is copied before it is ever written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    nodes: Arc<Vec<Node>>,
    closed: bool,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a path from raw nodes. A closed flag on fewer than three nodes is
    /// dropped.
    pub fn from_nodes(nodes: Vec<Node>, closed: bool) -> Self {
        let closed = closed && nodes.len() >= MIN_CLOSED_NODES;
        Self {
            nodes: Arc::new(nodes),
            closed,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The shared node sequence, for snapshotting without a copy.
    pub fn shared_nodes(&self) -> &Arc<Vec<Node>> {
        &self.nodes
    }

    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Whether two paths share the same node allocation.
    pub fn shares_nodes_with(&self, other: &Path) -> bool {
        Arc::ptr_eq(&self.nodes, &other.nodes)
    }

    pub fn segment_count(&self) -> usize {
        match self.nodes.len() {
            0 | 1 => 0,
            n if self.closed => n,
            n => n - 1,
        }
    }

    /// Start and end node indices of a segment.
    pub fn segment_endpoints(&self, segment: usize) -> Option<(usize, usize)> {
        if segment >= self.segment_count() {
            return None;
        }
        Some((segment, (segment + 1) % self.nodes.len()))
    }

    pub fn segment(&self, segment: usize) -> Option<Cubic> {
        let (start, end) = self.segment_endpoints(segment)?;
        let a = &self.nodes[start];
        let b = &self.nodes[end];
        Some(Cubic::new(a.anchor, a.ctrl2, b.ctrl1, b.anchor))
    }

    pub fn segments(&self) -> impl Iterator<Item = Cubic> + '_ {
        (0..self.segment_count()).filter_map(|i| self.segment(i))
    }

    /// Point on segment `segment` at parameter `t`.
    pub fn evaluate(&self, segment: usize, t: f64) -> Option<Point> {
        self.segment(segment).map(|c| c.eval(t))
    }

    /// Globally closest segment to `target`. Ties keep the lower index.
    pub fn nearest_segment(&self, target: Point, samples: usize) -> Option<SegmentHit> {
        let mut best: Option<SegmentHit> = None;
        for (segment, curve) in self.segments().enumerate() {
            let hit = nearest_point_on_cubic_sampled(target, curve, samples);
            if best.is_none_or(|b| hit.distance < b.distance) {
                best = Some(SegmentHit {
                    segment,
                    t: hit.t,
                    distance: hit.distance,
                });
            }
        }
        best
    }

    fn check_index(&self, index: usize) -> Result<(), PathError> {
        if index < self.nodes.len() {
            Ok(())
        } else {
            Err(PathError::NodeOutOfRange {
                index,
                len: self.nodes.len(),
            })
        }
    }

    /// Appends a node at `anchor`, auto-smoothing the joint with the previous
    /// node.
    ///
    /// The new handles lie along the direction from the previous anchor with
    /// length `SMOOTHING_FACTOR` times the distance; the previous outgoing
    /// handle is re-aimed along that direction keeping its length. An isolated
    /// first node gets horizontal handles.
    pub fn append(&self, anchor: Point, kind: NodeKind) -> Path {
        let mut nodes = Vec::with_capacity(self.nodes.len() + 1);
        nodes.extend_from_slice(&self.nodes);

        let node = match nodes.last_mut() {
            None => {
                let offset = Point::new(ISOLATED_HANDLE_OFFSET, 0.0);
                Node::new(anchor, anchor - offset, anchor + offset, kind)
            }
            Some(prev) => {
                let delta = anchor - prev.anchor;
                let direction = Point::from_angle(delta.angle());
                let length = SMOOTHING_FACTOR * delta.length();

                let prev_length = prev.ctrl2.distance_to(&prev.anchor);
                let prev_ctrl2 = prev.anchor + direction * prev_length;
                prev.set_handle(PointRole::Ctrl2, prev_ctrl2);

                Node::new(
                    anchor,
                    anchor - direction * length,
                    anchor + direction * length,
                    kind,
                )
            }
        };
        nodes.push(node);

        Path {
            nodes: Arc::new(nodes),
            closed: self.closed,
        }
    }

    /// Moves a node's anchor, translating its handles with it.
    pub fn move_anchor(&mut self, index: usize, to: Point) -> Result<(), PathError> {
        self.check_index(index)?;
        Arc::make_mut(&mut self.nodes)[index].move_anchor(to);
        Ok(())
    }

    /// Moves one point of a node. Handles of smooth nodes keep their mirror.
    pub fn move_handle(&mut self, index: usize, role: PointRole, to: Point) -> Result<(), PathError> {
        self.check_index(index)?;
        Arc::make_mut(&mut self.nodes)[index].set_handle(role, to);
        Ok(())
    }

    /// Splits segment `segment` at `t` and inserts a smooth node there.
    ///
    /// Returns the new path and the index of the inserted node. The visible
    /// curve is unchanged.
    pub fn insert_on_segment(&self, segment: usize, t: f64) -> Result<(Path, usize), PathError> {
        let (start, end) = self
            .segment_endpoints(segment)
            .ok_or(PathError::SegmentOutOfRange {
                index: segment,
                count: self.segment_count(),
            })?;
        if !(t > 0.0 && t < 1.0) {
            return Err(PathError::InvalidParameter { t });
        }

        let a = self.nodes[start];
        let b = self.nodes[end];
        let split = subdivide_cubic(t, a.anchor, a.ctrl2, b.ctrl1, b.anchor);

        let mut nodes = (*self.nodes).clone();
        nodes[start].ctrl2 = split.start_ctrl2;
        nodes[end].ctrl1 = split.end_ctrl1;

        let inserted = start + 1;
        nodes.insert(
            inserted,
            Node::new(split.anchor, split.ctrl1, split.ctrl2, NodeKind::Smooth),
        );

        Ok((
            Path {
                nodes: Arc::new(nodes),
                closed: self.closed,
            },
            inserted,
        ))
    }

    /// Closed copy of the path with the last→first joint smoothed: both
    /// endpoint handles are aimed along last→first with length
    /// `SMOOTHING_FACTOR` times the gap.
    pub fn close(&self) -> Result<Path, PathError> {
        let n = self.nodes.len();
        if n < MIN_CLOSED_NODES {
            return Err(PathError::TooFewNodesToClose { nodes: n });
        }

        let mut nodes = (*self.nodes).clone();
        let first = nodes[0].anchor;
        let last = nodes[n - 1].anchor;
        let delta = first - last;
        let direction = Point::from_angle(delta.angle());
        let length = SMOOTHING_FACTOR * delta.length();

        nodes[n - 1].set_handle(PointRole::Ctrl2, last + direction * length);
        nodes[0].set_handle(PointRole::Ctrl1, first - direction * length);

        Ok(Path {
            nodes: Arc::new(nodes),
            closed: true,
        })
    }

    /// Open copy of the path; geometry is unchanged.
    pub fn open(&self) -> Path {
        Path {
            nodes: Arc::clone(&self.nodes),
            closed: false,
        }
    }

    /// Removes a node. Fewer than three remaining nodes force the path open.
    pub fn delete_node(&self, index: usize) -> Result<Path, PathError> {
        self.check_index(index)?;
        let mut nodes = (*self.nodes).clone();
        nodes.remove(index);
        let closed = self.closed && nodes.len() >= MIN_CLOSED_NODES;
        Ok(Path {
            nodes: Arc::new(nodes),
            closed,
        })
    }

    pub fn set_kind(&self, index: usize, kind: NodeKind) -> Result<Path, PathError> {
        self.check_index(index)?;
        let mut nodes = (*self.nodes).clone();
        nodes[index].set_kind(kind);
        Ok(Path {
            nodes: Arc::new(nodes),
            closed: self.closed,
        })
    }

    /// Axis-aligned bounds of every anchor and handle as `(min_x, min_y, max_x, max_y)`.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        if self.nodes.is_empty() {
            return None;
        }
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for p in self
            .nodes
            .iter()
            .flat_map(|n| [n.anchor, n.ctrl1, n.ctrl2])
        {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some((min_x, min_y, max_x, max_y))
    }

    /// Builds a lyon path for rendering consumers.
    pub fn render(&self) -> lyon::path::Path {
        let Some(first) = self.nodes.first() else {
            return lyon::path::Path::new();
        };

        let to_lyon = |p: Point| point(p.x as f32, p.y as f32);
        let mut builder = lyon::path::Path::builder();
        builder.begin(to_lyon(first.anchor));
        for curve in self.segments() {
            builder.cubic_bezier_to(to_lyon(curve.p1), to_lyon(curve.p2), to_lyon(curve.p3));
        }
        builder.end(self.closed);
        builder.build()
    }
}
