//! Reflect-and-merge: mirror a closed path across one of its straight edges.

use super::{Node, NodeKind, Path};
use crate::geometry::{is_collinear, reflect_across_line};
use curvekit_core::constants::{COLLINEAR_TOLERANCE, MIN_CLOSED_NODES};
use curvekit_core::{PathError, Point};

impl Path {
    /// Mirrors the path across the straight edge nearest `picked` and merges
    /// both halves into one closed outline.
    ///
    /// The picked edge from node A to node B becomes the symmetry axis and
    /// disappears from the outline. The result is
    /// `[A', mirrored intermediates (reversed), B', original intermediates]`
    /// where the intermediates are the nodes strictly between B and A going
    /// forward. A and B become smooth, each taking the mirror of its outer
    /// handle as its new inner handle. The seam handles are not re-aligned, so
    /// they are only collinear when the outer handle is perpendicular to the
    /// axis; the next `move_handle` on A or B snaps the opposite handle.
    pub fn reflect_and_merge(&self, picked: Point, samples: usize) -> Result<Path, PathError> {
        let n = self.len();
        if !self.is_closed() || n < MIN_CLOSED_NODES {
            return Err(PathError::NoEligiblePath {
                nodes: n,
                closed: self.is_closed(),
            });
        }

        let hit = self
            .nearest_segment(picked, samples)
            .ok_or(PathError::NoEligiblePath {
                nodes: n,
                closed: true,
            })?;
        let a_index = hit.segment;
        let b_index = (a_index + 1) % n;
        let a = self.nodes()[a_index];
        let b = self.nodes()[b_index];

        let straight = is_collinear(a.anchor, b.anchor, a.ctrl2, COLLINEAR_TOLERANCE)
            && is_collinear(a.anchor, b.anchor, b.ctrl1, COLLINEAR_TOLERANCE);
        if !straight {
            return Err(PathError::NotStraightEdge {
                segment: a_index,
            });
        }

        let axis = (a.anchor, b.anchor);
        let intermediates: Vec<Node> = (1..n - 1)
            .map(|offset| self.nodes()[(b_index + offset) % n])
            .collect();

        let new_a = Node::new(
            a.anchor,
            a.ctrl1,
            reflect_across_line(a.ctrl1, axis.0, axis.1),
            NodeKind::Smooth,
        );
        let new_b = Node::new(
            b.anchor,
            reflect_across_line(b.ctrl2, axis.0, axis.1),
            b.ctrl2,
            NodeKind::Smooth,
        );

        let mut nodes = Vec::with_capacity(2 * intermediates.len() + 2);
        nodes.push(new_a);
        nodes.extend(
            intermediates
                .iter()
                .rev()
                .map(|node| node.reflected(axis.0, axis.1).reversed()),
        );
        nodes.push(new_b);
        nodes.extend(intermediates);

        Ok(Path::from_nodes(nodes, true))
    }
}
