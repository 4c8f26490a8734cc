//! Path model: nodes, the open/closed node sequence and its structural edits.

mod node;
mod path;
mod symmetry;

pub use curvekit_core::Point;
pub use node::{Node, NodeKind, PointRole};
pub use path::{Path, SegmentHit};
