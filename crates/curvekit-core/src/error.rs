//! Error handling for CurveKit
//!
//! Provides the error types shared by the editing engine:
//! - Path errors (structural edits and the symmetry operation)
//! - A unified `Error` wrapping path, I/O and serialization failures
//!
//! All error types use `thiserror`. Every path error is a recoverable,
//! user-facing condition; none of them leaves the path in a modified state.

use thiserror::Error;

/// Path model error type
///
/// Raised by structural path operations. Callers display these conditions;
/// the path is left untouched whenever one is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// Symmetry was requested against a curved edge
    #[error("Segment {segment} is not a straight edge")]
    NotStraightEdge {
        /// Index of the segment nearest to the picked point.
        segment: usize,
    },

    /// Symmetry needs a closed path with at least three nodes
    #[error("Symmetry needs a closed path with at least 3 nodes (have {nodes}, closed: {closed})")]
    NoEligiblePath {
        /// Number of nodes in the path.
        nodes: usize,
        /// Whether the path is closed.
        closed: bool,
    },

    /// Node index does not exist
    #[error("Node index {index} out of range (nodes: {len})")]
    NodeOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of nodes in the path.
        len: usize,
    },

    /// Segment index does not exist
    #[error("Segment index {index} out of range (segments: {count})")]
    SegmentOutOfRange {
        /// The requested segment index.
        index: usize,
        /// Number of segments in the path.
        count: usize,
    },

    /// Curve parameter outside the open interval (0, 1)
    #[error("Curve parameter {t} must lie strictly between 0 and 1")]
    InvalidParameter {
        /// The rejected parameter.
        t: f64,
    },

    /// A path with fewer than three nodes cannot be closed
    #[error("Cannot close a path with {nodes} nodes")]
    TooFewNodesToClose {
        /// Number of nodes in the path.
        nodes: usize,
    },
}

impl PathError {
    /// Whether the UI should surface this condition to the user.
    ///
    /// `NoEligiblePath` is expected to be prevented by the UI disabling the
    /// symmetry command, so the editor resets silently instead.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, PathError::NoEligiblePath { .. })
    }
}

/// Main error type for CurveKit
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Path model error
    #[error(transparent)]
    Path(#[from] PathError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a path model error
    pub fn is_path_error(&self) -> bool {
        matches!(self, Error::Path(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
