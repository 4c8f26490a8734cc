//! # CurveKit Core
//!
//! Core types, errors and shared constants for CurveKit.
//! Provides the world-space `Point` used by every other crate, the layered
//! error types, and the default tuning constants of the path editor.

pub mod constants;
pub mod error;
pub mod point;

pub use error::{Error, PathError, Result};
pub use point::Point;
