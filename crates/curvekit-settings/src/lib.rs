//! CurveKit Settings Crate
//!
//! Handles editor configuration: tuning values for hit-testing, zoom, grid
//! snapping and history depth, loaded from and saved to JSON or TOML files.

pub mod config;
pub mod error;

pub use config::{Config, EditorSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
