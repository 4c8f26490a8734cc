//! Configuration and settings management for CurveKit
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats, chosen by file extension, stored in
//! the platform-specific configuration directory by default.

use curvekit_core::constants;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, SettingsResult};

/// Editor tuning settings
///
/// Radii and the drag threshold are in device pixels; the editor divides them
/// by the current zoom before hit-testing in world space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Grid spacing in world units
    pub grid_size: f64,
    /// Whether grid snapping starts enabled
    pub snap_enabled: bool,
    /// Lower zoom clamp
    pub min_zoom: f64,
    /// Upper zoom clamp
    pub max_zoom: f64,
    /// Zoom factor per wheel tick
    pub zoom_step: f64,
    /// Anchor pick radius
    pub anchor_hit_radius: f64,
    /// Handle pick radius (closed paths only)
    pub handle_hit_radius: f64,
    /// Distance to a segment below which a click inserts a node
    pub insert_hit_radius: f64,
    /// Pointer travel that turns a click into a drag
    pub drag_threshold: f64,
    /// Maximum number of history entries
    pub history_depth: usize,
    /// Parameter intervals sampled by the nearest-point search
    pub nearest_samples: usize,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            grid_size: constants::GRID_SIZE,
            snap_enabled: false,
            min_zoom: constants::MIN_ZOOM,
            max_zoom: constants::MAX_ZOOM,
            zoom_step: constants::ZOOM_STEP,
            anchor_hit_radius: constants::ANCHOR_HIT_RADIUS,
            handle_hit_radius: constants::HANDLE_HIT_RADIUS,
            insert_hit_radius: constants::INSERT_HIT_RADIUS,
            drag_threshold: constants::DRAG_THRESHOLD,
            history_depth: constants::DEFAULT_HISTORY_DEPTH,
            nearest_samples: constants::NEAREST_SAMPLES,
        }
    }
}

impl EditorSettings {
    /// Validate editor settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.grid_size > 0.0) {
            return Err(ConfigError::out_of_range("grid_size", self.grid_size));
        }
        if !(self.min_zoom > 0.0) {
            return Err(ConfigError::out_of_range("min_zoom", self.min_zoom));
        }
        if !(self.max_zoom >= self.min_zoom) {
            return Err(ConfigError::out_of_range("max_zoom", self.max_zoom));
        }
        if !(self.zoom_step > 1.0) {
            return Err(ConfigError::out_of_range("zoom_step", self.zoom_step));
        }

        let radii = [
            ("anchor_hit_radius", self.anchor_hit_radius),
            ("handle_hit_radius", self.handle_hit_radius),
            ("insert_hit_radius", self.insert_hit_radius),
        ];
        for (key, value) in radii {
            if !(value > 0.0) {
                return Err(ConfigError::out_of_range(key, value));
            }
        }

        if !(self.drag_threshold >= 0.0) {
            return Err(ConfigError::out_of_range(
                "drag_threshold",
                self.drag_threshold,
            ));
        }
        if self.history_depth == 0 {
            return Err(ConfigError::out_of_range(
                "history_depth",
                self.history_depth,
            ));
        }
        if self.nearest_samples < constants::MIN_NEAREST_SAMPLES {
            return Err(ConfigError::out_of_range(
                "nearest_samples",
                self.nearest_samples,
            ));
        }

        Ok(())
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Editor tuning
    #[serde(default)]
    pub editor: EditorSettings,
}

impl Config {
    /// Create new default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location: `<config dir>/curvekit/config.toml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join("curvekit").join("config.toml"))
            .ok_or_else(|| {
                ConfigError::UnsupportedPlatform("no configuration directory".to_string())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Config = match Format::from_path(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::info!("Loaded settings from {}", path.display());
        Ok(config)
    }

    /// Load the config at `path`, falling back to defaults when the file is
    /// missing or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("No settings at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::from_path(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.editor.validate()
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
