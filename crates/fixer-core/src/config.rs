//! Tunable thresholds for a drawing session.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Gesture thresholds and defaults used by [`crate::DrawingSession`].
///
/// Every field is optional in JSON; missing fields take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Drags at or below this distance (px) count as clicks.
    pub drag_threshold: f64,
    /// Radius stamped when the circle tool is clicked rather than dragged.
    pub default_circle_radius: f64,
    /// Box size (width, height) used when the text tool is clicked.
    pub default_text_size: (f64, f64),
    /// Slack used when picking a shape to delete.
    pub hit_tolerance: f64,
    /// Maximum undo snapshots kept (None = unbounded).
    pub max_history: Option<usize>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            drag_threshold: 2.0,
            default_circle_radius: 24.0,
            default_text_size: (120.0, 40.0),
            hit_tolerance: 6.0,
            max_history: None,
        }
    }
}

impl SessionConfig {
    /// Parse a config from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
