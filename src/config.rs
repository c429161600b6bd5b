//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/livepen/config.yaml`

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::editable::DEFAULT_HISTORY_DEPTH;

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Bound for every undo and redo stack
    #[serde(default = "default_history_depth")]
    pub history_depth: usize,
    /// Quiet period after the last edit before the preview is recomposed
    #[serde(default = "default_preview_debounce_ms")]
    pub preview_debounce_ms: u64,
    /// Average rendered line height, used to scroll to search matches
    #[serde(default = "default_line_height_px")]
    pub line_height_px: f32,
}

fn default_history_depth() -> usize {
    DEFAULT_HISTORY_DEPTH
}

fn default_preview_debounce_ms() -> u64 {
    300
}

fn default_line_height_px() -> f32 {
    20.0
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_depth: default_history_depth(),
            preview_debounce_ms: default_preview_debounce_ms(),
            line_height_px: default_line_height_px(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<Self>(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config.sanitized()
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<()> {
        let path = crate::config_paths::config_file().context("No config directory available")?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Replace values that would break the editor with their defaults
    fn sanitized(mut self) -> Self {
        if self.history_depth == 0 {
            tracing::warn!("history_depth must be at least 1, using default");
            self.history_depth = default_history_depth();
        }
        if !self.line_height_px.is_finite() || self.line_height_px <= 0.0 {
            tracing::warn!("line_height_px must be positive, using default");
            self.line_height_px = default_line_height_px();
        }
        self
    }
}
