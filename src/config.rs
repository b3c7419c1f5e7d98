use std::path::Path;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV_VAR: &str = "EFRAME_CANVAS_CONFIG";

/// Largest accepted crayon offset, in pixels
pub const MAX_CRAYON_JITTER: u8 = 16;

/// Startup settings for a drawing session.
///
/// Every field has a default, so a config file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Native canvas size in pixels; also the size of the exported PNG
    pub canvas_size: [u32; 2],
    pub background: Color32,
    pub brush_color: Color32,
    pub brush_size: u8,
    pub text_size: f32,
    /// Shape drags held longer than this become filled rectangles
    pub long_press_secs: f64,
    /// Crayon offset range, in whole pixels either way
    pub crayon_jitter: u8,
    pub default_save_path: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            canvas_size: [800, 600],
            background: Color32::WHITE,
            brush_color: Color32::BLACK,
            brush_size: 3,
            text_size: 14.0,
            long_press_secs: 1.0,
            crayon_jitter: 2,
            default_save_path: "drawing.png".to_owned(),
        }
    }
}

impl CanvasConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the editor cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field, reason: String| Err(ConfigError::Invalid { field, reason });

        if !(self.long_press_secs.is_finite() && self.long_press_secs >= 0.0) {
            return invalid(
                "long_press_secs",
                format!("{} is not a duration", self.long_press_secs),
            );
        }
        if !(self.text_size.is_finite() && self.text_size > 0.0) {
            return invalid("text_size", format!("{} must be positive", self.text_size));
        }
        if self.crayon_jitter > MAX_CRAYON_JITTER {
            return invalid(
                "crayon_jitter",
                format!("{} exceeds {MAX_CRAYON_JITTER}", self.crayon_jitter),
            );
        }
        if self.width() == 0 || self.height() == 0 {
            return invalid(
                "canvas_size",
                format!("{}x{} has no pixels", self.width(), self.height()),
            );
        }
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Load from the file named by [`CONFIG_ENV_VAR`], falling back to defaults
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        match Self::load(Path::new(&path)) {
            Ok(config) => {
                log::info!("Loaded canvas config from {}", Path::new(&path).display());
                config
            }
            Err(err) => {
                log::warn!("{err}; using default canvas config");
                Self::default()
            }
        }
    }

    pub fn width(&self) -> u32 {
        self.canvas_size[0]
    }

    pub fn height(&self) -> u32 {
        self.canvas_size[1]
    }
}
