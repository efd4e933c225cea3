//! TOML configuration for the window and board layout

use std::ops::RangeInclusive;
use std::path::Path;

use crate::board::BOARD_SIZE;
use crate::error::ConfigError;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub layout: LayoutConfig,
}

/// Window chrome and redraw pacing
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Target redraws per second
    pub frame_rate: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "Tic-tac-toe 5x5".to_string(),
            frame_rate: 60,
        }
    }
}

/// Board geometry in logical pixels
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub cell_size: f32,
    pub margin: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            cell_size: 100.0,
            margin: 50.0,
        }
    }
}

/// Accepted range for `layout.cell_size` and `layout.margin`
pub const LAYOUT_RANGE: RangeInclusive<f32> = 40.0..=400.0;

/// Height of the strip below the grid that holds the restart button
pub const FOOTER_HEIGHT: f32 = 50.0;

impl LayoutConfig {
    pub fn window_width(&self) -> f32 {
        2.0 * self.margin + BOARD_SIZE as f32 * self.cell_size
    }

    pub fn window_height(&self) -> f32 {
        self.window_width() + FOOTER_HEIGHT
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.frame_rate == 0 {
            return Err(ConfigError::Validation(
                "window.frame_rate must be > 0".into(),
            ));
        }
        // The status line and the X/O glyphs need room to draw; NaN and inf fall outside
        check_layout_value("layout.cell_size", self.layout.cell_size)?;
        check_layout_value("layout.margin", self.layout.margin)?;
        Ok(())
    }
}

fn check_layout_value(name: &str, value: f32) -> Result<(), ConfigError> {
    if LAYOUT_RANGE.contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Validation(format!(
            "{name} must be between {} and {}, got {value}",
            LAYOUT_RANGE.start(),
            LAYOUT_RANGE.end()
        )))
    }
}
