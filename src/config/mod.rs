//! Configuration file support for minipaint.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/minipaint/config.toml`. Settings cover the canvas background,
//! stroke appearance, and touch filtering. Everything is fixed once the surface is built.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, StrokeConfig, TouchConfig};

use crate::draw::{self, PaintStyle};
use crate::surface::{SurfaceSettings, scaled_touch_slop};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// background_color = "#FFFF55"
/// frame_inset = 40
///
/// [stroke]
/// color = "#FFAC00"
/// width = 12.0
///
/// [touch]
/// slop = 8.0
/// density = 2.75
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Canvas background and frame
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Stroke appearance
    #[serde(default)]
    pub stroke: StrokeConfig,

    /// Touch filtering
    #[serde(default)]
    pub touch: TouchConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `stroke.width`: 1.0 - 100.0
    /// - `canvas.frame_inset`: 0 - 1000
    /// - `touch.slop`: 0.0 - 64.0
    /// - `touch.density`: 0.5 - 8.0
    fn validate_and_clamp(&mut self) {
        if !(1.0..=100.0).contains(&self.stroke.width) {
            log::warn!(
                "Invalid stroke width {:.1}, clamping to 1.0-100.0 range",
                self.stroke.width
            );
            self.stroke.width = clamp_or(self.stroke.width, 1.0, 100.0, 12.0);
        }

        if !(0..=1000).contains(&self.canvas.frame_inset) {
            log::warn!(
                "Invalid frame_inset {}, clamping to 0-1000 range",
                self.canvas.frame_inset
            );
            self.canvas.frame_inset = self.canvas.frame_inset.clamp(0, 1000);
        }

        if !(0.0..=64.0).contains(&self.touch.slop) {
            log::warn!(
                "Invalid touch slop {:.1}, clamping to 0.0-64.0 range",
                self.touch.slop
            );
            self.touch.slop = clamp_or(self.touch.slop, 0.0, 64.0, 8.0);
        }

        if !(0.5..=8.0).contains(&self.touch.density) {
            log::warn!(
                "Invalid display density {:.2}, clamping to 0.5-8.0 range",
                self.touch.density
            );
            self.touch.density = clamp_or(self.touch.density, 0.5, 8.0, 1.0);
        }
    }

    /// Builds the construction-time settings for a drawing surface.
    pub fn surface_settings(&self) -> SurfaceSettings {
        let background = self.canvas.background_color.to_color_or(draw::CANVAS_YELLOW);
        let mut paint = PaintStyle::new(
            self.stroke.color.to_color_or(draw::PAINT_ORANGE),
            self.stroke.width,
        );
        paint.anti_alias = self.stroke.anti_alias;
        paint.dither = self.stroke.dither;

        SurfaceSettings {
            background,
            paint,
            touch_tolerance: scaled_touch_slop(self.touch.slop, self.touch.density),
            frame_inset: self.canvas.frame_inset,
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/minipaint/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("minipaint");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path, which must exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Writes the default configuration to the user's config directory.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str =
            toml::to_string_pretty(&Self::default()).context("Failed to serialize config")?;
        fs::write(&config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

// NaN fails every range check; replace it instead of clamping.
fn clamp_or(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}
