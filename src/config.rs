//! Rendering configuration.
//!
//! YAML settings for the canvas and for the defaults new shapes receive.
//! Every field has a serde default, so a partial file (or an empty one) is
//! valid.
//!
//! ```yaml
//! version: 1
//! canvas:
//!   width: 640
//!   height: 480
//!   background: "#000000"
//! shapes:
//!   color: "#ffffff"
//!   filled: true
//! ```

use crate::color::Color;
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::shape::ShapeFactory;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Canvas settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,

    /// Background color as `#rrggbb`.
    #[serde(default = "default_background")]
    pub background: String,
}

fn default_width() -> u32 {
    640
}
fn default_height() -> u32 {
    480
}
fn default_background() -> String {
    Color::BLACK.to_hex()
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: default_background(),
        }
    }
}

/// Defaults applied to newly created shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeDefaults {
    /// Shape color as `#rrggbb`.
    #[serde(default = "default_shape_color")]
    pub color: String,

    /// Whether shapes start filled.
    #[serde(default = "default_filled")]
    pub filled: bool,
}

fn default_shape_color() -> String {
    Color::WHITE.to_hex()
}
fn default_filled() -> bool {
    true
}

impl Default for ShapeDefaults {
    fn default() -> Self {
        Self {
            color: default_shape_color(),
            filled: default_filled(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Canvas settings.
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// New-shape defaults.
    #[serde(default)]
    pub shapes: ShapeDefaults,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            canvas: CanvasConfig::default(),
            shapes: ShapeDefaults::default(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        let config = Self::parse(&content)?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            log::warn!("{e}; using default configuration");
            Self::default()
        })
    }

    /// The background color.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] if the configured value is not hex.
    pub fn background(&self) -> Result<Color> {
        Color::from_hex(&self.canvas.background)
    }

    /// A framebuffer of the configured size, cleared to the background.
    ///
    /// # Errors
    ///
    /// Returns an error for zero dimensions or an invalid background color.
    pub fn framebuffer(&self) -> Result<Framebuffer> {
        let background = self.background()?;
        let mut fb = Framebuffer::new(self.canvas.width, self.canvas.height)?;
        fb.clear(background);
        Ok(fb)
    }

    /// A shape factory using the configured defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] if the shape color is not hex.
    pub fn factory(&self) -> Result<ShapeFactory> {
        let color = Color::from_hex(&self.shapes.color)?;
        Ok(ShapeFactory::with_defaults(color, self.shapes.filled))
    }
}
