use std::path::{Path, PathBuf};

use egui::Color32;
use serde::Deserialize;

use crate::{
    colors::{parse_hex_color, ColorSource, Palette, PALETTE_SLOTS},
    error::ConfigError,
    renderer::ClosingArc,
};

pub const DEFAULT_STROKE_WIDTH: f32 = 5.0;
pub const DEFAULT_FONT_SIZE: f32 = 40.0;

/// Drawing settings, fixed once the view is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub stroke_width: f32,
    pub font_size: f32,
    pub palette: Palette,
    pub closing_arc: ClosingArc,
    pub text_color: Color32,
}

impl Style {
    /// Default sizes with the palette filled entirely from `source`.
    pub fn with_source(source: &mut dyn ColorSource) -> Self {
        Style {
            stroke_width: DEFAULT_STROKE_WIDTH,
            font_size: DEFAULT_FONT_SIZE,
            palette: Palette::fill([None; PALETTE_SLOTS], source),
            closing_arc: ClosingArc::default(),
            text_color: Color32::BLACK,
        }
    }
}

/// Style as written in `style.toml`:
///
/// ```toml
/// stroke_width = 5.0
/// font_size = 40.0
/// colors = ["#F44336", "#FFEB3B", "#4CAF50", "#2196F3"]
/// closing_arc = "first-color-tiny-gap"
/// ```
///
/// Palette slots left out of `colors` get generated colors.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub stroke_width: f32,
    pub font_size: f32,
    pub colors: Vec<String>,
    pub closing_arc: ClosingArc,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            stroke_width: DEFAULT_STROKE_WIDTH,
            font_size: DEFAULT_FONT_SIZE,
            colors: Vec::new(),
            closing_arc: ClosingArc::default(),
        }
    }
}

impl StyleConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: StyleConfig = toml::from_str(content)?;
        config.configured_colors()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = StyleConfig::from_toml(&content)?;
        log::debug!("loaded style from {}", path.display());
        Ok(config)
    }

    /// Reads the style at `path`, or the default location when `path` is `None`.
    /// A missing default file means built-in defaults; an explicitly given
    /// path has to exist.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => StyleConfig::load(path),
            None => StyleConfig::load_if_present(default_config_path()),
        }
    }

    fn load_if_present(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if path.exists() => StyleConfig::load(&path),
            Some(path) => {
                log::debug!("no style file at {}, using defaults", path.display());
                Ok(StyleConfig::default())
            }
            None => {
                log::warn!("no config directory available, using the default style");
                Ok(StyleConfig::default())
            }
        }
    }

    /// Parsed palette slots, `None` where nothing was configured.
    pub fn configured_colors(&self) -> Result<[Option<Color32>; PALETTE_SLOTS], ConfigError> {
        if self.colors.len() > PALETTE_SLOTS {
            return Err(ConfigError::TooManyColors(self.colors.len()));
        }

        let mut slots = [None; PALETTE_SLOTS];
        for (slot, text) in slots.iter_mut().zip(&self.colors) {
            *slot = Some(parse_hex_color(text)?);
        }
        Ok(slots)
    }

    /// Builds the style, filling unset palette slots from `source`.
    pub fn into_style(self, source: &mut dyn ColorSource) -> Result<Style, ConfigError> {
        let configured = self.configured_colors()?;
        Ok(Style {
            stroke_width: self.stroke_width,
            font_size: self.font_size,
            palette: Palette::fill(configured, source),
            closing_arc: self.closing_arc,
            text_color: Color32::BLACK,
        })
    }
}

/// `<config dir>/statsview/style.toml`
pub fn default_config_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("statsview").join("style.toml"))
}
