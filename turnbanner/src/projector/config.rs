//! Projector configuration.

use crate::config::ConfigFile;
use crate::format::LabelBounds;

/// Default road shield height in points.
pub const DEFAULT_SHIELD_HEIGHT: f64 = 16.0;

/// Default display scale used when resolving shield artwork.
pub const DEFAULT_DISPLAY_SCALE: u8 = 2;

/// Default label width in points, used until surface geometry is known.
pub const DEFAULT_LABEL_WIDTH: f64 = 260.0;

/// Layout settings for maneuver projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectorConfig {
    /// Layout rectangle for instruction labels.
    pub label_bounds: LabelBounds,

    /// Height of inline road shields.
    pub shield_height: f64,

    /// Pixel scale of the head-unit display (1x, 2x, 3x artwork).
    pub display_scale: u8,
}

impl Default for ProjectorConfig {
    fn default() -> Self {
        Self {
            label_bounds: LabelBounds::new(DEFAULT_LABEL_WIDTH, crate::format::DEFAULT_LABEL_HEIGHT),
            shield_height: DEFAULT_SHIELD_HEIGHT,
            display_scale: DEFAULT_DISPLAY_SCALE,
        }
    }
}

impl ProjectorConfig {
    /// Create projector settings from the configuration file.
    pub fn from_config_file(config: &ConfigFile) -> Self {
        Self {
            shield_height: config.display.shield_height,
            display_scale: config.display.scale,
            ..Default::default()
        }
    }

    /// Derive label bounds from the surface width and safe-area insets.
    pub fn with_surface(mut self, width: f64, left_inset: f64, right_inset: f64) -> Self {
        self.label_bounds = LabelBounds::for_surface(width, left_inset, right_inset);
        self
    }

    /// Set the label bounds directly.
    pub fn with_label_bounds(mut self, bounds: LabelBounds) -> Self {
        self.label_bounds = bounds;
        self
    }

    /// Set the shield height.
    pub fn with_shield_height(mut self, height: f64) -> Self {
        self.shield_height = height;
        self
    }

    /// Set the display scale.
    pub fn with_display_scale(mut self, scale: u8) -> Self {
        self.display_scale = scale;
        self
    }
}
