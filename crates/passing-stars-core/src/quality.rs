//! Render resolution presets.

use serde::{Deserialize, Serialize};

/// Resolution the field is rendered at before it is scaled to the display.
///
/// Every preset keeps a 4:3 aspect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Low,
    #[default]
    #[serde(alias = "med")]
    Medium,
    #[serde(alias = "hi")]
    High,
}

impl Quality {
    /// Render width in pixels.
    pub fn render_width(self) -> u32 {
        match self {
            Quality::Low => 320,
            Quality::Medium => 640,
            Quality::High => 1024,
        }
    }

    /// Render height in pixels, `round(width * 3 / 4)`.
    pub fn render_height(self) -> u32 {
        (self.render_width() * 3 + 2) / 4
    }

    /// Render resolution as `(width, height)`.
    pub fn render_size(self) -> (u32, u32) {
        (self.render_width(), self.render_height())
    }

    /// Get display name for the preset.
    pub fn display_name(self) -> &'static str {
        match self {
            Quality::Low => "Low",
            Quality::Medium => "Medium",
            Quality::High => "High",
        }
    }
}
