//! Display conversion for terminal output.

use glam::Vec4;
use ratatui::style::Color;

/// Clamp an unclamped field color to the displayable range and convert it
/// to a 24-bit terminal color. Alpha is ignored.
pub fn to_terminal_color(color: Vec4) -> Color {
    let [r, g, b] = color.truncate().to_array().map(to_channel);
    Color::Rgb(r, g, b)
}

fn to_channel(value: f32) -> u8 {
    // NaN clamps to NaN; treat it as black.
    if value.is_nan() {
        return 0;
    }
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
