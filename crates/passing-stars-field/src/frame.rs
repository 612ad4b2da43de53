//! Whole-frame rendering into an RGBA buffer.

use glam::{Vec2, Vec4, vec2};

use crate::evaluator::PixelColorEvaluator;

/// Rendered frame, rows stored top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Vec4>,
}

impl FrameBuffer {
    /// Render a `width` x `height` frame at `time`.
    ///
    /// Pixel centres sit at `x + 0.5`, `y + 0.5` with `y` counted from the
    /// bottom edge, so row 0 of the buffer is `y = height - 1`.
    pub fn render(width: u32, height: u32, time: f32) -> Self {
        let evaluator = PixelColorEvaluator::new(time);
        let resolution = vec2(width as f32, height as f32);

        let pixels: Vec<Vec4> = (0..height)
            .rev()
            .flat_map(|y| (0..width).map(move |x| pixel_centre(x, y)))
            .map(|frag_coord| evaluator.evaluate(frag_coord, resolution))
            .collect();

        let frame = Self {
            width,
            height,
            pixels,
        };
        log::trace!(
            "rendered {width}x{height} frame at t={time:.3}, peak {:.3}",
            frame.peak()
        );
        frame
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// All pixels, row-major from the top row.
    pub fn pixels(&self) -> &[Vec4] {
        &self.pixels
    }

    /// Pixel at column `x` of display row `row` (0 = top).
    pub fn get(&self, x: u32, row: u32) -> Option<Vec4> {
        if x >= self.width || row >= self.height {
            return None;
        }
        self.pixels
            .get(row as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Brightest red channel in the frame, for diagnostics.
    pub fn peak(&self) -> f32 {
        self.pixels.iter().map(|p| p.x).fold(0.0, f32::max)
    }
}

fn pixel_centre(x: u32, y: u32) -> Vec2 {
    vec2(x as f32 + 0.5, y as f32 + 0.5)
}
