//! Terminal presentation of the star field.

use glam::{Vec2, vec2};
use passing_stars_core::Quality;
use ratatui::{
    Frame,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::color::to_terminal_color;
use crate::evaluator::PixelColorEvaluator;

/// Upper half block: foreground paints the top pixel, background the bottom.
const HALF_BLOCK: &str = "▀";

/// Color of letterbox bars.
const LETTERBOX: Color = Color::Rgb(0, 0, 0);

/// Placement of the render image inside a terminal pixel grid.
///
/// The terminal grid is `columns` wide and `rows * 2` tall. The image is
/// rendered at the quality preset's resolution and either letterboxed or
/// stretched onto the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Render resolution.
    render: Vec2,
    /// Top-left corner of the drawn image in terminal pixels.
    offset: Vec2,
    /// Size of the drawn image in terminal pixels.
    draw_size: Vec2,
}

impl Viewport {
    /// Fit `render` into a `target` pixel grid.
    pub fn new(target: (u32, u32), render: (u32, u32), keep_aspect_ratio: bool) -> Self {
        let target = vec2(target.0 as f32, target.1 as f32);
        let render = vec2(render.0 as f32, render.1 as f32);

        let (offset, draw_size) = if keep_aspect_ratio {
            let scale = (target / render).min_element();
            let draw_size = render * scale;
            ((target - draw_size) / 2.0, draw_size)
        } else {
            (Vec2::ZERO, target)
        };

        Self {
            render,
            offset,
            draw_size,
        }
    }

    /// Render resolution the evaluator is sampled at.
    pub fn resolution(&self) -> Vec2 {
        self.render
    }

    /// Fragment coordinate sampled for terminal pixel (`x`, `y`), `y` counted
    /// from the top. `None` for pixels in the letterbox bars.
    ///
    /// Snaps to the centre of the render pixel under the terminal pixel, as
    /// if the full image had been rendered and scaled with nearest filtering.
    pub fn frag_coord(&self, x: u32, y: u32) -> Option<Vec2> {
        if self.draw_size.min_element() <= 0.0 {
            return None;
        }
        let p = (vec2(x as f32, y as f32) + 0.5 - self.offset) / self.draw_size;
        if !(0.0..1.0).contains(&p.x) || !(0.0..1.0).contains(&p.y) {
            return None;
        }
        let column = (p.x * self.render.x).floor();
        let row = (p.y * self.render.y).floor();
        Some(vec2(column + 0.5, self.render.y - row - 0.5))
    }
}

/// Star field renderer for a terminal frame.
#[derive(Debug)]
pub struct StarFieldView {
    quality: Quality,
    keep_aspect_ratio: bool,
    /// Viewport for the last seen terminal size.
    viewport: Option<Viewport>,
    /// Last known terminal width.
    last_width: u16,
    /// Last known terminal height.
    last_height: u16,
}

impl Default for StarFieldView {
    fn default() -> Self {
        Self::new(Quality::default(), true)
    }
}

impl StarFieldView {
    /// Create a view rendering at `quality`.
    pub fn new(quality: Quality, keep_aspect_ratio: bool) -> Self {
        Self {
            quality,
            keep_aspect_ratio,
            viewport: None,
            last_width: 0,
            last_height: 0,
        }
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }

    /// Render the field at `time` seconds to the whole frame.
    pub fn render(&mut self, frame: &mut Frame, time: f32) {
        let area = frame.area();
        let lines = self.lines(area.width, area.height, time);
        frame.render_widget(Paragraph::new(lines), area);
    }

    /// Build the styled lines for a `width` x `height` cell area.
    pub fn lines(&mut self, width: u16, height: u16, time: f32) -> Vec<Line<'static>> {
        let viewport = self.viewport_for(width, height);
        let evaluator = PixelColorEvaluator::new(time);

        (0..height)
            .map(|cell_y| {
                let spans: Vec<Span> = (0..width)
                    .map(|x| {
                        let top = sample(&evaluator, &viewport, x as u32, cell_y as u32 * 2);
                        let bottom = sample(&evaluator, &viewport, x as u32, cell_y as u32 * 2 + 1);
                        Span::styled(HALF_BLOCK, Style::new().fg(top).bg(bottom))
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }

    /// Reuse the viewport unless the terminal was resized.
    fn viewport_for(&mut self, width: u16, height: u16) -> Viewport {
        let dimensions_changed = width != self.last_width || height != self.last_height;
        match self.viewport {
            Some(viewport) if !dimensions_changed => viewport,
            _ => {
                let viewport = Viewport::new(
                    (width as u32, height as u32 * 2),
                    self.quality.render_size(),
                    self.keep_aspect_ratio,
                );
                log::debug!(
                    "viewport {}x{} cells, render {:?} at {}",
                    width,
                    height,
                    self.quality.render_size(),
                    self.quality.display_name()
                );
                self.viewport = Some(viewport);
                self.last_width = width;
                self.last_height = height;
                viewport
            }
        }
    }
}

fn sample(evaluator: &PixelColorEvaluator, viewport: &Viewport, x: u32, y: u32) -> Color {
    match viewport.frag_coord(x, y) {
        Some(frag_coord) => to_terminal_color(evaluator.evaluate(frag_coord, viewport.resolution())),
        None => LETTERBOX,
    }
}
