//! Per-pixel compositing of the whole field.

use glam::{Vec2, Vec3, Vec4, vec3};
use passing_stars_core::params::BLUE_TINT;

use crate::shading::shade;
use crate::star::{STAR_SLOTS, Star, stars_at};

/// Evaluates pixel colors for a single frame.
///
/// Kinematics depend only on time, so they are computed once here and
/// shared by every pixel of the frame.
#[derive(Debug, Clone)]
pub struct PixelColorEvaluator {
    time: f32,
    stars: [Star; STAR_SLOTS],
}

impl PixelColorEvaluator {
    /// Prepare the evaluator for `time` seconds.
    pub fn new(time: f32) -> Self {
        Self {
            time,
            stars: stars_at(time),
        }
    }

    /// Time this evaluator was prepared for.
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Stars of this frame, in index order.
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Color of the pixel at `frag_coord` in a `resolution` sized target.
    ///
    /// RGB is unclamped and never negative; alpha is always 1.
    pub fn evaluate(&self, frag_coord: Vec2, resolution: Vec2) -> Vec4 {
        Self::evaluate_with(&self.stars, frag_coord, resolution)
    }

    /// Like [`evaluate`](Self::evaluate), but shades against any set of
    /// precomputed stars.
    pub fn evaluate_with(stars: &[Star], frag_coord: Vec2, resolution: Vec2) -> Vec4 {
        let total = accumulate(to_uv(frag_coord, resolution), stars);
        color_grade(Vec3::splat(total)).extend(1.0)
    }
}

/// Color of a single pixel at `time`.
pub fn pixel_color(frag_coord: Vec2, resolution: Vec2, time: f32) -> Vec4 {
    PixelColorEvaluator::new(time).evaluate(frag_coord, resolution)
}

/// Centre the pixel coordinate and scale by height, so the vertical extent
/// is `[-0.5, 0.5]` and the horizontal extent follows the aspect ratio.
pub fn to_uv(frag_coord: Vec2, resolution: Vec2) -> Vec2 {
    (frag_coord - 0.5 * resolution) / resolution.y
}

/// Sum of every star's contribution at `uv`, in index order.
pub fn accumulate(uv: Vec2, stars: &[Star]) -> f32 {
    stars.iter().map(|star| shade(uv, star)).sum()
}

/// Cool tint proportional to brightness.
pub fn color_grade(rgb: Vec3) -> Vec3 {
    vec3(rgb.x, rgb.y, rgb.z + rgb.x * BLUE_TINT)
}
