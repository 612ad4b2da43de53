//! Star kinematics: placement, depth motion and perspective.

use std::f32::consts::TAU;

use glam::Vec2;
use passing_stars_core::params::{
    BASE_STAR_SIZE, DEPTH_SEED_OFFSET, DISTANCE_SEED_OFFSET, FAR_FADE_START, MAX_ORBIT_RADIUS,
    NEAR_FADE_END, PERSPECTIVE_OFFSET, PERSPECTIVE_SLOPE, SPEED, STAR_COUNT, Z_MAX,
};
use passing_stars_core::{floor_mod, hash, smoothstep};

/// Number of stars as an array length.
pub const STAR_SLOTS: usize = STAR_COUNT as usize;

/// One star's state at a given time. Derived fresh every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// Seed index in `[0, STAR_COUNT)`.
    pub index: u32,
    /// Projected position in aspect-corrected screen space.
    pub screen_position: Vec2,
    /// Glow radius after perspective.
    pub size: f32,
    /// Visibility in `[0, 1]`, zero at both ends of the depth range.
    pub fade: f32,
    /// Current depth in `[0, Z_MAX)`.
    pub depth: f32,
}

impl Star {
    /// Compute star `index` at `time` seconds.
    pub fn at(index: u32, time: f32) -> Self {
        let seed = index as f32;
        let angle = hash(seed) * TAU;
        let distance = hash(seed + DISTANCE_SEED_OFFSET) * MAX_ORBIT_RADIUS;

        let depth = depth_at(index, time);
        let perspective = perspective_scale(depth);

        let base_position = Vec2::from_angle(angle) * distance;

        Self {
            index,
            screen_position: base_position * perspective,
            size: BASE_STAR_SIZE * perspective,
            fade: fade_factor(depth),
            depth,
        }
    }
}

/// Depth of star `index` at `time`.
///
/// Starts at a hashed depth and decreases at [`SPEED`], wrapping back to
/// the far plane so the motion loops every `Z_MAX / SPEED` seconds.
pub fn depth_at(index: u32, time: f32) -> f32 {
    let start = hash(index as f32 + DEPTH_SEED_OFFSET) * Z_MAX;
    floor_mod(start - time * SPEED, Z_MAX)
}

/// Perspective scale for `depth`. Larger for nearer stars, bounded at the
/// camera by [`PERSPECTIVE_OFFSET`].
pub fn perspective_scale(depth: f32) -> f32 {
    1.0 / (depth * PERSPECTIVE_SLOPE + PERSPECTIVE_OFFSET)
}

/// Product of the far and near fade ramps.
pub fn fade_factor(depth: f32) -> f32 {
    smoothstep(Z_MAX, FAR_FADE_START, depth) * smoothstep(0.0, NEAR_FADE_END, depth)
}

/// Every star of the field at `time`.
pub fn stars_at(time: f32) -> [Star; STAR_SLOTS] {
    std::array::from_fn(|i| Star::at(i as u32, time))
}
