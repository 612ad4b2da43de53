//! Compile-time parameters of the star field.
//!
//! The star count is fixed; nothing here is adjustable at runtime.

/// Number of stars summed into every pixel.
pub const STAR_COUNT: u32 = 150;

/// Depth of the star volume. Depth wraps within `[0, Z_MAX)`.
pub const Z_MAX: f32 = 8.0;

/// Depth units travelled per second.
pub const SPEED: f32 = 1.5;

/// Largest distance of a star from the axis in the orbit plane.
pub const MAX_ORBIT_RADIUS: f32 = 1.5;

/// Star radius before perspective scaling.
pub const BASE_STAR_SIZE: f32 = 0.003;

/// Trail length per unit of remaining depth (`Z_MAX - depth`).
pub const TRAIL_SCALE: f32 = 0.05;

/// Depth at which stars begin to fade in from the far plane.
pub const FAR_FADE_START: f32 = Z_MAX * 0.75;

/// Depth at which stars have fully faded in on the near side.
pub const NEAR_FADE_END: f32 = 1.0;

/// Perspective is `1 / (depth * PERSPECTIVE_SLOPE + PERSPECTIVE_OFFSET)`.
pub const PERSPECTIVE_SLOPE: f32 = 0.3;

/// Bounds the perspective scale at the camera; must stay positive.
pub const PERSPECTIVE_OFFSET: f32 = 0.2;

/// Glow denominator softening, as a fraction of the star size.
pub const GLOW_SOFTENING: f32 = 0.1;

/// Trail peak brightness, as a fraction of the star size.
pub const TRAIL_WIDTH: f32 = 0.3;

/// Share of the red channel added to blue after compositing.
pub const BLUE_TINT: f32 = 0.15;

/// Seed offset used for the orbit distance hash.
pub const DISTANCE_SEED_OFFSET: f32 = 10.0;

/// Seed offset used for the starting depth hash.
pub const DEPTH_SEED_OFFSET: f32 = 20.0;

/// Multiplier applied to `sin(n)` by the seed hash.
pub const HASH_SCALE: f32 = 43758.545_312_3;

/// Seconds for every star to complete one depth cycle.
pub const LOOP_PERIOD: f32 = Z_MAX / SPEED;
