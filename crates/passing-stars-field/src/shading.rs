//! Per-star shading: a point glow plus a trail behind the star.

use glam::Vec2;
use passing_stars_core::params::{GLOW_SOFTENING, TRAIL_SCALE, TRAIL_WIDTH, Z_MAX};

use crate::star::Star;

/// Inverse-distance glow, squared for a tight falloff.
///
/// Finite at the star centre: the denominator never drops below
/// `size * GLOW_SOFTENING`.
pub fn glow(pixel: Vec2, star: &Star) -> f32 {
    let d = pixel.distance(star.screen_position);
    let b = star.size / (d + star.size * GLOW_SOFTENING);
    b * b
}

/// Trail brightness at `pixel`.
///
/// The trail points back towards the centre of the screen, i.e. against
/// the outward radial motion, and grows as the star nears the camera.
/// Outside its rectangular window the trail contributes nothing.
pub fn trail(pixel: Vec2, star: &Star) -> f32 {
    // A star sitting exactly on the axis has no direction to trail in.
    let Some(dir) = (-star.screen_position).try_normalize() else {
        return 0.0;
    };
    let length = (Z_MAX - star.depth) * TRAIL_SCALE;

    let offset = pixel - star.screen_position;
    let along = offset.dot(dir);
    if along <= 0.0 || along >= length {
        return 0.0;
    }

    let perp_dist = offset.dot(dir.perp()).abs();
    let lateral = star.size * TRAIL_WIDTH / (perp_dist + star.size);
    lateral * (1.0 - along / length)
}

/// Glow and trail combined, before fading.
pub fn brightness(pixel: Vec2, star: &Star) -> f32 {
    glow(pixel, star) + trail(pixel, star)
}

/// Contribution of `star` to `pixel`.
pub fn shade(pixel: Vec2, star: &Star) -> f32 {
    brightness(pixel, star) * star.fade
}

#[cfg(test)]
mod tests {
    use glam::vec2;

    use super::*;
    use crate::star::STAR_SLOTS;
    use passing_stars_core::params::{BASE_STAR_SIZE, LOOP_PERIOD, STAR_COUNT};

    fn star(position: Vec2, depth: f32) -> Star {
        Star {
            index: 0,
            screen_position: position,
            size: 0.01,
            fade: 1.0,
            depth,
        }
    }

    #[test]
    fn glow_peaks_at_star_centre() {
        let s = star(vec2(0.4, 0.1), 3.0);
        // (size / (size * 0.1))^2
        assert!((glow(s.screen_position, &s) - 100.0).abs() < 1e-3);
        assert!(glow(vec2(0.5, 0.1), &s) < glow(vec2(0.42, 0.1), &s));
    }

    #[test]
    fn brightness_is_finite_at_centre_for_every_depth() {
        // One full loop sweeps every star through the whole depth range,
        // so size and position follow the real perspective scale.
        let steps = 800;
        for step in 0..steps {
            let t = step as f32 * LOOP_PERIOD / steps as f32;
            for s in crate::star::stars_at(t) {
                let b = brightness(s.screen_position, &s);
                assert!(b.is_finite(), "star {} at depth {}: {b}", s.index, s.depth);
                assert!(b <= 100.0 + 1e-2, "star {} at depth {}: {b}", s.index, s.depth);
            }
        }
    }

    #[test]
    fn brightness_is_finite_at_centre_near_the_camera() {
        for depth in [0.0, 1e-6, 0.05, 0.5, Z_MAX - 1e-4] {
            let perspective = crate::star::perspective_scale(depth);
            let s = Star {
                index: 0,
                screen_position: vec2(0.3, -0.2) * perspective,
                size: BASE_STAR_SIZE * perspective,
                fade: 1.0,
                depth,
            };
            let b = brightness(s.screen_position, &s);
            assert!(b.is_finite(), "depth {depth}: {b}");
        }
    }

    #[test]
    fn trail_points_towards_the_centre() {
        // depth 4 -> trail length (8 - 4) * 0.05 = 0.2
        let s = star(vec2(1.0, 0.0), 4.0);
        let inside = trail(vec2(0.95, 0.0), &s);
        assert!((inside - 0.3 * 0.75).abs() < 1e-5, "inside {inside}");

        assert_eq!(trail(vec2(1.05, 0.0), &s), 0.0);
        assert_eq!(trail(vec2(0.7, 0.0), &s), 0.0);
    }

    #[test]
    fn trail_fades_along_and_across() {
        let s = star(vec2(0.0, -0.8), 2.0);
        let near = trail(vec2(0.0, -0.75), &s);
        let far = trail(vec2(0.0, -0.55), &s);
        let beside = trail(vec2(0.05, -0.75), &s);
        assert!(near > far && far > 0.0);
        assert!(near > beside && beside > 0.0);
    }

    #[test]
    fn trail_skips_star_on_axis() {
        let s = star(Vec2::ZERO, 1.0);
        assert_eq!(trail(vec2(0.01, 0.0), &s), 0.0);
        assert!(shade(vec2(0.01, 0.0), &s).is_finite());
    }

    #[test]
    fn shade_is_scaled_by_fade() {
        let mut s = star(vec2(0.2, 0.2), 5.0);
        let pixel = vec2(0.21, 0.2);
        let full = shade(pixel, &s);
        s.fade = 0.25;
        assert!((shade(pixel, &s) - full * 0.25).abs() < 1e-6);
        s.fade = 0.0;
        assert_eq!(shade(pixel, &s), 0.0);
    }

    #[test]
    fn shading_is_never_negative() {
        let stars = crate::star::stars_at(2.2);
        assert_eq!(stars.len(), STAR_SLOTS);
        assert_eq!(STAR_SLOTS as u32, STAR_COUNT);
        for s in &stars {
            for (x, y) in [(-0.6, -0.4), (0.0, 0.0), (0.3, 0.45), (0.66, -0.1)] {
                assert!(shade(vec2(x, y), s) >= 0.0);
            }
        }
    }
}
