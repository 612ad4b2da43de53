//! GLSL-style scalar helpers.

/// Hermite interpolation between two edges, clamped to `[0, 1]`.
///
/// Reversed edges (`edge0 > edge1`) give a falling ramp, which the far
/// fade relies on.
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Floored modulo. For `y > 0` the result is always in `[0, y)`.
///
/// Unlike `%`, negative `x` wraps to the top of the range instead of
/// producing a negative remainder.
pub fn floor_mod(x: f32, y: f32) -> f32 {
    let r = x.rem_euclid(y);
    // rem_euclid can round up to exactly `y` for tiny negative inputs.
    if r >= y { 0.0 } else { r }
}

/// Fractional part, always in `[0, 1)`.
pub fn fract(x: f32) -> f32 {
    let r = x - x.floor();
    if r >= 1.0 { 0.0 } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoothstep_clamps_outside_edges() {
        assert_eq!(smoothstep(0.0, 1.0, -3.0), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 4.0), 1.0);
        assert_eq!(smoothstep(0.0, 1.0, 0.5), 0.5);
    }

    #[test]
    fn smoothstep_reversed_edges_fall() {
        assert_eq!(smoothstep(8.0, 6.0, 5.0), 1.0);
        assert_eq!(smoothstep(8.0, 6.0, 8.0), 0.0);
        assert!((smoothstep(8.0, 6.0, 7.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn floor_mod_wraps_negative_values_upward() {
        assert!((floor_mod(-1.0, 8.0) - 7.0).abs() < 1e-6);
        assert!((floor_mod(-17.5, 8.0) - 6.5).abs() < 1e-5);
        assert!((floor_mod(9.0, 8.0) - 1.0).abs() < 1e-6);
        assert_eq!(floor_mod(8.0, 8.0), 0.0);
    }

    #[test]
    fn floor_mod_never_returns_divisor() {
        for x in [-1e-9_f32, -1e-7, -f32::EPSILON, -0.0] {
            let r = floor_mod(x, 8.0);
            assert!((0.0..8.0).contains(&r), "floor_mod({x}) = {r}");
        }
    }

    #[test]
    fn fract_stays_below_one() {
        assert!((fract(2.25) - 0.25).abs() < 1e-6);
        assert!((fract(-0.25) - 0.75).abs() < 1e-6);
        let r = fract(-1e-9);
        assert!((0.0..1.0).contains(&r));
    }
}
