//! Deterministic seed hash.

use crate::math::fract;
use crate::params::HASH_SCALE;

/// Scramble a scalar seed into a pseudo-random value in `[0, 1)`.
///
/// Not a quality RNG. It only has to look decorrelated between nearby
/// integer seeds and return the same value for the same input every
/// frame, which is what keeps star identity stable.
pub fn hash(n: f32) -> f32 {
    fract(n.sin() * HASH_SCALE)
}
