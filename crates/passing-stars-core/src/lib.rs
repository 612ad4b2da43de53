//! Core parameters and shared types for the passing-stars field.
//!
//! Everything here is pure: the compile-time parameters of the field, the
//! GLSL-style scalar helpers the kinematics are written against, the
//! deterministic seed hash, and the render quality presets shared by the
//! config and viewer crates.

mod hash;
mod math;
pub mod params;
mod quality;

pub use hash::hash;
pub use math::{floor_mod, fract, smoothstep};
pub use quality::Quality;
