//! Streaking star field for the passing-stars viewer.
//!
//! Every pixel is a pure function of its coordinate, the viewport
//! resolution and the elapsed time. A fixed set of stars is placed by a
//! seed hash, pushed towards the camera through a looping depth volume,
//! and shaded as a point glow plus a trail. The [`StarFieldView`] wraps
//! that evaluator for terminal output.

mod color;
mod evaluator;
mod frame;
mod shading;
mod star;
mod view;

pub use color::to_terminal_color;
pub use evaluator::{PixelColorEvaluator, accumulate, color_grade, pixel_color, to_uv};
pub use frame::FrameBuffer;
pub use shading::{brightness, glow, shade, trail};
pub use star::{STAR_SLOTS, Star, depth_at, fade_factor, perspective_scale, stars_at};
pub use view::{StarFieldView, Viewport};
