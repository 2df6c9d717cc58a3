//! Frame-driven tween animations for CardStack
//!
//! Animations here never own a timer. The host's frame scheduler hands every
//! running animator the current frame time and the animator answers with the
//! interpolated values for that frame.

mod animation;

pub use animation::*;

pub mod prelude {
    pub use crate::animation::{AnimationSpec, Easing, FrameResult, Lerp, Track, ValueAnimator};
}
