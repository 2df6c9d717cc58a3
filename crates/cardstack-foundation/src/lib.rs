//! Pointer input, velocity tracking and gesture constants for CardStack

pub mod gesture_constants;
pub mod pointer;
pub mod velocity_tracker;

pub use gesture_constants::ViewConfiguration;
pub use pointer::{PointerEvent, PointerEventKind};
pub use velocity_tracker::VelocityTracker1D;

pub mod prelude {
    pub use crate::gesture_constants::ViewConfiguration;
    pub use crate::pointer::{PointerEvent, PointerEventKind};
    pub use crate::velocity_tracker::VelocityTracker1D;
}
