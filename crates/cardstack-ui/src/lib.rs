//! Vertical stack of overlapping cards that the user drags up and down.
//!
//! The host feeds pointer samples into a [`CardStack`] and ticks it once per
//! frame with [`CardStack::on_frame`]; the stack answers with clamped child
//! offsets and drag-rate callbacks. Layout and drawing stay with the host.

mod attributes;
mod card_stack;
mod config;
mod gesture;
mod layout_params;
mod listener;
pub mod offset;
mod settle;

pub use attributes::{
    AttributeError, CardStackAttributes, ATTR_BOTTOM_MAX_OFFSET_Y, ATTR_TOP_MAX_OFFSET_Y,
};
pub use card_stack::{CardChild, CardStack};
pub use config::{
    CardStackConfig, CARD_FLING_VELOCITY_FACTOR, DEFAULT_DAMPING_FACTOR,
    DEFAULT_DURATION_DIVISOR, DEFAULT_RECOVER_DURATION_MILLIS, DEFAULT_VELOCITY_DIVISOR,
};
pub use gesture::DragSession;
pub use layout_params::{CardLayoutParams, OffsetBounds};
pub use listener::CardDragListener;
pub use settle::{SettleAnimator, SettleFrame, SettlePhase, SettleTarget};

pub use cardstack_foundation::{PointerEvent, PointerEventKind, ViewConfiguration};
pub use cardstack_graphics::{Point, Rect, Size};

pub mod prelude {
    pub use crate::card_stack::{CardChild, CardStack};
    pub use crate::config::CardStackConfig;
    pub use crate::layout_params::CardLayoutParams;
    pub use crate::listener::CardDragListener;
    pub use crate::settle::SettlePhase;
    pub use cardstack_foundation::prelude::*;
    pub use cardstack_graphics::prelude::*;
}
