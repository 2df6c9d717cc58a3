//! Geometry and unit types for CardStack
//!
//! This crate contains the plain data the card controller exchanges with its
//! host: points, sizes and hit rectangles, plus density-aware dimensions.

mod geometry;
mod unit;

pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::unit::{Dimension, Dp, Px};
}
