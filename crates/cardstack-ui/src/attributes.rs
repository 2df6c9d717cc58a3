//! Reading stack and card bounds from string attributes.
//!
//! Attributes arrive as `(name, value)` pairs, e.g. from a layout file.
//! `topMaxOffsetY` is written as an upward distance and stored negated.
//! Unknown attribute names are ignored.

use std::error::Error;
use std::fmt;

use cardstack_graphics::{Dimension, DimensionParseError};

use crate::layout_params::CardLayoutParams;

pub const ATTR_TOP_MAX_OFFSET_Y: &str = "topMaxOffsetY";
pub const ATTR_BOTTOM_MAX_OFFSET_Y: &str = "bottomMaxOffsetY";

#[derive(Debug, Clone, PartialEq)]
pub enum AttributeError {
    InvalidDimension {
        name: String,
        source: DimensionParseError,
    },
}

impl fmt::Display for AttributeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeError::InvalidDimension { name, source } => {
                write!(f, "attribute {name}: {source}")
            }
        }
    }
}

impl Error for AttributeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AttributeError::InvalidDimension { source, .. } => Some(source),
        }
    }
}

/// Stack-level bounds read from attributes, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CardStackAttributes {
    pub top_max_offset: f32,
    pub bottom_max_offset: f32,
}

impl CardStackAttributes {
    /// Missing attributes default to 0.
    pub fn parse(attributes: &[(&str, &str)], density: f32) -> Result<Self, AttributeError> {
        let (top, bottom) = read_bounds(attributes, density)?;
        Ok(Self {
            top_max_offset: top.unwrap_or(0.0),
            bottom_max_offset: bottom.unwrap_or(0.0),
        })
    }
}

impl CardLayoutParams {
    /// Missing attributes leave the override unset so the card inherits the
    /// stack bound.
    pub fn from_attributes(
        attributes: &[(&str, &str)],
        density: f32,
    ) -> Result<Self, AttributeError> {
        let (top_max_offset, bottom_max_offset) = read_bounds(attributes, density)?;
        Ok(Self {
            top_max_offset,
            bottom_max_offset,
        })
    }
}

fn read_bounds(
    attributes: &[(&str, &str)],
    density: f32,
) -> Result<(Option<f32>, Option<f32>), AttributeError> {
    let mut top = None;
    let mut bottom = None;
    for &(name, value) in attributes {
        match name {
            ATTR_TOP_MAX_OFFSET_Y => top = Some(-dimension(name, value, density)?),
            ATTR_BOTTOM_MAX_OFFSET_Y => bottom = Some(dimension(name, value, density)?),
            _ => {}
        }
    }
    Ok((top, bottom))
}

fn dimension(name: &str, value: &str, density: f32) -> Result<f32, AttributeError> {
    value
        .parse::<Dimension>()
        .map(|dimension| dimension.to_px(density))
        .map_err(|source| AttributeError::InvalidDimension {
            name: name.to_string(),
            source,
        })
}
