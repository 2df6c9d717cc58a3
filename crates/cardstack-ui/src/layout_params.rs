//! Per-child bounds and their resolution against the stack defaults.

/// Layout params a card carries inside the stack.
///
/// `None` inherits the stack-level bound for that side. `top_max_offset` is
/// the upward limit and is expected to be `<= 0`; `bottom_max_offset` is the
/// downward limit and is expected to be `>= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CardLayoutParams {
    pub top_max_offset: Option<f32>,
    pub bottom_max_offset: Option<f32>,
}

impl CardLayoutParams {
    /// Params that inherit both bounds from the stack.
    pub fn inherit() -> Self {
        Self::default()
    }

    /// Params that pin both bounds regardless of the stack defaults.
    pub fn fixed(top_max_offset: f32, bottom_max_offset: f32) -> Self {
        Self {
            top_max_offset: Some(top_max_offset),
            bottom_max_offset: Some(bottom_max_offset),
        }
    }

    pub fn with_top_max_offset(mut self, top_max_offset: f32) -> Self {
        self.top_max_offset = Some(top_max_offset);
        self
    }

    pub fn with_bottom_max_offset(mut self, bottom_max_offset: f32) -> Self {
        self.bottom_max_offset = Some(bottom_max_offset);
        self
    }

    /// Effective bounds: the override where present, else the stack default.
    pub fn resolve(&self, stack_top: f32, stack_bottom: f32) -> OffsetBounds {
        OffsetBounds::new(
            self.top_max_offset.unwrap_or(stack_top),
            self.bottom_max_offset.unwrap_or(stack_bottom),
        )
    }
}

/// Resolved bounds in whole pixels. Always satisfies `top <= 0 <= bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OffsetBounds {
    pub top: i32,
    pub bottom: i32,
}

impl OffsetBounds {
    /// Truncates both bounds to whole pixels. A `top` above zero or a
    /// `bottom` below zero collapses to zero, as does a non-finite value.
    pub fn new(top: f32, bottom: f32) -> Self {
        let top = if top.is_finite() { top as i32 } else { 0 };
        let bottom = if bottom.is_finite() { bottom as i32 } else { 0 };
        Self {
            top: top.min(0),
            bottom: bottom.max(0),
        }
    }

    pub fn range(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn is_degenerate(&self) -> bool {
        self.bottom == self.top
    }

    pub fn contains(&self, offset: i32) -> bool {
        (self.top..=self.bottom).contains(&offset)
    }

    pub fn clamp(&self, offset: i32) -> i32 {
        offset.clamp(self.top, self.bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_win_over_stack_defaults() {
        let params = CardLayoutParams::inherit().with_bottom_max_offset(40.0);
        assert_eq!(
            params.resolve(-100.0, 10.0),
            OffsetBounds {
                top: -100,
                bottom: 40
            }
        );
        assert_eq!(
            CardLayoutParams::fixed(-5.0, 5.0).resolve(-100.0, 10.0),
            OffsetBounds { top: -5, bottom: 5 }
        );
    }

    #[test]
    fn bounds_truncate_toward_zero() {
        let bounds = OffsetBounds::new(-100.7, 30.9);
        assert_eq!(bounds, OffsetBounds { top: -100, bottom: 30 });
        assert_eq!(bounds.range(), 130);
    }

    #[test]
    fn contract_violations_collapse_to_zero() {
        assert_eq!(OffsetBounds::new(25.0, -3.0), OffsetBounds::default());
        assert_eq!(OffsetBounds::new(f32::NAN, f32::INFINITY), OffsetBounds::default());
        assert!(OffsetBounds::default().is_degenerate());
    }
}
