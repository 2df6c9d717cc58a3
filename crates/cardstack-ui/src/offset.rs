//! Offset clamping and drag-rate math.
//!
//! Pure functions over a child's offset and its resolved [`OffsetBounds`];
//! the stack owns the offsets and calls into these on every move and frame.

use crate::layout_params::OffsetBounds;

/// Children whose drag rate is above this settle on their bottom bound.
pub const RECOVER_RATE_THRESHOLD: f32 = 0.5;

/// Moves `offset` by `delta` (rounded to whole pixels) and clamps the result:
/// positive candidates against `bottom`, the rest against `top`.
pub fn apply_delta(offset: i32, delta: f32, bounds: OffsetBounds) -> i32 {
    let step = if delta.is_finite() {
        delta.round() as i32
    } else {
        0
    };
    let candidate = offset.saturating_add(step);
    if candidate > 0 {
        candidate.min(bounds.bottom)
    } else {
        candidate.max(bounds.top)
    }
}

/// Progress of `offset` between the bounds: 0 at `top`, rising toward 1 at
/// `bottom`.
///
/// When `bottom == 0` or the range is empty both terms get 1 added so the
/// division is always defined.
pub fn drag_rate(offset: i32, bounds: OffsetBounds) -> f32 {
    let adjust = if bounds.bottom == 0 || bounds.is_degenerate() {
        1
    } else {
        0
    };
    let numerator = bounds.bottom as f32 - offset as f32 + adjust as f32;
    let denominator = (bounds.range() + adjust) as f32;
    (1.0 - (numerator / denominator).abs()).clamp(0.0, 1.0)
}

/// Offset a settle animation starts from, recovered from the drag rate.
pub fn resting_offset(rate: f32, bounds: OffsetBounds) -> f32 {
    let top = bounds.top as f32;
    let bottom = bounds.bottom as f32;
    bottom - (bottom - top) * (1.0 - rate)
}

/// Where an inertia phase carries a child released at `velocity` px/s.
pub fn inertia_target(
    from: f32,
    velocity: f32,
    velocity_divisor: f32,
    bounds: OffsetBounds,
) -> f32 {
    let travel = if velocity_divisor > 0.0 {
        velocity / velocity_divisor
    } else {
        0.0
    };
    (from + travel).clamp(bounds.top as f32, bounds.bottom as f32)
}

/// The resting bound nearer to the child's current progress.
pub fn recover_target(rate: f32, bounds: OffsetBounds) -> f32 {
    if rate > RECOVER_RATE_THRESHOLD {
        bounds.bottom as f32
    } else {
        bounds.top as f32
    }
}

#[cfg(test)]
#[path = "tests/offset_tests.rs"]
mod tests;
