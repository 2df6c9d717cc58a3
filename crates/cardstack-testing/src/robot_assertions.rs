//! Assertion utilities for robot testing
//!
//! Helpers for validating offsets, drag rates and bounds after a scripted
//! gesture.

use cardstack_graphics::Rect;
use cardstack_ui::CardStack;

/// Assert that a value is within `tolerance` of the expected one.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a rectangle is approximately equal to another.
pub fn assert_rect_approx_eq(actual: Rect, expected: Rect, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
    assert_approx_eq(
        actual.width,
        expected.width,
        tolerance,
        &format!("{} - width", msg),
    );
    assert_approx_eq(
        actual.height,
        expected.height,
        tolerance,
        &format!("{} - height", msg),
    );
}

/// Assert the offset of every child, in stack order.
pub fn assert_offsets(stack: &CardStack, expected: &[i32], msg: &str) {
    let actual: Vec<i32> = stack.children().iter().map(|child| child.offset()).collect();
    assert_eq!(actual, expected, "{}: offsets", msg);
}

/// Assert that every draggable child sits inside its bounds and reports a
/// drag rate in `[0, 1]`.
pub fn assert_within_bounds(stack: &CardStack, msg: &str) {
    for index in 0..stack.child_count() {
        let Some(bounds) = stack.bounds(index) else {
            continue;
        };
        let offset = stack.offset(index).unwrap_or_default();
        assert!(
            bounds.contains(offset),
            "{}: child {} offset {} outside {:?}",
            msg,
            index,
            offset,
            bounds
        );
        assert_rate_in_range(stack.drag_rate(index), &format!("{} - child {}", msg, index));
    }
}

/// Assert that a drag rate lies in `[0, 1]`.
pub fn assert_rate_in_range(rate: f32, msg: &str) {
    assert!(
        (0.0..=1.0).contains(&rate),
        "{}: drag rate {} outside [0, 1]",
        msg,
        rate
    );
}

/// Assert that a sequence never decreases.
pub fn assert_non_decreasing(values: &[f32], msg: &str) {
    for (i, pair) in values.windows(2).enumerate() {
        assert!(
            pair[1] >= pair[0],
            "{}: value {} at {} drops below {} at {}",
            msg,
            pair[1],
            i + 1,
            pair[0],
            i
        );
    }
}

/// Assert that a sequence never increases.
pub fn assert_non_increasing(values: &[f32], msg: &str) {
    for (i, pair) in values.windows(2).enumerate() {
        assert!(
            pair[1] <= pair[0],
            "{}: value {} at {} rises above {} at {}",
            msg,
            pair[1],
            i + 1,
            pair[0],
            i
        );
    }
}
