use super::*;

fn bounds(top: i32, bottom: i32) -> OffsetBounds {
    OffsetBounds { top, bottom }
}

#[test]
fn clamp_invariant_holds_for_any_delta_sequence() {
    let cases = [bounds(-100, 0), bounds(-40, 60), bounds(0, 30), bounds(0, 0)];
    let deltas = [
        -1000.0, -33.4, -0.6, -0.4, 0.0, 0.5, 7.0, 41.2, 999.9, f32::NAN, f32::INFINITY,
    ];

    for b in cases {
        let mut offset = 0;
        for (step, delta) in deltas.iter().cycle().take(200).enumerate() {
            let signed = if step % 3 == 0 { -delta } else { *delta };
            offset = apply_delta(offset, signed, b);
            assert!(
                b.contains(offset),
                "offset {offset} escaped {b:?} after delta {signed}"
            );
        }
    }
}

#[test]
fn positive_candidate_clamps_to_bottom() {
    assert_eq!(apply_delta(0, 50.0, bounds(-100, 30)), 30);
    assert_eq!(apply_delta(20, 5.0, bounds(-100, 30)), 25);
}

#[test]
fn negative_candidate_clamps_to_top() {
    assert_eq!(apply_delta(-90, -25.0, bounds(-100, 30)), -100);
    assert_eq!(apply_delta(0, -60.0, bounds(-100, 0)), -60);
}

#[test]
fn delta_rounds_to_whole_pixels() {
    assert_eq!(apply_delta(0, 2.5, bounds(-100, 100)), 3);
    assert_eq!(apply_delta(0, -2.4, bounds(-100, 100)), -2);
    assert_eq!(apply_delta(10, 0.4, bounds(-100, 100)), 10);
}

#[test]
fn drag_rate_endpoints() {
    let b = bounds(-100, 50);
    assert_eq!(drag_rate(-100, b), 0.0);
    assert_eq!(drag_rate(50, b), 1.0);

    // bottom == 0 shifts both terms by one
    let b = bounds(-100, 0);
    assert_eq!(drag_rate(-100, b), 0.0);
    let at_bottom = drag_rate(0, b);
    assert!((at_bottom - 100.0 / 101.0).abs() < 1e-6);
    assert!(1.0 - at_bottom <= 1.0 / 101.0 + f32::EPSILON);
}

#[test]
fn drag_rate_stays_in_unit_range_and_is_monotonic() {
    for b in [bounds(-100, 0), bounds(-37, 81), bounds(0, 12), bounds(-5, 5)] {
        let mut previous = -1.0f32;
        for offset in b.top..=b.bottom {
            let rate = drag_rate(offset, b);
            assert!((0.0..=1.0).contains(&rate), "rate {rate} out of range");
            assert!(rate >= previous, "rate decreased at offset {offset}");
            previous = rate;
        }
    }
}

#[test]
fn degenerate_bounds_never_divide_by_zero() {
    let rate = drag_rate(0, bounds(0, 0));
    assert!(rate.is_finite());
    assert_eq!(rate, 0.0);
}

#[test]
fn drag_rate_outside_bounds_is_clamped() {
    assert_eq!(drag_rate(-500, bounds(-100, 50)), 0.0);
    assert_eq!(drag_rate(500, bounds(-100, 50)), 1.0);
}

#[test]
fn sixty_pixels_up_is_forty_percent() {
    let b = bounds(-100, 0);
    let rate = drag_rate(-60, b);
    assert!((rate - 40.0 / 101.0).abs() < 1e-6);
    assert_eq!(recover_target(rate, b), -100.0);
}

#[test]
fn near_bottom_recovers_to_bottom() {
    let b = bounds(-100, 0);
    let rate = drag_rate(-20, b);
    assert!(rate > RECOVER_RATE_THRESHOLD);
    assert_eq!(recover_target(rate, b), 0.0);
}

#[test]
fn resting_offset_inverts_drag_rate() {
    let b = bounds(-100, 50);
    for offset in [-100, -60, 0, 25, 50] {
        let from = resting_offset(drag_rate(offset, b), b);
        assert!((from - offset as f32).abs() < 1e-3, "{from} vs {offset}");
    }
}

#[test]
fn inertia_target_follows_velocity_and_clamps() {
    let b = bounds(-100, 50);
    assert_eq!(inertia_target(0.0, 1400.0, 70.0, b), 20.0);
    assert_eq!(inertia_target(0.0, -1400.0, 70.0, b), -20.0);
    assert_eq!(inertia_target(40.0, 7000.0, 70.0, b), 50.0);
    assert_eq!(inertia_target(-90.0, -7000.0, 70.0, b), -100.0);
    assert_eq!(inertia_target(-10.0, 7000.0, 0.0, b), -10.0);
}
