//! Drag session bookkeeping between a pointer down and its release.

use cardstack_foundation::{PointerEvent, VelocityTracker1D};

/// One active drag. Owns the velocity history; dropping the session
/// releases it.
#[derive(Debug, Clone)]
pub struct DragSession {
    last_y: f32,
    velocity_tracker: VelocityTracker1D,
}

impl DragSession {
    pub fn start(event: &PointerEvent) -> Self {
        let mut velocity_tracker = VelocityTracker1D::new();
        velocity_tracker.add_pointer_event(event);
        Self {
            last_y: event.position.y,
            velocity_tracker,
        }
    }

    pub fn last_y(&self) -> f32 {
        self.last_y
    }

    /// Records a move and returns the damped vertical delta since the
    /// previous sample.
    pub fn on_move(&mut self, event: &PointerEvent, damping_factor: f32) -> f32 {
        self.velocity_tracker.add_pointer_event(event);
        let delta = (event.position.y - self.last_y) * damping_factor;
        self.last_y = event.position.y;
        delta
    }

    /// Ends the session on its up or cancel sample and returns the release
    /// velocity in px/s. A finger that rested before lifting reads as 0.
    pub fn finish(mut self, event: &PointerEvent, max_velocity: f32) -> f32 {
        self.velocity_tracker.add_pointer_event(event);
        self.velocity_tracker
            .calculate_velocity_with_max(max_velocity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardstack_foundation::velocity_tracker::ASSUME_STOPPED_MS;

    #[test]
    fn move_delta_is_damped() {
        let mut session = DragSession::start(&PointerEvent::down(10.0, 100.0, 0));
        assert_eq!(session.on_move(&PointerEvent::moved(10.0, 80.0, 16), 0.5), -10.0);
        assert_eq!(session.on_move(&PointerEvent::moved(10.0, 90.0, 32), 0.5), 5.0);
        assert_eq!(session.last_y(), 90.0);
    }

    #[test]
    fn fast_swipe_reports_velocity_in_its_direction() {
        let mut session = DragSession::start(&PointerEvent::down(0.0, 500.0, 0));
        for step in 1..=5 {
            session.on_move(&PointerEvent::moved(0.0, 500.0 - 40.0 * step as f32, step * 10), 1.0);
        }
        let velocity = session.finish(&PointerEvent::up(0.0, 300.0, 50), 8_000.0);
        assert!(velocity < -3_000.0, "expected a fast upward fling, got {velocity}");
    }

    #[test]
    fn press_without_movement_has_no_velocity() {
        let session = DragSession::start(&PointerEvent::down(0.0, 500.0, 0));
        assert_eq!(session.finish(&PointerEvent::up(0.0, 500.0, 10), 8_000.0), 0.0);
    }

    #[test]
    fn resting_before_lifting_reads_as_stopped() {
        let mut session = DragSession::start(&PointerEvent::down(0.0, 500.0, 0));
        for step in 1..=5 {
            session.on_move(&PointerEvent::moved(0.0, 500.0 - 40.0 * step as f32, step * 10), 1.0);
        }
        let release = PointerEvent::up(0.0, 300.0, 50 + ASSUME_STOPPED_MS + 1);
        assert_eq!(session.finish(&release, 8_000.0), 0.0);
    }
}
