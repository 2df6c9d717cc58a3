//! Release velocity estimation for card drags.
//!
//! Uses the impulse strategy: each pair of consecutive samples pushes
//! kinetic energy into an imaginary unit mass, and the velocity is read back
//! from the energy. A single jittery sample moves the estimate less than a
//! plain slope would.

use std::collections::VecDeque;

use crate::pointer::PointerEvent;

/// Samples kept per drag.
const HISTORY_SIZE: usize = 20;

/// Samples older than this, relative to the newest, are ignored.
const HORIZON_MS: i64 = 100;

/// A gap this long between samples means the finger stopped.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Sample {
    time_ms: i64,
    position: f32,
}

/// Tracks one axis of pointer motion and reports its velocity in units per
/// second.
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker1D {
    samples: VecDeque<Sample>,
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(HISTORY_SIZE),
        }
    }

    /// Records `position` at `time_ms`, dropping the oldest sample once the
    /// history is full.
    pub fn add_data_point(&mut self, time_ms: i64, position: f32) {
        if self.samples.len() == HISTORY_SIZE {
            self.samples.pop_front();
        }
        self.samples.push_back(Sample { time_ms, position });
    }

    /// Records the vertical position of a pointer sample.
    pub fn add_pointer_event(&mut self, event: &PointerEvent) {
        self.add_data_point(event.time_ms, event.position.y);
    }

    /// Velocity in units per second. 0 with fewer than two usable samples,
    /// which includes any drag that paused for longer than
    /// [`ASSUME_STOPPED_MS`] before its last sample.
    pub fn calculate_velocity(&self) -> f32 {
        let recent = self.recent_samples();
        if recent.len() < 2 {
            return 0.0;
        }
        impulse_velocity(&recent) * 1000.0
    }

    /// [`VelocityTracker1D::calculate_velocity`] limited to `±max_velocity`.
    /// A non-positive or non-finite limit yields 0.
    pub fn calculate_velocity_with_max(&self, max_velocity: f32) -> f32 {
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return 0.0;
        }
        let velocity = self.calculate_velocity();
        if velocity.is_nan() {
            return 0.0;
        }
        velocity.clamp(-max_velocity, max_velocity)
    }

    pub fn reset(&mut self) {
        self.samples.clear();
    }

    /// The unbroken run of samples ending at the newest one, oldest first.
    fn recent_samples(&self) -> Vec<Sample> {
        let Some(newest) = self.samples.back().copied() else {
            return Vec::new();
        };
        let mut recent = Vec::with_capacity(self.samples.len());
        let mut later = newest;
        for sample in self.samples.iter().rev().copied() {
            let age = newest.time_ms - sample.time_ms;
            let gap = (later.time_ms - sample.time_ms).abs();
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }
            recent.push(sample);
            later = sample;
        }
        recent.reverse();
        recent
    }
}

/// Impulse velocity in units per millisecond over samples ordered oldest
/// first.
fn impulse_velocity(samples: &[Sample]) -> f32 {
    let mut work = 0.0f32;
    for (i, pair) in samples.windows(2).enumerate() {
        let (earlier, later) = (pair[0], pair[1]);
        let dt = (later.time_ms - earlier.time_ms) as f32;
        if dt == 0.0 {
            continue;
        }
        let velocity = (later.position - earlier.position) / dt;
        work += (velocity - energy_to_velocity(work)) * velocity.abs();
        if i == 0 {
            work *= 0.5;
        }
    }
    energy_to_velocity(work)
}

/// Inverts `E = v² / 2` for a unit mass, keeping the sign.
fn energy_to_velocity(energy: f32) -> f32 {
    energy.signum() * (2.0 * energy.abs()).sqrt()
}
