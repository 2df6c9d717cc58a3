//! Release animations: inertia after a fling, recover onto a resting bound.
//!
//! At most one phase runs at a time. Starting a phase drops the running one
//! without reporting completion, so only a naturally finished inertia phase
//! hands over to recover.

use cardstack_animation::{AnimationSpec, FrameResult, ValueAnimator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettlePhase {
    #[default]
    Idle,
    Inertia,
    Recover,
}

/// Where one child travels during a phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettleTarget {
    pub child: usize,
    pub from: f32,
    pub to: f32,
}

/// Values produced by one frame of the running phase.
#[derive(Debug, Clone, PartialEq)]
pub struct SettleFrame {
    pub phase: SettlePhase,
    /// `(child, offset)` for every animated child.
    pub offsets: Vec<(usize, f32)>,
    /// Set on the frame that completes the phase.
    pub finished: bool,
}

#[derive(Debug, Clone)]
struct RunningPhase {
    phase: SettlePhase,
    children: Vec<usize>,
    animator: ValueAnimator<f32>,
}

#[derive(Debug, Clone, Default)]
pub struct SettleAnimator {
    running: Option<RunningPhase>,
}

impl SettleAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SettlePhase {
        self.running
            .as_ref()
            .map_or(SettlePhase::Idle, |running| running.phase)
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Targets of the running phase, empty when idle.
    pub fn targets(&self) -> Vec<SettleTarget> {
        let Some(running) = self.running.as_ref() else {
            return Vec::new();
        };
        running
            .children
            .iter()
            .zip(running.animator.tracks())
            .map(|(&child, track)| SettleTarget {
                child,
                from: track.start,
                to: track.target,
            })
            .collect()
    }

    /// Replaces whatever is running with `phase`. Starting [`SettlePhase::Idle`]
    /// is the same as [`SettleAnimator::cancel`].
    pub fn start(&mut self, phase: SettlePhase, targets: Vec<SettleTarget>, spec: AnimationSpec) {
        self.cancel();
        if phase == SettlePhase::Idle {
            return;
        }
        let children = targets.iter().map(|target| target.child).collect();
        let animator = ValueAnimator::new(
            targets.iter().map(|target| (target.from, target.to)),
            spec,
        );
        self.running = Some(RunningPhase {
            phase,
            children,
            animator,
        });
    }

    /// Stops the running phase without reporting completion. Returns the
    /// phase that was cancelled, if any.
    pub fn cancel(&mut self) -> Option<SettlePhase> {
        let cancelled = self.running.take().map(|running| running.phase);
        if let Some(phase) = cancelled {
            log::debug!("settle {phase:?} cancelled");
        }
        cancelled
    }

    /// Advances the running phase. Returns `None` when idle.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> Option<SettleFrame> {
        let running = self.running.as_mut()?;
        let result = running.animator.on_frame(frame_time_nanos);
        let frame = SettleFrame {
            phase: running.phase,
            offsets: running
                .children
                .iter()
                .copied()
                .zip(running.animator.values().copied())
                .collect(),
            finished: result == FrameResult::Finished,
        };
        if frame.finished {
            self.running = None;
        }
        Some(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardstack_animation::Easing;

    fn targets() -> Vec<SettleTarget> {
        vec![
            SettleTarget {
                child: 0,
                from: -60.0,
                to: -100.0,
            },
            SettleTarget {
                child: 2,
                from: 10.0,
                to: 30.0,
            },
        ]
    }

    #[test]
    fn runs_to_completion_and_returns_to_idle() {
        let mut settle = SettleAnimator::new();
        settle.start(
            SettlePhase::Recover,
            targets(),
            AnimationSpec::tween(300, Easing::Accelerate),
        );
        assert_eq!(settle.phase(), SettlePhase::Recover);

        let first = settle.on_frame(0).expect("running");
        assert_eq!(first.offsets, vec![(0, -60.0), (2, 10.0)]);
        assert!(!first.finished);

        let last = settle.on_frame(300_000_000).expect("running");
        assert_eq!(last.offsets, vec![(0, -100.0), (2, 30.0)]);
        assert!(last.finished);
        assert_eq!(last.phase, SettlePhase::Recover);

        assert_eq!(settle.phase(), SettlePhase::Idle);
        assert!(settle.on_frame(316_000_000).is_none());
    }

    #[test]
    fn starting_a_phase_replaces_the_running_one() {
        let mut settle = SettleAnimator::new();
        settle.start(SettlePhase::Inertia, targets(), AnimationSpec::linear(100));
        settle.on_frame(0);

        settle.start(
            SettlePhase::Recover,
            vec![SettleTarget {
                child: 1,
                from: 0.0,
                to: 5.0,
            }],
            AnimationSpec::linear(100),
        );
        assert_eq!(settle.phase(), SettlePhase::Recover);
        assert_eq!(settle.targets().len(), 1);

        // The replacement starts its own clock on its first frame.
        let frame = settle.on_frame(200_000_000).expect("running");
        assert_eq!(frame.offsets, vec![(1, 0.0)]);
        assert!(!frame.finished);
    }

    #[test]
    fn cancel_reports_the_cancelled_phase_once() {
        let mut settle = SettleAnimator::new();
        settle.start(SettlePhase::Inertia, targets(), AnimationSpec::linear(100));
        assert_eq!(settle.cancel(), Some(SettlePhase::Inertia));
        assert_eq!(settle.cancel(), None);
        assert!(settle.on_frame(0).is_none());
        assert!(settle.targets().is_empty());
    }
}
