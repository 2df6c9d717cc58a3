//! Tweens with easing curves. A [`ValueAnimator`] drives several values at
//! once (one track per card) from a single clock.

/// Values a [`ValueAnimator`] can move between.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

/// Maps linear time progress in `[0, 1]` to value progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// `t²`: starts slowly and speeds up, like a card falling onto its bound.
    Accelerate,
    /// `1 - (1 - t)²`: starts fast and coasts to a stop.
    Decelerate,
}

impl Easing {
    pub fn transform(&self, fraction: f32) -> f32 {
        let t = fraction.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Accelerate => t * t,
            Easing::Decelerate => {
                let remaining = 1.0 - t;
                1.0 - remaining * remaining
            }
        }
    }
}

/// Duration and easing of a tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationSpec {
    pub duration_millis: u64,
    pub easing: Easing,
}

impl AnimationSpec {
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
        }
    }

    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }

    fn duration_nanos(&self) -> u64 {
        self.duration_millis.saturating_mul(1_000_000)
    }
}

/// One animated value: where it starts, where it ends, where it is now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track<T> {
    pub start: T,
    pub target: T,
    pub current: T,
}

impl<T: Lerp + Clone> Track<T> {
    pub fn new(start: T, target: T) -> Self {
        Self {
            current: start.clone(),
            start,
            target,
        }
    }
}

/// Whether a [`ValueAnimator`] needs another frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameResult {
    Running,
    Finished,
}

/// Tween over any number of values sharing one spec and one clock.
///
/// The first call to [`ValueAnimator::on_frame`] fixes the start time, so an
/// animator created between frames starts exactly on the next tick.
#[derive(Debug, Clone)]
pub struct ValueAnimator<T: Lerp + Clone = f32> {
    tracks: Vec<Track<T>>,
    spec: AnimationSpec,
    start_time_nanos: Option<u64>,
    finished: bool,
}

impl<T: Lerp + Clone> ValueAnimator<T> {
    /// Create an animator from `(start, target)` pairs.
    pub fn new(values: impl IntoIterator<Item = (T, T)>, spec: AnimationSpec) -> Self {
        Self {
            tracks: values
                .into_iter()
                .map(|(start, target)| Track::new(start, target))
                .collect(),
            spec,
            start_time_nanos: None,
            finished: false,
        }
    }

    pub fn spec(&self) -> AnimationSpec {
        self.spec
    }

    pub fn tracks(&self) -> &[Track<T>] {
        &self.tracks
    }

    /// Current value of every track, in creation order.
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.tracks.iter().map(|track| &track.current)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance to `frame_time_nanos`. Values land exactly on their targets on
    /// the frame that completes the animation.
    pub fn on_frame(&mut self, frame_time_nanos: u64) -> FrameResult {
        if self.finished {
            return FrameResult::Finished;
        }

        let start_time = *self.start_time_nanos.get_or_insert(frame_time_nanos);
        let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
        let duration_nanos = self.spec.duration_nanos().max(1);
        let linear_progress = (elapsed_nanos as f32 / duration_nanos as f32).clamp(0.0, 1.0);

        if linear_progress >= 1.0 {
            for track in &mut self.tracks {
                track.current = track.target.clone();
            }
            self.finished = true;
            return FrameResult::Finished;
        }

        let progress = self.spec.easing.transform(linear_progress);
        for track in &mut self.tracks {
            track.current = track.start.lerp(&track.target, progress);
        }
        log::trace!("value animator progress {progress:.3}");
        FrameResult::Running
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
