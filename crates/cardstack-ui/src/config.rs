//! Tunables for how the stack reacts to a finger.

use cardstack_foundation::ViewConfiguration;

/// Finger movement is multiplied by this before it reaches the cards.
/// Smaller values make the stack feel heavier.
pub const DEFAULT_DAMPING_FACTOR: f32 = 0.5;

/// Release velocity (px/s) divided by this gives the inertia travel in px.
pub const DEFAULT_VELOCITY_DIVISOR: f32 = 70.0;

/// Release velocity (px/s) divided by this gives the inertia duration in ms.
pub const DEFAULT_DURATION_DIVISOR: f32 = 50.0;

pub const DEFAULT_RECOVER_DURATION_MILLIS: u64 = 300;

/// Card flings need a firmer release than the platform minimum.
pub const CARD_FLING_VELOCITY_FACTOR: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardStackConfig {
    pub damping_factor: f32,
    pub velocity_divisor: f32,
    pub duration_divisor: f32,
    pub recover_duration_millis: u64,
    /// Releases faster than this (px/s) run an inertia phase first.
    pub min_fling_velocity: f32,
    /// Release velocities are capped to this (px/s).
    pub max_fling_velocity: f32,
}

impl CardStackConfig {
    pub fn from_view_configuration(view_configuration: &ViewConfiguration) -> Self {
        Self {
            damping_factor: DEFAULT_DAMPING_FACTOR,
            velocity_divisor: DEFAULT_VELOCITY_DIVISOR,
            duration_divisor: DEFAULT_DURATION_DIVISOR,
            recover_duration_millis: DEFAULT_RECOVER_DURATION_MILLIS,
            min_fling_velocity: view_configuration.minimum_fling_velocity
                * CARD_FLING_VELOCITY_FACTOR,
            max_fling_velocity: view_configuration.maximum_fling_velocity,
        }
    }

    pub fn with_damping_factor(mut self, damping_factor: f32) -> Self {
        self.damping_factor = damping_factor;
        self
    }

    pub fn with_min_fling_velocity(mut self, min_fling_velocity: f32) -> Self {
        self.min_fling_velocity = min_fling_velocity;
        self
    }

    pub fn with_max_fling_velocity(mut self, max_fling_velocity: f32) -> Self {
        self.max_fling_velocity = max_fling_velocity;
        self
    }

    pub fn with_velocity_divisor(mut self, velocity_divisor: f32) -> Self {
        self.velocity_divisor = velocity_divisor;
        self
    }

    pub fn with_duration_divisor(mut self, duration_divisor: f32) -> Self {
        self.duration_divisor = duration_divisor;
        self
    }

    pub fn with_recover_duration_millis(mut self, recover_duration_millis: u64) -> Self {
        self.recover_duration_millis = recover_duration_millis;
        self
    }

    /// Inertia duration for a release at `velocity` px/s.
    pub fn inertia_duration_millis(&self, velocity: f32) -> u64 {
        if self.duration_divisor <= 0.0 {
            return 0;
        }
        (velocity.abs() / self.duration_divisor) as u64
    }

    pub fn is_fling(&self, velocity: f32) -> bool {
        velocity.abs() > self.min_fling_velocity
    }
}

impl Default for CardStackConfig {
    fn default() -> Self {
        Self::from_view_configuration(&ViewConfiguration::default())
    }
}
