//! Platform gesture constants and their density-scaled form.
//!
//! Values are in density-independent pixels and match the platform defaults
//! the card stack was tuned against. [`ViewConfiguration`] resolves them to
//! pixels for one screen density.

/// Slowest release that counts as a fling on the platform, in dp/s.
pub const MIN_FLING_VELOCITY_DP: f32 = 50.0;

/// Fastest fling the platform reports, in dp/s.
pub const MAX_FLING_VELOCITY_DP: f32 = 8_000.0;

/// Density-resolved gesture thresholds, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewConfiguration {
    pub density: f32,
    pub minimum_fling_velocity: f32,
    pub maximum_fling_velocity: f32,
}

impl ViewConfiguration {
    /// Resolve the platform constants for `density` (1.0 = mdpi).
    ///
    /// Non-positive or non-finite densities fall back to 1.0.
    pub fn for_density(density: f32) -> Self {
        let density = if density.is_finite() && density > 0.0 {
            density
        } else {
            log::warn!("invalid screen density {density}, using 1.0");
            1.0
        };
        Self {
            density,
            minimum_fling_velocity: MIN_FLING_VELOCITY_DP * density,
            maximum_fling_velocity: MAX_FLING_VELOCITY_DP * density,
        }
    }
}

impl Default for ViewConfiguration {
    fn default() -> Self {
        Self::for_density(1.0)
    }
}
