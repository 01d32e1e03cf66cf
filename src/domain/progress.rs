// SPDX-License-Identifier: MPL-2.0
//! Processing progress newtypes.
//!
//! Progress is a cosmetic 0–100 counter advanced by a fixed step on every
//! timer tick. These types keep it inside its bounds.

/// Progress bounds and defaults.
pub mod progress_bounds {
    /// Starting value.
    pub const MIN: u8 = 0;
    /// Completion value; never exceeded.
    pub const MAX: u8 = 100;
    /// Default increment per tick.
    pub const DEFAULT_STEP: u8 = 5;
}

/// Percentage of the simulated processing, guaranteed to stay in 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Progress(u8);

impl Progress {
    /// Creates a progress value, clamping to 100.
    #[must_use]
    pub fn new(value: u8) -> Self {
        Self(value.min(progress_bounds::MAX))
    }

    /// Progress at zero.
    #[must_use]
    pub fn zero() -> Self {
        Self(progress_bounds::MIN)
    }

    /// Returns the raw percentage.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns the progress advanced by `step`, clamped to 100.
    #[must_use]
    pub fn advance(self, step: ProgressStep) -> Self {
        Self::new(self.0.saturating_add(step.value()))
    }

    /// Returns true once the counter has reached 100.
    #[must_use]
    pub fn is_complete(self) -> bool {
        self.0 >= progress_bounds::MAX
    }

    /// Fraction in 0.0–1.0, for progress bars.
    #[must_use]
    pub fn fraction(self) -> f32 {
        f32::from(self.0) / f32::from(progress_bounds::MAX)
    }
}

/// Increment applied per tick, guaranteed to be in 1–100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressStep(u8);

impl ProgressStep {
    /// Creates a step, clamping to 1–100 so progress always terminates.
    #[must_use]
    pub fn new(value: u8) -> Self {
        Self(value.clamp(1, progress_bounds::MAX))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Number of ticks needed to go from 0 to 100.
    #[must_use]
    pub fn ticks_to_complete(self) -> u32 {
        u32::from(progress_bounds::MAX).div_ceil(u32::from(self.0))
    }
}

impl Default for ProgressStep {
    fn default() -> Self {
        Self(progress_bounds::DEFAULT_STEP)
    }
}
