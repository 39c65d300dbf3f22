//! Core types for fade management

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Fade configuration
///
/// A fade ramps the player volume linearly across `steps` discrete
/// writes spread evenly over `duration`. The defaults (500 ms, 20 steps)
/// give a 25 ms tick interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FadeSettings {
    /// Total wall-clock fade duration
    pub duration: Duration,

    /// Number of discrete volume increments per fade
    pub steps: u32,
}

impl FadeSettings {
    /// Create fade settings, clamping degenerate input
    ///
    /// Zero steps become 1 and a zero duration becomes 1 ms rather than
    /// erroring, so a misconfigured fade degrades to a near-instant one.
    pub fn new(duration: Duration, steps: u32) -> Self {
        Self {
            duration: duration.max(Duration::from_millis(1)),
            steps: steps.max(1),
        }
    }

    /// Interval between volume writes
    pub fn interval(&self) -> Duration {
        self.duration / self.steps.max(1)
    }
}

impl Default for FadeSettings {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(500),
            steps: 20,
        }
    }
}

/// Fade lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FadePhase {
    /// No fade in progress
    Idle,

    /// Volume ramping up toward 1.0
    FadingIn,

    /// Volume ramping down toward 0.0
    FadingOut,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let settings = FadeSettings::default();
        assert_eq!(settings.duration, Duration::from_millis(500));
        assert_eq!(settings.steps, 20);
        assert_eq!(settings.interval(), Duration::from_millis(25));
    }

    #[test]
    fn new_clamps_degenerate_input() {
        let settings = FadeSettings::new(Duration::ZERO, 0);
        assert_eq!(settings.steps, 1);
        assert_eq!(settings.duration, Duration::from_millis(1));
        assert_eq!(settings.interval(), Duration::from_millis(1));
    }

    #[test]
    fn interval_divides_duration_evenly() {
        let settings = FadeSettings::new(Duration::from_millis(1000), 10);
        assert_eq!(settings.interval(), Duration::from_millis(100));
    }
}
