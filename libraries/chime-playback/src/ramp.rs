//! Linear fade ramp
//!
//! Pure step engine behind the fade controller: no timers, no player.
//! The controller calls `advance()` once per tick and writes the
//! returned volume; completion is reached after exactly `steps` ticks.

/// Ramp direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FadeDirection {
    In,
    Out,
}

/// Linear volume ramp advanced one step per tick
///
/// Fade-in counts a step counter up from 0 to `steps`, yielding
/// `min(step/steps, 1.0)` per tick. Fade-out counts down from `steps`
/// to 0, yielding `max(step/steps, 0.0)`.
///
/// A fade-out always starts from the full counter, not from whatever
/// volume the player currently has. Interrupting a fade-in mid-ramp
/// therefore restarts the down-ramp from full scale.
#[derive(Debug, Clone)]
pub struct FadeRamp {
    direction: FadeDirection,
    step: u32,
    steps: u32,
}

impl FadeRamp {
    /// Create a ramp from silence to full volume
    pub fn fade_in(steps: u32) -> Self {
        Self {
            direction: FadeDirection::In,
            step: 0,
            steps: steps.max(1),
        }
    }

    /// Create a ramp from full volume to silence
    pub fn fade_out(steps: u32) -> Self {
        let steps = steps.max(1);
        Self {
            direction: FadeDirection::Out,
            step: steps,
            steps,
        }
    }

    /// Advance one tick and return the volume to write
    ///
    /// Saturates at the terminal step, so calling past completion keeps
    /// returning the terminal volume.
    pub fn advance(&mut self) -> f32 {
        match self.direction {
            FadeDirection::In => {
                self.step = (self.step + 1).min(self.steps);
                (self.step as f32 / self.steps as f32).min(1.0)
            }
            FadeDirection::Out => {
                self.step = self.step.saturating_sub(1);
                (self.step as f32 / self.steps as f32).max(0.0)
            }
        }
    }

    /// Volume corresponding to the current step, clamped to [0.0, 1.0]
    pub fn current_volume(&self) -> f32 {
        (self.step as f32 / self.steps as f32).clamp(0.0, 1.0)
    }

    /// Whether the ramp has reached its terminal step
    pub fn is_complete(&self) -> bool {
        match self.direction {
            FadeDirection::In => self.step >= self.steps,
            FadeDirection::Out => self.step == 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn fade_in_volume_sequence() {
        let mut ramp = FadeRamp::fade_in(20);
        assert!(!ramp.is_complete());

        for n in 1..=20u32 {
            let volume = ramp.advance();
            let expected = (n as f32 / 20.0).min(1.0);
            assert!(
                (volume - expected).abs() < 0.001,
                "tick {}: expected {}, got {}",
                n,
                expected,
                volume
            );
        }
        assert!(ramp.is_complete());
        assert_eq!(ramp.current_volume(), 1.0);
    }

    #[test]
    fn fade_out_volume_sequence() {
        let mut ramp = FadeRamp::fade_out(20);
        assert!(!ramp.is_complete());
        assert_eq!(ramp.current_volume(), 1.0);

        for n in (0..20u32).rev() {
            let volume = ramp.advance();
            let expected = (n as f32 / 20.0).max(0.0);
            assert!(
                (volume - expected).abs() < 0.001,
                "tick down to {}: expected {}, got {}",
                n,
                expected,
                volume
            );
        }
        assert!(ramp.is_complete());
        assert_eq!(ramp.current_volume(), 0.0);
    }

    #[test]
    fn fade_in_completes_after_exactly_steps_ticks() {
        let mut ramp = FadeRamp::fade_in(5);
        for _ in 0..4 {
            ramp.advance();
            assert!(!ramp.is_complete());
        }
        ramp.advance();
        assert!(ramp.is_complete());
    }

    #[test]
    fn advance_saturates_past_completion() {
        let mut ramp = FadeRamp::fade_in(2);
        ramp.advance();
        ramp.advance();
        assert!(ramp.is_complete());
        assert_eq!(ramp.advance(), 1.0);

        let mut ramp = FadeRamp::fade_out(2);
        ramp.advance();
        ramp.advance();
        assert!(ramp.is_complete());
        assert_eq!(ramp.advance(), 0.0);
    }

    #[test]
    fn fade_out_starts_from_full_counter() {
        // The down-ramp ignores any partial fade-in progress.
        let mut ramp = FadeRamp::fade_out(20);
        let first = ramp.advance();
        assert!((first - 0.95).abs() < 0.001);
    }

    #[test]
    fn zero_steps_clamped_to_one() {
        let mut ramp = FadeRamp::fade_in(0);
        assert_eq!(ramp.advance(), 1.0);
        assert!(ramp.is_complete());
    }

    proptest! {
        #[test]
        fn fade_in_monotonic_and_bounded(steps in 1..200u32) {
            let mut ramp = FadeRamp::fade_in(steps);
            let mut previous = 0.0f32;
            while !ramp.is_complete() {
                let volume = ramp.advance();
                prop_assert!((0.0..=1.0).contains(&volume));
                prop_assert!(volume >= previous);
                previous = volume;
            }
            prop_assert_eq!(previous, 1.0);
        }

        #[test]
        fn fade_out_monotonic_and_bounded(steps in 1..200u32) {
            let mut ramp = FadeRamp::fade_out(steps);
            let mut previous = 1.0f32;
            while !ramp.is_complete() {
                let volume = ramp.advance();
                prop_assert!((0.0..=1.0).contains(&volume));
                prop_assert!(volume <= previous);
                previous = volume;
            }
            prop_assert_eq!(previous, 0.0);
        }

        #[test]
        fn fade_takes_exactly_steps_ticks(steps in 1..200u32) {
            let mut ramp = FadeRamp::fade_in(steps);
            let mut ticks = 0u32;
            while !ramp.is_complete() {
                ramp.advance();
                ticks += 1;
            }
            prop_assert_eq!(ticks, steps);
        }
    }
}
