use std::time::Duration;

/// Fixed-step accumulator that turns variable frame times into whole ticks.
///
/// Frame time is banked; each [`FixedStep::try_consume`] withdraws one step.
/// Leftover time carries into the next frame. No cap is applied, so a slow
/// frame runs as many ticks as it owes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedStep {
    step: Duration,
    accumulator: Duration,
}

impl FixedStep {
    pub fn new(step: Duration) -> Self {
        Self {
            step,
            accumulator: Duration::ZERO,
        }
    }

    #[inline]
    pub fn step(&self) -> Duration {
        self.step
    }

    /// Banked time not yet spent on a tick.
    #[inline]
    pub fn pending(&self) -> Duration {
        self.accumulator
    }

    #[inline]
    pub fn accumulate(&mut self, frame: Duration) {
        self.accumulator = self.accumulator.saturating_add(frame);
    }

    /// Withdraw one step if enough time is banked.
    #[inline]
    pub fn try_consume(&mut self) -> bool {
        if self.step.is_zero() {
            return false;
        }
        match self.accumulator.checked_sub(self.step) {
            Some(rest) => {
                self.accumulator = rest;
                true
            }
            None => false,
        }
    }

    /// Number of whole steps currently banked.
    pub fn due(&self) -> u32 {
        if self.step.is_zero() {
            return 0;
        }
        (self.accumulator.as_nanos() / self.step.as_nanos()).min(u32::MAX as u128) as u32
    }

    /// Drop any banked time.
    #[inline]
    pub fn reset(&mut self) {
        self.accumulator = Duration::ZERO;
    }
}
