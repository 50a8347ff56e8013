//! Per-step phase counter.

/// What the step output should do on this fine tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PulseAction {
    /// Leave the pulse where it is.
    Hold,
    /// Raise the pulse (half way through the cycle).
    Raise,
    /// Lower the pulse; one step is complete.
    Lower,
}

/// Divides a step cycle of `period` fine ticks into a low half and a high
/// half.
///
/// The period is latched at phase 0, so a change requested mid-cycle only
/// applies from the next cycle and a cycle never lowers a pulse it did not
/// raise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepTimer {
    phase: u32,
    latched_period: u32,
}

impl StepTimer {
    /// Timer at the start of a cycle.
    pub const fn new() -> Self {
        Self {
            phase: 0,
            latched_period: 0,
        }
    }

    /// Fine ticks elapsed in the current cycle.
    #[inline]
    pub fn phase(&self) -> u32 {
        self.phase
    }

    /// Back to the start of a cycle.
    #[inline]
    pub fn reset(&mut self) {
        self.phase = 0;
    }

    /// Advance by one fine tick.
    pub fn tick(&mut self, period: u32) -> PulseAction {
        if self.phase == 0 {
            // A period below 2 would raise and lower on the same tick
            self.latched_period = period.max(2);
        }

        self.phase += 1;
        if self.phase >= self.latched_period {
            self.phase = 0;
            PulseAction::Lower
        } else if self.phase == self.latched_period / 2 {
            PulseAction::Raise
        } else {
            PulseAction::Hold
        }
    }
}
