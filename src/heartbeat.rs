//! Heartbeat LED timing.

use crate::config::MechanicalConstraints;
use crate::error::{CommandError, Result};

/// 50% duty square wave on coarse ticks.
///
/// On at counter 0, off at `period / 2`, counter wraps when it reaches the
/// period. Only level changes are reported; the caller drives the LED.
///
/// The period is at least [`Heartbeat::MIN_PERIOD`] ticks, otherwise the
/// off edge would land on the on edge and the LED would stay lit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heartbeat {
    counter: u32,
    period: u32,
    on: bool,
}

impl Heartbeat {
    /// Shortest period that still blinks.
    pub const MIN_PERIOD: u32 = 2;

    /// Heartbeat with a period of `period` coarse ticks, raised to
    /// [`MIN_PERIOD`](Self::MIN_PERIOD) if shorter.
    pub const fn new(period: u32) -> Self {
        Self {
            counter: 0,
            period: if period < Self::MIN_PERIOD { Self::MIN_PERIOD } else { period },
            on: false,
        }
    }

    /// Heartbeat using the configured start-up period.
    pub fn from_constraints(constraints: &MechanicalConstraints) -> Self {
        Self::new(constraints.heartbeat_period_ticks)
    }

    /// Period in coarse ticks.
    #[inline]
    pub fn period(&self) -> u32 {
        self.period
    }

    /// Whether the LED should currently be lit.
    #[inline]
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Change the period. A shorter period takes effect on the next tick.
    ///
    /// # Errors
    ///
    /// `CommandError::InvalidLedPeriod` if `period` is below
    /// [`MIN_PERIOD`](Self::MIN_PERIOD).
    pub fn set_period(&mut self, period: u32) -> Result<()> {
        if period < Self::MIN_PERIOD {
            return Err(CommandError::InvalidLedPeriod(period as i64).into());
        }
        self.period = period;
        Ok(())
    }

    /// Advance one coarse tick. Returns the new level if it changed.
    pub fn tick(&mut self) -> Option<bool> {
        if self.counter >= self.period {
            self.counter = 0;
        }

        let level = if self.counter == 0 {
            Some(true)
        } else if self.counter == self.period / 2 {
            Some(false)
        } else {
            None
        };
        self.counter += 1;

        match level {
            Some(on) if on != self.on => {
                self.on = on;
                Some(on)
            }
            _ => None,
        }
    }
}
