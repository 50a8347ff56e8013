//! Emergency-stop interlock.

use crate::config::MechanicalConstraints;
use crate::error::{MotorError, Result};
use crate::logging::{log_info, log_warn};
use crate::motor::MotorState;

/// Result of one interlock evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterlockStatus {
    /// Not tripped, input clear.
    Clear,
    /// Input became asserted on this evaluation.
    Tripped,
    /// Input still asserted; cooldown re-armed.
    Held,
    /// Input clear, waiting out the debounce window.
    CoolingDown {
        /// Clear coarse ticks still needed.
        remaining: u32,
    },
    /// Debounce window completed on this evaluation.
    Released,
}

/// Debounced e-stop state machine.
///
/// Clear until the stop input asserts. While tripped, the input must read
/// clear for `window` consecutive evaluations before the interlock releases;
/// any reassertion re-arms the window. Releasing never re-enables the motor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interlock {
    tripped: bool,
    cooldown_remaining: u32,
    window: u32,
}

impl Interlock {
    /// Clear interlock with a debounce window of `window` coarse ticks.
    pub const fn new(window: u32) -> Self {
        Self {
            tripped: false,
            cooldown_remaining: 0,
            window,
        }
    }

    /// Interlock using the configured debounce window.
    pub fn from_constraints(constraints: &MechanicalConstraints) -> Self {
        Self::new(constraints.debounce_ticks)
    }

    /// Whether the interlock currently blocks enabling.
    #[inline]
    pub fn is_tripped(&self) -> bool {
        self.tripped
    }

    /// Clear coarse ticks still needed before release.
    #[inline]
    pub fn cooldown_remaining(&self) -> u32 {
        self.cooldown_remaining
    }

    /// Debounce window in coarse ticks.
    #[inline]
    pub fn window(&self) -> u32 {
        self.window
    }

    /// Evaluate one coarse tick with the sampled stop input.
    ///
    /// On assertion the motor is disabled and stopped every time, not only on
    /// the first edge.
    pub fn evaluate(&mut self, asserted: bool, motor: &mut MotorState) -> InterlockStatus {
        if asserted {
            let newly = !self.tripped;
            self.tripped = true;
            self.cooldown_remaining = self.window;
            motor.set_enabled(false);
            motor.stop();

            if newly {
                log_warn!("e-stop asserted, motor stopped at {}", motor.current_position());
                return InterlockStatus::Tripped;
            }
            return InterlockStatus::Held;
        }

        if !self.tripped {
            return InterlockStatus::Clear;
        }

        self.cooldown_remaining = self.cooldown_remaining.saturating_sub(1);
        if self.cooldown_remaining == 0 {
            self.tripped = false;
            log_info!("e-stop released");
            InterlockStatus::Released
        } else {
            InterlockStatus::CoolingDown {
                remaining: self.cooldown_remaining,
            }
        }
    }

    /// Fail if enabling the motor is currently not allowed.
    pub fn check_enable(&self) -> Result<()> {
        if self.tripped {
            return Err(MotorError::InterlockTripped.into());
        }
        Ok(())
    }
}
