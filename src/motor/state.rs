//! Stepper motion state.
//!
//! A single [`MotorState`] is owned by the dispatch loop and mutated by the
//! step generator, the command interpreter and the interlock. It is plain
//! data: pins are driven elsewhere.

use crate::config::{MechanicalConstraints, Micros, StepLimits};
use crate::error::{MotorError, Result};
use crate::logging::{log_debug, log_info};
use crate::motion::Direction;

/// Outcome of [`MotorState::bump_down`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BumpOutcome {
    /// Moving down by the bump size from the current position.
    Lowered {
        /// New target position.
        target: i32,
    },
    /// Too close to the floor: origin redefined so the bump can complete.
    Rebased {
        /// Position the motor now believes it is at.
        current: i32,
    },
}

/// Position, target, speed and power flags of the single axis.
#[derive(Debug, Clone, PartialEq)]
pub struct MotorState {
    current_position: i32,
    target_position: i32,
    /// Fine ticks per step.
    step_period: u32,
    moving: bool,
    enabled: bool,

    limits: StepLimits,
    min_period: u32,
    tick_interval: Micros,
}

impl MotorState {
    /// Start-up state: at 0, not moving, power off, default period.
    pub fn new(constraints: &MechanicalConstraints) -> Self {
        Self {
            current_position: 0,
            target_position: 0,
            step_period: constraints.default_period_ticks,
            moving: false,
            enabled: false,
            limits: constraints.limits,
            min_period: constraints.min_period_ticks,
            tick_interval: constraints.tick_interval,
        }
    }

    /// Absolute position in steps.
    #[inline]
    pub fn current_position(&self) -> i32 {
        self.current_position
    }

    /// Position motion converges to.
    #[inline]
    pub fn target_position(&self) -> i32 {
        self.target_position
    }

    /// Fine ticks per step.
    #[inline]
    pub fn step_period(&self) -> u32 {
        self.step_period
    }

    /// Step period in microseconds.
    #[inline]
    pub fn step_period_micros(&self) -> Micros {
        self.tick_interval * self.step_period
    }

    /// Whether a move is in progress.
    #[inline]
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    /// Whether driver power is asserted.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Allowed position range.
    #[inline]
    pub fn limits(&self) -> StepLimits {
        self.limits
    }

    /// Set a new target position.
    ///
    /// `moving` becomes true iff the target differs from the current position.
    ///
    /// # Errors
    ///
    /// `MotorError::PositionOutOfRange` if outside the limits; state unchanged.
    pub fn set_target(&mut self, position: i64) -> Result<()> {
        let target = self.limits.check(position).ok_or(MotorError::PositionOutOfRange {
            position,
            min: self.limits.min_steps,
            max: self.limits.max_steps,
        })?;

        self.target_position = target;
        self.moving = self.target_position != self.current_position;
        Ok(())
    }

    /// Set the step period in fine ticks. Applies from the next step.
    ///
    /// # Errors
    ///
    /// `MotorError::PeriodTooShort` if below the minimum; state unchanged.
    pub fn set_period(&mut self, period: u32) -> Result<()> {
        if period < self.min_period {
            return Err(MotorError::PeriodTooShort {
                requested_us: (self.tick_interval * period).value() as i64,
                min_us: (self.tick_interval * self.min_period).value(),
            }
            .into());
        }
        self.step_period = period;
        Ok(())
    }

    /// Abandon the current move where it is.
    pub fn stop(&mut self) {
        self.target_position = self.current_position;
        self.moving = false;
    }

    /// Redefine the current position as zero and stop.
    pub fn zero(&mut self) {
        self.current_position = 0;
        self.target_position = 0;
        self.moving = false;
    }

    /// Turn driver power on or off. Position bookkeeping is untouched, so a
    /// move interrupted by disabling resumes on re-enable.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            log_debug!("stepper enabled: {}", enabled);
        }
        self.enabled = enabled;
    }

    /// Move down by `bump` steps, re-basing near the floor.
    ///
    /// If the current position is strictly above `bump`, the target is simply
    /// `current - bump`. Otherwise the motor is assumed to be at its floor:
    /// the current position is redefined as `bump` and the target set to 0,
    /// so the bump always has room to complete.
    ///
    /// # Errors
    ///
    /// `MotorError::PositionOutOfRange` if `bump` itself is outside the limits.
    pub fn bump_down(&mut self, bump: i32) -> Result<BumpOutcome> {
        if self.current_position > bump {
            let target = self.current_position as i64 - bump as i64;
            self.set_target(target)?;
            return Ok(BumpOutcome::Lowered {
                target: self.target_position,
            });
        }

        let rebased = self.limits.check(bump as i64).ok_or(MotorError::PositionOutOfRange {
            position: bump as i64,
            min: self.limits.min_steps,
            max: self.limits.max_steps,
        })?;
        log_info!("re-basing position {} as {}", self.current_position, rebased);
        self.current_position = rebased;
        self.set_target(0)?;
        Ok(BumpOutcome::Rebased { current: rebased })
    }

    /// Account for one completed step. Returns `true` on arrival.
    pub(crate) fn record_step(&mut self, direction: Direction) -> bool {
        self.current_position += direction.sign();
        if self.current_position == self.target_position {
            self.moving = false;
            log_debug!("stepper reached target position: {}", self.current_position);
            return true;
        }
        false
    }
}
