//! Command execution.

use crate::config::{MechanicalConstraints, Revolutions};
use crate::error::{CommandError, MotorError, Result};
use crate::heartbeat::Heartbeat;
use crate::logging::{log_debug, log_warn};
use crate::motor::{BumpOutcome, MotorState};
use crate::safety::Interlock;

use super::parser::Command;
use super::reply::{Reply, StatusReport};

/// Everything a command may read or change.
///
/// Borrowed from the dispatcher for the duration of one command.
pub struct CommandContext<'a> {
    /// Motion state.
    pub motor: &'a mut MotorState,
    /// E-stop interlock, read to guard `enable_stepper`.
    pub interlock: &'a Interlock,
    /// Heartbeat, for `led_period`.
    pub heartbeat: &'a mut Heartbeat,
    /// Derived limits and conversions.
    pub constraints: &'a MechanicalConstraints,
}

impl CommandContext<'_> {
    /// Parse and execute one line.
    ///
    /// On error nothing has been changed.
    pub fn run(&mut self, line: &str) -> Result<Reply> {
        let result = Command::parse(line).and_then(|command| {
            log_debug!("command: {}", command.keyword().name());
            self.execute(command)
        });
        if result.is_err() {
            log_warn!("command rejected");
        }
        result
    }

    /// Execute a parsed command.
    ///
    /// Motion commands check that the motor is enabled before validating
    /// their target.
    pub fn execute(&mut self, command: Command) -> Result<Reply> {
        match command {
            Command::ClawSet(percent) => {
                self.require_enabled()?;
                if !(0.0..=100.0).contains(&percent) {
                    return Err(CommandError::ClawPercentOutOfRange(percent).into());
                }
                let max = self.constraints.limits.max_steps as f32;
                let target = libm::roundf(percent * max / 100.0) as i64;
                self.motor.set_target(target)?;
                Ok(Reply::ClawSet {
                    percent,
                    target: self.motor.target_position(),
                })
            }

            Command::LedPeriod(ms) => {
                let ticks = u32::try_from(ms)
                    .ok()
                    .and_then(|ms| self.constraints.millis_to_coarse_ticks(ms))
                    .filter(|&ticks| ticks >= Heartbeat::MIN_PERIOD)
                    .ok_or(CommandError::InvalidLedPeriod(ms))?;
                self.heartbeat.set_period(ticks)?;
                Ok(Reply::LedPeriod {
                    ms: self.constraints.coarse_ticks_to_millis(ticks),
                })
            }

            Command::SetStepperPeriod(us) => {
                let min_us = self.constraints.min_period_micros().value();
                if us < min_us as i64 {
                    return Err(MotorError::PeriodTooShort {
                        requested_us: us,
                        min_us,
                    }
                    .into());
                }
                let base_us = self.constraints.tick_interval.value().max(1) as i64;
                let ticks = (us / base_us).min(u32::MAX as i64) as u32;
                self.motor.set_period(ticks)?;
                Ok(Reply::StepPeriod {
                    us: self.motor.step_period_micros().value(),
                })
            }

            Command::SetStepperZero => {
                self.motor.zero();
                Ok(Reply::Zeroed)
            }

            Command::MoveAbsolute(steps) => {
                self.require_enabled()?;
                self.motor.set_target(steps)?;
                Ok(Reply::MovingAbsolute {
                    target: self.motor.target_position(),
                })
            }

            Command::MoveRelative(delta) => {
                self.require_enabled()?;
                let target = (self.motor.current_position() as i64).saturating_add(delta);
                self.motor.set_target(target)?;
                Ok(Reply::MovingRelative {
                    target: self.motor.target_position(),
                })
            }

            Command::MoveRotations(rotations) => {
                self.require_enabled()?;
                let delta = Revolutions(rotations).to_steps(self.constraints.steps_per_revolution);
                let target = (self.motor.current_position() as i64).saturating_add(delta);
                self.motor.set_target(target)?;
                Ok(Reply::MovingRotations {
                    rotations,
                    target: self.motor.target_position(),
                })
            }

            Command::BumpDown => {
                self.require_enabled()?;
                let steps = self.constraints.bump_steps;
                match self.motor.bump_down(steps)? {
                    BumpOutcome::Lowered { .. } => Ok(Reply::BumpDown { steps }),
                    BumpOutcome::Rebased { .. } => Ok(Reply::BumpRebased),
                }
            }

            Command::Stop => {
                self.motor.stop();
                Ok(Reply::Stopped {
                    position: self.motor.current_position(),
                })
            }

            Command::Status => Ok(Reply::Status(self.status())),

            Command::Enable => {
                self.interlock.check_enable()?;
                self.motor.set_enabled(true);
                Ok(Reply::Enabled)
            }

            Command::Disable => {
                self.motor.set_enabled(false);
                Ok(Reply::Disabled)
            }

            Command::Help => Ok(Reply::Help),
        }
    }

    /// Current status snapshot.
    pub fn status(&self) -> StatusReport {
        StatusReport {
            current_position: self.motor.current_position(),
            target_position: self.motor.target_position(),
            step_period_us: self.motor.step_period_micros().value(),
            moving: self.motor.is_moving(),
            enabled: self.motor.is_enabled(),
            interlock_tripped: self.interlock.is_tripped(),
        }
    }

    fn require_enabled(&self) -> Result<()> {
        if !self.motor.is_enabled() {
            return Err(MotorError::Disabled.into());
        }
        Ok(())
    }
}
