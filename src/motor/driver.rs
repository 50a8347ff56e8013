//! Stepper driver pins.
//!
//! Generic over embedded-hal 1.0 output pins. The driver only writes a pin
//! when its level actually changes.

use embedded_hal::digital::OutputPin;

use crate::error::{MotorError, Result};
use crate::motion::{Direction, StepOutput};

/// STEP, DIR and ENABLE outputs of a stepper driver chip.
///
/// Generic over:
/// - `STEP`: STEP pin type (must implement `OutputPin`)
/// - `DIR`: DIR pin type (must implement `OutputPin`)
/// - `EN`: ENABLE pin type (must implement `OutputPin`)
pub struct StepperDriver<STEP, DIR, EN>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
{
    /// STEP pin (one rising edge per step).
    step_pin: STEP,

    /// DIR pin (high = forward, or inverted).
    dir_pin: DIR,

    /// ENABLE pin.
    enable_pin: EN,

    /// Whether direction pin logic is inverted.
    invert_direction: bool,

    /// Whether the enable input of the driver chip is active-low.
    enable_active_low: bool,

    // Last written levels; `None` until the first write
    step_level: Option<bool>,
    direction: Option<Direction>,
    enabled: Option<bool>,
}

impl<STEP, DIR, EN> StepperDriver<STEP, DIR, EN>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
{
    /// Wrap pins without touching them. See
    /// [`StepperDriverBuilder`](super::StepperDriverBuilder).
    pub(crate) fn new(
        step_pin: STEP,
        dir_pin: DIR,
        enable_pin: EN,
        invert_direction: bool,
        enable_active_low: bool,
    ) -> Self {
        Self {
            step_pin,
            dir_pin,
            enable_pin,
            invert_direction,
            enable_active_low,
            step_level: None,
            direction: None,
            enabled: None,
        }
    }

    /// Last written step level.
    #[inline]
    pub fn step_level(&self) -> bool {
        self.step_level.unwrap_or(false)
    }

    /// Last written direction.
    #[inline]
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Whether the driver chip is currently powered.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(false)
    }

    /// Drive the pins for one fine tick of generator output.
    ///
    /// The enable pin follows `enabled`, the direction is set before the
    /// step level so the driver sees it ahead of the rising edge.
    pub fn apply(&mut self, output: &StepOutput, enabled: bool) -> Result<()> {
        self.sync_enable(enabled)?;
        if let Some(direction) = output.direction {
            self.set_direction(direction)?;
        }
        self.set_step(output.pulse)
    }

    /// Make the enable pin match `enabled`.
    pub fn sync_enable(&mut self, enabled: bool) -> Result<()> {
        if self.enabled == Some(enabled) {
            return Ok(());
        }

        let pin_high = enabled != self.enable_active_low;
        write_level(&mut self.enable_pin, pin_high)?;
        self.enabled = Some(enabled);
        Ok(())
    }

    /// Set the direction pin.
    pub fn set_direction(&mut self, direction: Direction) -> Result<()> {
        if self.direction == Some(direction) {
            return Ok(());
        }

        let pin_high = match direction {
            Direction::Forward => !self.invert_direction,
            Direction::Backward => self.invert_direction,
        };
        write_level(&mut self.dir_pin, pin_high)?;
        self.direction = Some(direction);
        Ok(())
    }

    /// Set the step pin level.
    pub fn set_step(&mut self, high: bool) -> Result<()> {
        if self.step_level == Some(high) {
            return Ok(());
        }

        write_level(&mut self.step_pin, high)?;
        self.step_level = Some(high);
        Ok(())
    }

    /// Give the pins back.
    pub fn release(self) -> (STEP, DIR, EN) {
        (self.step_pin, self.dir_pin, self.enable_pin)
    }
}

fn write_level<P: OutputPin>(pin: &mut P, high: bool) -> Result<()> {
    let result = if high { pin.set_high() } else { pin.set_low() };
    result.map_err(|_| MotorError::PinError.into())
}
