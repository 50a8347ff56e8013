//! Builder pattern for StepperDriver.

use embedded_hal::digital::OutputPin;

use crate::config::AxisConfig;
use crate::error::{ConfigError, Result};

use super::driver::StepperDriver;

/// Builder for creating StepperDriver instances.
pub struct StepperDriverBuilder<STEP, DIR, EN>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
{
    step_pin: Option<STEP>,
    dir_pin: Option<DIR>,
    enable_pin: Option<EN>,
    invert_direction: bool,
    enable_active_low: bool,
}

impl<STEP, DIR, EN> Default for StepperDriverBuilder<STEP, DIR, EN>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<STEP, DIR, EN> StepperDriverBuilder<STEP, DIR, EN>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
{
    /// Create a new builder. Enable defaults to active-low.
    pub fn new() -> Self {
        Self {
            step_pin: None,
            dir_pin: None,
            enable_pin: None,
            invert_direction: false,
            enable_active_low: true,
        }
    }

    /// Set the STEP pin.
    pub fn step_pin(mut self, pin: STEP) -> Self {
        self.step_pin = Some(pin);
        self
    }

    /// Set the DIR pin.
    pub fn dir_pin(mut self, pin: DIR) -> Self {
        self.dir_pin = Some(pin);
        self
    }

    /// Set the ENABLE pin.
    pub fn enable_pin(mut self, pin: EN) -> Self {
        self.enable_pin = Some(pin);
        self
    }

    /// Set direction inversion.
    pub fn invert_direction(mut self, invert: bool) -> Self {
        self.invert_direction = invert;
        self
    }

    /// Set the enable polarity.
    pub fn enable_active_low(mut self, active_low: bool) -> Self {
        self.enable_active_low = active_low;
        self
    }

    /// Take polarities from an axis configuration.
    pub fn from_axis_config(mut self, config: &AxisConfig) -> Self {
        self.invert_direction = config.invert_direction;
        self.enable_active_low = config.enable_active_low;
        self
    }

    /// Build the driver, leaving the step output low and the driver chip
    /// unpowered.
    ///
    /// # Errors
    ///
    /// Returns an error if a pin is missing or cannot be written.
    pub fn build(self) -> Result<StepperDriver<STEP, DIR, EN>> {
        let step_pin = self.step_pin.ok_or(ConfigError::MissingPin("step_pin"))?;
        let dir_pin = self.dir_pin.ok_or(ConfigError::MissingPin("dir_pin"))?;
        let enable_pin = self.enable_pin.ok_or(ConfigError::MissingPin("enable_pin"))?;

        let mut driver = StepperDriver::new(
            step_pin,
            dir_pin,
            enable_pin,
            self.invert_direction,
            self.enable_active_low,
        );
        driver.set_step(false)?;
        driver.sync_enable(false)?;
        Ok(driver)
    }
}
