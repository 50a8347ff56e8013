//! E-stop input and indicator pins.

use embedded_hal::digital::{InputPin, OutputPin};

use crate::config::InterlockConfig;
use crate::error::{MotorError, Result};
use crate::indicator::IndicatorLed;

/// Stop sensor input plus the indicator that shows the interlock is active.
pub struct EStop<IN, IND>
where
    IN: InputPin,
    IND: OutputPin,
{
    input: IN,
    indicator: IndicatorLed<IND>,
    input_active_high: bool,
}

impl<IN, IND> EStop<IN, IND>
where
    IN: InputPin,
    IND: OutputPin,
{
    /// Wrap the pins with the configured polarities. Pins are not touched.
    pub fn new(input: IN, indicator: IND, config: &InterlockConfig) -> Self {
        Self {
            input,
            indicator: IndicatorLed::new(indicator, config.indicator_active_high),
            input_active_high: config.input_active_high,
        }
    }

    /// Sample the stop input.
    pub fn is_asserted(&mut self) -> Result<bool> {
        let high = self.input.is_high().map_err(|_| MotorError::PinError)?;
        Ok(high == self.input_active_high)
    }

    /// Whether the indicator was last driven on.
    #[inline]
    pub fn indicator_on(&self) -> bool {
        self.indicator.is_lit()
    }

    /// Drive the indicator, writing the pin only on change.
    pub fn set_indicator(&mut self, on: bool) -> Result<()> {
        self.indicator.set(on)
    }

    /// Give the pins back.
    pub fn release(self) -> (IN, IND) {
        (self.input, self.indicator.release())
    }
}
