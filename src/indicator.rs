//! Status LEDs.

use embedded_hal::digital::OutputPin;

use crate::error::{MotorError, Result};

/// An LED that shows one on/off state, with a configurable active level.
///
/// The pin is written only when the shown state changes.
pub struct IndicatorLed<P: OutputPin> {
    pin: P,
    active_high: bool,
    lit: Option<bool>,
}

impl<P: OutputPin> IndicatorLed<P> {
    /// Wrap a pin. The pin is not touched until the first [`set`](Self::set).
    pub fn new(pin: P, active_high: bool) -> Self {
        Self {
            pin,
            active_high,
            lit: None,
        }
    }

    /// Whether the LED was last driven on.
    #[inline]
    pub fn is_lit(&self) -> bool {
        self.lit.unwrap_or(false)
    }

    /// Show `on`.
    pub fn set(&mut self, on: bool) -> Result<()> {
        if self.lit == Some(on) {
            return Ok(());
        }

        let result = if on == self.active_high {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        result.map_err(|_| MotorError::PinError)?;
        self.lit = Some(on);
        Ok(())
    }

    /// Give the pin back.
    pub fn release(self) -> P {
        self.pin
    }
}
