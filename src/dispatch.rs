//! Cooperative dispatch loop.
//!
//! Owns every piece of runtime state and drains the tick counters into it.
//! Fine ticks are always processed before coarse work so step timing never
//! waits on the console.

use core::fmt::Write;

use embedded_hal::digital::{InputPin, OutputPin};

use crate::command::{CharSource, CommandContext, HelpText, LineEditor, MAX_COMMAND_LENGTH};
use crate::config::{validate_config, MechanicalConstraints, SystemConfig};
use crate::error::{MotorError, Result};
use crate::heartbeat::Heartbeat;
use crate::indicator::IndicatorLed;
use crate::logging::log_info;
use crate::motion::StepGenerator;
use crate::motor::{MotorState, StepperDriver};
use crate::safety::{EStop, Interlock, InterlockStatus};
use crate::tick::TickCounters;

/// Operator prompt.
pub const PROMPT: &str = "#: ";

/// What one call to [`Dispatcher::poll`] did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollSummary {
    /// Fine ticks consumed.
    pub fine_ticks: u32,
    /// Coarse ticks consumed.
    pub coarse_ticks: u32,
    /// Command lines executed (successfully or not).
    pub commands: u32,
}

/// Single-threaded scheduler for the claw axis.
///
/// Generic over:
/// - `STEP`, `DIR`, `EN`: stepper driver outputs
/// - `IN`, `IND`: e-stop input and indicator
/// - `LED`: heartbeat output
/// - `ENL`: LED showing the driver is enabled
pub struct Dispatcher<STEP, DIR, EN, IN, IND, LED, ENL>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    IN: InputPin,
    IND: OutputPin,
    LED: OutputPin,
    ENL: OutputPin,
{
    constraints: MechanicalConstraints,
    motor: MotorState,
    generator: StepGenerator,
    driver: StepperDriver<STEP, DIR, EN>,
    interlock: Interlock,
    estop: EStop<IN, IND>,
    heartbeat: Heartbeat,
    led: LED,
    enable_led: IndicatorLed<ENL>,
    editor: LineEditor<MAX_COMMAND_LENGTH>,
}

impl<STEP, DIR, EN, IN, IND, LED, ENL> Dispatcher<STEP, DIR, EN, IN, IND, LED, ENL>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    IN: InputPin,
    IND: OutputPin,
    LED: OutputPin,
    ENL: OutputPin,
{
    /// Validate `config` and set up start-up state: position 0, motor
    /// disabled, interlock clear. The enable LED is turned off.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `config` is invalid, or
    /// `MotorError::PinError` if the enable LED cannot be written.
    pub fn new(
        config: &SystemConfig,
        driver: StepperDriver<STEP, DIR, EN>,
        estop: EStop<IN, IND>,
        led: LED,
        enable_led: ENL,
    ) -> Result<Self> {
        validate_config(config)?;
        let constraints = MechanicalConstraints::from_config(config);
        let mut enable_led = IndicatorLed::new(enable_led, config.axis.enable_led_active_high);
        enable_led.set(false)?;

        Ok(Self {
            motor: MotorState::new(&constraints),
            generator: StepGenerator::new(),
            driver,
            interlock: Interlock::from_constraints(&constraints),
            estop,
            heartbeat: Heartbeat::from_constraints(&constraints),
            led,
            enable_led,
            editor: LineEditor::new(),
            constraints,
        })
    }

    /// Motion state.
    #[inline]
    pub fn motor(&self) -> &MotorState {
        &self.motor
    }

    /// E-stop interlock.
    #[inline]
    pub fn interlock(&self) -> &Interlock {
        &self.interlock
    }

    /// Heartbeat timing.
    #[inline]
    pub fn heartbeat(&self) -> &Heartbeat {
        &self.heartbeat
    }

    /// Stepper driver pins.
    #[inline]
    pub fn driver(&self) -> &StepperDriver<STEP, DIR, EN> {
        &self.driver
    }

    /// Whether the enable LED is lit.
    #[inline]
    pub fn enable_led_lit(&self) -> bool {
        self.enable_led.is_lit()
    }

    /// E-stop pins.
    #[inline]
    pub fn estop(&self) -> &EStop<IN, IND> {
        &self.estop
    }

    /// Derived limits and conversions.
    #[inline]
    pub fn constraints(&self) -> &MechanicalConstraints {
        &self.constraints
    }

    /// Write the banner and the first prompt.
    pub fn start<W: Write>(&mut self, out: &mut W) {
        log_info!("claw console started");
        let _ = write!(out, "Claw Command Interface\n----------------------\n{}", PROMPT);
    }

    /// One bounded iteration of the main loop.
    ///
    /// Drains the fine ticks pending at entry, then the coarse ticks pending
    /// after that. Each coarse tick evaluates the interlock, refreshes the
    /// enable and e-stop LEDs, advances the heartbeat and reads at most one
    /// byte of operator input.
    ///
    /// # Errors
    ///
    /// `MotorError::PinError` if a pin cannot be read or written. Command
    /// errors are reported to `out` and never returned.
    pub fn poll<S, W>(
        &mut self,
        counters: &TickCounters,
        input: &mut S,
        out: &mut W,
    ) -> Result<PollSummary>
    where
        S: CharSource,
        W: Write,
    {
        let mut summary = PollSummary::default();

        let fine = counters.fine_pending();
        for _ in 0..fine {
            if !counters.take_fine() {
                break;
            }
            self.fine_tick()?;
            summary.fine_ticks += 1;
        }

        let coarse = counters.coarse_pending();
        for _ in 0..coarse {
            if !counters.take_coarse() {
                break;
            }
            if self.coarse_tick(input, out)? {
                summary.commands += 1;
            }
            summary.coarse_ticks += 1;
        }

        Ok(summary)
    }

    /// Run one command line directly, bypassing the line editor.
    pub fn execute_line<W: Write>(&mut self, line: &str, out: &mut W) {
        let result = self.context().run(line);
        match result {
            Ok(reply) => {
                let _ = writeln!(out, "{}", reply);
            }
            Err(e) => {
                let _ = writeln!(out, "{}", e);
                if e.wants_help() {
                    let _ = writeln!(out, "-----\n{}", HelpText);
                }
            }
        }
    }

    /// Give the pins back.
    pub fn release(self) -> (StepperDriver<STEP, DIR, EN>, EStop<IN, IND>, LED, ENL) {
        (self.driver, self.estop, self.led, self.enable_led.release())
    }

    fn context(&mut self) -> CommandContext<'_> {
        CommandContext {
            motor: &mut self.motor,
            interlock: &self.interlock,
            heartbeat: &mut self.heartbeat,
            constraints: &self.constraints,
        }
    }

    fn fine_tick(&mut self) -> Result<()> {
        let output = self.generator.advance_one_fine_tick(&mut self.motor);
        self.driver.apply(&output, self.motor.is_enabled())
    }

    /// Returns `true` if a command line was executed.
    fn coarse_tick<S, W>(&mut self, input: &mut S, out: &mut W) -> Result<bool>
    where
        S: CharSource,
        W: Write,
    {
        let asserted = self.estop.is_asserted()?;
        match self.interlock.evaluate(asserted, &mut self.motor) {
            InterlockStatus::Tripped => {
                let _ = writeln!(out, "\nEmergency stop! Stepper motor disabled");
            }
            InterlockStatus::Released => {
                let _ = writeln!(out, "\nEmergency stop released");
            }
            _ => {}
        }
        self.driver.sync_enable(self.motor.is_enabled())?;
        self.enable_led.set(self.motor.is_enabled())?;
        self.estop.set_indicator(self.interlock.is_tripped())?;

        if let Some(on) = self.heartbeat.tick() {
            let result = if on { self.led.set_high() } else { self.led.set_low() };
            result.map_err(|_| MotorError::PinError)?;
        }

        let Some(line) = self.editor.poll(input, out) else {
            return Ok(false);
        };
        match line {
            Ok(line) => self.execute_line(line.as_str(), out),
            Err(e) => {
                let _ = writeln!(out, "{}\n-----\n{}", e, HelpText);
            }
        }
        let _ = write!(out, "{}", PROMPT);
        Ok(true)
    }
}
