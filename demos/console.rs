//! Example: scripted console session against simulated pins.
//!
//! This example demonstrates how to:
//! - Build the dispatcher from a TOML configuration
//! - Feed it ticks from a `TickSource` the way a timer interrupt would
//! - Type commands into the console one byte per coarse tick
//! - Trip and release the e-stop interlock
//!
//! Run with: `cargo run --example console`

use std::cell::Cell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use claw_motion::{
    config::parse_config, Dispatcher, EStop, Result, StepperDriverBuilder, TickCounters,
    TickSource,
};

const CONFIG: &str = r#"
[axis]
max_revolutions = 12
bump_revolutions = 0.25

[interlock]
debounce_ms = 100

[heartbeat]
period_ms = 500
"#;

/// Simulated pin whose level can be shared with the script.
#[derive(Clone, Default)]
struct SimPin(Rc<Cell<bool>>);

impl embedded_hal::digital::ErrorType for SimPin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for SimPin {
    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        self.0.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        self.0.set(true);
        Ok(())
    }
}

impl embedded_hal::digital::InputPin for SimPin {
    fn is_high(&mut self) -> core::result::Result<bool, Self::Error> {
        Ok(self.0.get())
    }

    fn is_low(&mut self) -> core::result::Result<bool, Self::Error> {
        Ok(!self.0.get())
    }
}

type Console = Dispatcher<SimPin, SimPin, SimPin, SimPin, SimPin, SimPin, SimPin>;

/// Console output straight to stdout.
struct Stdout;

impl fmt::Write for Stdout {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        print!("{}", s);
        Ok(())
    }
}

fn main() -> Result<()> {
    println!("=== Claw Console Example ===\n");

    let config = parse_config(CONFIG)?;

    let stop_button = SimPin::default();
    // Pulled up: released
    stop_button.0.set(true);

    let driver = StepperDriverBuilder::new()
        .from_axis_config(&config.axis)
        .step_pin(SimPin::default())
        .dir_pin(SimPin::default())
        .enable_pin(SimPin::default())
        .build()?;
    let estop = EStop::new(stop_button.clone(), SimPin::default(), &config.interlock);
    let enable_led = SimPin::default();
    let mut dispatcher: Console =
        Dispatcher::new(&config, driver, estop, SimPin::default(), enable_led.clone())?;

    // Would be a `static` shared with the timer interrupt on a target
    let counters = TickCounters::new();
    let mut source = TickSource::from_constraints(dispatcher.constraints());

    let mut input: VecDeque<u8> = VecDeque::new();
    dispatcher.start(&mut Stdout);

    let mut run_ms = |ms: u32, input: &mut VecDeque<u8>, dispatcher: &mut Console| -> Result<()> {
        for _ in 0..ms * source.ratio() {
            source.on_timer_tick(&counters);
            let mut next_byte = || input.pop_front();
            dispatcher.poll(&counters, &mut next_byte, &mut Stdout)?;
        }
        Ok(())
    };

    let script: [(&str, u32); 7] = [
        ("enable_stepper", 50),
        ("move_stepper_absolute 500", 200),
        ("get_stepper_status", 50),
        ("claw_set 2.5", 50),
        ("move_stepper_rotations -0.25", 50),
        ("foo", 50),
        ("help", 50),
    ];

    for (line, settle_ms) in script {
        input.extend(line.bytes());
        input.push_back(b'\n');
        run_ms(line.len() as u32 + 1 + settle_ms, &mut input, &mut dispatcher)?;
    }

    println!("\n\n=== Pressing the e-stop ===");
    stop_button.0.set(false);
    run_ms(5, &mut input, &mut dispatcher)?;
    stop_button.0.set(true);

    input.extend(b"enable_stepper\n");
    run_ms(20, &mut input, &mut dispatcher)?;

    println!("\n\n=== Waiting out the debounce window ===");
    run_ms(100, &mut input, &mut dispatcher)?;
    input.extend(b"enable_stepper\n");
    run_ms(20, &mut input, &mut dispatcher)?;
    input.extend(b"get_stepper_status\n");
    run_ms(30, &mut input, &mut dispatcher)?;

    let motor = dispatcher.motor();
    println!(
        "\n\nFinal position {} steps, target {}, enabled: {} (LED {})",
        motor.current_position(),
        motor.target_position(),
        motor.is_enabled(),
        if enable_led.0.get() { "on" } else { "off" }
    );

    Ok(())
}
