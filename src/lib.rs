//! # claw-motion
//!
//! Interrupt-paced stepper control for a single-axis claw, operated over a
//! text console, with embedded-hal 1.0 support.
//!
//! ## Features
//!
//! - **Tick-driven**: a timer interrupt produces fine and coarse ticks, a
//!   cooperative loop consumes them
//! - **Constant-speed stepping**: step pulses timed in fine ticks, absolute
//!   position tracked at all times
//! - **E-stop interlock**: immediate stop, debounced release, no automatic
//!   re-enable
//! - **Command console**: table-driven commands with range checking
//! - **no_std compatible**: no allocation, `heapless` buffers only
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use claw_motion::{Dispatcher, EStop, StepperDriverBuilder, SystemConfig, TickCounters, TickSource};
//!
//! static TICKS: TickCounters = TickCounters::new();
//!
//! // In the 10 us timer interrupt:
//! //     tick_source.on_timer_tick(&TICKS);
//!
//! let config: SystemConfig = claw_motion::load_config("claw.toml")?;
//! let driver = StepperDriverBuilder::new()
//!     .from_axis_config(&config.axis)
//!     .step_pin(step)
//!     .dir_pin(dir)
//!     .enable_pin(enable)
//!     .build()?;
//! let estop = EStop::new(stop_input, stop_led, &config.interlock);
//! let mut dispatcher = Dispatcher::new(&config, driver, estop, heartbeat_led, enable_led)?;
//!
//! dispatcher.start(&mut serial);
//! loop {
//!     dispatcher.poll(&TICKS, &mut serial_rx, &mut serial)?;
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod logging;

// Core modules
pub mod command;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod heartbeat;
pub mod indicator;
pub mod motion;
pub mod motor;
pub mod safety;
pub mod tick;

// Re-exports for ergonomic API
pub use command::{CharSource, Command, CommandContext, LineEditor, Reply, StatusReport};
pub use config::{validate_config, MechanicalConstraints, SystemConfig};
pub use dispatch::{Dispatcher, PollSummary};
pub use error::{Error, ErrorKind, Result};
pub use heartbeat::Heartbeat;
pub use indicator::IndicatorLed;
pub use motion::{Direction, StepGenerator, StepOutput};
pub use motor::{BumpOutcome, MotorState, StepperDriver, StepperDriverBuilder};
pub use safety::{EStop, Interlock, InterlockStatus};
pub use tick::{TickCounters, TickSource};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

// Unit types
pub use config::units::{Micros, Microsteps, Millis, Revolutions};
