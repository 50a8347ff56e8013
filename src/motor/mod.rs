//! Motor module for claw-motion.
//!
//! Provides the motion state of the axis and the driver for its pins.

mod builder;
mod driver;
mod state;

pub use builder::StepperDriverBuilder;
pub use driver::StepperDriver;
pub use state::{BumpOutcome, MotorState};
