//! Motion module for claw-motion.
//!
//! Turns the motion state into a step pulse train at constant speed.

mod direction;
mod generator;
mod step_timer;

pub use direction::Direction;
pub use generator::{StepGenerator, StepOutput};
pub use step_timer::{PulseAction, StepTimer};
