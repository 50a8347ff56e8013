//! Safety module for claw-motion.
//!
//! Debounced emergency-stop interlock and its pins.

mod estop;
mod interlock;

pub use estop::EStop;
pub use interlock::{Interlock, InterlockStatus};
