//! Tick module for claw-motion.
//!
//! Provides the timer interrupt callback and the lock-free counters that hand
//! ticks to the dispatch loop.

mod counters;
mod source;

pub use counters::TickCounters;
pub use source::TickSource;
