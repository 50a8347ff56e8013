//! Configuration module for claw-motion.
//!
//! Provides types for loading and validating axis, timing and safety
//! configuration from TOML files (with `std` feature) or built in code.

mod axis;
mod limits;
mod mechanical;
mod safety;
mod system;
mod timing;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use axis::AxisConfig;
pub use limits::StepLimits;
pub use mechanical::MechanicalConstraints;
pub use safety::{HeartbeatConfig, InterlockConfig};
pub use system::SystemConfig;
pub use timing::TimingConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Micros, Microsteps, Millis, Revolutions};
