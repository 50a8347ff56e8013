//! Unit test harness for claw-motion.
//!
//! This module organizes unit tests for each component of the library.

mod command_properties;
mod config_parsing;
mod config_validation;
mod motion_properties;
