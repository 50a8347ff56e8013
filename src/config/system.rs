//! System configuration - root configuration structure.

use serde::Deserialize;

use super::axis::AxisConfig;
use super::safety::{HeartbeatConfig, InterlockConfig};
use super::timing::TimingConfig;

/// Root configuration structure from TOML.
///
/// Every section is optional; missing sections and fields take the defaults
/// of the reference claw hardware.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Tick timing.
    pub timing: TimingConfig,

    /// Stepper axis.
    pub axis: AxisConfig,

    /// E-stop interlock.
    pub interlock: InterlockConfig,

    /// Heartbeat LED.
    pub heartbeat: HeartbeatConfig,
}
