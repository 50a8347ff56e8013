//! Emergency-stop interlock and heartbeat configuration.

use serde::Deserialize;

use super::units::Millis;

/// E-stop input and debounce settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InterlockConfig {
    /// How long the stop input must read clear before the motor may be re-enabled.
    pub debounce_ms: Millis,

    /// Stop input reads high when asserted. Default is a pulled-up button to ground.
    pub input_active_high: bool,

    /// Stop indicator output is active high.
    pub indicator_active_high: bool,
}

impl Default for InterlockConfig {
    fn default() -> Self {
        Self {
            debounce_ms: Millis(100),
            input_active_high: false,
            indicator_active_high: true,
        }
    }
}

/// Heartbeat LED settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HeartbeatConfig {
    /// Blink period at start-up.
    pub period_ms: Millis,
}

impl Default for HeartbeatConfig {
    fn default() -> Self {
        Self {
            period_ms: Millis(1000),
        }
    }
}
