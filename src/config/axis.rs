//! Axis (motor + lead screw) configuration from TOML.

use serde::Deserialize;

use super::units::{Microsteps, Revolutions};

/// Complete axis configuration from TOML.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    /// Base steps per revolution (typically 200 for 1.8° motors).
    pub steps_per_revolution: u16,

    /// Microstep setting (1, 2, 4, 8, 16, 32, etc.).
    pub microsteps: Microsteps,

    /// Full travel of the claw, in revolutions from the zero position.
    pub max_revolutions: u16,

    /// Distance covered by one bump-down command.
    pub bump_revolutions: Revolutions,

    /// Step period at start-up, in fine ticks.
    pub default_step_period_ticks: u32,

    /// Shortest allowed step period, in fine ticks.
    pub min_step_period_ticks: u32,

    /// Invert direction pin logic.
    pub invert_direction: bool,

    /// Driver enable input is active low.
    pub enable_active_low: bool,

    /// The LED showing that the driver is enabled is lit by a high output.
    pub enable_led_active_high: bool,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            steps_per_revolution: 200,
            microsteps: Microsteps::SIXTEENTH,
            // 20 TPI lead screw, 3/4 inch of travel is 15 revolutions; keep margin
            max_revolutions: 12,
            bump_revolutions: Revolutions(0.25),
            default_step_period_ticks: 25,
            min_step_period_ticks: 4,
            invert_direction: false,
            enable_active_low: true,
            enable_led_active_high: true,
        }
    }
}

impl AxisConfig {
    /// Calculate total microsteps per output shaft revolution.
    pub fn total_steps_per_revolution(&self) -> u32 {
        self.steps_per_revolution as u32 * self.microsteps.value() as u32
    }
}
