//! Runtime constraints derived from the system configuration.

use super::limits::StepLimits;
use super::system::SystemConfig;
use super::units::Micros;

/// Derived mechanical and timing parameters.
///
/// These are computed once at initialization and used by the motion state,
/// interlock and command console.
#[derive(Debug, Clone, PartialEq)]
pub struct MechanicalConstraints {
    /// Total steps per output revolution (steps × microsteps).
    pub steps_per_revolution: u32,

    /// Allowed position range in steps.
    pub limits: StepLimits,

    /// Steps moved by one bump-down command.
    pub bump_steps: i32,

    /// Step period at start-up, in fine ticks.
    pub default_period_ticks: u32,

    /// Shortest allowed step period, in fine ticks.
    pub min_period_ticks: u32,

    /// Fine tick interval.
    pub tick_interval: Micros,

    /// Fine ticks per coarse tick.
    pub coarse_ratio: u32,

    /// Debounce window in coarse ticks.
    pub debounce_ticks: u32,

    /// Heartbeat period at start-up, in coarse ticks.
    pub heartbeat_period_ticks: u32,
}

impl MechanicalConstraints {
    /// Compute constraints from configuration.
    ///
    /// Call [`validate_config`](super::validate_config) first; this does not check
    /// for unusable values.
    pub fn from_config(config: &SystemConfig) -> Self {
        let steps_per_revolution = config.axis.total_steps_per_revolution();

        let max_steps = (steps_per_revolution as i64 * config.axis.max_revolutions as i64)
            .min(i32::MAX as i64) as i32;

        let bump_steps = config
            .axis
            .bump_revolutions
            .to_steps(steps_per_revolution)
            .clamp(i32::MIN as i64, i32::MAX as i64) as i32;

        // One coarse tick per millisecond with the default timing
        let coarse_us = config.timing.coarse_interval_us.value().max(1);
        let to_coarse_ticks = |ms: u32| ms.saturating_mul(1000) / coarse_us;

        Self {
            steps_per_revolution,
            limits: StepLimits::new(0, max_steps),
            bump_steps,
            default_period_ticks: config.axis.default_step_period_ticks,
            min_period_ticks: config.axis.min_step_period_ticks,
            tick_interval: config.timing.base_interval_us,
            coarse_ratio: config.timing.coarse_ratio(),
            debounce_ticks: to_coarse_ticks(config.interlock.debounce_ms.value()),
            heartbeat_period_ticks: to_coarse_ticks(config.heartbeat.period_ms.value()),
        }
    }

    /// Convert a period in fine ticks to microseconds.
    #[inline]
    pub fn ticks_to_micros(&self, ticks: u32) -> Micros {
        self.tick_interval * ticks
    }

    /// Shortest allowed step period in microseconds.
    #[inline]
    pub fn min_period_micros(&self) -> Micros {
        self.ticks_to_micros(self.min_period_ticks)
    }

    /// Coarse tick interval in microseconds.
    #[inline]
    fn coarse_micros(&self) -> u32 {
        self.tick_interval.value().saturating_mul(self.coarse_ratio).max(1)
    }

    /// Convert a heartbeat period in milliseconds to coarse ticks.
    ///
    /// Returns `None` if the period does not fit in microseconds.
    #[inline]
    pub fn millis_to_coarse_ticks(&self, ms: u32) -> Option<u32> {
        Some(ms.checked_mul(1000)? / self.coarse_micros())
    }

    /// Convert coarse ticks back to milliseconds.
    #[inline]
    pub fn coarse_ticks_to_millis(&self, ticks: u32) -> u32 {
        (ticks as u64 * self.coarse_micros() as u64 / 1000).min(u32::MAX as u64) as u32
    }
}

impl Default for MechanicalConstraints {
    fn default() -> Self {
        Self::from_config(&SystemConfig::default())
    }
}
