//! Tick timing configuration.

use serde::Deserialize;

use super::units::Micros;

/// Periodic timer configuration.
///
/// The hardware timer fires every `base_interval_us` (one fine tick); every
/// `coarse_interval_us / base_interval_us` fine ticks also produce one coarse tick.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Fine tick interval.
    pub base_interval_us: Micros,

    /// Coarse tick interval. Must be a multiple of the base interval.
    pub coarse_interval_us: Micros,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            base_interval_us: Micros(10),
            coarse_interval_us: Micros(1000),
        }
    }
}

impl TimingConfig {
    /// Fine ticks per coarse tick, or 0 if the intervals are unusable.
    pub fn coarse_ratio(&self) -> u32 {
        if self.base_interval_us.0 == 0
            || self.coarse_interval_us.0 % self.base_interval_us.0 != 0
        {
            0
        } else {
            self.coarse_interval_us / self.base_interval_us
        }
    }
}
