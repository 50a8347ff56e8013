//! Timer interrupt callback.

use crate::config::MechanicalConstraints;

use super::TickCounters;

/// Converts a fixed-rate timer interrupt into fine and coarse tick counts.
///
/// Call [`on_timer_tick`](Self::on_timer_tick) from the timer interrupt at the
/// base interval. It is O(1), never blocks or allocates, and touches nothing
/// but the counters: it must finish well inside one base interval.
#[derive(Debug, Clone)]
pub struct TickSource {
    /// Fine ticks since the last coarse tick.
    sub_count: u32,
    /// Fine ticks per coarse tick.
    ratio: u32,
}

impl TickSource {
    /// Create a tick source producing one coarse tick every `ratio` fine ticks.
    ///
    /// A ratio of 0 is treated as 1.
    pub const fn new(ratio: u32) -> Self {
        Self {
            sub_count: 0,
            ratio: if ratio == 0 { 1 } else { ratio },
        }
    }

    /// Create a tick source from derived constraints.
    pub fn from_constraints(constraints: &MechanicalConstraints) -> Self {
        Self::new(constraints.coarse_ratio)
    }

    /// Fine ticks per coarse tick.
    #[inline]
    pub fn ratio(&self) -> u32 {
        self.ratio
    }

    /// Timer interrupt body.
    #[inline]
    pub fn on_timer_tick(&mut self, counters: &TickCounters) {
        self.sub_count += 1;
        if self.sub_count >= self.ratio {
            self.sub_count = 0;
            counters.produce_coarse();
        }
        counters.produce_fine();
    }
}
