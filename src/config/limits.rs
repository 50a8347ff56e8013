//! Travel limits in steps.

/// Inclusive position range the axis may be commanded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepLimits {
    /// Minimum position in steps.
    pub min_steps: i32,
    /// Maximum position in steps.
    pub max_steps: i32,
}

impl StepLimits {
    /// Create new step limits.
    pub const fn new(min_steps: i32, max_steps: i32) -> Self {
        Self {
            min_steps,
            max_steps,
        }
    }

    /// Check if limits are valid (min < max).
    pub fn is_valid(&self) -> bool {
        self.min_steps < self.max_steps
    }

    /// Check if a position is within limits.
    pub fn contains(&self, steps: i64) -> bool {
        steps >= self.min_steps as i64 && steps <= self.max_steps as i64
    }

    /// Narrow a requested position into the range.
    ///
    /// Returns `None` if the position is outside the limits.
    pub fn check(&self, target: i64) -> Option<i32> {
        if self.contains(target) {
            // In range, so it fits in i32
            Some(target as i32)
        } else {
            None
        }
    }
}
