//! Direction of travel.

/// Direction of one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Towards higher positions.
    Forward,
    /// Towards lower positions.
    Backward,
}

impl Direction {
    /// Direction needed to get from `current` to `target`.
    ///
    /// Forward iff `target > current`.
    #[inline]
    pub fn towards(current: i32, target: i32) -> Self {
        if target > current {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    /// Position change of one step in this direction.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}
