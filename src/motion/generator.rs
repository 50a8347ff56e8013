//! Step pulse generation.

use crate::logging::log_debug;
use crate::motor::MotorState;

use super::direction::Direction;
use super::step_timer::{PulseAction, StepTimer};

/// Pin levels requested by the generator for one fine tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutput {
    /// Direction to drive, if a step cycle is in progress.
    pub direction: Option<Direction>,
    /// Step pulse level.
    pub pulse: bool,
    /// A step completed on this tick and it reached the target.
    pub arrived: bool,
}

/// Turns [`MotorState`] into a step pulse train, one fine tick at a time.
#[derive(Debug, Clone, Default)]
pub struct StepGenerator {
    timer: StepTimer,
    pulse: bool,
}

impl StepGenerator {
    /// Idle generator with the pulse low.
    pub const fn new() -> Self {
        Self {
            timer: StepTimer::new(),
            pulse: false,
        }
    }

    /// Current pulse level.
    #[inline]
    pub fn pulse(&self) -> bool {
        self.pulse
    }

    /// Fine ticks into the current step cycle.
    #[inline]
    pub fn phase(&self) -> u32 {
        self.timer.phase()
    }

    /// Advance one fine tick.
    ///
    /// - not moving: pulse forced low, phase held at zero
    /// - moving but disabled: frozen, so re-enabling resumes mid-cycle
    /// - otherwise: one tick of the step cycle towards the target
    pub fn advance_one_fine_tick(&mut self, state: &mut MotorState) -> StepOutput {
        if !state.is_moving() {
            self.timer.reset();
            self.pulse = false;
            return self.output(None, false);
        }

        if !state.is_enabled() {
            return self.output(None, false);
        }

        let direction = Direction::towards(state.current_position(), state.target_position());
        let mut arrived = false;
        match self.timer.tick(state.step_period()) {
            PulseAction::Hold => {}
            PulseAction::Raise => self.pulse = true,
            PulseAction::Lower => {
                self.pulse = false;
                arrived = state.record_step(direction);
                if arrived {
                    log_debug!("arrived at {}", state.current_position());
                }
            }
        }

        self.output(Some(direction), arrived)
    }

    fn output(&self, direction: Option<Direction>, arrived: bool) -> StepOutput {
        StepOutput {
            direction,
            pulse: self.pulse,
            arrived,
        }
    }
}
