//! Operator-facing command results.

use core::fmt;

use super::table::HelpText;

/// Snapshot printed by `get_stepper_status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusReport {
    /// Current position in steps.
    pub current_position: i32,
    /// Target position in steps.
    pub target_position: i32,
    /// Step period in microseconds.
    pub step_period_us: u32,
    /// Whether a move is in progress.
    pub moving: bool,
    /// Whether the driver is powered.
    pub enabled: bool,
    /// Whether the e-stop interlock is blocking.
    pub interlock_tripped: bool,
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stepper Status:")?;
        writeln!(f, "  Current Position: {}", self.current_position)?;
        writeln!(f, "  Target Position: {}", self.target_position)?;
        writeln!(f, "  Step Period (us): {}", self.step_period_us)?;
        writeln!(f, "  Moving: {}", yes_no(self.moving))?;
        writeln!(f, "  Enabled: {}", yes_no(self.enabled))?;
        write!(
            f,
            "  Interlock: {}",
            if self.interlock_tripped { "Tripped" } else { "Clear" }
        )
    }
}

/// Successful outcome of a command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reply {
    /// Claw target set from a percentage.
    ClawSet {
        /// Requested percentage.
        percent: f32,
        /// Resulting target in steps.
        target: i32,
    },
    /// Heartbeat period changed.
    LedPeriod {
        /// New period in milliseconds.
        ms: u32,
    },
    /// Step period changed.
    StepPeriod {
        /// Effective period in microseconds.
        us: u32,
    },
    /// Position redefined as zero.
    Zeroed,
    /// Absolute move started.
    MovingAbsolute {
        /// Target in steps.
        target: i32,
    },
    /// Relative move started.
    MovingRelative {
        /// Target in steps.
        target: i32,
    },
    /// Move by revolutions started.
    MovingRotations {
        /// Requested revolutions.
        rotations: f32,
        /// Target in steps.
        target: i32,
    },
    /// Bump started from the current position.
    BumpDown {
        /// Bump size in steps.
        steps: i32,
    },
    /// Bump started after redefining the current position.
    BumpRebased,
    /// Move abandoned.
    Stopped {
        /// Position where the motor stopped.
        position: i32,
    },
    /// Status snapshot.
    Status(StatusReport),
    /// Driver powered.
    Enabled,
    /// Driver unpowered.
    Disabled,
    /// Command table.
    Help,
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::ClawSet { percent, target } => {
                write!(f, "Claw position set to {:.2}% ({})", percent, target)
            }
            Reply::LedPeriod { ms } => write!(f, "LED period set to {} ms", ms),
            Reply::StepPeriod { us } => write!(f, "Stepper step period set to {} us", us),
            Reply::Zeroed => write!(f, "Stepper position set to zero"),
            Reply::MovingAbsolute { target } => {
                write!(f, "Moving stepper to absolute position {}", target)
            }
            Reply::MovingRelative { target } => {
                write!(f, "Moving stepper to relative position {}", target)
            }
            Reply::MovingRotations { rotations, target } => write!(
                f,
                "Moving stepper by {:+.6} rotations to position {}",
                rotations, target
            ),
            Reply::BumpDown { steps } => write!(f, "Bumping stepper down by {} steps", steps),
            Reply::BumpRebased => {
                write!(f, "Bump down exceeds minimum position, resetting zero to allow bump")
            }
            Reply::Stopped { position } => write!(f, "Stepper stopped at position {}", position),
            Reply::Status(report) => fmt::Display::fmt(report, f),
            Reply::Enabled => write!(f, "Stepper motor enabled"),
            Reply::Disabled => write!(f, "Stepper motor disabled"),
            Reply::Help => fmt::Display::fmt(&HelpText, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::format;

    #[test]
    fn test_messages() {
        assert_eq!(
            format!("{}", Reply::ClawSet { percent: 50.0, target: 19_200 }),
            "Claw position set to 50.00% (19200)"
        );
        assert_eq!(
            format!("{}", Reply::MovingRotations { rotations: 0.5, target: 1600 }),
            "Moving stepper by +0.500000 rotations to position 1600"
        );
        assert_eq!(
            format!("{}", Reply::MovingRotations { rotations: -1.0, target: 0 }),
            "Moving stepper by -1.000000 rotations to position 0"
        );
        assert_eq!(
            format!("{}", Reply::StepPeriod { us: 250 }),
            "Stepper step period set to 250 us"
        );
    }

    #[test]
    fn test_status_block() {
        let report = StatusReport {
            current_position: 12,
            target_position: 500,
            step_period_us: 250,
            moving: true,
            enabled: true,
            interlock_tripped: false,
        };
        assert_eq!(
            format!("{}", Reply::Status(report)),
            "Stepper Status:\n  Current Position: 12\n  Target Position: 500\n  \
             Step Period (us): 250\n  Moving: Yes\n  Enabled: Yes\n  Interlock: Clear"
        );
    }

    #[test]
    fn test_help_reply_lists_commands() {
        let text = format!("{}", Reply::Help);
        assert!(text.contains("Available commands:"));
        assert!(text.contains("  help                               - Show this help message"));
    }
}
