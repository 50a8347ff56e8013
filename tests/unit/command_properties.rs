//! Property tests for the command console.

use proptest::prelude::*;

use claw_motion::config::MechanicalConstraints;
use claw_motion::error::ErrorKind;
use claw_motion::{Command, CommandContext, Heartbeat, Interlock, MotorState};

struct Console {
    motor: MotorState,
    interlock: Interlock,
    heartbeat: Heartbeat,
    constraints: MechanicalConstraints,
}

impl Console {
    fn enabled() -> Self {
        let constraints = MechanicalConstraints::default();
        let mut motor = MotorState::new(&constraints);
        motor.set_enabled(true);
        Self {
            motor,
            interlock: Interlock::from_constraints(&constraints),
            heartbeat: Heartbeat::from_constraints(&constraints),
            constraints,
        }
    }

    fn run(&mut self, line: &str) -> claw_motion::Result<claw_motion::Reply> {
        CommandContext {
            motor: &mut self.motor,
            interlock: &self.interlock,
            heartbeat: &mut self.heartbeat,
            constraints: &self.constraints,
        }
        .run(line)
    }
}

proptest! {
    #[test]
    fn parse_never_panics(line in "\\PC{0,80}") {
        let _ = Command::parse(&line);
    }

    #[test]
    fn failed_commands_leave_state_unchanged(line in "[a-z_ ]{0,20}[0-9.-]{0,12}") {
        let mut console = Console::enabled();
        console.run("move_stepper_absolute 1234").unwrap();
        let before = console.motor.clone();
        let period = console.heartbeat.period();

        if console.run(&line).is_err() {
            prop_assert_eq!(&console.motor, &before);
            prop_assert_eq!(console.heartbeat.period(), period);
        }
    }

    #[test]
    fn absolute_moves_validate_range(steps in -100_000i64..100_000) {
        let mut console = Console::enabled();
        let result = console.run(&format!("move_stepper_absolute {}", steps));

        if (0..=38_400).contains(&steps) {
            prop_assert!(result.is_ok());
            prop_assert_eq!(console.motor.target_position() as i64, steps);
        } else {
            prop_assert_eq!(result.unwrap_err().kind(), ErrorKind::Validation);
            prop_assert_eq!(console.motor.target_position(), 0);
        }
    }

    #[test]
    fn claw_percent_maps_onto_travel(percent in (0u32..=10_000).prop_map(|x| x as f32 / 100.0)) {
        let mut console = Console::enabled();
        console.run(&format!("claw_set {}", percent)).unwrap();

        let expected = (percent * 38_400.0 / 100.0).round() as i32;
        prop_assert_eq!(console.motor.target_position(), expected);
    }

    #[test]
    fn unknown_words_are_rejected_with_help(word in "[a-z]{1,10}") {
        prop_assume!(claw_motion::command::lookup(&word).is_none());
        let mut console = Console::enabled();
        let err = console.run(&word).unwrap_err();
        prop_assert!(err.wants_help());
    }
}
