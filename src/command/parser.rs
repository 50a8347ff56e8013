//! Command line parsing.

use crate::error::{CommandError, Result};

use super::table::{lookup, ArgKind, Keyword};
use super::MAX_COMMAND_LENGTH;

/// A parsed operator command. Arguments are syntactically valid but not yet
/// range-checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Move the claw to a percentage of full travel.
    ClawSet(f32),
    /// Heartbeat period in milliseconds.
    LedPeriod(i64),
    /// Step period in microseconds.
    SetStepperPeriod(i64),
    /// Redefine the current position as zero.
    SetStepperZero,
    /// Move to an absolute step position.
    MoveAbsolute(i64),
    /// Move by a number of steps.
    MoveRelative(i64),
    /// Move by a number of output revolutions.
    MoveRotations(f32),
    /// Move down by the bump size.
    BumpDown,
    /// Stop where it is.
    Stop,
    /// Report status.
    Status,
    /// Power the driver.
    Enable,
    /// Unpower the driver.
    Disable,
    /// Show the command table.
    Help,
}

impl Command {
    /// Keyword this command was parsed from.
    pub fn keyword(&self) -> Keyword {
        match self {
            Command::ClawSet(_) => Keyword::ClawSet,
            Command::LedPeriod(_) => Keyword::LedPeriod,
            Command::SetStepperPeriod(_) => Keyword::SetStepperPeriod,
            Command::SetStepperZero => Keyword::SetStepperZero,
            Command::MoveAbsolute(_) => Keyword::MoveStepperAbsolute,
            Command::MoveRelative(_) => Keyword::MoveStepperRelative,
            Command::MoveRotations(_) => Keyword::MoveStepperRotations,
            Command::BumpDown => Keyword::MoveStepperBumpDown,
            Command::Stop => Keyword::StopStepper,
            Command::Status => Keyword::GetStepperStatus,
            Command::Enable => Keyword::EnableStepper,
            Command::Disable => Keyword::DisableStepper,
            Command::Help => Keyword::Help,
        }
    }

    /// Parse one line.
    ///
    /// Surrounding whitespace is ignored and an empty line means `help`.
    ///
    /// # Errors
    ///
    /// - `LineTooLong` if the line has `MAX_COMMAND_LENGTH` bytes or more
    /// - `Unknown` if no command matches
    /// - `MissingArgument`, `UnexpectedArgument` or `InvalidNumber` for a
    ///   bad argument
    pub fn parse(line: &str) -> Result<Self> {
        if line.len() >= MAX_COMMAND_LENGTH {
            return Err(CommandError::LineTooLong {
                length: line.len(),
                max: MAX_COMMAND_LENGTH,
            }
            .into());
        }

        let line = line.trim();
        if line.is_empty() {
            return Ok(Command::Help);
        }

        let (spec, rest) = lookup(line).ok_or_else(|| {
            CommandError::Unknown(heapless::String::try_from(line).unwrap_or_default())
        })?;
        let name = spec.name;

        let mut tokens = rest.split_whitespace();
        let arg = tokens.next();
        if tokens.next().is_some() {
            return Err(CommandError::UnexpectedArgument(name).into());
        }

        let command = match (spec.arg, arg) {
            (ArgKind::None(command), None) => command,
            (ArgKind::None(_), Some(_)) => {
                return Err(CommandError::UnexpectedArgument(name).into())
            }
            (ArgKind::Integer(_) | ArgKind::Float(_), None) => {
                return Err(CommandError::MissingArgument(name).into())
            }
            (ArgKind::Integer(build), Some(token)) => build(parse_integer(name, token)?),
            (ArgKind::Float(build), Some(token)) => build(parse_float(name, token)?),
        };

        Ok(command)
    }
}

fn parse_integer(name: &'static str, token: &str) -> Result<i64> {
    token
        .parse::<i64>()
        .map_err(|_| CommandError::InvalidNumber(name).into())
}

fn parse_float(name: &'static str, token: &str) -> Result<f32> {
    match token.parse::<f32>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CommandError::InvalidNumber(name).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ErrorKind};

    fn command_error(line: &str) -> CommandError {
        match Command::parse(line) {
            Err(Error::Command(e)) => e,
            other => panic!("expected command error for {:?}, got {:?}", line, other),
        }
    }

    #[test]
    fn test_parse_each_command() {
        assert_eq!(Command::parse("claw_set 50").unwrap(), Command::ClawSet(50.0));
        assert_eq!(Command::parse("claw_set 12.5").unwrap(), Command::ClawSet(12.5));
        assert_eq!(Command::parse("led_period 250").unwrap(), Command::LedPeriod(250));
        assert_eq!(
            Command::parse("set_stepper_period 100").unwrap(),
            Command::SetStepperPeriod(100)
        );
        assert_eq!(Command::parse("set_stepper_zero").unwrap(), Command::SetStepperZero);
        assert_eq!(
            Command::parse("move_stepper_absolute 500").unwrap(),
            Command::MoveAbsolute(500)
        );
        assert_eq!(
            Command::parse("move_stepper_relative -20").unwrap(),
            Command::MoveRelative(-20)
        );
        assert_eq!(
            Command::parse("move_stepper_rotations -0.5").unwrap(),
            Command::MoveRotations(-0.5)
        );
        assert_eq!(Command::parse("move_stepper_bump_down").unwrap(), Command::BumpDown);
        assert_eq!(Command::parse("stop_stepper").unwrap(), Command::Stop);
        assert_eq!(Command::parse("get_stepper_status").unwrap(), Command::Status);
        assert_eq!(Command::parse("enable_stepper").unwrap(), Command::Enable);
        assert_eq!(Command::parse("disable_stepper").unwrap(), Command::Disable);
        assert_eq!(Command::parse("help").unwrap(), Command::Help);
    }

    #[test]
    fn test_empty_line_is_help() {
        assert_eq!(Command::parse("").unwrap(), Command::Help);
        assert_eq!(Command::parse("   ").unwrap(), Command::Help);
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert_eq!(
            Command::parse("  move_stepper_absolute   42  ").unwrap(),
            Command::MoveAbsolute(42)
        );
    }

    #[test]
    fn test_unknown() {
        let err = Command::parse("foo").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownCommand);
        assert_eq!(std::format!("{}", err), "Unknown command: \"foo\"");

        assert!(matches!(command_error("stop_stepperx"), CommandError::Unknown(_)));
    }

    #[test]
    fn test_too_long() {
        let line = "move_stepper_absolute 0000000000000000000000000001";
        assert_eq!(line.len(), 50);
        assert_eq!(
            command_error(line),
            CommandError::LineTooLong { length: 50, max: 50 }
        );
        assert!(Command::parse(&line[1..]).is_err());
        assert_eq!(
            Command::parse("move_stepper_absolute 000000000000000000000000001").unwrap(),
            Command::MoveAbsolute(1)
        );
    }

    #[test]
    fn test_argument_errors() {
        assert_eq!(command_error("claw_set"), CommandError::MissingArgument("claw_set"));
        assert_eq!(command_error("claw_set abc"), CommandError::InvalidNumber("claw_set"));
        assert_eq!(command_error("claw_set 5 6"), CommandError::UnexpectedArgument("claw_set"));
        assert_eq!(command_error("claw_set inf"), CommandError::InvalidNumber("claw_set"));
        assert_eq!(command_error("claw_set NaN"), CommandError::InvalidNumber("claw_set"));
        assert_eq!(
            command_error("move_stepper_absolute 1.5"),
            CommandError::InvalidNumber("move_stepper_absolute")
        );
        assert_eq!(
            command_error("stop_stepper now"),
            CommandError::UnexpectedArgument("stop_stepper")
        );
    }

    #[test]
    fn test_keyword_round_trip() {
        assert_eq!(Command::Stop.keyword().name(), "stop_stepper");
        assert_eq!(Command::MoveRotations(1.0).keyword().name(), "move_stepper_rotations");
    }
}
