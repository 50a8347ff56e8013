//! Command table.
//!
//! One entry per operator command. Matching, argument parsing and the help
//! text are all driven from [`COMMANDS`].

use core::fmt;

use super::parser::Command;

/// Identifies a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Keyword {
    /// `claw_set <position>`
    ClawSet,
    /// `led_period <ms>`
    LedPeriod,
    /// `set_stepper_period <us>`
    SetStepperPeriod,
    /// `set_stepper_zero`
    SetStepperZero,
    /// `move_stepper_absolute <steps>`
    MoveStepperAbsolute,
    /// `move_stepper_relative <steps>`
    MoveStepperRelative,
    /// `move_stepper_rotations <rotations>`
    MoveStepperRotations,
    /// `move_stepper_bump_down`
    MoveStepperBumpDown,
    /// `stop_stepper`
    StopStepper,
    /// `get_stepper_status`
    GetStepperStatus,
    /// `enable_stepper`
    EnableStepper,
    /// `disable_stepper`
    DisableStepper,
    /// `help`
    Help,
}

/// Argument a command takes, and how the command is built from it.
#[derive(Debug, Clone, Copy)]
pub enum ArgKind {
    /// No argument.
    None(Command),
    /// A decimal integer.
    Integer(fn(i64) -> Command),
    /// A decimal number, possibly fractional.
    Float(fn(f32) -> Command),
}

/// One row of the command table.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    /// Which command.
    pub keyword: Keyword,
    /// Text the line must start with.
    pub name: &'static str,
    /// Argument taken.
    pub arg: ArgKind,
    /// Name and argument placeholder as shown in the help.
    pub usage: &'static str,
    /// One-line description for the help.
    pub description: &'static str,
}

const fn spec(
    keyword: Keyword,
    name: &'static str,
    arg: ArgKind,
    usage: &'static str,
    description: &'static str,
) -> CommandSpec {
    CommandSpec {
        keyword,
        name,
        arg,
        usage,
        description,
    }
}

/// All commands, in help order.
///
/// No name may be a proper prefix of a later one.
pub const COMMANDS: [CommandSpec; 13] = [
    spec(Keyword::ClawSet, "claw_set", ArgKind::Float(Command::ClawSet), "claw_set <position>", "Set the claw position 0 to 100"),
    spec(Keyword::LedPeriod, "led_period", ArgKind::Integer(Command::LedPeriod), "led_period <ms>", "Set the LED blink period in milliseconds"),
    spec(Keyword::SetStepperPeriod, "set_stepper_period", ArgKind::Integer(Command::SetStepperPeriod), "set_stepper_period <us>", "Set the stepper motor step period in us"),
    spec(Keyword::SetStepperZero, "set_stepper_zero", ArgKind::None(Command::SetStepperZero), "set_stepper_zero", "Set the current position to zero"),
    spec(Keyword::MoveStepperAbsolute, "move_stepper_absolute", ArgKind::Integer(Command::MoveAbsolute), "move_stepper_absolute <steps>", "Move the stepper to an absolute position"),
    spec(Keyword::MoveStepperRelative, "move_stepper_relative", ArgKind::Integer(Command::MoveRelative), "move_stepper_relative <steps>", "Move the stepper by a relative number of steps"),
    spec(Keyword::MoveStepperRotations, "move_stepper_rotations", ArgKind::Float(Command::MoveRotations), "move_stepper_rotations <rotations>", "Move the stepper by a number of rotations"),
    spec(Keyword::MoveStepperBumpDown, "move_stepper_bump_down", ArgKind::None(Command::BumpDown), "move_stepper_bump_down", "Move the stepper down by a small fixed amount"),
    spec(Keyword::StopStepper, "stop_stepper", ArgKind::None(Command::Stop), "stop_stepper", "Stop the stepper motor"),
    spec(Keyword::GetStepperStatus, "get_stepper_status", ArgKind::None(Command::Status), "get_stepper_status", "Get the current status of the stepper motor"),
    spec(Keyword::EnableStepper, "enable_stepper", ArgKind::None(Command::Enable), "enable_stepper", "Enable the stepper motor"),
    spec(Keyword::DisableStepper, "disable_stepper", ArgKind::None(Command::Disable), "disable_stepper", "Disable the stepper motor"),
    spec(Keyword::Help, "help", ArgKind::None(Command::Help), "help", "Show this help message"),
];

impl Keyword {
    /// Table entry for this keyword.
    pub fn spec(self) -> &'static CommandSpec {
        // Table order matches declaration order
        &COMMANDS[self as usize]
    }

    /// Command name as typed.
    pub fn name(self) -> &'static str {
        self.spec().name
    }
}

/// Find the command a line starts with.
///
/// The name must be followed by the end of the line or whitespace. Returns
/// the entry and the remainder of the line.
pub fn lookup(line: &str) -> Option<(&'static CommandSpec, &str)> {
    COMMANDS.iter().find_map(|spec| {
        let rest = line.strip_prefix(spec.name)?;
        match rest.chars().next() {
            None => Some((spec, rest)),
            Some(c) if c.is_whitespace() => Some((spec, rest)),
            Some(_) => None,
        }
    })
}

/// The help text, rendered from [`COMMANDS`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HelpText;

impl fmt::Display for HelpText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Available commands:")?;
        for spec in COMMANDS.iter() {
            writeln!(f, "  {:<35}- {}", spec.usage, spec.description)?;
        }
        write!(f, "-----")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_keyword_order() {
        for (index, spec) in COMMANDS.iter().enumerate() {
            assert_eq!(spec.keyword as usize, index);
            assert!(spec.usage.starts_with(spec.name));
        }
    }

    #[test]
    fn test_rows_build_their_own_command() {
        for spec in COMMANDS.iter() {
            let command = match spec.arg {
                ArgKind::None(command) => command,
                ArgKind::Integer(build) => build(1),
                ArgKind::Float(build) => build(1.0),
            };
            assert_eq!(command.keyword(), spec.keyword, "{}", spec.name);
        }
    }

    #[test]
    fn test_no_name_is_prefix_of_later_name() {
        for (i, earlier) in COMMANDS.iter().enumerate() {
            for later in COMMANDS.iter().skip(i + 1) {
                assert!(
                    !later.name.starts_with(earlier.name),
                    "{} shadows {}",
                    earlier.name,
                    later.name
                );
            }
        }
    }

    #[test]
    fn test_lookup_requires_word_boundary() {
        let (spec, rest) = lookup("claw_set 50").unwrap();
        assert_eq!(spec.keyword, Keyword::ClawSet);
        assert_eq!(rest, " 50");

        assert_eq!(lookup("help").unwrap().0.keyword, Keyword::Help);
        assert!(lookup("helpme").is_none());
        assert!(lookup("stop_stepperx").is_none());
        assert!(lookup("foo").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_help_layout() {
        let text = std::format!("{}", HelpText);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(""));
        assert_eq!(lines.next(), Some("Available commands:"));
        assert_eq!(
            lines.next(),
            Some("  claw_set <position>                - Set the claw position 0 to 100")
        );
        assert_eq!(
            lines.nth(5),
            Some("  move_stepper_rotations <rotations> - Move the stepper by a number of rotations")
        );
        assert_eq!(text.lines().last(), Some("-----"));
    }
}
