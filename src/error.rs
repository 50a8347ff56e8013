//! Error types for claw-motion.
//!
//! Provides unified error handling across configuration, motor control, and
//! the command console.

use core::fmt;

use crate::command::MAX_COMMAND_LENGTH;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all claw-motion operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Motor operation error
    Motor(MotorError),
    /// Command line parsing error
    Command(CommandError),
}

/// Coarse classification of an [`Error`], as reported to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorKind {
    /// Out-of-range or malformed argument. State unchanged.
    Validation,
    /// Operation not allowed in the current mode. State unchanged.
    Guard,
    /// Unrecognized or over-long command line. State unchanged.
    UnknownCommand,
    /// A pin operation failed.
    Hardware,
    /// Invalid configuration.
    Config,
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Invalid microstep value (must be power of 2: 1, 2, 4, 8, 16, 32, 64, 128, 256)
    InvalidMicrosteps(u16),
    /// Tick intervals are zero or the coarse interval is not a multiple of the base
    InvalidTiming {
        /// Base (fine) interval in microseconds
        base_us: u32,
        /// Coarse interval in microseconds
        coarse_us: u32,
    },
    /// Axis travel must cover at least one step
    InvalidTravel(u16),
    /// Bump size must be within the travel range
    InvalidBump {
        /// Bump size in steps
        steps: i32,
        /// Maximum position in steps
        max: i32,
    },
    /// Minimum step period below two ticks, or default below the minimum
    InvalidStepPeriod {
        /// Configured default period in ticks
        default: u32,
        /// Configured minimum period in ticks
        min: u32,
    },
    /// Heartbeat period must be > 0
    InvalidHeartbeatPeriod(u32),
    /// Debounce must last at least one coarse interval
    InvalidDebounce(u32),
    /// A required pin was not given to a builder
    MissingPin(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Motor operation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MotorError {
    /// Pin operation failed
    PinError,
    /// Requested position is outside the travel range
    PositionOutOfRange {
        /// Requested position
        position: i64,
        /// Minimum allowed position
        min: i32,
        /// Maximum allowed position
        max: i32,
    },
    /// Requested step period is shorter than the minimum
    PeriodTooShort {
        /// Requested period in microseconds
        requested_us: i64,
        /// Minimum period in microseconds
        min_us: u32,
    },
    /// Motor power is off
    Disabled,
    /// Emergency stop is active or still cooling down
    InterlockTripped,
}

/// Command console errors.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandError {
    /// No command matches the line
    Unknown(heapless::String<MAX_COMMAND_LENGTH>),
    /// Line reached the maximum command length
    LineTooLong {
        /// Length of the rejected line
        length: usize,
        /// Maximum accepted length (exclusive)
        max: usize,
    },
    /// Command requires an argument
    MissingArgument(&'static str),
    /// Command takes no argument, or more than one was given
    UnexpectedArgument(&'static str),
    /// Argument is not a valid number
    InvalidNumber(&'static str),
    /// Claw position outside 0-100 %
    ClawPercentOutOfRange(f32),
    /// LED period must be > 0
    InvalidLedPeriod(i64),
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Config(_) => ErrorKind::Config,
            Error::Motor(MotorError::PinError) => ErrorKind::Hardware,
            Error::Motor(MotorError::Disabled) | Error::Motor(MotorError::InterlockTripped) => {
                ErrorKind::Guard
            }
            Error::Motor(_) => ErrorKind::Validation,
            Error::Command(CommandError::Unknown(_))
            | Error::Command(CommandError::LineTooLong { .. }) => ErrorKind::UnknownCommand,
            Error::Command(_) => ErrorKind::Validation,
        }
    }

    /// Whether the operator should be shown the command table after this error.
    pub fn wants_help(&self) -> bool {
        self.kind() == ErrorKind::UnknownCommand
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Motor(e) => write!(f, "Error: {}", e),
            Error::Command(CommandError::Unknown(line)) => {
                write!(f, "Unknown command: \"{}\"", line)
            }
            Error::Command(e) => write!(f, "Error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidMicrosteps(v) => {
                write!(f, "Invalid microsteps: {}. Valid values: 1, 2, 4, 8, 16, 32, 64, 128, 256", v)
            }
            ConfigError::InvalidTiming { base_us, coarse_us } => write!(
                f,
                "Invalid timing: coarse interval ({} us) must be a non-zero multiple of base interval ({} us)",
                coarse_us, base_us
            ),
            ConfigError::InvalidTravel(revs) => {
                write!(f, "Invalid travel: {} revolutions. Must be > 0", revs)
            }
            ConfigError::InvalidBump { steps, max } => {
                write!(f, "Invalid bump size: {} steps. Must be 1-{}", steps, max)
            }
            ConfigError::InvalidStepPeriod { default, min } => write!(
                f,
                "Invalid step period: default {} ticks, minimum {} ticks. Minimum must be >= 2 and <= default",
                default, min
            ),
            ConfigError::InvalidHeartbeatPeriod(v) => {
                write!(f, "Invalid heartbeat period: {} ms. Must cover at least two coarse ticks", v)
            }
            ConfigError::InvalidDebounce(v) => {
                write!(f, "Invalid debounce: {} ms. Must cover at least one coarse tick", v)
            }
            ConfigError::MissingPin(name) => write!(f, "{} is required", name),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::PinError => write!(f, "GPIO pin operation failed"),
            MotorError::PositionOutOfRange { position, min, max } => {
                write!(f, "Invalid target position {} (must be {} to {})", position, min, max)
            }
            MotorError::PeriodTooShort { requested_us, min_us } => {
                write!(f, "Invalid step period {} us (minimum {} us)", requested_us, min_us)
            }
            MotorError::Disabled => write!(f, "Stepper motor is disabled. Enable it first."),
            MotorError::InterlockTripped => {
                write!(f, "Emergency stop is active. Release it and wait before enabling.")
            }
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Unknown(line) => write!(f, "Unknown command: \"{}\"", line),
            CommandError::LineTooLong { length, max } => {
                write!(f, "Command too long ({} chars, limit {})", length, max - 1)
            }
            CommandError::MissingArgument(keyword) => write!(f, "{} requires an argument", keyword),
            CommandError::UnexpectedArgument(keyword) => {
                write!(f, "Unexpected argument for {}", keyword)
            }
            CommandError::InvalidNumber(keyword) => write!(f, "Invalid number for {}", keyword),
            CommandError::ClawPercentOutOfRange(_) => {
                write!(f, "Claw position must be between 0 and 100")
            }
            CommandError::InvalidLedPeriod(_) => write!(f, "Invalid LED period"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<MotorError> for Error {
    fn from(e: MotorError) -> Self {
        Error::Motor(e)
    }
}

impl From<CommandError> for Error {
    fn from(e: CommandError) -> Self {
        Error::Command(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MotorError {}

#[cfg(feature = "std")]
impl std::error::Error for CommandError {}
