//! Command module for claw-motion.
//!
//! Line editing, parsing and execution of operator commands.

mod interpreter;
mod line;
mod parser;
mod reply;
mod table;

pub use interpreter::CommandContext;
pub use line::{CharSource, LineEditor};
pub use parser::Command;
pub use reply::{Reply, StatusReport};
pub use table::{lookup, ArgKind, CommandSpec, HelpText, Keyword, COMMANDS};

/// Lines of this many bytes or more are rejected.
pub const MAX_COMMAND_LENGTH: usize = 50;
