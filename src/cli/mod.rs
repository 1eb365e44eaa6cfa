//! The `capgate` command line: argument definitions in [`args`], one
//! module per subcommand in [`commands`].

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, PreflightArgs, ReportFormat, ValidateArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
