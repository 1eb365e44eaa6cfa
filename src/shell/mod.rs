//! Shell command execution for requirement probes.

pub mod command;
pub mod platform;

pub use command::{execute, CommandOptions, CommandResult};
pub use platform::{is_ci, ProbeShell, ShellKind};
