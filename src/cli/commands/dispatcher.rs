//! Routing from parsed arguments to command implementations.

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::requirements::SystemHost;
use crate::ui::UserInterface;

use super::preflight::PreflightCommand;
use super::validate::ValidateCommand;

/// A runnable subcommand.
///
/// `Err` is reserved for failures of capgate itself (an unreadable
/// directory, a serialization error). A descriptor that is invalid or not
/// ready is a normal outcome and comes back as a failing [`CommandResult`].
pub trait Command {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// How the process should exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    pub success: bool,
    pub exit_code: i32,
}

impl CommandResult {
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Exit 0 when `ok`, otherwise exit 1.
    pub fn from_outcome(ok: bool) -> Self {
        if ok {
            Self::success()
        } else {
            Self::failure(1)
        }
    }
}

#[derive(Debug, Default)]
pub struct CommandDispatcher;

impl CommandDispatcher {
    pub fn new() -> Self {
        Self
    }

    /// Run the subcommand named on the command line. Preflight probes the
    /// real machine through [`SystemHost`].
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let command: Box<dyn Command> = match &cli.command {
            Commands::Validate(args) => Box::new(ValidateCommand::new(args.clone())),
            Commands::Preflight(args) => Box::new(PreflightCommand::new(args.clone(), SystemHost)),
        };
        tracing::debug!(command = cli.command.name(), "dispatching");
        command.execute(ui)
    }
}
