//! Subcommand implementations.
//!
//! `validate` and `preflight` share file discovery and the report helpers
//! in [`display`]; [`CommandDispatcher`] picks one from the parsed [`Cli`].
//!
//! [`Cli`]: crate::cli::Cli

pub mod dispatcher;
pub mod display;
pub mod preflight;
pub mod validate;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use preflight::PreflightCommand;
pub use validate::ValidateCommand;
