//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Capgate - readiness gate for declarative capability descriptors.
#[derive(Debug, Parser)]
#[command(name = "capgate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check capability descriptors for structural problems
    Validate(ValidateArgs),

    /// Probe a capability's requirements and decide whether it is ready to run
    #[command(
        after_help = "Validation commands declared in descriptors run through your shell \
                      with your privileges. Only check descriptors from a trusted source."
    )]
    Preflight(PreflightArgs),
}

impl Commands {
    /// Subcommand name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Validate(_) => "validate",
            Commands::Preflight(_) => "preflight",
        }
    }
}

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable report
    #[default]
    Human,
    /// One JSON document on stdout
    Json,
}

/// Arguments for the `validate` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ValidateArgs {
    /// Descriptor file or directory
    pub path: PathBuf,

    /// Validate every descriptor under the path
    #[arg(long)]
    pub all: bool,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Human)]
    pub format: ReportFormat,
}

/// Arguments for the `preflight` command.
#[derive(Debug, Clone, clap::Args)]
pub struct PreflightArgs {
    /// Descriptor file or directory
    pub path: PathBuf,

    /// Check every descriptor under the path
    #[arg(long)]
    pub all: bool,

    /// Timeout in seconds for each validation command
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Human)]
    pub format: ReportFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_validate_with_flags() {
        let cli = Cli::parse_from(["capgate", "validate", "caps/", "--all", "--strict"]);
        match cli.command {
            Commands::Validate(args) => {
                assert_eq!(args.path, PathBuf::from("caps/"));
                assert!(args.all);
                assert!(args.strict);
                assert_eq!(args.format, ReportFormat::Human);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_preflight_timeout_and_format() {
        let cli = Cli::parse_from([
            "capgate",
            "--quiet",
            "preflight",
            "deploy.yaml",
            "--timeout",
            "3",
            "--format",
            "json",
        ]);
        assert!(cli.quiet);
        match cli.command {
            Commands::Preflight(args) => {
                assert_eq!(args.timeout, 3);
                assert_eq!(args.format, ReportFormat::Json);
                assert!(!args.all);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn preflight_timeout_defaults_to_ten_seconds() {
        let cli = Cli::parse_from(["capgate", "preflight", "x.yaml"]);
        let Commands::Preflight(args) = cli.command else {
            panic!("expected preflight");
        };
        assert_eq!(args.timeout, 10);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert!(Cli::try_parse_from(["capgate", "preflight", "x.yaml", "--timeout", "0"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["capgate", "validate", "x.yaml", "--no-color", "--debug"]);
        assert!(cli.no_color);
        assert!(cli.debug);
    }
}
