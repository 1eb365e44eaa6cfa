//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for colored terminal output
//! - [`NonInteractiveUI`] for pipes and CI logs
//! - [`MockUI`] for asserting on output in tests
//!
//! # Example
//!
//! ```
//! use capgate::ui::{create_ui, OutputMode, StatusKind};
//!
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("Capability Validator");
//! ui.show_status(StatusKind::Success, 0, "deploy.yaml");
//! ```

pub mod icons;
pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, CapgateTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain line (hidden in quiet mode).
    fn message(&mut self, msg: &str);

    /// Display a run detail (verbose mode only).
    fn detail(&mut self, msg: &str);

    /// Display an error message. Always shown.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show a section title.
    fn show_section(&mut self, title: &str);

    /// Show a glyph-prefixed status line indented by `indent` spaces.
    ///
    /// Top-level lines (`indent == 0`) are shown in every mode.
    fn show_status(&mut self, kind: StatusKind, indent: usize, text: &str);

    /// Show a totals or decision line. Always shown.
    fn show_summary(&mut self, text: &str);

    /// Write machine-readable output verbatim to stdout.
    fn emit(&mut self, text: &str);
}
