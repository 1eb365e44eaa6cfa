//! Plain UI for pipes and CI logs.

use super::{OutputMode, StatusKind, UserInterface};

/// UI implementation for non-terminal output.
///
/// Prints the same lines as [`super::TerminalUI`] without styling, so
/// report output stays greppable in CI logs.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn detail(&mut self, msg: &str) {
        if self.mode.shows_details() {
            println!("{}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            let rule = "=".repeat(60);
            println!("\n{}\n{}\n{}\n", rule, title, rule);
        }
    }

    fn show_section(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("{}:", title);
        }
    }

    fn show_status(&mut self, kind: StatusKind, indent: usize, text: &str) {
        if indent == 0 || self.mode.shows_status() {
            println!("{:indent$}{}", "", kind.format_plain(text), indent = indent);
        }
    }

    fn show_summary(&mut self, text: &str) {
        println!("{}", text);
    }

    fn emit(&mut self, text: &str) {
        println!("{}", text);
    }
}
