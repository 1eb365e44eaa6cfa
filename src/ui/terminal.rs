//! Colored terminal UI.

use console::Term;
use std::io::Write;

use super::{
    should_use_colors, CapgateTheme, NonInteractiveUI, OutputMode, StatusKind, UserInterface,
};

/// Terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    err: Term,
    theme: CapgateTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            CapgateTheme::new()
        } else {
            CapgateTheme::plain()
        };

        Self {
            term: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn detail(&mut self, msg: &str) {
        if self.mode.shows_details() {
            writeln!(self.term, "{}", self.theme.dim.apply_to(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }

    fn show_section(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_section(title)).ok();
        }
    }

    fn show_status(&mut self, kind: StatusKind, indent: usize, text: &str) {
        if indent == 0 || self.mode.shows_status() {
            writeln!(
                self.term,
                "{:indent$}{}",
                "",
                kind.format(&self.theme, text),
                indent = indent
            )
            .ok();
        }
    }

    fn show_summary(&mut self, text: &str) {
        writeln!(self.term, "{}", self.theme.highlight.apply_to(text)).ok();
    }

    fn emit(&mut self, text: &str) {
        writeln!(self.term, "{}", text).ok();
    }
}

/// Create the appropriate UI based on context.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
