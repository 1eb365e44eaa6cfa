//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use capgate::ui::{MockUI, StatusKind, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_status(StatusKind::Failed, 0, "broken.yaml");
//! ui.show_summary("Results: 0/1 valid");
//!
//! assert!(ui.has_status(StatusKind::Failed, "broken.yaml"));
//! assert!(ui.has_summary("0/1 valid"));
//! ```

use super::{OutputMode, StatusKind, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures everything regardless of output mode; mode filtering is the
/// job of the real implementations.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    details: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    sections: Vec<String>,
    statuses: Vec<(StatusKind, usize, String)>,
    summaries: Vec<String>,
    emitted: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn details(&self) -> &[String] {
        &self.details
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// Captured status lines as (kind, indent, text).
    pub fn statuses(&self) -> &[(StatusKind, usize, String)] {
        &self.statuses
    }

    pub fn summaries(&self) -> &[String] {
        &self.summaries
    }

    /// Everything passed to `emit`, joined by newlines.
    pub fn emitted(&self) -> String {
        self.emitted.join("\n")
    }

    /// Check if a message containing `msg` was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if an error containing `msg` was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a status line of `kind` containing `text` was shown.
    pub fn has_status(&self, kind: StatusKind, text: &str) -> bool {
        self.statuses
            .iter()
            .any(|(k, _, t)| *k == kind && t.contains(text))
    }

    /// Check if a summary line containing `text` was shown.
    pub fn has_summary(&self, text: &str) -> bool {
        self.summaries.iter().any(|s| s.contains(text))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn detail(&mut self, msg: &str) {
        self.details.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_section(&mut self, title: &str) {
        self.sections.push(title.to_string());
    }

    fn show_status(&mut self, kind: StatusKind, indent: usize, text: &str) {
        self.statuses.push((kind, indent, text.to_string()));
    }

    fn show_summary(&mut self, text: &str) {
        self.summaries.push(text.to_string());
    }

    fn emit(&mut self, text: &str) {
        self.emitted.push(text.to_string());
    }
}
