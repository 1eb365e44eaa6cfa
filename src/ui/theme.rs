//! Visual theme and styling.

use console::Style;

/// Capgate's visual theme.
#[derive(Debug, Clone)]
pub struct CapgateTheme {
    /// Style for passed checks (green).
    pub success: Style,
    /// Style for warnings and unknowns (yellow).
    pub warning: Style,
    /// Style for errors and failures (red bold).
    pub error: Style,
    /// Style for informational bullets (cyan).
    pub info: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted text (bold).
    pub highlight: Style,
    /// Style for section titles (bold).
    pub section: Style,
    /// Style for header rules (dim).
    pub border: Style,
}

impl Default for CapgateTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl CapgateTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            info: Style::new().cyan(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            section: Style::new().bold(),
            border: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            section: Style::new(),
            border: Style::new(),
        }
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner: title between two rules.
    pub fn format_header(&self, title: &str) -> String {
        let rule = self.border.apply_to("=".repeat(60));
        format!("{}\n{}\n{}", rule, self.highlight.apply_to(title), rule)
    }

    /// Format a section title.
    pub fn format_section(&self, title: &str) -> String {
        format!("{}", self.section.apply_to(format!("{}:", title)))
    }
}

/// Check if colors should be enabled.
///
/// `--no-color` turns colors off globally through `console::set_colors_enabled`.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::colors_enabled() && console::Term::stdout().is_term()
}
