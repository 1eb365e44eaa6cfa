//! Status glyph vocabulary for report output.
//!
//! `StatusKind` is the one place report glyphs and their colors are
//! decided, so validate and preflight output always agree.

use crate::requirements::CheckStatus;

use super::theme::CapgateTheme;

/// Canonical status kinds used across report output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Check passed / file is clean.
    Success,
    /// Check failed / file has errors.
    Failed,
    /// Needs attention: warnings, unknown checks, known gaps.
    Warning,
    /// Informational bullet (failure modes).
    Note,
}

impl StatusKind {
    /// Unicode icon.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failed => "✗",
            Self::Warning => "⚠",
            Self::Note => "→",
        }
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &CapgateTheme) -> String {
        let icon = self.icon();
        match self {
            Self::Success => theme.success.apply_to(icon).to_string(),
            Self::Failed => theme.error.apply_to(icon).to_string(),
            Self::Warning => theme.warning.apply_to(icon).to_string(),
            Self::Note => theme.info.apply_to(icon).to_string(),
        }
    }

    /// Format a status line: styled icon + message.
    pub fn format(self, theme: &CapgateTheme, msg: &str) -> String {
        format!("{} {}", self.styled(theme), msg)
    }

    /// Format a status line without styling.
    pub fn format_plain(self, msg: &str) -> String {
        format!("{} {}", self.icon(), msg)
    }
}

impl From<CheckStatus> for StatusKind {
    fn from(status: CheckStatus) -> Self {
        match status {
            CheckStatus::Passed => Self::Success,
            CheckStatus::Failed => Self::Failed,
            CheckStatus::Unknown => Self::Warning,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [StatusKind; 4] = [
        StatusKind::Success,
        StatusKind::Failed,
        StatusKind::Warning,
        StatusKind::Note,
    ];

    #[test]
    fn icon_returns_unicode_symbols() {
        assert_eq!(StatusKind::Success.icon(), "✓");
        assert_eq!(StatusKind::Failed.icon(), "✗");
        assert_eq!(StatusKind::Warning.icon(), "⚠");
        assert_eq!(StatusKind::Note.icon(), "→");
    }

    #[test]
    fn styled_returns_string_with_icon() {
        let theme = CapgateTheme::plain();
        for kind in ALL {
            let styled = kind.styled(&theme);
            assert!(styled.contains(kind.icon()), "styled({:?}) missing icon", kind);
        }
    }

    #[test]
    fn format_plain_prefixes_icon() {
        assert_eq!(StatusKind::Failed.format_plain("bad.yaml"), "✗ bad.yaml");
    }

    #[test]
    fn format_includes_icon_and_message() {
        let theme = CapgateTheme::plain();
        let result = StatusKind::Success.format(&theme, "deploy.yaml");
        assert_eq!(result, "✓ deploy.yaml");
    }

    #[test]
    fn from_check_status() {
        assert_eq!(StatusKind::from(CheckStatus::Passed), StatusKind::Success);
        assert_eq!(StatusKind::from(CheckStatus::Failed), StatusKind::Failed);
        assert_eq!(StatusKind::from(CheckStatus::Unknown), StatusKind::Warning);
    }

    #[test]
    fn all_variants_have_unique_icons() {
        let mut icons: Vec<&str> = ALL.iter().map(|k| k.icon()).collect();
        icons.sort();
        icons.dedup();
        assert_eq!(icons.len(), ALL.len());
    }
}
