use super::rule::{RuleId, Severity};

/// One problem found in a descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct LintDiagnostic {
    pub rule_id: RuleId,
    pub severity: Severity,
    pub message: String,
    /// Dotted path of the offending field, e.g. `requires.sources_of_truth[0].freshness`.
    pub field: Option<String>,
    pub suggestion: Option<String>,
}

impl LintDiagnostic {
    pub fn new(rule_id: RuleId, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            rule_id,
            severity,
            message: message.into(),
            field: None,
            suggestion: None,
        }
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// `field: suggestion`, when the rule offered a fix.
    pub fn hint(&self) -> Option<String> {
        let suggestion = self.suggestion.as_deref()?;
        Some(match &self.field {
            Some(field) => format!("{}: {}", field, suggestion),
            None => suggestion.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_needs_a_suggestion() {
        let diag = LintDiagnostic::new(RuleId::new("valid-domain"), Severity::Error, "bad")
            .with_field("domain");
        assert_eq!(diag.hint(), None);
    }

    #[test]
    fn hint_is_prefixed_with_field() {
        let diag = LintDiagnostic::new(RuleId::new("id-format"), Severity::Error, "bad id")
            .with_field("id")
            .with_suggestion("Use \"my-cap\" instead");
        assert_eq!(diag.hint().as_deref(), Some("id: Use \"my-cap\" instead"));

        let bare = LintDiagnostic::new(RuleId::new("x"), Severity::Warning, "m").with_suggestion("s");
        assert_eq!(bare.hint().as_deref(), Some("s"));
    }
}
