//! Shared display helpers for report formatting.
//!
//! `validate` and `preflight` both render through these so glyphs, labels
//! and indentation stay consistent.

use std::path::Path;

use crate::lint::{Severity, ValidationOutcome};
use crate::report::{Decision, PreflightReport};
use crate::requirements::{Category, CheckResult};
use crate::ui::{OutputMode, StatusKind, UserInterface};

/// Label a discovered file for display.
///
/// Files found under a directory are shown relative to it; a single file
/// is shown by name.
pub fn file_label(root: &Path, file: &Path) -> String {
    if let Ok(rel) = file.strip_prefix(root) {
        if !rel.as_os_str().is_empty() {
            return rel.display().to_string();
        }
    }
    file.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string())
}

/// Glyph for a validated file.
pub fn validation_kind(outcome: &ValidationOutcome) -> StatusKind {
    if !outcome.errors.is_empty() {
        StatusKind::Failed
    } else if !outcome.warnings.is_empty() {
        StatusKind::Warning
    } else {
        StatusKind::Success
    }
}

/// Print one file's validation verdict and its diagnostics.
pub fn show_validation(ui: &mut dyn UserInterface, label: &str, outcome: &ValidationOutcome) {
    ui.show_status(validation_kind(outcome), 0, label);
    for err in &outcome.errors {
        ui.message(&format!("  {}: {}", Severity::Error, err));
    }
    for warn in &outcome.warnings {
        ui.message(&format!("  {}: {}", Severity::Warning, warn));
    }
    for hint in &outcome.hints {
        ui.detail(&format!("  hint: {}", hint));
    }
}

/// Glyph for a readiness decision.
pub fn decision_kind(decision: Decision) -> StatusKind {
    match decision {
        Decision::Blocked => StatusKind::Failed,
        Decision::Caution => StatusKind::Warning,
        Decision::Ready => StatusKind::Success,
    }
}

fn show_check_results(ui: &mut dyn UserInterface, title: &str, results: &[CheckResult]) {
    if results.is_empty() {
        return;
    }
    ui.show_section(title);
    for result in results {
        ui.show_status(result.status.into(), 2, &result.subject);
        if !result.message.is_empty() {
            ui.message(&format!("      {}", result.message));
        }
    }
    ui.message("");
}

/// Print a full preflight report for one capability.
pub fn show_preflight_report(ui: &mut dyn UserInterface, label: &str, report: &PreflightReport) {
    ui.show_header(&format!("Pre-flight Check: {}", report.name));
    ui.message(&format!("ID: {} | Maturity: {}", report.id, report.maturity));
    ui.detail(&format!("Descriptor: {}", label));
    ui.message("");

    for category in Category::ALL {
        show_check_results(ui, category.title(), report.results(category));
    }

    if !report.known_gaps.is_empty() {
        ui.show_section("Known Gaps (review before proceeding)");
        for gap in &report.known_gaps {
            ui.show_status(StatusKind::Warning, 2, gap);
        }
        ui.message("");
    }

    if !report.failure_modes.is_empty() {
        ui.show_section("Common Failure Modes");
        for mode in &report.failure_modes {
            ui.show_status(StatusKind::Note, 2, mode);
        }
        ui.message("");
    }

    let summary = &report.summary;
    ui.show_section("Summary");
    ui.message(&format!(
        "  Passed: {} | Failed: {} | Unknown: {}",
        summary.passed, summary.failed, summary.unknown
    ));
    ui.message("");

    let decision = if ui.output_mode() == OutputMode::Quiet {
        format!("{}: {}", label, summary.message())
    } else {
        summary.message()
    };
    ui.show_status(decision_kind(summary.decision), 0, &decision);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::aggregate;
    use crate::requirements::CheckStatus;
    use crate::ui::MockUI;
    use std::path::PathBuf;

    fn report(results: Vec<CheckResult>, gaps: &[&str]) -> PreflightReport {
        let summary = aggregate(&results);
        PreflightReport {
            id: "sync-ledger".to_string(),
            name: "Sync Ledger".to_string(),
            maturity: "stable".to_string(),
            sources_of_truth: Vec::new(),
            access: results,
            environment: Vec::new(),
            known_gaps: gaps.iter().map(|s| s.to_string()).collect(),
            failure_modes: vec!["Ledger lock timeout".to_string()],
            summary,
        }
    }

    #[test]
    fn file_label_relative_to_root() {
        let root = PathBuf::from("/caps");
        assert_eq!(file_label(&root, Path::new("/caps/pay/refund.yaml")), "pay/refund.yaml");
        assert_eq!(file_label(&root, Path::new("/caps")), "caps");
        assert_eq!(
            file_label(Path::new("/caps/one.yaml"), Path::new("/caps/one.yaml")),
            "one.yaml"
        );
    }

    #[test]
    fn validation_kind_by_severity() {
        let mut outcome = ValidationOutcome::default();
        assert_eq!(validation_kind(&outcome), StatusKind::Success);
        outcome.warnings.push("w".to_string());
        assert_eq!(validation_kind(&outcome), StatusKind::Warning);
        outcome.errors.push("e".to_string());
        assert_eq!(validation_kind(&outcome), StatusKind::Failed);
    }

    #[test]
    fn show_validation_lists_errors_then_warnings() {
        let outcome = ValidationOutcome {
            errors: vec!["Missing required field: id".to_string()],
            warnings: vec!["No known_gaps documented".to_string()],
            hints: vec!["id: Use \"deploy-api\" instead".to_string()],
        };
        let mut ui = MockUI::new();
        show_validation(&mut ui, "broken.yaml", &outcome);

        assert!(ui.has_status(StatusKind::Failed, "broken.yaml"));
        assert_eq!(ui.messages()[0], "  ERROR: Missing required field: id");
        assert_eq!(ui.messages()[1], "  WARN: No known_gaps documented");
        assert_eq!(ui.details(), ["  hint: id: Use \"deploy-api\" instead"]);
    }

    #[test]
    fn preflight_report_sections_and_decision() {
        let results = vec![CheckResult::new("VPN", CheckStatus::Unknown, "VPN status unknown")];
        let mut ui = MockUI::new();
        show_preflight_report(&mut ui, "ledger.yaml", &report(results, &["No dry run"]));

        assert_eq!(ui.headers(), ["Pre-flight Check: Sync Ledger"]);
        assert!(ui.has_message("ID: sync-ledger | Maturity: stable"));
        assert!(ui.sections().contains(&"Access Requirements".to_string()));
        assert!(!ui.sections().contains(&"Sources of Truth".to_string()));
        assert!(ui.sections().contains(&"Known Gaps (review before proceeding)".to_string()));
        assert!(ui.has_status(StatusKind::Note, "Ledger lock timeout"));
        assert!(ui.has_message("Passed: 0 | Failed: 0 | Unknown: 1"));
        assert!(ui.has_status(
            StatusKind::Warning,
            "CAUTION: 1 requirement(s) need manual verification"
        ));
    }

    #[test]
    fn quiet_decision_names_the_file() {
        let mut ui = MockUI::with_mode(OutputMode::Quiet);
        show_preflight_report(&mut ui, "ledger.yaml", &report(Vec::new(), &[]));

        assert!(ui.has_status(
            StatusKind::Success,
            "ledger.yaml: READY: All requirements satisfied"
        ));
    }
}
