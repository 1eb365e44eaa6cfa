//! Validate command implementation.
//!
//! The `capgate validate` command checks descriptor structure with the lint
//! rule system. Batch mode validates every discovered file independently.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::cli::args::{ReportFormat, ValidateArgs};
use crate::descriptor::{discover_descriptors, load_descriptor};
use crate::error::{CapgateError, Result};
use crate::lint::{RuleRegistry, ValidationOutcome};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::{file_label, show_validation};

/// The validate command implementation.
pub struct ValidateCommand {
    args: ValidateArgs,
    registry: RuleRegistry,
}

/// Validation result for one file, as emitted in JSON output.
#[derive(Debug, Serialize)]
pub struct FileValidation {
    pub path: PathBuf,
    pub valid: bool,
    #[serde(flatten)]
    pub outcome: ValidationOutcome,
}

#[derive(Debug, Serialize)]
struct ValidateReport<'a> {
    strict: bool,
    valid: usize,
    total: usize,
    files: &'a [FileValidation],
}

impl ValidateCommand {
    /// Create a new validate command with the built-in rules.
    pub fn new(args: ValidateArgs) -> Self {
        Self {
            args,
            registry: RuleRegistry::with_builtins(),
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ValidateArgs {
        &self.args
    }

    /// Validate one file. Parse failures become errors for that file.
    pub fn validate_file(&self, path: &Path) -> FileValidation {
        let outcome = match load_descriptor(path) {
            Ok(descriptor) => {
                ValidationOutcome::from_diagnostics(&self.registry.check(&descriptor))
            }
            Err(CapgateError::DescriptorParse { message, .. }) => ValidationOutcome {
                errors: vec![message],
                ..Default::default()
            },
            Err(e) => ValidationOutcome {
                errors: vec![e.to_string()],
                ..Default::default()
            },
        };

        FileValidation {
            path: path.to_path_buf(),
            valid: !outcome.fails(self.args.strict),
            outcome,
        }
    }
}

impl Command for ValidateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let json = self.args.format == ReportFormat::Json;
        let path = &self.args.path;
        let batch = self.args.all || path.is_dir();

        if !json {
            ui.show_header("Capability Validator");
        }

        let files = match discover_descriptors(path, self.args.all) {
            Ok(files) => files,
            Err(e @ CapgateError::PathNotFound { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        if files.is_empty() {
            ui.error(&format!("No capability files found in {}", path.display()));
            return Ok(CommandResult::failure(1));
        }

        ui.detail(&format!(
            "Checking {} file(s) against {} rule(s)",
            files.len(),
            self.registry.len()
        ));
        for rule in self.registry.iter() {
            ui.detail(&format!("  {}: {}", rule.id(), rule.summary()));
        }

        let results: Vec<FileValidation> = files.iter().map(|f| self.validate_file(f)).collect();
        let valid = results.iter().filter(|r| r.valid).count();
        let total = results.len();

        if json {
            let report = ValidateReport {
                strict: self.args.strict,
                valid,
                total,
                files: &results,
            };
            ui.emit(&serde_json::to_string_pretty(&report)?);
        } else {
            for result in &results {
                show_validation(ui, &file_label(path, &result.path), &result.outcome);
            }
            if batch {
                ui.message("");
                ui.show_summary(&format!("Results: {}/{} valid", valid, total));
            }
        }

        tracing::debug!(valid, total, strict = self.args.strict, "validation finished");
        Ok(CommandResult::from_outcome(valid == total))
    }
}
