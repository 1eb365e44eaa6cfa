//! Preflight command implementation.
//!
//! The `capgate preflight` command probes each descriptor's requirements on
//! this host and prints a readiness report. Validation commands declared in
//! descriptors are executed; see [`crate::requirements::checker`].

use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::cli::args::{PreflightArgs, ReportFormat};
use crate::descriptor::{discover_descriptors, load_descriptor};
use crate::error::{CapgateError, Result};
use crate::report::PreflightReport;
use crate::requirements::{HostEnvironment, ProbeSettings, RequirementProber};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::{file_label, show_preflight_report};

/// The preflight command implementation.
pub struct PreflightCommand<H: HostEnvironment> {
    args: PreflightArgs,
    host: H,
}

/// Preflight outcome for one file, as emitted in JSON output.
#[derive(Debug, Serialize)]
pub struct FilePreflight {
    pub path: PathBuf,
    pub ready: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<PreflightReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
struct PreflightSummary<'a> {
    ready: usize,
    total: usize,
    files: &'a [FilePreflight],
}

impl<H: HostEnvironment> PreflightCommand<H> {
    /// Create a new preflight command probing `host`.
    pub fn new(args: PreflightArgs, host: H) -> Self {
        Self { args, host }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &PreflightArgs {
        &self.args
    }

    fn settings(&self) -> ProbeSettings {
        ProbeSettings::with_timeout(Duration::from_secs(self.args.timeout))
    }
}

impl<H: HostEnvironment> Command for PreflightCommand<H> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let json = self.args.format == ReportFormat::Json;
        let path = &self.args.path;
        let batch = self.args.all || path.is_dir();

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

        let prober = RequirementProber::new(&self.host, self.settings());
        ui.detail(&format!(
            "Probe timeout: {}s per command",
            prober.settings().timeout.as_secs()
        ));

        let mut outcomes = Vec::with_capacity(files.len());
        for file in &files {
            let label = file_label(path, file);
            let outcome = match load_descriptor(file) {
                Ok(descriptor) => {
                    let report = PreflightReport::build(&descriptor, &prober);
                    if !json {
                        show_preflight_report(ui, &label, &report);
                    }
                    FilePreflight {
                        path: file.clone(),
                        ready: report.summary.decision.allows_proceed(),
                        report: Some(report),
                        error: None,
                    }
                }
                Err(e) => {
                    tracing::warn!(file = %file.display(), error = %e, "could not load descriptor");
                    if !json {
                        ui.error(&format!("Error processing {}: {}", file.display(), e));
                    }
                    FilePreflight {
                        path: file.clone(),
                        ready: false,
                        report: None,
                        error: Some(e.to_string()),
                    }
                }
            };
            outcomes.push(outcome);
        }

        let ready = outcomes.iter().filter(|o| o.ready).count();
        let total = outcomes.len();

        if json {
            let summary = PreflightSummary {
                ready,
                total,
                files: &outcomes,
            };
            ui.emit(&serde_json::to_string_pretty(&summary)?);
        } else if batch {
            ui.message("");
            ui.show_summary(&format!("Total: {}/{} capabilities ready", ready, total));
        }

        Ok(CommandResult::from_outcome(ready == total))
    }
}
