//! Requirement prober.
//!
//! The [`RequirementProber`] turns a descriptor's declared requirements into
//! tri-state [`CheckResult`]s. Each requirement is probed independently:
//! a command that times out, cannot be spawned, or exits nonzero becomes a
//! failed result for that requirement only.
//!
//! # Trust boundary
//!
//! Source-of-truth `validation` commands are taken verbatim from the
//! descriptor and run through the user's shell with the caller's
//! privileges. Only probe descriptors from a trusted source.

use crate::descriptor::{Requirements, SourceOfTruth};
use std::time::Duration;

use super::host::HostEnvironment;
use super::kind::{classify, tool_name, Category, RequirementKind};
use super::probe::expand_home;
use super::status::{truncate_message, CheckResult, CheckStatus, MESSAGE_LIMIT};

/// Command used to verify cloud credentials.
pub const CLOUD_IDENTITY_COMMAND: &str = "aws sts get-caller-identity";

/// Interface name fragments that indicate an active tunnel.
pub const TUNNEL_INTERFACE_MARKERS: [&str; 3] = ["tun", "tap", "wg"];

/// Settings for a probing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeSettings {
    /// Wall-clock limit for each external command.
    pub timeout: Duration,
    /// Maximum characters kept from command output.
    pub message_limit: usize,
}

impl ProbeSettings {
    /// Default per-command timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Settings with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Self::default()
        }
    }
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            timeout: Self::DEFAULT_TIMEOUT,
            message_limit: MESSAGE_LIMIT,
        }
    }
}

/// Probes declared requirements against a host.
pub struct RequirementProber<'a, H: HostEnvironment> {
    host: &'a H,
    settings: ProbeSettings,
}

impl<'a, H: HostEnvironment> RequirementProber<'a, H> {
    /// Create a prober for `host`.
    pub fn new(host: &'a H, settings: ProbeSettings) -> Self {
        Self { host, settings }
    }

    pub fn settings(&self) -> &ProbeSettings {
        &self.settings
    }

    /// Probe one category of `requirements`, one result per entry, in order.
    pub fn probe(&self, requirements: &Requirements, category: Category) -> Vec<CheckResult> {
        match category {
            Category::SourcesOfTruth => self.probe_sources(&requirements.sources_of_truth),
            Category::Access => self.probe_access(&requirements.access),
            Category::Environment => self.probe_environment(&requirements.environment),
        }
    }

    /// Check each source of truth.
    ///
    /// A declared validation command always wins; otherwise a path-like
    /// location is checked for existence.
    pub fn probe_sources(&self, sources: &[SourceOfTruth]) -> Vec<CheckResult> {
        sources.iter().map(|s| self.probe_source(s)).collect()
    }

    /// Check each free-text access requirement.
    pub fn probe_access(&self, access: &[String]) -> Vec<CheckResult> {
        access
            .iter()
            .map(|req| self.probe_text(Category::Access, req))
            .collect()
    }

    /// Check each free-text environment requirement.
    pub fn probe_environment(&self, environment: &[String]) -> Vec<CheckResult> {
        environment
            .iter()
            .map(|req| self.probe_text(Category::Environment, req))
            .collect()
    }

    fn probe_source(&self, source: &SourceOfTruth) -> CheckResult {
        let subject = source.display_name();

        if let Some(command) = source.validation_command() {
            tracing::debug!(source = subject, command, "running validation command");
            return self.run_validation(subject, command);
        }

        let location = source.location();
        match classify(Category::SourcesOfTruth, location) {
            RequirementKind::FilesystemPathCheck => {
                let home = self.host.home_dir();
                let path = expand_home(location, home.as_deref());
                if self.host.path_exists(&path) {
                    CheckResult::passed(subject, "File exists")
                } else {
                    CheckResult::failed(subject, "File not found")
                }
            }
            _ => CheckResult::unknown(subject, "No validation command"),
        }
    }

    fn probe_text(&self, category: Category, requirement: &str) -> CheckResult {
        let kind = classify(category, requirement);
        tracing::debug!(%category, requirement, ?kind, "probing requirement");

        match kind {
            RequirementKind::CloudIdentityCheck => self.check_cloud_identity(requirement),
            RequirementKind::NetworkInterfaceCheck => self.check_tunnel_interface(requirement),
            RequirementKind::ToolPresence => self.check_tool(requirement),
            RequirementKind::FilesystemPathCheck | RequirementKind::Freeform => match category {
                Category::Access => CheckResult::unknown(requirement, "Manual verification needed"),
                _ => CheckResult::unknown(requirement, ""),
            },
        }
    }

    fn run_validation(&self, subject: &str, command: &str) -> CheckResult {
        match self.host.run_command(command, self.settings.timeout) {
            Ok(result) => CheckResult::new(
                subject,
                CheckStatus::from_bool(result.success),
                self.bounded(result.primary_output()),
            ),
            Err(e) => {
                tracing::warn!(source = subject, error = %e, "validation command failed");
                CheckResult::failed(subject, self.bounded(&e.to_string()))
            }
        }
    }

    fn check_cloud_identity(&self, requirement: &str) -> CheckResult {
        let valid = match self
            .host
            .run_command(CLOUD_IDENTITY_COMMAND, self.settings.timeout)
        {
            Ok(result) => result.success,
            Err(e) => {
                tracing::warn!(error = %e, "cloud identity probe failed");
                false
            }
        };

        if valid {
            CheckResult::passed(requirement, "AWS credentials valid")
        } else {
            CheckResult::failed(requirement, "AWS credentials invalid or expired")
        }
    }

    fn check_tunnel_interface(&self, requirement: &str) -> CheckResult {
        let interfaces = match self.host.network_interfaces() {
            Ok(names) => names,
            Err(e) => {
                tracing::warn!(error = %e, "could not list network interfaces");
                Vec::new()
            }
        };

        let detected = interfaces.iter().any(|name| {
            let lower = name.to_lowercase();
            TUNNEL_INTERFACE_MARKERS.iter().any(|m| lower.contains(m))
        });

        if detected {
            CheckResult::passed(requirement, "VPN interface detected")
        } else {
            CheckResult::unknown(requirement, "VPN status unknown")
        }
    }

    fn check_tool(&self, requirement: &str) -> CheckResult {
        let Some(tool) = tool_name(requirement) else {
            return CheckResult::unknown(requirement, "");
        };

        if self.host.find_executable(tool).is_some() {
            CheckResult::passed(requirement, format!("{tool} found"))
        } else {
            CheckResult::failed(requirement, format!("{tool} not found"))
        }
    }

    fn bounded(&self, message: &str) -> String {
        truncate_message(message, self.settings.message_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::host::mock::{MockHost, MockOutcome};
    use std::path::PathBuf;

    fn source(name: &str, location: &str, validation: Option<&str>) -> SourceOfTruth {
        SourceOfTruth {
            name: Some(name.to_string()),
            location: Some(location.to_string()),
            validation: validation.map(str::to_string),
            freshness: Some("daily".to_string()),
        }
    }

    fn prober(host: &MockHost) -> RequirementProber<'_, MockHost> {
        RequirementProber::new(host, ProbeSettings::default())
    }

    #[test]
    fn validation_command_success_passes_with_output() {
        let host = MockHost::new().with_command("psql -c 'select 1'", MockOutcome::ok("  1 row\n"));
        let results = prober(&host).probe_sources(&[source(
            "Orders DB",
            "postgres://orders",
            Some("psql -c 'select 1'"),
        )]);

        assert_eq!(results[0].subject, "Orders DB");
        assert_eq!(results[0].status, CheckStatus::Passed);
        assert_eq!(results[0].message, "1 row");
    }

    #[test]
    fn validation_command_failure_uses_stderr() {
        let host = MockHost::new().with_command("check-feed", MockOutcome::fail(2, "feed stale\n"));
        let results = prober(&host).probe_sources(&[source("Feed", "s3://feed", Some("check-feed"))]);

        assert_eq!(results[0].status, CheckStatus::Failed);
        assert_eq!(results[0].message, "feed stale");
    }

    #[test]
    fn validation_output_is_truncated() {
        let long = "y".repeat(300);
        let host = MockHost::new().with_command("yes-ish", MockOutcome::ok(&long));
        let results = prober(&host).probe_sources(&[source("Big", "x", Some("yes-ish"))]);

        assert_eq!(results[0].message.chars().count(), 100);
    }

    #[test]
    fn validation_timeout_fails_the_source() {
        let host = MockHost::new().with_command("sleep 60", MockOutcome::TimedOut);
        let results = prober(&host).probe_sources(&[source("Slow", "x", Some("sleep 60"))]);

        assert_eq!(results[0].status, CheckStatus::Failed);
        assert_eq!(results[0].message, "Command timed out");
    }

    #[test]
    fn spawn_failure_fails_the_source_with_error_text() {
        let host = MockHost::new().with_command(
            "broken",
            MockOutcome::SpawnFailed("No such file or directory".to_string()),
        );
        let results = prober(&host).probe_sources(&[source("Broken", "x", Some("broken"))]);

        assert_eq!(results[0].status, CheckStatus::Failed);
        assert!(results[0].message.contains("No such file or directory"));
    }

    #[test]
    fn validation_command_uses_configured_timeout() {
        let host = MockHost::new().with_command("true", MockOutcome::ok(""));
        let settings = ProbeSettings::with_timeout(Duration::from_secs(3));
        RequirementProber::new(&host, settings).probe_sources(&[source("T", "x", Some("true"))]);

        assert_eq!(host.ran.borrow()[0].1, Duration::from_secs(3));
    }

    #[test]
    fn blank_validation_falls_back_to_location() {
        let host = MockHost::new();
        let results = prober(&host).probe_sources(&[source("Wiki", "confluence:ENG", Some("   "))]);

        assert_eq!(results[0].status, CheckStatus::Unknown);
        assert_eq!(results[0].message, "No validation command");
        assert!(host.ran_commands().is_empty());
    }

    #[test]
    fn missing_absolute_path_fails() {
        let host = MockHost::new();
        let results =
            prober(&host).probe_sources(&[source("Config", "/definitely/missing/path", None)]);

        assert_eq!(results[0].status, CheckStatus::Failed);
        assert_eq!(results[0].message, "File not found");
    }

    #[test]
    fn existing_home_path_passes() {
        let host = MockHost::new()
            .with_home("/home/dev")
            .with_path("/home/dev/.kube/config");
        let results = prober(&host).probe_sources(&[source("Kube", "~/.kube/config", None)]);

        assert_eq!(results[0].status, CheckStatus::Passed);
        assert_eq!(results[0].message, "File exists");
    }

    #[test]
    fn opaque_location_is_unknown() {
        let host = MockHost::new();
        let results = prober(&host).probe_sources(&[source("Runbook", "docs/runbook.md", None)]);

        assert_eq!(results[0].status, CheckStatus::Unknown);
        assert_eq!(results[0].message, "No validation command");
    }

    #[test]
    fn unnamed_source_reports_unknown_subject() {
        let host = MockHost::new();
        let results = prober(&host).probe_sources(&[SourceOfTruth::default()]);

        assert_eq!(results[0].subject, "Unknown");
        assert_eq!(results[0].status, CheckStatus::Unknown);
    }

    #[test]
    fn plain_access_needs_manual_verification() {
        let host = MockHost::new();
        let results = prober(&host).probe_access(&["Read access to the wiki".to_string()]);

        assert_eq!(results[0].status, CheckStatus::Unknown);
        assert_eq!(results[0].message, "Manual verification needed");
    }

    #[test]
    fn aws_access_fails_when_identity_probe_fails() {
        let host = MockHost::new().with_command(
            CLOUD_IDENTITY_COMMAND,
            MockOutcome::fail(255, "ExpiredToken"),
        );
        let results = prober(&host).probe_access(&["AWS console access".to_string()]);

        assert_eq!(results[0].status, CheckStatus::Failed);
        assert_eq!(results[0].message, "AWS credentials invalid or expired");
    }

    #[test]
    fn sso_access_passes_with_valid_identity() {
        let host = MockHost::new().with_command(CLOUD_IDENTITY_COMMAND, MockOutcome::ok("{}"));
        let results = prober(&host).probe_access(&["SSO login to prod".to_string()]);

        assert_eq!(results[0].status, CheckStatus::Passed);
        assert_eq!(results[0].message, "AWS credentials valid");
    }

    #[test]
    fn aws_probe_timeout_fails() {
        let host = MockHost::new().with_command(CLOUD_IDENTITY_COMMAND, MockOutcome::TimedOut);
        let results = prober(&host).probe_access(&["aws".to_string()]);

        assert_eq!(results[0].status, CheckStatus::Failed);
    }

    #[test]
    fn vpn_detected_from_tunnel_interface() {
        let host = MockHost::new().with_interfaces(&["lo", "eth0", "utun3"]);
        let results = prober(&host).probe_access(&["Corporate VPN".to_string()]);

        assert_eq!(results[0].status, CheckStatus::Passed);
        assert_eq!(results[0].message, "VPN interface detected");
    }

    #[test]
    fn vpn_without_tunnel_is_unknown() {
        let host = MockHost::new().with_interfaces(&["lo", "eth0"]);
        let results = prober(&host).probe_access(&["VPN to staging".to_string()]);

        assert_eq!(results[0].status, CheckStatus::Unknown);
        assert_eq!(results[0].message, "VPN status unknown");
    }

    #[test]
    fn vpn_listing_error_is_unknown() {
        let mut host = MockHost::new();
        host.interfaces_error = true;
        let results = prober(&host).probe_access(&["vpn".to_string()]);

        assert_eq!(results[0].status, CheckStatus::Unknown);
    }

    #[test]
    fn aws_over_vpn_checks_credentials_only() {
        let host = MockHost::new()
            .with_interfaces(&["wg0"])
            .with_command(CLOUD_IDENTITY_COMMAND, MockOutcome::fail(1, ""));
        let results = prober(&host).probe_access(&["AWS via VPN".to_string()]);

        assert_eq!(results[0].status, CheckStatus::Failed);
        assert_eq!(host.ran_commands(), vec![CLOUD_IDENTITY_COMMAND.to_string()]);
    }

    #[test]
    fn installed_tool_found_on_path() {
        let host = MockHost::new().with_executable("terraform");
        let results = prober(&host).probe_environment(&["terraform+ installed".to_string()]);

        assert_eq!(results[0].status, CheckStatus::Passed);
        assert_eq!(results[0].message, "terraform found");
    }

    #[test]
    fn installed_tool_missing_fails() {
        let host = MockHost::new();
        let results = prober(&host).probe_environment(&["Python3.10+ installed".to_string()]);

        assert_eq!(results[0].status, CheckStatus::Failed);
        assert_eq!(results[0].message, "Python3.10 not found");
    }

    #[test]
    fn empty_tool_name_is_unknown() {
        let host = MockHost::new();
        let results = prober(&host).probe_environment(&["+ installed".to_string()]);

        assert_eq!(results[0].status, CheckStatus::Unknown);
        assert_eq!(results[0].message, "");
    }

    #[test]
    fn freeform_environment_is_unknown_with_empty_message() {
        let host = MockHost::new();
        let results = prober(&host).probe_environment(&[
            "Docker installed".to_string(),
            "Linux or macOS".to_string(),
        ]);

        assert_eq!(results.len(), 2);
        for result in &results {
            assert_eq!(result.status, CheckStatus::Unknown);
            assert_eq!(result.message, "");
        }
    }

    #[test]
    fn probe_dispatches_by_category_in_order() {
        let requirements = Requirements {
            sources_of_truth: vec![
                source("A", "/missing/a", None),
                source("B", "opaque", None),
            ],
            access: vec!["wiki".to_string()],
            environment: vec![],
        };
        let host = MockHost::new().with_path(PathBuf::from("/missing/a"));
        let p = prober(&host);

        let sources = p.probe(&requirements, Category::SourcesOfTruth);
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].subject, "A");
        assert_eq!(sources[0].status, CheckStatus::Passed);
        assert_eq!(sources[1].subject, "B");

        assert_eq!(p.probe(&requirements, Category::Access).len(), 1);
        assert!(p.probe(&requirements, Category::Environment).is_empty());
    }

    #[test]
    fn one_failing_probe_does_not_stop_the_rest() {
        let host = MockHost::new()
            .with_command("bad", MockOutcome::TimedOut)
            .with_command("good", MockOutcome::ok("ok"));
        let results = prober(&host).probe_sources(&[
            source("Bad", "x", Some("bad")),
            source("Good", "y", Some("good")),
        ]);

        assert_eq!(results[0].status, CheckStatus::Failed);
        assert_eq!(results[1].status, CheckStatus::Passed);
    }

    #[cfg(unix)]
    #[test]
    fn real_shell_failure_reports_only_command_stderr() {
        use crate::requirements::SystemHost;

        let host = SystemHost;
        let results = RequirementProber::new(&host, ProbeSettings::default()).probe_sources(&[
            source("Feed", "feed", Some("echo feed stale >&2; exit 1")),
        ]);

        assert_eq!(results[0].status, CheckStatus::Failed);
        assert_eq!(results[0].message, "feed stale");
    }

    #[cfg(unix)]
    #[test]
    fn real_shell_success_reports_only_command_stdout() {
        use crate::requirements::SystemHost;

        let host = SystemHost;
        let results = RequirementProber::new(&host, ProbeSettings::default())
            .probe_sources(&[source("Feed", "feed", Some("echo fresh"))]);

        assert_eq!(results[0].status, CheckStatus::Passed);
        assert_eq!(results[0].message, "fresh");
    }
}
