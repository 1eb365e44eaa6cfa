//! Per-descriptor preflight report.

use serde::Serialize;

use crate::descriptor::CapabilityDescriptor;
use crate::requirements::{Category, CheckResult, HostEnvironment, RequirementProber};

use super::readiness::{aggregate, ReadinessSummary};

/// Everything a preflight run found out about one capability.
#[derive(Debug, Clone, Serialize)]
pub struct PreflightReport {
    pub id: String,
    pub name: String,
    pub maturity: String,
    pub sources_of_truth: Vec<CheckResult>,
    pub access: Vec<CheckResult>,
    pub environment: Vec<CheckResult>,
    /// Surfaced to the reader; never counted.
    pub known_gaps: Vec<String>,
    /// Surfaced to the reader; never counted.
    pub failure_modes: Vec<String>,
    pub summary: ReadinessSummary,
}

impl PreflightReport {
    /// Probe every declared requirement of `descriptor` and aggregate.
    pub fn build<H: HostEnvironment>(
        descriptor: &CapabilityDescriptor,
        prober: &RequirementProber<'_, H>,
    ) -> Self {
        let (sources_of_truth, access, environment) = match &descriptor.requires {
            Some(requires) => (
                prober.probe(requires, Category::SourcesOfTruth),
                prober.probe(requires, Category::Access),
                prober.probe(requires, Category::Environment),
            ),
            None => Default::default(),
        };

        let summary = aggregate(
            sources_of_truth
                .iter()
                .chain(access.iter())
                .chain(environment.iter()),
        );

        Self {
            id: descriptor.display_id().to_string(),
            name: descriptor.display_name().to_string(),
            maturity: descriptor.display_maturity().to_string(),
            sources_of_truth,
            access,
            environment,
            known_gaps: descriptor.known_gaps().to_vec(),
            failure_modes: descriptor.failure_modes().to_vec(),
            summary,
        }
    }

    /// Results for one category.
    pub fn results(&self, category: Category) -> &[CheckResult] {
        match category {
            Category::SourcesOfTruth => &self.sources_of_truth,
            Category::Access => &self.access,
            Category::Environment => &self.environment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{Confidence, Requirements, SourceOfTruth};
    use crate::report::Decision;
    use crate::requirements::host::mock::MockHost;
    use crate::requirements::{CheckStatus, ProbeSettings};

    fn descriptor(requires: Option<Requirements>) -> CapabilityDescriptor {
        CapabilityDescriptor {
            id: Some("rotate-keys".to_string()),
            name: Some("Rotate Keys".to_string()),
            requires,
            confidence: Some(Confidence {
                maturity: Some("developing".to_string()),
                known_gaps: vec!["No rollback".to_string()],
                failure_modes: vec!["KMS throttling".to_string()],
            }),
            ..Default::default()
        }
    }

    #[test]
    fn build_probes_all_categories() {
        let requires = Requirements {
            sources_of_truth: vec![SourceOfTruth {
                name: Some("Key inventory".to_string()),
                location: Some("/srv/keys.csv".to_string()),
                ..Default::default()
            }],
            access: vec!["Security team approval".to_string()],
            environment: vec!["gpg+ installed".to_string()],
        };
        let host = MockHost::new()
            .with_path("/srv/keys.csv")
            .with_executable("gpg");
        let prober = RequirementProber::new(&host, ProbeSettings::default());

        let report = PreflightReport::build(&descriptor(Some(requires)), &prober);

        assert_eq!(report.id, "rotate-keys");
        assert_eq!(report.maturity, "developing");
        assert_eq!(report.results(Category::SourcesOfTruth)[0].status, CheckStatus::Passed);
        assert_eq!(report.results(Category::Access)[0].status, CheckStatus::Unknown);
        assert_eq!(report.results(Category::Environment)[0].status, CheckStatus::Passed);
        assert_eq!(report.summary.decision, Decision::Caution);
        assert_eq!(report.summary.passed, 2);
    }

    #[test]
    fn gaps_and_failure_modes_are_carried_not_counted() {
        let host = MockHost::new();
        let prober = RequirementProber::new(&host, ProbeSettings::default());

        let report = PreflightReport::build(&descriptor(None), &prober);

        assert_eq!(report.known_gaps, vec!["No rollback".to_string()]);
        assert_eq!(report.failure_modes, vec!["KMS throttling".to_string()]);
        assert_eq!(report.summary.total(), 0);
        assert_eq!(report.summary.decision, Decision::Ready);
    }

    #[test]
    fn missing_file_blocks() {
        let requires = Requirements {
            sources_of_truth: vec![SourceOfTruth {
                name: Some("Config".to_string()),
                location: Some("/definitely/missing/path".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };
        let host = MockHost::new();
        let prober = RequirementProber::new(&host, ProbeSettings::default());

        let report = PreflightReport::build(&descriptor(Some(requires)), &prober);

        assert_eq!(report.summary.decision, Decision::Blocked);
        assert_eq!(report.summary.message(), "BLOCKED: 1 requirement(s) not met");
    }
}
