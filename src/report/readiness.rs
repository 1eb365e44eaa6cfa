//! Readiness aggregation.

use serde::Serialize;
use std::fmt;

use crate::requirements::{CheckResult, CheckStatus};

/// Go/no-go verdict for a capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Decision {
    /// At least one requirement was verified as not met.
    Blocked,
    /// Nothing failed, but some requirements need a human to check them.
    Caution,
    /// Every requirement was verified.
    Ready,
}

impl Decision {
    /// Whether the capability may be run under this decision.
    pub fn allows_proceed(self) -> bool {
        matches!(self, Decision::Ready | Decision::Caution)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Decision::Blocked => "BLOCKED",
            Decision::Caution => "CAUTION",
            Decision::Ready => "READY",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counts over all probed requirements and the resulting decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReadinessSummary {
    pub passed: usize,
    pub failed: usize,
    pub unknown: usize,
    pub decision: Decision,
}

impl ReadinessSummary {
    /// Total number of requirements counted.
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.unknown
    }

    /// The decision line shown to users.
    pub fn message(&self) -> String {
        match self.decision {
            Decision::Blocked => format!("BLOCKED: {} requirement(s) not met", self.failed),
            Decision::Caution => format!(
                "CAUTION: {} requirement(s) need manual verification",
                self.unknown
            ),
            Decision::Ready => "READY: All requirements satisfied".to_string(),
        }
    }
}

/// Count results across every category and decide readiness.
///
/// Any failure blocks; otherwise any unknown calls for caution.
pub fn aggregate<'a, I>(results: I) -> ReadinessSummary
where
    I: IntoIterator<Item = &'a CheckResult>,
{
    let (mut passed, mut failed, mut unknown) = (0, 0, 0);
    for result in results {
        match result.status {
            CheckStatus::Passed => passed += 1,
            CheckStatus::Failed => failed += 1,
            CheckStatus::Unknown => unknown += 1,
        }
    }

    let decision = if failed > 0 {
        Decision::Blocked
    } else if unknown > 0 {
        Decision::Caution
    } else {
        Decision::Ready
    };

    ReadinessSummary {
        passed,
        failed,
        unknown,
        decision,
    }
}
