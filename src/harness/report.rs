//! Per-check outcomes and the scenario report.

use serde::Serialize;

/// Whether a check's assertions held
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Passed,
    Failed,
}

/// Outcome of one named check
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    pub name: String,
    pub status: CheckStatus,
    /// Pass detail or failure explanation
    pub detail: String,
    pub duration_ms: u64,
}

impl CheckOutcome {
    pub fn passed(name: &str, detail: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Passed,
            detail: detail.into(),
            duration_ms,
        }
    }

    pub fn failed(name: &str, detail: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            name: name.to_string(),
            status: CheckStatus::Failed,
            detail: detail.into(),
            duration_ms,
        }
    }
}

/// Collected outcomes of one scenario run
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    /// Base URL of the service that was verified
    pub target: String,
    checks: Vec<CheckOutcome>,
}

impl ScenarioReport {
    pub fn new(target: &str) -> Self {
        Self {
            target: target.to_string(),
            checks: Vec::new(),
        }
    }

    pub fn push(&mut self, outcome: CheckOutcome) {
        self.checks.push(outcome);
    }

    pub fn checks(&self) -> &[CheckOutcome] {
        &self.checks
    }

    /// Overall verdict: every check passed
    pub fn passed(&self) -> bool {
        self.checks
            .iter()
            .all(|c| c.status == CheckStatus::Passed)
    }

    pub fn passed_count(&self) -> usize {
        self.checks
            .iter()
            .filter(|c| c.status == CheckStatus::Passed)
            .count()
    }

    pub fn total_count(&self) -> usize {
        self.checks.len()
    }
}
