//! チェック結果レポート
//!
//! チェックごとの結果を集約し、テキストテーブルまたはJSONとして出力する。

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, info, warn};

/// Result classification of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// The observed outcome matched the expectation
    Pass,
    /// The observed outcome did not match the expectation
    Fail,
    /// The check could not produce an observation (transport failure)
    Error,
}

impl CheckStatus {
    /// Fixed-width label for the text table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
            Self::Error => "ERROR",
        }
    }
}

/// Outcome of one check
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    /// Check identifier (e.g. `get_status_200`)
    pub name: String,
    /// Result classification
    pub status: CheckStatus,
    /// Human-readable detail of the observed outcome
    pub detail: String,
}

impl CheckOutcome {
    /// A passed check.
    pub fn pass(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Pass,
            detail: detail.into(),
        }
    }

    /// A failed assertion.
    pub fn fail(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Fail,
            detail: detail.into(),
        }
    }

    /// A check that could not be carried out (transport failure).
    pub fn error(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Error,
            detail: detail.into(),
        }
    }
}

/// 1回の実行における全チェック結果
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// Target URL under test
    pub url: String,
    /// When the run started
    pub started_at: DateTime<Utc>,
    /// Latency of the shared GET in milliseconds
    pub get_latency_ms: Option<u32>,
    /// Outcomes in execution order
    pub checks: Vec<CheckOutcome>,
}

impl CheckReport {
    /// Create an empty report for the given target URL.
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            started_at: Utc::now(),
            get_latency_ms: None,
            checks: Vec::new(),
        }
    }

    /// Record an outcome, logging it as it arrives.
    pub fn push(&mut self, outcome: CheckOutcome) {
        match outcome.status {
            CheckStatus::Pass => {
                info!(check = %outcome.name, detail = %outcome.detail, "Check passed");
            }
            CheckStatus::Fail => {
                warn!(check = %outcome.name, detail = %outcome.detail, "Check failed");
            }
            CheckStatus::Error => {
                error!(check = %outcome.name, detail = %outcome.detail, "Check errored");
            }
        }
        self.checks.push(outcome);
    }

    /// Whether every recorded check passed.
    pub fn all_passed(&self) -> bool {
        self.checks
            .iter()
            .all(|outcome| outcome.status == CheckStatus::Pass)
    }

    /// Render the report as a tab-separated table with a summary line.
    pub fn render_table(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Target: {}\n", self.url));
        out.push_str("CHECK\t\t\tRESULT\tDETAIL\n");
        for outcome in &self.checks {
            out.push_str(&format!(
                "{}\t{}\t{}\n",
                outcome.name,
                outcome.status.as_str(),
                outcome.detail
            ));
        }

        let passed = self
            .checks
            .iter()
            .filter(|o| o.status == CheckStatus::Pass)
            .count();
        let failed = self
            .checks
            .iter()
            .filter(|o| o.status == CheckStatus::Fail)
            .count();
        let errored = self
            .checks
            .iter()
            .filter(|o| o.status == CheckStatus::Error)
            .count();
        out.push_str(&format!(
            "{} checks: {} passed, {} failed, {} errored\n",
            self.checks.len(),
            passed,
            failed,
            errored
        ));
        out
    }
}
