use crate::{Issue, ProcedureId, Severity};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Stable schema identifier for analysis reports.
pub const SCHEMA_ANALYSIS_V1: &str = "procsafe.analysis.v1";

/// Counts over the prompts view; red flags are counted separately so that an elevated issue
/// is not counted twice as `high`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SeverityCounts {
    pub high: u32,
    pub medium: u32,
    pub low: u32,
    pub red_flags: u32,
}

impl SeverityCounts {
    pub fn from_issues(issues: &[Issue]) -> Self {
        let mut counts = SeverityCounts::default();
        for issue in issues {
            if issue.is_red_flag() {
                counts.red_flags += 1;
                continue;
            }
            match issue.severity {
                Severity::High => counts.high += 1,
                Severity::Medium => counts.medium += 1,
                Severity::Low => counts.low += 1,
            }
        }
        counts
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisReport {
    pub schema: String,
    pub procedure: ProcedureId,
    /// Issues in rule-firing order, deduplicated on `(category, text)`.
    pub issues: Vec<Issue>,
    pub counts: SeverityCounts,
}

impl AnalysisReport {
    pub fn new(procedure: ProcedureId, issues: Vec<Issue>) -> Self {
        let counts = SeverityCounts::from_issues(&issues);
        Self {
            schema: SCHEMA_ANALYSIS_V1.to_string(),
            procedure,
            issues,
            counts,
        }
    }

    /// Everything except red flags, in order.
    pub fn prompts(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| !i.is_red_flag())
    }

    /// Only red flags, in order.
    pub fn red_flags(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.is_red_flag())
    }

    pub fn has_red_flags(&self) -> bool {
        self.issues.iter().any(Issue::is_red_flag)
    }
}
