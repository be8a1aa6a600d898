use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where an issue is shown: the prompts view or the dedicated red-flag view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Contraindication,
    Consideration,
    RedFlag,
}

impl Category {
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Contraindication => "contraindication",
            Category::Consideration => "consideration",
            Category::RedFlag => "red-flag",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity is intentionally small. Only `High` feeds the red-flag view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One advisory message produced by an analysis.
///
/// Issues have no identity beyond `(category, text)`: two issues with the same pair are
/// duplicates regardless of severity, rule, or tags.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Issue {
    pub category: Category,
    pub severity: Severity,
    /// Stable id of the rule that fired (see [`crate::ids`]).
    pub rule_id: String,
    pub text: String,
    /// Free-form provenance labels.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Issue {
    pub fn dedup_key(&self) -> (Category, &str) {
        (self.category, self.text.as_str())
    }

    pub fn is_red_flag(&self) -> bool {
        self.category == Category::RedFlag
    }

    /// Copy of this issue re-categorised for the red-flag view.
    pub fn to_red_flag(&self) -> Issue {
        Issue {
            category: Category::RedFlag,
            ..self.clone()
        }
    }
}
