use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const SCHEMA_CONFIG_V1: &str = "procsafe.config.v1";

/// `procsafe.toml` schema v1.
///
/// This is a *user-facing* config model: every field is optional and an empty file is valid.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProcsafeConfigV1 {
    /// Optional schema string for tooling (`procsafe.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Preset profile: `standard` (default) or `word-boundary`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Keyword matching: `substring` or `word`. Overrides the profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matching: Option<String>,

    /// Map of rule_id -> config.
    #[serde(default)]
    pub rules: BTreeMap<String, RuleConfig>,

    /// Extra trigger phrases, keyed by keyword group id.
    #[serde(default)]
    pub keywords: BTreeMap<String, Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RuleConfig {
    /// Override preset enable/disable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}
