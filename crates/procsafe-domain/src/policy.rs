use procsafe_types::ids;
use std::collections::BTreeMap;

/// How a keyword phrase is located in the normalized history.
///
/// Both strategies are approximations: neither understands negation ("not on warfarin")
/// or spelling variants beyond the listed phrases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Plain containment anywhere in the text.
    #[default]
    Substring,
    /// Containment bounded on both sides by a non-letter or the edge of the text.
    WordBoundary,
}

impl MatchMode {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchMode::Substring => "substring",
            MatchMode::WordBoundary => "word",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RulePolicy {
    pub enabled: bool,
}

impl RulePolicy {
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub profile: String,
    pub matching: MatchMode,
    pub rules: BTreeMap<String, RulePolicy>,
    /// Additional lowercase phrases per keyword group id.
    pub extra_keywords: BTreeMap<String, Vec<String>>,
}

impl EffectiveConfig {
    /// Every rule on, substring matching, no extra phrases.
    pub fn standard() -> Self {
        let rules = ids::ALL_RULE_IDS
            .iter()
            .map(|id| (id.to_string(), RulePolicy::enabled()))
            .collect();
        Self {
            profile: "standard".to_string(),
            matching: MatchMode::Substring,
            rules,
            extra_keywords: BTreeMap::new(),
        }
    }

    pub fn rule_enabled(&self, rule_id: &str) -> bool {
        self.rules.get(rule_id).is_some_and(|p| p.enabled)
    }

    pub fn extra_keywords(&self, group_id: &str) -> &[String] {
        self.extra_keywords
            .get(group_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self::standard()
    }
}
