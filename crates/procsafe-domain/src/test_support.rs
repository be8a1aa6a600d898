use crate::keywords::History;
use crate::policy::{EffectiveConfig, MatchMode};
use procsafe_types::{Category, Issue};

pub type Rule = fn(&History<'_>, &EffectiveConfig, &mut Vec<Issue>);

pub fn config_with_only(rule_ids: &[&str]) -> EffectiveConfig {
    let mut cfg = EffectiveConfig::standard();
    for (id, policy) in cfg.rules.iter_mut() {
        policy.enabled = rule_ids.contains(&id.as_str());
    }
    cfg
}

pub fn config_with_matching(matching: MatchMode) -> EffectiveConfig {
    EffectiveConfig {
        matching,
        ..EffectiveConfig::standard()
    }
}

pub fn config_with_extra(group_id: &str, phrases: &[&str]) -> EffectiveConfig {
    let mut cfg = EffectiveConfig::standard();
    cfg.extra_keywords.insert(
        group_id.to_string(),
        phrases.iter().map(|p| p.to_string()).collect(),
    );
    cfg
}

pub fn run_rule(rule: Rule, text: &str, cfg: &EffectiveConfig) -> Vec<Issue> {
    let history = History::new(text, cfg);
    let mut out = Vec::new();
    rule(&history, cfg, &mut out);
    out
}

pub fn keys(issues: &[Issue]) -> Vec<(Category, String)> {
    issues
        .iter()
        .map(|i| (i.category, i.text.clone()))
        .collect()
}
