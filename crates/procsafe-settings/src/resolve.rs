use crate::{model::ProcsafeConfigV1, presets};
use anyhow::Context;
use procsafe_domain::policy::{EffectiveConfig, MatchMode, RulePolicy};
use procsafe_types::ids;

/// Values supplied on the command line. They win over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub matching: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: ProcsafeConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "standard".to_string());

    let mut effective = presets::preset(&profile);

    if let Some(matching) = overrides.matching.as_deref().or(cfg.matching.as_deref()) {
        effective.matching = parse_matching(matching)?;
    }

    // per-rule overrides
    for (rule_id, rc) in cfg.rules.iter() {
        if !ids::is_known_rule(rule_id) {
            anyhow::bail!("unknown rule id: {rule_id}");
        }
        let entry = effective
            .rules
            .entry(rule_id.clone())
            .or_insert_with(RulePolicy::disabled);

        if let Some(enabled) = rc.enabled {
            entry.enabled = enabled;
        }
    }

    // extra keywords
    for (group_id, phrases) in cfg.keywords.iter() {
        if !ids::is_known_group(group_id) {
            anyhow::bail!("unknown keyword group: {group_id}");
        }
        let normalized = normalize_phrases(phrases)
            .with_context(|| format!("invalid keywords for {group_id}"))?;
        effective
            .extra_keywords
            .entry(group_id.clone())
            .or_default()
            .extend(normalized);
    }

    Ok(ResolvedConfig { effective })
}

fn parse_matching(v: &str) -> anyhow::Result<MatchMode> {
    match v {
        "substring" => Ok(MatchMode::Substring),
        "word" | "word-boundary" => Ok(MatchMode::WordBoundary),
        other => anyhow::bail!("unknown matching mode: {other} (expected 'substring' or 'word')"),
    }
}

fn normalize_phrases(phrases: &[String]) -> anyhow::Result<Vec<String>> {
    phrases
        .iter()
        .enumerate()
        .map(|(i, phrase)| {
            let phrase = phrase.trim().to_lowercase();
            if phrase.is_empty() {
                anyhow::bail!("keyword #{i} is blank");
            }
            Ok(phrase)
        })
        .collect()
}
