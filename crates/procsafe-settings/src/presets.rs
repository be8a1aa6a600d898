use procsafe_domain::policy::{EffectiveConfig, MatchMode};

/// Known profile names, default first.
pub const PROFILES: &[&str] = &["standard", "word-boundary"];

/// Preset profiles. Unknown names fall back to `standard`.
pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        "word-boundary" => word_boundary_profile(),
        // default
        _ => EffectiveConfig::standard(),
    }
}

fn word_boundary_profile() -> EffectiveConfig {
    // Same rules as standard; only phrase matching is stricter.
    EffectiveConfig {
        profile: "word-boundary".to_string(),
        matching: MatchMode::WordBoundary,
        ..EffectiveConfig::standard()
    }
}
