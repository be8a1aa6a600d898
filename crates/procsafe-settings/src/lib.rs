//! Config parsing and profile/preset resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{ProcsafeConfigV1, RuleConfig, SCHEMA_CONFIG_V1};
pub use presets::PROFILES;
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `procsafe.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<ProcsafeConfigV1> {
    let cfg: ProcsafeConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the analyzer (profile + overrides + per-rule config).
pub fn resolve_config(
    cfg: ProcsafeConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
