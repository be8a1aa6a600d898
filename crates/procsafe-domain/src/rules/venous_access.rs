use super::issue;
use crate::keywords::{ARM_AVOIDANCE, History};
use crate::policy::EffectiveConfig;
use procsafe_types::{Category, Issue, Severity, ids};

pub const MESSAGE: &str = "Avoid limb with lymphoedema/AV fistula/previous mastectomy/cellulitis.";

/// Shared by cannulation and venepuncture.
pub fn run(history: &History<'_>, cfg: &EffectiveConfig, out: &mut Vec<Issue>) {
    if !cfg.rule_enabled(ids::RULE_SITE_LIMB_AVOIDANCE) {
        return;
    }

    if history.mentions(&ARM_AVOIDANCE) {
        out.push(issue(
            ids::RULE_SITE_LIMB_AVOIDANCE,
            Category::Consideration,
            Severity::High,
            MESSAGE,
            ids::TAG_SITE_SELECTION,
        ));
    }
}
