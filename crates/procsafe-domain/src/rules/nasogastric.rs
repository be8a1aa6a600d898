use super::issue;
use crate::keywords::{History, NG_TRAUMA};
use crate::policy::EffectiveConfig;
use procsafe_types::{Category, Issue, Severity, ids};

pub const MESSAGE: &str = "Basal skull/mid-face trauma — avoid nasal route; seek senior review.";

pub fn run(history: &History<'_>, cfg: &EffectiveConfig, out: &mut Vec<Issue>) {
    if !cfg.rule_enabled(ids::RULE_NG_NASAL_TRAUMA) {
        return;
    }

    if history.mentions(&NG_TRAUMA) {
        out.push(issue(
            ids::RULE_NG_NASAL_TRAUMA,
            Category::Contraindication,
            Severity::High,
            MESSAGE,
            ids::TAG_TRAUMA,
        ));
    }
}
