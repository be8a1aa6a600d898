use super::issue;
use crate::keywords::{CATHETER_TRAUMA, History};
use crate::policy::EffectiveConfig;
use procsafe_types::{Category, Issue, Severity, ids};

pub const MESSAGE: &str =
    "Suspected urethral injury — do NOT pass catheter; call urology, consider suprapubic.";

pub fn run(history: &History<'_>, cfg: &EffectiveConfig, out: &mut Vec<Issue>) {
    if !cfg.rule_enabled(ids::RULE_CATHETER_URETHRAL_INJURY) {
        return;
    }

    if history.mentions(&CATHETER_TRAUMA) {
        out.push(issue(
            ids::RULE_CATHETER_URETHRAL_INJURY,
            Category::Contraindication,
            Severity::High,
            MESSAGE,
            ids::TAG_TRAUMA,
        ));
    }
}
