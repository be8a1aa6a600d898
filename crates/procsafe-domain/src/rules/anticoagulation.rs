use super::issue;
use crate::keywords::{ANTICOAGULANTS, History};
use crate::policy::EffectiveConfig;
use procsafe_types::{Category, Issue, Severity, ids};

pub const MESSAGE: &str =
    "Anticoagulation/antiplatelet use — check INR/platelets; discuss timing/alternatives.";

pub fn run(history: &History<'_>, cfg: &EffectiveConfig, out: &mut Vec<Issue>) {
    if !cfg.rule_enabled(ids::RULE_HISTORY_ANTICOAGULATION) {
        return;
    }

    if history.mentions(&ANTICOAGULANTS) {
        out.push(issue(
            ids::RULE_HISTORY_ANTICOAGULATION,
            Category::Consideration,
            Severity::Medium,
            MESSAGE,
            ids::TAG_ANTICOAGULATION,
        ));
    }
}
