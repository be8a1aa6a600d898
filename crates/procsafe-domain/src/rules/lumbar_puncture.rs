use super::issue;
use crate::keywords::{ANTICOAGULANTS, History, LP_NEURO};
use crate::policy::EffectiveConfig;
use procsafe_types::{Category, Issue, Severity, ids};

pub const RAISED_ICP_MESSAGE: &str =
    "Signs of raised ICP/focal neurology — image first and discuss with senior.";

/// Distinct from the generic anticoagulation consideration; both are emitted for an LP.
pub const BLEEDING_RISK_MESSAGE: &str =
    "Anticoagulated — correct coagulopathy and check counts before LP.";

pub fn run(history: &History<'_>, cfg: &EffectiveConfig, out: &mut Vec<Issue>) {
    if cfg.rule_enabled(ids::RULE_LP_RAISED_ICP) && history.mentions(&LP_NEURO) {
        out.push(issue(
            ids::RULE_LP_RAISED_ICP,
            Category::Contraindication,
            Severity::High,
            RAISED_ICP_MESSAGE,
            ids::TAG_NEURO,
        ));
    }

    if cfg.rule_enabled(ids::RULE_LP_BLEEDING_RISK) && history.mentions(&ANTICOAGULANTS) {
        out.push(issue(
            ids::RULE_LP_BLEEDING_RISK,
            Category::Contraindication,
            Severity::High,
            BLEEDING_RISK_MESSAGE,
            ids::TAG_BLEEDING_RISK,
        ));
    }
}
