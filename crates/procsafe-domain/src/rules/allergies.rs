use super::issue;
use crate::keywords::{CHLORHEXIDINE, History, LATEX};
use crate::policy::EffectiveConfig;
use procsafe_types::{Category, Issue, Severity, ids};

pub const LATEX_MESSAGE: &str = "Latex allergy — use non-latex equipment.";
pub const CHLORHEXIDINE_MESSAGE: &str = "Chlorhexidine allergy — use povidone-iodine skin prep.";

/// Latex first, then chlorhexidine.
pub fn run(history: &History<'_>, cfg: &EffectiveConfig, out: &mut Vec<Issue>) {
    if cfg.rule_enabled(ids::RULE_HISTORY_LATEX_ALLERGY) && history.mentions(&LATEX) {
        out.push(issue(
            ids::RULE_HISTORY_LATEX_ALLERGY,
            Category::Consideration,
            Severity::Medium,
            LATEX_MESSAGE,
            ids::TAG_ALLERGY,
        ));
    }

    if cfg.rule_enabled(ids::RULE_HISTORY_CHLORHEXIDINE_ALLERGY)
        && history.mentions(&CHLORHEXIDINE)
    {
        out.push(issue(
            ids::RULE_HISTORY_CHLORHEXIDINE_ALLERGY,
            Category::Consideration,
            Severity::Medium,
            CHLORHEXIDINE_MESSAGE,
            ids::TAG_ALLERGY,
        ));
    }
}
