use crate::keywords::History;
use crate::policy::EffectiveConfig;
use procsafe_types::{Category, Issue, ProcedureId, Severity};

pub mod allergies;
pub mod anticoagulation;
pub mod lumbar_puncture;
pub mod nasogastric;
pub mod urinary_catheter;
pub mod venous_access;


/// Generic rules first, then exactly one procedure-specific branch.
pub fn run_all(
    history: &History<'_>,
    procedure: ProcedureId,
    cfg: &EffectiveConfig,
    out: &mut Vec<Issue>,
) {
    anticoagulation::run(history, cfg, out);
    allergies::run(history, cfg, out);

    match procedure {
        ProcedureId::IvCannulation | ProcedureId::Venepuncture => {
            venous_access::run(history, cfg, out)
        }
        ProcedureId::UrinaryCatheter => urinary_catheter::run(history, cfg, out),
        ProcedureId::NgTube => nasogastric::run(history, cfg, out),
        ProcedureId::LumbarPuncture => lumbar_puncture::run(history, cfg, out),
    }
}

fn issue(rule_id: &str, category: Category, severity: Severity, text: &str, tag: &str) -> Issue {
    Issue {
        category,
        severity,
        rule_id: rule_id.to_string(),
        text: text.to_string(),
        tags: vec![tag.to_string()],
    }
}
