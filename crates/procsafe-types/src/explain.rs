//! Explain registry for rules.
//!
//! Maps rule IDs to a human-readable account of what triggers the rule and what the
//! resulting prompt asks the clinician to do.

use crate::ProcedureId;
use crate::ids;

/// Explanation entry for a rule.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the rule.
    pub title: &'static str,
    /// What the rule looks for and why it matters before the procedure.
    pub description: &'static str,
    /// What the emitted prompt advises.
    pub action: &'static str,
    /// Keyword group whose phrases trigger the rule.
    pub trigger_group: &'static str,
    /// Procedures the rule runs for. Empty means every procedure.
    pub applies_to: &'static [ProcedureId],
}

/// Look up an explanation by rule id.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::RULE_HISTORY_ANTICOAGULATION => Some(explain_anticoagulation()),
        ids::RULE_HISTORY_LATEX_ALLERGY => Some(explain_latex_allergy()),
        ids::RULE_HISTORY_CHLORHEXIDINE_ALLERGY => Some(explain_chlorhexidine_allergy()),
        ids::RULE_SITE_LIMB_AVOIDANCE => Some(explain_limb_avoidance()),
        ids::RULE_CATHETER_URETHRAL_INJURY => Some(explain_urethral_injury()),
        ids::RULE_NG_NASAL_TRAUMA => Some(explain_nasal_trauma()),
        ids::RULE_LP_RAISED_ICP => Some(explain_raised_icp()),
        ids::RULE_LP_BLEEDING_RISK => Some(explain_lp_bleeding_risk()),
        _ => None,
    }
}

/// List all known rule IDs.
pub fn all_rule_ids() -> &'static [&'static str] {
    ids::ALL_RULE_IDS
}

/// List all known keyword group IDs.
pub fn all_keyword_groups() -> &'static [&'static str] {
    ids::ALL_KEYWORD_GROUPS
}

fn explain_anticoagulation() -> Explanation {
    Explanation {
        title: "Anticoagulant or Antiplatelet Use",
        description: "\
Fires when the history names an anticoagulant or antiplatelet agent (warfarin, the DOACs,
heparins, P2Y12 inhibitors).

Any breach of skin or mucosa carries more bleeding risk on these agents. For most ward
procedures this is a precaution rather than a barrier.",
        action: "\
Check INR and platelets, and discuss timing of the procedure or alternatives with the
prescribing team.",
        trigger_group: ids::GROUP_ANTICOAGULANTS,
        applies_to: &[],
    }
}

fn explain_latex_allergy() -> Explanation {
    Explanation {
        title: "Latex Allergy",
        description: "\
Fires when the history mentions latex.

Gloves, tourniquets, and catheters commonly contain latex; exposure can cause anything from
contact dermatitis to anaphylaxis.",
        action: "Use non-latex equipment throughout.",
        trigger_group: ids::GROUP_LATEX,
        applies_to: &[],
    }
}

fn explain_chlorhexidine_allergy() -> Explanation {
    Explanation {
        title: "Chlorhexidine Allergy",
        description: "\
Fires when the history mentions chlorhexidine or a chlorhexidine-based skin prep product.

Chlorhexidine is the default skin antiseptic for most line insertions and is a recognised
cause of perioperative anaphylaxis.",
        action: "Use povidone-iodine skin prep instead.",
        trigger_group: ids::GROUP_CHLORHEXIDINE,
        applies_to: &[],
    }
}

fn explain_limb_avoidance() -> Explanation {
    Explanation {
        title: "Limb Avoidance for Venous Access",
        description: "\
Fires for cannulation and venepuncture when the history mentions lymphoedema, mastectomy,
an AV fistula, or cellulitis.

Access on an affected limb risks infection, worsening lymphoedema, or loss of a dialysis
fistula.",
        action: "Choose a site on the other limb.",
        trigger_group: ids::GROUP_ARM_AVOIDANCE,
        applies_to: &[ProcedureId::IvCannulation, ProcedureId::Venepuncture],
    }
}

fn explain_urethral_injury() -> Explanation {
    Explanation {
        title: "Suspected Urethral Injury",
        description: "\
Fires for urinary catheterisation when the history mentions blood at the meatus, pelvic
fracture, a high-riding prostate, or urethral injury.

Blind urethral catheterisation can convert a partial urethral tear into a complete one.",
        action: "Do not pass a urethral catheter. Call urology and consider a suprapubic route.",
        trigger_group: ids::GROUP_CATHETER_TRAUMA,
        applies_to: &[ProcedureId::UrinaryCatheter],
    }
}

fn explain_nasal_trauma() -> Explanation {
    Explanation {
        title: "Basal Skull or Mid-face Trauma",
        description: "\
Fires for nasogastric tube insertion when the history mentions basal skull fracture,
mid-face fracture, or facial trauma.

A tube passed nasally can enter the cranial vault through a skull base fracture.",
        action: "Avoid the nasal route and seek senior review.",
        trigger_group: ids::GROUP_NG_TRAUMA,
        applies_to: &[ProcedureId::NgTube],
    }
}

fn explain_raised_icp() -> Explanation {
    Explanation {
        title: "Signs of Raised Intracranial Pressure",
        description: "\
Fires for lumbar puncture when the history mentions papilloedema, focal neurology,
seizures, reduced consciousness, a mass lesion, or raised intracranial pressure.

Removing CSF in the presence of raised pressure or a space-occupying lesion risks
herniation.",
        action: "Image before proceeding and discuss with a senior.",
        trigger_group: ids::GROUP_LP_NEURO,
        applies_to: &[ProcedureId::LumbarPuncture],
    }
}

fn explain_lp_bleeding_risk() -> Explanation {
    Explanation {
        title: "Anticoagulation Before Lumbar Puncture",
        description: "\
Fires for lumbar puncture when the history names an anticoagulant or antiplatelet agent.

Unlike most ward procedures, bleeding into the spinal canal can cause an epidural
haematoma with permanent deficit. This rule runs in addition to the generic
anticoagulation prompt.",
        action: "Correct the coagulopathy and check counts before the LP.",
        trigger_group: ids::GROUP_ANTICOAGULANTS,
        applies_to: &[ProcedureId::LumbarPuncture],
    }
}
