//! Stable identifiers for rules and keyword groups.
//!
//! `rule_id` is a dotted namespace. Keyword group ids are short snake_case names.

// Rules: generic (every procedure)
pub const RULE_HISTORY_ANTICOAGULATION: &str = "history.anticoagulation";
pub const RULE_HISTORY_LATEX_ALLERGY: &str = "history.latex_allergy";
pub const RULE_HISTORY_CHLORHEXIDINE_ALLERGY: &str = "history.chlorhexidine_allergy";

// Rules: procedure-specific
pub const RULE_SITE_LIMB_AVOIDANCE: &str = "site.limb_avoidance";
pub const RULE_CATHETER_URETHRAL_INJURY: &str = "catheter.urethral_injury";
pub const RULE_NG_NASAL_TRAUMA: &str = "ng.nasal_trauma";
pub const RULE_LP_RAISED_ICP: &str = "lp.raised_icp";
pub const RULE_LP_BLEEDING_RISK: &str = "lp.bleeding_risk";

// Keyword groups
pub const GROUP_ANTICOAGULANTS: &str = "anticoagulants";
pub const GROUP_LATEX: &str = "latex";
pub const GROUP_CHLORHEXIDINE: &str = "chlorhexidine";
pub const GROUP_ARM_AVOIDANCE: &str = "arm_avoidance";
pub const GROUP_LP_NEURO: &str = "lp_neuro";
pub const GROUP_NG_TRAUMA: &str = "ng_trauma";
pub const GROUP_CATHETER_TRAUMA: &str = "catheter_trauma";

// Tags carried on issues for provenance
pub const TAG_ANTICOAGULATION: &str = "anticoagulation";
pub const TAG_ALLERGY: &str = "allergy";
pub const TAG_SITE_SELECTION: &str = "site selection";
pub const TAG_TRAUMA: &str = "trauma";
pub const TAG_NEURO: &str = "neuro";
pub const TAG_BLEEDING_RISK: &str = "bleeding risk";

/// All rule ids, in evaluation order.
pub const ALL_RULE_IDS: &[&str] = &[
    RULE_HISTORY_ANTICOAGULATION,
    RULE_HISTORY_LATEX_ALLERGY,
    RULE_HISTORY_CHLORHEXIDINE_ALLERGY,
    RULE_SITE_LIMB_AVOIDANCE,
    RULE_CATHETER_URETHRAL_INJURY,
    RULE_NG_NASAL_TRAUMA,
    RULE_LP_RAISED_ICP,
    RULE_LP_BLEEDING_RISK,
];

/// All keyword group ids.
pub const ALL_KEYWORD_GROUPS: &[&str] = &[
    GROUP_ANTICOAGULANTS,
    GROUP_LATEX,
    GROUP_CHLORHEXIDINE,
    GROUP_ARM_AVOIDANCE,
    GROUP_LP_NEURO,
    GROUP_NG_TRAUMA,
    GROUP_CATHETER_TRAUMA,
];

pub fn is_known_rule(id: &str) -> bool {
    ALL_RULE_IDS.contains(&id)
}

pub fn is_known_group(id: &str) -> bool {
    ALL_KEYWORD_GROUPS.contains(&id)
}
