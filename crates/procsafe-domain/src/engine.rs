use crate::keywords::History;
use crate::policy::EffectiveConfig;
use crate::rules;
use procsafe_types::{AnalysisReport, Category, Issue, ProcedureId, Severity};
use std::collections::HashSet;
use std::sync::LazyLock;

static STANDARD: LazyLock<EffectiveConfig> = LazyLock::new(EffectiveConfig::standard);

/// Analyze `history` for `procedure` with the standard configuration.
///
/// Total: any string (including empty) and any procedure yield a list, never an error.
pub fn analyze(history: &str, procedure: ProcedureId) -> Vec<Issue> {
    analyze_with(history, procedure, &STANDARD)
}

/// Generate, then elevate, then deduplicate.
pub fn analyze_with(history: &str, procedure: ProcedureId, cfg: &EffectiveConfig) -> Vec<Issue> {
    let history = History::new(history, cfg);
    if history.is_empty() {
        return Vec::new();
    }

    let mut issues = Vec::new();
    rules::run_all(&history, procedure, cfg, &mut issues);
    log_fired(procedure, &issues);

    elevate_red_flags(&mut issues);
    dedup_issues(issues)
}

pub fn evaluate(history: &str, procedure: ProcedureId, cfg: &EffectiveConfig) -> AnalysisReport {
    let report = AnalysisReport::new(procedure, analyze_with(history, procedure, cfg));
    tracing::debug!(
        procedure = %procedure,
        profile = %cfg.profile,
        matching = cfg.matching.as_str(),
        issues = report.issues.len(),
        red_flags = report.counts.red_flags,
        "history analyzed"
    );
    report
}

/// Append a red-flag copy of every high-severity issue, after all originals.
pub fn elevate_red_flags(issues: &mut Vec<Issue>) {
    let elevated: Vec<Issue> = issues
        .iter()
        .filter(|i| i.severity == Severity::High)
        .map(Issue::to_red_flag)
        .collect();
    issues.extend(elevated);
}

/// Drop every issue whose `(category, text)` was already seen; first occurrence wins.
pub fn dedup_issues(issues: Vec<Issue>) -> Vec<Issue> {
    let mut seen: HashSet<(Category, String)> = HashSet::new();
    issues
        .into_iter()
        .filter(|i| seen.insert((i.category, i.text.clone())))
        .collect()
}

// History text is never logged; only which rules fired.
fn log_fired(procedure: ProcedureId, issues: &[Issue]) {
    for issue in issues {
        tracing::trace!(
            procedure = %procedure,
            rule_id = %issue.rule_id,
            category = %issue.category,
            severity = %issue.severity,
            "rule fired"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{anticoagulation, lumbar_puncture, nasogastric, urinary_catheter, venous_access};
    use crate::test_support::{config_with_only, keys};
    use procsafe_types::ids;

    fn red_flag_texts(issues: &[Issue]) -> Vec<&str> {
        issues
            .iter()
            .filter(|i| i.category == Category::RedFlag)
            .map(|i| i.text.as_str())
            .collect()
    }

    #[test]
    fn empty_history_yields_nothing_for_every_procedure() {
        for procedure in ProcedureId::ALL {
            assert!(analyze("", procedure).is_empty());
            assert!(analyze("   \n\t", procedure).is_empty());
        }
    }

    #[test]
    fn unmatched_history_yields_nothing() {
        for procedure in ProcedureId::ALL {
            assert!(analyze("Well, mobilising, eating and drinking.", procedure).is_empty());
        }
    }

    #[test]
    fn apixaban_before_cannulation_is_a_consideration_only() {
        let issues = analyze("78F with AF on apixaban.", ProcedureId::IvCannulation);
        assert_eq!(
            keys(&issues),
            vec![(Category::Consideration, anticoagulation::MESSAGE.to_string())]
        );
        assert!(issues[0].text.contains("check INR/platelets"));
        assert!(red_flag_texts(&issues).is_empty());
    }

    #[test]
    fn lymphoedema_before_venepuncture_is_elevated() {
        let issues = analyze(
            "Left-sided lymphoedema post-mastectomy.",
            ProcedureId::Venepuncture,
        );
        assert_eq!(
            keys(&issues),
            vec![
                (Category::Consideration, venous_access::MESSAGE.to_string()),
                (Category::RedFlag, venous_access::MESSAGE.to_string()),
            ]
        );
        assert!(issues.iter().all(|i| i.severity == Severity::High));
    }

    #[test]
    fn facial_trauma_before_ng_tube_avoids_nasal_route() {
        let issues = analyze("Facial trauma from fall yesterday.", ProcedureId::NgTube);
        assert_eq!(
            keys(&issues),
            vec![
                (Category::Contraindication, nasogastric::MESSAGE.to_string()),
                (Category::RedFlag, nasogastric::MESSAGE.to_string()),
            ]
        );
        assert!(
            !issues
                .iter()
                .any(|i| i.rule_id == ids::RULE_HISTORY_ANTICOAGULATION)
        );
    }

    #[test]
    fn warfarin_and_meatal_blood_before_catheter_gives_three_issues() {
        let issues = analyze(
            "On warfarin, blood at meatus noted.",
            ProcedureId::UrinaryCatheter,
        );
        assert_eq!(
            keys(&issues),
            vec![
                (Category::Consideration, anticoagulation::MESSAGE.to_string()),
                (Category::Contraindication, urinary_catheter::MESSAGE.to_string()),
                (Category::RedFlag, urinary_catheter::MESSAGE.to_string()),
            ]
        );
    }

    #[test]
    fn papilloedema_before_lp_without_anticoagulant() {
        let issues = analyze(
            "Papilloedema on exam, not on anticoagulants.",
            ProcedureId::LumbarPuncture,
        );
        assert_eq!(
            keys(&issues),
            vec![
                (Category::Contraindication, lumbar_puncture::RAISED_ICP_MESSAGE.to_string()),
                (Category::RedFlag, lumbar_puncture::RAISED_ICP_MESSAGE.to_string()),
            ]
        );
    }

    #[test]
    fn lp_on_anticoagulant_gets_both_generic_and_specific_prompts() {
        let issues = analyze("On apixaban. Seizure overnight.", ProcedureId::LumbarPuncture);
        assert_eq!(
            keys(&issues),
            vec![
                (Category::Consideration, anticoagulation::MESSAGE.to_string()),
                (Category::Contraindication, lumbar_puncture::RAISED_ICP_MESSAGE.to_string()),
                (Category::Contraindication, lumbar_puncture::BLEEDING_RISK_MESSAGE.to_string()),
                (Category::RedFlag, lumbar_puncture::RAISED_ICP_MESSAGE.to_string()),
                (Category::RedFlag, lumbar_puncture::BLEEDING_RISK_MESSAGE.to_string()),
            ]
        );
    }

    #[test]
    fn case_does_not_matter() {
        for procedure in ProcedureId::ALL {
            assert_eq!(analyze("APIXABAN", procedure), analyze("apixaban", procedure));
        }
    }

    #[test]
    fn elevation_appends_copies_after_originals() {
        let mut issues = Vec::new();
        issues.push(Issue {
            category: Category::Contraindication,
            severity: Severity::High,
            rule_id: "a".to_string(),
            text: "first".to_string(),
            tags: Vec::new(),
        });
        issues.push(Issue {
            category: Category::Consideration,
            severity: Severity::Low,
            rule_id: "b".to_string(),
            text: "second".to_string(),
            tags: Vec::new(),
        });
        elevate_red_flags(&mut issues);

        let texts: Vec<(Category, &str)> =
            issues.iter().map(|i| (i.category, i.text.as_str())).collect();
        assert_eq!(
            texts,
            vec![
                (Category::Contraindication, "first"),
                (Category::Consideration, "second"),
                (Category::RedFlag, "first"),
            ]
        );
    }

    #[test]
    fn dedup_collapses_a_native_red_flag_with_its_copy() {
        let native = Issue {
            category: Category::RedFlag,
            severity: Severity::High,
            rule_id: "native".to_string(),
            text: "stop".to_string(),
            tags: Vec::new(),
        };
        let mut issues = vec![native.clone()];
        elevate_red_flags(&mut issues);
        assert_eq!(issues.len(), 2);

        let deduped = dedup_issues(issues);
        assert_eq!(deduped, vec![native]);
    }

    #[test]
    fn dedup_keeps_first_occurrence_and_order() {
        let make = |category, text: &str, rule: &str| Issue {
            category,
            severity: Severity::Medium,
            rule_id: rule.to_string(),
            text: text.to_string(),
            tags: Vec::new(),
        };
        let deduped = dedup_issues(vec![
            make(Category::Consideration, "b", "first"),
            make(Category::Consideration, "a", "first"),
            make(Category::Consideration, "b", "second"),
            make(Category::Contraindication, "b", "third"),
        ]);
        let seen: Vec<(&str, &str)> = deduped
            .iter()
            .map(|i| (i.text.as_str(), i.rule_id.as_str()))
            .collect();
        assert_eq!(seen, vec![("b", "first"), ("a", "first"), ("b", "third")]);
    }

    #[test]
    fn disabled_rules_do_not_fire() {
        let cfg = config_with_only(&[ids::RULE_LP_BLEEDING_RISK]);
        let issues = analyze_with("On warfarin.", ProcedureId::LumbarPuncture, &cfg);
        assert_eq!(
            keys(&issues),
            vec![
                (Category::Contraindication, lumbar_puncture::BLEEDING_RISK_MESSAGE.to_string()),
                (Category::RedFlag, lumbar_puncture::BLEEDING_RISK_MESSAGE.to_string()),
            ]
        );
    }

    #[test]
    fn evaluate_wraps_issues_in_a_report() {
        let report = evaluate(
            "On warfarin, blood at meatus noted.",
            ProcedureId::UrinaryCatheter,
            &EffectiveConfig::standard(),
        );
        assert_eq!(report.procedure, ProcedureId::UrinaryCatheter);
        assert_eq!(report.issues.len(), 3);
        assert_eq!(report.counts.high, 1);
        assert_eq!(report.counts.medium, 1);
        assert_eq!(report.counts.red_flags, 1);
        assert!(report.has_red_flags());
    }
}
