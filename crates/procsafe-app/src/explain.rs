//! The `explain` use case: look up rule documentation.

use procsafe_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Found an explanation for the identifier.
    Found(Explanation),
    /// Unknown identifier; includes available rule ids.
    NotFound {
        identifier: String,
        available_rule_ids: &'static [&'static str],
    },
}

/// Look up an explanation for a rule id.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_rule_ids: explain::all_rule_ids(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.len()));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\n");
    out.push_str("Action\n");
    out.push_str("------\n");
    out.push_str(exp.action);
    out.push_str("\n\n");
    out.push_str(&format!("Keyword group: {}\n", exp.trigger_group));

    let applies_to = if exp.applies_to.is_empty() {
        "all procedures".to_string()
    } else {
        exp.applies_to
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };
    out.push_str(&format!("Applies to: {applies_to}\n"));

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(identifier: &str, rule_ids: &[&'static str]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown rule id: {}\n\n", identifier));
    out.push_str("Available rule ids:\n");
    for id in rule_ids {
        out.push_str(&format!("  - {}\n", id));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explain_known_rule_id() {
        let output = run_explain("lp.raised_icp");
        assert!(matches!(output, ExplainOutput::Found(_)));
    }

    #[test]
    fn explain_unknown() {
        let output = run_explain("not_a_real_thing");
        let (identifier, available_rule_ids) = unwrap_not_found(output);
        assert_eq!(identifier, "not_a_real_thing");
        assert_eq!(available_rule_ids.len(), 8);
    }

    #[test]
    fn format_explanation_output() {
        let exp = unwrap_found(run_explain("site.limb_avoidance"));
        let formatted = format_explanation(&exp);
        assert!(formatted.starts_with("Limb Avoidance for Venous Access\n===="));
        assert!(formatted.contains("Action\n------\n"));
        assert!(formatted.contains("Keyword group: arm_avoidance"));
        assert!(formatted.contains("Applies to: iv_cannulation, venepuncture"));
    }

    #[test]
    fn format_explanation_for_generic_rule() {
        let exp = unwrap_found(run_explain("history.latex_allergy"));
        assert!(format_explanation(&exp).contains("Applies to: all procedures"));
    }

    #[test]
    fn format_not_found_output() {
        let formatted = format_not_found("missing", &["rule.one", "rule.two"]);
        assert!(formatted.contains("Unknown rule id: missing"));
        assert!(formatted.contains("Available rule ids:"));
        assert!(formatted.contains("  - rule.one\n"));
        assert!(formatted.contains("  - rule.two\n"));
    }

    fn unwrap_found(output: ExplainOutput) -> Explanation {
        match output {
            ExplainOutput::Found(exp) => exp,
            _ => panic!("expected Found"),
        }
    }

    fn unwrap_not_found(output: ExplainOutput) -> (String, &'static [&'static str]) {
        match output {
            ExplainOutput::NotFound {
                identifier,
                available_rule_ids,
            } => (identifier, available_rule_ids),
            _ => panic!("expected NotFound"),
        }
    }
}
