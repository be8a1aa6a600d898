//! Property-based tests for the analysis engine.
//!
//! These tests use proptest to verify invariants around:
//! - determinism and deduplication
//! - red-flag elevation and view ordering
//! - case handling and matching modes

use crate::engine::{analyze, analyze_with};
use crate::keywords::BUILTIN_GROUPS;
use crate::policy::{EffectiveConfig, MatchMode};
use procsafe_types::{Category, Issue, ProcedureId, Severity};
use proptest::prelude::*;
use std::collections::HashSet;

// ============================================================================
// Strategies
// ============================================================================

fn arb_procedure() -> impl Strategy<Value = ProcedureId> {
    prop::sample::select(ProcedureId::ALL.to_vec())
}

/// Any built-in trigger phrase.
fn arb_phrase() -> impl Strategy<Value = String> {
    let phrases: Vec<&'static str> = BUILTIN_GROUPS
        .iter()
        .flat_map(|g| g.phrases.iter().copied())
        .collect();
    prop::sample::select(phrases).prop_map(str::to_string)
}

/// ASCII filler, including punctuation that sits at word edges.
fn arb_filler() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 ,.;:()/-]{0,24}").unwrap()
}

/// A history interleaving trigger phrases with filler, in mixed case.
fn arb_history() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            2 => arb_phrase(),
            3 => arb_filler(),
            1 => arb_phrase().prop_map(|p| p.to_ascii_uppercase()),
        ],
        0..8,
    )
    .prop_map(|parts| parts.join(" "))
}

fn key_set(issues: &[Issue]) -> HashSet<(Category, String)> {
    issues
        .iter()
        .map(|i| (i.category, i.text.clone()))
        .collect()
}

fn word_config() -> EffectiveConfig {
    EffectiveConfig {
        matching: MatchMode::WordBoundary,
        ..EffectiveConfig::standard()
    }
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Same input, same output.
    #[test]
    fn analysis_is_deterministic(history in arb_history(), procedure in arb_procedure()) {
        prop_assert_eq!(analyze(&history, procedure), analyze(&history, procedure));
    }

    /// No two issues share a (category, text) pair.
    #[test]
    fn output_has_no_duplicate_keys(history in arb_history(), procedure in arb_procedure()) {
        let issues = analyze(&history, procedure);
        prop_assert_eq!(key_set(&issues).len(), issues.len());
    }

    /// Every high-severity prompt has a red-flag twin, and every red flag is high.
    #[test]
    fn high_prompts_are_elevated(history in arb_history(), procedure in arb_procedure()) {
        let issues = analyze(&history, procedure);
        let flags: HashSet<&str> = issues
            .iter()
            .filter(|i| i.category == Category::RedFlag)
            .map(|i| i.text.as_str())
            .collect();

        for issue in &issues {
            if issue.category == Category::RedFlag {
                prop_assert_eq!(issue.severity, Severity::High);
            } else if issue.severity == Severity::High {
                prop_assert!(
                    flags.contains(issue.text.as_str()),
                    "high prompt without red flag: {}",
                    issue.text
                );
            }
        }
    }

    /// Red flags are appended after every prompt.
    #[test]
    fn red_flags_follow_prompts(history in arb_history(), procedure in arb_procedure()) {
        let issues = analyze(&history, procedure);
        let first_flag = issues.iter().position(Issue::is_red_flag);
        let last_prompt = issues.iter().rposition(|i| !i.is_red_flag());
        if let (Some(first_flag), Some(last_prompt)) = (first_flag, last_prompt) {
            prop_assert!(last_prompt < first_flag);
        }
    }

    /// Letter case never changes the outcome.
    #[test]
    fn analysis_ignores_case(history in arb_history(), procedure in arb_procedure()) {
        prop_assert_eq!(
            analyze(&history.to_ascii_uppercase(), procedure),
            analyze(&history.to_ascii_lowercase(), procedure)
        );
    }

    /// Word-boundary matching can only drop issues that substring matching finds.
    #[test]
    fn word_mode_is_narrower(history in arb_history(), procedure in arb_procedure()) {
        let broad = key_set(&analyze(&history, procedure));
        let narrow = key_set(&analyze_with(&history, procedure, &word_config()));
        prop_assert!(narrow.is_subset(&broad));
    }

    /// Appending text can add issues but never removes one.
    #[test]
    fn appending_text_is_monotone(
        history in arb_history(),
        suffix in arb_history(),
        procedure in arb_procedure()
    ) {
        let before = key_set(&analyze(&history, procedure));
        let after = key_set(&analyze(&format!("{history}{suffix}"), procedure));
        prop_assert!(before.is_subset(&after));
    }

    /// Whitespace-only histories never produce issues.
    #[test]
    fn blank_history_is_empty(
        blank in prop::string::string_regex("[ \t\r\n]{0,16}").unwrap(),
        procedure in arb_procedure()
    ) {
        prop_assert!(analyze(&blank, procedure).is_empty());
    }
}
