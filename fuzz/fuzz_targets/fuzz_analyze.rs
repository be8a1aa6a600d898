//! Fuzz target for history analysis.
//!
//! Goal: analysis is total. It must **never panic** on any UTF-8 history, for any procedure
//! and either matching mode, and its output must stay free of duplicate keys.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_analyze
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use procsafe_domain::{EffectiveConfig, MatchMode, analyze_with};
use procsafe_types::ProcedureId;
use std::collections::HashSet;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    procedure: u8,
    word_boundary: bool,
    history: &'a str,
}

fuzz_target!(|input: Input<'_>| {
    let procedure = ProcedureId::ALL[usize::from(input.procedure) % ProcedureId::ALL.len()];
    let cfg = EffectiveConfig {
        matching: if input.word_boundary {
            MatchMode::WordBoundary
        } else {
            MatchMode::Substring
        },
        ..EffectiveConfig::standard()
    };

    let issues = analyze_with(input.history, procedure, &cfg);

    let mut seen = HashSet::new();
    for issue in &issues {
        assert!(seen.insert(issue.dedup_key()), "duplicate issue: {issue:?}");
    }
});
