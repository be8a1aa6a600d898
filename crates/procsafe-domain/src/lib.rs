//! Pure history analysis (no IO).
//!
//! Input: free-text history and a procedure id.
//! Output: categorized, severity-ranked, deduplicated issues.

#![forbid(unsafe_code)]

pub mod keywords;
pub mod policy;
pub mod rules;

mod engine;

#[cfg(test)]
mod properties;
#[cfg(test)]
mod test_support;

pub use engine::{analyze, analyze_with, dedup_issues, elevate_red_flags, evaluate};
pub use keywords::{History, KeywordGroup};
pub use policy::{EffectiveConfig, MatchMode, RulePolicy};
