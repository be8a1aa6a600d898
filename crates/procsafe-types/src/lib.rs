//! Stable DTOs and IDs used across the procsafe workspace.
//!
//! This crate is intentionally boring:
//! - the closed set of procedures and their static record shape
//! - issues, categories, severities, and the analysis report
//! - stable string IDs for rules and keyword groups
//! - explain registry for rule guidance

#![forbid(unsafe_code)]

pub mod explain;
pub mod ids;
pub mod issue;
pub mod procedure;
pub mod report;

pub use explain::{lookup_explanation, Explanation};
pub use issue::{Category, Issue, Severity};
pub use procedure::{ProcedureId, ProcedureInfo, Reference, UnknownProcedure};
pub use report::{AnalysisReport, SeverityCounts, SCHEMA_ANALYSIS_V1};
