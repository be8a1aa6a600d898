//! Use case orchestration for procsafe.
//!
//! This crate provides the application layer: use cases that coordinate the catalog, domain,
//! settings, and render layers. It is intentionally thin and performs no I/O of its own.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod analyze;
mod catalog;
mod explain;
mod render;

pub use analyze::{AnalyzeInput, AnalyzeOutput, red_flag_exit_code, resolve, run_analyze};
pub use catalog::{format_list, run_list, run_show};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use render::{
    render_analysis_markdown, render_procedure_markdown, serialize_procedure, serialize_report,
};
