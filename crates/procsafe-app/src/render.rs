//! Output use cases: Markdown and JSON renditions of procedures and reports.

use anyhow::Context;
use procsafe_types::{AnalysisReport, ProcedureInfo};

pub fn render_procedure_markdown(info: &ProcedureInfo) -> String {
    procsafe_render::render_procedure_markdown(info)
}

pub fn render_analysis_markdown(info: &ProcedureInfo, report: &AnalysisReport) -> String {
    procsafe_render::render_analysis_markdown(info, report)
}

/// Pretty JSON with a trailing newline.
pub fn serialize_report(report: &AnalysisReport) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(report).context("serialize report")?;
    json.push('\n');
    Ok(json)
}

/// Pretty JSON with a trailing newline.
pub fn serialize_procedure(info: &ProcedureInfo) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(info).context("serialize procedure")?;
    json.push('\n');
    Ok(json)
}
