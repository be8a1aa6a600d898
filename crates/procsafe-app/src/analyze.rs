//! The `analyze` use case: resolve config, analyze a history, produce a report.

use anyhow::Context;
use procsafe_settings::{Overrides, ProcsafeConfigV1, ResolvedConfig};
use procsafe_types::{AnalysisReport, ProcedureInfo};

/// Input for the analyze use case.
#[derive(Clone, Debug)]
pub struct AnalyzeInput<'a> {
    /// Procedure identifier as typed by the user (e.g. `lumbar_puncture`).
    pub procedure: &'a str,
    /// Free-text history. May be empty.
    pub history: &'a str,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the analyze use case.
#[derive(Clone, Debug)]
pub struct AnalyzeOutput {
    pub procedure: &'static ProcedureInfo,
    pub report: AnalysisReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Parse and resolve config text. Empty text means defaults.
pub fn resolve(config_text: &str, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let cfg = if config_text.trim().is_empty() {
        ProcsafeConfigV1::default()
    } else {
        procsafe_settings::parse_config_toml(config_text).context("parse config")?
    };

    let resolved = procsafe_settings::resolve_config(cfg, overrides).context("resolve config")?;
    tracing::debug!(
        profile = %resolved.effective.profile,
        matching = resolved.effective.matching.as_str(),
        "config resolved"
    );
    Ok(resolved)
}

pub fn run_analyze(input: AnalyzeInput<'_>) -> anyhow::Result<AnalyzeOutput> {
    let procedure = procsafe_catalog::lookup(input.procedure).context("select procedure")?;
    let resolved = resolve(input.config_text, input.overrides)?;

    let report = procsafe_domain::evaluate(input.history, procedure.id, &resolved.effective);
    tracing::info!(
        procedure = %procedure.id,
        prompts = report.prompts().count(),
        red_flags = report.counts.red_flags,
        "analysis complete"
    );

    Ok(AnalyzeOutput {
        procedure,
        report,
        resolved_config: resolved,
    })
}

/// Map a report to an exit code: 2 when red flags are present and the caller asked to fail on
/// them, 0 otherwise.
pub fn red_flag_exit_code(report: &AnalysisReport, fail_on_red_flag: bool) -> i32 {
    if fail_on_red_flag && report.has_red_flags() {
        2
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use procsafe_domain::MatchMode;
    use procsafe_types::{Category, ProcedureId};

    fn input<'a>(procedure: &'a str, history: &'a str, config_text: &'a str) -> AnalyzeInput<'a> {
        AnalyzeInput {
            procedure,
            history,
            config_text,
            overrides: Overrides::default(),
        }
    }

    #[test]
    fn empty_config_uses_defaults() {
        let output = run_analyze(input("ng_tube", "Facial trauma.", "")).expect("run_analyze");
        assert_eq!(output.resolved_config.effective.profile, "standard");
        assert_eq!(output.procedure.id, ProcedureId::NgTube);
        assert_eq!(output.report.issues.len(), 2);
        assert!(output.report.has_red_flags());
    }

    #[test]
    fn unknown_procedure_is_an_error() {
        let err = run_analyze(input("chest_drain", "", "")).unwrap_err();
        assert_eq!(err.to_string(), "select procedure");
        assert!(format!("{err:#}").contains("procedure not found: chest_drain"));
    }

    #[test]
    fn bad_config_is_an_error() {
        let err = run_analyze(input("ng_tube", "", "matching = \"fuzzy\"")).unwrap_err();
        assert_eq!(err.to_string(), "resolve config");
    }

    #[test]
    fn config_disables_rules() {
        let config = "[rules.\"history.anticoagulation\"]\nenabled = false\n";
        let output = run_analyze(input("iv_cannulation", "On warfarin.", config)).unwrap();
        assert!(output.report.issues.is_empty());
    }

    #[test]
    fn overrides_reach_the_analyzer() {
        let output = run_analyze(AnalyzeInput {
            overrides: Overrides {
                profile: Some("word-boundary".to_string()),
                matching: None,
            },
            ..input("venepuncture", "Prior mastectomyectomy", "")
        })
        .unwrap();
        assert_eq!(output.resolved_config.effective.matching, MatchMode::WordBoundary);
        assert!(output.report.issues.is_empty());
    }

    #[test]
    fn red_flag_exit_codes() {
        let output = run_analyze(input("lumbar_puncture", "Papilloedema.", "")).unwrap();
        assert!(output.report.issues.iter().any(|i| i.category == Category::RedFlag));
        assert_eq!(red_flag_exit_code(&output.report, true), 2);
        assert_eq!(red_flag_exit_code(&output.report, false), 0);

        let quiet = AnalysisReport::new(ProcedureId::LumbarPuncture, Vec::new());
        assert_eq!(red_flag_exit_code(&quiet, true), 0);
    }
}
