use procsafe_types::{AnalysisReport, Issue, ProcedureInfo, Severity};

pub const DISCLAIMER: &str =
    "Educational tool only. Always follow local policy and seek senior help when uncertain.";

/// Reference card for one procedure. Optional sections are omitted when absent.
pub fn render_procedure_markdown(info: &ProcedureInfo) -> String {
    let mut out = format!("# {}\n\n{}\n", info.name, info.summary);

    push_list(&mut out, "Equipment", info.equipment.iter());
    push_list(&mut out, "Contraindications", info.contraindications.iter());
    push_list(&mut out, "Considerations", info.considerations.iter());

    if let Some(red_flags) = info.red_flags {
        push_list(&mut out, "Red flags", red_flags.iter());
    }
    if let Some(references) = info.references {
        push_list(
            &mut out,
            "References",
            references.iter().map(|r| format!("[{}]({})", r.title, r.url)),
        );
    }

    out
}

/// Tailored prompts and red flags for one analysis, followed by the disclaimer.
pub fn render_analysis_markdown(info: &ProcedureInfo, report: &AnalysisReport) -> String {
    let mut out = format!("# {}: history analysis\n\n", info.name);

    out.push_str("## Tailored prompts\n\n");
    let mut prompts = report.prompts().peekable();
    if prompts.peek().is_none() {
        out.push_str("No patient-specific prompts.\n");
    }
    for issue in prompts {
        out.push_str(&prompt_line(issue));
    }

    out.push_str("\n## Red flags\n\n");
    let mut red_flags = report.red_flags().peekable();
    if red_flags.peek().is_none() {
        out.push_str("No red flags identified.\n");
    }
    for issue in red_flags {
        out.push_str(&format!("- {}\n", issue.text));
    }

    out.push_str(&format!("\n> {DISCLAIMER}\n"));
    out
}

fn prompt_line(issue: &Issue) -> String {
    let sev = match issue.severity {
        Severity::High => "HIGH",
        Severity::Medium => "MEDIUM",
        Severity::Low => "LOW",
    };
    format!("- [{}] {}: {}\n", sev, issue.category, issue.text)
}

fn push_list<I>(out: &mut String, heading: &str, items: I)
where
    I: Iterator,
    I::Item: std::fmt::Display,
{
    out.push_str(&format!("\n## {heading}\n\n"));
    for item in items {
        out.push_str(&format!("- {item}\n"));
    }
}
