//! Developer tasks (schema generation, conformance, explain coverage).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use procsafe_types::{ProcedureId, SCHEMA_ANALYSIS_V1, explain};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of the xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .unwrap_or(manifest_dir)
        .to_path_buf()
}

/// Get the schemas directory path.
fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_analysis_schema() -> schemars::Schema {
    schema_for!(procsafe_types::AnalysisReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(procsafe_settings::ProcsafeConfigV1)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "procsafe.analysis.v1.json",
            generate: generate_analysis_schema,
        },
        SchemaSpec {
            filename: "procsafe.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);

        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;

        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

/// Histories that between them fire every rule at least once.
const CONFORMANCE_HISTORIES: &[&str] = &[
    "",
    "Well, no past history.",
    "On warfarin and clopidogrel. Latex allergy. Chlorhexidine reaction in 2019.",
    "Left lymphoedema post-mastectomy; AV fistula right arm.",
    "Blood at meatus after pelvic fracture.",
    "Basal skull fracture with facial trauma.",
    "Papilloedema, focal neurology, on apixaban.",
];

/// Analyze sample histories for every procedure and validate each report against the
/// generated analysis schema.
fn conform() -> anyhow::Result<()> {
    let schema = serde_json::to_value(generate_analysis_schema())
        .context("Failed to serialize analysis schema")?;
    let validator = jsonschema::validator_for(&schema)
        .map_err(|e| anyhow::anyhow!("Failed to compile schema: {}", e))?;

    println!("✓ {SCHEMA_ANALYSIS_V1} schema compiles");

    let cfg = procsafe_domain::EffectiveConfig::standard();
    let mut fired = std::collections::BTreeSet::new();
    let mut errors = Vec::new();
    let mut report_count = 0;

    for procedure in ProcedureId::ALL {
        for history in CONFORMANCE_HISTORIES {
            let report = procsafe_domain::evaluate(history, procedure, &cfg);
            fired.extend(report.issues.iter().map(|i| i.rule_id.clone()));

            let value = serde_json::to_value(&report).context("Failed to serialize report")?;
            for error in validator.iter_errors(&value) {
                errors.push(format!("{procedure} / {history:?}: {error}"));
            }
            report_count += 1;
        }
    }

    for rule_id in explain::all_rule_ids() {
        if !fired.contains(*rule_id) {
            errors.push(format!("Rule ID '{}' never fired", rule_id));
        }
    }

    if errors.is_empty() {
        println!("✓ {report_count} reports validate");
        println!("✓ all {} rules fired", explain::all_rule_ids().len());
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!("Conformance failed with {} errors", errors.len())
    }
}

/// Validate that all rule IDs have explanations.
fn explain_coverage() -> anyhow::Result<()> {
    let rule_ids = explain::all_rule_ids();
    let groups = explain::all_keyword_groups();
    let mut errors = Vec::new();

    for rule_id in rule_ids {
        match explain::lookup_explanation(rule_id) {
            Some(exp) => {
                if exp.title.is_empty() {
                    errors.push(format!("Rule ID '{}' has empty title", rule_id));
                }
                if exp.description.is_empty() {
                    errors.push(format!("Rule ID '{}' has empty description", rule_id));
                }
                if exp.action.is_empty() {
                    errors.push(format!("Rule ID '{}' has empty action", rule_id));
                }
                if !groups.contains(&exp.trigger_group) {
                    errors.push(format!(
                        "Rule ID '{}' names unknown keyword group '{}'",
                        rule_id, exp.trigger_group
                    ));
                }
            }
            None => {
                errors.push(format!("Rule ID '{}' has no explanation", rule_id));
            }
        }
    }

    if errors.is_empty() {
        println!("✓ {} rule IDs have explanations", rule_ids.len());
        println!("\n✓ All explain coverage checks passed!");
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!(
            "Explain coverage validation failed with {} errors",
            errors.len()
        )
    }
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate sample analysis reports against the schema");
    eprintln!("  explain-coverage  Validate all rule IDs have explanations");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "conform" => conform(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
