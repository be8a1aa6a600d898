//! CLI entry point for procsafe.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, logging setup, and exit
//! codes. All business logic lives in the `procsafe-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::error::ErrorKind;
use clap::{Parser, Subcommand, ValueEnum};
use procsafe_app::{
    AnalyzeInput, ExplainOutput, format_explanation, format_list, format_not_found,
    red_flag_exit_code, render_analysis_markdown, render_procedure_markdown, run_analyze,
    run_explain, run_list, run_show, serialize_procedure, serialize_report,
};
use procsafe_settings::Overrides;
use std::io::Read;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "procsafe",
    version,
    about = "Pre-procedure safety prompts from a free-text patient history"
)]
struct Cli {
    /// Path to procsafe config TOML. A missing file means defaults.
    #[arg(long, global = true, default_value = "procsafe.toml")]
    config: Utf8PathBuf,

    /// Override profile (standard|word-boundary).
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Override keyword matching (substring|word).
    #[arg(long, global = true)]
    matching: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List supported procedures as `id<TAB>name`.
    List,

    /// Print the reference card for one procedure.
    Show {
        /// Procedure id (e.g. "lumbar_puncture").
        procedure: String,

        #[arg(long, value_enum, default_value_t = Format::Md)]
        format: Format,
    },

    /// Analyze a patient history for one procedure.
    Analyze {
        /// Procedure id (e.g. "ng_tube").
        #[arg(long)]
        procedure: String,

        /// History text. Read from stdin when neither this nor --history-file is given.
        #[arg(long, conflicts_with = "history_file")]
        history: Option<String>,

        /// Read the history from a file.
        #[arg(long)]
        history_file: Option<Utf8PathBuf>,

        #[arg(long, value_enum, default_value_t = Format::Md)]
        format: Format,

        /// Exit with code 2 when the analysis contains red flags.
        #[arg(long)]
        fail_on_red_flag: bool,
    },

    /// Explain a rule id.
    Explain {
        /// The rule id (e.g. "lp.raised_icp") to explain.
        rule_id: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Md,
    Json,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = parse_args();

    match cli.cmd {
        Commands::List => {
            print!("{}", format_list(run_list()));
            Ok(())
        }
        Commands::Show {
            ref procedure,
            format,
        } => cmd_show(procedure, format),
        Commands::Analyze {
            ref procedure,
            ref history,
            ref history_file,
            format,
            fail_on_red_flag,
        } => cmd_analyze(
            &cli,
            procedure,
            history.as_deref(),
            history_file.as_deref(),
            format,
            fail_on_red_flag,
        ),
        Commands::Explain { ref rule_id } => cmd_explain(rule_id),
    }
}

/// Usage errors exit 1; code 2 is reserved for `--fail-on-red-flag`.
fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                let _ = err.print();
                std::process::exit(1);
            }
        },
    }
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_logging() {
    let filter = EnvFilter::try_from_env("PROCSAFE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_show(procedure: &str, format: Format) -> anyhow::Result<()> {
    let info = run_show(procedure)?;
    let out = match format {
        Format::Md => render_procedure_markdown(info),
        Format::Json => serialize_procedure(info)?,
    };
    print!("{out}");
    Ok(())
}

fn cmd_analyze(
    cli: &Cli,
    procedure: &str,
    history: Option<&str>,
    history_file: Option<&Utf8Path>,
    format: Format,
    fail_on_red_flag: bool,
) -> anyhow::Result<()> {
    let config_text = read_config(&cli.config)?;
    let history = read_history(history, history_file)?;

    let output = run_analyze(AnalyzeInput {
        procedure,
        history: &history,
        config_text: &config_text,
        overrides: Overrides {
            profile: cli.profile.clone(),
            matching: cli.matching.clone(),
        },
    })?;

    let out = match format {
        Format::Md => render_analysis_markdown(output.procedure, &output.report),
        Format::Json => serialize_report(&output.report)?,
    };
    print!("{out}");

    let code = red_flag_exit_code(&output.report, fail_on_red_flag);
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn cmd_explain(rule_id: &str) -> anyhow::Result<()> {
    match run_explain(rule_id) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_rule_ids,
        } => {
            eprint!("{}", format_not_found(&identifier, available_rule_ids));
            std::process::exit(1);
        }
    }
}

fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path, "config not found; using defaults");
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("read config: {path}")),
    }
}

fn read_history(history: Option<&str>, history_file: Option<&Utf8Path>) -> anyhow::Result<String> {
    if let Some(text) = history {
        return Ok(text.to_string());
    }
    if let Some(path) = history_file {
        return std::fs::read_to_string(path).with_context(|| format!("read history: {path}"));
    }
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("read history from stdin")?;
    Ok(text)
}
