//! CLI entry point for cguard.
//!
//! This module is thin: it handles argument parsing, I/O, logging setup and exit codes.
//! All business logic lives in the `cguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use cguard_app::{
    CheckInput, ConfigFormat, ExplainOutput, format_explanation, format_not_found, run_check,
    run_explain, run_explore, verdict_exit_code,
};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "cguard",
    version,
    about = "Structural policy gate for C exercise submissions"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check a C source file against a policy.
    Check {
        /// Policy file (TOML or JSON).
        #[arg(long)]
        policy: Utf8PathBuf,

        /// Policy syntax; inferred from the file extension when omitted.
        #[arg(long, value_enum)]
        format: Option<FormatArg>,

        /// Print the violations as a JSON array instead of the rejection notice.
        #[arg(long)]
        json: bool,

        /// The submission to check.
        source: Utf8PathBuf,
    },

    /// Explain a constraint tag (e.g. "loops") or policy field (e.g. "require_includes").
    Explain { identifier: String },

    /// Print the syntax tree of a C source file, one node kind per line.
    Explore { source: Utf8PathBuf },

    /// Print the JSON Schema of the policy file.
    Schema,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Toml,
    Json,
}

impl From<FormatArg> for ConfigFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Toml => ConfigFormat::Toml,
            FormatArg::Json => ConfigFormat::Json,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Check {
            policy,
            format,
            json,
            source,
        } => cmd_check(&policy, format, json, &source),
        Commands::Explain { identifier } => cmd_explain(&identifier),
        Commands::Explore { source } => cmd_explore(&source),
        Commands::Schema => cmd_schema(),
    }
}

fn cmd_check(
    policy_path: &Utf8Path,
    format: Option<FormatArg>,
    json: bool,
    source_path: &Utf8Path,
) -> anyhow::Result<()> {
    let config_text = std::fs::read_to_string(policy_path)
        .with_context(|| format!("read policy {policy_path}"))?;
    let source =
        std::fs::read(source_path).with_context(|| format!("read source {source_path}"))?;

    let config_format = format
        .map(ConfigFormat::from)
        .unwrap_or_else(|| ConfigFormat::from_extension(policy_path.extension()));
    tracing::debug!(%policy_path, %source_path, ?config_format, "checking submission");

    let output = run_check(CheckInput {
        source: &source,
        config_text: &config_text,
        config_format,
    })?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&output.violations).context("serialize violations")?
        );
    } else if let Some(report) = &output.report {
        print!("{report}");
    }

    let code = verdict_exit_code(output.verdict);
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_tags,
            available_fields,
        } => {
            eprint!(
                "{}",
                format_not_found(&identifier, available_tags, available_fields)
            );
            std::process::exit(1);
        }
    }
}

fn cmd_explore(source_path: &Utf8Path) -> anyhow::Result<()> {
    let source =
        std::fs::read(source_path).with_context(|| format!("read source {source_path}"))?;
    print!("{}", run_explore(&source)?);
    Ok(())
}

fn cmd_schema() -> anyhow::Result<()> {
    println!("{}", cguard_settings::policy_schema_json()?);
    Ok(())
}
