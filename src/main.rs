mod catalog;
mod engine;
mod report;
mod session;
mod source;
mod store;
mod tracing;

use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use crate::catalog::Department;
use crate::report::csv::render_csv;
use crate::report::text::{SummaryContext, render_summary_text};
use crate::report::build_table;
use crate::session::Session;
use crate::source::payload::read_summary;
use crate::source::{SourceError, apply_summary, read_snapshot, snapshot_path, write_snapshot};

#[derive(Debug, Parser)]
#[command(name = "kra-index", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load department data, apply overrides, write the CSV export and
    /// text summary.
    Run(RunArgs),
}

#[derive(Debug, Args)]
struct RunArgs {
    /// Remote summary dump (JSON). Falls back to the snapshot when absent
    /// or unreadable.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Directory holding the fixed-key state snapshot.
    #[arg(long, default_value = ".")]
    snapshot_dir: PathBuf,

    /// Report output directory.
    #[arg(long)]
    out: PathBuf,

    /// Weight override, e.g. --weight "Sales=30". Repeatable.
    #[arg(long = "weight", value_name = "DEPT=VALUE")]
    weights: Vec<String>,

    /// Single-metric override, e.g. --set "Legal:Quality Review Score=85".
    /// Repeatable.
    #[arg(long = "set", value_name = "DEPT:METRIC=VALUE")]
    sets: Vec<String>,
}

#[derive(Debug, Error)]
enum MainError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid override '{0}': expected {1}")]
    BadOverride(String, &'static str),
    #[error("unknown department '{0}'")]
    UnknownDepartment(String),
}

fn main() {
    crate::tracing::init();
    if let Err(err) = run(Cli::parse()) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), MainError> {
    let Command::Run(args) = cli.command;

    let mut session = Session::seed();
    let snapshot = snapshot_path(&args.snapshot_dir);

    let mut refreshed = false;
    if let Some(input) = &args.input {
        match read_summary(input) {
            Ok(payload) => {
                apply_summary(&mut session, payload);
                refreshed = true;
                ::tracing::info!(input = %input.display(), "applied remote summary");
            }
            Err(err) => {
                // Remote failure is not a core error: no update occurs and
                // we fall back to the last persisted state.
                ::tracing::warn!(input = %input.display(), %err, "summary unreadable, falling back to snapshot");
            }
        }
    }
    if !refreshed {
        if let Some(payload) = read_snapshot(&snapshot)? {
            apply_summary(&mut session, payload);
            ::tracing::info!(path = %snapshot.display(), "restored state from snapshot");
        }
    }

    for spec in &args.weights {
        let (dept, value) = parse_weight_override(spec)?;
        session.weights.set_weight(dept, value);
    }
    for spec in &args.sets {
        let (dept, metric, value) = parse_metric_override(spec)?;
        session.store.set_metric(dept, &metric, value);
    }

    write_snapshot(&snapshot, &session)?;

    fs::create_dir_all(&args.out)?;
    let table = build_table(&session);
    fs::write(args.out.join("department_summary.csv"), render_csv(&table))?;
    let summary = SummaryContext::from_session(&session);
    fs::write(args.out.join("report.txt"), render_summary_text(&summary))?;

    ::tracing::info!(
        ceo_index = summary.ceo_index,
        total_weight = summary.total_weight,
        "reports written to {}",
        args.out.display()
    );
    Ok(())
}

fn parse_weight_override(spec: &str) -> Result<(Department, f64), MainError> {
    let (name, value) = spec
        .split_once('=')
        .ok_or_else(|| MainError::BadOverride(spec.to_string(), "DEPT=VALUE"))?;
    let dept = Department::from_name(name.trim())
        .ok_or_else(|| MainError::UnknownDepartment(name.trim().to_string()))?;
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|_| MainError::BadOverride(spec.to_string(), "DEPT=VALUE"))?;
    Ok((dept, value))
}

fn parse_metric_override(spec: &str) -> Result<(Department, String, f64), MainError> {
    let (name, rest) = spec
        .split_once(':')
        .ok_or_else(|| MainError::BadOverride(spec.to_string(), "DEPT:METRIC=VALUE"))?;
    let (metric, value) = rest
        .split_once('=')
        .ok_or_else(|| MainError::BadOverride(spec.to_string(), "DEPT:METRIC=VALUE"))?;
    let dept = Department::from_name(name.trim())
        .ok_or_else(|| MainError::UnknownDepartment(name.trim().to_string()))?;
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|_| MainError::BadOverride(spec.to_string(), "DEPT:METRIC=VALUE"))?;
    Ok((dept, metric.trim().to_string(), value))
}
