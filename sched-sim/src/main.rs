/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{error, info};

use sched_sim::metrics::ProcessSummary;
use sched_sim::report;
use sched_sim::scheduler::{self, Algorithm, Schedule};
use sched_sim::workload;

// ── CLI argument definition ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Yaml,
}

/// Offline CPU scheduling simulator.
///
/// Example:
///   sched-sim processes.csv
///   sched-sim -a srt -a rr --per-process processes.yaml
#[derive(Debug, Parser)]
#[command(
    name = "sched-sim",
    about = "Simulate FCFS, SRT, Priority and Round-Robin scheduling over a fixed workload",
    long_about = None,
)]
struct Cli {
    /// Workload file: CSV rows `id,burst,arrival[,priority]`, or `.yaml`/`.yml`.
    input: PathBuf,

    /// Algorithm to run (fcfs, srt, priority, rr).  Repeatable; default all four.
    #[arg(short = 'a', long = "algorithm")]
    algorithms: Vec<Algorithm>,

    /// Output format.
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Also print a per-process summary with process-based averages.
    #[arg(short = 'p', long = "per-process", default_value_t = false)]
    per_process: bool,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Logs go to stderr so stdout carries only the report.
    // Level is controlled by the RUST_LOG env-var (e.g. RUST_LOG=debug).
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    info!(
        input       = %cli.input.display(),
        algorithms  = ?cli.algorithms,
        format      = ?cli.format,
        per_process = cli.per_process,
        "Configuration"
    );

    if let Err(e) = run(&cli) {
        error!("{:#}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let processes = workload::load_from_file(&cli.input)
        .with_context(|| format!("Failed to load workload: {}", cli.input.display()))?;

    let algorithms: &[Algorithm] = if cli.algorithms.is_empty() {
        &Algorithm::ALL
    } else {
        &cli.algorithms
    };

    // Every schedule is computed before anything is printed: no partial output.
    let schedules = algorithms
        .iter()
        .map(|&a| scheduler::run(&processes, a))
        .collect::<Result<Vec<Schedule>, _>>()
        .context("Scheduling failed")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.format {
        OutputFormat::Table => {
            for schedule in &schedules {
                report::write_report(&mut out, schedule)?;
                if cli.per_process {
                    writeln!(out)?;
                    let summaries = ProcessSummary::collect(&schedule.rows);
                    report::write_process_summary(&mut out, &summaries)?;
                }
            }
        }
        OutputFormat::Yaml => {
            report::write_yaml(&mut out, &schedules, cli.per_process)
                .context("Failed to serialise schedules as YAML")?;
        }
    }

    out.flush()?;
    Ok(())
}
