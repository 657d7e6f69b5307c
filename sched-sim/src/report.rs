/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Text and YAML rendering of scheduling results.
//!
//! A table report for one schedule is three blocks:
//!
//! ```text
//! ----------------------------------------------
//!             First-come, first-serve
//! ----------------------------------------------
//! Gantt schedule
//! |   1   |   2   |
//! 0       5       8
//!
//! Schedule table
//! +----+----------+-------+---------+---------+------------+------------+
//! | ID | Priority | Burst | Arrival |    Wait | Turnaround |       Exit |
//! +====+==========+=======+=========+=========+============+============+
//! |  1 |        0 |     5 |       0 |       0 |          5 |          5 |
//! ...
//! |    |          |       |         | Average |    Average | Throughput |
//! |    |          |       |         |    2.00 |       6.00 |     0.25/t |
//! +----+----------+-------+---------+---------+------------+------------+
//! ```
//!
//! The aggregates occupy the last row of the table, one multi-line cell per
//! figure.
//!
//! All writers take `impl Write` so tests render into a `Vec<u8>`.

use std::io::{self, Write};

use comfy_table::presets::ASCII_FULL_CONDENSED;
use comfy_table::{CellAlignment, Table};
use serde::Serialize;

use crate::metrics::{Aggregates, ProcessSummary};
use crate::process::{ReportRow, TimelineSegment};
use crate::scheduler::Schedule;

/// Width of one Gantt block, excluding the `|` separator.
const GANTT_CELL_WIDTH: usize = 8;

// ── Table report ──────────────────────────────────────────────────────────────

/// Title banner, Gantt trace and schedule table for one schedule.
pub fn write_report<W: Write>(w: &mut W, schedule: &Schedule) -> io::Result<()> {
    write_title(w, schedule.title())?;
    write_gantt(w, &schedule.timeline)?;
    write_schedule_table(w, &schedule.rows, &schedule.aggregates)
}

pub fn write_title<W: Write>(w: &mut W, title: &str) -> io::Result<()> {
    let rule = "-".repeat(title.len() * 2);
    writeln!(w, "{rule}")?;
    writeln!(w, "{} {title}", " ".repeat(title.len() / 2))?;
    writeln!(w, "{rule}")
}

pub fn write_gantt<W: Write>(w: &mut W, timeline: &[TimelineSegment]) -> io::Result<()> {
    writeln!(w, "Gantt schedule")?;

    write!(w, "|")?;
    for seg in timeline {
        let pid = seg.process_id.to_string();
        let padding = " ".repeat(GANTT_CELL_WIDTH.saturating_sub(pid.len()) / 2);
        write!(w, "{padding}{pid}{padding}|")?;
    }
    writeln!(w)?;

    for (i, seg) in timeline.iter().enumerate() {
        write!(w, "{}\t", seg.start)?;
        if i == timeline.len() - 1 {
            write!(w, "{}", seg.stop)?;
        }
    }
    write!(w, "\n\n")
}

pub fn write_schedule_table<W: Write>(
    w: &mut W,
    rows: &[ReportRow],
    aggregates: &Aggregates,
) -> io::Result<()> {
    writeln!(w, "Schedule table")?;

    let body = rows
        .iter()
        .map(|r| {
            vec![
                r.process_id.to_string(),
                r.priority.to_string(),
                r.burst_served.to_string(),
                r.arrival_time.to_string(),
                r.waiting_time.to_string(),
                r.turnaround_time.to_string(),
                r.completion_time.to_string(),
            ]
        })
        .collect();

    let table = boxed_table(
        &["ID", "Priority", "Burst", "Arrival", "Wait", "Turnaround", "Exit"],
        body,
        footer_cells(aggregates, 4),
    );
    writeln!(w, "{table}")
}

/// One row per distinct process, with process-based averages.
pub fn write_process_summary<W: Write>(
    w: &mut W,
    summaries: &[ProcessSummary],
) -> io::Result<()> {
    writeln!(w, "Per-process summary")?;

    let body = summaries
        .iter()
        .map(|s| {
            vec![
                s.process_id.to_string(),
                s.priority.to_string(),
                s.burst_duration.to_string(),
                s.arrival_time.to_string(),
                s.spans.to_string(),
                s.waiting_time.to_string(),
                s.turnaround_time.to_string(),
                s.completion_time.to_string(),
            ]
        })
        .collect();

    let table = boxed_table(
        &["ID", "Priority", "Burst", "Arrival", "Spans", "Wait", "Turnaround", "Exit"],
        body,
        footer_cells(&Aggregates::from_summaries(summaries), 5),
    );
    writeln!(w, "{table}")?;
    writeln!(w)
}

fn footer_cells(agg: &Aggregates, leading_blanks: usize) -> Vec<String> {
    let mut cells = vec![String::new(); leading_blanks];
    cells.push(format!("Average\n{:.2}", agg.average_waiting));
    cells.push(format!("Average\n{:.2}", agg.average_turnaround));
    cells.push(format!("Throughput\n{:.2}/t", agg.throughput));
    cells
}

// ── YAML export ───────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct YamlReport<'a> {
    title: &'static str,
    #[serde(flatten)]
    schedule: &'a Schedule,
    #[serde(skip_serializing_if = "Option::is_none")]
    per_process: Option<PerProcess>,
}

#[derive(Serialize)]
struct PerProcess {
    summaries: Vec<ProcessSummary>,
    aggregates: Aggregates,
}

/// Serialise `schedules` as one YAML sequence.
pub fn write_yaml<W: Write>(
    w: &mut W,
    schedules: &[Schedule],
    per_process: bool,
) -> Result<(), serde_yaml::Error> {
    let reports: Vec<YamlReport<'_>> = schedules
        .iter()
        .map(|s| YamlReport {
            title: s.title(),
            schedule: s,
            per_process: per_process.then(|| {
                let summaries = ProcessSummary::collect(&s.rows);
                let aggregates = Aggregates::from_summaries(&summaries);
                PerProcess {
                    summaries,
                    aggregates,
                }
            }),
        })
        .collect();
    serde_yaml::to_writer(w, &reports)
}

// ── Boxed tables ──────────────────────────────────────────────────────────────

/// ASCII-bordered table with every column right-aligned.
fn boxed_table(header: &[&str], rows: Vec<Vec<String>>, footer: Vec<String>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL_CONDENSED)
        .set_header(header.to_vec());
    for row in rows {
        table.add_row(row);
    }
    // No footer support in the crate: the aggregates go in as a final row.
    table.add_row(footer);

    for column in table.column_iter_mut() {
        column.set_cell_alignment(CellAlignment::Right);
    }
    table
}

// ── Tests ─────────────────────────────────────────────────────────────────────
