/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Aggregate statistics computed at the end of every scheduling run.
//!
//! # Two bases
//!
//! | Basis | Divisor | Produced by |
//! |---|---|---|
//! | Rows | number of emitted report rows (spans) | [`Aggregates::from_rows`] |
//! | Processes | number of distinct processes | [`Aggregates::from_summaries`] |
//!
//! Every [`Schedule`](crate::scheduler::Schedule) carries the row-based
//! figures, which is what the schedule table footer shows.  Whenever a
//! preemptive or round-robin run splits a process into several spans the
//! row basis counts each span separately, inflating both the divisor of the
//! averages and the throughput.  [`ProcessSummary`] folds the spans back
//! into one entry per process and gives the textbook figures:
//!
//! * completion = end of the last span
//! * turnaround = completion − arrival
//! * waiting    = turnaround − burst
//!
//! An empty input yields all-zero aggregates rather than NaN.

use serde::Serialize;

use crate::process::{Pid, ReportRow, Ticks};

// ── Aggregates ────────────────────────────────────────────────────────────────

/// Footer statistics of one scheduling run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Aggregates {
    pub average_waiting: f64,
    pub average_turnaround: f64,

    /// Completed units per tick: `count / last_completion_time`.
    pub throughput: f64,
}

impl Aggregates {
    /// Row-based aggregates: every emitted span counts as one unit.
    ///
    /// Throughput divides by the completion time of the *last emitted* row,
    /// which is the latest one except after an FCFS zero-arrival reuse.
    pub fn from_rows(rows: &[ReportRow]) -> Self {
        let last = rows.last().map_or(0, |r| r.completion_time);
        Self::compute(
            rows.iter().map(|r| (r.waiting_time, r.turnaround_time)),
            rows.len(),
            last,
        )
    }

    /// Process-based aggregates: every distinct process counts once.
    pub fn from_summaries(summaries: &[ProcessSummary]) -> Self {
        let last = summaries
            .iter()
            .map(|s| s.completion_time)
            .max()
            .unwrap_or(0);
        Self::compute(
            summaries
                .iter()
                .map(|s| (s.waiting_time, s.turnaround_time)),
            summaries.len(),
            last,
        )
    }

    fn compute(
        values: impl Iterator<Item = (Ticks, Ticks)>,
        count: usize,
        last_completion: Ticks,
    ) -> Self {
        if count == 0 {
            return Self::default();
        }

        let (total_wait, total_turnaround) = values.fold((0.0, 0.0), |(w, t), (wait, ta)| {
            (w + wait as f64, t + ta as f64)
        });

        let n = count as f64;
        let throughput = if last_completion > 0 {
            n / last_completion as f64
        } else {
            0.0
        };

        Aggregates {
            average_waiting: total_wait / n,
            average_turnaround: total_turnaround / n,
            throughput,
        }
    }
}

// ── ProcessSummary ────────────────────────────────────────────────────────────

/// Textbook metrics for one process, folded from all of its spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcessSummary {
    pub process_id: Pid,
    pub priority: i64,
    pub arrival_time: Ticks,

    /// Sum of `burst_served` over the process's spans.
    pub burst_duration: Ticks,

    pub completion_time: Ticks,
    pub turnaround_time: Ticks,
    pub waiting_time: Ticks,

    /// Number of report rows the process produced.
    pub spans: usize,
}

impl ProcessSummary {
    /// Fold report rows into one summary per process, in order of first
    /// appearance.
    pub fn collect(rows: &[ReportRow]) -> Vec<ProcessSummary> {
        let mut out: Vec<ProcessSummary> = Vec::new();

        for row in rows {
            match out.iter_mut().find(|s| s.process_id == row.process_id) {
                Some(s) => {
                    s.burst_duration += row.burst_served;
                    s.completion_time = s.completion_time.max(row.completion_time);
                    s.spans += 1;
                }
                None => out.push(ProcessSummary {
                    process_id: row.process_id,
                    priority: row.priority,
                    arrival_time: row.arrival_time,
                    burst_duration: row.burst_served,
                    completion_time: row.completion_time,
                    turnaround_time: 0,
                    waiting_time: 0,
                    spans: 1,
                }),
            }
        }

        for s in &mut out {
            s.turnaround_time = s.completion_time - s.arrival_time;
            s.waiting_time = s.turnaround_time - s.burst_duration;
        }

        out
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::Process;

    fn span(id: Pid, arrival: Ticks, start: Ticks, stop: Ticks) -> ReportRow {
        ReportRow::for_span(&Process::new(id, stop - start, arrival), start, stop)
    }

    #[test]
    fn empty_rows_give_zero_aggregates() {
        let agg = Aggregates::from_rows(&[]);
        assert_eq!(agg, Aggregates::default());
        assert!(!agg.average_waiting.is_nan());
    }

    #[test]
    fn row_aggregates_use_row_count() {
        // p1 split into two spans, p2 one span
        let rows = vec![span(1, 0, 0, 3), span(2, 1, 3, 6), span(1, 0, 6, 8)];
        let agg = Aggregates::from_rows(&rows);

        // waits 0 + 3 + 6 = 9 over 3 rows
        assert!((agg.average_waiting - 3.0).abs() < 1e-9);
        // turnarounds 3 + 5 + 8 = 16 over 3 rows
        assert!((agg.average_turnaround - 16.0 / 3.0).abs() < 1e-9);
        assert!((agg.throughput - 3.0 / 8.0).abs() < 1e-9);
    }

    #[test]
    fn summaries_fold_spans_per_process() {
        let rows = vec![span(1, 0, 0, 3), span(2, 1, 3, 6), span(1, 0, 6, 8)];
        let summaries = ProcessSummary::collect(&rows);

        assert_eq!(summaries.len(), 2);
        let p1 = summaries[0];
        assert_eq!(p1.process_id, 1);
        assert_eq!(p1.burst_duration, 5);
        assert_eq!(p1.completion_time, 8);
        assert_eq!(p1.turnaround_time, 8);
        assert_eq!(p1.waiting_time, 3);
        assert_eq!(p1.spans, 2);

        let p2 = summaries[1];
        assert_eq!(p2.turnaround_time, 5);
        assert_eq!(p2.waiting_time, 2);
    }

    #[test]
    fn process_aggregates_use_process_count() {
        let rows = vec![span(1, 0, 0, 3), span(2, 1, 3, 6), span(1, 0, 6, 8)];
        let agg = Aggregates::from_summaries(&ProcessSummary::collect(&rows));

        assert!((agg.average_waiting - 2.5).abs() < 1e-9);
        assert!((agg.average_turnaround - 6.5).abs() < 1e-9);
        assert!((agg.throughput - 2.0 / 8.0).abs() < 1e-9);
    }

    #[test]
    fn zero_last_completion_gives_zero_throughput() {
        let row = ReportRow {
            process_id: 1,
            priority: 0,
            burst_served: 0,
            arrival_time: 0,
            waiting_time: 0,
            turnaround_time: 0,
            completion_time: 0,
        };
        let agg = Aggregates::from_rows(&[row]);
        assert_eq!(agg.throughput, 0.0);
    }
}
