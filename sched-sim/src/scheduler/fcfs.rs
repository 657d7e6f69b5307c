/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! First-come, first-serve.
//!
//! Processes run in the order the caller supplies them (no sorting), each to
//! completion, one report row per process.
//!
//! # Waiting-time accounting
//! A service clock accumulates the processor time handed out so far.  For a
//! process with `arrival_time > 0` the waiting time is
//! `service_clock - arrival_time`, floored at zero; when the process arrives
//! after the processor went idle the clock jumps forward to its arrival.
//!
//! A process other than the first that arrives at exactly `0` keeps the
//! waiting time of the previous process.  This reproduces the historical
//! report output; such rows may overlap their predecessor on the timeline,
//! and a `warn!` is emitted for each one.

use tracing::warn;

use super::{Algorithm, Schedule, Trace};
use crate::process::{Process, ReportRow, Ticks};

/// Per-run accumulators.
#[derive(Debug, Default)]
struct FcfsRun {
    service_clock: Ticks,
    waiting: Ticks,
    trace: Trace,
}

impl FcfsRun {
    fn admit(&mut self, index: usize, p: &Process) {
        if p.arrival_time > 0 {
            self.waiting = (self.service_clock - p.arrival_time).max(0);
        } else if index > 0 {
            warn!(
                pid = p.id,
                reused_wait = self.waiting,
                "process arrives at 0 after the first; reusing previous waiting time"
            );
        }

        let start = p.arrival_time + self.waiting;
        let completion = start + p.burst_duration;

        self.trace.record(
            start,
            ReportRow {
                process_id: p.id,
                priority: p.priority,
                burst_served: p.burst_duration,
                arrival_time: p.arrival_time,
                waiting_time: self.waiting,
                turnaround_time: p.burst_duration + self.waiting,
                completion_time: completion,
            },
        );

        self.service_clock = (self.service_clock + p.burst_duration).max(completion);
    }
}

/// Schedule `processes` first-come, first-serve in input order.
pub fn schedule(processes: &[Process]) -> Schedule {
    let mut run = FcfsRun::default();
    for (i, p) in processes.iter().enumerate() {
        run.admit(i, p);
    }
    run.trace.finish(Algorithm::Fcfs)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::tests::{assert_no_overlap, assert_turnaround_invariant};

    #[test]
    fn two_process_example() {
        let processes = vec![Process::new(1, 5, 0), Process::new(2, 3, 1)];
        let s = schedule(&processes);

        assert_eq!(s.rows.len(), 2);
        let p1 = s.rows[0];
        assert_eq!(p1.process_id, 1);
        assert_eq!(p1.waiting_time, 0);
        assert_eq!(p1.turnaround_time, 5);
        assert_eq!(p1.completion_time, 5);

        let p2 = s.rows[1];
        assert_eq!(p2.process_id, 2);
        assert_eq!(p2.waiting_time, 4);
        assert_eq!(p2.turnaround_time, 7);
        assert_eq!(p2.completion_time, 8);

        assert!((s.aggregates.average_waiting - 2.0).abs() < 1e-9);
        assert!((s.aggregates.average_turnaround - 6.0).abs() < 1e-9);
        assert!((s.aggregates.throughput - 2.0 / 8.0).abs() < 1e-9);
    }

    #[test]
    fn timeline_follows_input_order() {
        let processes = vec![Process::new(1, 5, 0), Process::new(2, 3, 1)];
        let s = schedule(&processes);
        let spans: Vec<_> = s
            .timeline
            .iter()
            .map(|t| (t.process_id, t.start, t.stop))
            .collect();
        assert_eq!(spans, vec![(1, 0, 5), (2, 5, 8)]);
    }

    #[test]
    fn input_order_is_not_sorted() {
        // Later arrival listed first still runs first
        let processes = vec![Process::new(1, 2, 4), Process::new(2, 3, 1)];
        let s = schedule(&processes);
        assert_eq!(s.rows[0].process_id, 1);
        assert_eq!(s.rows[1].process_id, 2);
    }

    #[test]
    fn completion_times_are_non_decreasing() {
        let processes = vec![
            Process::new(1, 4, 0),
            Process::new(2, 1, 1),
            Process::new(3, 7, 2),
            Process::new(4, 2, 20),
            Process::new(5, 3, 21),
        ];
        let s = schedule(&processes);
        for pair in s.rows.windows(2) {
            assert!(pair[0].completion_time <= pair[1].completion_time);
        }
        assert_turnaround_invariant(&s);
        assert_no_overlap(&s);
    }

    #[test]
    fn idle_gap_floors_waiting_at_zero() {
        let processes = vec![Process::new(1, 2, 0), Process::new(2, 3, 10)];
        let s = schedule(&processes);
        let p2 = s.rows[1];
        assert_eq!(p2.waiting_time, 0);
        assert_eq!(p2.completion_time, 13);
        assert_eq!(s.timeline[1].start, 10);
    }

    #[test]
    fn zero_arrival_after_first_reuses_previous_wait() {
        let processes = vec![
            Process::new(1, 4, 0),
            Process::new(2, 2, 1), // waits 3
            Process::new(3, 5, 0), // arrival 0 → keeps wait 3
        ];
        let s = schedule(&processes);
        let p3 = s.rows[2];
        assert_eq!(p3.waiting_time, 3);
        assert_eq!(p3.completion_time, 8);
        assert_turnaround_invariant(&s);
    }

    #[test]
    fn throughput_uses_last_emitted_completion() {
        // Completions 10, 11, 10: the reused wait puts p3 before p2's exit.
        let processes = vec![
            Process::new(1, 10, 0),
            Process::new(2, 1, 1),
            Process::new(3, 1, 0),
        ];
        let s = schedule(&processes);
        let completions: Vec<_> = s.rows.iter().map(|r| r.completion_time).collect();
        assert_eq!(completions, vec![10, 11, 10]);
        assert_eq!(s.last_completion(), 10);
        assert!((s.aggregates.throughput - 0.30).abs() < 1e-9);
    }

    #[test]
    fn one_row_per_process() {
        let processes = vec![
            Process::new(1, 10, 0),
            Process::new(2, 10, 1),
            Process::new(3, 10, 2),
        ];
        let s = schedule(&processes);
        assert_eq!(s.rows.len(), processes.len());
        assert!(s.rows.iter().zip(&processes).all(|(r, p)| r.burst_served == p.burst_duration));
    }
}
