/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Arrival-driven preemptive engine shared by shortest-remaining-time and
//! priority scheduling.
//!
//! # Phases
//!
//! ```text
//! arrivals (ascending)  ──►  event loop  ──►  drain (grouped by policy key)
//!                             │
//!                             ├─ preempt : newcomer wins → row for the cut span
//!                             ├─ complete: running done by `a` (or last arrival)
//!                             │            → completion row, back-fill the gap
//!                             └─ queue   : newcomer joins the pending pool
//! ```
//!
//! 1. The earliest arrival starts running at its arrival time.
//! 2. At every later arrival `a` the running process's remaining burst is
//!    `remaining - (a - span_start)`.  While that is positive the
//!    [`PreemptionPolicy`] may preempt: the span so far is reported, the
//!    remaining burst is stored back into the pool and the newcomer runs from
//!    `a`.
//! 3. Otherwise, if the running process is done by `a` (or `a` is the last
//!    arrival), it runs to completion and the newcomer takes over.  When the
//!    completion falls before `a`, pending processes fill the gap in drain
//!    order; one still running at `a` is cut there and returned to the pool.
//! 4. Otherwise the newcomer is queued.
//! 5. After the last arrival every pending process, the running one
//!    included, is drained: groups in ascending policy key, members in
//!    ascending arrival time, each to completion.
//!
//! Every row's `waiting_time` is its span's start time.

use std::collections::BTreeMap;

use tracing::debug;

use super::policy::{LowestPriorityValue, PreemptionPolicy, ShortestRemaining};
use super::{Schedule, Trace};
use crate::process::{Pending, Process, ReportRow, Ticks};

/// Shortest-remaining-time (reported as "Shortest-job-first").
pub fn shortest_remaining_time(processes: &[Process]) -> Schedule {
    schedule_with(&ShortestRemaining, processes)
}

/// Preemptive priority scheduling, lower value first.
pub fn priority(processes: &[Process]) -> Schedule {
    schedule_with(&LowestPriorityValue, processes)
}

/// Run the preemptive engine with an arbitrary policy.
pub fn schedule_with<P: PreemptionPolicy>(policy: &P, processes: &[Process]) -> Schedule {
    let mut arrivals: Vec<Pending> = processes
        .iter()
        .enumerate()
        .map(|(order, &p)| Pending::new(p, order))
        .collect();
    // Stable on input order for simultaneous arrivals
    arrivals.sort_by_key(|p| (p.process.arrival_time, p.order));

    let mut arrivals = arrivals.into_iter();
    let Some(first) = arrivals.next() else {
        return Trace::default().finish(policy.algorithm());
    };

    let mut run = PreemptiveRun::new(policy, first);
    let mut arrivals = arrivals.peekable();
    while let Some(arriving) = arrivals.next() {
        let is_final = arrivals.peek().is_none();
        run.on_arrival(arriving, is_final);
    }
    run.drain();

    run.trace.finish(policy.algorithm())
}

// ── Per-run state ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
struct Running {
    job: Pending,
    span_start: Ticks,
}

struct PreemptiveRun<'a, P: PreemptionPolicy> {
    policy: &'a P,
    running: Running,
    pool: Vec<Pending>,
    /// End of the processor time committed so far.
    clock: Ticks,
    trace: Trace,
}

impl<'a, P: PreemptionPolicy> PreemptiveRun<'a, P> {
    fn new(policy: &'a P, first: Pending) -> Self {
        let start = first.process.arrival_time;
        Self {
            policy,
            running: Running {
                job: first,
                span_start: start,
            },
            pool: Vec::new(),
            clock: start,
            trace: Trace::default(),
        }
    }

    fn on_arrival(&mut self, arriving: Pending, is_final: bool) {
        let a = arriving.process.arrival_time;
        let Running { mut job, span_start } = self.running;
        let remaining_now = job.remaining - (a - span_start);

        if remaining_now > 0 && self.policy.preempts(&arriving.process, &job, remaining_now) {
            debug!(
                preempted = job.id(),
                by = arriving.id(),
                at = a,
                remaining = remaining_now,
                "preemption"
            );
            self.emit(&job, span_start, a);
            job.remaining = remaining_now;
            self.pool.push(job);
            self.clock = a;
            self.running = Running {
                job: arriving,
                span_start: a,
            };
        } else if remaining_now <= 0 || is_final {
            let done_at = span_start + job.remaining;
            self.emit(&job, span_start, done_at);
            self.clock = done_at;
            if done_at < a {
                self.backfill(a);
            }
            self.running = Running {
                job: arriving,
                span_start: self.clock.max(a),
            };
            self.clock = self.running.span_start;
        } else {
            debug!(pid = arriving.id(), at = a, "queued");
            self.pool.push(arriving);
        }
    }

    /// Keep the processor busy with pending work until `until`.
    fn backfill(&mut self, until: Ticks) {
        while self.clock < until {
            let Some(idx) = self.next_pending() else {
                debug!(from = self.clock, until = until, "processor idle");
                self.clock = until;
                return;
            };

            let mut job = self.pool.swap_remove(idx);
            let stop = (self.clock + job.remaining).min(until);
            self.emit(&job, self.clock, stop);
            job.remaining -= stop - self.clock;
            self.clock = stop;

            if !job.is_finished() {
                self.pool.push(job);
            }
        }
    }

    /// Index of the pending process the drain order would pick next.
    fn next_pending(&self) -> Option<usize> {
        self.pool
            .iter()
            .enumerate()
            .min_by_key(|(_, j)| (self.policy.drain_key(j), j.process.arrival_time, j.order))
            .map(|(i, _)| i)
    }

    /// Run every pending process to completion, grouped by drain key.
    fn drain(&mut self) {
        self.pool.push(self.running.job);
        self.clock = self.running.span_start;

        // BTreeMap: groups iterate in ascending key order
        let mut groups: BTreeMap<i64, Vec<Pending>> = BTreeMap::new();
        for job in self.pool.drain(..) {
            groups
                .entry(self.policy.drain_key(&job))
                .or_default()
                .push(job);
        }

        for (key, mut group) in groups {
            if group.len() > 1 {
                group.sort_by_key(|j| (j.process.arrival_time, j.order));
                debug!(key = key, size = group.len(), "draining tied group");
            }
            for job in group {
                let stop = self.clock + job.remaining;
                self.emit(&job, self.clock, stop);
                self.clock = stop;
            }
        }
    }

    /// Report the span `[start, stop)`; zero-length spans are not reported.
    fn emit(&mut self, job: &Pending, start: Ticks, stop: Ticks) {
        if stop > start {
            self.trace
                .record(start, ReportRow::for_span(&job.process, start, stop));
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::tests::{assert_no_overlap, assert_turnaround_invariant};
    use crate::scheduler::Algorithm;

    fn spans(s: &Schedule) -> Vec<(i64, Ticks, Ticks)> {
        s.timeline
            .iter()
            .map(|t| (t.process_id, t.start, t.stop))
            .collect()
    }

    /// Timeline covers `[first_start, last_stop)` without holes.
    fn assert_tiles(s: &Schedule) {
        let mut segs = s.timeline.clone();
        segs.sort_by_key(|t| t.start);
        for pair in segs.windows(2) {
            assert_eq!(pair[0].stop, pair[1].start, "gap or overlap in {:?}", segs);
        }
    }

    // ── shortest remaining time ───────────────────────────────────────────────

    #[test]
    fn srt_shorter_arrival_preempts_at_arrival_instant() {
        let processes = vec![Process::new(1, 10, 0), Process::new(2, 3, 2)];
        let s = shortest_remaining_time(&processes);

        let first = s.rows[0];
        assert_eq!(first.process_id, 1);
        assert_eq!(first.completion_time, 2);
        assert_eq!(first.burst_served, 2);

        assert_eq!(spans(&s), vec![(1, 0, 2), (2, 2, 5), (1, 5, 13)]);
        assert_eq!(s.algorithm, Algorithm::ShortestRemainingTime);
        assert_turnaround_invariant(&s);
        assert_tiles(&s);
    }

    #[test]
    fn srt_two_process_example() {
        let processes = vec![Process::new(1, 5, 0), Process::new(2, 3, 1)];
        let s = shortest_remaining_time(&processes);

        assert_eq!(spans(&s), vec![(1, 0, 1), (2, 1, 4), (1, 4, 8)]);
        let waits: Vec<_> = s.rows.iter().map(|r| r.waiting_time).collect();
        assert_eq!(waits, vec![0, 1, 4]);
        // three rows → row-based divisor
        assert!((s.aggregates.throughput - 3.0 / 8.0).abs() < 1e-9);
    }

    #[test]
    fn srt_longer_arrival_does_not_preempt() {
        let processes = vec![Process::new(1, 4, 0), Process::new(2, 6, 1)];
        let s = shortest_remaining_time(&processes);
        assert_eq!(spans(&s), vec![(1, 0, 4), (2, 4, 10)]);
    }

    #[test]
    fn srt_equal_remaining_does_not_preempt() {
        // At t=2 p1 has 3 left; p2 needs 3, strict comparison keeps p1
        let processes = vec![Process::new(1, 5, 0), Process::new(2, 3, 2)];
        let s = shortest_remaining_time(&processes);
        assert_eq!(s.rows[0].process_id, 1);
        assert_eq!(s.rows[0].burst_served, 5);
    }

    #[test]
    fn srt_drains_leftovers_by_remaining_burst() {
        let processes = vec![
            Process::new(1, 3, 0),
            Process::new(2, 9, 1),
            Process::new(3, 6, 2),
            Process::new(4, 4, 3),
        ];
        let s = shortest_remaining_time(&processes);

        // p1 done at 3 (final arrival at 3), then drain: p4(4), p3(6), p2(9)
        assert_eq!(
            spans(&s),
            vec![(1, 0, 3), (4, 3, 7), (3, 7, 13), (2, 13, 22)]
        );
        assert_turnaround_invariant(&s);
        assert_tiles(&s);
    }

    #[test]
    fn srt_drain_ties_run_in_arrival_order() {
        // p2..p4 all queue behind p1 and tie on burst 5
        let processes = vec![
            Process::new(1, 4, 0),
            Process::new(3, 5, 2),
            Process::new(2, 5, 1),
            Process::new(4, 5, 3),
        ];
        let s = shortest_remaining_time(&processes);
        let order: Vec<_> = s.rows.iter().map(|r| r.process_id).collect();
        assert_eq!(order, vec![1, 2, 3, 4]);
    }

    #[test]
    fn srt_backfills_gap_before_next_arrival() {
        let processes = vec![
            Process::new(1, 2, 0),
            Process::new(2, 10, 1),
            Process::new(3, 1, 20),
        ];
        let s = shortest_remaining_time(&processes);
        assert_eq!(spans(&s), vec![(1, 0, 2), (2, 2, 12), (3, 20, 21)]);
        assert_no_overlap(&s);
    }

    #[test]
    fn srt_backfill_is_cut_at_arrival() {
        let processes = vec![
            Process::new(1, 2, 0),
            Process::new(2, 10, 1),
            Process::new(3, 1, 5),
        ];
        let s = shortest_remaining_time(&processes);
        assert_eq!(
            spans(&s),
            vec![(1, 0, 2), (2, 2, 5), (3, 5, 6), (2, 6, 13)]
        );
        assert_tiles(&s);
    }

    #[test]
    fn srt_single_process_runs_directly() {
        let s = shortest_remaining_time(&[Process::new(9, 4, 3)]);
        assert_eq!(spans(&s), vec![(9, 3, 7)]);
        assert_eq!(s.rows[0].waiting_time, 3);
        assert_eq!(s.rows[0].turnaround_time, 4);
    }

    #[test]
    fn srt_simultaneous_arrivals_emit_no_empty_rows() {
        let processes = vec![Process::new(1, 8, 0), Process::new(2, 2, 0)];
        let s = shortest_remaining_time(&processes);
        assert!(s.rows.iter().all(|r| r.burst_served > 0));
        assert_eq!(spans(&s), vec![(2, 0, 2), (1, 2, 10)]);
    }

    #[test]
    fn srt_accepts_unsorted_input() {
        let processes = vec![Process::new(2, 3, 2), Process::new(1, 10, 0)];
        let s = shortest_remaining_time(&processes);
        assert_eq!(spans(&s), vec![(1, 0, 2), (2, 2, 5), (1, 5, 13)]);
    }

    // ── priority ──────────────────────────────────────────────────────────────

    #[test]
    fn priority_lower_value_preempts_regardless_of_burst() {
        let processes = vec![
            Process::new(1, 10, 0).with_priority(5),
            Process::new(2, 9, 2).with_priority(1),
        ];
        let s = priority(&processes);

        assert_eq!(s.rows[0].process_id, 1);
        assert_eq!(s.rows[0].completion_time, 2);
        assert_eq!(spans(&s), vec![(1, 0, 2), (2, 2, 11), (1, 11, 19)]);
        assert_eq!(s.algorithm, Algorithm::Priority);
        assert_turnaround_invariant(&s);
        assert_tiles(&s);
    }

    #[test]
    fn priority_equal_value_does_not_preempt() {
        let processes = vec![
            Process::new(1, 5, 0).with_priority(2),
            Process::new(2, 1, 1).with_priority(2),
        ];
        let s = priority(&processes);
        assert_eq!(spans(&s), vec![(1, 0, 5), (2, 5, 6)]);
    }

    #[test]
    fn priority_finished_process_is_not_preempted() {
        // p1 finishes at 2, p2 (more urgent) arrives at 4 → completion, not preemption
        let processes = vec![
            Process::new(1, 2, 0).with_priority(3),
            Process::new(2, 1, 4).with_priority(0),
        ];
        let s = priority(&processes);
        assert_eq!(spans(&s), vec![(1, 0, 2), (2, 4, 5)]);
        assert_eq!(s.rows[0].burst_served, 2);
    }

    #[test]
    fn priority_drains_by_priority_then_arrival() {
        let processes = vec![
            Process::new(1, 2, 0).with_priority(0),
            Process::new(2, 4, 1).with_priority(3),
            Process::new(3, 4, 1).with_priority(1),
            Process::new(4, 3, 2).with_priority(3),
            Process::new(5, 1, 2).with_priority(2),
        ];
        let s = priority(&processes);
        let order: Vec<_> = s.rows.iter().map(|r| r.process_id).collect();
        // p1 finishes at 2, p5 displaces p4 at the same instant;
        // leftover groups: 1 → [3], 2 → [5], 3 → [2, 4]
        assert_eq!(order, vec![1, 3, 5, 2, 4]);
        assert_turnaround_invariant(&s);
        assert_tiles(&s);
    }

    #[test]
    fn priority_multiple_preemptions_yield_one_row_per_span() {
        let processes = vec![
            Process::new(1, 10, 0).with_priority(4),
            Process::new(2, 5, 2).with_priority(2),
            Process::new(3, 2, 3).with_priority(0),
        ];
        let s = priority(&processes);
        assert_eq!(
            spans(&s),
            vec![(1, 0, 2), (2, 2, 3), (3, 3, 5), (2, 5, 9), (1, 9, 17)]
        );
        let p1_rows = s.rows.iter().filter(|r| r.process_id == 1).count();
        assert_eq!(p1_rows, 2);
        assert_eq!(s.aggregates.throughput, 5.0 / 17.0);
    }
}
