/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Round-robin with a fixed time quantum.
//!
//! Processes are visited cyclically in ascending arrival order.  Each visit
//! grants at most [`TIME_QUANTUM`] ticks; a process with less than a quantum
//! left runs to completion and leaves the queue.  Every visit produces one
//! report row, so a burst of 7 yields rows serving 3, 3 and 1.
//!
//! The service clock is shared by all processes and every row's
//! `waiting_time` is the clock at the start of its slice.
//!
//! # Late arrivals
//! A process whose arrival lies in the future is skipped while anything else
//! is ready; when nothing is, the clock idles forward to its arrival.  This
//! departs from the historical report output, which served every queued
//! process on each cycle regardless of arrival.  For `[{1, burst 4, arr 0},
//! {2, burst 2, arr 10}]` the historical trace is `[1:0-3],[2:3-5],[1:5-6]`;
//! this module produces `[1:0-3],[1:3-4],[2:10-12]`.

use tracing::debug;

use super::{Algorithm, Schedule, Trace};
use crate::process::{Pending, Process, ReportRow, Ticks};

/// Maximum processor time granted per visit.
pub const TIME_QUANTUM: Ticks = 3;

/// Schedule `processes` round-robin.
pub fn schedule(processes: &[Process]) -> Schedule {
    let mut queue: Vec<Pending> = processes
        .iter()
        .enumerate()
        .map(|(order, &p)| Pending::new(p, order))
        .collect();
    queue.sort_by_key(|p| (p.process.arrival_time, p.order));

    let mut run = RoundRobinRun {
        queue,
        clock: 0,
        trace: Trace::default(),
    };
    while !run.queue.is_empty() {
        run.pass();
    }
    run.trace.finish(Algorithm::RoundRobin)
}

struct RoundRobinRun {
    /// Unfinished processes, ascending arrival.
    queue: Vec<Pending>,
    clock: Ticks,
    trace: Trace,
}

impl RoundRobinRun {
    /// One cycle over the queue.
    fn pass(&mut self) {
        let mut i = 0;
        while i < self.queue.len() {
            let arrival = self.queue[i].process.arrival_time;
            if arrival > self.clock {
                let clock = self.clock;
                if self.queue.iter().any(|j| j.process.arrival_time <= clock) {
                    i += 1;
                    continue;
                }
                debug!(from = self.clock, until = arrival, "processor idle");
                self.clock = arrival;
            }

            if self.serve(i) {
                self.queue.remove(i);
            } else {
                i += 1;
            }
        }
    }

    /// Run queue entry `i` for one slice.  Returns `true` once it is finished.
    fn serve(&mut self, i: usize) -> bool {
        let job = &mut self.queue[i];
        let slice = job.remaining.min(TIME_QUANTUM);
        let start = self.clock;
        let stop = start + slice;

        job.remaining -= slice;
        let finished = job.is_finished();
        let row = ReportRow::for_span(&job.process, start, stop);

        self.trace.record(start, row);
        self.clock = stop;
        finished
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
