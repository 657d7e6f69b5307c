/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Core data structures shared by every scheduling algorithm.
//!
//! Three types model the two sides of one simulation run:
//!
//! ```text
//! record source ──►  Process  ──(algorithm)──►  TimelineSegment + ReportRow ──►  report
//!                     ↑ input                      ↑ output
//!                     read-only                    one per executed span
//! ```
//!
//! # Ownership model
//! Algorithms borrow `&[Process]` and never mutate it.  Preemptive algorithms
//! copy each process into a private working record ([`Pending`]) that tracks
//! the burst still owed, so the caller's slice can be reused for the next
//! algorithm run.

use serde::{Deserialize, Serialize};

/// Time unit of the simulation.  Plain integer ticks.
pub type Ticks = i64;

/// Process identifier as supplied by the record source.
pub type Pid = i64;

// ── Process (input) ───────────────────────────────────────────────────────────

/// One process of the workload.
///
/// `priority` follows the "lower value wins" convention used by the priority
/// scheduler.  Record sources that omit it yield `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Process {
    pub id: Pid,

    /// Instant the process becomes ready.  Never negative.
    pub arrival_time: Ticks,

    /// Total processor time the process needs.  Always positive.
    pub burst_duration: Ticks,

    pub priority: i64,
}

impl Process {
    pub fn new(id: Pid, burst_duration: Ticks, arrival_time: Ticks) -> Self {
        Self {
            id,
            arrival_time,
            burst_duration,
            priority: 0,
        }
    }

    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }
}

/// Latest instant any algorithm can reach on `processes`: the largest
/// arrival plus the sum of all bursts.  `None` when that does not fit in
/// [`Ticks`], in which case the workload cannot be simulated.
pub fn horizon(processes: &[Process]) -> Option<Ticks> {
    let latest_arrival = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);
    processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_duration))
}

// ── Pending (working copy) ────────────────────────────────────────────────────

/// Mutable working record used by the preemptive schedulers.
///
/// `order` is the position of the process in the caller's input slice and is
/// the final tie-breaker wherever two records compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pending {
    pub process: Process,
    pub remaining: Ticks,
    pub order: usize,
}

impl Pending {
    pub fn new(process: Process, order: usize) -> Self {
        Self {
            process,
            remaining: process.burst_duration,
            order,
        }
    }

    pub fn id(&self) -> Pid {
        self.process.id
    }

    pub fn is_finished(&self) -> bool {
        self.remaining <= 0
    }
}

// ── TimelineSegment (output) ──────────────────────────────────────────────────

/// One contiguous interval `[start, stop)` during which `process_id` held the
/// processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSegment {
    pub process_id: Pid,
    pub start: Ticks,
    pub stop: Ticks,
}

impl TimelineSegment {
    pub fn len(&self) -> Ticks {
        self.stop - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.stop == self.start
    }
}

// ── ReportRow (output) ────────────────────────────────────────────────────────

/// Per-span timing metrics.
///
/// A process that runs to completion in one go yields one row; a process that
/// is preempted and later resumed yields one row per span it executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub process_id: Pid,
    pub priority: i64,

    /// Processor time consumed during this span only.
    pub burst_served: Ticks,

    pub arrival_time: Ticks,

    /// FCFS: time spent queued.  Preemptive and round-robin rows: the span's
    /// own start time.
    pub waiting_time: Ticks,

    /// Always `completion_time - arrival_time`.
    pub turnaround_time: Ticks,

    /// End of this span.
    pub completion_time: Ticks,
}

impl ReportRow {
    /// Row for a span `[start, stop)` of `process`, using the span start as the
    /// waiting time.
    pub fn for_span(process: &Process, start: Ticks, stop: Ticks) -> Self {
        ReportRow {
            process_id: process.id,
            priority: process.priority,
            burst_served: stop - start,
            arrival_time: process.arrival_time,
            waiting_time: start,
            turnaround_time: stop - process.arrival_time,
            completion_time: stop,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
