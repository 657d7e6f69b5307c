//! Process scheduling algorithms.
//!
//! Four algorithms simulate a single processor over a fixed, pre-known list of
//! [`Process`]es.  Each produces a [`Schedule`]: the Gantt timeline, one
//! [`ReportRow`] per executed span and the row-based [`Aggregates`].
//!
//! | Algorithm | Module | Preemptive | Row per |
//! |---|---|---|---|
//! | First-come, first-serve | [`fcfs`] | no | process |
//! | Shortest-remaining-time | [`preemptive`] + [`policy::ShortestRemaining`] | at arrivals | span |
//! | Priority | [`preemptive`] + [`policy::LowestPriorityValue`] | at arrivals | span |
//! | Round-robin (quantum 3) | [`round_robin`] | every quantum | quantum |
//!
//! # Design decisions
//!
//! | Topic | Choice |
//! |---|---|
//! | State | Stateless functions; all per-run state lives in a context value local to the call |
//! | Input | `&[Process]` borrow, never mutated; preemptive runs work on [`Pending`](crate::process::Pending) copies |
//! | SRT vs Priority | One engine, parameterised by a [`PreemptionPolicy`](policy::PreemptionPolicy) |
//! | Output buffers | Growable `Vec`s, no fixed capacity |
//! | Empty input | Algorithms return an empty schedule; [`run()`] rejects it with [`SchedulerError::NoProcesses`] |
//!
//! # Example
//! ```rust
//! use sched_sim::process::Process;
//! use sched_sim::scheduler::{run, Algorithm};
//!
//! let processes = vec![Process::new(1, 5, 0), Process::new(2, 3, 1)];
//! let schedule = run(&processes, Algorithm::Fcfs).unwrap();
//! assert_eq!(schedule.rows[1].completion_time, 8);
//! ```

pub mod error;
pub mod fcfs;
pub mod policy;
pub mod preemptive;
pub mod round_robin;

pub use error::SchedulerError;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, info};

use crate::metrics::Aggregates;
use crate::process::{self, Process, ReportRow, Ticks, TimelineSegment};

// ── Algorithm ─────────────────────────────────────────────────────────────────

/// Selects one of the four scheduling algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Fcfs,
    ShortestRemainingTime,
    Priority,
    RoundRobin,
}

impl Algorithm {
    /// Every algorithm, in the order the driver runs them by default.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::ShortestRemainingTime,
        Algorithm::Priority,
        Algorithm::RoundRobin,
    ];

    /// Short name accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Fcfs => "fcfs",
            Algorithm::ShortestRemainingTime => "srt",
            Algorithm::Priority => "priority",
            Algorithm::RoundRobin => "rr",
        }
    }

    /// Banner title printed above the report.
    ///
    /// SRT keeps its historical "Shortest-job-first" label.
    pub fn title(self) -> &'static str {
        match self {
            Algorithm::Fcfs => "First-come, first-serve",
            Algorithm::ShortestRemainingTime => "Shortest-job-first",
            Algorithm::Priority => "Priority",
            Algorithm::RoundRobin => "Round-robin",
        }
    }

    /// Run this algorithm over `processes`.  Never fails; an empty slice
    /// yields an empty schedule.
    pub fn schedule(self, processes: &[Process]) -> Schedule {
        match self {
            Algorithm::Fcfs => fcfs::schedule(processes),
            Algorithm::ShortestRemainingTime => preemptive::shortest_remaining_time(processes),
            Algorithm::Priority => preemptive::priority(processes),
            Algorithm::RoundRobin => round_robin::schedule(processes),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fcfs" => Ok(Algorithm::Fcfs),
            "srt" | "sjf" => Ok(Algorithm::ShortestRemainingTime),
            "priority" => Ok(Algorithm::Priority),
            "rr" | "round-robin" | "round_robin" => Ok(Algorithm::RoundRobin),
            _ => Err(SchedulerError::UnknownAlgorithm(s.to_string())),
        }
    }
}

// ── Schedule ──────────────────────────────────────────────────────────────────

/// Result of one algorithm run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schedule {
    pub algorithm: Algorithm,
    pub timeline: Vec<TimelineSegment>,
    pub rows: Vec<ReportRow>,
    pub aggregates: Aggregates,
}

impl Schedule {
    pub fn title(&self) -> &'static str {
        self.algorithm.title()
    }

    /// Completion time of the last emitted row, or `0` for an empty schedule.
    pub fn last_completion(&self) -> Ticks {
        self.rows.last().map_or(0, |r| r.completion_time)
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Schedule `processes` with `algorithm`.
///
/// # Errors
/// [`SchedulerError::NoProcesses`] when `processes` is empty, so the caller
/// never renders a report made of zero rows.  [`SchedulerError::HorizonOverflow`]
/// when the schedule could run past the largest representable tick.
pub fn run(processes: &[Process], algorithm: Algorithm) -> Result<Schedule, SchedulerError> {
    if processes.is_empty() {
        return Err(SchedulerError::NoProcesses);
    }
    if process::horizon(processes).is_none() {
        return Err(SchedulerError::HorizonOverflow);
    }

    info!(
        algorithm = %algorithm,
        process_count = processes.len(),
        "=== scheduling run ==="
    );

    let schedule = algorithm.schedule(processes);

    info!(
        algorithm = %algorithm,
        rows = schedule.rows.len(),
        last_completion = schedule.last_completion(),
        average_waiting = schedule.aggregates.average_waiting,
        average_turnaround = schedule.aggregates.average_turnaround,
        throughput = schedule.aggregates.throughput,
        "=== run complete ==="
    );

    Ok(schedule)
}

// ── Trace (per-run output accumulator) ────────────────────────────────────────

/// Collects the timeline and report rows of one run.
#[derive(Debug, Default)]
pub(crate) struct Trace {
    timeline: Vec<TimelineSegment>,
    rows: Vec<ReportRow>,
}

impl Trace {
    /// Append a row together with its timeline segment `[start, completion)`.
    pub(crate) fn record(&mut self, start: Ticks, row: ReportRow) {
        debug!(
            pid = row.process_id,
            start = start,
            stop = row.completion_time,
            served = row.burst_served,
            wait = row.waiting_time,
            "span"
        );
        self.timeline.push(TimelineSegment {
            process_id: row.process_id,
            start,
            stop: row.completion_time,
        });
        self.rows.push(row);
    }

    pub(crate) fn finish(self, algorithm: Algorithm) -> Schedule {
        let aggregates = Aggregates::from_rows(&self.rows);
        Schedule {
            algorithm,
            timeline: self.timeline,
            rows: self.rows,
            aggregates,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
