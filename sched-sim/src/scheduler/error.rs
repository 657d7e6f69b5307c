/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Structured error type returned by [`run()`](super::run).
//!
//! The algorithms themselves cannot fail: given any slice they return a
//! (possibly empty) [`Schedule`](super::Schedule).  Errors only arise at the
//! dispatch layer, where a name has to be resolved and a workload that is
//! empty or too long to fit the tick range is rejected before any report is
//! rendered.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchedulerError {
    /// `run()` was called with an empty process list.
    #[error("no processes provided: process list is empty")]
    NoProcesses,

    /// Latest arrival plus total burst exceeds the tick range.
    #[error("workload does not fit in the simulated time range (latest arrival + total burst > {})", i64::MAX)]
    HorizonOverflow,

    /// The algorithm name is not recognised.
    #[error("unknown scheduling algorithm: '{0}' (valid: fcfs, srt, priority, rr)")]
    UnknownAlgorithm(String),
}
