/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Preemption policies plugged into the shared preemptive engine.
//!
//! A policy answers two questions:
//!
//! 1. **Preemption test**: at an arrival instant, should the newcomer take
//!    the processor from the running process?
//! 2. **Drain key**: once arrivals are exhausted, in which order are the
//!    leftover processes run?  Smaller keys run first; equal keys fall back
//!    to ascending arrival time, then input order.
//!
//! | Policy | Preempts when | Drain key |
//! |---|---|---|
//! | [`ShortestRemaining`] | `arriving.burst < running.remaining` | remaining burst |
//! | [`LowestPriorityValue`] | `arriving.priority < running.priority` | priority |

use super::Algorithm;
use crate::process::{Pending, Process, Ticks};

pub trait PreemptionPolicy {
    /// Algorithm tag written into the resulting schedule.
    fn algorithm(&self) -> Algorithm;

    /// `remaining_now` is the running process's burst still owed at the
    /// arrival instant.  The engine only asks while it is positive.
    fn preempts(&self, arriving: &Process, running: &Pending, remaining_now: Ticks) -> bool;

    fn drain_key(&self, pending: &Pending) -> i64;
}

/// Shortest-remaining-time: compare the newcomer's *total* burst with the
/// running process's *remaining* burst.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestRemaining;

impl PreemptionPolicy for ShortestRemaining {
    fn algorithm(&self) -> Algorithm {
        Algorithm::ShortestRemainingTime
    }

    fn preempts(&self, arriving: &Process, _running: &Pending, remaining_now: Ticks) -> bool {
        arriving.burst_duration < remaining_now
    }

    fn drain_key(&self, pending: &Pending) -> i64 {
        pending.remaining
    }
}

/// Preemptive priority: strictly lower priority value wins, whatever the
/// bursts involved.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowestPriorityValue;

impl PreemptionPolicy for LowestPriorityValue {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Priority
    }

    fn preempts(&self, arriving: &Process, running: &Pending, _remaining_now: Ticks) -> bool {
        arriving.priority < running.process.priority
    }

    fn drain_key(&self, pending: &Pending) -> i64 {
        pending.process.priority
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
