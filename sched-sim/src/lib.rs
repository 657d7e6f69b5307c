/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! sched-sim – offline CPU scheduling simulator
//!
//! Module layout:
//!
//! ```text
//! lib.rs
//! ├── process        – Process / TimelineSegment / ReportRow
//! ├── workload/      – CSV + YAML record sources, validation
//! ├── scheduler/     – FCFS, SRT, Priority, Round-Robin
//! ├── metrics        – row- and process-based aggregates
//! └── report         – title banner, Gantt trace, tables, YAML export
//! ```

pub mod metrics;
pub mod process;
pub mod report;
pub mod scheduler;
pub mod workload;
