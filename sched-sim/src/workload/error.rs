/*
SPDX-FileCopyrightText: Copyright 2026 LG Electronics Inc.
SPDX-License-Identifier: MIT
*/

//! Errors raised while loading a workload.
//!
//! Every variant is fatal for the whole run: there is no skip-and-continue
//! for a single bad record.  Record numbers are 1-based so they match what a
//! user sees in an editor.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkloadError {
    /// The workload file could not be opened or read.
    #[error("cannot read workload file '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected a record (e.g. invalid UTF-8, unbalanced
    /// quotes).
    #[error("record {record}: malformed CSV")]
    Csv {
        record: usize,
        #[source]
        source: csv::Error,
    },

    /// The YAML document does not match the expected layout.
    #[error("malformed YAML workload")]
    Yaml(#[from] serde_yaml::Error),

    #[error("record {record}: expected 3 or 4 fields (id, burst, arrival[, priority]), found {found}")]
    FieldCount { record: usize, found: usize },

    #[error("record {record}: field '{field}' is not an integer: '{value}'")]
    InvalidField {
        record: usize,
        field: &'static str,
        value: String,
    },

    #[error("record {record}: process {id} has non-positive burst duration {burst}")]
    NonPositiveBurst { record: usize, id: i64, burst: i64 },

    #[error("record {record}: process {id} has negative arrival time {arrival}")]
    NegativeArrival { record: usize, id: i64, arrival: i64 },

    #[error("record {record}: process {id} pushes latest arrival + total burst past {}", i64::MAX)]
    HorizonOverflow { record: usize, id: i64 },

    #[error("record {record}: duplicate process id {id}")]
    DuplicateId { record: usize, id: i64 },
}
