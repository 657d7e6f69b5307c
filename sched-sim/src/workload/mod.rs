//! Workload loading: turns a record source into a validated `Vec<Process>`.
//!
//! Two on-disk layouts are accepted, selected by file extension.
//!
//! **CSV** (default): one process per line, no header,
//! `id, burst, arrival[, priority]`.  Lines starting with `#` are ignored:
//! ```text
//! 1, 5, 0, 2
//! 2, 3, 1
//! ```
//!
//! **YAML** (`.yaml` / `.yml`):
//! ```yaml
//! processes:
//!   - id: 1
//!     burst: 5
//!     arrival: 0
//!     priority: 2
//!   - { id: 2, burst: 3, arrival: 1 }
//! ```
//!
//! A missing priority defaults to `0`.  Every record is validated
//! (burst > 0, arrival ≥ 0, unique id, latest arrival plus total burst within
//! the tick range); the first failure aborts the load.

pub mod error;

pub use error::WorkloadError;

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::process::{Process, Ticks};

// ── Private YAML deserialization types ────────────────────────────────────────

/// Top-level wrapper that maps directly onto the YAML file layout.
#[derive(Debug, Deserialize)]
struct WorkloadFile {
    #[serde(default)]
    processes: Vec<ProcessEntry>,
}

#[derive(Debug, Deserialize)]
struct ProcessEntry {
    id: i64,
    burst: i64,
    arrival: i64,
    #[serde(default)]
    priority: i64,
}

// ── Format detection ──────────────────────────────────────────────────────────

/// On-disk layout of a workload file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkloadFormat {
    Csv,
    Yaml,
}

impl WorkloadFormat {
    /// `.yaml` / `.yml` (any case) → YAML, anything else → CSV.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => WorkloadFormat::Yaml,
            _ => WorkloadFormat::Csv,
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Read and validate the workload at `path`.
///
/// # Errors
/// Any I/O, parse or validation failure; see [`WorkloadError`].
pub fn load_from_file(path: &Path) -> Result<Vec<Process>, WorkloadError> {
    let format = WorkloadFormat::from_path(path);
    info!("Loading workload from: {} ({:?})", path.display(), format);

    let content = std::fs::read_to_string(path).map_err(|source| WorkloadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let processes = match format {
        WorkloadFormat::Csv => parse_csv(content.as_bytes())?,
        WorkloadFormat::Yaml => parse_yaml(&content)?,
    };

    if processes.is_empty() {
        warn!("Workload file {} contains no processes", path.display());
    } else {
        info!("Successfully loaded {} process(es)", processes.len());
    }

    Ok(processes)
}

/// Parse CSV records `id, burst, arrival[, priority]`.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<Process>, WorkloadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut processes = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record_no = i + 1;
        let record = result.map_err(|source| WorkloadError::Csv {
            record: record_no,
            source,
        })?;

        if record.len() != 3 && record.len() != 4 {
            return Err(WorkloadError::FieldCount {
                record: record_no,
                found: record.len(),
            });
        }

        let id = parse_field(record_no, "id", &record[0])?;
        let burst = parse_field(record_no, "burst", &record[1])?;
        let arrival = parse_field(record_no, "arrival", &record[2])?;
        let priority = match record.get(3) {
            Some(v) => parse_field(record_no, "priority", v)?,
            None => 0,
        };

        processes.push(Process::new(id, burst, arrival).with_priority(priority));
    }

    validate(&processes)?;
    Ok(processes)
}

/// Parse the YAML layout shown in the module docs.
pub fn parse_yaml(content: &str) -> Result<Vec<Process>, WorkloadError> {
    let file: WorkloadFile = serde_yaml::from_str(content)?;

    let processes: Vec<Process> = file
        .processes
        .into_iter()
        .map(|e| Process::new(e.id, e.burst, e.arrival).with_priority(e.priority))
        .collect();

    validate(&processes)?;
    Ok(processes)
}

/// Check the data-model invariants of every record.
pub fn validate(processes: &[Process]) -> Result<(), WorkloadError> {
    let mut seen = HashSet::with_capacity(processes.len());
    let mut total_burst: Ticks = 0;
    let mut latest_arrival: Ticks = 0;

    for (i, p) in processes.iter().enumerate() {
        let record = i + 1;
        if p.burst_duration <= 0 {
            return Err(WorkloadError::NonPositiveBurst {
                record,
                id: p.id,
                burst: p.burst_duration,
            });
        }
        if p.arrival_time < 0 {
            return Err(WorkloadError::NegativeArrival {
                record,
                id: p.id,
                arrival: p.arrival_time,
            });
        }
        if !seen.insert(p.id) {
            return Err(WorkloadError::DuplicateId { record, id: p.id });
        }

        // Every clock value of every algorithm stays below this bound.
        latest_arrival = latest_arrival.max(p.arrival_time);
        total_burst = total_burst
            .checked_add(p.burst_duration)
            .filter(|total| total.checked_add(latest_arrival).is_some())
            .ok_or(WorkloadError::HorizonOverflow { record, id: p.id })?;

        debug!(
            "  Process: {} | Burst: {} | Arrival: {} | Priority: {}",
            p.id, p.burst_duration, p.arrival_time, p.priority
        );
    }

    Ok(())
}

fn parse_field(record: usize, field: &'static str, value: &str) -> Result<i64, WorkloadError> {
    value.parse::<i64>().map_err(|_| WorkloadError::InvalidField {
        record,
        field,
        value: value.to_string(),
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
