// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run log implementation.

use crate::record::{RecordedOutcome, RunRecord};
use parking_lot::Mutex;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::sync::Arc;
use std::time::{Instant, SystemTime};
use uuid::Uuid;

/// Append-only log of drill records for one harness run
pub struct RunLog {
    run_id: Uuid,
    start: Instant,
    records: Arc<Mutex<Vec<RunRecord>>>,
    file_writer: Option<Arc<Mutex<BufWriter<File>>>>,
}

impl RunLog {
    /// Create a new in-memory run log
    pub fn new() -> Self {
        Self {
            run_id: Uuid::new_v4(),
            start: Instant::now(),
            records: Arc::new(Mutex::new(Vec::new())),
            file_writer: None,
        }
    }

    /// Create a run log that also writes to a file (JSONL format)
    pub fn with_file(path: &Path) -> std::io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            run_id: Uuid::new_v4(),
            start: Instant::now(),
            records: Arc::new(Mutex::new(Vec::new())),
            file_writer: Some(Arc::new(Mutex::new(BufWriter::new(file)))),
        })
    }

    /// Identifier of this run
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Record one drill outcome
    pub fn record(&self, drill: &str, script: &str, outcome: RecordedOutcome) {
        let mut records = self.records.lock();
        let record = RunRecord {
            seq: records.len() as u64,
            run_id: self.run_id,
            timestamp: SystemTime::now(),
            elapsed: self.start.elapsed(),
            drill: drill.to_string(),
            script: script.to_string(),
            outcome,
        };

        records.push(record.clone());

        // Write to file if configured
        if let Some(ref writer) = self.file_writer {
            use std::io::Write;
            let mut w = writer.lock();
            if let Ok(json) = serde_json::to_string(&record) {
                let _ = writeln!(w, "{}", json);
                let _ = w.flush();
            }
        }
    }

    /// Get all records
    pub fn records(&self) -> Vec<RunRecord> {
        self.records.lock().clone()
    }

    /// Records with failing outcomes
    pub fn failures(&self) -> Vec<RunRecord> {
        self.records
            .lock()
            .iter()
            .filter(|r| r.outcome.is_fail())
            .cloned()
            .collect()
    }

    /// Records for a given drill name
    pub fn find_by_drill(&self, drill: &str) -> Vec<RunRecord> {
        self.records
            .lock()
            .iter()
            .filter(|r| r.drill == drill)
            .cloned()
            .collect()
    }

    /// Count records matching a predicate
    pub fn count<F: Fn(&RunRecord) -> bool>(&self, pred: F) -> usize {
        self.records.lock().iter().filter(|r| pred(r)).count()
    }

    /// Total number of records
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Clear all records
    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Default for RunLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for RunLog {
    fn clone(&self) -> Self {
        Self {
            run_id: self.run_id,
            start: self.start,
            records: Arc::clone(&self.records),
            file_writer: self.file_writer.as_ref().map(Arc::clone),
        }
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
