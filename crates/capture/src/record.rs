// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Captured run record data types.

use crate::duration_serde;
use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime};
use uuid::Uuid;

/// One recorded drill invocation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunRecord {
    /// Sequence number within the run
    pub seq: u64,

    /// Identifier of the run this record belongs to
    pub run_id: Uuid,

    /// Wall-clock timestamp
    pub timestamp: SystemTime,

    /// Elapsed time since the run started, in milliseconds
    #[serde(with = "duration_serde")]
    pub elapsed: Duration,

    /// Drill name
    pub drill: String,

    /// Target script exercised by the drill
    pub script: String,

    /// What the drill concluded
    pub outcome: RecordedOutcome,
}

/// Recorded drill outcome
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RecordedOutcome {
    Pass,
    Fail { reason: String },
    Skip { reason: String },
}

impl RecordedOutcome {
    /// Whether this record is a pass
    pub fn is_pass(&self) -> bool {
        matches!(self, RecordedOutcome::Pass)
    }

    /// Whether this record is a failure
    pub fn is_fail(&self) -> bool {
        matches!(self, RecordedOutcome::Fail { .. })
    }

    /// Whether this record is a skip
    pub fn is_skip(&self) -> bool {
        matches!(self, RecordedOutcome::Skip { .. })
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
