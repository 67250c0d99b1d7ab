// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run-record capture for test harness runs.
//!
//! This crate provides the record types and JSONL log used to capture the
//! outcome of every drill invocation in a harness run, useful for
//! inspecting and diffing runs after the fact.

mod duration_serde;
mod log;
mod record;

pub use log::RunLog;
pub use record::{RecordedOutcome, RunRecord};
