// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Exercise script test harness.
//!
//! A harness that exercises small introductory programming exercises by
//! invoking each target script as a subprocess and asserting on its
//! standard output and exit code. Scripts run strictly sequentially, one
//! isolated child process at a time, under a wall-clock timeout.
//!
#![doc = include_str!("../docs/USAGE.md")]

/// Re-exported run-record types from the drillcheck-capture crate.
pub mod capture {
    pub use drillcheck_capture::{RecordedOutcome, RunLog, RunRecord};
}

#[doc(hidden)]
pub mod cli;
pub mod config;
pub mod drills;
pub mod expect;
pub mod outcome;
#[doc(hidden)]
pub mod output_diagnostic;
pub mod report;
pub mod runner;
pub mod suite;
