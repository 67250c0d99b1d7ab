// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-drill outcomes and reports.

use crate::runner::ExecutionResult;
use drillcheck_capture::RecordedOutcome;
use std::time::Duration;

/// Outcome of one drill
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaseOutcome {
    /// Output and exit status matched every expectation
    Pass,
    /// A mismatch, timeout, or invocation error
    Fail { reason: String },
    /// Target script absent or drill not applicable to this environment
    Skip { reason: String },
}

impl CaseOutcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, CaseOutcome::Pass)
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, CaseOutcome::Fail { .. })
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, CaseOutcome::Skip { .. })
    }

    /// Short status label for reports
    pub fn label(&self) -> &'static str {
        match self {
            CaseOutcome::Pass => "pass",
            CaseOutcome::Fail { .. } => "fail",
            CaseOutcome::Skip { .. } => "skip",
        }
    }

    /// Failure or skip reason, if any
    pub fn reason(&self) -> Option<&str> {
        match self {
            CaseOutcome::Pass => None,
            CaseOutcome::Fail { reason } | CaseOutcome::Skip { reason } => Some(reason),
        }
    }

    /// Convert to the capture-log representation
    pub fn to_recorded(&self) -> RecordedOutcome {
        match self {
            CaseOutcome::Pass => RecordedOutcome::Pass,
            CaseOutcome::Fail { reason } => RecordedOutcome::Fail {
                reason: reason.clone(),
            },
            CaseOutcome::Skip { reason } => RecordedOutcome::Skip {
                reason: reason.clone(),
            },
        }
    }
}

/// Report for one executed drill, including captured output for diagnosis
#[derive(Clone, Debug)]
pub struct CaseReport {
    pub name: String,
    pub script: String,
    pub outcome: CaseOutcome,
    pub stdout: String,
    pub stderr: String,
    pub exit_code: Option<i32>,
    pub duration: Duration,
}

impl CaseReport {
    /// Passing report carrying the captured result
    pub fn pass(name: impl Into<String>, script: impl Into<String>, result: &ExecutionResult) -> Self {
        Self {
            name: name.into(),
            script: script.into(),
            outcome: CaseOutcome::Pass,
            stdout: result.stdout.clone(),
            stderr: result.stderr.clone(),
            exit_code: result.exit_code,
            duration: result.duration,
        }
    }

    /// Passing report with a synthesized note instead of script output
    pub fn pass_with_note(
        name: impl Into<String>,
        script: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            script: script.into(),
            outcome: CaseOutcome::Pass,
            stdout: note.into(),
            stderr: String::new(),
            exit_code: Some(0),
            duration: Duration::ZERO,
        }
    }

    /// Failing report; captured output is attached when an invocation got
    /// far enough to produce one
    pub fn fail(
        name: impl Into<String>,
        script: impl Into<String>,
        reason: impl Into<String>,
        result: Option<&ExecutionResult>,
    ) -> Self {
        Self {
            name: name.into(),
            script: script.into(),
            outcome: CaseOutcome::Fail {
                reason: reason.into(),
            },
            stdout: result.map(|r| r.stdout.clone()).unwrap_or_default(),
            stderr: result.map(|r| r.stderr.clone()).unwrap_or_default(),
            exit_code: result.and_then(|r| r.exit_code),
            duration: result.map(|r| r.duration).unwrap_or(Duration::ZERO),
        }
    }

    /// Skipped report
    pub fn skip(
        name: impl Into<String>,
        script: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            script: script.into(),
            outcome: CaseOutcome::Skip {
                reason: reason.into(),
            },
            stdout: String::new(),
            stderr: String::new(),
            exit_code: None,
            duration: Duration::ZERO,
        }
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
