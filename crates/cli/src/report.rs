// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run report aggregation and rendering.

use crate::outcome::{CaseOutcome, CaseReport};
use std::collections::BTreeMap;
use std::io::Write;

/// Aggregated results of one harness run
pub struct RunReport {
    suite: String,
    started: chrono::DateTime<chrono::Local>,
    reports: Vec<CaseReport>,
}

impl RunReport {
    /// Create an empty report for a suite
    pub fn new(suite: impl Into<String>) -> Self {
        Self {
            suite: suite.into(),
            started: chrono::Local::now(),
            reports: Vec::new(),
        }
    }

    /// Append one drill report
    pub fn push(&mut self, report: CaseReport) {
        self.reports.push(report);
    }

    /// All drill reports, in execution order
    pub fn reports(&self) -> &[CaseReport] {
        &self.reports
    }

    /// Whether any drill failed (skips alone do not fail a run)
    pub fn has_failures(&self) -> bool {
        self.reports.iter().any(|r| r.outcome.is_fail())
    }

    /// Count reports by outcome label
    pub fn counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        counts.insert("pass", 0);
        counts.insert("fail", 0);
        counts.insert("skip", 0);
        for report in &self.reports {
            *counts.entry(report.outcome.label()).or_insert(0) += 1;
        }
        counts
    }

    /// One-line summary, e.g. `12 passed, 1 failed, 2 skipped`
    pub fn summary(&self) -> String {
        let counts = self.counts();
        format!(
            "{} passed, {} failed, {} skipped",
            counts["pass"], counts["fail"], counts["skip"]
        )
    }

    /// Write the plain-text report.
    ///
    /// Captured output is shown for failures always, and for passes only in
    /// verbose mode.
    pub fn write_text<W: Write>(&self, writer: &mut W, verbose: bool) -> std::io::Result<()> {
        writeln!(writer, "suite: {}", self.suite)?;
        for report in &self.reports {
            match &report.outcome {
                CaseOutcome::Pass => {
                    writeln!(
                        writer,
                        "PASS {} ({}ms)",
                        report.name,
                        report.duration.as_millis()
                    )?;
                    if verbose {
                        write_captured(writer, report)?;
                    }
                }
                CaseOutcome::Fail { reason } => {
                    writeln!(writer, "FAIL {}: {}", report.name, reason)?;
                    write_captured(writer, report)?;
                }
                CaseOutcome::Skip { reason } => {
                    writeln!(writer, "SKIP {}: {}", report.name, reason)?;
                }
            }
        }
        writeln!(writer)?;
        writeln!(writer, "{}", self.summary())?;
        Ok(())
    }

    /// Generate a markdown report
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();
        md.push_str(&format!("# Drill Report: {}\n\n", self.suite));
        md.push_str(&format!(
            "Run started: {}\n\n",
            self.started.format("%Y-%m-%d %H:%M:%S")
        ));

        md.push_str("## Summary\n\n");
        let counts = self.counts();
        md.push_str(&format!("- Passed: {}\n", counts["pass"]));
        md.push_str(&format!("- Failed: {}\n", counts["fail"]));
        md.push_str(&format!("- Skipped: {}\n\n", counts["skip"]));

        md.push_str("## Drills\n\n");
        md.push_str("| Drill | Script | Status | Detail |\n");
        md.push_str("|-------|--------|--------|--------|\n");
        for report in &self.reports {
            let icon = match &report.outcome {
                CaseOutcome::Pass => "✅",
                CaseOutcome::Fail { .. } => "❌",
                CaseOutcome::Skip { .. } => "⏭️",
            };
            let detail = report
                .outcome
                .reason()
                .unwrap_or("")
                .replace('\n', " ")
                .replace('|', "\\|");
            md.push_str(&format!(
                "| `{}` | `{}` | {} | {} |\n",
                report.name, report.script, icon, detail
            ));
        }
        md.push('\n');
        md
    }
}

fn write_captured<W: Write>(writer: &mut W, report: &CaseReport) -> std::io::Result<()> {
    if !report.stdout.is_empty() {
        for line in report.stdout.lines() {
            writeln!(writer, "    stdout: {}", line)?;
        }
    }
    if !report.stderr.is_empty() {
        for line in report.stderr.lines() {
            writeln!(writer, "    stderr: {}", line)?;
        }
    }
    if let Some(code) = report.exit_code {
        if code != 0 {
            writeln!(writer, "    exit code: {}", code)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
