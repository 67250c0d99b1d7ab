// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Suite loading, compilation, and sequential execution.

use crate::config::{CaseSpec, SuiteConfig};
use crate::drills;
use crate::expect::{check_exit, Check, ExpectError};
use crate::outcome::CaseReport;
use crate::report::RunReport;
use crate::runner::ScriptRunner;
use drillcheck_capture::RunLog;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when loading or filtering a suite
#[derive(Debug, Error)]
pub enum SuiteError {
    #[error("failed to read suite file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("case '{case}': {source}")]
    Expect {
        case: String,
        #[source]
        source: ExpectError,
    },

    #[error("invalid filter pattern: {0}")]
    Filter(#[from] glob::PatternError),

    #[error("validation error: {0}")]
    Validation(String),
}

/// A declarative case with its expectations compiled
#[derive(Debug)]
pub struct CompiledCase {
    pub spec: CaseSpec,
    pub checks: Vec<Check>,
}

impl CompiledCase {
    fn compile(spec: CaseSpec) -> Result<Self, SuiteError> {
        let mut checks = Vec::with_capacity(spec.expect.len());
        for expect in &spec.expect {
            let check = Check::compile(expect).map_err(|source| SuiteError::Expect {
                case: spec.name.clone(),
                source,
            })?;
            checks.push(check);
        }
        Ok(Self { spec, checks })
    }
}

/// The kind of work a drill performs
#[derive(Debug)]
pub enum DrillKind {
    /// One invocation checked against compiled expectations
    Case(CompiledCase),
    /// Report which expected scripts are present
    Structure,
    /// Interpreter-level compile check of every script
    Syntax,
    /// Strong/weak password samples must be distinguishable
    Password,
    /// Hex encode/decode round trip
    HexRoundTrip,
}

/// A named drill in a suite
#[derive(Debug)]
pub struct Drill {
    pub name: String,
    pub kind: DrillKind,
}

impl Drill {
    pub fn case(spec: CaseSpec) -> Result<Self, SuiteError> {
        let name = spec.name.clone();
        Ok(Self {
            name,
            kind: DrillKind::Case(CompiledCase::compile(spec)?),
        })
    }
}

/// Shared context for one harness run
pub struct RunContext {
    pub runner: ScriptRunner,
    pub src_dir: PathBuf,
    pub log: Option<RunLog>,
}

/// An ordered, compiled list of drills
#[derive(Debug)]
pub struct Suite {
    name: String,
    interpreter: Option<String>,
    timeout_secs: Option<u64>,
    drills: Vec<Drill>,
}

impl Suite {
    /// The built-in drill suite covering the standard exercises
    pub fn builtin() -> Result<Self, SuiteError> {
        Ok(Self {
            name: "builtin".to_string(),
            interpreter: None,
            timeout_secs: None,
            drills: drills::builtin_drills()?,
        })
    }

    /// Load a suite from a TOML or JSON file (extension selects the format)
    pub fn load(path: &Path) -> Result<Self, SuiteError> {
        let content = std::fs::read_to_string(path)?;
        let config: SuiteConfig = if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };
        Self::from_config(config)
    }

    /// Compile a suite from a config object
    pub fn from_config(config: SuiteConfig) -> Result<Self, SuiteError> {
        if config.cases.is_empty() {
            return Err(SuiteError::Validation(
                "suite defines no cases".to_string(),
            ));
        }
        for case in &config.cases {
            if case.name.is_empty() {
                return Err(SuiteError::Validation(
                    "case names must not be empty".to_string(),
                ));
            }
            if case.script.is_empty() {
                return Err(SuiteError::Validation(format!(
                    "case '{}' has an empty script path",
                    case.name
                )));
            }
        }

        let name = if config.name.is_empty() {
            "suite".to_string()
        } else {
            config.name.clone()
        };
        let mut drills = Vec::with_capacity(config.cases.len());
        for case in config.cases {
            drills.push(Drill::case(case)?);
        }
        Ok(Self {
            name,
            interpreter: config.interpreter,
            timeout_secs: config.timeout_secs,
            drills,
        })
    }

    /// Suite name shown in reports
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Interpreter override from the suite file, if any
    pub fn interpreter(&self) -> Option<&str> {
        self.interpreter.as_deref()
    }

    /// Timeout override from the suite file, if any
    pub fn timeout_secs(&self) -> Option<u64> {
        self.timeout_secs
    }

    /// Names of all drills, in execution order
    pub fn drill_names(&self) -> Vec<&str> {
        self.drills.iter().map(|d| d.name.as_str()).collect()
    }

    /// Keep only drills whose name matches the glob pattern
    pub fn filter(mut self, pattern: &str) -> Result<Self, SuiteError> {
        let glob = glob::Pattern::new(pattern)?;
        self.drills.retain(|d| glob.matches(&d.name));
        Ok(self)
    }

    /// Execute every drill strictly sequentially, one child process at a
    /// time, and collect a run report.
    pub async fn run(&self, ctx: &RunContext) -> RunReport {
        let mut report = RunReport::new(&self.name);
        for drill in &self.drills {
            let case_report = match &drill.kind {
                DrillKind::Case(case) => run_case(ctx, &drill.name, case).await,
                DrillKind::Structure => drills::run_structure(ctx, &drill.name).await,
                DrillKind::Syntax => drills::run_syntax(ctx, &drill.name).await,
                DrillKind::Password => drills::run_password(ctx, &drill.name).await,
                DrillKind::HexRoundTrip => drills::run_hex(ctx, &drill.name).await,
            };

            if let Some(ref log) = ctx.log {
                log.record(
                    &case_report.name,
                    &case_report.script,
                    case_report.outcome.to_recorded(),
                );
            }
            report.push(case_report);
        }
        report
    }
}

/// Run one declarative case.
///
/// A missing script is environment incompleteness, not a defect, so it
/// skips. Timeouts and invocation errors map to failures with the
/// underlying message surfaced verbatim.
async fn run_case(ctx: &RunContext, name: &str, case: &CompiledCase) -> CaseReport {
    let spec = &case.spec;
    let script_path = ctx.src_dir.join(&spec.script);
    if !script_path.exists() {
        return CaseReport::skip(
            name,
            &spec.script,
            format!("script not found: {}", script_path.display()),
        );
    }

    let timeout = spec
        .timeout_secs
        .map(Duration::from_secs)
        .unwrap_or_else(|| ctx.runner.timeout());

    let result = match ctx
        .runner
        .run_with_timeout(&script_path, &spec.args, spec.stdin.as_deref(), timeout)
        .await
    {
        Ok(result) => result,
        Err(e) => return CaseReport::fail(name, &spec.script, e.to_string(), None),
    };

    if let Err(reason) = check_exit(&spec.exit, &result) {
        return CaseReport::fail(name, &spec.script, reason, Some(&result));
    }
    for check in &case.checks {
        if let Err(reason) = check.verify(&result) {
            return CaseReport::fail(name, &spec.script, reason, Some(&result));
        }
    }
    CaseReport::pass(name, &spec.script, &result)
}

#[cfg(test)]
#[path = "suite_tests.rs"]
mod tests;
