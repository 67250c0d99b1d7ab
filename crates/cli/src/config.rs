// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Suite configuration types for TOML/JSON suite files.

use serde::{Deserialize, Serialize};

/// Default interpreter used to launch target scripts
pub const DEFAULT_INTERPRETER: &str = "python3";
/// Default per-invocation timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
/// Default tolerance for float expectations
pub const DEFAULT_FLOAT_TOLERANCE: f64 = 0.001;

/// Top-level suite configuration
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SuiteConfig {
    /// Name for reporting/debugging
    #[serde(default)]
    pub name: String,

    /// Interpreter override for this suite (default: the CLI value)
    #[serde(default)]
    pub interpreter: Option<String>,

    /// Timeout override in seconds for this suite (default: the CLI value)
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Ordered list of test cases
    #[serde(default)]
    pub cases: Vec<CaseSpec>,
}

/// A single declarative test case: one script invocation plus expectations
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CaseSpec {
    /// Drill name shown in reports
    pub name: String,

    /// Script file, relative to the source directory
    pub script: String,

    /// Command-line arguments passed after the script path
    #[serde(default)]
    pub args: Vec<String>,

    /// Text piped to the script's stdin (closed after writing)
    #[serde(default)]
    pub stdin: Option<String>,

    /// Output expectations, all of which must hold
    #[serde(default)]
    pub expect: Vec<ExpectSpec>,

    /// Expected exit status
    #[serde(default)]
    pub exit: ExitExpect,

    /// Per-case timeout override in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl CaseSpec {
    /// Create a case with defaults: no args, no stdin, exit zero
    pub fn new(name: impl Into<String>, script: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            script: script.into(),
            args: Vec::new(),
            stdin: None,
            expect: Vec::new(),
            exit: ExitExpect::Zero,
            timeout_secs: None,
        }
    }

    /// Set command-line arguments
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Set stdin text
    pub fn with_stdin(mut self, text: impl Into<String>) -> Self {
        self.stdin = Some(text.into());
        self
    }

    /// Add an output expectation
    pub fn expecting(mut self, spec: ExpectSpec) -> Self {
        self.expect.push(spec);
        self
    }

    /// Set the expected exit status
    pub fn with_exit(mut self, exit: ExitExpect) -> Self {
        self.exit = exit;
        self
    }
}

/// Output expectation specification
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExpectSpec {
    /// Trimmed stdout equals the literal
    Exact { text: String },

    /// Stdout lines (trailing whitespace trimmed, blanks discarded) equal
    /// the ordered sequence
    Lines { lines: Vec<String> },

    /// Stdout contains the substring
    Contains {
        text: String,
        #[serde(default)]
        case_insensitive: bool,
    },

    /// Stdout contains the substring a given number of times
    Count {
        text: String,
        count: usize,
        /// Treat `count` as a minimum instead of an exact requirement
        #[serde(default)]
        at_least: bool,
        #[serde(default)]
        case_insensitive: bool,
    },

    /// Stdout matches the regex
    Regex { pattern: String },

    /// Stdout parses as a float within tolerance of the value
    Float {
        value: f64,
        #[serde(default = "default_tolerance")]
        tolerance: f64,
    },
}

fn default_tolerance() -> f64 {
    DEFAULT_FLOAT_TOLERANCE
}

/// Expected exit status of a case
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExitExpect {
    /// Exit code zero
    #[default]
    Zero,
    /// Any non-zero exit, including termination by signal
    NonZero,
    /// A specific exit code
    Code { code: i32 },
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
