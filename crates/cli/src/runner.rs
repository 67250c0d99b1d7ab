// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Script execution engine.
//!
//! Launches one target script at a time as an isolated child process,
//! optionally feeds it scripted stdin, and collects stdout/stderr/exit code
//! under a wall-clock timeout. On timeout the child is killed rather than
//! awaited indefinitely.

use std::path::Path;
use std::process::Stdio;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Default wall-clock timeout per invocation
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Captured output of one script invocation
#[derive(Clone, Debug)]
pub struct ExecutionResult {
    /// Captured stdout, trimmed of surrounding whitespace
    pub stdout: String,

    /// Captured stderr, trimmed of surrounding whitespace
    pub stderr: String,

    /// Exit code; None when the process was terminated by a signal
    pub exit_code: Option<i32>,

    /// Wall-clock duration of the invocation
    pub duration: Duration,
}

impl ExecutionResult {
    /// Whether the process exited with code zero
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Stdout split into lines with trailing whitespace trimmed and blank
    /// lines discarded.
    pub fn lines(&self) -> Vec<&str> {
        self.stdout
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .collect()
    }
}

/// Errors that can occur when invoking a target script
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("failed to spawn '{interpreter}': {source}")]
    Spawn {
        interpreter: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error while running script: {0}")]
    Io(#[from] std::io::Error),

    #[error("process timed out after {}s", .timeout.as_secs())]
    Timeout { timeout: Duration },
}

/// Runner that invokes target scripts as `<interpreter> <script> [args...]`
#[derive(Clone, Debug)]
pub struct ScriptRunner {
    interpreter: String,
    timeout: Duration,
}

impl ScriptRunner {
    /// Create a runner for the given interpreter with the default timeout
    pub fn new(interpreter: impl Into<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the default per-invocation timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The configured interpreter program
    pub fn interpreter(&self) -> &str {
        &self.interpreter
    }

    /// The configured default timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run a target script with the default timeout.
    ///
    /// When `input` is provided it is written to the child's stdin, which is
    /// then closed to signal EOF. Without input the child reads from
    /// /dev/null so a script that blocks on stdin fails fast instead of
    /// hanging on an inherited terminal.
    pub async fn run(
        &self,
        script: &Path,
        args: &[String],
        input: Option<&str>,
    ) -> Result<ExecutionResult, RunnerError> {
        self.run_with_timeout(script, args, input, self.timeout).await
    }

    /// Run a target script with an explicit timeout
    pub async fn run_with_timeout(
        &self,
        script: &Path,
        args: &[String],
        input: Option<&str>,
        timeout: Duration,
    ) -> Result<ExecutionResult, RunnerError> {
        let mut argv: Vec<String> = vec![script.display().to_string()];
        argv.extend(args.iter().cloned());
        self.run_interpreter(&argv, input, timeout).await
    }

    /// Run the interpreter itself with a raw argument vector.
    ///
    /// Used for interpreter-level checks such as `-m py_compile`.
    pub async fn run_interpreter(
        &self,
        argv: &[String],
        input: Option<&str>,
        timeout: Duration,
    ) -> Result<ExecutionResult, RunnerError> {
        let start = Instant::now();

        let mut cmd = Command::new(&self.interpreter);
        cmd.args(argv)
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true); // Ensure the child dies with its handle on timeout

        let mut child = cmd.spawn().map_err(|e| RunnerError::Spawn {
            interpreter: self.interpreter.clone(),
            source: e,
        })?;

        if let Some(text) = input {
            if let Some(mut stdin) = child.stdin.take() {
                stdin.write_all(text.as_bytes()).await?;
                drop(stdin); // Close stdin to signal EOF
            }
        }

        let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
            Ok(result) => result?,
            Err(_) => return Err(RunnerError::Timeout { timeout }),
        };

        Ok(ExecutionResult {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            exit_code: output.status.code(),
            duration: start.elapsed(),
        })
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
