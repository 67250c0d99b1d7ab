// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Expectation compilation and checking.
//!
//! Declarative [`ExpectSpec`]s are compiled up front into [`Check`]
//! closures so that invalid patterns are rejected at suite load time, not
//! mid-run. Custom drills build checks directly with [`Check::predicate`].

use crate::config::{ExitExpect, ExpectSpec};
use crate::runner::ExecutionResult;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur when compiling an expectation
#[derive(Debug, Error)]
pub enum ExpectError {
    #[error("invalid regex pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("expectation text must not be empty")]
    EmptyText,
}

type CheckFn = Arc<dyn Fn(&ExecutionResult) -> Result<(), String> + Send + Sync>;

/// A compiled output check.
///
/// Verification returns `Ok(())` on a match, or a descriptive failure
/// reason including the offending captured output.
#[derive(Clone)]
pub struct Check {
    label: String,
    check: CheckFn,
}

impl std::fmt::Debug for Check {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Check")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl Check {
    /// Build a check from an arbitrary predicate
    pub fn predicate<F>(label: impl Into<String>, check: F) -> Self
    where
        F: Fn(&ExecutionResult) -> Result<(), String> + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            check: Arc::new(check),
        }
    }

    /// Short description of what the check asserts
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Run the check against a captured result
    pub fn verify(&self, result: &ExecutionResult) -> Result<(), String> {
        (self.check)(result)
    }

    /// Compile a declarative expectation into a check
    pub fn compile(spec: &ExpectSpec) -> Result<Self, ExpectError> {
        match spec {
            ExpectSpec::Exact { text } => {
                let want = text.clone();
                Ok(Self::predicate(format!("stdout equals {:?}", text), move |r| {
                    if r.stdout == want {
                        Ok(())
                    } else {
                        Err(format!("expected {:?}, got {:?}", want, r.stdout))
                    }
                }))
            }
            ExpectSpec::Lines { lines } => {
                let want = lines.clone();
                Ok(Self::predicate(
                    format!("stdout has {} expected lines", lines.len()),
                    move |r| {
                        let got = r.lines();
                        let matches = got.len() == want.len()
                            && got.iter().zip(want.iter()).all(|(g, w)| *g == w.as_str());
                        if matches {
                            Ok(())
                        } else {
                            Err(format!("expected lines {:?}, got {:?}", want, got))
                        }
                    },
                ))
            }
            ExpectSpec::Contains {
                text,
                case_insensitive,
            } => {
                if text.is_empty() {
                    return Err(ExpectError::EmptyText);
                }
                let want = text.clone();
                let fold = *case_insensitive;
                Ok(Self::predicate(format!("stdout contains {:?}", text), move |r| {
                    if contains(&r.stdout, &want, fold) {
                        Ok(())
                    } else {
                        Err(format!("expected {:?} in output, got {:?}", want, r.stdout))
                    }
                }))
            }
            ExpectSpec::Count {
                text,
                count,
                at_least,
                case_insensitive,
            } => {
                if text.is_empty() {
                    return Err(ExpectError::EmptyText);
                }
                let want = text.clone();
                let expected = *count;
                let minimum = *at_least;
                let fold = *case_insensitive;
                Ok(Self::predicate(
                    format!("stdout contains {:?} x{}", text, count),
                    move |r| {
                        let got = occurrences(&r.stdout, &want, fold);
                        let ok = if minimum { got >= expected } else { got == expected };
                        if ok {
                            Ok(())
                        } else {
                            Err(format!(
                                "expected {}{} occurrence(s) of {:?}, found {} in {:?}",
                                if minimum { "at least " } else { "" },
                                expected,
                                want,
                                got,
                                r.stdout
                            ))
                        }
                    },
                ))
            }
            ExpectSpec::Regex { pattern } => {
                let re = regex::Regex::new(pattern)?;
                Ok(Self::predicate(format!("stdout matches /{}/", pattern), move |r| {
                    if re.is_match(&r.stdout) {
                        Ok(())
                    } else {
                        Err(format!("expected match for /{}/, got {:?}", re, r.stdout))
                    }
                }))
            }
            ExpectSpec::Float { value, tolerance } => {
                let want = *value;
                let tol = *tolerance;
                Ok(Self::predicate(format!("stdout is a float near {}", value), move |r| {
                    match r.stdout.parse::<f64>() {
                        Ok(got) if (got - want).abs() <= tol => Ok(()),
                        Ok(got) => Err(format!(
                            "expected a value within {} of {}, got {}",
                            tol, want, got
                        )),
                        Err(_) => Err(format!("output is not a valid number: {:?}", r.stdout)),
                    }
                }))
            }
        }
    }
}

/// Verify the exit status of a result against an expectation.
///
/// Stderr is included in the zero-expected failure message since that is
/// where the script's own diagnostic usually is.
pub fn check_exit(expect: &ExitExpect, result: &ExecutionResult) -> Result<(), String> {
    match expect {
        ExitExpect::Zero => {
            if result.success() {
                Ok(())
            } else {
                Err(format!(
                    "script failed with exit code {:?}: {}",
                    result.exit_code, result.stderr
                ))
            }
        }
        ExitExpect::NonZero => {
            if result.success() {
                Err("expected a non-zero exit, got 0".to_string())
            } else {
                Ok(())
            }
        }
        ExitExpect::Code { code } => {
            if result.exit_code == Some(*code) {
                Ok(())
            } else {
                Err(format!(
                    "expected exit code {}, got {:?}",
                    code, result.exit_code
                ))
            }
        }
    }
}

fn contains(haystack: &str, needle: &str, case_insensitive: bool) -> bool {
    if case_insensitive {
        haystack.to_lowercase().contains(&needle.to_lowercase())
    } else {
        haystack.contains(needle)
    }
}

fn occurrences(haystack: &str, needle: &str, case_insensitive: bool) -> usize {
    if case_insensitive {
        haystack
            .to_lowercase()
            .matches(&needle.to_lowercase())
            .count()
    } else {
        haystack.matches(needle).count()
    }
}

#[cfg(test)]
#[path = "expect_tests.rs"]
mod tests;
