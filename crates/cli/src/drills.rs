// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The built-in drill suite for the standard exercise scripts.
//!
//! Single-invocation properties are declarative [`CaseSpec`]s; properties
//! that span multiple invocations (password distinguishability, hex round
//! trips, whole-directory checks) drive the runner directly.

use crate::config::{CaseSpec, ExitExpect, ExpectSpec};
use crate::outcome::CaseReport;
use crate::runner::ExecutionResult;
use crate::suite::{Drill, DrillKind, RunContext, SuiteError};
use std::path::{Path, PathBuf};

/// Exercise scripts the built-in suite knows about
pub const EXPECTED_SCRIPTS: [&str; 10] = [
    "hello.py",
    "hello-n.py",
    "do-you-want-to-stop.py",
    "print-1-10.py",
    "print-1-10-growing.py",
    "pattern.py",
    "lists.py",
    "counts.py",
    "password.py",
    "hex.py",
];

const GREETING: &str = "Hello, World!";
const PASSWORD_SCRIPT: &str = "password.py";
const HEX_SCRIPT: &str = "hex.py";
const STRONG_PASSWORD: &str = "Abc123#";
const WEAK_PASSWORD: &str = "Ab1#";

/// Build the full built-in drill list, in execution order
pub(crate) fn builtin_drills() -> Result<Vec<Drill>, SuiteError> {
    let mut drills = vec![
        Drill {
            name: "structure".to_string(),
            kind: DrillKind::Structure,
        },
        Drill {
            name: "syntax".to_string(),
            kind: DrillKind::Syntax,
        },
    ];

    for spec in builtin_cases() {
        drills.push(Drill::case(spec)?);
    }

    drills.push(Drill {
        name: "password".to_string(),
        kind: DrillKind::Password,
    });
    drills.push(Drill {
        name: "hex".to_string(),
        kind: DrillKind::HexRoundTrip,
    });
    Ok(drills)
}

fn builtin_cases() -> Vec<CaseSpec> {
    let mut cases = vec![CaseSpec::new("hello", "hello.py").expecting(ExpectSpec::Exact {
        text: GREETING.to_string(),
    })];

    // The repeated greeting must appear exactly n times for each input
    for n in [0usize, 1, 3, 5] {
        cases.push(
            CaseSpec::new(format!("hello-n/{}", n), "hello-n.py")
                .with_stdin(format!("{}\n", n))
                .expecting(ExpectSpec::Count {
                    text: GREETING.to_string(),
                    count: n,
                    at_least: false,
                    case_insensitive: false,
                }),
        );
    }

    cases.push(
        CaseSpec::new("stop-loop/prompts", "do-you-want-to-stop.py")
            .with_stdin("no\nno\nyes\n")
            .expecting(ExpectSpec::Count {
                text: "do you want to stop?".to_string(),
                count: 3,
                at_least: true,
                case_insensitive: true,
            }),
    );
    // A lone "yes" must exit cleanly
    cases.push(CaseSpec::new("stop-loop/immediate", "do-you-want-to-stop.py").with_stdin("yes\n"));

    cases.push(
        CaseSpec::new("count-1-10", "print-1-10.py").expecting(ExpectSpec::Lines {
            lines: (1..=10).map(|i| i.to_string()).collect(),
        }),
    );
    cases.push(
        CaseSpec::new("count-growing", "print-1-10-growing.py").expecting(ExpectSpec::Lines {
            lines: growing_lines(),
        }),
    );
    cases.push(CaseSpec::new("pattern", "pattern.py").expecting(ExpectSpec::Lines {
        lines: diamond_lines(),
    }));

    cases.push(
        CaseSpec::new("lists/mean", "lists.py")
            .with_args(["mean", "1", "2", "3", "4", "5", "6"])
            .expecting(ExpectSpec::Float {
                value: 3.5,
                tolerance: 0.001,
            }),
    );
    cases.push(
        CaseSpec::new("lists/times", "lists.py")
            .with_args(["times", "1", "2", "3"])
            .expecting(ExpectSpec::Exact {
                text: "3 6 9".to_string(),
            }),
    );
    cases.push(
        CaseSpec::new("lists/even", "lists.py")
            .with_args(["even", "1", "2", "3", "4", "5", "6"])
            .expecting(ExpectSpec::Exact {
                text: "2 4 6".to_string(),
            }),
    );
    cases.push(
        CaseSpec::new("lists/invalid-command", "lists.py")
            .with_args(["invalid_command", "1", "2"])
            .with_exit(ExitExpect::NonZero),
    );
    cases.push(CaseSpec::new("lists/no-args", "lists.py").with_exit(ExitExpect::NonZero));

    let mut counts = CaseSpec::new("counts", "counts.py").with_stdin("hello\n");
    for ch in ["h", "e", "l", "o"] {
        counts = counts.expecting(ExpectSpec::Contains {
            text: ch.to_string(),
            case_insensitive: true,
        });
    }
    cases.push(counts);

    cases
}

/// Lines "1", "1 2", ... up to "1 2 ... 10"
fn growing_lines() -> Vec<String> {
    (1..=10)
        .map(|i| {
            (1..=i)
                .map(|j| j.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// The 9-line growing/shrinking asterisk diamond
fn diamond_lines() -> Vec<String> {
    [1usize, 2, 3, 4, 5, 4, 3, 2, 1]
        .iter()
        .map(|n| vec!["*"; *n].join(" "))
        .collect()
}

/// Report which expected scripts exist; only an entirely empty source
/// directory is a defect.
pub(crate) async fn run_structure(ctx: &RunContext, name: &str) -> CaseReport {
    let dir = &ctx.src_dir;
    let label = dir.display().to_string();
    if !dir.is_dir() {
        return CaseReport::skip(
            name,
            label,
            format!("source directory {} does not exist", dir.display()),
        );
    }

    let mut present = Vec::new();
    let mut missing = Vec::new();
    for script in EXPECTED_SCRIPTS {
        if dir.join(script).exists() {
            present.push(script);
        } else {
            missing.push(script);
        }
    }

    if present.is_empty() {
        return CaseReport::fail(
            name,
            label,
            format!("no expected scripts found in {}", dir.display()),
            None,
        );
    }
    let note = if missing.is_empty() {
        format!("all {} expected scripts present", present.len())
    } else {
        format!(
            "present: {}\nmissing: {}",
            present.join(", "),
            missing.join(", ")
        )
    };
    CaseReport::pass_with_note(name, label, note)
}

/// Compile-check every python script in the source directory via
/// `-m py_compile`. Skipped for non-python interpreters.
pub(crate) async fn run_syntax(ctx: &RunContext, name: &str) -> CaseReport {
    let label = ctx.src_dir.display().to_string();
    let interpreter = ctx.runner.interpreter().to_string();
    if !is_python_interpreter(&interpreter) {
        return CaseReport::skip(
            name,
            label,
            format!("syntax check requires a python interpreter, got '{}'", interpreter),
        );
    }
    if !ctx.src_dir.is_dir() {
        return CaseReport::skip(
            name,
            label,
            format!("source directory {} does not exist", ctx.src_dir.display()),
        );
    }

    let mut scripts = match python_scripts(&ctx.src_dir) {
        Ok(scripts) => scripts,
        Err(e) => return CaseReport::fail(name, label, e.to_string(), None),
    };
    scripts.sort();
    if scripts.is_empty() {
        return CaseReport::skip(name, label, "no python scripts to compile".to_string());
    }

    let mut problems = Vec::new();
    for path in &scripts {
        let argv = vec![
            "-m".to_string(),
            "py_compile".to_string(),
            path.display().to_string(),
        ];
        match ctx
            .runner
            .run_interpreter(&argv, None, ctx.runner.timeout())
            .await
        {
            Err(e) => return CaseReport::fail(name, label, e.to_string(), None),
            Ok(result) if !result.success() => {
                let file = path
                    .file_name()
                    .map(|f| f.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.display().to_string());
                problems.push(format!("syntax error in {}: {}", file, result.stderr));
            }
            Ok(_) => {}
        }
    }

    if problems.is_empty() {
        CaseReport::pass_with_note(name, label, format!("compiled {} scripts", scripts.len()))
    } else {
        CaseReport::fail(name, label, problems.join("; "), None)
    }
}

fn python_scripts(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut scripts = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|e| e == "py") {
            scripts.push(path);
        }
    }
    Ok(scripts)
}

pub(crate) fn is_python_interpreter(interpreter: &str) -> bool {
    Path::new(interpreter)
        .file_name()
        .map(|f| f.to_string_lossy().contains("python"))
        .unwrap_or(false)
}

/// Strong and weak password samples must produce distinguishable outputs.
///
/// Argument invocation is preferred; scripts that only read stdin get a
/// second chance with the samples piped in.
pub(crate) async fn run_password(ctx: &RunContext, name: &str) -> CaseReport {
    let path = ctx.src_dir.join(PASSWORD_SCRIPT);
    if !path.exists() {
        return CaseReport::skip(
            name,
            PASSWORD_SCRIPT,
            format!("script not found: {}", path.display()),
        );
    }

    let strong = ctx
        .runner
        .run(&path, &[STRONG_PASSWORD.to_string()], None)
        .await;
    let weak = ctx
        .runner
        .run(&path, &[WEAK_PASSWORD.to_string()], None)
        .await;
    if let (Ok(strong), Ok(weak)) = (strong, weak) {
        if strong.success() && weak.success() {
            return judge_password_outputs(name, &strong, &weak);
        }
    }

    // Stdin fallback; here a non-zero exit is a real failure
    let strong = match ctx
        .runner
        .run(&path, &[], Some(&format!("{}\n", STRONG_PASSWORD)))
        .await
    {
        Ok(result) if result.success() => result,
        Ok(result) => {
            return CaseReport::fail(
                name,
                PASSWORD_SCRIPT,
                format!(
                    "script failed with exit code {:?}: {}",
                    result.exit_code, result.stderr
                ),
                Some(&result),
            )
        }
        Err(e) => return CaseReport::fail(name, PASSWORD_SCRIPT, e.to_string(), None),
    };
    let weak = match ctx
        .runner
        .run(&path, &[], Some(&format!("{}\n", WEAK_PASSWORD)))
        .await
    {
        Ok(result) if result.success() => result,
        Ok(result) => {
            return CaseReport::fail(
                name,
                PASSWORD_SCRIPT,
                format!(
                    "script failed with exit code {:?}: {}",
                    result.exit_code, result.stderr
                ),
                Some(&result),
            )
        }
        Err(e) => return CaseReport::fail(name, PASSWORD_SCRIPT, e.to_string(), None),
    };
    judge_password_outputs(name, &strong, &weak)
}

pub(crate) fn passwords_distinguishable(strong: &str, weak: &str) -> bool {
    strong != weak
        || strong.to_lowercase().contains("valid")
        || weak.to_lowercase().contains("invalid")
}

fn judge_password_outputs(
    name: &str,
    strong: &ExecutionResult,
    weak: &ExecutionResult,
) -> CaseReport {
    if passwords_distinguishable(&strong.stdout, &weak.stdout) {
        CaseReport::pass(name, PASSWORD_SCRIPT, strong)
    } else {
        CaseReport::fail(
            name,
            PASSWORD_SCRIPT,
            format!(
                "validation does not distinguish strong from weak passwords; both produced {:?}",
                strong.stdout
            ),
            Some(weak),
        )
    }
}

/// Hex round trip: `decode(encode(s)) == s`, and encoded output carries a
/// `0x` marker. The second sample is lenient, matching scripts that only
/// handle the first.
pub(crate) async fn run_hex(ctx: &RunContext, name: &str) -> CaseReport {
    let path = ctx.src_dir.join(HEX_SCRIPT);
    if !path.exists() {
        return CaseReport::skip(
            name,
            HEX_SCRIPT,
            format!("script not found: {}", path.display()),
        );
    }

    let report = hex_round_trip(ctx, name, &path, "abcdabc", false).await;
    if !report.outcome.is_pass() {
        return report;
    }
    hex_round_trip(ctx, name, &path, "hello", true).await
}

async fn hex_round_trip(
    ctx: &RunContext,
    name: &str,
    path: &Path,
    sample: &str,
    lenient: bool,
) -> CaseReport {
    let encoded = match ctx
        .runner
        .run(path, &["encode".to_string(), sample.to_string()], None)
        .await
    {
        Ok(result) => result,
        Err(e) => return CaseReport::fail(name, HEX_SCRIPT, e.to_string(), None),
    };
    if !encoded.success() {
        if lenient {
            return CaseReport::pass_with_note(
                name,
                HEX_SCRIPT,
                format!("encode of {:?} not supported; lenient sample skipped", sample),
            );
        }
        return CaseReport::fail(
            name,
            HEX_SCRIPT,
            format!("encoding failed: {}", encoded.stderr),
            Some(&encoded),
        );
    }
    if !lenient {
        if encoded.stdout.is_empty() {
            return CaseReport::fail(
                name,
                HEX_SCRIPT,
                "no encoding output produced".to_string(),
                Some(&encoded),
            );
        }
        if !encoded.stdout.contains("0x") {
            return CaseReport::fail(
                name,
                HEX_SCRIPT,
                format!(
                    "hex encoding should contain '0x' markers, got {:?}",
                    encoded.stdout
                ),
                Some(&encoded),
            );
        }
    }

    let decoded = match ctx
        .runner
        .run(path, &["decode".to_string(), encoded.stdout.clone()], None)
        .await
    {
        Ok(result) => result,
        Err(e) => {
            if lenient {
                return CaseReport::pass(name, HEX_SCRIPT, &encoded);
            }
            return CaseReport::fail(name, HEX_SCRIPT, e.to_string(), None);
        }
    };
    if !decoded.success() {
        if lenient {
            return CaseReport::pass(name, HEX_SCRIPT, &encoded);
        }
        return CaseReport::fail(
            name,
            HEX_SCRIPT,
            format!("decoding failed: {}", decoded.stderr),
            Some(&decoded),
        );
    }
    if decoded.stdout != sample {
        let mut reason = format!(
            "round trip mismatch: expected {:?}, got {:?} (encoded: {:?})",
            sample, decoded.stdout, encoded.stdout
        );
        if let Some(interpreted) = decode_hex_tokens(&encoded.stdout) {
            reason.push_str(&format!("; 0x tokens decode to {:?}", interpreted));
        }
        return CaseReport::fail(name, HEX_SCRIPT, reason, Some(&decoded));
    }
    CaseReport::pass(name, HEX_SCRIPT, &decoded)
}

/// Interpret whitespace-separated `0x..` tokens as bytes, for round-trip
/// failure diagnostics. Returns None unless every token parses.
pub(crate) fn decode_hex_tokens(encoded: &str) -> Option<String> {
    let mut bytes = Vec::new();
    for token in encoded.split_whitespace() {
        let digits = token.strip_prefix("0x")?;
        bytes.extend(hex::decode(digits).ok()?);
    }
    if bytes.is_empty() {
        return None;
    }
    String::from_utf8(bytes).ok()
}

#[cfg(test)]
#[path = "drills_tests.rs"]
mod tests;
