// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Timeout behavior: a hung script must fail the drill without blocking
//! the harness.

mod common;

use common::{drillcheck_bin, write_script, write_suite};
use std::process::Command;
use std::time::Instant;

#[test]
fn test_hung_script_is_killed_and_fails() {
    let dir = tempfile::tempdir().unwrap();
    write_script(dir.path(), "hang.sh", "sleep 30\n");

    let suite = write_suite(
        r#"
        interpreter = "sh"
        timeout_secs = 1

        [[cases]]
        name = "hangs"
        script = "hang.sh"
        "#,
    );

    let start = Instant::now();
    let output = Command::new(drillcheck_bin())
        .arg("--src-dir")
        .arg(dir.path())
        .arg("--suite")
        .arg(suite.path())
        .output()
        .expect("failed to run drillcheck");
    let elapsed = start.elapsed();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(1), "stdout:\n{}", stdout);
    assert!(stdout.contains("FAIL hangs"), "stdout:\n{}", stdout);
    assert!(stdout.contains("timed out after 1s"), "stdout:\n{}", stdout);
    assert!(
        elapsed.as_secs() < 20,
        "run took {}s, timeout did not bound the wait",
        elapsed.as_secs()
    );
}

#[test]
fn test_cli_timeout_applies_to_builtin_drills() {
    let dir = tempfile::tempdir().unwrap();
    write_script(dir.path(), "hello.py", "sleep 30\n");

    let start = Instant::now();
    let output = Command::new(drillcheck_bin())
        .arg("--src-dir")
        .arg(dir.path())
        .args(["--interpreter", "sh", "--timeout-secs", "1", "--filter", "hello"])
        .output()
        .expect("failed to run drillcheck");
    let elapsed = start.elapsed();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(output.status.code(), Some(1), "stdout:\n{}", stdout);
    assert!(stdout.contains("timed out"), "stdout:\n{}", stdout);
    assert!(elapsed.as_secs() < 20);
}
