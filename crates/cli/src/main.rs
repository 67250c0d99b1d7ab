// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Exercise script test harness binary entry point.

use std::time::Duration;

use clap::Parser;

use drillcheck::capture::RunLog;
use drillcheck::cli::{Cli, ReportFormat};
use drillcheck::output_diagnostic::print_error;
use drillcheck::runner::ScriptRunner;
use drillcheck::suite::{RunContext, Suite, SuiteError};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    std::process::exit(run(cli).await);
}

async fn run(cli: Cli) -> i32 {
    let suite = match build_suite(&cli) {
        Ok(suite) => suite,
        Err(e) => {
            print_error(e);
            return 1;
        }
    };

    if cli.list {
        for name in suite.drill_names() {
            println!("{}", name);
        }
        return 0;
    }

    let log = match cli.capture {
        Some(ref path) => match RunLog::with_file(path) {
            Ok(log) => Some(log),
            Err(e) => {
                print_error(format_args!(
                    "cannot open capture file {}: {}",
                    path.display(),
                    e
                ));
                return 1;
            }
        },
        None => None,
    };

    // CLI values are defaults; a suite file may pin its own interpreter
    // and timeout.
    let interpreter = suite
        .interpreter()
        .unwrap_or(cli.interpreter.as_str())
        .to_string();
    let timeout_secs = suite.timeout_secs().unwrap_or(cli.timeout_secs);
    let runner = ScriptRunner::new(interpreter).with_timeout(Duration::from_secs(timeout_secs));

    let ctx = RunContext {
        runner,
        src_dir: cli.src_dir.clone(),
        log,
    };
    let report = suite.run(&ctx).await;

    match cli.format {
        ReportFormat::Text => {
            let mut stdout = std::io::stdout();
            if let Err(e) = report.write_text(&mut stdout, cli.verbose) {
                print_error(e);
                return 1;
            }
        }
        ReportFormat::Markdown => {
            print!("{}", report.to_markdown());
        }
    }

    if report.has_failures() {
        1
    } else {
        0
    }
}

fn build_suite(cli: &Cli) -> Result<Suite, SuiteError> {
    let suite = match cli.suite {
        Some(ref path) => Suite::load(path)?,
        None => Suite::builtin()?,
    };
    match cli.filter {
        Some(ref pattern) => suite.filter(pattern),
        None => Ok(suite),
    }
}
