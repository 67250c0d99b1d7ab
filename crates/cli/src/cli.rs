// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Exercise script test harness
#[derive(Parser, Clone, Debug)]
#[command(name = "drillcheck", version, about = "Exercise script test harness")]
pub struct Cli {
    /// Directory containing the target scripts
    #[arg(long, default_value = "src", env = "DRILLCHECK_SRC_DIR")]
    pub src_dir: PathBuf,

    /// Interpreter used to launch target scripts
    #[arg(long, default_value = "python3", env = "DRILLCHECK_INTERPRETER")]
    pub interpreter: String,

    /// Wall-clock timeout per invocation, in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// Suite file (TOML or JSON) to run instead of the built-in drills
    #[arg(long, env = "DRILLCHECK_SUITE")]
    pub suite: Option<PathBuf>,

    /// Only run drills whose name matches this glob pattern
    #[arg(long)]
    pub filter: Option<String>,

    /// Record every drill outcome to a JSONL capture file
    #[arg(long, env = "DRILLCHECK_CAPTURE")]
    pub capture: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// List drill names without running anything
    #[arg(long)]
    pub list: bool,

    /// Include captured output for passing drills
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// Report output format
#[derive(Clone, Debug, ValueEnum, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Plain text, one line per drill
    #[default]
    Text,
    /// Markdown summary table
    Markdown,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
