//! CLI argument definitions using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::runner::DEFAULT_TOOL;

/// Runs gometalinter over a set of changed files and reports findings in
/// terms of the original repository paths.
#[derive(Parser, Debug)]
#[command(name = "gometalint-bridge")]
#[command(about = "Run gometalinter over changed files, reporting findings by repository path")]
#[command(version)]
pub struct Cli {
    /// JSON manifest of changed files: [{"path": ..., "language": ...}]
    #[arg(value_name = "MANIFEST")]
    pub manifest: PathBuf,

    /// Repository root the manifest paths are relative to
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,

    /// JSON review configuration: {"linters": [{"name": "lll", "maxLen": 120}]}
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Linter binary to invoke
    #[arg(long, default_value = DEFAULT_TOOL, env = "GOMETALINT_BIN")]
    pub tool: String,

    /// Extra flag passed to the linter after the defaults (repeatable)
    #[arg(long = "arg", value_name = "FLAG")]
    pub extra_args: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "text", value_enum)]
    pub format: OutputFormat,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable `file:line: text` lines
    #[default]
    Text,
    /// JSON array of comments
    Json,
}
