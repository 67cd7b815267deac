//! gometalint-bridge CLI entry point

use std::fmt::Write as _;
use std::fs;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gometalint_bridge::changes::ManifestSource;
use gometalint_bridge::cli::{Cli, OutputFormat};
use gometalint_bridge::options::ReviewConfig;
use gometalint_bridge::{Analyzer, BridgeError};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn run(cli: &Cli) -> gometalint_bridge::Result<String> {
    let config = match &cli.config {
        Some(path) => {
            let raw = fs::read_to_string(path)?;
            serde_json::from_str(&raw).map_err(|e| BridgeError::InvalidConfig {
                message: format!("{}: {}", path.display(), e),
            })?
        }
        None => ReviewConfig::default(),
    };

    let mut source = ManifestSource::from_manifest(&cli.manifest, &cli.root)?;
    let analyzer = Analyzer {
        tool: cli.tool.clone(),
        extra_args: cli.extra_args.clone(),
        ..Analyzer::default()
    };

    let report = analyzer.review(&mut source, &config)?;

    let output = match cli.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report.comments).map_err(|e| {
                BridgeError::InvalidConfig {
                    message: format!("cannot serialize comments: {}", e),
                }
            })?;
            format!("{}\n", json)
        }
        OutputFormat::Text => {
            let mut out = String::new();
            for comment in &report.comments {
                let _ = writeln!(out, "{}:{}: {}", comment.file, comment.line, comment.text);
            }
            out
        }
    };

    Ok(output)
}
