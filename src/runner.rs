//! External linter invocation.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::error::{BridgeError, Result};

/// Default linter binary.
pub const DEFAULT_TOOL: &str = "gometalinter.v2";

/// Fixed, opinionated subset of checks enabled on every run.
pub const DEFAULT_ARGS: &[&str] = &[
    "--disable-all",
    "--enable=dupl",
    "--enable=gas",
    "--enable=gofmt",
    "--enable=goimports",
    "--enable=lll",
    "--enable=misspell",
];

/// Run the linter over `workspace` and capture its stdout.
///
/// The full argument list is [`DEFAULT_ARGS`] followed by `extra_args`
/// followed by the workspace directory. The linter exits non-zero whenever
/// it finds any issue, so the exit status is ignored; only the captured
/// output matters. A failure to spawn the process is fatal for the request.
pub fn run_tool(tool: &str, workspace: &Path, extra_args: &[String]) -> Result<String> {
    let mut argv: Vec<String> = DEFAULT_ARGS.iter().map(|s| s.to_string()).collect();
    argv.extend(extra_args.iter().cloned());
    argv.push(workspace.display().to_string());

    info!("Running '{} {}'", tool, argv.join(" "));

    let output = Command::new(tool)
        .args(&argv)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|source| BridgeError::ToolSpawn {
            tool: tool.to_string(),
            source,
        })?;

    if !output.stderr.is_empty() {
        debug!(
            "{} stderr: {}",
            tool,
            String::from_utf8_lossy(&output.stderr).trim_end()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_binary_is_a_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = run_tool("gometalint-bridge-no-such-tool", dir.path(), &[]);
        assert!(matches!(result, Err(BridgeError::ToolSpawn { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_is_not_an_error() {
        // `false` accepts (and ignores) our arguments and always exits 1.
        let dir = tempfile::tempdir().unwrap();
        let out = run_tool("false", dir.path(), &[]).unwrap();
        assert_eq!(out, "");
    }
}
