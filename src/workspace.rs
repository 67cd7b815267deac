//! Per-request temporary workspace holding flattened file copies.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use tracing::{debug, error};

use crate::changes::FileRecord;
use crate::error::{BridgeError, Result};
use crate::flatpath::flatten_path;

/// Counts of materialized files for one request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterializeStats {
    /// Files successfully written into the workspace.
    pub saved: usize,
    /// Files attempted.
    pub total: usize,
}

/// Isolated temporary directory for one analysis request.
///
/// Each request gets its own uniquely-named directory, which is removed
/// when the workspace is dropped — on every exit path, including linter
/// or parse failures.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Create a fresh workspace. Failure here is fatal for the request.
    pub fn create() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("gometalint")
            .tempdir()
            .map_err(|source| BridgeError::WorkspaceCreate { source })?;
        debug!("Saving files to '{}'", dir.path().display());
        Ok(Self { dir })
    }

    /// Absolute path of the workspace root.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write each file under its flattened name in the workspace root.
    ///
    /// All files land in a single flat directory; no subdirectories are
    /// created. A failed write is logged and skipped so one bad file never
    /// aborts the batch. The returned counts let the caller decide whether
    /// running the linter is still worthwhile.
    pub fn materialize<I>(&self, files: I) -> MaterializeStats
    where
        I: IntoIterator<Item = FileRecord>,
    {
        let mut stats = MaterializeStats::default();
        for file in files {
            stats.total += 1;
            let flat = flatten_path(&file.path, self.root());
            match fs::write(&flat, &file.content) {
                Ok(()) => stats.saved += 1,
                Err(e) => error!("failed to write file \"{}\": {}", file.path, e),
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(path: &str, content: &[u8]) -> FileRecord {
        FileRecord {
            path: path.to_string(),
            content: content.to_vec(),
            language: "Go".to_string(),
        }
    }

    #[test]
    fn materialize_writes_flattened_names() {
        let workspace = Workspace::create().unwrap();
        let stats = workspace.materialize(vec![
            record("main.go", b"package main\n"),
            record("pkg/util.go", b"package pkg\n"),
        ]);
        assert_eq!(stats, MaterializeStats { saved: 2, total: 2 });
        assert!(workspace.root().join("main.go").is_file());
        assert!(workspace.root().join("pkg___.___util.go").is_file());
        // Flat directory only.
        assert!(!workspace.root().join("pkg").exists());
    }

    #[test]
    fn materialize_empty_batch() {
        let workspace = Workspace::create().unwrap();
        let stats = workspace.materialize(Vec::new());
        assert_eq!(stats, MaterializeStats::default());
    }

    #[test]
    fn workspace_is_removed_on_drop() {
        let root = {
            let workspace = Workspace::create().unwrap();
            workspace.materialize(vec![record("a.go", b"package a\n")]);
            workspace.root().to_path_buf()
        };
        assert!(!root.exists());
    }

    #[test]
    fn workspaces_are_unique() {
        let w1 = Workspace::create().unwrap();
        let w2 = Workspace::create().unwrap();
        assert_ne!(w1.root(), w2.root());
    }
}
