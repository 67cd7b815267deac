//! Change intake from the file-change collaborator.
//!
//! The analyzer pulls changed files as a lazy stream that is produced once
//! per review request and consumed fully. Per-item read failures are
//! surfaced as `Err` items so a single unreadable file does not abort the
//! request; only failing to construct the stream itself is fatal.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{BridgeError, Result};

/// One changed file as supplied by the change collaborator.
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// Slash-delimited path relative to the repository root.
    pub path: String,
    /// Raw file content at the head revision.
    pub content: Vec<u8>,
    /// Language label as reported by the collaborator (e.g. "Go").
    pub language: String,
}

/// A stream of changed files for one review request.
///
/// Implementations yield records lazily and are consumed exactly once per
/// request; this is the seam where a real data service would attach.
pub trait ChangeSource {
    /// Produce the change stream. Called once per request.
    fn files(&mut self) -> Result<Box<dyn Iterator<Item = Result<FileRecord>> + '_>>;
}

/// Entry in a JSON change manifest.
#[derive(Debug, Deserialize)]
pub struct ManifestEntry {
    pub path: String,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "Go".to_string()
}

/// Filesystem-backed [`ChangeSource`] driven by a JSON manifest.
///
/// The manifest is a JSON array of `{"path": ..., "language": ...}` entries.
/// File contents are read lazily from `root` as the stream is consumed, so
/// large change sets are never held in memory at once.
pub struct ManifestSource {
    root: PathBuf,
    entries: Vec<ManifestEntry>,
}

impl ManifestSource {
    pub fn from_manifest(manifest: &Path, root: &Path) -> Result<Self> {
        let raw = fs::read_to_string(manifest).map_err(|e| BridgeError::ChangeSource {
            message: format!("cannot read manifest {}: {}", manifest.display(), e),
        })?;
        let entries: Vec<ManifestEntry> =
            serde_json::from_str(&raw).map_err(|e| BridgeError::ChangeSource {
                message: format!("malformed manifest {}: {}", manifest.display(), e),
            })?;
        Ok(Self {
            root: root.to_path_buf(),
            entries,
        })
    }
}

impl ChangeSource for ManifestSource {
    fn files(&mut self) -> Result<Box<dyn Iterator<Item = Result<FileRecord>> + '_>> {
        let root = self.root.clone();
        Ok(Box::new(self.entries.drain(..).map(move |entry| {
            let content = fs::read(root.join(&entry.path)).map_err(|e| {
                BridgeError::ChangeSource {
                    message: format!("cannot read file {}: {}", entry.path, e),
                }
            })?;
            Ok(FileRecord {
                path: entry.path,
                content,
                language: entry.language,
            })
        })))
    }
}
