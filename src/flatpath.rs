//! Path virtualization between repository paths and flat workspace names.
//!
//! gometalinter is pointed at a single directory and does not preserve any
//! directory structure below it, so every changed file is written directly
//! into the workspace root under a name that encodes its original
//! hierarchical path. The encoding replaces each `/` with [`MARKER`]; it is
//! reversed after the run, both in diagnostic file fields and in flattened
//! paths that some checks (dupl in particular) embed in their message text.

use std::path::{Path, PathBuf};

/// Marker sequence standing in for `/` in flattened file names.
///
/// Chosen to be vanishingly unlikely in real paths or diagnostic prose. The
/// encoding is a bijection only on paths that do not already contain the
/// marker; a path that does will not survive a round trip.
pub const MARKER: &str = "___.___";

/// Flatten a slash-delimited repository path into a single file name inside
/// `workspace`.
///
/// Total over its input: a path with no separators flattens to itself.
pub fn flatten_path(repo_path: &str, workspace: &Path) -> PathBuf {
    let flat = repo_path.split('/').collect::<Vec<_>>().join(MARKER);
    workspace.join(flat)
}

/// Recover the original repository path from a flattened one.
///
/// Everything up to and including the first occurrence of `workspace` is
/// stripped, the remainder is split on [`MARKER`], rejoined with `/`, and
/// any leading separator is trimmed. If `workspace` does not occur in
/// `flat`, the whole input is treated as the flattened remainder, so the
/// function stays well defined on marker-bearing tokens that lack the
/// workspace prefix.
pub fn revert_path(flat: &str, workspace: &str) -> String {
    let rest = match flat.find(workspace) {
        Some(idx) => &flat[idx + workspace.len()..],
        None => flat,
    };
    rest.split(MARKER)
        .collect::<Vec<_>>()
        .join("/")
        .trim_start_matches('/')
        .to_string()
}

/// Restore repository paths embedded in free-form diagnostic text.
///
/// Any whitespace-delimited token containing [`MARKER`] is reverted via
/// [`revert_path`]; all other tokens pass through untouched and the result
/// is rejoined with single spaces. Marker-free text is returned as-is,
/// without re-joining, so ordinary messages keep their exact formatting.
pub fn revert_paths_in(text: &str, workspace: &str) -> String {
    if !text.contains(MARKER) {
        return text.to_string();
    }
    text.split_whitespace()
        .map(|word| {
            if word.contains(MARKER) {
                revert_path(word, workspace)
            } else {
                word.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
