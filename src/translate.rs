//! Translation of parsed diagnostics back into repository terms.

use serde::Serialize;
use tracing::debug;

use crate::flatpath::{revert_path, revert_paths_in};
use crate::parser::DiagnosticRecord;

/// Final review comment, keyed by the original repository path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    /// Repository path of the file the comment refers to.
    pub file: String,
    /// 1-based line number.
    pub line: usize,
    /// Message with all embedded workspace paths restored.
    pub text: String,
}

/// Revert the workspace path encoding in every record.
///
/// The file field is decoded against the workspace root. The message body
/// is scanned as well, since some checks (dupl) reference other files by
/// their flattened names inside the message. The severity label is dropped
/// here; it is not part of the public result.
pub fn translate(records: Vec<DiagnosticRecord>, workspace: &str) -> Vec<Comment> {
    records
        .into_iter()
        .map(|record| {
            let comment = Comment {
                file: revert_path(&record.file, workspace),
                line: record.line,
                text: revert_paths_in(&record.message, workspace),
            };
            debug!("comment {:?}", comment);
            comment
        })
        .collect()
}
