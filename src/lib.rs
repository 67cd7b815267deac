//! gometalint-bridge: runs gometalinter over changed files supplied by a
//! file-change collaborator and reports findings in repository terms.
//!
//! gometalinter is handed a single flat directory, so the crate's core is
//! the path virtualization layer: each changed file is materialized into a
//! per-request temporary workspace under a name that encodes its original
//! hierarchical path ([`flatpath`]), and the linter's findings are
//! translated back afterwards ([`translate`]) — in the dedicated file
//! fields and in flattened paths some checks embed in their message text.
//!
//! # Example
//!
//! ```ignore
//! use gometalint_bridge::{Analyzer, ManifestSource, ReviewConfig};
//! use std::path::Path;
//!
//! let mut source = ManifestSource::from_manifest(
//!     Path::new("changes.json"),
//!     Path::new("."),
//! )?;
//! let analyzer = Analyzer::default();
//! let report = analyzer.review(&mut source, &ReviewConfig::default())?;
//!
//! for comment in &report.comments {
//!     println!("{}:{}: {}", comment.file, comment.line, comment.text);
//! }
//! ```

pub mod analyzer;
pub mod changes;
pub mod cli;
pub mod error;
pub mod flatpath;
pub mod options;
pub mod parser;
pub mod runner;
pub mod translate;
pub mod workspace;

// Re-export commonly used types
pub use analyzer::{AnalysisReport, Analyzer};
pub use changes::{ChangeSource, FileRecord, ManifestSource};
pub use cli::{Cli, OutputFormat};
pub use error::{BridgeError, Result};
pub use flatpath::{flatten_path, revert_path, revert_paths_in, MARKER};
pub use options::{LinterConfig, LinterRegistry, ReviewConfig};
pub use parser::{parse_output, DiagnosticRecord};
pub use runner::{run_tool, DEFAULT_ARGS, DEFAULT_TOOL};
pub use translate::{translate, Comment};
pub use workspace::{MaterializeStats, Workspace};
