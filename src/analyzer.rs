//! One review request end-to-end: pull changes, materialize a workspace,
//! run the linter, translate its findings.

use tracing::{debug, error, info, warn};

use crate::changes::ChangeSource;
use crate::error::Result;
use crate::options::{LinterRegistry, ReviewConfig};
use crate::parser::parse_output;
use crate::runner::{run_tool, DEFAULT_TOOL};
use crate::translate::{translate, Comment};
use crate::workspace::Workspace;

/// Result of one review request.
///
/// Zero analyzed files is a valid outcome and yields an empty report.
#[derive(Debug, Default)]
pub struct AnalysisReport {
    pub comments: Vec<Comment>,
    /// Files actually materialized and handed to the linter.
    pub files_analyzed: usize,
}

/// Review-request analyzer.
///
/// The pipeline within a request is strictly sequential; concurrent
/// requests are safe because each one owns a uniquely-named workspace.
pub struct Analyzer {
    /// Linter binary to invoke.
    pub tool: String,
    /// Extra flags appended after the defaults on every run.
    pub extra_args: Vec<String>,
    /// Option registry used to derive per-request flags.
    pub registry: LinterRegistry,
    /// Language label of files to analyze.
    pub language: String,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            tool: DEFAULT_TOOL.to_string(),
            extra_args: Vec::new(),
            registry: LinterRegistry::default(),
            language: "go".to_string(),
        }
    }
}

impl Analyzer {
    /// Run one review over the files supplied by `source`.
    ///
    /// Only files matching the target language with non-empty content are
    /// consumed. The workspace is removed on every exit path, including
    /// linter spawn failures.
    pub fn review(
        &self,
        source: &mut dyn ChangeSource,
        config: &ReviewConfig,
    ) -> Result<AnalysisReport> {
        let stream = source.files()?;
        let workspace = Workspace::create()?;

        let language = self.language.as_str();
        let files = stream
            .filter_map(|item| match item {
                Ok(file) => Some(file),
                Err(e) => {
                    error!("failed to get a file from the change source: {}", e);
                    None
                }
            })
            .filter(|file| {
                file.language.eq_ignore_ascii_case(language) && !file.content.is_empty()
            });

        let stats = workspace.materialize(files);
        if stats.saved < stats.total {
            warn!(
                "{}/{} Golang files saved, the linter won't run on the rest",
                stats.saved, stats.total
            );
        }
        if stats.saved == 0 {
            debug!("no Golang files to work on, skip running the linter");
            return Ok(AnalysisReport::default());
        }
        debug!("{} Golang files to work on, running the linter", stats.saved);

        let mut extra_args = self.extra_args.clone();
        extra_args.extend(self.registry.arguments(config));

        let raw = run_tool(&self.tool, workspace.root(), &extra_args)?;
        let records = parse_output(&raw);
        let workspace_root = workspace.root().display().to_string();
        let comments = translate(records, &workspace_root);
        info!("{} comments created", comments.len());

        Ok(AnalysisReport {
            comments,
            files_analyzed: stats.saved,
        })
    }
}
