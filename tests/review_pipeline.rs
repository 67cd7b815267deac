//! End-to-end tests for the review pipeline.
//!
//! Fixtures are built with tempfile; the linter is replaced by a small
//! shell stub that emits canned output in gometalinter's line format, so
//! the tests exercise materialization, invocation, parsing and path
//! translation without the real tool installed.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use gometalint_bridge::{Analyzer, ManifestSource, ReviewConfig};

/// Builder for a repository checkout plus change manifest.
struct ReviewFixture {
    dir: TempDir,
    entries: Vec<(String, String)>,
}

impl ReviewFixture {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
            entries: Vec::new(),
        }
    }

    fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file to the checkout and list it in the manifest.
    fn file(mut self, path: &str, language: &str, content: &str) -> Self {
        let full = self.root().join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full, content).unwrap();
        self.entries.push((path.to_string(), language.to_string()));
        self
    }

    /// Write the manifest and return its path.
    fn manifest(&self) -> PathBuf {
        let entries: Vec<serde_json::Value> = self
            .entries
            .iter()
            .map(|(path, language)| {
                serde_json::json!({ "path": path, "language": language })
            })
            .collect();
        let path = self.root().join("changes.json");
        fs::write(&path, serde_json::to_string(&entries).unwrap()).unwrap();
        path
    }

    fn source(&self) -> ManifestSource {
        ManifestSource::from_manifest(&self.manifest(), self.root()).unwrap()
    }

    /// Install an executable stub linter and return its path.
    ///
    /// The stub receives the workspace directory as its last argument,
    /// like the real tool.
    fn stub_tool(&self, body: &str) -> String {
        let path = self.root().join("fake-linter");
        let script = format!("#!/bin/sh\nfor last; do :; done\n{}\n", body);
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path.display().to_string()
    }
}

#[test]
fn review_translates_paths_in_file_fields_and_messages() {
    let fixture = ReviewFixture::new()
        .file("main.go", "Go", "package main\n")
        .file("pkg/util.go", "Go", "package pkg\n");

    // Canned gometalinter output referencing flattened workspace names,
    // plus a noise line the parser must skip. Exits non-zero as the real
    // tool does when it finds anything.
    let tool = fixture.stub_tool(concat!(
        "echo \"$last/pkg___.___util.go:3:1:warning:line is 121 characters (lll)\"\n",
        "echo \"$last/main.go:1:1:warning:duplicate of $last/pkg___.___util.go:3-5 (dupl)\"\n",
        "echo \"not a diagnostic line\"\n",
        "exit 1",
    ));

    let analyzer = Analyzer {
        tool,
        ..Analyzer::default()
    };
    let mut source = fixture.source();
    let report = analyzer
        .review(&mut source, &ReviewConfig::default())
        .unwrap();

    assert_eq!(report.files_analyzed, 2);
    assert_eq!(report.comments.len(), 2);

    assert_eq!(report.comments[0].file, "pkg/util.go");
    assert_eq!(report.comments[0].line, 3);
    assert_eq!(report.comments[0].text, "line is 121 characters (lll)");

    assert_eq!(report.comments[1].file, "main.go");
    assert_eq!(report.comments[1].line, 1);
    assert_eq!(
        report.comments[1].text,
        "duplicate of pkg/util.go:3-5 (dupl)"
    );
}

#[test]
fn review_materializes_files_flat_in_the_workspace() {
    let fixture = ReviewFixture::new()
        .file("a/b/c/d/e.go", "Go", "package d\n")
        .file("top.go", "Go", "package top\n");

    // The stub reports every file it sees in the workspace root.
    let tool = fixture.stub_tool(
        "for f in \"$last\"/*; do echo \"$f:1:1:warning:seen\"; done",
    );

    let analyzer = Analyzer {
        tool,
        ..Analyzer::default()
    };
    let mut source = fixture.source();
    let report = analyzer
        .review(&mut source, &ReviewConfig::default())
        .unwrap();

    let mut files: Vec<&str> = report.comments.iter().map(|c| c.file.as_str()).collect();
    files.sort();
    assert_eq!(files, vec!["a/b/c/d/e.go", "top.go"]);
}

#[test]
fn non_target_and_empty_files_do_not_trigger_the_linter() {
    let fixture = ReviewFixture::new()
        .file("README.md", "Markdown", "docs\n")
        .file("empty.go", "Go", "");

    // A stub that would produce a comment if it ever ran.
    let tool = fixture.stub_tool("echo \"$last/empty.go:1:1:warning:ran anyway\"");

    let analyzer = Analyzer {
        tool,
        ..Analyzer::default()
    };
    let mut source = fixture.source();
    let report = analyzer
        .review(&mut source, &ReviewConfig::default())
        .unwrap();

    assert_eq!(report.files_analyzed, 0);
    assert!(report.comments.is_empty());
}

#[test]
fn registry_flags_reach_the_tool_command_line() {
    let fixture = ReviewFixture::new().file("main.go", "Go", "package main\n");

    // The stub echoes its own argument list as a diagnostic message.
    let tool = fixture.stub_tool("echo \"$last/main.go:1:1:warning:args $*\"");

    let config: ReviewConfig = serde_json::from_str(
        r#"{"linters": [{"name": "lll", "maxLen": 120}]}"#,
    )
    .unwrap();

    let analyzer = Analyzer {
        tool,
        ..Analyzer::default()
    };
    let mut source = fixture.source();
    let report = analyzer.review(&mut source, &config).unwrap();

    assert_eq!(report.comments.len(), 1);
    let text = &report.comments[0].text;
    assert!(text.contains("--disable-all"), "defaults missing: {}", text);
    assert!(
        text.contains("--line-length=120"),
        "derived flag missing: {}",
        text
    );
}

#[test]
fn unreadable_manifest_entry_is_skipped_not_fatal() {
    let fixture = ReviewFixture::new().file("main.go", "Go", "package main\n");

    // Manifest listing one file that does not exist on disk.
    let entries = serde_json::json!([
        { "path": "missing.go", "language": "Go" },
        { "path": "main.go", "language": "Go" }
    ]);
    let manifest = fixture.root().join("changes.json");
    fs::write(&manifest, serde_json::to_string(&entries).unwrap()).unwrap();

    let tool = fixture.stub_tool("for f in \"$last\"/*; do echo \"$f:1:1:warning:seen\"; done");

    let analyzer = Analyzer {
        tool,
        ..Analyzer::default()
    };
    let mut source = ManifestSource::from_manifest(&manifest, fixture.root()).unwrap();
    let report = analyzer
        .review(&mut source, &ReviewConfig::default())
        .unwrap();

    assert_eq!(report.files_analyzed, 1);
    assert_eq!(report.comments.len(), 1);
    assert_eq!(report.comments[0].file, "main.go");
}
