//! Source file enumeration for the rewrite pass.

use std::path::{Path, PathBuf};

use glob::Pattern;
use ignore::WalkBuilder;

/// File extensions eligible for rewriting.
pub const REWRITE_EXTENSIONS: &[&str] = &["ts", "tsx"];

/// Configuration for the file walk.
#[derive(Debug, Clone, Default)]
pub struct WalkConfig {
    /// Visit hidden and gitignored files too.
    pub show_all: bool,
    /// File-name glob patterns to skip.
    pub ignore_patterns: Vec<String>,
}

/// Check whether a path names a file the rewriter should touch.
pub fn is_rewrite_candidate(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| REWRITE_EXTENSIONS.contains(&ext))
}

/// Check if a file name matches any ignore pattern.
fn matches_ignore_pattern(path: &Path, patterns: &[String]) -> bool {
    let name = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    patterns.iter().any(|pattern| {
        name == *pattern
            || Pattern::new(pattern)
                .map(|p| p.matches(&name))
                .unwrap_or(false)
    })
}

/// Enumerate every rewrite candidate beneath `root` in file-name-sorted
/// order. Symlinks are not followed. Unless `show_all` is set, hidden files
/// and anything matched by `.gitignore` are skipped; `.gitignore` files
/// apply even outside a git checkout.
pub fn source_files(root: &Path, config: &WalkConfig) -> Vec<PathBuf> {
    let walker = if config.show_all {
        WalkBuilder::new(root)
            .hidden(false)
            .ignore(false)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build()
    } else {
        WalkBuilder::new(root)
            .hidden(true)
            .ignore(true)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .require_git(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build()
    };

    walker
        .flatten()
        .filter(|entry| entry.file_type().is_some_and(|t| t.is_file()))
        .map(|entry| entry.into_path())
        .filter(|path| is_rewrite_candidate(path))
        .filter(|path| !matches_ignore_pattern(path, &config.ignore_patterns))
        .collect()
}
