//! Per-file rewrite: read, substitute, write back only when changed.

use std::fs;
use std::io;
use std::path::Path;

use crate::rules::RuleSet;

/// Result of rewriting a single file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteOutcome {
    /// Whether the file on disk was overwritten.
    pub changed: bool,
    /// Number of import paths rewritten.
    pub substitutions: usize,
}

/// Rewrite one file in place.
///
/// Reads the whole file as UTF-8, applies the rule table, and overwrites
/// the file only if the result differs from the original (a no-op file is
/// never opened for writing). The write is a full replace with no temp file
/// or backup. Read and write errors propagate to the caller.
pub fn rewrite_file(path: &Path, rules: &RuleSet) -> io::Result<RewriteOutcome> {
    let original = fs::read_to_string(path)?;
    let (rewritten, substitutions) = rules.apply(&original);

    if rewritten == original {
        return Ok(RewriteOutcome::default());
    }

    fs::write(path, &rewritten)?;
    Ok(RewriteOutcome {
        changed: true,
        substitutions,
    })
}
