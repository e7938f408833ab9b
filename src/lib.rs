//! Replant - fixes path-alias imports after moving flat modules into per-name folders
//!
//! After a reorganization that turned `src/<folder>/<Name>.tsx` into
//! `src/<folder>/<Name>/<Name>.tsx`, imports written as
//! `from '@/<folder>/<Name>'` stop resolving. Replant walks a source tree
//! and rewrites those imports in place, touching only files that actually
//! change. Only single-quoted `@/` alias imports are rewritten; relative
//! imports are left as-is.

pub mod report;
pub mod rewrite;
pub mod rules;
pub mod walk;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use report::{ChangedFile, RewriteReport, print_report, print_report_json};
pub use rewrite::{RewriteOutcome, rewrite_file};
pub use rules::{EXEMPT_NAMES, FOLDER_CATEGORIES, FolderRule, RuleSet};
pub use walk::{REWRITE_EXTENSIONS, WalkConfig, is_rewrite_candidate, source_files};
