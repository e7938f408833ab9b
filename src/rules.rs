//! Import path substitution rules
//!
//! The source reorganization moved flat modules into per-name folders
//! (`components/Foo.tsx` became `components/Foo/Foo.tsx`), so alias imports
//! of the form `from '@/components/Foo'` need a second `Foo` segment. Each
//! folder category gets one compiled rule; the table is built once at
//! startup and applied per file.

use regex::{Captures, Regex};

/// Folder categories whose files were moved into per-name subfolders,
/// in the order their rules are applied.
pub const FOLDER_CATEGORIES: &[&str] = &[
    "components",
    "pages",
    "hooks",
    "services",
    "utils",
    "contexts",
];

/// File base names that stayed flat during the reorganization.
/// Imports of these keep a single path segment.
pub const EXEMPT_NAMES: &[&str] = &["types", "constants"];

/// Substitution rule for a single folder category.
#[derive(Debug)]
pub struct FolderRule {
    folder: &'static str,
    pattern: Regex,
}

impl FolderRule {
    fn new(folder: &'static str) -> Self {
        // Matches `from '@/<folder>/<name>'` where <name> contains no `/` or
        // `'`. An already-foldered path carries a `/` in its tail and never
        // matches, which is what makes the rewrite idempotent.
        let pattern = Regex::new(&format!(r"from '@/({})/([^/']+)'", folder))
            .expect("folder import pattern is invalid");
        Self { folder, pattern }
    }

    pub fn folder(&self) -> &'static str {
        self.folder
    }

    /// Apply this rule to `content`, returning the rewritten text and the
    /// number of substitutions made. Exempt names match the pattern but are
    /// emitted unchanged and not counted.
    pub fn apply(&self, content: &str) -> (String, usize) {
        let mut substitutions = 0;
        let rewritten = self.pattern.replace_all(content, |caps: &Captures| {
            let name = &caps[2];
            if EXEMPT_NAMES.contains(&name) {
                caps[0].to_string()
            } else {
                substitutions += 1;
                format!("from '@/{}/{}/{}'", &caps[1], name, name)
            }
        });
        (rewritten.into_owned(), substitutions)
    }
}

/// The full, ordered rule table. Built once at startup from the static
/// category list; immutable for the run.
#[derive(Debug)]
pub struct RuleSet {
    rules: Vec<FolderRule>,
}

impl RuleSet {
    /// Build the standard rule table from [`FOLDER_CATEGORIES`].
    // TODO: relative imports ('./', '../') still point at the old flat
    // layout; rewriting them needs depth-aware path resolution.
    pub fn standard() -> Self {
        Self {
            rules: FOLDER_CATEGORIES.iter().copied().map(FolderRule::new).collect(),
        }
    }

    /// Apply every rule in declaration order. Category literals are
    /// disjoint, so no match is rewritten twice and rules cannot interfere
    /// with each other.
    pub fn apply(&self, content: &str) -> (String, usize) {
        let mut text = content.to_string();
        let mut substitutions = 0;
        for rule in &self.rules {
            let (next, count) = rule.apply(&text);
            text = next;
            substitutions += count;
        }
        (text, substitutions)
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}
