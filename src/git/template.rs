//! git pretty-format definitions for stable output parsing
//!
//! These formats ensure consistent, parseable output from git commands
//! regardless of user configuration.

use super::constants::flags;

/// Separator used between fields in formatted output
pub const FIELD_SEPARATOR: &str = " -- ";

/// Pretty formats for git commands
pub struct Templates;

impl Templates {
    /// Format for `git log` and the metadata line of `git show`
    ///
    /// Fields (separated by ` -- `):
    /// 1. committer date, ISO-like (`2024-01-02 03:04:05 +0000`)
    /// 2. subject (first line of the message)
    /// 3. full commit hash
    pub fn revision() -> &'static str {
        concat!("%ci", " -- ", "%s", " -- ", "%H")
    }

    /// The full `--pretty=` argument for [`Templates::revision`]
    pub fn revision_arg() -> String {
        format!("{}tformat:{}", flags::PRETTY_PREFIX, Self::revision())
    }
}
