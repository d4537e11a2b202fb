//! git-specific constants
//!
//! Centralized definitions for git command names, flags, and error patterns.

/// git command binary name
pub const GIT_COMMAND: &str = "git";

/// Name of the document file at the root of every repo
pub const DOCUMENT_FILE: &str = "data.txt";

/// Name of the directory holding the revision history
pub const HISTORY_DIR: &str = ".git";

/// Context radius passed to `git show -U`, large enough that no unchanged
/// line is ever left out of a hunk.
pub const UNLIMITED_CONTEXT: u32 = 1_000_000_000;

/// Revision suffix that only resolves when the object is a commit
pub const COMMIT_PEEL: &str = "^{commit}";

/// git subcommands
pub mod commands {
    pub const INIT: &str = "init";
    pub const ADD: &str = "add";
    pub const COMMIT: &str = "commit";
    pub const LOG: &str = "log";
    pub const SHOW: &str = "show";
}

/// git command flags
pub mod flags {
    /// Pass a config override for a single invocation
    pub const CONFIG: &str = "-c";
    /// Disable color output for parsing
    pub const NO_COLOR: &str = "color.ui=never";
    /// Never try to sign commits, which could prompt for a passphrase
    pub const NO_GPG_SIGN: &str = "commit.gpgsign=false";
    /// Commit message
    pub const MESSAGE: &str = "-m";
    /// Commit even when the tree is unchanged
    pub const ALLOW_EMPTY: &str = "--allow-empty";
    /// Commit even when the message is empty
    pub const ALLOW_EMPTY_MESSAGE: &str = "--allow-empty-message";
    /// Walk every ref, not just HEAD
    pub const ALL: &str = "--all";
    /// Limit output to one revision
    pub const ONE: &str = "-1";
    /// Prefix for the pretty format flag
    pub const PRETTY_PREFIX: &str = "--pretty=";
    /// Prefix for the unified context flag
    pub const CONTEXT_PREFIX: &str = "-U";
    /// Prefix for the author name override
    pub const USER_NAME_PREFIX: &str = "user.name=";
    /// Prefix for the author email override
    pub const USER_EMAIL_PREFIX: &str = "user.email=";
}

/// Environment variables that would redirect git away from `current_dir`
pub const REDIRECTING_ENV: &[&str] = &["GIT_DIR", "GIT_WORK_TREE", "GIT_INDEX_FILE"];

/// Error detection patterns in git stderr
pub mod errors {
    /// Pattern indicating not a git repository
    pub const NOT_A_REPO: &str = "not a git repository";
    /// Patterns indicating the requested revision does not exist
    pub const UNKNOWN_REVISION: &[&str] = &[
        "bad object",
        "unknown revision",
        "bad revision",
        "ambiguous argument",
    ];
    /// Patterns older git versions print for `git log` in a repository
    /// with no commits yet
    pub const NO_COMMITS: &[&str] = &["does not have any commits yet", "bad default revision"];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_command_name() {
        assert_eq!(GIT_COMMAND, "git");
    }

    #[test]
    fn test_context_radius_is_huge() {
        assert!(UNLIMITED_CONTEXT >= 1_000_000);
    }

    #[test]
    fn test_no_color_flag_format() {
        assert!(flags::NO_COLOR.starts_with("color.ui="));
    }

    #[test]
    fn test_commit_peel_suffix() {
        assert_eq!(format!("abc123{COMMIT_PEEL}"), "abc123^{commit}");
    }
}
