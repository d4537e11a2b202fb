//! git output parser
//!
//! Parses the output from git commands into structured data.

mod diff;
mod log;


use regex::Regex;
use std::sync::LazyLock;

/// Regex for one revision line in [`Templates::revision`](super::Templates::revision) format
/// Format: `<timestamp> -- <subject> -- <hash>`
/// Example: `2024-01-02 03:04:05 +0000 -- fix typo -- 3f2a9c...`
///
/// Groups:
/// 1. timestamp (never contains the separator, so matched lazily)
/// 2. subject (may itself contain ` -- `)
/// 3. hash (hex digits at the end of the line)
static REVISION_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?) -- (.*) -- ([0-9a-fA-F]+)$").expect("Invalid revision line regex")
});

/// Parser for git command output
pub struct Parser;
