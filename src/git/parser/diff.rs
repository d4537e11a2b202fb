//! Diff output parser (git show)

use super::super::GitError;
use super::Parser;
use crate::codec;
use crate::model::{DiffLine, HunkSelection, RenderedDiff, RepoRef, RevisionView};

impl Parser {
    /// Parse `git show` output into a RevisionView
    ///
    /// Format:
    /// ```text
    /// 2024-01-02 03:04:05 +0000 -- fix typo -- 3f2a9c...
    /// diff --git a/data.txt b/data.txt
    /// index 1111111..2222222 100644
    /// --- a/data.txt
    /// +++ b/data.txt
    /// @@ -1,3 +1,3 @@
    ///  hello
    /// -world
    /// +there
    /// ```
    pub fn parse_show(
        output: &str,
        repo: &RepoRef,
        selection: HunkSelection,
    ) -> Result<RevisionView, GitError> {
        let (meta, body) = output.split_once('\n').unwrap_or((output, ""));
        let record = Self::parse_commit_line(meta, repo)?;
        let diff = Self::render_diff(body, selection);
        Ok(RevisionView { record, diff })
    }

    /// Render the unified-diff body of `git show`
    ///
    /// Everything up to the selected hunk header (file headers, index line,
    /// earlier hunks for [`HunkSelection::LastOnly`]) is dropped. A body
    /// without any hunk header renders as empty.
    pub fn render_diff(body: &str, selection: HunkSelection) -> RenderedDiff {
        // Split on '\n' only: a stored token may legitimately end in '\r'
        let lines: Vec<&str> = body.split_terminator('\n').collect();
        let mut headers = lines
            .iter()
            .enumerate()
            .filter(|(_, line)| Self::is_hunk_header(line))
            .map(|(i, _)| i);

        let start = match selection {
            HunkSelection::LastOnly => headers.next_back(),
            HunkSelection::All => headers.next(),
        };
        let Some(start) = start else {
            return RenderedDiff::default();
        };

        let lines = lines[start + 1..]
            .iter()
            .filter(|line| !Self::is_hunk_header(line))
            .filter_map(|line| Self::render_diff_line(line))
            .collect();

        RenderedDiff { lines }
    }

    /// `@@ -a,b +c,d @@`, optionally followed by git's function context
    pub(super) fn is_hunk_header(line: &str) -> bool {
        line.starts_with("@@") && line.get(2..).is_some_and(|rest| rest.contains("@@"))
    }

    /// Classify and decode one body line
    ///
    /// Bare `+`/`-` lines are empty tokens (from doubled spaces) and are
    /// skipped, as are `\ No newline at end of file` markers.
    pub(super) fn render_diff_line(line: &str) -> Option<DiffLine> {
        if line == "+" || line == "-" || line.starts_with('\\') {
            return None;
        }

        let rendered = if let Some(rest) = line.strip_prefix('+') {
            DiffLine::addition(codec::decode_token(rest))
        } else if let Some(rest) = line.strip_prefix('-') {
            DiffLine::deletion(codec::decode_token(rest))
        } else {
            let rest = line.strip_prefix(' ').unwrap_or(line);
            DiffLine::context(codec::decode_token(rest))
        };

        Some(rendered)
    }
}
