//! Diff data model
//!
//! Represents a rendered revision diff from `git show`.

use std::fmt::Write as _;

use super::CommitRecord;

/// Rendered diff of one revision against its parent
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenderedDiff {
    /// All rendered lines, in order
    pub lines: Vec<DiffLine>,
}

impl RenderedDiff {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of added tokens
    pub fn additions(&self) -> usize {
        self.count(DiffLineKind::Addition)
    }

    /// Number of deleted tokens
    pub fn deletions(&self) -> usize {
        self.count(DiffLineKind::Deletion)
    }

    fn count(&self, kind: DiffLineKind) -> usize {
        self.lines.iter().filter(|l| l.kind == kind).count()
    }

    /// Render as class-tagged `<span>` elements, one per line
    ///
    /// Text is HTML-escaped. Lines are joined with `\n`.
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let _ = write!(
                out,
                "<span class=\"{}\">{}</span>",
                line.kind.class_name(),
                v_htmlescape::escape(&line.text)
            );
        }
        out
    }
}

/// A single line in the rendered diff
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffLine {
    /// Type of this line
    pub kind: DiffLineKind,
    /// Decoded text of the line
    pub text: String,
}

impl DiffLine {
    pub fn addition(text: impl Into<String>) -> Self {
        Self {
            kind: DiffLineKind::Addition,
            text: text.into(),
        }
    }

    pub fn deletion(text: impl Into<String>) -> Self {
        Self {
            kind: DiffLineKind::Deletion,
            text: text.into(),
        }
    }

    pub fn context(text: impl Into<String>) -> Self {
        Self {
            kind: DiffLineKind::Context,
            text: text.into(),
        }
    }
}

/// Type of diff line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffLineKind {
    /// Added token
    Addition,
    /// Deleted token
    Deletion,
    /// Unchanged token
    Context,
}

impl DiffLineKind {
    /// CSS class used in markup output
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Addition => "addition",
            Self::Deletion => "deletion",
            Self::Context => "context",
        }
    }
}

/// Which hunks of a multi-hunk diff get rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HunkSelection {
    /// Only the content after the last hunk header
    #[default]
    LastOnly,
    /// Every hunk, with the headers themselves dropped
    All,
}

/// A revision's metadata together with its rendered diff
#[derive(Debug, Clone)]
pub struct RevisionView {
    pub record: CommitRecord,
    pub diff: RenderedDiff,
}
