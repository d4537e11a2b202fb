//! Data models for Historian
//!
//! This module contains presentation-independent data structures
//! representing revisions and their rendered diffs.

mod commit;
mod diff;

pub use commit::{CommitRecord, DISPLAY_TIME_FORMAT, GIT_TIME_FORMAT, RepoRef};
pub use diff::{DiffLine, DiffLineKind, HunkSelection, RenderedDiff, RevisionView};
