//! Revision line parser (git log, first line of git show)

use chrono::DateTime;

use super::super::GitError;
use super::{Parser, REVISION_LINE_REGEX};
use crate::model::{CommitRecord, GIT_TIME_FORMAT, RepoRef};

impl Parser {
    /// Parse one `<timestamp> -- <subject> -- <hash>` line into a CommitRecord
    pub fn parse_commit_line(line: &str, repo: &RepoRef) -> Result<CommitRecord, GitError> {
        let caps = REVISION_LINE_REGEX.captures(line).ok_or_else(|| {
            GitError::ParseError(format!("Not a revision line: {:?}", line))
        })?;

        let time = DateTime::parse_from_str(&caps[1], GIT_TIME_FORMAT).map_err(|e| {
            GitError::ParseError(format!("Invalid timestamp {:?}: {}", &caps[1], e))
        })?;

        Ok(CommitRecord {
            time,
            message: caps[2].to_string(),
            identifier: caps[3].to_string(),
            repo: repo.clone(),
        })
    }

    /// Parse `git log` output lazily, one CommitRecord per non-blank line
    pub fn parse_log<'a>(
        output: &'a str,
        repo: &'a RepoRef,
    ) -> impl Iterator<Item = Result<CommitRecord, GitError>> + 'a {
        output
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(move |line| Self::parse_commit_line(line, repo))
    }
}
