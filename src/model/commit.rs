//! Commit record data model

use std::fmt;

use chrono::{DateTime, FixedOffset};

/// Timestamp format used by `%ci`
pub const GIT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Timestamp format shown to readers
pub const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d - %H:%M";

/// The user/repo pair a record belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRef {
    pub user: String,
    pub repo: String,
}

impl RepoRef {
    pub fn new(user: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            repo: repo.into(),
        }
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.user, self.repo)
    }
}

/// Metadata of one saved revision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// Committer timestamp, with its original offset
    pub time: DateTime<FixedOffset>,

    /// Subject of the revision message
    pub message: String,

    /// Full commit hash
    pub identifier: String,

    /// Repo this revision lives in, used to fetch its diff later
    pub repo: RepoRef,
}

impl CommitRecord {
    /// Timestamp as `YYYY-MM-DD - HH:MM`
    pub fn display_time(&self) -> String {
        self.time.format(DISPLAY_TIME_FORMAT).to_string()
    }

    /// Message wrapped in double quotes
    pub fn display_message(&self) -> String {
        format!("\"{}\"", self.message)
    }

    /// Get a display-friendly short ID
    pub fn short_id(&self) -> &str {
        self.identifier.get(..8).unwrap_or(&self.identifier)
    }
}

impl fmt::Display for CommitRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.display_time(),
            self.display_message(),
            self.identifier
        )
    }
}
