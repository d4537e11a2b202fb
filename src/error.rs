//! Errors surfaced by the document store

use std::io;

use thiserror::Error;

use crate::git::GitError;

/// Errors that can occur when working with users, repos and revisions
#[derive(Error, Debug)]
pub enum Error {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Repo not found: {user}/{repo}")]
    RepoNotFound { user: String, repo: String },

    #[error("Revision not found: {0}")]
    RevisionNotFound(String),

    #[error("User already exists: {0}")]
    UserExists(String),

    #[error("Repo already exists: {user}/{repo}")]
    RepoExists { user: String, repo: String },

    #[error("Invalid name: {0:?}")]
    InvalidName(String),

    #[error("Text contains the reserved line-break token at byte {offset}")]
    EncodingViolation { offset: usize },

    #[error("Malformed revision history: {0}")]
    Parse(String),

    #[error("Revision store failed: {0}")]
    Store(GitError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// User, repo or revision is absent
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::RepoNotFound { .. } | Self::RevisionNotFound(_)
        )
    }

    /// User or repo creation collided with an existing one
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::UserExists(_) | Self::RepoExists { .. })
    }
}

impl From<GitError> for Error {
    fn from(e: GitError) -> Self {
        match e {
            GitError::ParseError(msg) => Self::Parse(msg),
            other => Self::Store(other),
        }
    }
}

/// Convenience alias for store results
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_family() {
        assert!(Error::UserNotFound("alice".into()).is_not_found());
        assert!(
            Error::RepoNotFound {
                user: "alice".into(),
                repo: "novel".into()
            }
            .is_not_found()
        );
        assert!(Error::RevisionNotFound("abc123".into()).is_not_found());
        assert!(!Error::UserExists("alice".into()).is_not_found());
    }

    #[test]
    fn test_already_exists_family() {
        assert!(Error::UserExists("alice".into()).is_already_exists());
        assert!(
            Error::RepoExists {
                user: "alice".into(),
                repo: "novel".into()
            }
            .is_already_exists()
        );
        assert!(!Error::InvalidName("..".into()).is_already_exists());
    }

    #[test]
    fn test_git_parse_error_maps_to_parse() {
        let err: Error = GitError::ParseError("bad line".into()).into();
        assert!(matches!(err, Error::Parse(ref m) if m == "bad line"));

        let err: Error = GitError::GitNotFound.into();
        assert!(matches!(err, Error::Store(GitError::GitNotFound)));
    }

    #[test]
    fn test_display() {
        let err = Error::RepoNotFound {
            user: "alice".into(),
            repo: "novel".into(),
        };
        assert_eq!(err.to_string(), "Repo not found: alice/novel");
        assert_eq!(
            Error::EncodingViolation { offset: 3 }.to_string(),
            "Text contains the reserved line-break token at byte 3"
        );
    }
}
