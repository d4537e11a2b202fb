//! Document store
//!
//! Maps users and repos onto the `<data_dir>/<user>/<repo>/` layout and
//! drives [`GitExecutor`] for each operation. A repo exists once its
//! revision history has been initialized, whether or not a document has
//! been saved yet.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::codec;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::git::{GitError, GitExecutor, Parser};
use crate::model::{CommitRecord, RepoRef, RevisionView};

/// Result of a successful save
#[derive(Debug, Clone)]
pub struct SavedDocument {
    /// The document as it now reads
    pub content: String,
    /// The revision that was created
    pub revision: CommitRecord,
}

/// Presentation-facing access to users, repos and their revision history
#[derive(Debug, Clone)]
pub struct DocumentStore {
    config: Config,
}

impl DocumentStore {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current document of a repo, decoded
    ///
    /// A repo without a saved document reads as empty.
    pub fn get_document(&self, user: &str, repo: &str) -> Result<String> {
        let executor = self.existing_repo(user, repo)?;
        match fs::read_to_string(executor.document_path()) {
            Ok(stored) => Ok(codec::decode(&stored)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Replace the document and record a new revision
    pub fn save_document(
        &self,
        user: &str,
        repo: &str,
        prose: &str,
        message: &str,
    ) -> Result<SavedDocument> {
        let executor = self.existing_repo(user, repo)?;
        let encoded = codec::encode(prose)?;

        let line = executor.save(&encoded, message)?;
        let revision = Parser::parse_commit_line(&line, &RepoRef::new(user, repo))?;
        info!(%user, %repo, revision = %revision.short_id(), "saved document");

        Ok(SavedDocument {
            content: codec::decode(&encoded),
            revision,
        })
    }

    /// Every revision of a repo, newest first
    pub fn list_revisions(&self, user: &str, repo: &str) -> Result<Vec<CommitRecord>> {
        let executor = self.existing_repo(user, repo)?;
        let output = executor.log_raw()?;
        let repo_ref = RepoRef::new(user, repo);
        let records = Parser::parse_log(&output, &repo_ref)
            .collect::<std::result::Result<Vec<_>, GitError>>()?;
        Ok(records)
    }

    /// One revision with its rendered diff against its parent
    pub fn revision_diff(&self, user: &str, repo: &str, identifier: &str) -> Result<RevisionView> {
        let executor = self.existing_repo(user, repo)?;
        if !is_revision_identifier(identifier) {
            return Err(Error::RevisionNotFound(identifier.to_string()));
        }

        let output = executor.show_raw(identifier).map_err(|e| match e {
            GitError::UnknownRevision(_) => Error::RevisionNotFound(identifier.to_string()),
            other => other.into(),
        })?;

        let view = Parser::parse_show(
            &output,
            &RepoRef::new(user, repo),
            self.config.hunk_selection,
        )?;
        Ok(view)
    }

    /// Rendered diff for a record obtained from [`DocumentStore::list_revisions`]
    pub fn diff_for(&self, record: &CommitRecord) -> Result<RevisionView> {
        self.revision_diff(&record.repo.user, &record.repo.repo, &record.identifier)
    }

    /// Initialize an empty repo for an existing user
    pub fn create_repo(&self, user: &str, repo: &str) -> Result<()> {
        let user_dir = self.user_dir(user)?;
        if !user_dir.is_dir() {
            return Err(Error::UserNotFound(user.to_string()));
        }

        let executor = self.executor(user, repo)?;
        if executor.is_repository() {
            return Err(repo_exists(user, repo));
        }

        fs::create_dir_all(executor.repo_path())?;
        executor.init().map_err(|e| match e {
            GitError::AlreadyInitialized => repo_exists(user, repo),
            other => other.into(),
        })?;
        info!(%user, %repo, "created repo");
        Ok(())
    }

    pub fn create_user(&self, user: &str) -> Result<()> {
        let user_dir = self.user_dir(user)?;
        if user_dir.exists() {
            return Err(Error::UserExists(user.to_string()));
        }

        fs::create_dir_all(&user_dir)?;
        info!(%user, "created user");
        Ok(())
    }

    /// All user names, sorted
    pub fn list_users(&self) -> Result<Vec<String>> {
        list_dirs(&self.config.data_dir, |_| true)
    }

    /// Names of the user's initialized repos, sorted
    pub fn list_repos(&self, user: &str) -> Result<Vec<String>> {
        let user_dir = self.user_dir(user)?;
        if !user_dir.is_dir() {
            return Err(Error::UserNotFound(user.to_string()));
        }

        list_dirs(&user_dir, |name| {
            GitExecutor::with_repo_path(user_dir.join(name)).is_repository()
        })
    }

    fn user_dir(&self, user: &str) -> Result<PathBuf> {
        validate_name(user)?;
        Ok(self.config.data_dir.join(user))
    }

    fn executor(&self, user: &str, repo: &str) -> Result<GitExecutor> {
        validate_name(repo)?;
        let path = self.user_dir(user)?.join(repo);
        Ok(GitExecutor::from_config(&self.config, path))
    }

    /// Executor for a repo whose history exists
    fn existing_repo(&self, user: &str, repo: &str) -> Result<GitExecutor> {
        let executor = self.executor(user, repo)?;
        if executor.is_repository() {
            Ok(executor)
        } else {
            Err(Error::RepoNotFound {
                user: user.to_string(),
                repo: repo.to_string(),
            })
        }
    }
}

fn repo_exists(user: &str, repo: &str) -> Error {
    Error::RepoExists {
        user: user.to_string(),
        repo: repo.to_string(),
    }
}

/// A user or repo name must be a single, visible path component
fn validate_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && !name.starts_with('.')
        && !name.contains(['/', '\\', '\0'])
        && !name.chars().any(char::is_control);
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidName(name.to_string()))
    }
}

/// Abbreviated or full hex commit hash
fn is_revision_identifier(identifier: &str) -> bool {
    (4..=64).contains(&identifier.len()) && identifier.chars().all(|c| c.is_ascii_hexdigit())
}

/// Sorted names of subdirectories of `dir` accepted by `keep`
///
/// A missing `dir` lists as empty.
fn list_dirs(dir: &Path, keep: impl Fn(&str) -> bool) -> Result<Vec<String>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if !name.starts_with('.') && keep(&name) {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}
