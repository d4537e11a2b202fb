//! git command executor
//!
//! Handles running git commands and capturing their output.
//!
//! Every invocation runs with the repo as its working directory via
//! [`Command::current_dir`]. The process-wide working directory is never
//! touched, so calls against different repos can run on any number of
//! threads at once.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, warn};
use wait_timeout::ChildExt;

use super::GitError;
use super::constants::{self, commands, errors, flags};
use super::template::Templates;
use crate::config::{Author, Config, DEFAULT_COMMAND_TIMEOUT};

/// Executor for git commands against one repo
#[derive(Debug, Clone)]
pub struct GitExecutor {
    /// Path to the repository root
    repo_path: PathBuf,
    /// git binary to invoke
    command: String,
    /// Upper bound on a single invocation
    timeout: Duration,
    /// Identity recorded on commits
    author: Author,
}

impl GitExecutor {
    /// Create a new executor for a specific repository path
    pub fn with_repo_path(path: PathBuf) -> Self {
        Self {
            repo_path: path,
            command: constants::GIT_COMMAND.to_string(),
            timeout: DEFAULT_COMMAND_TIMEOUT,
            author: Author::default(),
        }
    }

    /// Create an executor for `path` using the binary, timeout and author from `config`
    pub fn from_config(config: &Config, path: PathBuf) -> Self {
        Self {
            repo_path: path,
            command: config.git_command.clone(),
            timeout: config.command_timeout,
            author: config.author.clone(),
        }
    }

    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }

    /// Path of the document file inside this repo
    pub fn document_path(&self) -> PathBuf {
        self.repo_path.join(constants::DOCUMENT_FILE)
    }

    /// Whether the revision history has been initialized
    pub fn is_repository(&self) -> bool {
        self.repo_path.join(constants::HISTORY_DIR).is_dir()
    }

    /// Run a git command with the given arguments
    ///
    /// Automatically disables color and commit signing and sets the author
    /// identity so output and behavior do not depend on user configuration.
    pub fn run(&self, args: &[&str]) -> Result<String, GitError> {
        if !self.repo_path.is_dir() {
            return Err(GitError::NotARepository);
        }

        let mut cmd = Command::new(&self.command);
        cmd.current_dir(&self.repo_path)
            .arg(flags::CONFIG)
            .arg(flags::NO_COLOR)
            .arg(flags::CONFIG)
            .arg(flags::NO_GPG_SIGN)
            .arg(flags::CONFIG)
            .arg(format!("{}{}", flags::USER_NAME_PREFIX, self.author.name))
            .arg(flags::CONFIG)
            .arg(format!("{}{}", flags::USER_EMAIL_PREFIX, self.author.email))
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        for var in constants::REDIRECTING_ENV {
            cmd.env_remove(var);
        }

        debug!(cwd = %self.repo_path.display(), ?args, "running git");

        let mut child = cmd.spawn().map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                GitError::GitNotFound
            } else {
                GitError::IoError(e)
            }
        })?;

        // Drain both pipes while waiting so a large diff cannot fill the
        // pipe buffer and stall the child.
        let stdout = child.stdout.take().map(drain);
        let stderr = child.stderr.take().map(drain);

        let status = match child.wait_timeout(self.timeout) {
            Ok(Some(status)) => status,
            Ok(None) => {
                warn!(cwd = %self.repo_path.display(), ?args, timeout = ?self.timeout, "git timed out");
                let _ = child.kill();
                let _ = child.wait();
                return Err(GitError::Timeout {
                    after: self.timeout,
                });
            }
            Err(e) => {
                warn!(cwd = %self.repo_path.display(), ?args, error = %e, "waiting for git failed");
                let _ = child.kill();
                let _ = child.wait();
                return Err(GitError::IoError(e));
            }
        };

        let stdout = join_output(stdout)?;
        let stderr = join_output(stderr)?;

        if status.success() {
            Ok(stdout)
        } else {
            let exit_code = status.code().unwrap_or(-1);

            // Check for common error patterns
            if stderr.contains(errors::NOT_A_REPO) {
                return Err(GitError::NotARepository);
            }
            if errors::UNKNOWN_REVISION.iter().any(|p| stderr.contains(p)) {
                return Err(GitError::UnknownRevision(stderr.trim().to_string()));
            }

            Err(GitError::CommandFailed { stderr, exit_code })
        }
    }

    /// Run `git init` to start an empty revision history
    pub fn init(&self) -> Result<(), GitError> {
        if self.is_repository() {
            return Err(GitError::AlreadyInitialized);
        }
        self.run(&[commands::INIT])?;
        Ok(())
    }

    /// Write `encoded` as the document, stage it and commit it with `message`
    ///
    /// A revision is created even if the content did not change. Returns the
    /// new revision's metadata line in [`Templates::revision`] format.
    ///
    /// If staging or committing fails, the previous document is put back so
    /// the working tree never holds text without a revision behind it.
    pub fn save(&self, encoded: &str, message: &str) -> Result<String, GitError> {
        let path = self.document_path();
        let previous = match fs::read(&path) {
            Ok(bytes) => Some(bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };

        fs::write(&path, encoded)?;
        if let Err(e) = self.commit_document(message) {
            warn!(cwd = %self.repo_path.display(), error = %e, "save failed, restoring document");
            let restored = match previous {
                Some(bytes) => fs::write(&path, bytes),
                None => fs::remove_file(&path),
            };
            if let Err(restore) = restored {
                warn!(cwd = %self.repo_path.display(), error = %restore, "could not restore document");
            }
            return Err(e);
        }

        let pretty = Templates::revision_arg();
        let output = self.run(&[commands::LOG, flags::ONE, &pretty])?;
        output
            .lines()
            .next()
            .map(str::to_string)
            .ok_or_else(|| GitError::ParseError("git log printed nothing after commit".to_string()))
    }

    fn commit_document(&self, message: &str) -> Result<(), GitError> {
        self.run(&[commands::ADD, constants::DOCUMENT_FILE])?;
        self.run(&[
            commands::COMMIT,
            flags::ALLOW_EMPTY,
            flags::ALLOW_EMPTY_MESSAGE,
            flags::MESSAGE,
            message,
        ])?;
        Ok(())
    }

    /// Run `git log --all` with the revision format
    ///
    /// A repository without any commits yields empty output.
    pub fn log_raw(&self) -> Result<String, GitError> {
        let pretty = Templates::revision_arg();
        match self.run(&[commands::LOG, flags::ALL, &pretty]) {
            Err(GitError::CommandFailed { stderr, .. })
                if errors::NO_COMMITS.iter().any(|p| stderr.contains(p)) =>
            {
                Ok(String::new())
            }
            other => other,
        }
    }

    /// Run `git show` for a revision with every unchanged line kept as context
    ///
    /// Blob and tree ids are reported as [`GitError::UnknownRevision`].
    pub fn show_raw(&self, identifier: &str) -> Result<String, GitError> {
        let revision = format!("{identifier}{}", constants::COMMIT_PEEL);
        let pretty = Templates::revision_arg();
        let context = format!("{}{}", flags::CONTEXT_PREFIX, constants::UNLIMITED_CONTEXT);
        self.run(&[commands::SHOW, &revision, &context, &pretty])
    }
}

/// Read a child pipe to the end on a helper thread
fn drain<R: Read + Send + 'static>(mut reader: R) -> JoinHandle<io::Result<Vec<u8>>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf)?;
        Ok(buf)
    })
}

/// Collect a drained pipe, failing if it could not be read completely
fn join_output(handle: Option<JoinHandle<io::Result<Vec<u8>>>>) -> Result<String, GitError> {
    let Some(handle) = handle else {
        return Ok(String::new());
    };
    let bytes = handle
        .join()
        .map_err(|_| io::Error::other("pipe reader thread panicked"))??;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
