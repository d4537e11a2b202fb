//! TestStore helper for integration tests.
//!
//! Provides a DocumentStore rooted in a temporary data directory.

use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

use historian::{Config, DocumentStore};

/// A document store over a temporary data directory.
///
/// The directory is automatically cleaned up when the TestStore is dropped.
pub struct TestStore {
    dir: TempDir,
    pub store: DocumentStore,
}

impl TestStore {
    /// Create an empty store in a temporary directory.
    pub fn new() -> Self {
        Self::with_config(|config| config)
    }

    /// Create a store whose configuration is adjusted by `tweak`.
    pub fn with_config(tweak: impl FnOnce(Config) -> Config) -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let store = DocumentStore::new(tweak(Config::with_data_dir(dir.path())));
        Self { dir, store }
    }

    /// Create a store with one user owning one empty repo.
    pub fn with_repo(user: &str, repo: &str) -> Self {
        let test = Self::new();
        test.store.create_user(user).expect("create_user should succeed");
        test.store
            .create_repo(user, repo)
            .expect("create_repo should succeed");
        test
    }

    /// Get the path to the data directory.
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Get the path to a repo directory.
    pub fn repo_path(&self, user: &str, repo: &str) -> PathBuf {
        self.path().join(user).join(repo)
    }

    /// Read the stored (encoded) document of a repo.
    ///
    /// Returns an empty string if the file does not exist.
    pub fn read_stored(&self, user: &str, repo: &str) -> String {
        std::fs::read_to_string(self.repo_path(user, repo).join("data.txt")).unwrap_or_default()
    }

    /// Execute a git command in a repo.
    ///
    /// # Panics
    ///
    /// Panics if the command fails to execute or returns a non-zero exit code.
    pub fn git(&self, user: &str, repo: &str, args: &[&str]) -> String {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.repo_path(user, repo))
            .output()
            .expect("Failed to execute git command");

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            panic!(
                "git {:?} failed with exit code {:?}:\n{}",
                args,
                output.status.code(),
                stderr
            );
        }

        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Count the commits reachable from any ref.
    pub fn count_revisions(&self, user: &str, repo: &str) -> usize {
        self.git(user, repo, &["rev-list", "--all", "--count"])
            .trim()
            .parse()
            .expect("rev-list --count prints a number")
    }
}

impl Default for TestStore {
    fn default() -> Self {
        Self::new()
    }
}
