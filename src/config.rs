//! Runtime configuration
//!
//! Everything the store needs to locate repos and drive git. The binary
//! fills this from command-line flags and environment variables.

use std::path::PathBuf;
use std::time::Duration;

use crate::git::constants::GIT_COMMAND;
use crate::model::HunkSelection;

/// Default root directory holding `<user>/<repo>/`
pub const DEFAULT_DATA_DIR: &str = "data";

/// Default bound on a single git invocation
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(30);

/// Identity recorded on every revision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub email: String,
}

impl Default for Author {
    fn default() -> Self {
        Self {
            name: "historian".to_string(),
            email: "historian@localhost".to_string(),
        }
    }
}

/// Store configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the `<user>/<repo>/` tree
    pub data_dir: PathBuf,
    /// git binary to invoke
    pub git_command: String,
    /// Upper bound on one git invocation
    pub command_timeout: Duration,
    /// Which hunks of a revision diff get rendered
    pub hunk_selection: HunkSelection,
    /// Author and committer identity
    pub author: Author,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            git_command: GIT_COMMAND.to_string(),
            command_timeout: DEFAULT_COMMAND_TIMEOUT,
            hunk_selection: HunkSelection::default(),
            author: Author::default(),
        }
    }
}

impl Config {
    /// Create a configuration rooted at `data_dir`
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    pub fn git_command(mut self, command: impl Into<String>) -> Self {
        self.git_command = command.into();
        self
    }

    pub fn command_timeout(mut self, timeout: Duration) -> Self {
        self.command_timeout = timeout;
        self
    }

    pub fn hunk_selection(mut self, selection: HunkSelection) -> Self {
        self.hunk_selection = selection;
        self
    }

    pub fn author(mut self, author: Author) -> Self {
        self.author = author;
        self
    }
}
