//! Historian - word-level revision history for prose documents
//!
//! Each repo is a single prose document kept in a git repository. Documents
//! are stored one word per line so that git's line diffs become word diffs.
//!
//! This library provides:
//! - [`codec`]: Word-per-line encoding of documents
//! - [`config`]: Store configuration
//! - [`error`]: Store error type
//! - [`git`]: git command execution and parsing
//! - [`model`]: Domain models
//! - [`store`]: User, repo and revision operations

pub mod codec;
pub mod config;
pub mod error;
pub mod git;
pub mod model;
pub mod store;

pub use config::{Author, Config};
pub use error::{Error, Result};
pub use store::{DocumentStore, SavedDocument};
