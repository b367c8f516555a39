//! Changecast Core - Shared foundation for release changelog publishing
//!
//! This crate provides the data model passed between pipeline stages, the
//! error taxonomy, and the configuration system.

pub mod config;
pub mod error;
pub mod types;

pub use error::{ChangecastError, Result};
pub use types::{
    Change, CollectionMode, CommitChange, PullRequestChange, RepoSlug, SubmoduleSnapshot, TagPair,
};
