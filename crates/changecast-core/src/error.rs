//! Error types for Changecast

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ChangecastError
pub type Result<T> = std::result::Result<T, ChangecastError>;

/// Main error type for Changecast operations
#[derive(Debug, Error)]
pub enum ChangecastError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Git-related errors
    #[error(transparent)]
    Git(#[from] GitError),

    /// Changelog-related errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Git-related errors
#[derive(Debug, Error)]
pub enum GitError {
    /// Not a git repository
    #[error("Not a git repository: {0}")]
    NotARepository(PathBuf),

    /// Failed to open repository
    #[error("Failed to open repository: {0}")]
    OpenFailed(String),

    /// Remote not found
    #[error("Remote not found: {0}")]
    RemoteNotFound(String),

    /// Remote has no URL configured
    #[error("Remote '{0}' has no URL configured")]
    RemoteUrlMissing(String),

    /// Remote URL is not an owner/repo URL
    #[error("Could not determine owner/repo from remote URL: {0}")]
    UnrecognizedRemote(String),

    /// Fewer than two release tags
    #[error("Need at least two release tags to build a changelog, found {found}")]
    NotEnoughTags { found: usize },

    /// Tag does not exist
    #[error("Tag not found: {0}")]
    TagNotFound(String),

    /// Git2 library error
    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),
}

/// Changelog-related errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// An ignore pattern failed to compile
    #[error("Invalid ignore pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}
