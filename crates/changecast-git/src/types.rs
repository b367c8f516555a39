//! Git types

use serde::{Deserialize, Serialize};

use changecast_core::types::CommitChange;

/// Length of abbreviated commit hashes
pub const SHORT_HASH_LEN: usize = 7;

/// Information about a git commit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitInfo {
    /// Commit hash (full)
    pub hash: String,
    /// Short hash (first 7 characters)
    pub short_hash: String,
    /// Commit message (first line)
    pub message: String,
    /// Author name
    pub author: String,
}

impl CommitInfo {
    /// Create a new CommitInfo
    pub fn new(
        hash: impl Into<String>,
        message: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        let hash = hash.into();
        let short_hash = short_hash(&hash);

        Self {
            hash,
            short_hash,
            message: message.into(),
            author: author.into(),
        }
    }

    /// Changelog entry for commit-mode collection
    pub fn to_change(&self) -> CommitChange {
        CommitChange {
            message: self.message.clone(),
            author: self.author.clone(),
            short_hash: self.short_hash.clone(),
        }
    }
}

/// Abbreviate a commit hash
pub fn short_hash(hash: &str) -> String {
    hash.chars().take(SHORT_HASH_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_info() {
        let commit = CommitInfo::new("abc1234567890", "Add plugin installer", "Author");
        assert_eq!(commit.short_hash, "abc1234");

        let change = commit.to_change();
        assert_eq!(change.message, "Add plugin installer");
        assert_eq!(change.author, "Author");
        assert_eq!(change.short_hash, "abc1234");
    }

    #[test]
    fn test_short_hash_of_short_input() {
        assert_eq!(short_hash("abc"), "abc");
    }
}
