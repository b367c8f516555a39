//! Core types for Changecast
//!
//! These are the plain records handed from one pipeline stage to the next.

use serde::{Deserialize, Serialize};

/// Owner and name of a hosted repository
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoSlug {
    /// Account or organisation owning the repository
    pub owner: String,
    /// Repository name, without any `.git` suffix
    pub repo: String,
}

impl RepoSlug {
    /// Create a new slug
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Web URL of the repository on the host at `web_url`
    pub fn html_url(&self, web_url: &str) -> String {
        format!("{}/{}/{}", web_url.trim_end_matches('/'), self.owner, self.repo)
    }

    /// Web URL of a compare view between two revisions
    pub fn compare_url(&self, web_url: &str, from: &str, to: &str) -> String {
        format!("{}/compare/{}...{}", self.html_url(web_url), from, to)
    }

    /// Web URL of a single commit
    pub fn commit_url(&self, web_url: &str, hash: &str) -> String {
        format!("{}/commit/{}", self.html_url(web_url), hash)
    }
}

impl std::fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

impl std::str::FromStr for RepoSlug {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().split_once('/') {
            Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
                Ok(Self::new(owner, repo.trim_end_matches(".git")))
            }
            _ => Err(format!("Expected owner/repo, got: {}", s)),
        }
    }
}

/// The two release tags a changelog is built between
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagPair {
    /// Most recent release tag
    pub latest: String,
    /// Release tag immediately before `latest`
    pub previous: String,
}

impl TagPair {
    /// Create a new tag pair
    pub fn new(latest: impl Into<String>, previous: impl Into<String>) -> Self {
        Self {
            latest: latest.into(),
            previous: previous.into(),
        }
    }
}

/// How changes between two tags are collected
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollectionMode {
    /// One entry per commit
    Commits,
    /// One entry per pull request, resolved through the hosting API
    #[default]
    PullRequests,
}

impl CollectionMode {
    /// Returns the string representation of the mode
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Commits => "commits",
            Self::PullRequests => "pull-requests",
        }
    }
}

impl std::fmt::Display for CollectionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CollectionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "commits" | "commit" => Ok(Self::Commits),
            "pull-requests" | "pull-request" | "prs" | "pr" => Ok(Self::PullRequests),
            _ => Err(format!("Unknown collection mode: {}", s)),
        }
    }
}

/// A raw commit entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitChange {
    /// Commit subject line
    pub message: String,
    /// Author name
    pub author: String,
    /// Abbreviated commit hash
    pub short_hash: String,
}

/// A pull request entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestChange {
    /// Pull request number
    pub number: u64,
    /// Pull request title
    pub title: String,
    /// Login of the pull request author
    pub author: String,
    /// Web URL of the pull request
    pub url: String,
}

/// A single change listed in the changelog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Change {
    Commit(CommitChange),
    PullRequest(PullRequestChange),
}

impl Change {
    /// Text matched by ignore patterns: the commit subject or PR title
    pub fn title(&self) -> &str {
        match self {
            Self::Commit(c) => &c.message,
            Self::PullRequest(pr) => &pr.title,
        }
    }

    /// Author name or login
    pub fn author(&self) -> &str {
        match self {
            Self::Commit(c) => &c.author,
            Self::PullRequest(pr) => &pr.author,
        }
    }
}

impl From<CommitChange> for Change {
    fn from(commit: CommitChange) -> Self {
        Self::Commit(commit)
    }
}

impl From<PullRequestChange> for Change {
    fn from(pr: PullRequestChange) -> Self {
        Self::PullRequest(pr)
    }
}

/// Commit recorded for a submodule at the two release tags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmoduleSnapshot {
    /// Submodule commit at the previous tag
    pub old: Option<String>,
    /// Submodule commit at the latest tag
    pub new: Option<String>,
}

impl SubmoduleSnapshot {
    /// Create a new snapshot
    pub fn new(old: Option<String>, new: Option<String>) -> Self {
        Self { old, new }
    }

    /// Whether the submodule moved to a different commit between the tags
    pub fn changed(&self) -> bool {
        matches!((&self.old, &self.new), (Some(old), Some(new)) if old != new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_slug_urls() {
        let slug = RepoSlug::new("goatcorp", "Dalamud");
        assert_eq!(
            slug.html_url("https://github.com"),
            "https://github.com/goatcorp/Dalamud"
        );
        assert_eq!(
            slug.compare_url("https://github.com", "1.1.0", "1.2.0"),
            "https://github.com/goatcorp/Dalamud/compare/1.1.0...1.2.0"
        );
        assert_eq!(
            slug.commit_url("https://git.example.com/", "abc1234"),
            "https://git.example.com/goatcorp/Dalamud/commit/abc1234"
        );
        assert_eq!(slug.to_string(), "goatcorp/Dalamud");
    }

    #[test]
    fn test_repo_slug_from_str() {
        let slug: RepoSlug = "aers/FFXIVClientStructs".parse().unwrap();
        assert_eq!(slug, RepoSlug::new("aers", "FFXIVClientStructs"));
        assert!("no-slash".parse::<RepoSlug>().is_err());
        assert!("a/b/c".parse::<RepoSlug>().is_err());
    }

    #[test]
    fn test_collection_mode_from_str() {
        assert_eq!(
            "commits".parse::<CollectionMode>().unwrap(),
            CollectionMode::Commits
        );
        assert_eq!(
            "prs".parse::<CollectionMode>().unwrap(),
            CollectionMode::PullRequests
        );
        assert!("tags".parse::<CollectionMode>().is_err());
    }

    #[test]
    fn test_change_accessors() {
        let change: Change = PullRequestChange {
            number: 10,
            title: "Fix crash".to_string(),
            author: "octocat".to_string(),
            url: "https://github.com/o/r/pull/10".to_string(),
        }
        .into();
        assert_eq!(change.title(), "Fix crash");
        assert_eq!(change.author(), "octocat");
    }

    #[test]
    fn test_submodule_changed() {
        let a = Some("aaa".to_string());
        let b = Some("bbb".to_string());
        assert!(SubmoduleSnapshot::new(a.clone(), b.clone()).changed());
        assert!(!SubmoduleSnapshot::new(a.clone(), a.clone()).changed());
        assert!(!SubmoduleSnapshot::new(None, b).changed());
    }
}
