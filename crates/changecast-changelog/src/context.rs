//! Inputs to changelog rendering

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use changecast_core::config::DEFAULT_GITHUB_WEB_URL;
use changecast_core::types::{Change, CollectionMode, RepoSlug, SubmoduleSnapshot, TagPair};

/// Vendored submodule as shown in the changelog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmoduleInfo {
    /// Display name
    pub name: String,
    /// Upstream repository, used for commit and compare links
    pub upstream: Option<RepoSlug>,
    /// Recorded commits at the two tags
    pub snapshot: SubmoduleSnapshot,
}

/// Everything needed to render one release changelog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseContext {
    /// Release tag pair
    pub tags: TagPair,
    /// Hosted repository
    pub repo: RepoSlug,
    /// How the changes were collected
    pub mode: CollectionMode,
    /// Changes to list, already filtered
    pub changes: Vec<Change>,
    /// Vendored submodule, if tracked
    pub submodule: Option<SubmoduleInfo>,
    /// Web host for repository links
    pub web_url: String,
}

impl ReleaseContext {
    /// Create a context without submodule information, linking to github.com
    pub fn new(tags: TagPair, repo: RepoSlug, mode: CollectionMode, changes: Vec<Change>) -> Self {
        Self {
            tags,
            repo,
            mode,
            changes,
            submodule: None,
            web_url: DEFAULT_GITHUB_WEB_URL.to_string(),
        }
    }

    /// Link to a different web host, such as a GitHub Enterprise Server
    pub fn with_web_url(mut self, web_url: impl Into<String>) -> Self {
        self.web_url = web_url.into();
        self
    }

    /// Attach submodule information
    pub fn with_submodule(mut self, submodule: SubmoduleInfo) -> Self {
        self.submodule = Some(submodule);
        self
    }

    /// Number of distinct authors across the changes
    pub fn contributor_count(&self) -> usize {
        self.changes
            .iter()
            .map(Change::author)
            .collect::<HashSet<_>>()
            .len()
    }

    /// Version string used in titles and file names
    pub fn version(&self) -> &str {
        &self.tags.latest
    }
}
