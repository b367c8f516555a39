//! Configuration types

use serde::{Deserialize, Serialize};

use crate::types::CollectionMode;

use super::defaults::{
    DEFAULT_ANNOUNCEMENT, DEFAULT_GITHUB_API_URL, DEFAULT_GITHUB_WEB_URL,
    DEFAULT_LEGACY_TAG_PREFIX, DEFAULT_PROGRESS_INTERVAL, DEFAULT_REMOTE, DEFAULT_SUBMODULE_PATH,
    ENTERPRISE_API_SUFFIX,
};

/// Main configuration for Changecast
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Git configuration
    pub git: GitConfig,

    /// Change collection configuration
    pub collect: CollectConfig,

    /// Change filtering configuration
    pub filter: FilterConfig,

    /// Vendored submodule configuration
    pub submodule: SubmoduleConfig,

    /// GitHub API configuration
    pub github: GitHubConfig,

    /// Webhook publishing configuration
    pub publish: PublishConfig,
}

/// Git configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    /// Remote whose URL identifies the hosted repository
    pub remote: String,

    /// Tags starting with this prefix belong to the old versioning scheme
    pub legacy_tag_prefix: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            remote: DEFAULT_REMOTE.to_string(),
            legacy_tag_prefix: DEFAULT_LEGACY_TAG_PREFIX.to_string(),
        }
    }
}

/// Change collection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectConfig {
    /// Whether to list commits or pull requests
    pub mode: CollectionMode,

    /// Report lookup progress every N commits
    pub progress_interval: usize,
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            mode: CollectionMode::default(),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

/// Change filtering configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Regular expressions; a change whose title matches any is dropped
    pub ignore: Vec<String>,
}

/// Vendored submodule configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmoduleConfig {
    /// Path of the submodule inside the repository
    pub path: String,

    /// Display name (defaults to the last path component)
    pub name: Option<String>,

    /// Upstream `owner/repo`, used for links (defaults to `.gitmodules`)
    pub repository: Option<String>,
}

impl Default for SubmoduleConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_SUBMODULE_PATH.to_string(),
            name: None,
            repository: None,
        }
    }
}

impl SubmoduleConfig {
    /// Name shown in the changelog
    pub fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| {
            self.path
                .trim_end_matches('/')
                .rsplit('/')
                .next()
                .unwrap_or(&self.path)
                .to_string()
        })
    }
}

/// GitHub API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// REST API base URL
    pub api_url: String,

    /// Web host for changelog links (derived from `api_url` when unset)
    pub web_url: Option<String>,

    /// Per-request timeout in seconds (none = client default)
    pub timeout_secs: Option<u64>,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_GITHUB_API_URL.to_string(),
            web_url: None,
            timeout_secs: None,
        }
    }
}

impl GitHubConfig {
    /// Web host the changelog links point at.
    ///
    /// An explicit `web_url` wins. A GitHub Enterprise Server API URL
    /// (`https://host/api/v3`) maps to `https://host`; anything else links to
    /// github.com.
    pub fn web_url(&self) -> String {
        if let Some(web_url) = &self.web_url {
            return web_url.trim_end_matches('/').to_string();
        }

        self.api_url
            .trim_end_matches('/')
            .strip_suffix(ENTERPRISE_API_SUFFIX)
            .map(str::to_string)
            .unwrap_or_else(|| DEFAULT_GITHUB_WEB_URL.to_string())
    }
}

/// Webhook publishing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PublishConfig {
    /// Text posted alongside the attachment; `{version}` is substituted
    pub announcement: String,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            announcement: DEFAULT_ANNOUNCEMENT.to_string(),
        }
    }
}

impl PublishConfig {
    /// Announcement text for a release
    pub fn announcement_for(&self, version: &str) -> String {
        self.announcement.replace("{version}", version)
    }
}
