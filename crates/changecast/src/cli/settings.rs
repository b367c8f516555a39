//! Effective run settings: CLI flags layered over the config file

use std::path::PathBuf;
use std::time::Duration;

use changecast_changelog::ChangeFilter;
use changecast_core::config::{Config, GitHubConfig, PublishConfig, SubmoduleConfig};
use changecast_core::error::ConfigError;
use changecast_core::types::CollectionMode;

use super::Cli;

/// Everything a run needs, after precedence is applied
#[derive(Debug, Clone)]
pub struct Settings {
    pub remote: String,
    pub legacy_tag_prefix: String,
    pub mode: CollectionMode,
    pub progress_interval: usize,
    pub filter: ChangeFilter,
    pub submodule: SubmoduleConfig,
    pub github: GitHubConfig,
    pub github_token: Option<String>,
    pub webhook_url: Option<String>,
    pub publish: PublishConfig,
    pub dry_run: bool,
    pub output: Option<PathBuf>,
}

impl Settings {
    /// Merge CLI flags over a loaded config.
    ///
    /// Flags win over the file; ignore patterns from both are combined, file
    /// patterns first.
    pub fn resolve(cli: &Cli, config: Config) -> Result<Self, ConfigError> {
        let Config {
            git,
            collect,
            filter,
            mut submodule,
            github,
            publish,
        } = config;

        let patterns: Vec<String> = filter
            .ignore
            .into_iter()
            .chain(cli.ignore.iter().cloned())
            .collect();
        let filter = ChangeFilter::new(&patterns).map_err(|e| ConfigError::InvalidValue {
            field: "ignore".to_string(),
            message: e.to_string(),
        })?;

        if let Some(path) = &cli.submodule_path {
            if path.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "submodule-path".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
            submodule.path = path.clone();
        }

        let webhook_url = cli.webhook_url.clone().filter(|u| !u.trim().is_empty());
        if webhook_url.is_none() && !cli.dry_run {
            return Err(ConfigError::InvalidValue {
                field: "webhook-url".to_string(),
                message: "required unless --dry-run is given".to_string(),
            });
        }

        Ok(Self {
            remote: cli.remote.clone().unwrap_or(git.remote),
            legacy_tag_prefix: git.legacy_tag_prefix,
            mode: cli.mode.unwrap_or(collect.mode),
            progress_interval: collect.progress_interval,
            filter,
            submodule,
            github,
            github_token: cli.github_token.clone().filter(|t| !t.is_empty()),
            webhook_url,
            publish,
            dry_run: cli.dry_run,
            output: cli.output.clone(),
        })
    }

    /// Per-request HTTP timeout, if configured
    pub fn timeout(&self) -> Option<Duration> {
        self.github.timeout_secs.map(Duration::from_secs)
    }
}
