//! Configuration validation

use regex::Regex;
use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_git(config)?;
    validate_collect(config)?;
    validate_filter(config)?;
    validate_submodule(config)?;
    validate_github(config)?;
    validate_publish(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn invalid(field: impl Into<String>, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.into(),
        message: message.into(),
    }
}

fn validate_git(config: &Config) -> Result<()> {
    if config.git.remote.is_empty() {
        return Err(invalid("git.remote", "remote cannot be empty").into());
    }

    Ok(())
}

fn validate_collect(config: &Config) -> Result<()> {
    if config.collect.progress_interval == 0 {
        return Err(invalid("collect.progress_interval", "must be greater than zero").into());
    }

    Ok(())
}

fn validate_filter(config: &Config) -> Result<()> {
    for (i, pattern) in config.filter.ignore.iter().enumerate() {
        if let Err(e) = Regex::new(pattern) {
            return Err(invalid(format!("filter.ignore[{}]", i), e.to_string()).into());
        }
    }

    Ok(())
}

fn validate_submodule(config: &Config) -> Result<()> {
    if config.submodule.path.trim().is_empty() {
        return Err(invalid("submodule.path", "path cannot be empty").into());
    }

    if let Some(repository) = &config.submodule.repository {
        if repository.parse::<crate::types::RepoSlug>().is_err() {
            return Err(invalid("submodule.repository", "must be in owner/repo form").into());
        }
    }

    Ok(())
}

fn validate_github(config: &Config) -> Result<()> {
    if let Err(e) = url::Url::parse(&config.github.api_url) {
        return Err(invalid("github.api_url", e.to_string()).into());
    }

    if let Some(web_url) = &config.github.web_url {
        if let Err(e) = url::Url::parse(web_url) {
            return Err(invalid("github.web_url", e.to_string()).into());
        }
    }

    if config.github.timeout_secs == Some(0) {
        return Err(invalid("github.timeout_secs", "must be greater than zero").into());
    }

    Ok(())
}

fn validate_publish(config: &Config) -> Result<()> {
    if config.publish.announcement.trim().is_empty() {
        return Err(invalid("publish.announcement", "announcement cannot be empty").into());
    }

    Ok(())
}
