//! Exit codes for the CLI

use changecast_core::error::{ChangecastError, ConfigError, GitError};
use changecast_remote::RemoteError;

/// General error
pub const ERROR: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// Git error
pub const GIT_ERROR: i32 = 3;

/// GitHub API or webhook error
pub const REMOTE_ERROR: i32 = 6;

/// Map a failure to the process exit code
pub fn for_error(err: &anyhow::Error) -> i32 {
    if let Some(err) = err.downcast_ref::<ChangecastError>() {
        return match err {
            ChangecastError::Config(_) => CONFIG_ERROR,
            ChangecastError::Git(_) => GIT_ERROR,
            _ => ERROR,
        };
    }
    if err.downcast_ref::<ConfigError>().is_some() {
        return CONFIG_ERROR;
    }
    if err.downcast_ref::<GitError>().is_some() {
        return GIT_ERROR;
    }
    if err.downcast_ref::<RemoteError>().is_some() {
        return REMOTE_ERROR;
    }
    ERROR
}
