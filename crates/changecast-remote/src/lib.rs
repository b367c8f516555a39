//! Changecast Remote - HTTP collaborators
//!
//! Pull request lookups against the GitHub REST API and changelog uploads to
//! chat webhooks.

pub mod error;
pub mod github;
pub mod webhook;

pub use error::{RemoteError, Result};
pub use github::GitHubClient;
pub use webhook::WebhookPublisher;
