//! Changecast Changelog - Turning release history into a markdown document
//!
//! This crate collects changes between two tags (as commits or pull
//! requests), filters out noise, and renders the changelog.

pub mod collector;
pub mod context;
pub mod filter;
pub mod formatter;

pub use collector::{collect_commits, is_progress_step, ChangeCollector, PullRequestLookup};
pub use context::{ReleaseContext, SubmoduleInfo};
pub use filter::ChangeFilter;
pub use formatter::{ChangelogFormatter, MarkdownFormatter};
