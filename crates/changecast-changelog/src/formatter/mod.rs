//! Changelog formatters

mod markdown;

pub use markdown::MarkdownFormatter;

use crate::context::ReleaseContext;

/// Trait for changelog formatters
pub trait ChangelogFormatter: Send + Sync {
    /// Render a release changelog
    fn format(&self, context: &ReleaseContext) -> String;

    /// Get the file extension for this format
    fn extension(&self) -> &'static str;

    /// File name used when the changelog is attached to a message
    fn file_name(&self, version: &str) -> String {
        format!("changelog-v{}.{}", version, self.extension())
    }
}
