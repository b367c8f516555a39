//! Ignore-pattern filtering of collected changes

use regex::Regex;
use tracing::debug;

use changecast_core::error::ChangelogError;
use changecast_core::types::Change;

/// Drops changes whose title matches any ignore pattern
#[derive(Debug, Clone, Default)]
pub struct ChangeFilter {
    patterns: Vec<Regex>,
}

impl ChangeFilter {
    /// Compile a set of ignore patterns
    pub fn new<I, S>(patterns: I) -> Result<Self, ChangelogError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| {
                let p = p.as_ref();
                Regex::new(p).map_err(|e| ChangelogError::InvalidPattern {
                    pattern: p.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }

    /// Whether no patterns are configured
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Whether a change matches any ignore pattern
    pub fn is_ignored(&self, change: &Change) -> bool {
        let title = change.title();
        self.patterns.iter().any(|p| p.is_match(title))
    }

    /// Keep the changes matching no pattern, preserving order
    pub fn apply(&self, changes: Vec<Change>) -> Vec<Change> {
        if self.is_empty() {
            return changes;
        }

        let before = changes.len();
        let kept: Vec<Change> = changes.into_iter().filter(|c| !self.is_ignored(c)).collect();
        debug!(before, after = kept.len(), "applied ignore patterns");
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use changecast_core::types::{CommitChange, PullRequestChange};

    fn pr(number: u64, title: &str, author: &str) -> Change {
        Change::PullRequest(PullRequestChange {
            number,
            title: title.to_string(),
            author: author.to_string(),
            url: format!("https://github.com/o/r/pull/{}", number),
        })
    }

    #[test]
    fn test_anchored_pattern_removes_matching_titles() {
        let filter = ChangeFilter::new(["^chore:"]).unwrap();
        let changes = vec![
            pr(1, "chore: bump deps", "a"),
            pr(2, "Fix crash", "b"),
            pr(3, "Add chore: list", "c"),
            pr(4, "chore: tidy", "d"),
        ];

        let kept = filter.apply(changes);
        assert_eq!(kept, vec![pr(2, "Fix crash", "b"), pr(3, "Add chore: list", "c")]);
    }

    #[test]
    fn test_unanchored_substring_match() {
        let filter = ChangeFilter::new(["wip"]).unwrap();
        assert!(filter.is_ignored(&pr(1, "feature (wip)", "a")));
        assert!(!filter.is_ignored(&pr(2, "feature", "a")));
    }

    #[test]
    fn test_patterns_are_ored() {
        let filter = ChangeFilter::new(["^ci:", "^docs:"]).unwrap();
        let kept = filter.apply(vec![
            pr(1, "ci: cache", "a"),
            pr(2, "docs: readme", "a"),
            pr(3, "Fix", "a"),
        ]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].title(), "Fix");
    }

    #[test]
    fn test_author_is_not_matched() {
        let filter = ChangeFilter::new(["dependabot"]).unwrap();
        let change = Change::Commit(CommitChange {
            message: "Bump serde".to_string(),
            author: "dependabot".to_string(),
            short_hash: "dependa".to_string(),
        });
        assert!(!filter.is_ignored(&change));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let filter = ChangeFilter::new(["^chore:", "typo"]).unwrap();
        let changes = vec![
            pr(1, "chore: x", "a"),
            pr(2, "Fix typo", "a"),
            pr(3, "Add API", "b"),
        ];

        let once = filter.apply(changes);
        let twice = filter.apply(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let filter = ChangeFilter::new(Vec::<String>::new()).unwrap();
        assert!(filter.is_empty());
        let changes = vec![pr(1, "chore: x", "a")];
        assert_eq!(filter.apply(changes.clone()), changes);
    }

    #[test]
    fn test_invalid_pattern() {
        let err = ChangeFilter::new(["(open"]).unwrap_err();
        assert!(matches!(err, ChangelogError::InvalidPattern { .. }));
    }
}
