//! Tag operations

use tracing::{debug, info, instrument};

use crate::repository::{GitRepo, Result};
use crate::version::version_cmp;
use changecast_core::error::GitError;
use changecast_core::types::TagPair;

impl GitRepo {
    /// Names of all tags, lightweight and annotated
    #[instrument(skip(self))]
    pub fn tag_names(&self) -> Result<Vec<String>> {
        let names: Vec<String> = self
            .repo
            .tag_names(None)?
            .iter()
            .flatten()
            .map(str::to_string)
            .collect();

        debug!(count = names.len(), "listed all tags");
        Ok(names)
    }

    /// The two most recent release tags
    #[instrument(skip(self), fields(legacy_prefix))]
    pub fn latest_release_pair(&self, legacy_prefix: &str) -> Result<TagPair> {
        let names = self.tag_names()?;
        let pair = select_release_pair(names.iter().map(String::as_str), legacy_prefix)?;
        info!(latest = %pair.latest, previous = %pair.previous, "resolved release tags");
        Ok(pair)
    }
}

fn is_legacy(name: &str, legacy_prefix: &str) -> bool {
    !legacy_prefix.is_empty() && name.starts_with(legacy_prefix)
}

/// Pick the two highest versions among non-legacy tag names.
///
/// An empty prefix disables legacy exclusion.
pub fn select_release_pair<'a>(
    names: impl IntoIterator<Item = &'a str>,
    legacy_prefix: &str,
) -> Result<TagPair> {
    let mut names: Vec<&str> = names
        .into_iter()
        .filter(|n| !is_legacy(n, legacy_prefix))
        .collect();

    names.sort_by(|a, b| version_cmp(b, a));
    names.dedup();

    match names.as_slice() {
        [latest, previous, ..] => Ok(TagPair::new(*latest, *previous)),
        _ => Err(GitError::NotEnoughTags { found: names.len() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::Fixture;

    #[test]
    fn test_select_excludes_legacy_tags() {
        let pair = select_release_pair(["1.2.0", "1.1.0", "v0.9.0"], "v").unwrap();
        assert_eq!(pair, TagPair::new("1.2.0", "1.1.0"));
    }

    #[test]
    fn test_select_ignores_input_order() {
        let pair = select_release_pair(["1.1.0", "v9.9.9", "1.10.0", "1.9.0"], "v").unwrap();
        assert_eq!(pair, TagPair::new("1.10.0", "1.9.0"));
    }

    #[test]
    fn test_select_four_component_versions() {
        let pair = select_release_pair(["9.0.0.9", "9.0.0.17", "9.0.0.10"], "v").unwrap();
        assert_eq!(pair, TagPair::new("9.0.0.17", "9.0.0.10"));
    }

    #[test]
    fn test_select_requires_two_tags() {
        let result = select_release_pair(["1.0.0", "v0.1.0", "v0.2.0"], "v");
        assert!(matches!(result, Err(GitError::NotEnoughTags { found: 1 })));

        let result = select_release_pair(std::iter::empty(), "v");
        assert!(matches!(result, Err(GitError::NotEnoughTags { found: 0 })));
    }

    #[test]
    fn test_select_empty_prefix_keeps_everything() {
        let pair = select_release_pair(["v2.0.0", "1.0.0"], "").unwrap();
        assert_eq!(pair, TagPair::new("v2.0.0", "1.0.0"));
    }

    #[test]
    fn test_select_is_independent_of_input_order() {
        let tags = ["2.0.0-rc.1", "2.0.0", "2.0.0-beta_1"];
        let orders = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];

        for order in orders {
            let names = order.iter().map(|&i| tags[i]);
            let pair = select_release_pair(names, "v").unwrap();
            assert_eq!(pair, TagPair::new("2.0.0", "2.0.0-rc.1"), "order {order:?}");
        }
    }

    #[test]
    fn test_select_many_tags_in_any_rotation() {
        let mut tags = vec![
            "1.0.0", "1.0.1", "1.1.0-rc.1", "1.1.0", "1.2.0-beta_2", "1.2.0", "1.10.0",
            "1.9.0", "2.0.0-alpha", "2.0.0-rc.1", "2.0.0-rc.2", "2.0.0", "2.0.0.1", "v3.0.0",
            "release-4", "nightly", "0.9.0", "0.10.0", "1.0", "2.0.0_hotfix", "2.0.0-rc.10",
            "2.0.0.1-rc.1",
        ];

        for _ in 0..tags.len() {
            tags.rotate_left(1);
            let pair = select_release_pair(tags.iter().copied(), "v").unwrap();
            assert_eq!(pair, TagPair::new("2.0.0.1", "2.0.0.1-rc.1"));
        }
    }

    #[test]
    fn test_list_tags() {
        let fixture = Fixture::new();
        let oid = fixture.commit("Initial commit", "Alice");
        fixture.tag("1.0.0", oid);
        fixture.annotated_tag("1.1.0", oid);

        let repo = fixture.open();
        let mut names = repo.tag_names().unwrap();
        names.sort();
        assert_eq!(names, vec!["1.0.0", "1.1.0"]);
    }

    #[test]
    fn test_latest_release_pair_skips_legacy_tags() {
        let fixture = Fixture::new();
        let first = fixture.commit("first", "Alice");
        fixture.tag("v0.9.0", first);
        fixture.tag("1.1.0", first);
        let second = fixture.commit("second", "Bob");
        fixture.annotated_tag("1.2.0", second);

        let repo = fixture.open();
        let pair = repo.latest_release_pair("v").unwrap();
        assert_eq!(pair, TagPair::new("1.2.0", "1.1.0"));
    }

    #[test]
    fn test_latest_release_pair_without_tags() {
        let fixture = Fixture::new();
        fixture.commit("first", "Alice");

        let repo = fixture.open();
        assert!(matches!(
            repo.latest_release_pair("v"),
            Err(GitError::NotEnoughTags { found: 0 })
        ));
    }
}
