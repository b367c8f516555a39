//! Submodule pointer lookups

use std::path::Path;

use git2::ObjectType;
use tracing::{debug, instrument};

use crate::repository::GitRepo;
use changecast_core::types::{SubmoduleSnapshot, TagPair};

impl GitRepo {
    /// Commit recorded for the submodule at `path` in the tree of `tag`.
    ///
    /// Returns `None` when the tag has no gitlink at that path. Lookup errors
    /// are logged and also yield `None`.
    #[instrument(skip(self))]
    pub fn submodule_commit_at(&self, tag: &str, path: &str) -> Option<String> {
        let lookup = || -> crate::Result<Option<String>> {
            let tree = self.tag_commit(tag)?.tree()?;
            let entry = match tree.get_path(Path::new(path)) {
                Ok(entry) => entry,
                Err(e) if e.code() == git2::ErrorCode::NotFound => return Ok(None),
                Err(e) => return Err(e.into()),
            };

            if entry.kind() == Some(ObjectType::Commit) {
                Ok(Some(entry.id().to_string()))
            } else {
                Ok(None)
            }
        };

        match lookup() {
            Ok(hash) => {
                debug!(tag, path, hash = ?hash, "read submodule pointer");
                hash
            }
            Err(e) => {
                debug!(tag, path, error = %e, "submodule pointer lookup failed");
                None
            }
        }
    }

    /// Submodule commits at both tags of a release pair
    pub fn submodule_snapshot(&self, tags: &TagPair, path: &str) -> SubmoduleSnapshot {
        SubmoduleSnapshot::new(
            self.submodule_commit_at(&tags.previous, path),
            self.submodule_commit_at(&tags.latest, path),
        )
    }
}
