//! Git repository operations

use std::path::Path;

use git2::Repository;
use tracing::{info, instrument};

use changecast_core::error::GitError;

/// Result type for git operations
pub type Result<T> = std::result::Result<T, GitError>;

/// Git repository wrapper
pub struct GitRepo {
    pub(crate) repo: Repository,
}

impl GitRepo {
    /// Open a repository at the given path
    #[instrument(fields(path = %path.display()))]
    pub fn open(path: &Path) -> Result<Self> {
        info!(path = %path.display(), "opening git repository");
        let repo = Repository::open(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                GitError::NotARepository(path.to_path_buf())
            } else {
                GitError::OpenFailed(e.to_string())
            }
        })?;

        Ok(Self { repo })
    }

    /// Discover and open a repository by searching parent directories
    #[instrument(fields(start_path = %start_path.display()))]
    pub fn discover(start_path: &Path) -> Result<Self> {
        info!(start_path = %start_path.display(), "discovering git repository");
        let repo = Repository::discover(start_path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                GitError::NotARepository(start_path.to_path_buf())
            } else {
                GitError::OpenFailed(e.to_string())
            }
        })?;

        Ok(Self { repo })
    }

    /// Resolve a tag name to the commit it points at
    pub(crate) fn tag_commit(&self, tag_name: &str) -> Result<git2::Commit<'_>> {
        let tag_ref = format!("refs/tags/{}", tag_name);
        let reference = self.repo.find_reference(&tag_ref).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                GitError::TagNotFound(tag_name.to_string())
            } else {
                GitError::Git2(e)
            }
        })?;

        Ok(reference.peel_to_commit()?)
    }
}
