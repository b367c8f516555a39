//! Commit history operations

use git2::Sort;
use tracing::{debug, instrument};

use crate::repository::{GitRepo, Result};
use crate::types::CommitInfo;

impl GitRepo {
    /// Commits reachable from `latest` but not from `previous`, newest first
    #[instrument(skip(self))]
    pub fn commits_between(&self, previous: &str, latest: &str) -> Result<Vec<CommitInfo>> {
        let from = self.tag_commit(previous)?.id();
        let to = self.tag_commit(latest)?.id();

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(to)?;
        revwalk.hide(from)?;

        let mut commits = Vec::new();

        for oid in revwalk {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;
            commits.push(commit_to_info(&commit));
        }

        debug!(count = commits.len(), "listed commits between tags");
        Ok(commits)
    }

    /// Full hashes of the commits between two tags, newest first
    pub fn commit_hashes_between(&self, previous: &str, latest: &str) -> Result<Vec<String>> {
        Ok(self
            .commits_between(previous, latest)?
            .into_iter()
            .map(|c| c.hash)
            .collect())
    }
}

/// Convert a git2 Commit to CommitInfo
fn commit_to_info(commit: &git2::Commit<'_>) -> CommitInfo {
    let hash = commit.id().to_string();
    let author = commit.author();

    let message = commit.summary().unwrap_or("(no message)").to_string();

    CommitInfo::new(hash, message, author.name().unwrap_or("Unknown"))
}
