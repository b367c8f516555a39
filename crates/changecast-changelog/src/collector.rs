//! Change collection between two release tags

use std::collections::HashSet;
use std::fmt::Display;

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

use changecast_core::types::{Change, PullRequestChange};
use changecast_git::types::short_hash;
use changecast_git::CommitInfo;

/// Resolves the pull request a commit belongs to
#[async_trait]
pub trait PullRequestLookup: Send + Sync {
    /// Error produced by a failed lookup
    type Error: Display + Send;

    /// First pull request associated with `sha`, if any
    async fn pull_request_for_commit(
        &self,
        sha: &str,
    ) -> Result<Option<PullRequestChange>, Self::Error>;
}

/// Commit-mode collection: one change per commit, newest first
pub fn collect_commits(commits: &[CommitInfo]) -> Vec<Change> {
    commits.iter().map(|c| Change::Commit(c.to_change())).collect()
}

/// Whether `done` of `total` lookups is a point at which to report progress:
/// every `interval` lookups, and once more when the last one finishes.
pub fn is_progress_step(done: usize, total: usize, interval: usize) -> bool {
    done > 0 && (done % interval.max(1) == 0 || done == total)
}

type ProgressCallback<'a> = Box<dyn FnMut(usize, usize) + 'a>;

/// Pull-request-mode collector
pub struct ChangeCollector<'a> {
    progress_interval: usize,
    on_progress: Option<ProgressCallback<'a>>,
}

impl<'a> ChangeCollector<'a> {
    /// Create a collector reporting progress every `progress_interval` commits
    pub fn new(progress_interval: usize) -> Self {
        Self {
            progress_interval: progress_interval.max(1),
            on_progress: None,
        }
    }

    /// Called after every lookup with `(done, total)`
    pub fn with_progress(mut self, callback: impl FnMut(usize, usize) + 'a) -> Self {
        self.on_progress = Some(Box::new(callback));
        self
    }

    /// Resolve pull requests for commits listed newest first.
    ///
    /// Lookups run one at a time. Only the first pull request per commit is
    /// kept, duplicates by number are dropped (first seen wins), and the
    /// result is returned oldest first. A failed lookup skips that commit.
    #[instrument(skip(self, hashes, lookup), fields(commit_count = hashes.len()))]
    pub async fn collect_pull_requests<L>(&mut self, hashes: &[String], lookup: &L) -> Vec<Change>
    where
        L: PullRequestLookup + ?Sized,
    {
        let total = hashes.len();
        let mut seen = HashSet::new();
        let mut pull_requests = Vec::new();

        for (index, sha) in hashes.iter().enumerate() {
            match lookup.pull_request_for_commit(sha).await {
                Ok(Some(pr)) => {
                    if seen.insert(pr.number) {
                        debug!(sha = %short_hash(sha), number = pr.number, "found pull request");
                        pull_requests.push(Change::PullRequest(pr));
                    }
                }
                Ok(None) => debug!(sha = %short_hash(sha), "no pull request for commit"),
                Err(e) => warn!(sha = %short_hash(sha), error = %e, "pull request lookup failed, skipping commit"),
            }

            let done = index + 1;
            if is_progress_step(done, total, self.progress_interval) {
                info!(done, total, found = pull_requests.len(), "looking up pull requests");
            }
            if let Some(callback) = self.on_progress.as_mut() {
                callback(done, total);
            }
        }

        pull_requests.reverse();
        pull_requests
    }
}
