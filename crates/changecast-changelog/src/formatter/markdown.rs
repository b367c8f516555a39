//! Markdown changelog formatter

use tracing::{debug, instrument};

use changecast_core::types::{Change, CollectionMode, CommitChange, PullRequestChange, RepoSlug};
use changecast_git::types::short_hash;

use super::ChangelogFormatter;
use crate::context::{ReleaseContext, SubmoduleInfo};

/// Markdown changelog formatter
#[derive(Debug, Clone, Default)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Create a new markdown formatter
    pub fn new() -> Self {
        Self
    }
}

fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

fn change_noun(mode: CollectionMode, count: usize) -> String {
    match mode {
        CollectionMode::Commits => plural(count, "commit", "commits"),
        CollectionMode::PullRequests => plural(count, "PR", "PRs"),
    }
}

fn linked_hash(web_url: &str, upstream: Option<&RepoSlug>, hash: &str) -> String {
    let short = short_hash(hash);
    match upstream {
        Some(slug) => format!("[`{}`]({})", short, slug.commit_url(web_url, hash)),
        None => format!("`{}`", short),
    }
}

/// Submodule callout; empty unless the submodule advanced or newly appeared
fn submodule_section(web_url: &str, info: &SubmoduleInfo) -> Option<String> {
    let upstream = info.upstream.as_ref();

    match (&info.snapshot.old, &info.snapshot.new) {
        (Some(old), Some(new)) if old != new => {
            let mut section = format!(
                "It ships with an updated **{}** at {}.",
                info.name,
                linked_hash(web_url, upstream, new)
            );
            if let Some(slug) = upstream {
                section.push_str(&format!(
                    " [Click here]({}) to see all {} changes.",
                    slug.compare_url(web_url, old, new),
                    info.name
                ));
            }
            Some(section)
        }
        (None, Some(new)) => Some(format!(
            "It ships with **{}** at {}.",
            info.name,
            linked_hash(web_url, upstream, new)
        )),
        _ => None,
    }
}

fn commit_bullet(web_url: &str, repo: &RepoSlug, commit: &CommitChange) -> String {
    format!(
        "* {} (by **{}** in [{}]({}))",
        commit.message,
        commit.author,
        commit.short_hash,
        repo.commit_url(web_url, &commit.short_hash)
    )
}

fn pull_request_bullet(pr: &PullRequestChange) -> String {
    format!("* {} ([#{}]({}) by **{}**)", pr.title, pr.number, pr.url, pr.author)
}

impl ChangelogFormatter for MarkdownFormatter {
    #[instrument(skip(self, context), fields(version = %context.tags.latest, change_count = context.changes.len()))]
    fn format(&self, context: &ReleaseContext) -> String {
        let tags = &context.tags;
        let repo = &context.repo;
        let web_url = context.web_url.as_str();
        let mut output = String::new();

        output.push_str(&format!("# {} v{}\n\n", repo.repo, tags.latest));

        output.push_str(&format!(
            "This release of {} includes **{} from {}**.\n",
            repo.repo,
            change_noun(context.mode, context.changes.len()),
            plural(context.contributor_count(), "contributor", "contributors"),
        ));
        output.push_str(&format!(
            "[Click here]({}) to see all changes since v{}.\n\n",
            repo.compare_url(web_url, &tags.previous, &tags.latest),
            tags.previous
        ));

        let submodule = context
            .submodule
            .as_ref()
            .and_then(|info| submodule_section(web_url, info));
        if let Some(section) = submodule {
            output.push_str(&format!("{}\n\n", section));
        }

        if !context.changes.is_empty() {
            output.push_str("## Changes\n\n");
            for change in &context.changes {
                let bullet = match change {
                    Change::Commit(commit) => commit_bullet(web_url, repo, commit),
                    Change::PullRequest(pr) => pull_request_bullet(pr),
                };
                output.push_str(&bullet);
                output.push('\n');
            }
        }

        debug!(output_len = output.len(), "markdown changelog formatted");
        output
    }

    fn extension(&self) -> &'static str {
        "md"
    }
}
