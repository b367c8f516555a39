//! Changelog pipeline: locate, resolve, collect, filter, render, publish

use std::path::Path;

use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, instrument, warn};

use changecast_changelog::{
    collect_commits, is_progress_step, ChangeCollector, ChangelogFormatter, MarkdownFormatter,
    ReleaseContext, SubmoduleInfo,
};
use changecast_core::types::{CollectionMode, RepoSlug};
use changecast_git::GitRepo;
use changecast_remote::{GitHubClient, WebhookPublisher};

use super::output;
use super::settings::Settings;

const SEPARATOR: &str = "------------------------------------------------------------";

/// A rendered changelog ready to publish
#[derive(Debug, Clone)]
pub struct Release {
    pub repo: RepoSlug,
    pub version: String,
    pub previous: String,
    pub file_name: String,
    pub document: String,
}

/// How pull request lookup progress reaches the user
pub enum LookupProgress {
    /// Nothing is shown
    Hidden,
    /// A progress bar on an interactive terminal
    Bar(ProgressBar),
    /// A status line every `interval` lookups, for CI logs and pipes
    Lines { interval: usize },
}

impl LookupProgress {
    /// Pick the display for stderr: a bar on a terminal, status lines otherwise
    pub fn for_stderr(quiet: bool, interval: usize) -> Self {
        if quiet {
            Self::Hidden
        } else if console::Term::stderr().is_term() {
            Self::Bar(ProgressBar::new(0))
        } else {
            Self::Lines { interval }
        }
    }

    fn start(&self, total: usize) -> anyhow::Result<()> {
        if let Self::Bar(bar) = self {
            bar.set_length(total as u64);
            bar.set_style(
                ProgressStyle::with_template("{spinner} {msg} [{bar:30}] {pos}/{len}")?
                    .progress_chars("=> "),
            );
            bar.set_message("Looking up pull requests");
        }
        Ok(())
    }

    fn update(&self, done: usize, total: usize) {
        match self {
            Self::Bar(bar) => bar.set_position(done as u64),
            Self::Lines { .. } => {
                if let Some(line) = self.status_line(done, total) {
                    output::info(&line);
                }
            }
            Self::Hidden => {}
        }
    }

    /// Text printed after `done` of `total` lookups, if this is a reporting step
    fn status_line(&self, done: usize, total: usize) -> Option<String> {
        match self {
            Self::Lines { interval } if is_progress_step(done, total, *interval) => Some(format!(
                "Looked up pull requests for {}/{} commits",
                done, total
            )),
            _ => None,
        }
    }

    fn finish(&self) {
        if let Self::Bar(bar) = self {
            bar.finish_and_clear();
        }
    }
}

/// Run the whole pipeline from `cwd`
pub async fn run(settings: &Settings, cwd: &Path, quiet: bool) -> anyhow::Result<()> {
    let progress = LookupProgress::for_stderr(quiet, settings.progress_interval);

    let release = build_release(settings, cwd, &progress).await?;
    if !quiet {
        output::info(&format!(
            "Built changelog for {} {} -> {}",
            release.repo,
            output::tag_style().apply_to(&release.previous),
            output::tag_style().apply_to(&release.version)
        ));
    }

    println!("{}", SEPARATOR);
    print!("{}", release.document);
    println!("{}", SEPARATOR);

    if let Some(path) = &settings.output {
        std::fs::write(path, &release.document)
            .with_context(|| format!("writing changelog to {}", path.display()))?;
        if !quiet {
            output::success(&format!(
                "Wrote changelog to {}",
                output::path_style().apply_to(path.display())
            ));
        }
    }

    if settings.dry_run {
        if !quiet {
            output::warning("Dry run, changelog not published");
        }
        return Ok(());
    }

    publish(settings, &release).await?;
    if !quiet {
        output::success(&format!(
            "Published {}",
            output::version_style().apply_to(&release.file_name)
        ));
    }
    Ok(())
}

/// Build the changelog document for the latest release pair
#[instrument(skip_all, fields(mode = %settings.mode))]
pub async fn build_release(
    settings: &Settings,
    cwd: &Path,
    progress: &LookupProgress,
) -> anyhow::Result<Release> {
    let repo = GitRepo::discover(cwd)?;
    let slug = repo.repo_slug(&settings.remote)?;
    let tags = repo.latest_release_pair(&settings.legacy_tag_prefix)?;

    let submodule_path = settings.submodule.path.as_str();
    let snapshot = repo.submodule_snapshot(&tags, submodule_path);
    let upstream = submodule_upstream(settings, &repo);

    let changes = match settings.mode {
        CollectionMode::Commits => {
            let commits = repo.commits_between(&tags.previous, &tags.latest)?;
            collect_commits(&commits)
        }
        CollectionMode::PullRequests => {
            let hashes = repo.commit_hashes_between(&tags.previous, &tags.latest)?;
            let client = GitHubClient::new(slug.clone())
                .with_api_url(settings.github.api_url.as_str())
                .with_token(settings.github_token.clone())
                .with_timeout(settings.timeout());

            if settings.github_token.is_none() {
                warn!("no GitHub token given, unauthenticated requests are heavily rate limited");
            }

            progress.start(hashes.len())?;
            let mut collector = ChangeCollector::new(settings.progress_interval)
                .with_progress(|done, total| progress.update(done, total));
            let changes = collector.collect_pull_requests(&hashes, &client).await;
            progress.finish();
            changes
        }
    };

    let collected = changes.len();
    let changes = settings.filter.apply(changes);
    info!(collected, kept = changes.len(), "collected changes");

    let context = ReleaseContext::new(tags, slug, settings.mode, changes)
        .with_submodule(SubmoduleInfo {
            name: settings.submodule.display_name(),
            upstream,
            snapshot,
        })
        .with_web_url(settings.github.web_url());

    let formatter = MarkdownFormatter::new();
    let version = context.version().to_string();

    Ok(Release {
        file_name: formatter.file_name(&version),
        document: formatter.format(&context),
        repo: context.repo.clone(),
        previous: context.tags.previous.clone(),
        version,
    })
}

/// Configured upstream first, then the `.gitmodules` declaration
fn submodule_upstream(settings: &Settings, repo: &GitRepo) -> Option<RepoSlug> {
    if let Some(configured) = &settings.submodule.repository {
        match configured.parse::<RepoSlug>() {
            Ok(slug) => return Some(slug),
            Err(e) => warn!(error = %e, "ignoring configured submodule repository"),
        }
    }
    repo.submodule_upstream(&settings.submodule.path)
}

async fn publish(settings: &Settings, release: &Release) -> anyhow::Result<()> {
    let url = settings
        .webhook_url
        .as_deref()
        .context("no webhook URL to publish to")?;

    let publisher = WebhookPublisher::new(url)?.with_timeout(settings.timeout());
    publisher
        .publish(
            &settings.publish.announcement_for(&release.version),
            &release.file_name,
            &release.document,
        )
        .await?;
    Ok(())
}
