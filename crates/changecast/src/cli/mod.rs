//! CLI definition and command handling

pub mod output;
mod pipeline;
mod settings;

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use changecast_core::config::load_config_or_default;
use changecast_core::types::CollectionMode;

pub use settings::Settings;

/// Changecast - publish release changelogs built from git history
#[derive(Debug, Parser)]
#[command(name = "changecast")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Webhook the changelog is uploaded to
    #[arg(
        long,
        env = "CHANGECAST_WEBHOOK_URL",
        value_name = "URL",
        hide_env_values = true,
        required_unless_present = "dry_run"
    )]
    pub webhook_url: Option<String>,

    /// GitHub token for pull request lookups
    #[arg(long, env = "GITHUB_TOKEN", value_name = "TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Drop changes whose title matches this regex (repeatable)
    #[arg(long = "ignore", value_name = "REGEX")]
    pub ignore: Vec<String>,

    /// Path of the tracked submodule
    #[arg(long, value_name = "PATH")]
    pub submodule_path: Option<String>,

    /// List raw commits or merged pull requests
    #[arg(long, value_name = "MODE")]
    pub mode: Option<CollectionMode>,

    /// Git remote identifying the hosted repository
    #[arg(long, value_name = "NAME")]
    pub remote: Option<String>,

    /// Build and print the changelog without publishing it
    #[arg(long)]
    pub dry_run: bool,

    /// Also write the changelog to a file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Working directory
    #[arg(short = 'C', long)]
    pub directory: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress output except errors and the changelog itself
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> anyhow::Result<()> {
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }
        let cwd = std::env::current_dir()?;

        let (config, config_path) = load_config_or_default(&cwd)?;
        if let Some(path) = &config_path {
            info!(path = %path.display(), "loaded configuration");
        }

        let settings = Settings::resolve(&self, config)?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        runtime.block_on(pipeline::run(&settings, &cwd, self.quiet))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("changecast").chain(args.iter().copied()))
    }

    #[test]
    fn test_full_invocation() {
        let cli = parse(&[
            "--webhook-url",
            "https://discord.com/api/webhooks/1/abc",
            "--github-token",
            "tok",
            "--ignore",
            "^chore:",
            "--ignore",
            "^ci:",
            "--submodule-path",
            "lib/Other",
            "--mode",
            "commits",
            "--remote",
            "upstream",
            "-o",
            "CHANGELOG.md",
        ])
        .unwrap();

        assert_eq!(cli.webhook_url.as_deref(), Some("https://discord.com/api/webhooks/1/abc"));
        assert_eq!(cli.github_token.as_deref(), Some("tok"));
        assert_eq!(cli.ignore, vec!["^chore:", "^ci:"]);
        assert_eq!(cli.submodule_path.as_deref(), Some("lib/Other"));
        assert_eq!(cli.mode, Some(CollectionMode::Commits));
        assert_eq!(cli.remote.as_deref(), Some("upstream"));
        assert_eq!(cli.output, Some(PathBuf::from("CHANGELOG.md")));
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_dry_run_needs_no_webhook() {
        let cli = parse(&["--dry-run"]).unwrap();
        assert!(cli.dry_run);
        assert!(cli.mode.is_none());
    }

    #[test]
    fn test_mode_aliases() {
        let cli = parse(&["--dry-run", "--mode", "prs"]).unwrap();
        assert_eq!(cli.mode, Some(CollectionMode::PullRequests));
        assert!(parse(&["--dry-run", "--mode", "tags"]).is_err());
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(parse(&["--dry-run", "-v", "-q"]).is_err());
    }
}
