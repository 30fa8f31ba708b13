use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use interfaces_github_branch_commit::index::RepoBranch;
use projects_commit_widget::config::WidgetConfig;
use projects_commit_widget::render::render_text;
use projects_commit_widget::source::GitHubCommitSource;
use projects_commit_widget::timeline::{refresh, refresh_configured};
use thiserror::Error;
use tracing::info;
use utils_trace::tracing_init;

enum Mode {
    Pinned(RepoBranch),
    Configured(WidgetConfig),
}

#[derive(Debug, Error)]
pub enum MainError {
    #[error("TracingInit: {source}")]
    TracingInit {
        #[source]
        source: utils_trace::TracingInitError,
    },
}

#[tokio::main]
async fn main() -> Result<(), MainError> {
    tracing_init("info")
        .map_err(|source| MainError::TracingInit { source })?;

    // No args: the pinned-repository variant. Otherwise up to three args
    // form the user configuration; missing ones leave it incomplete.
    let mut args = std::env::args().skip(1).peekable();
    let mode = if args.peek().is_none() {
        Mode::Pinned(RepoBranch::new("apple", "swift", "master"))
    } else {
        Mode::Configured(WidgetConfig {
            account: args.next(),
            repo: args.next(),
            branch: args.next(),
        })
    };

    let source = GitHubCommitSource::new();

    loop {
        let produced = match &mode {
            Mode::Pinned(repo_branch) => refresh(&source, repo_branch).await,
            Mode::Configured(config) => refresh_configured(&source, config).await,
        };

        println!("{}", render_text(&produced.entry));
        println!();

        let wait = (produced.refresh_after - Utc::now())
            .to_std()
            .unwrap_or(Duration::ZERO);

        info!("Next refresh in {}s", wait.as_secs());
        tokio::time::sleep(wait).await;
    }
}
