use chrono::{DateTime, Duration, Utc};
use interfaces_github_branch_commit::index::{Commit, RepoBranch};
use tracing::warn;

use crate::config::WidgetConfig;
use crate::source::CommitSource;

/// Policy hint only. The host may refresh earlier or later.
pub const REFRESH_INTERVAL_MINUTES: i64 = 5;

/// One rendered entry: the commit observed at `date` for `branch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastCommit {
    pub date: DateTime<Utc>,
    pub commit: Commit,
    pub branch: RepoBranch,
}

/// What one refresh cycle hands back to the host: the entry to render and
/// the instant after which the next refresh should run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetRefresh {
    pub entry: LastCommit,
    pub refresh_after: DateTime<Utc>,
}

/// The sentinel substituted whenever fetching or configuration fails. An
/// entry always carries a fully populated commit.
pub fn failure_commit() -> Commit {
    Commit {
        message: "Failed to load commits".to_string(),
        author: String::new(),
        date: String::new(),
    }
}

fn unknown_branch() -> RepoBranch {
    RepoBranch::new("???", "???", "???")
}

fn refresh_interval() -> Duration {
    Duration::minutes(REFRESH_INTERVAL_MINUTES)
}

/// Hardcoded-identity variant: one stateless fetch/wrap cycle. Any source
/// failure collapses to the sentinel commit while the real identity is kept.
pub async fn refresh<S>(source: &S, repo_branch: &RepoBranch) -> WidgetRefresh
where
    S: CommitSource + ?Sized,
{
    let now = Utc::now();

    let commit = match source.last_commit(repo_branch).await {
        Ok(commit) => commit,
        Err(err) => {
            warn!(
                "Failed to fetch latest commit for {}/{} ({}): {err:#}",
                repo_branch.account, repo_branch.repo, repo_branch.branch
            );
            failure_commit()
        }
    };

    WidgetRefresh {
        entry: LastCommit {
            date: now,
            commit,
            branch: repo_branch.clone(),
        },
        refresh_after: now + refresh_interval(),
    }
}

/// Configurable variant: an incomplete configuration short-circuits to the
/// sentinel with placeholder identity, without touching the network.
pub async fn refresh_configured<S>(source: &S, config: &WidgetConfig) -> WidgetRefresh
where
    S: CommitSource + ?Sized,
{
    match config.resolve() {
        Some(repo_branch) => refresh(source, &repo_branch).await,
        None => {
            let now = Utc::now();
            WidgetRefresh {
                entry: LastCommit {
                    date: now,
                    commit: failure_commit(),
                    branch: unknown_branch(),
                },
                refresh_after: now + refresh_interval(),
            }
        }
    }
}

/// Static preview shown before any data is available.
pub fn placeholder_entry() -> LastCommit {
    LastCommit {
        date: Utc::now(),
        commit: Commit {
            message: "message".to_string(),
            author: "author".to_string(),
            date: "date".to_string(),
        },
        branch: RepoBranch::new("account", "repo", "branch"),
    }
}

/// Fixed example snapshot for configuration galleries.
pub fn snapshot_entry() -> LastCommit {
    LastCommit {
        date: Utc::now(),
        commit: Commit {
            message: "Fixed stuff".to_string(),
            author: "John Appleseed".to_string(),
            date: "2020-06-23".to_string(),
        },
        branch: RepoBranch::new("apple", "swift", "master"),
    }
}
