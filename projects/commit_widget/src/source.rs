use anyhow::Result;
use async_trait::async_trait;
use interfaces_github_branch_commit::index::{fetch_last_commit, Commit, RepoBranch};
use reqwest::Client;

/// The asynchronous request/response seam between the refresh cycle and the
/// transport. The timeline only ever sees a `Commit` or a failure, so the
/// scheduling policy and the rendering layer stay swappable collaborators.
#[async_trait]
pub trait CommitSource: Send + Sync {
    async fn last_commit(&self, repo_branch: &RepoBranch) -> Result<Commit>;
}

/// Live source backed by the GitHub branches endpoint. One GET per call,
/// no retries, no caching; timeouts are the client's defaults.
pub struct GitHubCommitSource {
    client: Client,
}

impl GitHubCommitSource {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for GitHubCommitSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommitSource for GitHubCommitSource {
    async fn last_commit(&self, repo_branch: &RepoBranch) -> Result<Commit> {
        let commit = fetch_last_commit(&self.client, repo_branch).await?;
        Ok(commit)
    }
}
