use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

const API_ROOT: &str = "https://api.github.com";

/// The (account, repo, branch) triple identifying which commit to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoBranch {
    pub account: String,
    pub repo: String,
    pub branch: String,
}

impl RepoBranch {
    pub fn new(account: impl Into<String>, repo: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            repo: repo.into(),
            branch: branch.into(),
        }
    }
}

/// The three fields extracted from one branch response. `date` stays an
/// opaque string, it is displayed as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub message: String,
    pub author: String,
    pub date: String,
}

#[derive(Debug)]
pub struct GitHubRestResult {
    pub body: String,
    pub status: StatusCode,
}

pub fn branch_url(repo_branch: &RepoBranch) -> String {
    format!(
        "{API_ROOT}/repos/{}/{}/branches/{}",
        repo_branch.account, repo_branch.repo, repo_branch.branch
    )
}

pub async fn fetch_branch(
    client: &Client,
    repo_branch: &RepoBranch,
) -> Result<GitHubRestResult, FetchBranchError> {
    if repo_branch.account.is_empty() || repo_branch.repo.is_empty() || repo_branch.branch.is_empty() {
        return Err(FetchBranchError::EmptyField);
    }

    let response = client
        .get(branch_url(repo_branch))
        .header("User-Agent", "rust-client")
        .send()
        .await
        .map_err(|source| FetchBranchError::RequestSend { source })?;

    let status = response.status();

    let body = response
        .text()
        .await
        .map_err(|source| FetchBranchError::ResponseRead { source })?;

    Ok(GitHubRestResult { body, status })
}

#[derive(Debug, Error)]
pub enum FetchBranchError {
    #[error("Account, repo, and branch must all be non-empty")]
    EmptyField,

    #[error("RequestSend: {source}")]
    RequestSend {
        source: reqwest::Error,
    },

    #[error("ResponseRead: {source}")]
    ResponseRead {
        source: reqwest::Error,
    },
}

pub async fn fetch_last_commit(
    client: &Client,
    repo_branch: &RepoBranch,
) -> Result<Commit, FetchLastCommitError> {
    let GitHubRestResult { body, status } = fetch_branch(client, repo_branch).await?;

    if !status.is_success() {
        return Err(FetchLastCommitError::UnexpectedStatus { status });
    }

    last_commit_from_body(&body)
}

/// Extracts `commit.commit.{message, author.{name, date}}` from a branch
/// response body. Absence of any required field is a terminal parse failure,
/// no partial `Commit` is ever produced.
pub fn last_commit_from_body(body: &str) -> Result<Commit, FetchLastCommitError> {
    let parsed: BranchResponse = serde_json::from_str(body)?;

    let detail = parsed
        .commit
        .and_then(|outer| outer.commit)
        .ok_or(FetchLastCommitError::CommitFieldMissing)?;

    let message = detail
        .message
        .ok_or(FetchLastCommitError::MessageFieldMissing)?;

    let author = detail
        .author
        .ok_or(FetchLastCommitError::AuthorFieldMissing)?;

    let name = author.name.ok_or(FetchLastCommitError::AuthorFieldMissing)?;
    let date = author.date.ok_or(FetchLastCommitError::AuthorFieldMissing)?;

    Ok(Commit {
        message,
        author: name,
        date,
    })
}

#[derive(Debug, Error)]
pub enum FetchLastCommitError {
    #[error("FetchBranch: {source}")]
    FetchBranch {
        #[from]
        source: FetchBranchError,
    },

    #[error("Unexpected status from GitHub: {status}")]
    UnexpectedStatus {
        status: StatusCode,
    },

    #[error("DeserializeResponseBody: {source}")]
    DeserializeResponseBody {
        #[from]
        source: serde_json::Error,
    },

    #[error("Missing or malformed commit object in branch response")]
    CommitFieldMissing,

    #[error("Missing or malformed commit message in branch response")]
    MessageFieldMissing,

    #[error("Missing or malformed commit author in branch response")]
    AuthorFieldMissing,
}

#[derive(Deserialize)]
pub struct BranchResponse {
    pub commit: Option<BranchCommit>,
}

#[derive(Deserialize)]
pub struct BranchCommit {
    pub commit: Option<CommitDetail>,
}

#[derive(Deserialize)]
pub struct CommitDetail {
    pub message: Option<String>,
    pub author: Option<CommitAuthor>,
}

#[derive(Deserialize)]
pub struct CommitAuthor {
    pub name: Option<String>,
    pub date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branch_url_interpolates_the_triple() {
        let repo_branch = RepoBranch::new("apple", "swift", "master");
        assert_eq!(
            branch_url(&repo_branch),
            "https://api.github.com/repos/apple/swift/branches/master"
        );
    }

    #[test]
    fn well_formed_body_yields_the_three_leaf_values() {
        let body = r#"{"commit":{"commit":{"message":"Fixed stuff","author":{"name":"John Appleseed","date":"2020-06-23"}}}}"#;

        let commit = last_commit_from_body(body).unwrap();

        assert_eq!(commit.message, "Fixed stuff");
        assert_eq!(commit.author, "John Appleseed");
        assert_eq!(commit.date, "2020-06-23");
    }

    #[test]
    fn extra_fields_in_the_response_are_ignored() {
        let body = r#"{
            "name": "master",
            "commit": {
                "sha": "abc123",
                "commit": {
                    "message": "Fixed stuff",
                    "author": {"name": "John Appleseed", "date": "2020-06-23", "email": "ja@example.com"},
                    "committer": {"name": "GitHub"}
                }
            },
            "protected": true
        }"#;

        let commit = last_commit_from_body(body).unwrap();
        assert_eq!(commit.author, "John Appleseed");
    }

    #[test]
    fn missing_author_name_is_a_parse_failure() {
        let body = r#"{"commit":{"commit":{"message":"Fixed stuff","author":{"date":"2020-06-23"}}}}"#;

        let err = last_commit_from_body(body).unwrap_err();
        assert!(matches!(err, FetchLastCommitError::AuthorFieldMissing));
    }

    #[test]
    fn missing_inner_commit_is_a_parse_failure() {
        let body = r#"{"commit":{}}"#;

        let err = last_commit_from_body(body).unwrap_err();
        assert!(matches!(err, FetchLastCommitError::CommitFieldMissing));
    }

    #[test]
    fn missing_message_is_a_parse_failure() {
        let body = r#"{"commit":{"commit":{"author":{"name":"John Appleseed","date":"2020-06-23"}}}}"#;

        let err = last_commit_from_body(body).unwrap_err();
        assert!(matches!(err, FetchLastCommitError::MessageFieldMissing));
    }

    #[test]
    fn wrong_typed_message_is_a_parse_failure() {
        let body = r#"{"commit":{"commit":{"message":42,"author":{"name":"John Appleseed","date":"2020-06-23"}}}}"#;

        let err = last_commit_from_body(body).unwrap_err();
        assert!(matches!(err, FetchLastCommitError::DeserializeResponseBody { .. }));
    }

    #[test]
    fn non_json_body_is_a_parse_failure() {
        let err = last_commit_from_body("rate limit exceeded").unwrap_err();
        assert!(matches!(err, FetchLastCommitError::DeserializeResponseBody { .. }));
    }

    #[tokio::test]
    async fn empty_identity_field_is_rejected_before_any_request() {
        let client = Client::new();
        let repo_branch = RepoBranch::new("apple", "", "master");

        let err = fetch_branch(&client, &repo_branch).await.unwrap_err();
        assert!(matches!(err, FetchBranchError::EmptyField));
    }
}
